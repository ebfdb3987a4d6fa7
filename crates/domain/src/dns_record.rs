pub mod record_type;

pub use record_type::RecordType;

/// Internet class.
pub const CLASS_IN: u16 = 1;

/// QCLASS wildcard (RFC 1035 §3.2.5).
pub const CLASS_ANY: u16 = 255;

/// TTL carried by every answer this server emits.
pub const ANSWER_TTL: u32 = 300;
