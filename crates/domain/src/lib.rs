//! tld-dns Domain Layer
pub mod config;
pub mod dns_message;
pub mod dns_record;
pub mod errors;
pub mod zone;

pub use config::{CliOverrides, Config, ConfigError, LogFormat};
pub use dns_message::{HeaderFlags, MatchResult, MessageHeader, Question, QuestionName};
pub use dns_record::RecordType;
pub use errors::DomainError;
pub use zone::{tld_matches, tld_matches_ignore_case, TldMatchPolicy, Zone, ZoneEntry};
