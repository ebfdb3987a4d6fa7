//! tld-dns Infrastructure Layer
pub mod dns;
pub mod zone;
