use tld_dns_domain::{DomainError, ZoneEntry};

/// Startup-time provider of the served TLD and the host table.
pub trait ZoneSource: Send + Sync {
    /// Host entries in the order they appear in the source.
    fn load_entries(&self) -> Result<Vec<ZoneEntry>, DomainError>;

    fn load_served_tld(&self) -> Result<String, DomainError>;

    /// Human-readable origin, used in log lines.
    fn describe(&self) -> String;
}
