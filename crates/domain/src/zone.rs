use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// RFC 1035 §2.3.4 label limit.
pub const MAX_LABEL_LEN: usize = 63;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneEntry {
    pub host: String,
    pub address: Ipv4Addr,
}

impl ZoneEntry {
    pub fn new(host: impl Into<String>, address: Ipv4Addr) -> Self {
        Self {
            host: host.into(),
            address,
        }
    }
}

/// How a question's TLD label is compared against the served TLD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TldMatchPolicy {
    #[default]
    Exact,
    IgnoreAsciiCase,
}

/// Byte-exact TLD comparison.
pub fn tld_matches(candidate: &[u8], served: &[u8]) -> bool {
    candidate.len() == served.len() && candidate == served
}

pub fn tld_matches_ignore_case(candidate: &[u8], served: &[u8]) -> bool {
    candidate.len() == served.len() && candidate.eq_ignore_ascii_case(served)
}

/// The host table served under one TLD. Built once at startup, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Zone {
    served_tld: String,
    entries: Vec<ZoneEntry>,
}

impl Zone {
    pub fn new(served_tld: impl Into<String>, entries: Vec<ZoneEntry>) -> Self {
        Self {
            served_tld: served_tld.into(),
            entries,
        }
    }

    pub fn served_tld(&self) -> &str {
        &self.served_tld
    }

    /// Entries in load order.
    pub fn entries(&self) -> &[ZoneEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn serves_tld(&self, tld: &[u8], policy: TldMatchPolicy) -> bool {
        match policy {
            TldMatchPolicy::Exact => tld_matches(tld, self.served_tld.as_bytes()),
            TldMatchPolicy::IgnoreAsciiCase => {
                tld_matches_ignore_case(tld, self.served_tld.as_bytes())
            }
        }
    }

    /// Every entry whose host label equals `host`, most recently loaded first.
    pub fn lookup(&self, host: &[u8]) -> Vec<&ZoneEntry> {
        self.entries
            .iter()
            .rev()
            .filter(|entry| {
                entry.host.len() == host.len() && entry.host.as_bytes() == host
            })
            .collect()
    }
}
