use crate::zone::TldMatchPolicy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneConfig {
    /// CSV host table: a header line, then `host,ipv4` lines.
    #[serde(default = "default_table_path")]
    pub table_path: String,

    /// Single-line file holding the served TLD label.
    #[serde(default = "default_tld_path")]
    pub tld_path: String,

    #[serde(default)]
    pub tld_match: TldMatchPolicy,
}

impl Default for ZoneConfig {
    fn default() -> Self {
        Self {
            table_path: default_table_path(),
            tld_path: default_tld_path(),
            tld_match: TldMatchPolicy::default(),
        }
    }
}

fn default_table_path() -> String {
    "hosts.csv".to_string()
}

fn default_tld_path() -> String {
    "tld.conf".to_string()
}
