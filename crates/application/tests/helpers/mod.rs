#![allow(dead_code)]

use std::net::Ipv4Addr;
use std::sync::Mutex;
use tld_dns_application::ports::ZoneSource;
use tld_dns_domain::{DomainError, Question, QuestionName, RecordType, ZoneEntry};

pub struct MockZoneSource {
    tld: Result<String, DomainError>,
    entries: Result<Vec<ZoneEntry>, DomainError>,
    loads: Mutex<usize>,
}

impl MockZoneSource {
    pub fn new(tld: &str, entries: Vec<(&str, [u8; 4])>) -> Self {
        Self {
            tld: Ok(tld.to_string()),
            entries: Ok(entries
                .into_iter()
                .map(|(host, ip)| ZoneEntry::new(host, Ipv4Addr::from(ip)))
                .collect()),
            loads: Mutex::new(0),
        }
    }

    pub fn with_tld_error(mut self, error: DomainError) -> Self {
        self.tld = Err(error);
        self
    }

    pub fn with_entries_error(mut self, error: DomainError) -> Self {
        self.entries = Err(error);
        self
    }

    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap()
    }
}

impl ZoneSource for MockZoneSource {
    fn load_entries(&self) -> Result<Vec<ZoneEntry>, DomainError> {
        *self.loads.lock().unwrap() += 1;
        self.entries.clone()
    }

    fn load_served_tld(&self) -> Result<String, DomainError> {
        self.tld.clone()
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}

pub fn host_tld_question(offset: usize, host: &str, tld: &str) -> Question {
    Question {
        offset,
        name: QuestionName::HostTld {
            host: host.as_bytes().to_vec(),
            tld: tld.as_bytes().to_vec(),
        },
        qtype: RecordType::A,
        qclass: 1,
    }
}
