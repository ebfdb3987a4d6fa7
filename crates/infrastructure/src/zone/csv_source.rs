use std::fs::File;
use std::io::{self, BufRead, BufReader, ErrorKind};
use std::net::Ipv4Addr;
use std::path::{Path, PathBuf};
use tld_dns_application::ports::ZoneSource;
use tld_dns_domain::config::ZoneConfig;
use tld_dns_domain::zone::MAX_LABEL_LEN;
use tld_dns_domain::{DomainError, ZoneEntry};

/// Zone backed by two files: a `host,ipv4` CSV table and a one-line TLD file.
pub struct CsvZoneSource {
    table_path: PathBuf,
    tld_path: PathBuf,
}

impl CsvZoneSource {
    pub fn new(table_path: impl Into<PathBuf>, tld_path: impl Into<PathBuf>) -> Self {
        Self {
            table_path: table_path.into(),
            tld_path: tld_path.into(),
        }
    }

    pub fn from_config(config: &ZoneConfig) -> Self {
        Self::new(&config.table_path, &config.tld_path)
    }
}

impl ZoneSource for CsvZoneSource {
    fn load_entries(&self) -> Result<Vec<ZoneEntry>, DomainError> {
        parse_zone_table(open(&self.table_path)?)
    }

    fn load_served_tld(&self) -> Result<String, DomainError> {
        parse_served_tld(open(&self.tld_path)?)
    }

    fn describe(&self) -> String {
        format!(
            "{} (tld from {})",
            self.table_path.display(),
            self.tld_path.display()
        )
    }
}

fn open(path: &Path) -> Result<BufReader<File>, DomainError> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|e| DomainError::StartupIo(format!("{}: {}", path.display(), e)))
}

/// Parses a host table: one header line, then `host,ipv4` per line.
///
/// Blank lines are skipped. Entries keep their file order.
pub fn parse_zone_table<R: BufRead>(reader: R) -> Result<Vec<ZoneEntry>, DomainError> {
    let mut entries = Vec::new();

    for (index, line) in reader.lines().enumerate().skip(1) {
        let line_no = index + 1;
        let line = line.map_err(|e| line_error(line_no, e))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let (host, address) = line.split_once(',').ok_or_else(|| {
            DomainError::StartupData(format!("line {}: expected `host,address`", line_no))
        })?;

        let host = host.trim();
        validate_label(host).map_err(|reason| {
            DomainError::StartupData(format!("line {}: host {}", line_no, reason))
        })?;

        let address = address.trim();
        let address = address.parse::<Ipv4Addr>().map_err(|_| {
            DomainError::StartupData(format!(
                "line {}: invalid IPv4 address '{}'",
                line_no, address
            ))
        })?;

        entries.push(ZoneEntry::new(host, address));
    }

    Ok(entries)
}

/// Reads the served TLD from the first line. Surrounding dots are dropped.
pub fn parse_served_tld<R: BufRead>(reader: R) -> Result<String, DomainError> {
    let line = reader
        .lines()
        .next()
        .transpose()
        .map_err(|e| line_error(1, e))?
        .unwrap_or_default();

    let tld = line.trim().trim_matches('.');
    validate_label(tld).map_err(|reason| DomainError::StartupData(format!("TLD {}", reason)))?;

    Ok(tld.to_string())
}

/// Undecodable text is bad data; anything else is a failed read.
fn line_error(line_no: usize, e: io::Error) -> DomainError {
    match e.kind() {
        ErrorKind::InvalidData => {
            DomainError::StartupData(format!("line {}: not valid UTF-8", line_no))
        }
        _ => DomainError::StartupIo(format!("line {}: {}", line_no, e)),
    }
}

fn validate_label(label: &str) -> Result<(), String> {
    if label.is_empty() {
        return Err("label is empty".to_string());
    }
    if label.len() > MAX_LABEL_LEN {
        return Err(format!(
            "label '{}' exceeds {} bytes",
            label, MAX_LABEL_LEN
        ));
    }
    if label.contains('.') {
        return Err(format!("'{}' must be a single label", label));
    }
    Ok(())
}
