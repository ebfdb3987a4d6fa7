use crate::ports::ZoneSource;
use std::sync::Arc;
use tld_dns_domain::{DomainError, Zone};
use tracing::info;

pub struct LoadZoneUseCase {
    source: Arc<dyn ZoneSource>,
}

impl LoadZoneUseCase {
    pub fn new(source: Arc<dyn ZoneSource>) -> Self {
        Self { source }
    }

    /// Builds the zone once; any error here must stop the server from starting.
    pub fn execute(&self) -> Result<Zone, DomainError> {
        let served_tld = self.source.load_served_tld()?;
        let entries = self.source.load_entries()?;

        if entries.is_empty() {
            return Err(DomainError::StartupData(format!(
                "zone table {} has no entries",
                self.source.describe()
            )));
        }

        let zone = Zone::new(served_tld, entries);

        info!(
            source = %self.source.describe(),
            tld = %zone.served_tld(),
            entries = zone.len(),
            "Domain name table loaded"
        );
        for entry in zone.entries() {
            info!(host = %entry.host, address = %entry.address, "Zone entry");
        }

        Ok(zone)
    }
}
