use std::sync::Arc;
use tld_dns_application::use_cases::{LoadZoneUseCase, MatchQuestionsUseCase};
use tld_dns_domain::Config;
use tld_dns_infrastructure::dns::DnsServerHandler;
use tld_dns_infrastructure::zone::CsvZoneSource;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
}

impl DnsServices {
    /// Loads the zone and wires the request handler. Fails before any socket is bound.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        info!(
            table = %config.zone.table_path,
            tld = %config.zone.tld_path,
            "Loading zone"
        );

        let source = Arc::new(CsvZoneSource::from_config(&config.zone));
        let zone = Arc::new(LoadZoneUseCase::new(source).execute()?);

        let matcher = Arc::new(MatchQuestionsUseCase::new(zone, config.zone.tld_match));

        Ok(Self {
            handler: DnsServerHandler::new(matcher),
        })
    }
}
