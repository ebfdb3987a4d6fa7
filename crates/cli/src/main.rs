use clap::Parser;
use tld_dns_domain::CliOverrides;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "tld-dns")]
#[command(version)]
#[command(about = "tld-dns - authoritative A-record responder for a single top-level domain")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Host table (CSV: header line, then host,ipv4)
    #[arg(long, value_name = "FILE")]
    zone_table: Option<String>,

    /// File holding the served TLD on its first line
    #[arg(long, value_name = "FILE")]
    tld_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        zone_table: cli.zone_table,
        tld_file: cli.tld_file,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config.logging);

    info!("Starting tld-dns v{}", env!("CARGO_PKG_VERSION"));

    let dns_services = di::DnsServices::new(&config)?;

    server::start_dns_server(
        config.server.dns_addr()?,
        config.server.recv_buffer_size,
        dns_services.handler,
    )
    .await?;

    info!("Server shutdown complete");
    Ok(())
}
