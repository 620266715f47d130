use clap::Parser;
use ferrous_lookup_application::use_cases::{LookupAddrUseCase, Upstream};
use ferrous_lookup_domain::{CliOverrides, DomainError, RecordType};
use ferrous_lookup_infrastructure::dns::DnsForwarder;
use std::sync::Arc;
use tracing::{debug, error};

mod bootstrap;
mod output;

#[derive(Parser)]
#[command(name = "ferrous-lookup")]
#[command(version)]
#[command(about = "Ferrous Lookup - resolve names by talking DNS over UDP")]
struct Cli {
    /// Domain name to resolve (an IP address with --reverse)
    name: String,

    /// Record type (A, AAAA, CNAME, MX, NS, PTR, TXT)
    #[arg(short = 't', long = "type", default_value = "A")]
    record_type: RecordType,

    /// DNS server as host:port
    #[arg(short = 's', long)]
    server: Option<String>,

    /// Treat NAME as an IP address and look up its PTR records
    #[arg(short = 'x', long)]
    reverse: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Per-attempt timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        server: cli.server.clone(),
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    bootstrap::init_logging(&config);

    let forwarder = Arc::new(DnsForwarder::from_config(&config.resolver));
    let upstream = Upstream::new(forwarder, config.resolver.server.as_str());

    if cli.reverse {
        return lookup_reverse(upstream, &cli.name).await;
    }

    let (name, record_type) = (cli.name, cli.record_type);
    print_banner(&upstream, record_type, &name);

    match upstream.query(&name, record_type, None).await {
        Ok(response) => {
            output::print_response(&response);
            Ok(())
        }
        Err(DomainError::NoAnswer) => {
            debug!(name = %name, "Server returned no answer");
            println!("Answer Section: No records found.");
            Ok(())
        }
        Err(e) => {
            error!(name = %name, error = %e, "Lookup failed");
            Err(anyhow::anyhow!("Error resolving {}: {}", name, e))
        }
    }
}

async fn lookup_reverse(upstream: Upstream, address: &str) -> anyhow::Result<()> {
    print_banner(&upstream, RecordType::PTR, address);

    match LookupAddrUseCase::new(upstream).execute(address, None).await {
        Ok(names) => {
            output::print_names("Answer Section", &names);
            Ok(())
        }
        Err(DomainError::NoAnswer) => {
            debug!(address = %address, "Server returned no answer");
            println!("Answer Section: No records found.");
            Ok(())
        }
        Err(e) => {
            error!(address = %address, error = %e, "Reverse lookup failed");
            Err(anyhow::anyhow!("Error resolving {}: {}", address, e))
        }
    }
}

fn print_banner(upstream: &Upstream, record_type: RecordType, name: &str) {
    println!(
        "Querying {} for {} records of {}...",
        upstream.default_server(),
        record_type,
        name
    );
    println!("------------------------------------");
}
