use clap::Parser;
use ferrous_doh_api::AppState;
use ferrous_doh_application::ports::ResponseCachePort;
use ferrous_doh_domain::CliOverrides;
use std::sync::Arc;
use tracing::info;

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "ferrous-doh")]
#[command(version)]
#[command(about = "Ferrous DoH - DNS-over-HTTPS forwarding proxy that races upstream providers")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// HTTP listen port
    #[arg(short = 'p', long)]
    port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        port: cli.port,
        bind_address: cli.bind.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config)?;

    info!("Starting Ferrous DoH v{}", env!("CARGO_PKG_VERSION"));
    bootstrap::log_config_source(cli.config.as_deref());

    let services = di::DohServices::new(&config);

    let app_state = AppState {
        handle_query: services.handler_use_case,
        providers: services.registry,
        cache: services
            .cache
            .map(|cache| cache as Arc<dyn ResponseCachePort>),
    };

    let addr = config.server.socket_addr()?;

    server::start_web_server(addr, app_state).await?;

    info!("Server shutdown complete");
    Ok(())
}
