use anyhow::{Context, Result};
use clap::Parser;
use family_api::{
    adapters::inbound::http::router::{AppState, create_router},
    app::{AppBuilder, AppConfig},
};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "family-api-server")]
#[command(about = "In-memory family members API", long_about = None)]
struct Cli {
    /// Server port to listen on
    #[arg(short, long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Server host to bind to
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Name of the family held by the store
    #[arg(long, env = "FAMILY_NAME", default_value = "Jackson")]
    family_name: String,

    /// Log level, overridden by RUST_LOG when set
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,
}

impl Cli {
    fn to_app_config(&self) -> Result<AppConfig> {
        AppConfig::from_family_name(&self.family_name)
            .context("FAMILY_NAME is not a valid family name")
    }

    fn env_filter(&self) -> EnvFilter {
        let level = match self.log_level.to_lowercase().as_str() {
            "trace" => "trace",
            "debug" => "debug",
            "info" => "info",
            "warn" => "warn",
            "error" => "error",
            _ => "info",
        };

        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    }

    fn init_logging(&self) -> Result<()> {
        tracing_subscriber::registry()
            .with(self.env_filter())
            .with(tracing_subscriber::fmt::layer())
            .try_init()
            .context("Failed to initialize logging")?;

        Ok(())
    }

    fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("Invalid listen address {}:{}", self.host, self.port))
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    info!("Shutdown signal received");
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    info!("Starting Family API Server");

    let config = cli.to_app_config()?;
    info!(family = %config.family_name, "Family configured");

    let app_services = AppBuilder::new()
        .with_config(config)
        .build()
        .context("Failed to build application")?;

    let router = create_router(AppState::from(app_services));

    let addr = cli.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Failed to start server")?;

    info!("Server stopped");
    Ok(())
}
