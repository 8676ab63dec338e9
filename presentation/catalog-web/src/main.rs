use dotenvy::dotenv;

mod api;
mod config;
mod setup;

use config::app_config::AppConfig;
use setup::{dependency_injection::DependencyContainer, server::Server};

/// Product catalog web service.
///
/// - config/: environment-driven settings (server, CORS, catalog seeding)
/// - setup/: dependency wiring and the poem server
/// - api/: JSON endpoints, DTOs, error mapping and the HTML page
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    dotenv().ok();

    let config = AppConfig::from_env();
    let container = DependencyContainer::new(&config.catalog)?;

    Server::run(config, container).await?;

    Ok(())
}
