//! Backend entry-point: configuration, tracing, and server start-up.

mod server;

use actix_web::web;
use mockable::DefaultEnv;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use branch_backend::inbound::http::health::HealthState;
use server::AppConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let config = AppConfig::from_env(&DefaultEnv::new()).map_err(std::io::Error::other)?;
    let health_state = web::Data::new(HealthState::new());

    let server = server::create_server(health_state, config).await?;
    server.await
}
