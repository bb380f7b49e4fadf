//! Backend entry-point: wires the marketplace pages and health probes.

mod server;

use std::sync::Arc;

use actix_web::web;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::ports::{FixtureTicketCatalogue, InMemoryUserStore};
use backend::inbound::http::health::HealthState;
use backend::inbound::http::state::HttpState;
use server::ServerConfig;

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

    let config = ServerConfig::from_env()?;
    let state = HttpState::new(
        Arc::new(InMemoryUserStore::new()),
        Arc::new(FixtureTicketCatalogue),
    );
    let health_state = web::Data::new(HealthState::new());

    server::create_server(config, state, health_state)?.await
}
