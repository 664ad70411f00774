//! Lotform server binary
//!
//! Establishes the backend connections once, wires them into the forwarder
//! and composer, and serves the HTTP surface.

use std::sync::Arc;

use tracing::info;

use lotform_core::logging_facility;
use lotform_core::{Connection, DocumentComposer, QueryForwarder};
use lotform_gateway::HttpConnection;
use lotform_server::config::ServerConfig;
use lotform_server::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;
    logging_facility::init(config.logging_profile);

    let client = reqwest::Client::new();
    let inspection: Arc<dyn Connection> = Arc::new(HttpConnection::new(
        "inspection",
        &config.inspection_base_url,
        client.clone(),
    ));
    let decision_codes: Arc<dyn Connection> = Arc::new(HttpConnection::new(
        "decision-codes",
        &config.decision_codes_base_url,
        client.clone(),
    ));

    let forwarder = QueryForwarder::new(inspection.clone(), decision_codes.clone());

    let mut composer = DocumentComposer::new(inspection, decision_codes)
        .with_policy(config.policy)
        .with_join_strategy(config.usage_join)
        .with_language(config.language.clone());
    if let Some(product_base_url) = &config.product_base_url {
        composer = composer.with_materials(Arc::new(HttpConnection::new(
            "product",
            product_base_url,
            client.clone(),
        )));
    }

    let state = AppState::new(forwarder, composer);

    let addr = format!("0.0.0.0:{}", config.port);
    info!(%addr, "starting lotform server");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, routes::router(state)).await?;

    Ok(())
}
