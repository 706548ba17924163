// src/main.rs
use axum::{extract::Extension, middleware, Router};
use dotenv::dotenv;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod common;
mod contact;
mod logging_middleware;
mod services;

use common::{AppConfig, AppState};
use services::{Mailer, ResendMailer, RestSubmissionStore, SubmissionStore};

/// Bound on every external call (store write, each email send)
const OUTBOUND_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();
    info!(
        allowed_origins = ?config.allowed_origins,
        secrets_present = config.secrets_present(),
        "Configuration loaded"
    );

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let http_client = Client::builder().timeout(OUTBOUND_TIMEOUT).build()?;

    // Clients exist only when all three secrets resolved; otherwise every
    // submit request gets the fixed configuration error.
    let (store, mailer): (Option<Arc<dyn SubmissionStore>>, Option<Arc<dyn Mailer>>) =
        match (&config.mail_api_key, &config.store_url, &config.store_service_key) {
            (Some(mail_key), Some(store_url), Some(store_key)) => {
                let store: Arc<dyn SubmissionStore> = Arc::new(RestSubmissionStore::new(
                    http_client.clone(),
                    store_url.clone(),
                    store_key.clone(),
                ));
                let mailer: Arc<dyn Mailer> =
                    Arc::new(ResendMailer::new(http_client, mail_key.clone()));
                info!("Submission store and mailer initialized");
                (Some(store), Some(mailer))
            }
            _ => {
                warn!("Missing mail key, store URL, or store credential; submissions will be rejected");
                (None, None)
            }
        };

    // ========================================================================
    // APPLICATION STATE AND ROUTER
    // ========================================================================

    let cors = contact::cors::cors_layer(&config);

    let app_state = AppState {
        config,
        store,
        mailer,
    };
    let shared = Arc::new(app_state);

    let app = Router::new()
        .merge(contact::contact_routes())
        .layer(middleware::from_fn(logging_middleware::log_request_body))
        .layer(Extension(shared))
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
