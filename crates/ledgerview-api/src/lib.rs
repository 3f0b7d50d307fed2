//! HTTP API server with HTMX table view
//!
//! Routes are organized into modules:
//! - routes::transactions: JSON list/search endpoints and the table view

pub mod error;
pub mod routes;

use axum::{routing::get, Router};
use ledgerview_config::Config;
use ledgerview_core::Ledger;
use ledgerview_parser::{CsvTransactionSource, SourceRef};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Application state. Read-only: every request reloads the ledger file.
#[derive(Clone)]
pub struct AppState {
    pub ledger: Arc<Ledger>,
}

impl AppState {
    pub fn new(config: &Config, source: SourceRef) -> Self {
        Self {
            ledger: Arc::new(Ledger::new(config, source)),
        }
    }

    /// State reading the configured CSV file from disk
    pub fn from_config(config: &Config) -> Self {
        Self::new(config, Arc::new(CsvTransactionSource))
    }
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::transactions::{api_transactions, api_transactions_search, htmx_transactions_list, page_transactions};

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/transactions", get(api_transactions))
        .route("/transactions/search", get(api_transactions_search))
        // HTMX page routes
        .route("/", get(page_transactions))
        .route("/transactions/list", get(htmx_transactions_list))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{} - Ledgerview</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/tailwindcss@2.2.19/dist/tailwind.min.css">
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .htmx-request.htmx-indicator {{ opacity: 1; }}
        mark {{ background: #fde68a; padding: 0; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        ledgerview_utils::escape_html(title),
        content
    )
}

/// Start the HTTP server
///
/// Binds to `server.host:server.port` and serves until the listener fails.
pub async fn start_server(config: Config) -> std::io::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState::from_config(&config);
    let data_file = state.ledger.path().display().to_string();

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Ledgerview server on http://{}", addr);
    log::info!("Serving ledger file {}", data_file);
    log::info!("Available routes:");
    log::info!("  - / (Transaction table)");
    log::info!("  - /transactions?page= (JSON page)");
    log::info!("  - /transactions/search?q=&page=&sortColumn=&sortDirection= (JSON search)");
    log::info!("  - /api/health");

    axum::serve(listener, router).await
}
