//! SDS Locator Lookup Service
//!
//! Builds a product-name lookup index from a directory of safety-data-sheet
//! PDFs, then serves name-to-document queries over HTTP.

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

mod index;
mod indexer;
mod pdf_processor;
mod service;

use sdslocator_database::{initialize_database, DatabaseConfig, ProductRepository};
use sdslocator_utils::{init_logging, AppConfig, IndexBackend, LocatorError};

use index::{PostgresIndex, ProductIndex};
use indexer::IndexBuilder;
use service::LookupService;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;
    init_logging(&config.logging)?;
    info!("Starting SDS Locator Lookup Service");

    let pdf_dir = Path::new(&config.documents.pdf_dir);
    let builder = IndexBuilder::new();

    // The index build must complete before the first query is answered.
    let index = match config.index.backend {
        IndexBackend::Memory => ProductIndex::Memory(builder.build_memory(pdf_dir)?),
        IndexBackend::Postgres => {
            let db_config = DatabaseConfig {
                postgres_url: config.database.postgres_url.clone(),
                max_connections: config.database.max_connections,
                connection_timeout: Duration::from_secs(
                    config.database.connection_timeout_seconds,
                ),
            };
            let pool = initialize_database(&db_config).await?;
            let postgres = PostgresIndex::new(ProductRepository::new(pool));
            builder.sync_postgres(pdf_dir, &postgres).await?;
            ProductIndex::Postgres(postgres)
        }
    };

    let service = LookupService::new(index);
    info!(backend = service.backend_name(), "Lookup index ready");

    let app = Router::new()
        .route("/health", get(health_check))
        .route("/api/v1/products/find", post(find_product))
        .layer(TraceLayer::new_for_http())
        .with_state(service);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("Invalid server address")?;
    let listener = TcpListener::bind(&addr).await?;
    info!("Lookup Service listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "lookup-server",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Find-by-name request
#[derive(Debug, Deserialize)]
struct FindRequest {
    product: String,
}

/// Find-by-name response
#[derive(Debug, Serialize)]
struct FindResponse {
    filename: String,
}

async fn find_product(
    State(service): State<LookupService>,
    Json(request): Json<FindRequest>,
) -> Result<Json<FindResponse>, (StatusCode, String)> {
    let filename = service
        .find(&request.product)
        .await
        .map_err(|e| (status_of(&e), e.to_string()))?;

    Ok(Json(FindResponse { filename }))
}

fn status_of(error: &LocatorError) -> StatusCode {
    StatusCode::from_u16(error.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
