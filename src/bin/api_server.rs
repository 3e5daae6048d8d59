// src/bin/api_server.rs

use anyhow::Context;
use bookstore_api::infra::{config, logging};
use bookstore_api::transport;
use bookstore_api::{bootstrap, BookstoreStore, DEFAULT_SEED};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init_tracing();

    // --- Store + bootstrap ---
    let store = BookstoreStore::from_env().context("invalid DATABASE_URL")?;
    let outcome = bootstrap(&store, DEFAULT_SEED)
        .await
        .context("bootstrap failed")?;
    tracing::info!(?outcome, "bootstrap finished");

    // --- API Server Initialization ---
    let app_state = transport::http::AppState::new(store);
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;
    tracing::info!("API server listening on http://{}", bind_addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result.context("server error")?;
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("shutdown signal received");
        }
    }

    Ok(())
}
