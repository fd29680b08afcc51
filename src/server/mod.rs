pub mod handlers;
mod types;

pub use types::{ErrorResponse, FieldIssueBody, HealthResponse};

use crate::{
    Result, config::Config, flashcards::FlashcardService, llm::OpenAiClient, logger::Logger,
};
use axum::{
    Router,
    routing::{get, post},
};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route("/flashcards/images", post(handlers::flashcards_from_images))
        .route("/flashcards/pdfs", post(handlers::flashcards_from_pdfs))
        .route("/pattern", get(handlers::pattern))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    let logger = Logger::new(config.server.logs.dev_mode);
    let generator = Arc::new(OpenAiClient::new(config.llm.clone()));
    let app_state = AppState::new(FlashcardService::new(generator, logger));

    let app = router(app_state);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
