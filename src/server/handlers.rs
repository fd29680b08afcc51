use super::types::{ErrorResponse, HealthResponse, PatternQuery};
use crate::{
    Error,
    flashcards::{FlashcardService, FlashcardSet, GenerateFromImagesRequest, GenerateFromPdfsRequest},
    pattern::{PatternMemo, PatternStyle, render_svg},
};
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info, warn};
use uuid::Uuid;

#[derive(Clone)]
pub struct AppState {
    pub flashcards: Arc<FlashcardService>,
    pub patterns: Arc<Mutex<PatternMemo>>,
}

impl AppState {
    pub fn new(flashcards: FlashcardService) -> Self {
        Self {
            flashcards: Arc::new(flashcards),
            patterns: Arc::new(Mutex::new(PatternMemo::new())),
        }
    }
}

type ApiError = (StatusCode, Json<ErrorResponse>);

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn flashcards_from_images(
    State(state): State<AppState>,
    Json(request): Json<GenerateFromImagesRequest>,
) -> Result<Json<FlashcardSet>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Received image flashcard request with {} image(s)",
        request_id,
        request.images.len()
    );

    match state.flashcards.generate_from_images(request).await {
        Ok(set) => {
            info!(
                "[{}] Returning {} flashcard(s)",
                request_id,
                set.flashcards.len()
            );
            Ok(Json(set))
        }
        Err(e) => Err(error_response(request_id, e)),
    }
}

pub async fn flashcards_from_pdfs(
    State(state): State<AppState>,
    Json(request): Json<GenerateFromPdfsRequest>,
) -> Result<Json<FlashcardSet>, ApiError> {
    let request_id = Uuid::new_v4();
    info!(
        "[{}] Received PDF flashcard request with {} file(s)",
        request_id,
        request.files.len()
    );

    state
        .flashcards
        .generate_from_pdfs(request)
        .await
        .map(Json)
        .map_err(|e| error_response(request_id, e))
}

pub async fn pattern(
    State(state): State<AppState>,
    Query(query): Query<PatternQuery>,
) -> Result<Response, ApiError> {
    let defaults = PatternStyle::default();
    let style = PatternStyle {
        size: query.size.unwrap_or(defaults.size),
        background_color: query.background.unwrap_or(defaults.background_color),
        foreground_color: query.foreground.unwrap_or(defaults.foreground_color),
    };
    style
        .validate()
        .map_err(|e| error_response(Uuid::new_v4(), e.into()))?;

    let grid = state.patterns.lock().await.get(&query.data);
    let rendered = render_svg(&grid, &style);

    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], rendered.svg).into_response())
}

fn error_response(request_id: Uuid, err: Error) -> ApiError {
    let status = match &err {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::ExternalService => StatusCode::BAD_GATEWAY,
        Error::NotImplemented => StatusCode::NOT_IMPLEMENTED,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    let body = match err {
        Error::Validation(validation) => {
            warn!("[{}] Rejected invalid request: {}", request_id, validation);
            ErrorResponse {
                error: "Invalid request".to_string(),
                issues: validation.issues.into_iter().map(Into::into).collect(),
            }
        }
        user_facing @ (Error::ExternalService | Error::NotImplemented) => ErrorResponse {
            error: user_facing.to_string(),
            issues: Vec::new(),
        },
        other => {
            error!("[{}] Request failed: {}", request_id, other);
            ErrorResponse {
                error: "Internal server error".to_string(),
                issues: Vec::new(),
            }
        }
    };

    (status, Json(body))
}
