use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::application::ports::{FileLoader, LanguageModel};
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

pub async fn health_handler<M, F>(State(state): State<AppState<M, F>>) -> impl IntoResponse
where
    M: LanguageModel + ?Sized + 'static,
    F: FileLoader + ?Sized + 'static,
{
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            model: state.model.model_id().to_string(),
        }),
    )
}
