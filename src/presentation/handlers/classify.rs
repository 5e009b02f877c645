use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use serde::Serialize;

use crate::application::ports::{FileLoader, LanguageModel};
use crate::application::services::{EmailInput, TriageOutcome};
use crate::presentation::error::ApiError;
use crate::presentation::state::AppState;

const FILE_FIELDS: [&str; 2] = ["file", "arquivo"];
const TEXT_FIELDS: [&str; 2] = ["text", "texto"];

#[derive(Serialize)]
pub struct ClassificationBody {
    pub category: String,
    pub productivity_score: f64,
    pub confidence: f64,
    pub reason: String,
}

#[derive(Serialize)]
pub struct ClassifyResponse {
    pub success: bool,
    pub classification: ClassificationBody,
    pub response: String,
    pub content_preview: String,
}

impl From<TriageOutcome> for ClassifyResponse {
    fn from(outcome: TriageOutcome) -> Self {
        let classification = outcome.classification;
        Self {
            success: true,
            classification: ClassificationBody {
                category: classification.category.as_label().to_string(),
                productivity_score: classification.productivity_score.value(),
                confidence: classification.confidence,
                reason: classification.reason,
            },
            response: outcome.reply.text,
            content_preview: outcome.content.preview(),
        }
    }
}

/// Accepts a multipart form carrying either an uploaded `.txt`/`.pdf` file or
/// a free-text field. The file wins when both are present.
#[tracing::instrument(skip(state, multipart))]
pub async fn classify_handler<M, F>(
    State(state): State<AppState<M, F>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<ClassifyResponse>, ApiError>
where
    M: LanguageModel + ?Sized + 'static,
    F: FileLoader + ?Sized + 'static,
{
    let input = read_email_input(multipart?).await?;

    match &input {
        EmailInput::Upload { filename, data } => {
            tracing::info!(filename = %filename, size_bytes = data.len(), "Received email file");
        }
        EmailInput::Text(text) => {
            tracing::info!(chars = text.chars().count(), "Received email text");
        }
    }

    let outcome = state.triage_service.triage(input).await?;

    Ok(Json(ClassifyResponse::from(outcome)))
}

async fn read_email_input(mut multipart: Multipart) -> Result<EmailInput, ApiError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    let mut text: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();

        if FILE_FIELDS.contains(&name.as_str()) {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field.bytes().await?;

            // Browsers send an empty part when no file was picked.
            if filename.is_empty() && data.is_empty() {
                continue;
            }
            if upload.is_none() {
                upload = Some((filename, data.to_vec()));
            }
        } else if TEXT_FIELDS.contains(&name.as_str()) {
            let value = field.text().await?;
            if text.is_none() {
                text = Some(value);
            }
        }
    }

    Ok(match (upload, text) {
        (Some((filename, data)), _) => EmailInput::Upload { filename, data },
        (None, Some(text)) => EmailInput::Text(text),
        (None, None) => EmailInput::Text(String::new()),
    })
}
