use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LanguageModel, TextNormalizer};
use crate::domain::{Classification, ContentType, Document, EmailContent, ReplyDraft, ReplySource};
use crate::infrastructure::observability::sanitize_prompt;

use super::classification_service::ClassificationService;
use super::reply_service::ReplyService;

/// Email as submitted by a caller.
#[derive(Debug, Clone)]
pub enum EmailInput {
    Text(String),
    Upload { filename: String, data: Vec<u8> },
}

#[derive(Debug, Clone)]
pub struct TriageOutcome {
    pub content: EmailContent,
    pub classification: Classification,
    pub reply: ReplyDraft,
}

/// Runs one email through normalization, classification and reply drafting.
pub struct TriageService<M, F>
where
    M: LanguageModel + ?Sized,
    F: FileLoader + ?Sized,
{
    file_loader: Arc<F>,
    normalizer: Arc<dyn TextNormalizer>,
    classification_service: ClassificationService<M>,
    reply_service: ReplyService<M>,
}

impl<M, F> TriageService<M, F>
where
    M: LanguageModel + ?Sized,
    F: FileLoader + ?Sized,
{
    pub fn new(
        file_loader: Arc<F>,
        normalizer: Arc<dyn TextNormalizer>,
        classification_service: ClassificationService<M>,
        reply_service: ReplyService<M>,
    ) -> Self {
        Self {
            file_loader,
            normalizer,
            classification_service,
            reply_service,
        }
    }

    pub async fn triage(&self, input: EmailInput) -> Result<TriageOutcome, TriageError> {
        let content = self.resolve_content(input).await?;

        tracing::debug!(preview = %sanitize_prompt(content.as_str()), "Email content resolved");

        let classification = self.classification_service.classify(&content).await;
        let reply = self
            .reply_service
            .draft_reply(&content, &classification)
            .await;

        tracing::info!(
            category = %classification.category,
            productive = classification.is_productive(),
            score = classification.productivity_score.value(),
            classified_by = classification.source.as_str(),
            reply_canned = reply.source == ReplySource::Canned,
            "Email triaged"
        );

        Ok(TriageOutcome {
            content,
            classification,
            reply,
        })
    }

    async fn resolve_content(&self, input: EmailInput) -> Result<EmailContent, TriageError> {
        match input {
            EmailInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(TriageError::NoContent);
                }
                Ok(EmailContent::new(text))
            }
            EmailInput::Upload { filename, data } => {
                let content_type = ContentType::from_filename(&filename)
                    .ok_or_else(|| TriageError::UnsupportedFile(filename.clone()))?;
                let document = Document::new(filename, content_type, data.len() as u64);

                let raw = self
                    .file_loader
                    .extract_text(&data, &document)
                    .await
                    .map_err(TriageError::Extraction)?;

                let normalized = self.normalizer.normalize(&raw);
                if normalized.trim().is_empty() {
                    return Err(TriageError::EmptyContent);
                }

                Ok(EmailContent::new(normalized))
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TriageError {
    #[error("unsupported file: {0}")]
    UnsupportedFile(String),
    #[error("no email content provided")]
    NoContent,
    #[error("no content left after normalization")]
    EmptyContent,
    #[error("extraction: {0}")]
    Extraction(#[from] FileLoaderError),
}

impl TriageError {
    /// Whether the caller sent unusable input, as opposed to a processing failure.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, TriageError::Extraction(_))
    }
}
