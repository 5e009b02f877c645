use std::sync::Arc;

use crate::application::ports::{LanguageModel, ModelInvocationError};
use crate::domain::{Classification, EmailContent};
use crate::infrastructure::observability::sanitize_prompt;

use super::keyword_classifier::classify_by_keywords;
use super::prompts::build_classification_prompt;
use super::response_parser::{ResponseParseError, parse_classification};

pub struct ClassificationService<M>
where
    M: LanguageModel + ?Sized,
{
    model: Arc<M>,
}

impl<M> ClassificationService<M>
where
    M: LanguageModel + ?Sized,
{
    pub fn new(model: Arc<M>) -> Self {
        Self { model }
    }

    /// Classifies an email, falling back to keyword rules when the model
    /// cannot be reached or its answer holds no JSON object. Never fails.
    #[tracing::instrument(skip(self, content), fields(content_chars = content.char_len()))]
    pub async fn classify(&self, content: &EmailContent) -> Classification {
        match self.classify_with_model(content).await {
            Ok(classification) => {
                tracing::info!(
                    category = %classification.category,
                    score = classification.productivity_score.value(),
                    "Email classified by model"
                );
                classification
            }
            Err(ClassificationError::Model(e)) => {
                tracing::warn!(
                    error = %e,
                    fallback = "model_call_failed",
                    "Model classification failed, using keyword classifier"
                );
                classify_by_keywords(content.as_str())
            }
            Err(ClassificationError::Parse { error, raw }) => {
                tracing::warn!(
                    error = %error,
                    fallback = "unparseable_model_output",
                    raw = %sanitize_prompt(&raw),
                    "Model output not parseable, using keyword classifier"
                );
                classify_by_keywords(content.as_str())
            }
        }
    }

    /// Model path only, without any fallback.
    pub async fn classify_with_model(
        &self,
        content: &EmailContent,
    ) -> Result<Classification, ClassificationError> {
        let prompt = build_classification_prompt(content);
        let raw = self.model.generate(&prompt).await?;

        tracing::debug!(
            model = self.model.model_id(),
            raw = %sanitize_prompt(&raw),
            "Classification response received"
        );

        parse_classification(&raw).map_err(|error| ClassificationError::Parse { error, raw })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClassificationError {
    #[error("model: {0}")]
    Model(#[from] ModelInvocationError),
    #[error("parse: {error}")]
    Parse {
        error: ResponseParseError,
        raw: String,
    },
}
