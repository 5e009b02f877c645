use async_trait::async_trait;

use crate::application::ports::{LanguageModel, ModelInvocationError};

pub const OFFLINE_MODEL_ID: &str = "offline";

/// Gateway used when the hosted model cannot be configured. Every call
/// fails, so callers always take their deterministic fallback.
#[derive(Debug, Clone)]
pub struct OfflineModel {
    reason: String,
}

impl OfflineModel {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl LanguageModel for OfflineModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelInvocationError> {
        Err(ModelInvocationError::Unavailable(self.reason.clone()))
    }

    fn model_id(&self) -> &str {
        OFFLINE_MODEL_ID
    }
}
