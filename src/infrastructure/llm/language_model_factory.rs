use std::sync::Arc;

use crate::application::ports::LanguageModel;
use crate::presentation::config::GeminiSettings;

use super::gemini_client::{GatewayInitError, GeminiClient};
use super::offline_model::OfflineModel;

pub struct LanguageModelFactory;

impl LanguageModelFactory {
    /// Builds the process-wide gateway.
    ///
    /// A missing credential yields an [`OfflineModel`] when degraded mode is
    /// allowed, leaving classification to the keyword rules. Any other
    /// initialization failure is returned.
    pub async fn create(
        settings: &GeminiSettings,
    ) -> Result<Arc<dyn LanguageModel>, GatewayInitError> {
        match GeminiClient::connect(settings).await {
            Ok(client) => Ok(Arc::new(client)),
            Err(GatewayInitError::MissingCredential) if settings.allow_degraded => {
                tracing::warn!(
                    "No API key configured, serving keyword classification and canned replies only"
                );
                Ok(Arc::new(OfflineModel::new("no API key configured")))
            }
            Err(e) => Err(e),
        }
    }
}
