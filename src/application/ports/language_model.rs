use async_trait::async_trait;

/// Boundary to the hosted language model.
///
/// Implementations return the model's text with surrounding whitespace
/// trimmed and never retry; retry and fallback policy belongs to callers.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, ModelInvocationError>;

    /// Identifier of the model serving requests.
    fn model_id(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ModelInvocationError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out after {0}s")]
    Timeout(u64),
    #[error("model returned no text")]
    EmptyResponse,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("model unavailable: {0}")]
    Unavailable(String),
}
