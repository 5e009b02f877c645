use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LanguageModel, ModelInvocationError};
use crate::presentation::config::GeminiSettings;

use super::model_selection::{CatalogModel, is_valid_model_id, normalize_model_id, select_model};

const API_KEY_HEADER: &str = "x-goog-api-key";
const CATALOG_PAGE_SIZE: u32 = 1000;

/// Hosted Gemini model reached through the `generateContent` REST API.
pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
    timeout_secs: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum GatewayInitError {
    #[error("missing API key: set GEMINI_API_KEY or APP_GEMINI__API_KEY")]
    MissingCredential,
    #[error("invalid model identifier: {0:?}")]
    InvalidModelId(String),
    #[error("http client construction failed: {0}")]
    HttpClient(String),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    role: &'static str,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ListModelsResponse {
    #[serde(default)]
    models: Vec<CatalogModel>,
}

impl GeminiClient {
    /// Binds a client to `model` without contacting the provider.
    pub fn new(settings: &GeminiSettings, model: &str) -> Result<Self, GatewayInitError> {
        if !is_valid_model_id(model) {
            return Err(GatewayInitError::InvalidModelId(model.to_string()));
        }

        let client = Self::unbound(settings)?;
        Ok(client.with_model(normalize_model_id(model).to_string()))
    }

    fn unbound(settings: &GeminiSettings) -> Result<Self, GatewayInitError> {
        let api_key = settings.api_key.trim();
        if api_key.is_empty() {
            return Err(GatewayInitError::MissingCredential);
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| GatewayInitError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: String::new(),
            temperature: settings.temperature,
            max_output_tokens: settings.max_output_tokens,
            timeout_secs: settings.timeout_secs,
        })
    }

    /// Selects the model to serve with.
    ///
    /// Reads the provider catalogue and takes the first preferred model able
    /// to generate content, or the first capable model when none of the
    /// preferred ones is listed. When the catalogue is unreachable or empty
    /// the configured last-resort model is bound without a probe, so later
    /// calls may still fail. Fails only if that last resort cannot be bound.
    #[tracing::instrument(skip(settings), fields(base_url = %settings.base_url))]
    pub async fn connect(settings: &GeminiSettings) -> Result<Self, GatewayInitError> {
        let probe = Self::unbound(settings)?;

        let selected = match probe.list_models().await {
            Ok(catalog) => {
                let usable = catalog
                    .iter()
                    .filter(|m| m.supports_generate_content())
                    .count();
                tracing::info!(listed = catalog.len(), usable, "Model catalogue loaded");
                select_model(&catalog, &settings.preferred_models)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Model catalogue unavailable");
                None
            }
        };

        if let Some(model) = selected {
            tracing::info!(model = %model, "Model selected");
            return Ok(probe.with_model(model));
        }

        let fallback = &settings.fallback_model;
        if !is_valid_model_id(fallback) {
            return Err(GatewayInitError::InvalidModelId(fallback.clone()));
        }

        tracing::warn!(model = %fallback, "No catalogue model selected, using last-resort model");
        Ok(probe.with_model(normalize_model_id(fallback).to_string()))
    }

    pub async fn list_models(&self) -> Result<Vec<CatalogModel>, ModelInvocationError> {
        let response = self
            .client
            .get(format!(
                "{}/models?pageSize={}",
                self.base_url, CATALOG_PAGE_SIZE
            ))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = Self::check_status(response).await?;

        let listing: ListModelsResponse = response
            .json()
            .await
            .map_err(|e| ModelInvocationError::InvalidResponse(e.without_url().to_string()))?;

        Ok(listing.models)
    }

    fn with_model(self, model: String) -> Self {
        Self { model, ..self }
    }

    fn map_transport_error(&self, error: reqwest::Error) -> ModelInvocationError {
        if error.is_timeout() {
            ModelInvocationError::Timeout(self.timeout_secs)
        } else {
            ModelInvocationError::ApiRequestFailed(error.without_url().to_string())
        }
    }

    async fn check_status(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ModelInvocationError> {
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ModelInvocationError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ModelInvocationError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            )));
        }

        Ok(response)
    }
}

#[async_trait]
impl LanguageModel for GeminiClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.chars().count()))]
    async fn generate(&self, prompt: &str) -> Result<String, ModelInvocationError> {
        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: "user",
                parts: vec![RequestPart { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, self.model
            ))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| self.map_transport_error(e))?;

        let response = Self::check_status(response).await?;

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ModelInvocationError::Timeout(self.timeout_secs)
                } else {
                    ModelInvocationError::InvalidResponse(e.without_url().to_string())
                }
            })?;

        let text: String = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| {
                content
                    .parts
                    .into_iter()
                    .filter_map(|part| part.text)
                    .collect()
            })
            .unwrap_or_default();

        let text = text.trim();
        if text.is_empty() {
            return Err(ModelInvocationError::EmptyResponse);
        }

        Ok(text.to_string())
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}
