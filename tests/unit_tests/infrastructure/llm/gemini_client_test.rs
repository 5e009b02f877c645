use std::time::Duration;

use axum::Router;
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use mailtriage::application::ports::{LanguageModel, ModelInvocationError};
use mailtriage::infrastructure::llm::{GatewayInitError, GeminiClient};
use mailtriage::presentation::GeminiSettings;

const TEST_API_KEY: &str = "test-key";

const CATALOG_BODY: &str = r#"{
    "models": [
        {"name": "models/embedding-001", "supportedGenerationMethods": ["embedContent"]},
        {"name": "models/gemini-1.5-pro", "supportedGenerationMethods": ["generateContent"]},
        {"name": "models/gemini-2.5-flash", "supportedGenerationMethods": ["generateContent", "countTokens"]}
    ]
}"#;

const GENERATE_BODY: &str = r#"{
    "candidates": [
        {"content": {"role": "model", "parts": [{"text": "  Olá, "}, {"text": "tudo certo.  "}]}}
    ]
}"#;

#[derive(Clone, Copy)]
struct MockResponse {
    status: u16,
    body: &'static str,
    delay: Duration,
}

impl MockResponse {
    fn ok(body: &'static str) -> Self {
        Self::status(200, body)
    }

    fn status(status: u16, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
        }
    }
}

fn authorized(headers: &HeaderMap) -> bool {
    headers
        .get("x-goog-api-key")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == TEST_API_KEY)
}

async fn start_mock_gemini_server(
    catalog: MockResponse,
    generate: MockResponse,
) -> (String, oneshot::Sender<()>) {
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let app = Router::new()
        .route(
            "/models",
            get(move |headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return (StatusCode::FORBIDDEN, "missing key").into_response();
                }
                let status = StatusCode::from_u16(catalog.status).unwrap();
                (status, catalog.body).into_response()
            }),
        )
        .route(
            "/models/{model}",
            post(move |headers: HeaderMap| async move {
                if !authorized(&headers) {
                    return (StatusCode::FORBIDDEN, "missing key").into_response();
                }
                tokio::time::sleep(generate.delay).await;
                let status = StatusCode::from_u16(generate.status).unwrap();
                (status, generate.body).into_response()
            }),
        );

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let base_url = format!("http://{}", addr);

    tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                shutdown_rx.await.ok();
            })
            .await
            .ok();
    });

    (base_url, shutdown_tx)
}

fn settings_for(base_url: &str) -> GeminiSettings {
    GeminiSettings {
        api_key: TEST_API_KEY.to_string(),
        base_url: base_url.to_string(),
        ..GeminiSettings::default()
    }
}

#[tokio::test]
async fn given_catalog_with_preferred_model_when_connecting_then_selects_it() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::ok(GENERATE_BODY),
    )
    .await;

    let client = GeminiClient::connect(&settings_for(&base_url)).await.unwrap();

    assert_eq!(client.model_id(), "gemini-2.5-flash");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_catalog_without_preferred_models_when_connecting_then_takes_first_capable_model() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::ok(GENERATE_BODY),
    )
    .await;
    let settings = GeminiSettings {
        preferred_models: vec!["gemini-ultra".to_string()],
        ..settings_for(&base_url)
    };

    let client = GeminiClient::connect(&settings).await.unwrap();

    assert_eq!(client.model_id(), "gemini-1.5-pro");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_catalog_failure_when_connecting_then_binds_last_resort_model() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::status(500, "boom"),
        MockResponse::ok(GENERATE_BODY),
    )
    .await;

    let client = GeminiClient::connect(&settings_for(&base_url)).await.unwrap();

    assert_eq!(client.model_id(), "gemini-2.0-flash");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_unreachable_provider_when_connecting_then_binds_last_resort_model() {
    let client = GeminiClient::connect(&settings_for("http://127.0.0.1:1"))
        .await
        .unwrap();

    assert_eq!(client.model_id(), "gemini-2.0-flash");
}

#[tokio::test]
async fn given_invalid_last_resort_model_when_catalog_fails_then_connect_fails() {
    let settings = GeminiSettings {
        fallback_model: "bad model/id".to_string(),
        ..settings_for("http://127.0.0.1:1")
    };

    let result = GeminiClient::connect(&settings).await;

    assert!(matches!(result, Err(GatewayInitError::InvalidModelId(_))));
}

#[tokio::test]
async fn given_blank_api_key_when_connecting_then_returns_missing_credential() {
    let settings = GeminiSettings {
        api_key: "   ".to_string(),
        ..settings_for("http://127.0.0.1:1")
    };

    let result = GeminiClient::connect(&settings).await;

    assert!(matches!(result, Err(GatewayInitError::MissingCredential)));
}

#[test]
fn given_model_id_with_illegal_characters_when_binding_then_rejects_it() {
    let result = GeminiClient::new(&settings_for("http://localhost"), "gemini flash?");

    assert!(matches!(result, Err(GatewayInitError::InvalidModelId(_))));
}

#[tokio::test]
async fn given_candidate_with_several_parts_when_generating_then_joins_and_trims_text() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::ok(GENERATE_BODY),
    )
    .await;
    let client = GeminiClient::new(&settings_for(&base_url), "models/gemini-2.0-flash").unwrap();

    let result = client.generate("Classifique esta solicitação de atenção").await;

    assert_eq!(result.unwrap(), "Olá, tudo certo.");
    assert_eq!(client.model_id(), "gemini-2.0-flash");
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_no_candidates_when_generating_then_returns_empty_response() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::ok(r#"{"candidates": []}"#),
    )
    .await;
    let client = GeminiClient::new(&settings_for(&base_url), "gemini-2.0-flash").unwrap();

    let result = client.generate("Oi").await;

    assert_eq!(result, Err(ModelInvocationError::EmptyResponse));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_rate_limit_status_when_generating_then_returns_rate_limited() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::status(429, r#"{"error": {"status": "RESOURCE_EXHAUSTED"}}"#),
    )
    .await;
    let client = GeminiClient::new(&settings_for(&base_url), "gemini-2.0-flash").unwrap();

    let result = client.generate("Oi").await;

    assert_eq!(result, Err(ModelInvocationError::RateLimited));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_server_error_when_generating_then_returns_api_request_failed_with_status() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::status(500, "internal"),
    )
    .await;
    let client = GeminiClient::new(&settings_for(&base_url), "gemini-2.0-flash").unwrap();

    let result = client.generate("Oi").await;

    match result {
        Err(ModelInvocationError::ApiRequestFailed(message)) => {
            assert!(message.contains("500"));
            assert!(!message.contains(TEST_API_KEY));
        }
        other => panic!("expected ApiRequestFailed, got {other:?}"),
    }
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_malformed_body_when_generating_then_returns_invalid_response() {
    let (base_url, shutdown_tx) = start_mock_gemini_server(
        MockResponse::ok(CATALOG_BODY),
        MockResponse::ok("not json"),
    )
    .await;
    let client = GeminiClient::new(&settings_for(&base_url), "gemini-2.0-flash").unwrap();

    let result = client.generate("Oi").await;

    assert!(matches!(result, Err(ModelInvocationError::InvalidResponse(_))));
    shutdown_tx.send(()).ok();
}

#[tokio::test]
async fn given_slow_provider_when_generating_then_returns_timeout() {
    let generate = MockResponse {
        delay: Duration::from_secs(3),
        ..MockResponse::ok(GENERATE_BODY)
    };
    let (base_url, shutdown_tx) =
        start_mock_gemini_server(MockResponse::ok(CATALOG_BODY), generate).await;
    let settings = GeminiSettings {
        timeout_secs: 1,
        ..settings_for(&base_url)
    };
    let client = GeminiClient::new(&settings, "gemini-2.0-flash").unwrap();

    let result = client.generate("Oi").await;

    assert_eq!(result, Err(ModelInvocationError::Timeout(1)));
    shutdown_tx.send(()).ok();
}
