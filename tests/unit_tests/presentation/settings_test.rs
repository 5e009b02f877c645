use mailtriage::presentation::config::{GeminiSettings, UploadSettings};
use mailtriage::presentation::{Environment, Settings};

#[test]
fn given_defaults_when_created_then_serve_on_port_5000_with_16mb_uploads() {
    let settings = Settings::default();

    assert_eq!(settings.server.port, 5000);
    assert_eq!(settings.upload.max_file_size_mb, 16);
    assert_eq!(settings.upload.max_body_bytes(), 16 * 1024 * 1024);
}

#[test]
fn given_default_gemini_settings_when_created_then_prefer_flash_models() {
    let gemini = GeminiSettings::default();

    assert_eq!(gemini.preferred_models[0], "gemini-2.0-flash");
    assert_eq!(gemini.preferred_models.len(), 6);
    assert_eq!(gemini.fallback_model, "gemini-2.0-flash");
    assert_eq!(gemini.timeout_secs, 30);
    assert!(gemini.allow_degraded);
}

#[test]
fn given_api_key_when_debug_formatting_then_key_is_redacted() {
    let gemini = GeminiSettings {
        api_key: "AIzaSuperSecret".to_string(),
        ..GeminiSettings::default()
    };

    let rendered = format!("{gemini:?}");

    assert!(!rendered.contains("AIzaSuperSecret"));
    assert!(rendered.contains("gemini-2.0-flash"));
}

#[test]
fn given_upload_limit_when_converting_then_counts_mebibytes() {
    let upload = UploadSettings {
        max_file_size_mb: 2,
    };

    assert_eq!(upload.max_body_bytes(), 2 * 1024 * 1024);
}

#[test]
fn given_no_settings_file_when_loading_test_environment_then_uses_defaults() {
    let settings = Settings::load(Environment::Test).unwrap();

    assert_eq!(settings.gemini.timeout_secs, 30);
    assert_eq!(settings.upload.max_file_size_mb, 16);
}
