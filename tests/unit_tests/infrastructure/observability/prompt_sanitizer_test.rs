use mailtriage::infrastructure::observability::sanitize_prompt;

#[test]
fn given_blank_text_when_sanitizing_then_returns_empty_marker() {
    assert_eq!(sanitize_prompt(""), "[EMPTY]");
    assert_eq!(sanitize_prompt(" \n "), "[EMPTY]");
}

#[test]
fn given_short_email_when_sanitizing_then_returns_it_trimmed() {
    assert_eq!(
        sanitize_prompt("  Bom dia, tudo bem?  "),
        "Bom dia, tudo bem?"
    );
}

#[test]
fn given_long_email_when_sanitizing_then_truncates_and_reports_length() {
    let result = sanitize_prompt(&"e".repeat(180));

    assert!(result.starts_with(&"e".repeat(100)));
    assert!(result.ends_with("... (180 chars total)"));
}

#[test]
fn given_long_accented_email_when_sanitizing_then_cuts_on_char_boundary() {
    let text = "ação".repeat(40);

    let result = sanitize_prompt(&text);

    assert!(result.starts_with(&"ação".repeat(25)));
    assert!(result.contains("(160 chars total)"));
}

#[test]
fn given_bearer_token_when_sanitizing_then_redacts_it() {
    let result = sanitize_prompt("Authorization: Bearer ya29.token-value");

    assert!(result.contains("Bearer [REDACTED]"));
    assert!(!result.contains("ya29"));
}

#[test]
fn given_query_style_key_when_sanitizing_then_redacts_value_only() {
    let result = sanitize_prompt("GET /models?key=AIzaSecret&pageSize=1000");

    assert_eq!(result, "GET /models?key=[REDACTED]&pageSize=1000");
}

#[test]
fn given_api_key_when_sanitizing_then_redacts_once() {
    let result = sanitize_prompt("api_key=abc123 segue");

    assert_eq!(result, "api_key=[REDACTED] segue");
}

#[test]
fn given_password_and_token_when_sanitizing_then_redacts_both() {
    let result = sanitize_prompt("password=hunter2 token=xyz");

    assert!(result.contains("password=[REDACTED]"));
    assert!(result.contains("token=[REDACTED]"));
    assert!(!result.contains("hunter2"));
    assert!(!result.contains("xyz"));
}
