use voicegate::infrastructure::observability::sanitize_detail;

#[test]
fn given_configured_credential_in_text_when_sanitized_then_it_is_redacted() {
    let raw = r#"{"error": "invalid key sk-12345-abcdef supplied"}"#;

    let result = sanitize_detail(raw, Some("sk-12345-abcdef"));

    assert!(!result.contains("sk-12345-abcdef"));
    assert!(result.contains("[REDACTED]"));
}

#[test]
fn given_bearer_header_echoed_in_body_when_sanitized_then_token_is_redacted() {
    let raw = "upstream said: Authorization: Bearer abc123token was rejected";

    let result = sanitize_detail(raw, None);

    assert!(!result.contains("abc123token"));
    assert!(result.contains("Bearer [REDACTED]"));
}

#[test]
fn given_long_detail_when_sanitized_then_it_is_capped_with_total_length() {
    let raw = "x".repeat(1000);

    let result = sanitize_detail(&raw, None);

    assert!(result.len() < 400);
    assert!(result.contains("1000 chars total"));
}

#[test]
fn given_empty_detail_when_sanitized_then_placeholder_is_returned() {
    assert_eq!(sanitize_detail("   ", None), "[EMPTY]");
}

#[test]
fn given_short_clean_detail_when_sanitized_then_unchanged() {
    assert_eq!(
        sanitize_detail("upstream returned 502", Some("sk-key")),
        "upstream returned 502"
    );
}
