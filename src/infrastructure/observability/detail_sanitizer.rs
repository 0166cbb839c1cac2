const MAX_DETAIL_LENGTH: usize = 300;

/// Prepares backend error text for inclusion in a client-facing envelope:
/// caps the length and removes the configured credential along with common
/// secret-bearing patterns. Backends have been observed echoing request
/// headers back in error bodies.
pub fn sanitize_detail(detail: &str, credential: Option<&str>) -> String {
    let trimmed = detail.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let mut result = trimmed.to_string();

    if let Some(secret) = credential {
        if !secret.is_empty() {
            result = result.replace(secret, "[REDACTED]");
        }
    }

    result = redact_sensitive_patterns(&result);

    if result.len() > MAX_DETAIL_LENGTH {
        let mut cut = MAX_DETAIL_LENGTH;
        while !result.is_char_boundary(cut) {
            cut -= 1;
        }
        result = format!("{}... ({} chars total)", &result[..cut], trimmed.len());
    }

    result
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("api_key=", "api_key=[REDACTED]"),
        ("token=", "token=[REDACTED]"),
        ("secret=", "secret=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        if let Some(idx) = result.find(pattern) {
            let end = result[idx + pattern.len()..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| idx + pattern.len() + i)
                .unwrap_or(result.len());
            result = format!("{}{}{}", &result[..idx], replacement, &result[end..]);
        }
    }

    result
}
