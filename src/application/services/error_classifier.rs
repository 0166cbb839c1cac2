use crate::application::ports::BackendFailure;
use crate::domain::{ErrorKind, GatewayError};

/// Knobs that vary per deployment but never per request.
#[derive(Debug, Clone, Default)]
pub struct ClassifierPolicy {
    /// Whether a 2xx response without a text field should be retried.
    /// Ambiguous by nature: it can mean "no speech detected" or "malformed
    /// response", so it stays configurable instead of hard-coded.
    pub retry_no_text: bool,
}

/// Pure mapping from a raw adapter failure to the gateway taxonomy.
/// Identical input always yields the identical kind.
pub fn classify(failure: &BackendFailure, policy: &ClassifierPolicy) -> GatewayError {
    match failure {
        BackendFailure::Http { status, body } => classify_http(*status, body),
        BackendFailure::Network(message) => GatewayError::retryable(
            ErrorKind::NetworkError,
            "network error while calling backend",
        )
        .with_detail(message.clone()),
        BackendFailure::MissingText { status, body } => GatewayError {
            kind: ErrorKind::NoText,
            message: "backend response did not contain a transcript".to_string(),
            status: Some(*status),
            detail: Some(body.clone()),
            retryable: policy.retry_no_text,
        },
        BackendFailure::JobFailed { job_id, message } => GatewayError::terminal(
            ErrorKind::BackendJobError,
            format!("transcription job {} reported an error", job_id),
        )
        .with_detail(message.clone()),
        BackendFailure::PollCeiling { job_id, polls } => {
            // The ceiling already bounds the whole request; retrying would
            // double its duration.
            GatewayError::terminal(
                ErrorKind::Timeout,
                format!("job {} not finished after {} polls", job_id, polls),
            )
        }
    }
}

fn classify_http(status: u16, body: &str) -> GatewayError {
    if status == 503 || body_indicates_warming(body) {
        return GatewayError::retryable(ErrorKind::BackendWarming, "backend model is loading")
            .with_status(status)
            .with_detail(body.to_string());
    }
    match status {
        400..=499 => GatewayError::terminal(
            ErrorKind::BackendClientError,
            format!("backend rejected the request with status {}", status),
        )
        .with_status(status)
        .with_detail(body.to_string()),
        500..=599 => GatewayError::retryable(
            ErrorKind::BackendServerError,
            format!("backend failed with status {}", status),
        )
        .with_status(status)
        .with_detail(body.to_string()),
        _ => GatewayError::terminal(
            ErrorKind::Internal,
            format!("unexpected backend status {}", status),
        )
        .with_status(status)
        .with_detail(body.to_string()),
    }
}

fn body_indicates_warming(body: &str) -> bool {
    let lower = body.to_lowercase();
    lower.contains("loading") || lower.contains("warming up")
}
