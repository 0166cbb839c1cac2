use voicegate::application::ports::BackendFailure;
use voicegate::application::services::{classify, ClassifierPolicy};
use voicegate::domain::ErrorKind;

fn policy() -> ClassifierPolicy {
    ClassifierPolicy::default()
}

#[test]
fn given_http_503_when_classified_then_backend_warming_and_retryable() {
    let failure = BackendFailure::Http {
        status: 503,
        body: "Service Unavailable".to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::BackendWarming);
    assert!(error.retryable);
    assert_eq!(error.status, Some(503));
}

#[test]
fn given_loading_body_on_500_when_classified_then_backend_warming() {
    let failure = BackendFailure::Http {
        status: 500,
        body: r#"{"error": "Model facebook/wav2vec2 is currently loading"}"#.to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::BackendWarming);
    assert!(error.retryable);
}

#[test]
fn given_http_404_when_classified_then_client_error_and_not_retryable() {
    let failure = BackendFailure::Http {
        status: 404,
        body: "not found".to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::BackendClientError);
    assert!(!error.retryable);
}

#[test]
fn given_http_500_when_classified_then_server_error_and_retryable() {
    let failure = BackendFailure::Http {
        status: 500,
        body: "internal".to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::BackendServerError);
    assert!(error.retryable);
}

#[test]
fn given_network_failure_when_classified_then_retryable_network_error() {
    let failure = BackendFailure::Network("connection refused".to_string());

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::NetworkError);
    assert!(error.retryable);
}

#[test]
fn given_missing_text_when_classified_then_no_text_and_not_retryable_by_default() {
    let failure = BackendFailure::MissingText {
        status: 200,
        body: "{}".to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::NoText);
    assert!(!error.retryable);
}

#[test]
fn given_missing_text_when_policy_allows_retry_then_no_text_is_retryable() {
    let failure = BackendFailure::MissingText {
        status: 200,
        body: "{}".to_string(),
    };
    let policy = ClassifierPolicy {
        retry_no_text: true,
    };

    let error = classify(&failure, &policy);

    assert_eq!(error.kind, ErrorKind::NoText);
    assert!(error.retryable);
}

#[test]
fn given_failed_job_when_classified_then_terminal_job_error() {
    let failure = BackendFailure::JobFailed {
        job_id: "job-9".to_string(),
        message: "audio could not be decoded".to_string(),
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::BackendJobError);
    assert!(!error.retryable);
}

#[test]
fn given_poll_ceiling_when_classified_then_terminal_timeout() {
    let failure = BackendFailure::PollCeiling {
        job_id: "job-9".to_string(),
        polls: 120,
    };

    let error = classify(&failure, &policy());

    assert_eq!(error.kind, ErrorKind::Timeout);
    assert!(!error.retryable);
}

#[test]
fn given_identical_failures_when_classified_twice_then_kinds_are_identical() {
    let make = || BackendFailure::Http {
        status: 429,
        body: "rate limited".to_string(),
    };

    let first = classify(&make(), &policy());
    let second = classify(&make(), &policy());

    assert_eq!(first.kind, second.kind);
    assert_eq!(first.retryable, second.retryable);
    assert_eq!(first.status, second.status);
}
