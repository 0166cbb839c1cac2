use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::TranscriptionBackend;
use crate::application::services::{classify, ClassifierPolicy};
use crate::domain::{
    AudioPayload, ErrorKind, GatewayError, TranscriptionRequest, TranscriptionResult,
};
use crate::infrastructure::observability::sanitize_detail;

/// Retry budget for one request. Backoff grows linearly: backend cold starts
/// last tens of seconds, so exponential growth would over-penalize the later
/// attempts that are most likely to succeed.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_wait: Duration,
    pub wait_increment: Duration,
    pub max_wait: Duration,
    pub attempt_timeout: Duration,
}

impl RetryPolicy {
    /// Delay before the attempt following `attempts_done` completed attempts.
    /// The first wait equals the base; each further wait adds one increment,
    /// capped at `max_wait`.
    pub fn delay_after(&self, attempts_done: u32) -> Duration {
        let grown = self.base_wait + self.wait_increment * attempts_done.saturating_sub(1);
        grown.min(self.max_wait)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 8,
            base_wait: Duration::from_secs(2),
            wait_increment: Duration::from_secs(3),
            max_wait: Duration::from_secs(30),
            attempt_timeout: Duration::from_secs(180),
        }
    }
}

/// Drives the per-request attempt state machine: validate, call the backend
/// adapter, classify failures, wait and retry within budget, finalize.
pub struct TranscriptionService<B>
where
    B: TranscriptionBackend,
{
    backend: Arc<B>,
    retry: RetryPolicy,
    classifier: ClassifierPolicy,
    min_payload_bytes: usize,
    credential: Option<String>,
}

impl<B> TranscriptionService<B>
where
    B: TranscriptionBackend,
{
    pub fn new(
        backend: Arc<B>,
        retry: RetryPolicy,
        classifier: ClassifierPolicy,
        min_payload_bytes: usize,
        credential: Option<String>,
    ) -> Self {
        Self {
            backend,
            retry,
            classifier,
            min_payload_bytes,
            credential,
        }
    }

    pub async fn transcribe(
        &self,
        payload: AudioPayload,
    ) -> Result<TranscriptionResult, GatewayError> {
        payload.validate(self.min_payload_bytes)?;

        let mut request = TranscriptionRequest::new(payload);
        let mut last_error: Option<GatewayError> = None;

        while request.attempts_used() < self.retry.max_attempts {
            let attempt = request.begin_attempt();

            let outcome = tokio::time::timeout(
                self.retry.attempt_timeout,
                self.backend.transcribe(&request.payload),
            )
            .await;

            let error = match outcome {
                Ok(Ok(text)) => {
                    if let Some(a) = request.current_attempt_mut() {
                        a.succeed();
                    }
                    request.finish(true);
                    tracing::info!(
                        request_id = %request.id,
                        attempt = attempt,
                        chars = text.len(),
                        "Transcription succeeded"
                    );
                    return Ok(TranscriptionResult {
                        text,
                        attempts: attempt,
                    });
                }
                Ok(Err(failure)) => classify(&failure, &self.classifier),
                Err(_elapsed) => GatewayError::retryable(
                    ErrorKind::Timeout,
                    format!(
                        "attempt did not complete within {}s",
                        self.retry.attempt_timeout.as_secs()
                    ),
                ),
            };

            let error = self.scrub(error);
            if let Some(a) = request.current_attempt_mut() {
                a.fail(error.clone());
            }

            let budget_left = request.attempts_used() < self.retry.max_attempts;
            if error.retryable && budget_left {
                let delay = self.retry.delay_after(attempt);
                tracing::warn!(
                    request_id = %request.id,
                    attempt = attempt,
                    kind = %error.kind,
                    backoff_ms = delay.as_millis() as u64,
                    "Attempt failed, retrying"
                );
                last_error = Some(error);
                tokio::time::sleep(delay).await;
                continue;
            }

            tracing::warn!(
                request_id = %request.id,
                attempt = attempt,
                kind = %error.kind,
                retryable = error.retryable,
                "Attempt failed, giving up"
            );
            request.finish(false);
            return Err(self.annotate(error, attempt));
        }

        // Budget exhausted without a terminal classification; surface the
        // last transient cause.
        request.finish(false);
        let attempts = request.attempts_used();
        let error = last_error.unwrap_or_else(|| {
            GatewayError::terminal(ErrorKind::Internal, "retry budget exhausted")
        });
        Err(self.annotate(error, attempts))
    }

    fn annotate(&self, mut error: GatewayError, attempts: u32) -> GatewayError {
        if attempts > 1 {
            error.message = format!("{} (after {} attempts)", error.message, attempts);
        }
        error
    }

    fn scrub(&self, mut error: GatewayError) -> GatewayError {
        if let Some(detail) = error.detail.take() {
            error.detail = Some(sanitize_detail(&detail, self.credential.as_deref()));
        }
        error
    }
}
