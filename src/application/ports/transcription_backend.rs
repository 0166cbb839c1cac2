use async_trait::async_trait;

use crate::domain::AudioPayload;

/// One backend integration, polymorphic over wire protocol. A synchronous
/// adapter resolves in a single call; an asynchronous adapter submits a job
/// and polls it to a terminal status before returning.
#[async_trait]
pub trait TranscriptionBackend: Send + Sync {
    async fn transcribe(&self, payload: &AudioPayload) -> Result<String, BackendFailure>;
}

/// Raw, unclassified failure reported by an adapter. The error classifier
/// turns these into the gateway taxonomy; adapters never decide retryability.
#[derive(Debug, thiserror::Error)]
pub enum BackendFailure {
    #[error("backend returned status {status}")]
    Http { status: u16, body: String },
    #[error("network: {0}")]
    Network(String),
    #[error("backend response (status {status}) is missing the text field")]
    MissingText { status: u16, body: String },
    #[error("job {job_id} failed: {message}")]
    JobFailed { job_id: String, message: String },
    #[error("job {job_id} not terminal after {polls} polls")]
    PollCeiling { job_id: String, polls: u32 },
}
