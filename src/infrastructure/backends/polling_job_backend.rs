use std::time::{Duration, Instant};

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{BackendFailure, TranscriptionBackend};
use crate::domain::{AudioPayload, Job, JobStatus};

/// Bounds and pacing of the job status poller. Both ceilings apply: the
/// request times out at whichever is reached first.
#[derive(Debug, Clone)]
pub struct PollingSettings {
    pub interval: Duration,
    pub max_polls: u32,
    pub max_elapsed: Duration,
}

impl Default for PollingSettings {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(1),
            max_polls: 120,
            max_elapsed: Duration::from_secs(120),
        }
    }
}

/// Upload-then-poll integration: phase 1 uploads the raw bytes and yields an
/// upload reference, phase 2 submits a job against that reference, then the
/// job is polled to a terminal status. Upload and submit failures surface
/// immediately and are never polled.
pub struct PollingJobBackend {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    language: String,
    polling: PollingSettings,
}

#[derive(Deserialize)]
struct UploadResponse {
    upload_url: String,
}

#[derive(Deserialize)]
struct SubmitResponse {
    id: String,
}

#[derive(Deserialize)]
struct JobStatusResponse {
    status: String,
    #[serde(default)]
    text: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl PollingJobBackend {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        language: impl Into<String>,
        polling: PollingSettings,
    ) -> Self {
        let base_url = base_url.into();
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            language: language.into(),
            polling,
        }
    }

    async fn upload(&self, payload: &AudioPayload) -> Result<String, BackendFailure> {
        let url = format!("{}/upload", self.base_url);
        tracing::debug!(bytes = payload.len(), "Uploading audio for job submission");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(reqwest::header::CONTENT_TYPE, payload.content_type())
            .body(payload.bytes().to_vec())
            .send()
            .await
            .map_err(|e| BackendFailure::Network(format!("upload: {}", e)))?;

        let parsed: UploadResponse = read_json(response, "upload").await?;
        Ok(parsed.upload_url)
    }

    async fn submit(&self, upload_url: &str) -> Result<Job, BackendFailure> {
        let url = format!("{}/transcript", self.base_url);
        let body = serde_json::json!({
            "audio_url": upload_url,
            "language_code": self.language,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| BackendFailure::Network(format!("submit: {}", e)))?;

        let parsed: SubmitResponse = read_json(response, "submit").await?;
        tracing::debug!(job_id = %parsed.id, "Transcription job submitted");
        Ok(Job::submitted(parsed.id))
    }

    async fn poll_to_terminal(&self, mut job: Job) -> Result<String, BackendFailure> {
        let url = format!("{}/transcript/{}", self.base_url, job.id);
        let started = Instant::now();
        let mut polls: u32 = 0;

        loop {
            if polls >= self.polling.max_polls || started.elapsed() >= self.polling.max_elapsed {
                tracing::warn!(job_id = %job.id, polls = polls, "Poll ceiling reached");
                return Err(BackendFailure::PollCeiling {
                    job_id: job.id,
                    polls,
                });
            }

            let response = self
                .client
                .get(&url)
                .bearer_auth(&self.api_key)
                .send()
                .await
                .map_err(|e| BackendFailure::Network(format!("poll: {}", e)))?;
            polls += 1;

            let parsed: JobStatusResponse = read_json(response, "poll").await?;
            let status: JobStatus = parsed
                .status
                .parse()
                .map_err(|e: String| BackendFailure::Network(format!("poll: {}", e)))?;
            job.observe(status);

            match status {
                JobStatus::Completed => {
                    return parsed.text.ok_or_else(|| BackendFailure::MissingText {
                        status: 200,
                        body: format!("job {} completed without text", job.id),
                    });
                }
                JobStatus::Error => {
                    return Err(BackendFailure::JobFailed {
                        job_id: job.id,
                        message: parsed.error.unwrap_or_else(|| "unknown".to_string()),
                    });
                }
                JobStatus::Queued | JobStatus::Processing => {
                    tracing::trace!(job_id = %job.id, status = %status, polls = polls, "Job not terminal yet");
                    // Suspension point, cancellable by the per-attempt timeout.
                    tokio::time::sleep(self.polling.interval).await;
                }
            }
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    phase: &str,
) -> Result<T, BackendFailure> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| BackendFailure::Network(format!("{}: {}", phase, e)))?;

    if !status.is_success() {
        return Err(BackendFailure::Http {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|_| BackendFailure::MissingText {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl TranscriptionBackend for PollingJobBackend {
    async fn transcribe(&self, payload: &AudioPayload) -> Result<String, BackendFailure> {
        let upload_url = self.upload(payload).await?;
        let job = self.submit(&upload_url).await?;
        let text = self.poll_to_terminal(job).await?;
        Ok(text.trim().to_string())
    }
}
