use async_trait::async_trait;

use crate::application::ports::{BackendFailure, TranscriptionBackend};
use crate::domain::AudioPayload;

/// Single-call integration: one POST of raw audio bytes per attempt, the
/// transcript comes back in the response body as `{ "text": ... }`.
pub struct SyncInferenceBackend {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl SyncInferenceBackend {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }
}

#[async_trait]
impl TranscriptionBackend for SyncInferenceBackend {
    async fn transcribe(&self, payload: &AudioPayload) -> Result<String, BackendFailure> {
        tracing::debug!(
            endpoint = %self.endpoint,
            bytes = payload.len(),
            "Sending audio to synchronous inference backend"
        );

        let mut request = self
            .client
            .post(&self.endpoint)
            .header(reqwest::header::CONTENT_TYPE, payload.content_type())
            .body(payload.bytes().to_vec());
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| BackendFailure::Network(format!("request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendFailure::Network(format!("body: {}", e)))?;

        if !status.is_success() {
            return Err(BackendFailure::Http {
                status: status.as_u16(),
                body,
            });
        }

        let text = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("text").and_then(|t| t.as_str()).map(String::from));

        match text {
            Some(text) => {
                tracing::debug!(chars = text.len(), "Synchronous backend returned transcript");
                Ok(text.trim().to_string())
            }
            None => Err(BackendFailure::MissingText {
                status: status.as_u16(),
                body,
            }),
        }
    }
}
