use std::str::FromStr;

use async_trait::async_trait;
use serde::Deserialize;

use crate::application::ports::{BackendFailure, TranscriptionBackend};
use crate::domain::{AudioPayload, ErrorKind, GatewayError};

use super::polling_job_backend::{PollingJobBackend, PollingSettings};
use super::sync_inference_backend::SyncInferenceBackend;

/// How the configured backend is driven on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationMode {
    Synchronous,
    Asynchronous,
}

impl FromStr for IntegrationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "synchronous" | "sync" => Ok(IntegrationMode::Synchronous),
            "asynchronous" | "async" => Ok(IntegrationMode::Asynchronous),
            other => Err(format!(
                "Invalid integration mode: {}. Expected: synchronous or asynchronous",
                other
            )),
        }
    }
}

/// Configuration-selected adapter. Swapping backends is a config change, not
/// a code change.
pub enum AnyBackend {
    Sync(SyncInferenceBackend),
    Polling(PollingJobBackend),
}

#[async_trait]
impl TranscriptionBackend for AnyBackend {
    async fn transcribe(&self, payload: &AudioPayload) -> Result<String, BackendFailure> {
        match self {
            AnyBackend::Sync(backend) => backend.transcribe(payload).await,
            AnyBackend::Polling(backend) => backend.transcribe(payload).await,
        }
    }
}

pub struct BackendFactory;

impl BackendFactory {
    /// Builds the adapter for the configured mode. Credential requirements
    /// are checked here, before any request is accepted.
    pub fn create(
        mode: IntegrationMode,
        endpoint: &str,
        api_key: Option<String>,
        language: &str,
        polling: PollingSettings,
    ) -> Result<AnyBackend, GatewayError> {
        match mode {
            IntegrationMode::Synchronous => Ok(AnyBackend::Sync(SyncInferenceBackend::new(
                endpoint, api_key,
            ))),
            IntegrationMode::Asynchronous => {
                let key = api_key.ok_or_else(|| {
                    GatewayError::terminal(
                        ErrorKind::ConfigError,
                        "credential is required for the asynchronous backend",
                    )
                })?;
                Ok(AnyBackend::Polling(PollingJobBackend::new(
                    endpoint, key, language, polling,
                )))
            }
        }
    }
}
