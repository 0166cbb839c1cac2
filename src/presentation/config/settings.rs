use std::time::Duration;

use serde::Deserialize;

use crate::application::services::{ClassifierPolicy, RetryPolicy};
use crate::domain::{ErrorKind, GatewayError};
use crate::infrastructure::backends::{IntegrationMode, PollingSettings};
use crate::presentation::config::Environment;

/// Process-wide configuration, read once at startup and never hot-reloaded.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub environment: Environment,
    pub server: ServerSettings,
    pub backend: BackendSettings,
    pub retry: RetrySettings,
    pub poll: PollSettings,
    pub limits: LimitSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BackendSettings {
    pub url: String,
    pub mode: IntegrationMode,
    pub api_key: Option<String>,
    pub language: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RetrySettings {
    pub max_attempts: u32,
    pub base_wait_secs: u64,
    pub wait_increment_secs: u64,
    pub max_wait_secs: u64,
    pub attempt_timeout_secs: u64,
    pub retry_no_text: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PollSettings {
    pub interval_ms: u64,
    pub max_polls: u32,
    pub max_elapsed_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LimitSettings {
    pub min_payload_bytes: usize,
    pub max_payload_bytes: usize,
}

impl Settings {
    /// Reads configuration from the environment, failing fast on anything
    /// malformed. `BACKEND_URL` is the only mandatory variable; the
    /// credential requirement depends on the integration mode and is
    /// enforced by the backend factory.
    pub fn from_env() -> Result<Self, GatewayError> {
        let url = std::env::var("BACKEND_URL")
            .map_err(|_| config_error("BACKEND_URL is not set"))?;
        let mode: IntegrationMode = env_or("BACKEND_MODE", "synchronous")
            .parse()
            .map_err(config_error)?;
        let api_key = std::env::var("BACKEND_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());

        Ok(Self {
            environment: Environment::try_from(env_or("APP_ENV", "local"))
                .map_err(config_error)?,
            server: ServerSettings {
                host: env_or("GATEWAY_HOST", "0.0.0.0"),
                port: parse_env("GATEWAY_PORT", 3000)?,
            },
            backend: BackendSettings {
                url,
                mode,
                api_key,
                language: env_or("BACKEND_LANGUAGE", "en"),
            },
            retry: RetrySettings {
                max_attempts: parse_env("RETRY_MAX_ATTEMPTS", 8)?,
                base_wait_secs: parse_env("RETRY_BASE_WAIT_SECS", 2)?,
                wait_increment_secs: parse_env("RETRY_WAIT_INCREMENT_SECS", 3)?,
                max_wait_secs: parse_env("RETRY_MAX_WAIT_SECS", 30)?,
                attempt_timeout_secs: parse_env("ATTEMPT_TIMEOUT_SECS", 180)?,
                retry_no_text: parse_env("GATEWAY_RETRY_NO_TEXT", false)?,
            },
            poll: PollSettings {
                interval_ms: parse_env("POLL_INTERVAL_MS", 1000)?,
                max_polls: parse_env("POLL_MAX_POLLS", 120)?,
                max_elapsed_secs: parse_env("POLL_MAX_ELAPSED_SECS", 120)?,
            },
            limits: LimitSettings {
                min_payload_bytes: parse_env("MIN_PAYLOAD_BYTES", 100)?,
                max_payload_bytes: parse_env("MAX_PAYLOAD_BYTES", 10 * 1024 * 1024)?,
            },
        })
    }

    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy {
            max_attempts: self.retry.max_attempts,
            base_wait: Duration::from_secs(self.retry.base_wait_secs),
            wait_increment: Duration::from_secs(self.retry.wait_increment_secs),
            max_wait: Duration::from_secs(self.retry.max_wait_secs),
            attempt_timeout: Duration::from_secs(self.retry.attempt_timeout_secs),
        }
    }

    pub fn polling_settings(&self) -> PollingSettings {
        PollingSettings {
            interval: Duration::from_millis(self.poll.interval_ms),
            max_polls: self.poll.max_polls,
            max_elapsed: Duration::from_secs(self.poll.max_elapsed_secs),
        }
    }

    pub fn classifier_policy(&self) -> ClassifierPolicy {
        ClassifierPolicy {
            retry_no_text: self.retry.retry_no_text,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> Result<T, GatewayError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .parse()
            .map_err(|_| config_error(format!("{} has an invalid value: {}", key, raw))),
        Err(_) => Ok(default),
    }
}

fn config_error(message: impl Into<String>) -> GatewayError {
    GatewayError::terminal(ErrorKind::ConfigError, message)
}
