use std::fmt;

/// Classification taxonomy for every failure the gateway can surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidInput,
    ConfigError,
    MethodNotAllowed,
    BackendWarming,
    BackendClientError,
    BackendServerError,
    NoText,
    NetworkError,
    Timeout,
    BackendJobError,
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid_input",
            ErrorKind::ConfigError => "config_error",
            ErrorKind::MethodNotAllowed => "method_not_allowed",
            ErrorKind::BackendWarming => "backend_warming",
            ErrorKind::BackendClientError => "backend_client_error",
            ErrorKind::BackendServerError => "backend_server_error",
            ErrorKind::NoText => "no_text",
            ErrorKind::NetworkError => "network_error",
            ErrorKind::Timeout => "timeout",
            ErrorKind::BackendJobError => "backend_job_error",
            ErrorKind::Internal => "internal",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A classified failure: what went wrong, whether another attempt is
/// worthwhile, and a scrubbed diagnostic for the caller.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct GatewayError {
    pub kind: ErrorKind,
    pub message: String,
    pub status: Option<u16>,
    pub detail: Option<String>,
    pub retryable: bool,
}

impl GatewayError {
    pub fn terminal(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
            retryable: false,
        }
    }

    pub fn retryable(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            detail: None,
            retryable: true,
        }
    }

    pub fn with_status(mut self, status: u16) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}
