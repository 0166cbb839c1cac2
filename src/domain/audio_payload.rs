use super::{ErrorKind, GatewayError};

/// Raw audio clip as received from the client. Immutable once constructed.
#[derive(Debug, Clone)]
pub struct AudioPayload {
    bytes: Vec<u8>,
    content_type: String,
}

impl AudioPayload {
    pub fn new(bytes: Vec<u8>, content_type: impl Into<String>) -> Self {
        Self {
            bytes,
            content_type: content_type.into(),
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Rejects absent or truncated clips before any network call is made.
    pub fn validate(&self, min_bytes: usize) -> Result<(), GatewayError> {
        if self.bytes.is_empty() {
            return Err(GatewayError::terminal(
                ErrorKind::InvalidInput,
                "audio payload is empty",
            ));
        }
        if self.bytes.len() < min_bytes {
            return Err(GatewayError::terminal(
                ErrorKind::InvalidInput,
                format!(
                    "audio payload too small: {} bytes, minimum is {}",
                    self.bytes.len(),
                    min_bytes
                ),
            ));
        }
        Ok(())
    }
}
