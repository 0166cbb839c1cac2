use chrono::{DateTime, Utc};

use super::GatewayError;

#[derive(Debug, Clone)]
pub enum AttemptOutcome {
    Success,
    Failure(GatewayError),
}

/// One outbound call sequence against the backend, numbered 1..N within a
/// request.
#[derive(Debug, Clone)]
pub struct Attempt {
    pub index: u32,
    pub started_at: DateTime<Utc>,
    pub outcome: Option<AttemptOutcome>,
}

impl Attempt {
    pub fn started(index: u32) -> Self {
        Self {
            index,
            started_at: Utc::now(),
            outcome: None,
        }
    }

    pub fn succeed(&mut self) {
        self.outcome = Some(AttemptOutcome::Success);
    }

    pub fn fail(&mut self, error: GatewayError) {
        self.outcome = Some(AttemptOutcome::Failure(error));
    }
}
