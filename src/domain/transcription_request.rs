use std::fmt;

use uuid::Uuid;

use super::{Attempt, AudioPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestId(Uuid);

impl RequestId {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle phase of a request. Transitions are strictly forward; a request
/// that reached a terminal phase never regresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestPhase {
    New,
    InFlight,
    Succeeded,
    Failed,
}

impl RequestPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RequestPhase::Succeeded | RequestPhase::Failed)
    }
}

/// Per-call unit of work: payload plus attempt history. Created per inbound
/// call, discarded after the response is emitted.
#[derive(Debug)]
pub struct TranscriptionRequest {
    pub id: RequestId,
    pub payload: AudioPayload,
    pub attempts: Vec<Attempt>,
    phase: RequestPhase,
}

impl TranscriptionRequest {
    pub fn new(payload: AudioPayload) -> Self {
        Self {
            id: RequestId::new(),
            payload,
            attempts: Vec::new(),
            phase: RequestPhase::New,
        }
    }

    pub fn phase(&self) -> RequestPhase {
        self.phase
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts.len() as u32
    }

    /// Starts the next attempt and returns its 1-based index.
    pub fn begin_attempt(&mut self) -> u32 {
        debug_assert!(!self.phase.is_terminal(), "attempt after terminal phase");
        self.phase = RequestPhase::InFlight;
        let index = self.attempts.len() as u32 + 1;
        self.attempts.push(Attempt::started(index));
        index
    }

    pub fn current_attempt_mut(&mut self) -> Option<&mut Attempt> {
        self.attempts.last_mut()
    }

    pub fn finish(&mut self, success: bool) {
        debug_assert!(!self.phase.is_terminal(), "double finish");
        self.phase = if success {
            RequestPhase::Succeeded
        } else {
            RequestPhase::Failed
        };
    }
}
