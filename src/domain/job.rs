use chrono::{DateTime, Utc};

use super::JobStatus;

/// Asynchronous backend job. Exists only between a successful submission and
/// the terminal poll of one request; never persisted.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: String,
    pub status: JobStatus,
    pub submitted_at: DateTime<Utc>,
}

impl Job {
    pub fn submitted(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: JobStatus::Queued,
            submitted_at: Utc::now(),
        }
    }

    pub fn observe(&mut self, status: JobStatus) {
        self.status = status;
    }
}
