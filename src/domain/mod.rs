mod attempt;
mod audio_payload;
mod error;
mod job;
mod job_status;
mod transcription_request;
mod transcription_result;

pub use attempt::{Attempt, AttemptOutcome};
pub use audio_payload::AudioPayload;
pub use error::{ErrorKind, GatewayError};
pub use job::Job;
pub use job_status::JobStatus;
pub use transcription_request::{RequestId, RequestPhase, TranscriptionRequest};
pub use transcription_result::TranscriptionResult;
