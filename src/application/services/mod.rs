mod error_classifier;
mod transcription_service;

pub use error_classifier::{classify, ClassifierPolicy};
pub use transcription_service::{RetryPolicy, TranscriptionService};
