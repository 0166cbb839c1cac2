mod health;
mod transcribe;

pub use health::health_handler;
pub use transcribe::{method_not_allowed_handler, transcribe_handler};
