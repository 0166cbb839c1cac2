mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    BackendSettings, LimitSettings, PollSettings, RetrySettings, ServerSettings, Settings,
};
