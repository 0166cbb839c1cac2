mod backend_factory;
mod polling_job_backend;
mod sync_inference_backend;

pub use backend_factory::{AnyBackend, BackendFactory, IntegrationMode};
pub use polling_job_backend::{PollingJobBackend, PollingSettings};
pub use sync_inference_backend::SyncInferenceBackend;
