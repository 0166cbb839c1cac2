mod detail_sanitizer;
mod init_tracing;
mod request_id;
mod tracing_config;

pub use detail_sanitizer::sanitize_detail;
pub use init_tracing::init_tracing;
pub use request_id::{request_id_middleware, RequestIdHeader, REQUEST_ID_HEADER};
pub use tracing_config::TracingConfig;
