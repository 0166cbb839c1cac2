mod asset_cache;
mod transcription_backend;

pub use asset_cache::{AssetCache, CacheStrategy, CachedAsset};
pub use transcription_backend::{BackendFailure, TranscriptionBackend};
