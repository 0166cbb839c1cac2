use std::sync::Arc;

use crate::application::ports::TranscriptionBackend;
use crate::application::services::TranscriptionService;
use crate::presentation::config::Settings;

pub struct AppState<B>
where
    B: TranscriptionBackend,
{
    pub transcription_service: Arc<TranscriptionService<B>>,
    pub settings: Settings,
}

impl<B> Clone for AppState<B>
where
    B: TranscriptionBackend,
{
    fn clone(&self) -> Self {
        Self {
            transcription_service: Arc::clone(&self.transcription_service),
            settings: self.settings.clone(),
        }
    }
}
