/// Successful transcription outcome handed to the response normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptionResult {
    pub text: String,
    pub attempts: u32,
}
