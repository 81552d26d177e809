use crate::error::{Result, ServiceError};
use crate::providers::Transcriber;
use std::path::Path;
use std::sync::Arc;
use tempfile::NamedTempFile;

const DEFAULT_SUFFIX: &str = ".wav";

pub struct TranscriptionService {
    transcriber: Arc<dyn Transcriber>,
}

impl TranscriptionService {
    pub fn new(transcriber: Arc<dyn Transcriber>) -> Self {
        Self { transcriber }
    }

    /// Writes the payload to a temporary file that lives only for this call.
    /// The file is removed when `temp_audio` drops, whether or not the
    /// transcriber succeeded.
    pub async fn transcribe(&self, audio: &[u8], file_name: Option<&str>) -> Result<String> {
        if audio.is_empty() {
            return Err(ServiceError::validation("Empty audio payload"));
        }

        let suffix = audio_suffix(file_name);
        let temp_audio = write_temp_audio(audio, &suffix)
            .await
            .map_err(|e| ServiceError::upstream(format!("Failed to store audio: {}", e)))?;

        log::info!(
            "Transcribing {} bytes via {}",
            audio.len(),
            temp_audio.path().display()
        );

        let text = self
            .transcriber
            .transcribe(temp_audio.path())
            .await
            .map_err(|e| {
                log::error!("Transcription failed: {}", e);
                ServiceError::upstream(format!("Error transcribing audio: {}", e))
            })?;

        Ok(text)
    }
}

async fn write_temp_audio(audio: &[u8], suffix: &str) -> std::io::Result<NamedTempFile> {
    let temp_audio = tempfile::Builder::new()
        .prefix("speech-")
        .suffix(suffix)
        .tempfile()?;
    // Uploads can be up to 25 MiB; the bulk write stays off the runtime threads.
    tokio::fs::write(temp_audio.path(), audio).await?;
    Ok(temp_audio)
}

fn audio_suffix(file_name: Option<&str>) -> String {
    file_name
        .and_then(|name| Path::new(name).extension())
        .map(|ext| ext.to_string_lossy().to_string())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_follows_upload_extension() {
        assert_eq!(audio_suffix(Some("note.MP3")), ".mp3");
        assert_eq!(audio_suffix(Some("clip.webm")), ".webm");
    }

    #[test]
    fn suffix_defaults_to_wav() {
        assert_eq!(audio_suffix(None), ".wav");
        assert_eq!(audio_suffix(Some("recording")), ".wav");
        assert_eq!(audio_suffix(Some("odd.w@v")), ".wav");
    }
}
