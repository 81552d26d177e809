use crate::config::Config;
use crate::models::*;
use crate::providers::{LlmClient, Transcriber};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use std::path::Path;

/// Client for Groq's OpenAI-compatible chat and audio endpoints.
pub struct GroqService {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    transcription_model: String,
}

impl GroqService {
    pub fn new(config: &Config) -> Self {
        Self {
            client: Client::new(),
            api_key: config.groq_api_key.clone(),
            base_url: config.groq_base_url.clone(),
            model: config.groq_model.clone(),
            temperature: config.groq_temperature,
            transcription_model: config.transcription_model.clone(),
        }
    }

    async fn chat_completion(&self, prompt: &str) -> Result<String> {
        let request = GroqChatRequest {
            model: self.model.clone(),
            messages: vec![GroqMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
        };

        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Groq API error ({}): {}", status, error_text));
        }

        let groq_response: GroqChatResponse = response.json().await?;

        groq_response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| anyhow::anyhow!("Groq API returned no choices"))
    }
}

#[async_trait]
impl LlmClient for GroqService {
    async fn complete(&self, prompt: &str) -> Result<String> {
        log::debug!("Sending {} char prompt to {}", prompt.len(), self.model);
        self.chat_completion(prompt).await
    }

    fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Transcriber for GroqService {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(audio_path)
            .await
            .with_context(|| format!("failed to read {}", audio_path.display()))?;
        let file_name = audio_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| "audio.wav".to_string());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name))
            .text("model", self.transcription_model.clone())
            .text("response_format", "json");

        let url = format!("{}/audio/transcriptions", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!(
                "Groq transcription error ({}): {}",
                status,
                error_text
            ));
        }

        let transcription: GroqTranscriptionResponse = response.json().await?;
        Ok(transcription.text)
    }
}
