use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_GROQ_MODEL: &str = "llama-3.1-8b-instant";
pub const DEFAULT_GROQ_BASE_URL: &str = "https://api.groq.com/openai/v1";
pub const DEFAULT_TRANSCRIPTION_MODEL: &str = "whisper-large-v3";
pub const DEFAULT_PDF_PATH: &str = "website_content.pdf";
pub const DEFAULT_TEXT_PATH: &str = "website_content.txt";

#[derive(Debug, Clone)]
pub struct Config {
    pub groq_api_key: String,
    pub groq_model: String,
    pub groq_base_url: String,
    pub groq_temperature: f32,
    pub transcription_model: String,
    pub pdf_path: PathBuf,
    pub text_path: PathBuf,
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub retrieval_k: usize,
    pub bind_addr: String,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first if a
    /// `.env` file should be honoured.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let groq_api_key = lookup("GROQ_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| anyhow::anyhow!("GROQ_API_KEY environment variable not set"))?;

        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let config = Self {
            groq_api_key,
            groq_model: text("GROQ_MODEL", DEFAULT_GROQ_MODEL),
            groq_base_url: text("GROQ_BASE_URL", DEFAULT_GROQ_BASE_URL)
                .trim_end_matches('/')
                .to_string(),
            groq_temperature: parse_or(&lookup, "GROQ_TEMPERATURE", 0.7)?,
            transcription_model: text("TRANSCRIPTION_MODEL", DEFAULT_TRANSCRIPTION_MODEL),
            pdf_path: PathBuf::from(text("DOCUMENT_PDF_PATH", DEFAULT_PDF_PATH)),
            text_path: PathBuf::from(text("DOCUMENT_TEXT_PATH", DEFAULT_TEXT_PATH)),
            chunk_size: parse_or(&lookup, "CHUNK_SIZE", 1000)?,
            chunk_overlap: parse_or(&lookup, "CHUNK_OVERLAP", 200)?,
            retrieval_k: parse_or(&lookup, "RETRIEVAL_K", 3)?,
            bind_addr: text("BIND_ADDR", "0.0.0.0:8000"),
        };

        if config.chunk_overlap > config.chunk_size {
            anyhow::bail!(
                "CHUNK_OVERLAP ({}) must not exceed CHUNK_SIZE ({})",
                config.chunk_overlap,
                config.chunk_size
            );
        }
        if config.chunk_size == 0 {
            anyhow::bail!("CHUNK_SIZE must be greater than zero");
        }
        if config.retrieval_k == 0 {
            anyhow::bail!("RETRIEVAL_K must be greater than zero");
        }

        Ok(config)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}
