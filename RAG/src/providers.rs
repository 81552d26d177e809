//! Seams to the external collaborators: retrieval, answer synthesis, the
//! hosted LLM and speech recognition.

use crate::models::DocumentChunk;
use anyhow::Result;
use async_trait::async_trait;
use std::path::Path;

/// Ranks stored segments by similarity to a query.
///
/// An empty result is a valid answer, not an error.
#[async_trait]
pub trait Retriever: Send + Sync {
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<DocumentChunk>>;
}

/// Single prompt in, completion text out. No retries, no streaming.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, prompt: &str) -> Result<String>;

    fn model(&self) -> &str;
}

/// Composes an answer to `question` grounded in `segments`.
#[async_trait]
pub trait AnswerSynthesizer: Send + Sync {
    async fn synthesize(&self, question: &str, segments: &[DocumentChunk]) -> Result<String>;
}

#[async_trait]
pub trait Transcriber: Send + Sync {
    async fn transcribe(&self, audio_path: &Path) -> Result<String>;
}
