#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use rag_system::{AnswerSynthesizer, DocumentChunk, LlmClient, Retriever, Transcriber};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

pub fn chunk(content: &str) -> DocumentChunk {
    DocumentChunk {
        id: content.to_string(),
        content: content.to_string(),
        start_position: 0,
        end_position: content.len(),
        embedding: None,
    }
}

/// Returns a fixed set of chunks, or fails when `error` is set.
#[derive(Default)]
pub struct StubRetriever {
    pub chunks: Vec<DocumentChunk>,
    pub error: Option<String>,
    pub calls: AtomicUsize,
}

impl StubRetriever {
    pub fn with_chunks(contents: &[&str]) -> Self {
        Self {
            chunks: contents.iter().map(|c| chunk(c)).collect(),
            ..Default::default()
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Retriever for StubRetriever {
    async fn similarity_search(&self, _query: &str, k: usize) -> Result<Vec<DocumentChunk>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(message) = &self.error {
            return Err(anyhow::anyhow!(message.clone()));
        }
        Ok(self.chunks.iter().take(k).cloned().collect())
    }
}

#[derive(Default)]
pub struct RecordingSynthesizer {
    pub calls: Mutex<Vec<(String, usize)>>,
    pub error: Option<String>,
}

impl RecordingSynthesizer {
    pub fn failing(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AnswerSynthesizer for RecordingSynthesizer {
    async fn synthesize(&self, question: &str, segments: &[DocumentChunk]) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), segments.len()));
        if let Some(message) = &self.error {
            return Err(anyhow::anyhow!(message.clone()));
        }
        Ok(format!("synthesized: {}", question))
    }
}

/// Replies with a canned completion and records every prompt.
pub struct CannedLlm {
    pub reply: Result<String, String>,
    pub prompts: Mutex<Vec<String>>,
}

impl CannedLlm {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: Ok(reply.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompt_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl LlmClient for CannedLlm {
    async fn complete(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(|e| anyhow::anyhow!(e))
    }

    fn model(&self) -> &str {
        "canned"
    }
}

/// Records the temp path it was handed and whether the file existed then.
pub struct RecordingTranscriber {
    pub reply: Result<String, String>,
    pub seen: Mutex<Vec<(PathBuf, bool, Vec<u8>)>>,
}

impl RecordingTranscriber {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn seen_paths(&self) -> Vec<PathBuf> {
        self.seen
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _, _)| path.clone())
            .collect()
    }
}

#[async_trait]
impl Transcriber for RecordingTranscriber {
    async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let contents = std::fs::read(audio_path).unwrap_or_default();
        self.seen
            .lock()
            .unwrap()
            .push((audio_path.to_path_buf(), audio_path.exists(), contents));
        self.reply.clone().map_err(|e| anyhow::anyhow!(e))
    }
}
