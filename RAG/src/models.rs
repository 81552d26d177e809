use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub filename: String,
    pub content: String,
    pub chunks: Vec<DocumentChunk>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub id: String,
    pub content: String,
    pub start_position: usize,
    pub end_position: usize,
    pub embedding: Option<Vec<f32>>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub answer: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ComplaintRequest {
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplaintResponse {
    pub department: String,
    pub department_id: u8,
    pub raw_response: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    pub transcription: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChunkPreview {
    pub chunk_id: usize,
    pub content_preview: String,
    pub full_length: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebugContentResponse {
    pub total_chunks: usize,
    pub pdf_loaded: bool,
    pub content_preview: Vec<ChunkPreview>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DebugErrorResponse {
    pub error: String,
    pub pdf_loaded: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub error_kind: String,
}

// Groq speaks the OpenAI chat-completions dialect.

#[derive(Debug, Serialize, Deserialize)]
pub struct GroqChatRequest {
    pub model: String,
    pub messages: Vec<GroqMessage>,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroqMessage {
    pub role: String,
    pub content: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroqChatResponse {
    pub choices: Vec<GroqChoice>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroqChoice {
    pub message: GroqMessage,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GroqTranscriptionResponse {
    pub text: String,
}
