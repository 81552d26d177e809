pub mod answer_service;
pub mod chat_service;
pub mod classifier;
pub mod config;
pub mod document_processor;
pub mod embedding_service;
pub mod error;
pub mod groq_service;
pub mod models;
pub mod providers;
pub mod text_splitter;
pub mod transcription;
pub mod vector_index;

pub use answer_service::StuffAnswerSynthesizer;
pub use chat_service::ChatService;
pub use classifier::ComplaintClassifier;
pub use config::Config;
pub use document_processor::DocumentProcessor;
pub use embedding_service::EmbeddingService;
pub use error::{Result, ServiceError};
pub use groq_service::GroqService;
pub use models::*;
pub use providers::{AnswerSynthesizer, LlmClient, Retriever, Transcriber};
pub use text_splitter::TextSplitter;
pub use transcription::TranscriptionService;
pub use vector_index::VectorIndex;
