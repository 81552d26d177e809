use anyhow::{Context, Result};
use rag_system::{
    ChatService, ComplaintClassifier, Config, DocumentProcessor, GroqService, Retriever,
    StuffAnswerSynthesizer, TextSplitter, TranscriptionService, VectorIndex,
};
use std::sync::Arc;

/// Everything the handlers need, built once in `main` and shared read-only.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    retriever: Arc<dyn Retriever>,
    chat: ChatService,
    classifier: ComplaintClassifier,
    transcription: TranscriptionService,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        log::info!("Initializing RAG system...");

        let splitter = TextSplitter::new(config.chunk_size, config.chunk_overlap)?;
        let document = DocumentProcessor::new(splitter)
            .load_document(&config.pdf_path, &config.text_path)
            .context("Failed to load source document")?;
        log::info!(
            "Loaded {} ({} chunks)",
            document.filename,
            document.chunks.len()
        );

        let retriever: Arc<dyn Retriever> = Arc::new(VectorIndex::from_document(&document));
        let groq = Arc::new(GroqService::new(config));
        let synthesizer = Arc::new(StuffAnswerSynthesizer::new(groq.clone()));

        let state = Self::from_parts(
            retriever.clone(),
            ChatService::new(retriever, synthesizer, config.retrieval_k),
            ComplaintClassifier::new(groq.clone()),
            TranscriptionService::new(groq),
        );

        log::info!("RAG system initialized with model {}", config.groq_model);
        Ok(state)
    }

    pub fn from_parts(
        retriever: Arc<dyn Retriever>,
        chat: ChatService,
        classifier: ComplaintClassifier,
        transcription: TranscriptionService,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                retriever,
                chat,
                classifier,
                transcription,
            }),
        }
    }

    pub fn retriever(&self) -> &dyn Retriever {
        self.inner.retriever.as_ref()
    }

    pub fn chat(&self) -> &ChatService {
        &self.inner.chat
    }

    pub fn classifier(&self) -> &ComplaintClassifier {
        &self.inner.classifier
    }

    pub fn transcription(&self) -> &TranscriptionService {
        &self.inner.transcription
    }
}
