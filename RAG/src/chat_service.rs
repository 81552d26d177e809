use crate::error::{Result, ServiceError};
use crate::models::DocumentChunk;
use crate::providers::{AnswerSynthesizer, Retriever};
use std::sync::Arc;

pub const NO_RELEVANT_INFO: &str = "No relevant information found in the documents.";
pub const NO_CONTACT_INFO: &str = "No contact info found in the documents.";

const CONTACT_QUERY_KEYWORDS: [&str; 6] =
    ["contact", "phone", "email", "address", "number", "details"];
const CONTACT_SIGNALS: [&str; 8] = [
    "contact", "phone", "email", "address", "number", "@", "tel:", "call",
];

/// Routes a question either to the synthesizer or to a canned fallback.
///
/// Contact lookups only reach the LLM when at least one retrieved segment
/// actually carries contact details.
pub struct ChatService {
    retriever: Arc<dyn Retriever>,
    synthesizer: Arc<dyn AnswerSynthesizer>,
    k: usize,
}

impl ChatService {
    pub fn new(
        retriever: Arc<dyn Retriever>,
        synthesizer: Arc<dyn AnswerSynthesizer>,
        k: usize,
    ) -> Self {
        Self {
            retriever,
            synthesizer,
            k,
        }
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ServiceError::validation("No question provided"));
        }

        let relevant_chunks = self
            .retriever
            .similarity_search(question, self.k)
            .await
            .map_err(|e| ServiceError::upstream(format!("Error processing question: {}", e)))?;

        if relevant_chunks.is_empty() {
            log::info!("No chunks retrieved for question");
            return Ok(NO_RELEVANT_INFO.to_string());
        }

        if is_contact_query(question) {
            let with_contact = relevant_chunks
                .iter()
                .filter(|chunk| contains_contact_signal(&chunk.content))
                .count();

            if with_contact == 0 {
                log::info!(
                    "Contact question but none of {} chunks carry contact details",
                    relevant_chunks.len()
                );
                return Ok(NO_CONTACT_INFO.to_string());
            }

            log::info!("Contact question, {} chunks with contact details", with_contact);
        }

        self.synthesize(question, &relevant_chunks).await
    }

    async fn synthesize(&self, question: &str, chunks: &[DocumentChunk]) -> Result<String> {
        self.synthesizer
            .synthesize(question, chunks)
            .await
            .map_err(|e| {
                log::error!("Answer synthesis failed: {}", e);
                ServiceError::upstream(format!("Error processing question: {}", e))
            })
    }
}

pub fn is_contact_query(question: &str) -> bool {
    let question = question.to_lowercase();
    CONTACT_QUERY_KEYWORDS
        .iter()
        .any(|keyword| question.contains(keyword))
}

pub fn contains_contact_signal(content: &str) -> bool {
    let content = content.to_lowercase();
    CONTACT_SIGNALS.iter().any(|signal| content.contains(signal))
}
