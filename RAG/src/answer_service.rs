use crate::models::DocumentChunk;
use crate::providers::{AnswerSynthesizer, LlmClient};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Stuffs every retrieved segment into one QA prompt.
pub struct StuffAnswerSynthesizer {
    llm: Arc<dyn LlmClient>,
}

impl StuffAnswerSynthesizer {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }

    fn build_context(&self, segments: &[DocumentChunk]) -> String {
        segments
            .iter()
            .map(|segment| segment.content.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    fn build_prompt(&self, question: &str, context: &str) -> String {
        format!(
            r#"Use the following pieces of context to answer the question at the end. If you don't know the answer, just say that you don't know, don't try to make up an answer.

{context}

Question: {question}
Helpful Answer:"#
        )
    }
}

#[async_trait]
impl AnswerSynthesizer for StuffAnswerSynthesizer {
    async fn synthesize(&self, question: &str, segments: &[DocumentChunk]) -> Result<String> {
        let context = self.build_context(segments);
        let prompt = self.build_prompt(question, &context);

        let answer = self.llm.complete(&prompt).await?;
        Ok(answer.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingLlm {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl LlmClient for RecordingLlm {
        async fn complete(&self, prompt: &str) -> Result<String> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok("  The office opens at nine.\n".to_string())
        }

        fn model(&self) -> &str {
            "recording"
        }
    }

    fn segment(content: &str) -> DocumentChunk {
        DocumentChunk {
            id: content.to_string(),
            content: content.to_string(),
            start_position: 0,
            end_position: content.len(),
            embedding: None,
        }
    }

    #[tokio::test]
    async fn prompt_contains_context_and_question() {
        let llm = Arc::new(RecordingLlm::default());
        let synthesizer = StuffAnswerSynthesizer::new(llm.clone());

        let answer = synthesizer
            .synthesize(
                "When does the office open?",
                &[segment("Hours: 9am-5pm."), segment("Closed on Sundays.")],
            )
            .await
            .unwrap();

        assert_eq!(answer, "The office opens at nine.");

        let prompts = llm.prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Hours: 9am-5pm.\n\nClosed on Sundays."));
        assert!(prompts[0].ends_with("Question: When does the office open?\nHelpful Answer:"));
    }
}
