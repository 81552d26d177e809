use crate::embedding_service::EmbeddingService;
use crate::models::*;
use crate::providers::Retriever;
use anyhow::Result;
use async_trait::async_trait;
use rayon::prelude::*;

/// In-memory cosine-similarity index. Built once at startup, read-only after.
pub struct VectorIndex {
    embedding_service: EmbeddingService,
    chunks: Vec<DocumentChunk>,
}

impl VectorIndex {
    pub fn build(mut chunks: Vec<DocumentChunk>) -> Self {
        let embedding_service = EmbeddingService::fit(&chunks);

        chunks.par_iter_mut().for_each(|chunk| {
            chunk.embedding = Some(embedding_service.embed(&chunk.content));
        });

        log::info!("Indexed {} chunks", chunks.len());

        Self {
            embedding_service,
            chunks,
        }
    }

    pub fn from_document(document: &Document) -> Self {
        Self::build(document.chunks.clone())
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Top `k` chunks by descending similarity. Ties keep document order, so
    /// a query with no known terms returns the first `k` chunks.
    pub fn search(&self, query: &str, k: usize) -> Vec<DocumentChunk> {
        let query_embedding = self.embedding_service.embed(query);

        let mut chunk_scores: Vec<(&DocumentChunk, f32)> = self
            .chunks
            .iter()
            .filter_map(|chunk| {
                chunk.embedding.as_ref().map(|embedding| {
                    let similarity = self
                        .embedding_service
                        .calculate_similarity(&query_embedding, embedding);
                    (chunk, similarity)
                })
            })
            .collect();

        chunk_scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        let relevant_chunks: Vec<DocumentChunk> = chunk_scores
            .into_iter()
            .take(k)
            .map(|(chunk, _)| chunk.clone())
            .collect();

        log::debug!("Found {} relevant chunks", relevant_chunks.len());
        relevant_chunks
    }
}

#[async_trait]
impl Retriever for VectorIndex {
    async fn similarity_search(&self, query: &str, k: usize) -> Result<Vec<DocumentChunk>> {
        Ok(self.search(query, k))
    }
}
