use crate::models::DocumentChunk;
use std::collections::{HashMap, HashSet};

const MAX_VOCABULARY: usize = 1000;
const MIN_DIMENSIONS: usize = 100;

/// TF-IDF embedder fitted once on the document's chunks.
///
/// Queries are embedded against the same vocabulary, so a query made only of
/// unseen words maps to the zero vector.
#[derive(Debug, Default)]
pub struct EmbeddingService {
    vocabulary: HashMap<String, usize>,
    idf_scores: HashMap<String, f32>,
}

impl EmbeddingService {
    pub fn fit(chunks: &[DocumentChunk]) -> Self {
        log::info!("Fitting TF-IDF vocabulary on {} chunks...", chunks.len());

        let mut word_counts: HashMap<String, usize> = HashMap::new();
        let mut doc_frequencies: HashMap<String, usize> = HashMap::new();
        let total_docs = chunks.len();

        for chunk in chunks {
            let words = tokenize(&chunk.content);
            let unique_words: HashSet<&String> = words.iter().collect();

            for word in &words {
                *word_counts.entry(word.clone()).or_insert(0) += 1;
            }

            for word in unique_words {
                *doc_frequencies.entry(word.clone()).or_insert(0) += 1;
            }
        }

        let idf_scores: HashMap<String, f32> = doc_frequencies
            .iter()
            .map(|(word, df)| {
                let idf = (total_docs as f32 / *df as f32).ln();
                (word.clone(), idf)
            })
            .collect();

        // Most frequent terms first; ties broken alphabetically so the
        // vocabulary is stable across runs.
        let mut word_freq_pairs: Vec<_> = word_counts.iter().collect();
        word_freq_pairs.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        let vocabulary: HashMap<String, usize> = word_freq_pairs
            .into_iter()
            .take(MAX_VOCABULARY)
            .enumerate()
            .map(|(idx, (word, _))| (word.clone(), idx))
            .collect();

        log::info!("Vocabulary size: {}", vocabulary.len());

        Self {
            vocabulary,
            idf_scores,
        }
    }

    pub fn dimensions(&self) -> usize {
        self.vocabulary.len().max(MIN_DIMENSIONS)
    }

    pub fn embed(&self, text: &str) -> Vec<f32> {
        let mut embedding = vec![0.0; self.dimensions()];
        let words = tokenize(text);
        let total_words = words.len() as f32;

        for (word, count) in count_words(&words) {
            if let Some(&idx) = self.vocabulary.get(&word) {
                let tf = count as f32 / total_words;
                let idf = self.idf_scores.get(&word).copied().unwrap_or(1.0);
                embedding[idx] = tf * idf;
            }
        }

        let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in embedding.iter_mut() {
                *value /= norm;
            }
        }

        embedding
    }

    pub fn calculate_similarity(&self, embedding1: &[f32], embedding2: &[f32]) -> f32 {
        let min_len = embedding1.len().min(embedding2.len());

        let dot_product: f32 = embedding1[..min_len]
            .iter()
            .zip(embedding2[..min_len].iter())
            .map(|(a, b)| a * b)
            .sum();

        let norm1: f32 = embedding1[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();
        let norm2: f32 = embedding2[..min_len].iter().map(|x| x * x).sum::<f32>().sqrt();

        if norm1 == 0.0 || norm2 == 0.0 {
            0.0
        } else {
            dot_product / (norm1 * norm2)
        }
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric())
                .collect::<String>()
        })
        .filter(|word| word.chars().count() > 2)
        .collect()
}

fn count_words(words: &[String]) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for word in words {
        *counts.entry(word.clone()).or_insert(0) += 1;
    }
    counts
}
