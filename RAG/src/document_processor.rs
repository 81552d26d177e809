use crate::models::*;
use crate::text_splitter::{char_len, TextSplitter};
use anyhow::{Context, Result};
use pdf_extract::extract_text;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use uuid::Uuid;

pub struct DocumentProcessor {
    splitter: TextSplitter,
}

impl DocumentProcessor {
    pub fn new(splitter: TextSplitter) -> Self {
        Self { splitter }
    }

    /// Loads the PDF if it exists, otherwise the text file. Missing both is
    /// fatal for the caller.
    pub fn load_document(&self, pdf_path: &Path, text_path: &Path) -> Result<Document> {
        if pdf_path.exists() {
            self.process_pdf(pdf_path)
        } else if text_path.exists() {
            self.process_text(text_path)
        } else {
            Err(anyhow::anyhow!(
                "No {} or {} found!",
                pdf_path.display(),
                text_path.display()
            ))
        }
    }

    fn process_pdf(&self, file_path: &Path) -> Result<Document> {
        let filename = display_name(file_path);
        log::info!("Processing PDF: {}", filename);

        let raw = extract_text(file_path)
            .with_context(|| format!("failed to extract text from {}", file_path.display()))?;
        let content = clean_pdf_text(&raw);

        Ok(self.build_document(filename, content))
    }

    fn process_text(&self, file_path: &Path) -> Result<Document> {
        let filename = display_name(file_path);
        log::info!("Processing text file: {}", filename);

        let content = fs::read_to_string(file_path)
            .with_context(|| format!("failed to read {} as UTF-8", file_path.display()))?;

        Ok(self.build_document(filename, content))
    }

    pub fn build_document(&self, filename: String, content: String) -> Document {
        let chunks = self.create_chunks(&content);

        Document {
            id: Uuid::new_v4().to_string(),
            filename,
            content,
            chunks,
        }
    }

    fn create_chunks(&self, content: &str) -> Vec<DocumentChunk> {
        let mut chunks = Vec::new();
        let mut search_from = 0usize;

        for text in self.splitter.split_text(content) {
            // Positions are byte offsets into the source. Chunks are trimmed
            // substrings emitted in order, so each one starts at or after
            // the previous start.
            let start = content[search_from..]
                .find(text.as_str())
                .map(|offset| search_from + offset)
                .or_else(|| content.find(text.as_str()))
                .unwrap_or(search_from);
            let end = next_char_boundary(content, start + text.len());

            search_from = start;

            chunks.push(DocumentChunk {
                id: Uuid::new_v4().to_string(),
                content: text,
                start_position: start,
                end_position: end,
                embedding: None,
            });
        }

        log::info!(
            "Created {} chunks (size {}, overlap {})",
            chunks.len(),
            self.splitter.chunk_size(),
            self.splitter.chunk_overlap()
        );
        debug_assert!(chunks
            .iter()
            .all(|c| char_len(&c.content) <= self.splitter.chunk_size()));
        chunks
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn next_char_boundary(text: &str, mut idx: usize) -> usize {
    if idx >= text.len() {
        return text.len();
    }
    while !text.is_char_boundary(idx) {
        idx += 1;
    }
    idx
}

/// pdf-extract leaves trailing spaces and long runs of blank lines between
/// text blocks.
fn clean_pdf_text(text: &str) -> String {
    static TRAILING_SPACES: OnceLock<Regex> = OnceLock::new();
    static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

    let trailing = TRAILING_SPACES.get_or_init(|| Regex::new(r"[ \t]+\n").expect("valid regex"));
    let blank_runs = BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("valid regex"));

    let cleaned = trailing.replace_all(text, "\n");
    let cleaned = blank_runs.replace_all(&cleaned, "\n\n");

    cleaned.trim().to_string()
}
