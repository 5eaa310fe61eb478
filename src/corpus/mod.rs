//! @acp:module "Corpus Index"
//! @acp:summary "Sentence decomposition and sentence-to-paragraph lookup for a fixed corpus"
//! @acp:domain ipsum
//! @acp:layer model
//!
//! # Corpus Index
//!
//! A corpus is an ordered list of paragraphs. Building the index:
//!
//! 1. **Split** each paragraph on a period followed by whitespace
//! 2. **Terminate** every fragment with a period if it lacks one
//! 3. **Drop** fragments of one character or less (the empty tail after a final period)
//! 4. **Flatten** surviving sentences in reading order, recording each one's paragraph
//!
//! The built-in corpus is indexed once per process, see [`CorpusIndex::builtin`].

mod builtin;

pub use builtin::DEFAULT_PARAGRAPHS;

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{RciError, Result};

/// Sentence boundary: a period followed by whitespace
static SENTENCE_BREAK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\.\s+").unwrap());

static BUILTIN: LazyLock<CorpusIndex> = LazyLock::new(|| {
    CorpusIndex::build(DEFAULT_PARAGRAPHS.iter().map(|p| p.to_string()).collect())
        .expect("built-in corpus is not empty")
});

/// @acp:summary "Paragraphs plus their flattened sentences and sentence-to-paragraph map"
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusIndex {
    paragraphs: Vec<String>,
    sentences: Vec<String>,
    sentence_to_paragraph: Vec<usize>,
}

impl CorpusIndex {
    /// @acp:summary "Index a corpus; an empty corpus is rejected"
    pub fn build(paragraphs: Vec<String>) -> Result<Self> {
        if paragraphs.is_empty() {
            return Err(RciError::EmptyCorpus);
        }

        let mut sentences = Vec::new();
        let mut sentence_to_paragraph = Vec::new();

        for (index, paragraph) in paragraphs.iter().enumerate() {
            for sentence in split_sentences(paragraph) {
                sentences.push(sentence);
                sentence_to_paragraph.push(index);
            }
        }

        tracing::debug!(
            "Indexed {} paragraphs into {} sentences",
            paragraphs.len(),
            sentences.len()
        );

        Ok(Self {
            paragraphs,
            sentences,
            sentence_to_paragraph,
        })
    }

    /// @acp:summary "Shared index over the built-in reference corpus"
    pub fn builtin() -> &'static CorpusIndex {
        &BUILTIN
    }

    /// @acp:summary "Load a corpus file: a JSON array of strings, or plain text with blank-line separated paragraphs"
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::build(parse_corpus_text(&content)?)
    }

    pub fn paragraphs(&self) -> &[String] {
        &self.paragraphs
    }

    pub fn sentences(&self) -> &[String] {
        &self.sentences
    }

    /// Paragraph index for every sentence, parallel to [`CorpusIndex::sentences`]
    pub fn sentence_to_paragraph(&self) -> &[usize] {
        &self.sentence_to_paragraph
    }

    /// Paragraph a sentence was extracted from
    pub fn paragraph_of(&self, sentence: usize) -> Option<usize> {
        self.sentence_to_paragraph.get(sentence).copied()
    }
}

/// Split a paragraph into sentences, each ending in a period
pub fn split_sentences(paragraph: &str) -> Vec<String> {
    SENTENCE_BREAK
        .split(paragraph)
        .map(|fragment| {
            if fragment.ends_with('.') {
                fragment.to_string()
            } else {
                format!("{}.", fragment)
            }
        })
        .filter(|sentence| sentence.chars().count() > 1)
        .collect()
}

fn parse_corpus_text(content: &str) -> Result<Vec<String>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    Ok(paragraphs)
}
