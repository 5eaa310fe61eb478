//! @acp:module "Errors"
//! @acp:summary "Library error type and result alias"
//! @acp:domain cli
//! @acp:layer model

use thiserror::Error;

/// @acp:summary "Errors raised by the rci library"
#[derive(Debug, Error)]
pub enum RciError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A corpus must contain at least one paragraph
    #[error("corpus has no paragraphs")]
    EmptyCorpus,

    #[error("unknown field type: {0}")]
    UnknownFieldType(String),

    #[error("unknown excerpt type: {0} (expected 1-sentence, 2-sentences, 1-paragraph or 2-paragraphs)")]
    UnknownExcerpt(String),
}

pub type Result<T> = std::result::Result<T, RciError>;
