#![forbid(unsafe_code)]

//! @acp:module "RCI Library"
//! @acp:summary "Lorem ipsum excerpts and fake form data for editable fields"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # RCI - Right-Click Ipsum
//!
//! Placeholder text and synthetic form values for editable fields.
//!
//! ## Features
//!
//! - **Excerpts**: 1-2 sentences or paragraphs from a fixed corpus, optionally
//!   starting at a random point, wrapping around at the end
//! - **Field detection**: infers what a form field expects (email, zip, card
//!   number, ...) from its attributes, ranked by confidence
//! - **Fake data**: plausible values per field type, or a coherent identity
//! - **Popup session**: menu state, keyboard navigation and insertion rules
//!
//! ## Example
//!
//! ```rust
//! use rci::{classify, ExcerptGenerator, ExcerptKind, FieldDescriptor, FieldType};
//!
//! let text = ExcerptGenerator::default().generate(ExcerptKind::OneSentence.request(false));
//! assert_eq!(text, "Lorem ipsum dolor sit amet, consectetur adipiscing elit.");
//!
//! let field = FieldDescriptor::input().with_autocomplete("postal-code");
//! assert_eq!(classify(&field)[0].field_type, FieldType::Zip);
//! ```

pub mod classify;
pub mod commands;
pub mod config;
pub mod corpus;
pub mod error;
pub mod excerpt;
pub mod fake;
pub mod insert;
pub mod popup;

// Re-exports
pub use classify::{best_match, classify, Candidate, FieldDescriptor, FieldKind, FieldType, Signal};
pub use config::{Config, Settings};
pub use corpus::CorpusIndex;
pub use error::{RciError, Result};
pub use excerpt::{Excerpt, ExcerptGenerator, ExcerptKind, ExcerptRequest, ExcerptUnit};
pub use fake::{generate_identity, Identity};
pub use insert::{splice, InsertMode, Selection, Spliced};
pub use popup::{Key, KeyOutcome, MenuAction, MenuItem, PopupHost, PopupSession};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
