//! @acp:module "Text Insertion"
//! @acp:summary "How inserted text combines with a field's current value and selection"
//! @acp:domain forms
//! @acp:layer logic
//!
//! Some input types expose no selection range to scripts; text inserted into
//! those is appended. Everything else replaces the current selection and
//! leaves the caret after the inserted text. Offsets count characters.

use serde::Serialize;

use crate::classify::{FieldDescriptor, FieldKind};

/// Input types without a usable selection range
const APPEND_ONLY_TYPES: &[&str] = &["email", "number", "date", "time", "month", "week", "range", "color"];

/// Selection range in characters; `start == end` is a bare caret
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn caret(at: usize) -> Self {
        Self::new(at, at)
    }

    /// Caret after the last character of `value`
    pub fn end_of(value: &str) -> Self {
        Self::caret(value.chars().count())
    }
}

/// How text is combined with the existing value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InsertMode {
    ReplaceSelection,
    Append,
}

/// Result of inserting text into a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Spliced {
    pub value: String,
    /// Caret position after insertion
    pub caret: usize,
}

/// @acp:summary "Insertion mode for a field"
pub fn insert_mode(field: &FieldDescriptor) -> InsertMode {
    match field.kind {
        FieldKind::Input => {
            let input_type = field.normalized_input_type().unwrap_or_default();
            if APPEND_ONLY_TYPES.contains(&input_type.as_str()) {
                InsertMode::Append
            } else {
                InsertMode::ReplaceSelection
            }
        }
        FieldKind::Textarea | FieldKind::ContentEditable => InsertMode::ReplaceSelection,
    }
}

/// @acp:summary "Insert `text` into `value` according to the field's insertion mode"
pub fn splice(field: &FieldDescriptor, value: &str, selection: Selection, text: &str) -> Spliced {
    match insert_mode(field) {
        InsertMode::Append => {
            let value = format!("{}{}", value, text);
            let caret = value.chars().count();
            Spliced { value, caret }
        }
        InsertMode::ReplaceSelection => replace_range(value, selection, text),
    }
}

fn replace_range(value: &str, selection: Selection, text: &str) -> Spliced {
    let len = value.chars().count();
    let start = selection.start.min(len);
    let end = selection.end.clamp(start, len);

    let head: String = value.chars().take(start).collect();
    let tail: String = value.chars().skip(end).collect();

    Spliced {
        value: format!("{}{}{}", head, text, tail),
        caret: start + text.chars().count(),
    }
}
