//! @acp:module "Field Classifier"
//! @acp:summary "Infers semantic field types from weighted attribute signals"
//! @acp:domain forms
//! @acp:layer logic
//!
//! # Classification Algorithm
//!
//! 1. **Gate** read-only, disabled, multi-line and rich-text fields (no candidates)
//! 2. **Evaluate** signals in fixed priority order, each nominating at most one type:
//!    autocomplete (1.0), input type (0.9), name (0.8), id (0.7),
//!    placeholder (0.6), aria-label (0.6), label text (0.6)
//! 3. **Merge** by field type, keeping the highest confidence
//! 4. **Rank** by confidence descending
//!
//! Ties between different types at the same confidence keep signal-priority
//! order: the type nominated by the earlier signal comes first.

pub mod field;
pub mod signals;
pub mod types;

pub use field::{FieldDescriptor, FieldKind};
pub use signals::{autocomplete_type, input_type_type, match_patterns};
pub use types::{Candidate, FieldType, Signal};

/// @acp:summary "Rank candidate field types for a field, highest confidence first"
pub fn classify(field: &FieldDescriptor) -> Vec<Candidate> {
    if !field.accepts_suggestions() {
        return Vec::new();
    }

    let mut candidates = CandidateSet::default();

    for signal in Signal::all() {
        if let Some(field_type) = nominate(*signal, field) {
            candidates.add(field_type, *signal);
        }
    }

    let ranked = candidates.into_ranked();
    tracing::debug!(
        "Classified field name={:?} id={:?}: {:?}",
        field.name,
        field.id,
        ranked
            .iter()
            .map(|c| format!("{}={}", c.field_type, c.confidence))
            .collect::<Vec<_>>()
    );
    ranked
}

/// Best candidate, if any
pub fn best_match(field: &FieldDescriptor) -> Option<Candidate> {
    classify(field).into_iter().next()
}

/// Field type a single signal nominates, if any
fn nominate(signal: Signal, field: &FieldDescriptor) -> Option<FieldType> {
    match signal {
        Signal::Autocomplete => field.autocomplete.as_deref().and_then(autocomplete_type),
        Signal::InputType => field
            .normalized_input_type()
            .and_then(|input_type| input_type_type(&input_type)),
        Signal::Name => field.name.as_deref().and_then(match_patterns),
        Signal::Id => field.id.as_deref().and_then(match_patterns),
        Signal::Placeholder => field.placeholder.as_deref().and_then(match_patterns),
        Signal::AriaLabel => field.aria_label.as_deref().and_then(match_patterns),
        Signal::Label => field.label_text().and_then(match_patterns),
    }
}

/// Candidates keyed by field type, in first-nomination order
#[derive(Debug, Default)]
struct CandidateSet {
    entries: Vec<Candidate>,
}

impl CandidateSet {
    fn add(&mut self, field_type: FieldType, signal: Signal) {
        let confidence = signal.confidence();
        match self.entries.iter_mut().find(|c| c.field_type == field_type) {
            Some(existing) => {
                if existing.confidence < confidence {
                    existing.confidence = confidence;
                    existing.signal = signal;
                }
            }
            None => self.entries.push(Candidate {
                field_type,
                confidence,
                signal,
            }),
        }
    }

    fn into_ranked(mut self) -> Vec<Candidate> {
        // Stable, so equal confidences keep nomination order
        self.entries
            .sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
        self.entries
    }
}
