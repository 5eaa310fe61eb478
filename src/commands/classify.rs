//! @acp:module "Classify Command"
//! @acp:summary "Show the ranked field-type candidates for a form field"
//! @acp:domain cli
//! @acp:layer handler

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::classify::{classify, FieldDescriptor, FieldKind};

use super::read_field;

/// Field attributes given as command-line flags
#[derive(Debug, Clone, Default)]
pub struct FieldArgs {
    pub kind: FieldKind,
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    pub label: Option<String>,
    pub autocomplete: Option<String>,
    pub read_only: bool,
    pub disabled: bool,
}

impl FieldArgs {
    /// Whether any attribute was given on the command line
    pub fn is_empty(&self) -> bool {
        self.input_type.is_none()
            && self.name.is_none()
            && self.id.is_none()
            && self.placeholder.is_none()
            && self.aria_label.is_none()
            && self.label.is_none()
            && self.autocomplete.is_none()
            && self.kind == FieldKind::Input
            && !self.read_only
            && !self.disabled
    }

    pub fn into_descriptor(self) -> FieldDescriptor {
        FieldDescriptor {
            kind: self.kind,
            input_type: self.input_type,
            name: self.name,
            id: self.id,
            placeholder: self.placeholder,
            aria_label: self.aria_label,
            label_for: self.label,
            enclosing_label: None,
            autocomplete: self.autocomplete,
            read_only: self.read_only,
            disabled: self.disabled,
        }
    }

    /// Descriptor from flags, or from a JSON file / stdin when no flags are set
    pub fn resolve(self, file: Option<&PathBuf>) -> Result<FieldDescriptor> {
        if file.is_none() && !self.is_empty() {
            Ok(self.into_descriptor())
        } else {
            read_field(file)
        }
    }
}

/// Options for the classify command
#[derive(Debug, Clone)]
pub struct ClassifyOptions {
    /// JSON field descriptor file (stdin if neither file nor flags given)
    pub file: Option<PathBuf>,
    pub field: FieldArgs,
    /// Output as JSON
    pub json: bool,
}

/// Execute the classify command
pub fn execute_classify(options: ClassifyOptions) -> Result<()> {
    let field = options.field.resolve(options.file.as_ref())?;
    let candidates = classify(&field);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    if candidates.is_empty() {
        if field.accepts_suggestions() {
            println!("{} No field type detected", style("○").dim());
        } else {
            println!(
                "{} Field does not take suggestions ({:?}{}{})",
                style("○").dim(),
                field.kind,
                if field.read_only { ", read-only" } else { "" },
                if field.disabled { ", disabled" } else { "" }
            );
        }
        return Ok(());
    }

    println!("{}", style("Field type candidates").bold());
    for candidate in &candidates {
        println!(
            "  {:<12} {:.1}  {}",
            style(candidate.field_type.as_str()).cyan(),
            candidate.confidence,
            style(format!("via {}", candidate.signal)).dim()
        );
    }

    Ok(())
}
