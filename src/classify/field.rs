//! @acp:module "Field Descriptor"
//! @acp:summary "Read-only snapshot of an editable element's attributes"
//! @acp:domain forms
//! @acp:layer model

use serde::{Deserialize, Serialize};

/// Kind of editable element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    /// Single-line `<input>`
    #[default]
    Input,
    /// Multi-line `<textarea>`
    Textarea,
    /// Rich-text element with `contenteditable`
    ContentEditable,
}

/// Input types the popup can be opened on (the empty string is a missing `type`)
const POPUP_INPUT_TYPES: &[&str] = &["text", "email", "tel", "url", "search", "password", "number", ""];

/// @acp:summary "Observable attributes of a form field at classification time"
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldDescriptor {
    pub kind: FieldKind,
    /// `type` attribute of an input
    #[serde(rename = "type")]
    pub input_type: Option<String>,
    pub name: Option<String>,
    pub id: Option<String>,
    pub placeholder: Option<String>,
    pub aria_label: Option<String>,
    /// Text of a `<label>` whose `for` references this field's id
    pub label_for: Option<String>,
    /// Text of the closest enclosing `<label>`
    pub enclosing_label: Option<String>,
    pub autocomplete: Option<String>,
    pub read_only: bool,
    pub disabled: bool,
}

impl FieldDescriptor {
    /// An enabled single-line input with no attributes
    pub fn input() -> Self {
        Self::default()
    }

    pub fn textarea() -> Self {
        Self {
            kind: FieldKind::Textarea,
            ..Self::default()
        }
    }

    pub fn content_editable() -> Self {
        Self {
            kind: FieldKind::ContentEditable,
            ..Self::default()
        }
    }

    pub fn with_type(mut self, input_type: impl Into<String>) -> Self {
        self.input_type = Some(input_type.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    pub fn with_label_for(mut self, text: impl Into<String>) -> Self {
        self.label_for = Some(text.into());
        self
    }

    pub fn with_enclosing_label(mut self, text: impl Into<String>) -> Self {
        self.enclosing_label = Some(text.into());
        self
    }

    pub fn with_autocomplete(mut self, autocomplete: impl Into<String>) -> Self {
        self.autocomplete = Some(autocomplete.into());
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Resolved label text: an explicit `for` label first, else the enclosing label
    pub fn label_text(&self) -> Option<&str> {
        non_blank(self.label_for.as_deref()).or_else(|| non_blank(self.enclosing_label.as_deref()))
    }

    /// Normalized input type, `None` for textareas and rich-text elements
    pub fn normalized_input_type(&self) -> Option<String> {
        match self.kind {
            FieldKind::Input => Some(
                self.input_type
                    .as_deref()
                    .unwrap_or("")
                    .trim()
                    .to_lowercase(),
            ),
            FieldKind::Textarea | FieldKind::ContentEditable => None,
        }
    }

    /// Whether the field may receive type-specific suggestions at all
    pub fn accepts_suggestions(&self) -> bool {
        !self.read_only && !self.disabled && self.kind == FieldKind::Input
    }

    /// Whether the insertion popup can be opened on this field
    pub fn is_popup_target(&self) -> bool {
        match self.kind {
            FieldKind::Input => {
                let input_type = self.normalized_input_type().unwrap_or_default();
                !self.read_only && !self.disabled && POPUP_INPUT_TYPES.contains(&input_type.as_str())
            }
            FieldKind::Textarea => !self.read_only && !self.disabled,
            FieldKind::ContentEditable => true,
        }
    }
}

fn non_blank(text: Option<&str>) -> Option<&str> {
    text.map(str::trim).filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_prefers_for_reference() {
        let field = FieldDescriptor::input()
            .with_label_for("  Email address ")
            .with_enclosing_label("Contact");
        assert_eq!(field.label_text(), Some("Email address"));
    }

    #[test]
    fn test_label_falls_back_to_enclosing() {
        let field = FieldDescriptor::input()
            .with_label_for("   ")
            .with_enclosing_label("City");
        assert_eq!(field.label_text(), Some("City"));
        assert_eq!(FieldDescriptor::input().label_text(), None);
    }

    #[test]
    fn test_accepts_suggestions() {
        assert!(FieldDescriptor::input().accepts_suggestions());
        assert!(!FieldDescriptor::input().read_only().accepts_suggestions());
        assert!(!FieldDescriptor::input().disabled().accepts_suggestions());
        assert!(!FieldDescriptor::textarea().accepts_suggestions());
        assert!(!FieldDescriptor::content_editable().accepts_suggestions());
    }

    #[test]
    fn test_popup_targets() {
        assert!(FieldDescriptor::input().is_popup_target());
        assert!(FieldDescriptor::input().with_type("EMAIL").is_popup_target());
        assert!(!FieldDescriptor::input().with_type("checkbox").is_popup_target());
        assert!(!FieldDescriptor::input().with_type("date").is_popup_target());
        assert!(!FieldDescriptor::input().read_only().is_popup_target());
        assert!(FieldDescriptor::textarea().is_popup_target());
        assert!(!FieldDescriptor::textarea().disabled().is_popup_target());
        assert!(FieldDescriptor::content_editable().is_popup_target());
    }

    #[test]
    fn test_deserialize_descriptor() {
        let json = r#"{
            "kind": "input",
            "type": "text",
            "name": "zip",
            "ariaLabel": "Postal code",
            "readOnly": false
        }"#;
        let field: FieldDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(field.input_type.as_deref(), Some("text"));
        assert_eq!(field.aria_label.as_deref(), Some("Postal code"));
        assert_eq!(field.kind, FieldKind::Input);
        assert!(!field.disabled);

        let editable: FieldDescriptor =
            serde_json::from_str(r#"{"kind": "content-editable"}"#).unwrap();
        assert_eq!(editable.kind, FieldKind::ContentEditable);
    }
}
