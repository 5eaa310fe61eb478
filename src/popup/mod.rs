//! @acp:module "Popup Session"
//! @acp:summary "Insertion menu contents, keyboard navigation and selection for one field"
//! @acp:domain forms
//! @acp:layer service
//!
//! A [`PopupSession`] is the state of one open insertion menu. The host owns
//! it (usually through a [`PopupHost`]) and feeds it key presses; the session
//! answers with what the host should do next.
//!
//! Menu layout:
//! 1. "Suggested for this field": one entry per classifier candidate, each
//!    with a preview value generated when the menu opens
//! 2. "Lorem Ipsum": the four excerpt sizes, generated on selection

use rand::RngCore;
use serde::Serialize;

use crate::classify::{classify, FieldDescriptor, FieldType};
use crate::excerpt::{ExcerptGenerator, ExcerptKind};
use crate::fake;

pub const SUGGESTIONS_HEADING: &str = "Suggested for this field";
pub const IPSUM_HEADING: &str = "Lorem Ipsum";

/// What selecting a menu entry inserts
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum MenuAction {
    /// Fake value previewed when the menu was built; inserted verbatim
    Suggestion { field_type: FieldType, value: String },
    /// Placeholder text generated at selection time
    Ipsum { excerpt: ExcerptKind, randomize: bool },
}

/// @acp:summary "One selectable menu entry"
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuItem {
    pub label: String,
    /// Preview shown next to the label, if any
    pub preview: Option<String>,
    pub action: MenuAction,
}

/// Keys the menu reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    Other,
}

/// Host instruction after a key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Key not handled; let it reach the page
    Ignored,
    /// Focus moved to this item
    Focused(usize),
    /// Close the menu without inserting
    Close,
    /// Close the menu and insert this text into the field
    Insert(String),
}

/// @acp:summary "State of one open insertion menu"
#[derive(Debug, Clone)]
pub struct PopupSession {
    field: FieldDescriptor,
    items: Vec<MenuItem>,
    suggestion_count: usize,
    focused: Option<usize>,
}

impl PopupSession {
    /// @acp:summary "Build the menu for a field, previewing one value per candidate type"
    pub fn open<R: RngCore>(field: FieldDescriptor, randomize: bool, rng: &mut R) -> Self {
        let mut items = Vec::new();

        for candidate in classify(&field) {
            let value = fake::generate_with_rng(candidate.field_type, rng);
            items.push(MenuItem {
                label: candidate.field_type.label().to_string(),
                preview: Some(value.clone()),
                action: MenuAction::Suggestion {
                    field_type: candidate.field_type,
                    value,
                },
            });
        }
        let suggestion_count = items.len();

        for excerpt in ExcerptKind::all() {
            items.push(MenuItem {
                label: excerpt.label().to_string(),
                preview: None,
                action: MenuAction::Ipsum {
                    excerpt: *excerpt,
                    randomize,
                },
            });
        }

        tracing::debug!(
            "Opened popup with {} suggestions and {} ipsum entries",
            suggestion_count,
            items.len() - suggestion_count
        );

        Self {
            field,
            items,
            suggestion_count,
            focused: None,
        }
    }

    pub fn field(&self) -> &FieldDescriptor {
        &self.field
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Entries of the "Suggested for this field" section
    pub fn suggestions(&self) -> &[MenuItem] {
        &self.items[..self.suggestion_count]
    }

    /// Entries of the "Lorem Ipsum" section
    pub fn ipsum_items(&self) -> &[MenuItem] {
        &self.items[self.suggestion_count..]
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    /// @acp:summary "React to a key press"
    pub fn handle_key(&mut self, key: Key, generator: &ExcerptGenerator<'_>) -> KeyOutcome {
        let len = self.items.len();
        match key {
            Key::Escape => KeyOutcome::Close,
            Key::ArrowDown if len > 0 => {
                let next = self.focused.map_or(0, |i| (i + 1) % len);
                self.focused = Some(next);
                KeyOutcome::Focused(next)
            }
            Key::ArrowUp if len > 0 => {
                let prev = self.focused.map_or(len - 1, |i| (i + len - 1) % len);
                self.focused = Some(prev);
                KeyOutcome::Focused(prev)
            }
            Key::Enter => match self.focused {
                Some(index) => self
                    .resolve(index, generator)
                    .map_or(KeyOutcome::Ignored, KeyOutcome::Insert),
                None => KeyOutcome::Ignored,
            },
            _ => KeyOutcome::Ignored,
        }
    }

    /// @acp:summary "Text to insert for an entry: the cached preview, or a fresh excerpt"
    pub fn resolve(&self, index: usize, generator: &ExcerptGenerator<'_>) -> Option<String> {
        let item = self.items.get(index)?;
        Some(match &item.action {
            MenuAction::Suggestion { value, .. } => value.clone(),
            MenuAction::Ipsum { excerpt, randomize } => {
                generator.generate(excerpt.request(*randomize))
            }
        })
    }
}

/// @acp:summary "Owner of the at-most-one open popup"
#[derive(Debug, Default)]
pub struct PopupHost {
    session: Option<PopupSession>,
}

impl PopupHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a menu for `field`, or close the open one instead.
    /// Returns whether a menu is open afterwards.
    pub fn toggle<R: RngCore>(
        &mut self,
        field: FieldDescriptor,
        randomize: bool,
        rng: &mut R,
    ) -> bool {
        if self.session.take().is_some() {
            return false;
        }
        self.session = Some(PopupSession::open(field, randomize, rng));
        true
    }

    pub fn session(&self) -> Option<&PopupSession> {
        self.session.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    /// Forward a key press to the open menu, closing it on `Close` and `Insert`
    pub fn handle_key(&mut self, key: Key, generator: &ExcerptGenerator<'_>) -> KeyOutcome {
        let Some(session) = self.session.as_mut() else {
            return KeyOutcome::Ignored;
        };
        let outcome = session.handle_key(key, generator);
        if matches!(outcome, KeyOutcome::Close | KeyOutcome::Insert(_)) {
            self.session = None;
        }
        outcome
    }

    /// Click on an entry: close the menu and return the text to insert
    pub fn select(&mut self, index: usize, generator: &ExcerptGenerator<'_>) -> Option<String> {
        let text = self.session.as_ref()?.resolve(index, generator)?;
        self.session = None;
        Some(text)
    }
}
