//! Host document boundary.
//!
//! # Responsibility
//! - Describe the selection anchor the host hands to insertion.
//! - Describe the two edit shapes the host applies.
//!
//! # Invariants
//! - `Selection::from <= Selection::to` for selections built by `new`,
//!   `collapsed` or deserialization. Struct literals are not checked.
//! - A styled edit always carries exactly one `TextMark`.

use serde::{Deserialize, Serialize};

/// Half-open document range `[from, to)` in host positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "SelectionWire")]
pub struct Selection {
    pub from: usize,
    pub to: usize,
}

#[derive(Deserialize)]
struct SelectionWire {
    from: usize,
    to: usize,
}

impl From<SelectionWire> for Selection {
    fn from(wire: SelectionWire) -> Self {
        Self::new(wire.from, wire.to)
    }
}

impl Selection {
    /// Builds a selection, swapping the ends when given in reverse.
    pub fn new(anchor: usize, head: usize) -> Self {
        Self {
            from: anchor.min(head),
            to: anchor.max(head),
        }
    }

    /// Cursor with no selected text.
    pub fn collapsed(pos: usize) -> Self {
        Self { from: pos, to: pos }
    }

    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }
}

/// Read-only view of the host editor state needed to anchor an edit.
pub trait DocumentState {
    fn selection(&self) -> Selection;
}

impl DocumentState for Selection {
    fn selection(&self) -> Selection {
        *self
    }
}

/// Style attached to inserted text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TextMark {
    /// Emoji mark; `emojihint` is the alias written back as `:alias:`.
    Emoji { emojihint: String },
}

/// Edit handed to the host for application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentEdit {
    /// Replace the selection with `text` carrying `mark`.
    ReplaceSelectionWithStyledText {
        selection: Selection,
        text: String,
        mark: TextMark,
    },
    /// Replace the selection with unstyled `text`.
    InsertText { selection: Selection, text: String },
}

impl DocumentEdit {
    pub fn selection(&self) -> Selection {
        match self {
            Self::ReplaceSelectionWithStyledText { selection, .. }
            | Self::InsertText { selection, .. } => *selection,
        }
    }

    /// Literal text the edit puts into the document.
    pub fn text(&self) -> &str {
        match self {
            Self::ReplaceSelectionWithStyledText { text, .. } | Self::InsertText { text, .. } => {
                text
            }
        }
    }

    pub fn mark(&self) -> Option<&TextMark> {
        match self {
            Self::ReplaceSelectionWithStyledText { mark, .. } => Some(mark),
            Self::InsertText { .. } => None,
        }
    }

    /// Emoji hint carried by a styled edit.
    pub fn emoji_hint(&self) -> Option<&str> {
        match self.mark() {
            Some(TextMark::Emoji { emojihint }) => Some(emojihint.as_str()),
            None => None,
        }
    }

    /// Textual form used when the inserted content is written back out:
    /// `:hint:` for emoji marks, the literal text otherwise.
    pub fn to_markdown(&self) -> String {
        match self.emoji_hint() {
            Some(hint) => format!(":{hint}:"),
            None => self.text().to_string(),
        }
    }
}
