//! Rich-text surface abstraction.
//!
//! The editor never touches a host text widget directly; it drives this
//! trait instead. [`super::RichTextBuffer`] is the in-memory implementation.

use crate::error::Result;
use std::ops::Range;

/// Inline formatting carried by a text node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Marks {
    pub bold: bool,
    pub italic: bool,
}

/// Inline image (custom emoji).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageNode {
    pub src: String,
    pub alt: String,
    /// Display height; images always sit on the text baseline (`text-bottom`).
    pub height_px: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineNode {
    Text { text: String, marks: Marks },
    Image(ImageNode),
}

impl InlineNode {
    pub fn text(text: impl Into<String>) -> Self {
        Self::styled(text, Marks::default())
    }

    pub fn styled(text: impl Into<String>, marks: Marks) -> Self {
        Self::Text {
            text: text.into(),
            marks,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text { text, .. } => Some(text),
            Self::Image(_) => None,
        }
    }

    pub fn marks(&self) -> Option<Marks> {
        match self {
            Self::Text { marks, .. } => Some(*marks),
            Self::Image(_) => None,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }
}

/// A caret position.
///
/// `Text` sits inside a text node at a char offset. `Boundary(i)` sits
/// between nodes, right before node `i` (an element boundary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Caret {
    Text { node: usize, offset: usize },
    Boundary(usize),
}

impl Default for Caret {
    fn default() -> Self {
        Self::Boundary(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub anchor: Caret,
    pub focus: Caret,
}

impl Selection {
    pub fn collapsed(caret: Caret) -> Self {
        Self {
            anchor: caret,
            focus: caret,
        }
    }

    pub fn range(anchor: Caret, focus: Caret) -> Self {
        Self { anchor, focus }
    }
}

/// The text node holding the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContext {
    pub node: usize,
    pub text: String,
    /// Caret offset in chars
    pub offset: usize,
}

impl TextContext {
    pub fn before_caret(&self) -> &str {
        let end = self
            .text
            .char_indices()
            .nth(self.offset)
            .map_or(self.text.len(), |(index, _)| index);
        &self.text[..end]
    }
}

/// Editable rich-text surface.
pub trait RichTextSurface {
    /// Toggles bold on the selection (or for the next typed text when the
    /// selection is collapsed).
    fn toggle_bold(&mut self);

    fn toggle_italic(&mut self);

    fn is_bold_active(&self) -> bool;

    fn is_italic_active(&self) -> bool;

    /// Replaces the selection with `node`; the caret ends right after it.
    ///
    /// Returns the index the node was inserted at.
    fn insert_node_at_cursor(&mut self, node: InlineNode) -> usize;

    /// Replaces chars `range` of text node `node` with `text`; the caret ends
    /// right after the inserted text.
    fn replace_range_with_text(&mut self, node: usize, range: Range<usize>, text: &str)
    -> Result<()>;

    /// Types `text` at the caret, replacing any selection.
    fn insert_text(&mut self, text: &str);

    fn selection(&self) -> Selection;

    fn set_selection(&mut self, selection: Selection);

    /// The text node under the caret, `None` at an element boundary.
    fn caret_text(&self) -> Option<TextContext>;

    /// Serialized markup of the whole surface.
    fn to_markup(&self) -> String;

    /// Replaces the whole surface with parsed `markup`.
    fn load_markup(&mut self, markup: &str);

    /// Plain text of the surface (images contribute nothing).
    fn text_content(&self) -> String;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_before_caret_counts_chars() {
        let context = TextContext {
            node: 0,
            text: "hé :smi".to_string(),
            offset: 4,
        };
        assert_eq!(context.before_caret(), "hé :");
    }

    #[test]
    fn test_before_caret_at_end() {
        let context = TextContext {
            node: 0,
            text: "abc".to_string(),
            offset: 3,
        };
        assert_eq!(context.before_caret(), "abc");
    }
}
