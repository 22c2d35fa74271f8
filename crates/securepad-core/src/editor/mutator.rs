//! Formatting toggles, emoji insertion and paste handling.

use super::input::ClipboardPayload;
use super::state::{FormatKind, FormattingState};
use super::surface::{ImageNode, InlineNode, Marks, RichTextSurface};
use crate::config::DEFAULT_IMAGE_EMOJI_HEIGHT_PX;
use crate::emoji::EmojiValue;

/// Applies edits to a [`RichTextSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RichTextMutator {
    image_height_px: u32,
}

impl Default for RichTextMutator {
    fn default() -> Self {
        Self::new(DEFAULT_IMAGE_EMOJI_HEIGHT_PX)
    }
}

impl RichTextMutator {
    pub fn new(image_height_px: u32) -> Self {
        Self { image_height_px }
    }

    /// Formatting flags as the surface currently reports them.
    pub fn formatting<S: RichTextSurface + ?Sized>(surface: &S) -> FormattingState {
        FormattingState {
            bold: surface.is_bold_active(),
            italic: surface.is_italic_active(),
        }
    }

    /// Toggles `kind` and returns the re-read formatting state.
    pub fn toggle_format<S: RichTextSurface + ?Sized>(
        &self,
        surface: &mut S,
        kind: FormatKind,
    ) -> FormattingState {
        match kind {
            FormatKind::Bold => surface.toggle_bold(),
            FormatKind::Italic => surface.toggle_italic(),
        }
        Self::formatting(surface)
    }

    /// Replaces the selection with `value` followed by one space node,
    /// leaving the caret after the space.
    pub fn insert_glyph<S: RichTextSurface + ?Sized>(&self, surface: &mut S, value: &EmojiValue) {
        let marks = Self::marks(surface);
        let node = match value {
            EmojiValue::Text { value } => InlineNode::styled(value.clone(), marks),
            EmojiValue::Image(image) => InlineNode::Image(ImageNode {
                src: image.src.clone(),
                alt: image.alt.clone(),
                height_px: self.image_height_px,
            }),
        };
        surface.insert_node_at_cursor(node);
        surface.insert_node_at_cursor(InlineNode::styled(" ", marks));
    }

    /// Inserts the plain-text flavour of a paste, replacing the selection.
    ///
    /// Returns false when the payload carried no text; the selection is
    /// still removed in that case.
    pub fn sanitize_paste<S: RichTextSurface + ?Sized>(
        &self,
        surface: &mut S,
        payload: &ClipboardPayload,
    ) -> bool {
        let text = payload.plain_text();
        if text.is_empty() {
            surface.insert_text("");
            return false;
        }
        let marks = Self::marks(surface);
        surface.insert_node_at_cursor(InlineNode::styled(text, marks));
        true
    }

    fn marks<S: RichTextSurface + ?Sized>(surface: &S) -> Marks {
        Marks {
            bold: surface.is_bold_active(),
            italic: surface.is_italic_active(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::RichTextBuffer;
    use crate::editor::surface::{Caret, Selection};

    fn typed(text: &str) -> RichTextBuffer {
        let mut buffer = RichTextBuffer::new();
        buffer.insert_text(text);
        buffer
    }

    #[test]
    fn test_toggle_returns_surface_state() {
        let mut buffer = typed("abc");
        let mutator = RichTextMutator::default();
        let state = mutator.toggle_format(&mut buffer, FormatKind::Bold);
        assert_eq!(
            state,
            FormattingState {
                bold: true,
                italic: false
            }
        );
        let state = mutator.toggle_format(&mut buffer, FormatKind::Bold);
        assert!(!state.bold);
    }

    #[test]
    fn test_insert_glyph_adds_one_trailing_space_node() {
        let mut buffer = typed("hi ");
        RichTextMutator::default().insert_glyph(&mut buffer, &EmojiValue::glyph("😊"));

        assert_eq!(
            buffer.nodes(),
            &[
                InlineNode::text("hi "),
                InlineNode::text("😊"),
                InlineNode::text(" "),
            ]
        );
        assert_eq!(buffer.selection(), Selection::collapsed(Caret::Boundary(3)));
        assert_eq!(buffer.to_markup(), "hi 😊 ");
    }

    #[test]
    fn test_insert_image_replaces_selection() {
        let mut buffer = typed("abcdef");
        buffer.set_selection(Selection::range(
            Caret::Text { node: 0, offset: 2 },
            Caret::Text { node: 0, offset: 4 },
        ));
        RichTextMutator::new(24).insert_glyph(
            &mut buffer,
            &EmojiValue::image("assets/emojis/sadcat.jpg", "sad cat"),
        );

        assert_eq!(buffer.text_content(), "ab ef");
        assert!(matches!(
            &buffer.nodes()[1],
            InlineNode::Image(image) if image.height_px == 24 && image.alt == "sad cat"
        ));
        assert_eq!(buffer.nodes()[2], InlineNode::text(" "));
        assert_eq!(buffer.selection(), Selection::collapsed(Caret::Boundary(3)));
    }

    #[test]
    fn test_paste_inserts_plain_text_only() {
        let mut buffer = typed("Hello world");
        buffer.set_selection(Selection::range(
            Caret::Text { node: 0, offset: 6 },
            Caret::Text { node: 0, offset: 11 },
        ));
        let payload = ClipboardPayload::new()
            .with("text/html", "<b>there</b>")
            .with("text/plain", "there");

        assert!(RichTextMutator::default().sanitize_paste(&mut buffer, &payload));
        assert_eq!(buffer.to_markup(), "Hello there");
        assert_eq!(buffer.selection(), Selection::collapsed(Caret::Boundary(2)));
    }

    #[test]
    fn test_empty_paste_only_removes_selection() {
        let mut buffer = typed("abc");
        buffer.select_all();
        assert!(!RichTextMutator::default().sanitize_paste(&mut buffer, &ClipboardPayload::new()));
        assert_eq!(buffer.text_content(), "");
    }
}
