//! `:keyword` autocomplete.

use super::mutator::RichTextMutator;
use super::state::SuggestionState;
use super::surface::RichTextSurface;
use crate::config::DEFAULT_MAX_SUGGESTIONS;
use crate::emoji::{EmojiCatalog, EmojiSuggestion};
use std::sync::Arc;

/// Finds an open shortcode at the end of `text_before_caret`.
///
/// Returns the char offset of the last `:` and the keyword typed after it.
/// The keyword must be non-empty and contain no space.
pub fn find_open_shortcode(text_before_caret: &str) -> Option<(usize, &str)> {
    let colon = text_before_caret.rfind(':')?;
    let keyword = &text_before_caret[colon + 1..];
    if keyword.is_empty() || keyword.contains(' ') {
        return None;
    }
    Some((text_before_caret[..colon].chars().count(), keyword))
}

/// Watches the caret's text node and drives the suggestion list.
#[derive(Debug, Clone)]
pub struct ShortcodeDetector {
    catalog: Arc<EmojiCatalog>,
    limit: usize,
}

impl Default for ShortcodeDetector {
    fn default() -> Self {
        Self::new(EmojiCatalog::builtin(), DEFAULT_MAX_SUGGESTIONS)
    }
}

impl ShortcodeDetector {
    pub fn new(catalog: Arc<EmojiCatalog>, limit: usize) -> Self {
        Self { catalog, limit }
    }

    pub fn catalog(&self) -> &Arc<EmojiCatalog> {
        &self.catalog
    }

    /// Re-scans after a content-changing keystroke.
    ///
    /// Returns whether suggestions are active afterwards. A caret outside a
    /// text node yields no suggestions.
    pub fn detect<S: RichTextSurface + ?Sized>(
        &self,
        surface: &S,
        state: &mut SuggestionState,
    ) -> bool {
        let Some(context) = surface.caret_text() else {
            state.clear();
            return false;
        };

        match find_open_shortcode(context.before_caret()) {
            Some((anchor, keyword)) => {
                let candidates = self.catalog.search(keyword, self.limit);
                tracing::trace!(
                    "[Shortcode] keyword '{}' matched {} candidates",
                    keyword,
                    candidates.len()
                );
                state.activate(anchor, candidates);
            }
            None => state.clear(),
        }
        state.is_active()
    }

    /// Inserts the selected candidate in place of `:keyword`.
    pub fn confirm<S: RichTextSurface + ?Sized>(
        &self,
        surface: &mut S,
        state: &mut SuggestionState,
        mutator: &RichTextMutator,
    ) -> Option<EmojiSuggestion> {
        let index = state.selected_index();
        self.choose(surface, state, mutator, index)
    }

    /// Inserts candidate `index` (a click on the list) in place of
    /// `:keyword`. The suggestion state is cleared either way.
    pub fn choose<S: RichTextSurface + ?Sized>(
        &self,
        surface: &mut S,
        state: &mut SuggestionState,
        mutator: &RichTextMutator,
        index: usize,
    ) -> Option<EmojiSuggestion> {
        let chosen = state.candidates().get(index).cloned();
        let anchor = state.anchor();
        state.clear();

        let (chosen, anchor) = (chosen?, anchor?);
        let context = surface.caret_text()?;
        if anchor > context.offset {
            tracing::debug!("[Shortcode] anchor moved past caret; dropping suggestion");
            return None;
        }
        if let Err(e) = surface.replace_range_with_text(context.node, anchor..context.offset, "") {
            tracing::warn!("[Shortcode] Failed to remove keyword: {}", e);
            return None;
        }
        mutator.insert_glyph(surface, &chosen.value);
        Some(chosen)
    }

    /// Closes the list without touching the text.
    pub fn cancel(&self, state: &mut SuggestionState) {
        state.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::buffer::RichTextBuffer;
    use crate::editor::surface::{Caret, InlineNode, Selection};
    use crate::emoji::EmojiValue;

    fn animals() -> ShortcodeDetector {
        ShortcodeDetector::new(
            Arc::new(EmojiCatalog::from_entries([
                ("cat", EmojiValue::glyph("🐱")),
                ("hat", EmojiValue::glyph("🎩")),
                ("attempt", EmojiValue::glyph("🎯")),
                ("dog", EmojiValue::glyph("🐶")),
            ])),
            DEFAULT_MAX_SUGGESTIONS,
        )
    }

    fn typed(text: &str) -> RichTextBuffer {
        let mut buffer = RichTextBuffer::new();
        buffer.insert_text(text);
        buffer
    }

    #[test]
    fn test_find_open_shortcode() {
        assert_eq!(find_open_shortcode("hello :sm"), Some((6, "sm")));
        assert_eq!(find_open_shortcode("é:x"), Some((1, "x")));
        assert_eq!(find_open_shortcode("hello :"), None);
        assert_eq!(find_open_shortcode("a :b c"), None);
        assert_eq!(find_open_shortcode("no colon"), None);
    }

    #[test]
    fn test_detect_activates_at_colon() {
        let detector = animals();
        let buffer = typed("I am :at");
        let mut state = SuggestionState::default();

        assert!(detector.detect(&buffer, &mut state));
        assert_eq!(state.anchor(), Some(5));
        let codes: Vec<&str> = state
            .candidates()
            .iter()
            .map(|s| s.shortcode.as_str())
            .collect();
        assert_eq!(codes, vec!["cat", "hat", "attempt"]);
        assert_eq!(state.selected_index(), 0);
    }

    #[test]
    fn test_detect_clears_without_match() {
        let detector = animals();
        let mut state = SuggestionState::default();
        assert!(detector.detect(&typed(":at"), &mut state));
        assert!(!detector.detect(&typed(":zzz"), &mut state));
        assert!(!state.is_active());
    }

    #[test]
    fn test_detect_skips_element_boundary() {
        let detector = animals();
        let mut buffer = typed(":at");
        buffer.insert_node_at_cursor(InlineNode::text("x"));
        let mut state = SuggestionState::default();
        state.activate(0, detector.catalog().search("at", 10));

        assert!(!detector.detect(&buffer, &mut state));
        assert!(!state.is_active());
    }

    #[test]
    fn test_confirm_replaces_keyword() {
        let detector = animals();
        let mutator = RichTextMutator::default();
        let mut buffer = typed("hi :at");
        let mut state = SuggestionState::default();
        detector.detect(&buffer, &mut state);
        state.select_next();

        let chosen = detector.confirm(&mut buffer, &mut state, &mutator);

        assert_eq!(chosen.map(|s| s.shortcode), Some("hat".to_string()));
        assert_eq!(buffer.to_markup(), "hi 🎩 ");
        assert_eq!(buffer.selection(), Selection::collapsed(Caret::Boundary(3)));
        assert!(!state.is_active());
    }

    #[test]
    fn test_cancel_leaves_text() {
        let detector = animals();
        let buffer = typed(":do");
        let mut state = SuggestionState::default();
        detector.detect(&buffer, &mut state);
        detector.cancel(&mut state);
        assert!(!state.is_active());
        assert_eq!(buffer.text_content(), ":do");
    }

    #[test]
    fn test_confirm_without_suggestions_is_noop() {
        let detector = animals();
        let mut buffer = typed("plain");
        let mut state = SuggestionState::default();
        assert!(detector
            .confirm(&mut buffer, &mut state, &RichTextMutator::default())
            .is_none());
        assert_eq!(buffer.text_content(), "plain");
    }
}
