use crate::emoji::EmojiSuggestion;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoStaticStr};

/// Persistence status shown next to the editor.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SaveStatus {
    #[default]
    #[strum(serialize = "Saved")]
    Saved,
    #[strum(serialize = "Saving...")]
    Saving,
    #[strum(serialize = "Unsaved changes")]
    Unsaved,
}

impl SaveStatus {
    /// Status line text.
    pub fn label(self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatKind {
    Bold,
    Italic,
}

/// Formatting flags at the caret, as reported by the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FormattingState {
    pub bold: bool,
    pub italic: bool,
}

impl FormattingState {
    pub fn is_active(&self, kind: FormatKind) -> bool {
        match kind {
            FormatKind::Bold => self.bold,
            FormatKind::Italic => self.italic,
        }
    }
}

/// Shortcode autocomplete list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SuggestionState {
    active: bool,
    /// Char offset of the opening ':' within the caret's text node
    anchor: Option<usize>,
    candidates: Vec<EmojiSuggestion>,
    selected: usize,
}

impl SuggestionState {
    pub fn activate(&mut self, anchor: usize, candidates: Vec<EmojiSuggestion>) {
        if candidates.is_empty() {
            self.clear();
            return;
        }
        self.active = true;
        self.anchor = Some(anchor);
        self.candidates = candidates;
        self.selected = 0;
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn anchor(&self) -> Option<usize> {
        self.anchor
    }

    pub fn candidates(&self) -> &[EmojiSuggestion] {
        &self.candidates
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&EmojiSuggestion> {
        self.candidates.get(self.selected)
    }

    /// Moves down, stopping at the last candidate.
    pub fn select_next(&mut self) {
        if self.selected + 1 < self.candidates.len() {
            self.selected += 1;
        }
    }

    /// Moves up, stopping at the first candidate.
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Points the selection at `index` (mouse hover), ignoring out-of-range
    /// values.
    pub fn select(&mut self, index: usize) {
        if index < self.candidates.len() {
            self.selected = index;
        }
    }
}

/// Snapshot of a mounted editor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditorState {
    pub content: String,
    pub save_status: SaveStatus,
    pub formatting: FormattingState,
    pub suggestions: SuggestionState,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emoji::EmojiValue;

    fn candidates(n: usize) -> Vec<EmojiSuggestion> {
        (0..n)
            .map(|i| EmojiSuggestion {
                shortcode: format!("s{i}"),
                value: EmojiValue::glyph("⭐"),
            })
            .collect()
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(SaveStatus::Saved.label(), "Saved");
        assert_eq!(SaveStatus::Saving.to_string(), "Saving...");
        assert_eq!(SaveStatus::Saving.label(), "Saving...");
        assert_eq!(SaveStatus::Unsaved.to_string(), SaveStatus::Unsaved.label());
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut state = SuggestionState::default();
        state.activate(3, candidates(3));
        assert_eq!(state.selected_index(), 0);

        state.select_previous();
        assert_eq!(state.selected_index(), 0);

        state.select_next();
        state.select_next();
        state.select_next();
        assert_eq!(state.selected_index(), 2);
        assert_eq!(state.selected().map(|s| s.shortcode.as_str()), Some("s2"));
    }

    #[test]
    fn test_activate_resets_selection() {
        let mut state = SuggestionState::default();
        state.activate(0, candidates(4));
        state.select_next();
        state.activate(5, candidates(2));
        assert_eq!(state.selected_index(), 0);
        assert_eq!(state.anchor(), Some(5));
    }

    #[test]
    fn test_empty_candidates_clear() {
        let mut state = SuggestionState::default();
        state.activate(0, candidates(2));
        state.activate(0, Vec::new());
        assert!(!state.is_active());
        assert!(state.selected().is_none());
    }
}
