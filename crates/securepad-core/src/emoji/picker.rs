//! Toolbar emoji picker state.

use super::catalog::EmojiCatalog;
use super::data;
use super::model::EmojiValue;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};

/// Picker tabs, in display order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, Serialize, Deserialize,
)]
pub enum EmojiCategory {
    #[default]
    Smileys,
    Emotions,
    People,
    Animals,
    Food,
    Activities,
    Travel,
    Objects,
    Symbols,
}

impl EmojiCategory {
    pub fn glyphs(self) -> &'static [&'static str] {
        match self {
            Self::Smileys => data::SMILEYS,
            Self::Emotions => data::EMOTIONS,
            Self::People => data::PEOPLE,
            Self::Animals => data::ANIMALS,
            Self::Food => data::FOOD,
            Self::Activities => data::ACTIVITIES,
            Self::Travel => data::TRAVEL,
            Self::Objects => data::OBJECTS,
            Self::Symbols => data::SYMBOLS,
        }
    }
}

/// Open/closed popover with a category tab and a search box.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiPicker {
    open: bool,
    category: EmojiCategory,
    query: String,
}

impl EmojiPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn category(&self) -> EmojiCategory {
        self.category
    }

    pub fn set_category(&mut self, category: EmojiCategory) {
        self.category = category;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Category tabs are hidden while a search is active.
    pub fn shows_categories(&self) -> bool {
        self.query.is_empty()
    }

    /// Pointer-down anywhere on the page; clicks outside close the picker.
    pub fn on_pointer_down(&mut self, inside_picker: bool) {
        if self.open && !inside_picker {
            self.close();
        }
    }

    /// Glyphs currently shown in the grid.
    ///
    /// Without a query this is the active category. With one it is every
    /// category glyph containing the query text, followed by glyphs whose
    /// shortcode contains it, without duplicates.
    pub fn visible_glyphs(&self, catalog: &EmojiCatalog) -> Vec<String> {
        if self.query.is_empty() {
            return self
                .category
                .glyphs()
                .iter()
                .map(|glyph| glyph.to_string())
                .collect();
        }

        let mut glyphs: Vec<String> = EmojiCategory::iter()
            .flat_map(|category| category.glyphs().iter())
            .filter(|glyph| glyph.contains(self.query.as_str()))
            .map(|glyph| glyph.to_string())
            .collect();

        for suggestion in catalog.search(&self.query, usize::MAX) {
            if let Some(glyph) = suggestion.value.as_glyph() {
                if !glyphs.iter().any(|existing| existing == glyph) {
                    glyphs.push(glyph.to_string());
                }
            }
        }
        glyphs
    }

    /// Picks a glyph from the grid and closes the picker.
    pub fn select(&mut self, glyph: &str) -> EmojiValue {
        self.close();
        EmojiValue::glyph(glyph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_in_tab_order() {
        let names: Vec<String> = EmojiCategory::iter().map(|c| c.to_string()).collect();
        assert_eq!(names.first().map(String::as_str), Some("Smileys"));
        assert_eq!(names.last().map(String::as_str), Some("Symbols"));
        assert_eq!(names.len(), 9);
    }

    #[test]
    fn test_default_view_is_active_category() {
        let mut picker = EmojiPicker::new();
        picker.set_category(EmojiCategory::Animals);
        let glyphs = picker.visible_glyphs(&EmojiCatalog::default());
        assert_eq!(glyphs.len(), EmojiCategory::Animals.glyphs().len());
        assert!(picker.shows_categories());
    }

    #[test]
    fn test_query_searches_all_categories_and_shortcodes() {
        let mut picker = EmojiPicker::new();
        picker.set_query("🐶");
        let glyphs = picker.visible_glyphs(&EmojiCatalog::default());
        assert_eq!(glyphs, vec!["🐶".to_string()]);

        picker.set_query("pizza");
        let glyphs = picker.visible_glyphs(&EmojiCatalog::builtin());
        assert_eq!(glyphs, vec!["🍕".to_string()]);
        assert!(!picker.shows_categories());
    }

    #[test]
    fn test_outside_click_closes() {
        let mut picker = EmojiPicker::new();
        picker.toggle();
        picker.on_pointer_down(true);
        assert!(picker.is_open());
        picker.on_pointer_down(false);
        assert!(!picker.is_open());
    }

    #[test]
    fn test_select_closes_picker() {
        let mut picker = EmojiPicker::new();
        picker.toggle();
        let value = picker.select("🎉");
        assert_eq!(value, EmojiValue::glyph("🎉"));
        assert!(!picker.is_open());
    }
}
