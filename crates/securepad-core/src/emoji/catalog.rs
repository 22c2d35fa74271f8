//! Shortcode catalog.

use super::data::{Builtin, SHORTCODES};
use super::model::{EmojiSuggestion, EmojiValue};
use once_cell::sync::Lazy;
use std::sync::Arc;

static BUILTIN: Lazy<Arc<EmojiCatalog>> = Lazy::new(|| {
    Arc::new(EmojiCatalog::from_entries(SHORTCODES.iter().map(
        |(shortcode, value)| {
            let value = match *value {
                Builtin::Glyph(glyph) => EmojiValue::glyph(glyph),
                Builtin::Image { src, alt } => EmojiValue::image(src, alt),
            };
            (*shortcode, value)
        },
    )))
});

/// Ordered shortcode → emoji table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiCatalog {
    entries: Vec<EmojiSuggestion>,
}

impl EmojiCatalog {
    /// The catalog shipped with the pad.
    pub fn builtin() -> Arc<EmojiCatalog> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a catalog keeping insertion order.
    ///
    /// A repeated shortcode overwrites the earlier value but keeps the
    /// earlier position.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, EmojiValue)>,
        S: Into<String>,
    {
        let mut catalog = Self::default();
        for (shortcode, value) in entries {
            let shortcode = shortcode.into();
            match catalog
                .entries
                .iter_mut()
                .find(|entry| entry.shortcode == shortcode)
            {
                Some(existing) => existing.value = value,
                None => catalog.entries.push(EmojiSuggestion { shortcode, value }),
            }
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[EmojiSuggestion] {
        &self.entries
    }

    /// Exact shortcode lookup.
    pub fn get(&self, shortcode: &str) -> Option<&EmojiValue> {
        self.entries
            .iter()
            .find(|entry| entry.shortcode == shortcode)
            .map(|entry| &entry.value)
    }

    /// Case-insensitive substring search in catalog order, at most `limit`
    /// results.
    pub fn search(&self, keyword: &str, limit: usize) -> Vec<EmojiSuggestion> {
        let needle = keyword.to_lowercase();
        self.entries
            .iter()
            .filter(|entry| entry.shortcode.to_lowercase().contains(&needle))
            .take(limit)
            .cloned()
            .collect()
    }
}
