//! Emoji catalog, shortcode search, and the toolbar picker.

mod catalog;
mod data;
mod model;
mod picker;

pub use catalog::EmojiCatalog;
pub use model::{EmojiSuggestion, EmojiValue, ImageEmoji};
pub use picker::{EmojiCategory, EmojiPicker};
