use serde::{Deserialize, Serialize};

/// Custom emoji rendered as an inline image.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageEmoji {
    pub src: String,
    pub alt: String,
}

/// What a shortcode expands to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EmojiValue {
    Text { value: String },
    Image(ImageEmoji),
}

impl EmojiValue {
    pub fn glyph(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn image(src: impl Into<String>, alt: impl Into<String>) -> Self {
        Self::Image(ImageEmoji {
            src: src.into(),
            alt: alt.into(),
        })
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Self::Image(_))
    }

    /// The glyph for text emoji, `None` for images.
    pub fn as_glyph(&self) -> Option<&str> {
        match self {
            Self::Text { value } => Some(value),
            Self::Image(_) => None,
        }
    }
}

/// One autocomplete candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmojiSuggestion {
    pub shortcode: String,
    pub value: EmojiValue,
}
