//! Host input events fed into the editor.

use super::markup;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    Enter,
    Escape,
    Char(char),
    Other(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS
    pub meta: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            ctrl: true,
            meta: false,
        }
    }

    pub fn meta(ch: char) -> Self {
        Self {
            key: Key::Char(ch),
            ctrl: false,
            meta: true,
        }
    }

    /// Ctrl or Cmd held.
    pub fn has_command_modifier(&self) -> bool {
        self.ctrl || self.meta
    }

    /// The shortcut letter, lowercased, when a command modifier is held.
    pub fn shortcut(&self) -> Option<char> {
        match self.key {
            Key::Char(ch) if self.has_command_modifier() => Some(ch.to_ascii_lowercase()),
            _ => None,
        }
    }
}

/// Clipboard contents offered by a paste, keyed by MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ClipboardPayload {
    items: Vec<(String, String)>,
}

impl ClipboardPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new().with("text/plain", text)
    }

    pub fn with(mut self, mime: impl Into<String>, data: impl Into<String>) -> Self {
        self.items.push((mime.into(), data.into()));
        self
    }

    pub fn get(&self, mime: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|(kind, _)| kind.eq_ignore_ascii_case(mime))
            .map(|(_, data)| data.as_str())
    }

    /// Plain-text flavour of the payload. Falls back to the text of an HTML
    /// flavour; formatting is never carried over.
    pub fn plain_text(&self) -> String {
        if let Some(text) = self.get("text/plain") {
            return text.to_string();
        }
        self.get("text/html")
            .map(markup::plain_text)
            .unwrap_or_default()
    }
}
