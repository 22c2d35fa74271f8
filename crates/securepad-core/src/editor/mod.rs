//! Rich-text editing.
//!
//! # Module Structure
//!
//! - `surface`: Editable surface trait (`RichTextSurface`) and inline node types
//! - `buffer`: In-memory surface (`RichTextBuffer`)
//! - `markup`: Markup codec used for persisted content
//! - `mutator`: Formatting, emoji insertion and paste (`RichTextMutator`)
//! - `shortcode`: `:keyword` autocomplete (`ShortcodeDetector`)
//! - `state`: Editor view state (`EditorState`, `SaveStatus`, ...)
//! - `input`: Key and clipboard events

mod buffer;
mod input;
pub mod markup;
mod mutator;
mod shortcode;
mod state;
mod surface;

pub use buffer::RichTextBuffer;
pub use input::{ClipboardPayload, Key, KeyPress};
pub use mutator::RichTextMutator;
pub use shortcode::{ShortcodeDetector, find_open_shortcode};
pub use state::{EditorState, FormatKind, FormattingState, SaveStatus, SuggestionState};
pub use surface::{Caret, ImageNode, InlineNode, Marks, RichTextSurface, Selection, TextContext};
