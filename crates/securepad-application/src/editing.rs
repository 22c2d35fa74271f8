//! A mounted editor bound to one space.
//!
//! `EditingSession` owns the rich-text surface and routes every host event
//! (keys, typing, paste, toolbar clicks) through the mutator and the
//! shortcode detector before reporting the new markup to the auto-saver.

use crate::autosave::{AutoSaveController, LoadOutcome};
use securepad_core::editor::{
    ClipboardPayload, EditorState, FormatKind, FormattingState, Key, KeyPress, RichTextMutator,
    RichTextSurface, SaveStatus, Selection, ShortcodeDetector, SuggestionState,
};
use securepad_core::emoji::{EmojiPicker, EmojiSuggestion, EmojiValue};
use securepad_core::error::Result;

pub struct EditingSession<S: RichTextSurface> {
    surface: S,
    autosave: AutoSaveController,
    mutator: RichTextMutator,
    detector: ShortcodeDetector,
    suggestions: SuggestionState,
    formatting: FormattingState,
    picker: EmojiPicker,
    confirming_clear: bool,
    mounted: bool,
}

impl<S: RichTextSurface> EditingSession<S> {
    /// Loads the stored document into `surface` and starts tracking edits.
    pub async fn mount(
        mut surface: S,
        autosave: AutoSaveController,
        mutator: RichTextMutator,
        detector: ShortcodeDetector,
    ) -> Self {
        let outcome = autosave.load().await;
        surface.load_markup(outcome.content());
        if matches!(outcome, LoadOutcome::Failed) {
            tracing::warn!(
                "[Editor] Starting {} with an empty document after a failed load",
                autosave.space_key()
            );
        }

        let formatting = RichTextMutator::formatting(&surface);
        Self {
            surface,
            autosave,
            mutator,
            detector,
            suggestions: SuggestionState::default(),
            formatting,
            picker: EmojiPicker::new(),
            confirming_clear: false,
            mounted: true,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Direct access for host-driven edits; follow up with
    /// [`EditingSession::input_changed`].
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn autosave(&self) -> &AutoSaveController {
        &self.autosave
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Types `text` at the caret.
    pub async fn type_text(&mut self, text: &str) {
        self.surface.insert_text(text);
        self.input_changed().await;
    }

    /// Content-changing keystroke already applied to the surface.
    pub async fn input_changed(&mut self) {
        self.detector.detect(&self.surface, &mut self.suggestions);
        self.refresh_formatting();
        self.report_content().await;
    }

    /// Key-down handler. Returns true when the key was consumed and must not
    /// reach the surface.
    pub async fn handle_key(&mut self, press: &KeyPress) -> bool {
        if self.suggestions.is_active() {
            match press.key {
                Key::ArrowDown => {
                    self.suggestions.select_next();
                    return true;
                }
                Key::ArrowUp => {
                    self.suggestions.select_previous();
                    return true;
                }
                Key::Enter => {
                    self.confirm_suggestion().await;
                    return true;
                }
                Key::Escape => {
                    self.cancel_suggestions();
                    return true;
                }
                _ => {}
            }
        }

        match press.shortcut() {
            Some('b') => {
                self.format(FormatKind::Bold).await;
                true
            }
            Some('i') => {
                self.format(FormatKind::Italic).await;
                true
            }
            _ => false,
        }
    }

    /// Toolbar button or shortcut.
    pub async fn format(&mut self, kind: FormatKind) -> FormattingState {
        self.formatting = self.mutator.toggle_format(&mut self.surface, kind);
        self.report_content().await;
        self.formatting
    }

    /// Inserts the highlighted suggestion in place of `:keyword`.
    pub async fn confirm_suggestion(&mut self) -> Option<EmojiSuggestion> {
        let chosen = self
            .detector
            .confirm(&mut self.surface, &mut self.suggestions, &self.mutator);
        self.after_insert(chosen).await
    }

    /// Click on suggestion `index`.
    pub async fn choose_suggestion(&mut self, index: usize) -> Option<EmojiSuggestion> {
        let chosen =
            self.detector
                .choose(&mut self.surface, &mut self.suggestions, &self.mutator, index);
        self.after_insert(chosen).await
    }

    /// Mouse hover over suggestion `index`.
    pub fn highlight_suggestion(&mut self, index: usize) {
        self.suggestions.select(index);
    }

    pub fn cancel_suggestions(&mut self) {
        self.detector.cancel(&mut self.suggestions);
    }

    pub fn suggestions(&self) -> &SuggestionState {
        &self.suggestions
    }

    pub fn picker(&self) -> &EmojiPicker {
        &self.picker
    }

    pub fn picker_mut(&mut self) -> &mut EmojiPicker {
        &mut self.picker
    }

    /// Glyphs shown in the picker grid right now.
    pub fn picker_glyphs(&self) -> Vec<String> {
        self.picker.visible_glyphs(self.detector.catalog())
    }

    /// Picks `glyph` from the picker grid and inserts it at the caret.
    pub async fn pick_emoji(&mut self, glyph: &str) {
        let value = self.picker.select(glyph);
        self.insert_emoji(&value).await;
    }

    pub async fn insert_emoji(&mut self, value: &EmojiValue) {
        self.mutator.insert_glyph(&mut self.surface, value);
        self.suggestions.clear();
        self.refresh_formatting();
        self.report_content().await;
    }

    /// Pointer-down anywhere on the page.
    pub fn pointer_down(&mut self, inside_picker: bool) {
        if self.mounted {
            self.picker.on_pointer_down(inside_picker);
        }
    }

    /// Paste handler; only the plain-text flavour is inserted.
    pub async fn paste(&mut self, payload: &ClipboardPayload) -> bool {
        let inserted = self.mutator.sanitize_paste(&mut self.surface, payload);
        self.suggestions.clear();
        self.refresh_formatting();
        self.report_content().await;
        inserted
    }

    /// Moves the caret or selection.
    pub fn select(&mut self, selection: Selection) {
        self.surface.set_selection(selection);
        self.selection_changed();
    }

    /// Selection moved on the surface; re-reads the formatting flags.
    pub fn selection_changed(&mut self) {
        if self.mounted {
            self.refresh_formatting();
        }
    }

    pub fn formatting(&self) -> FormattingState {
        self.formatting
    }

    /// First step of "clear": ask the user.
    pub fn request_clear(&mut self) {
        self.confirming_clear = true;
    }

    pub fn cancel_clear(&mut self) {
        self.confirming_clear = false;
    }

    pub fn is_confirming_clear(&self) -> bool {
        self.confirming_clear
    }

    /// Empties the surface and the stored document.
    pub async fn confirm_clear(&mut self) -> Result<()> {
        self.confirming_clear = false;
        self.surface.load_markup("");
        self.suggestions.clear();
        self.refresh_formatting();
        self.autosave.clear().await
    }

    /// Writes pending content without waiting for the quiet period.
    pub async fn flush(&self) -> Result<bool> {
        self.autosave.flush().await
    }

    /// Detaches from the store; later edits are no longer saved.
    pub async fn unmount(&mut self) {
        self.mounted = false;
        self.picker.close();
        self.suggestions.clear();
        self.autosave.unmount().await;
    }

    pub fn save_status(&self) -> SaveStatus {
        self.autosave.status()
    }

    /// Status line next to the editor.
    pub fn status_label(&self) -> &'static str {
        self.save_status().label()
    }

    pub fn snapshot(&self) -> EditorState {
        EditorState {
            content: self.surface.to_markup(),
            save_status: self.save_status(),
            formatting: self.formatting,
            suggestions: self.suggestions.clone(),
        }
    }

    async fn after_insert(&mut self, chosen: Option<EmojiSuggestion>) -> Option<EmojiSuggestion> {
        if let Some(suggestion) = &chosen {
            tracing::debug!("[Editor] Inserted :{}:", suggestion.shortcode);
            self.refresh_formatting();
            self.report_content().await;
        }
        chosen
    }

    fn refresh_formatting(&mut self) {
        self.formatting = RichTextMutator::formatting(&self.surface);
    }

    async fn report_content(&self) {
        self.autosave
            .on_content_changed(self.surface.to_markup())
            .await;
    }
}
