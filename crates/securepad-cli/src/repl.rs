use std::borrow::Cow::{self, Borrowed, Owned};

use anyhow::Result;
use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

use securepad_application::{EditingSession, PadApp};
use securepad_core::editor::{ClipboardPayload, FormatKind, Key, KeyPress, RichTextBuffer, RichTextSurface};
use securepad_core::emoji::EmojiValue;

use crate::commands::{self, COMMANDS, Command};

type Pad = PadApp<RichTextBuffer>;
type LineEditor = Editor<CliHelper, DefaultHistory>;

/// Glyphs printed per picker page.
const PICKER_PAGE: usize = 48;

/// Completion, highlighting and hints for slash commands.
#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|(name, _)| name.to_string()).collect(),
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.starts_with("//") {
            let candidates: Vec<Pair> = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(|cmd| Pair {
                    display: cmd.clone(),
                    replacement: cmd.clone(),
                })
                .collect();
            Ok((0, candidates))
        } else {
            Ok((0, vec![]))
        }
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') && !line.starts_with("//") {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];

        if line.starts_with('/') && !line.contains(' ') {
            self.commands
                .iter()
                .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
                .map(|cmd| cmd[line.len()..].to_string())
        } else {
            None
        }
    }
}

impl Validator for CliHelper {}

enum Flow {
    Locked,
    Quit,
}

/// Runs password prompt and editor until the user quits.
pub async fn run(mut pad: Pad) -> Result<()> {
    let mut rl: LineEditor = Editor::new()?;
    rl.set_helper(Some(CliHelper::new()));

    println!("{}", "=== SecurePad ===".bright_magenta().bold());
    pad.sync_auth().await;

    loop {
        if !unlock(&mut rl, &mut pad).await? {
            break;
        }
        println!(
            "{}",
            "Type to write. '/help' lists commands, ':' starts an emoji shortcode.".bright_black()
        );

        match edit(&mut rl, &mut pad).await? {
            Flow::Locked => continue,
            Flow::Quit => break,
        }
    }

    if let Some(editor) = pad.editor() {
        if let Err(e) = editor.flush().await {
            eprintln!("{}", format!("Could not save before exit: {e}").red());
        }
    }
    println!("{}", "Goodbye!".bright_green());
    Ok(())
}

/// Password prompt. Returns false when the user gave up.
async fn unlock(rl: &mut LineEditor, pad: &mut Pad) -> Result<bool> {
    println!(
        "{}",
        "Enter your password to access your secure text pad.".bright_black()
    );
    loop {
        let password = match rl.readline("password: ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => continue,
            Err(ReadlineError::Eof) => return Ok(false),
            Err(err) => return Err(err.into()),
        };

        match pad.sign_in(&password).await {
            Ok(key) => {
                tracing::debug!("[Cli] Unlocked {}", key);
                println!("{}", "Unlocked.".bright_green());
                if let Some(editor) = pad.editor() {
                    print_pad(editor);
                }
                return Ok(true);
            }
            Err(e) => println!("{}", e.to_string().red()),
        }
    }
}

async fn edit(rl: &mut LineEditor, pad: &mut Pad) -> Result<Flow> {
    loop {
        let status = match pad.editor() {
            Some(editor) => editor.status_label(),
            None => return Ok(Flow::Locked),
        };

        let line = match rl.readline(&format!("[{status}] > ")) {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type '/quit' to exit.".yellow());
                continue;
            }
            Err(ReadlineError::Eof) => return Ok(Flow::Quit),
            Err(err) => return Err(err.into()),
        };
        if line.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(line.as_str());

        match commands::parse(&line) {
            Command::SignOut => match pad.sign_out().await {
                Ok(()) => {
                    println!("{}", "Signed out.".bright_green());
                    return Ok(Flow::Locked);
                }
                Err(e) => println!("{}", format!("Sign-out failed: {e}").red()),
            },
            Command::Quit => return Ok(Flow::Quit),
            Command::Clear => {
                let Some(editor) = pad.editor_mut() else {
                    return Ok(Flow::Locked);
                };
                editor.request_clear();
                let answer = rl.readline("Clear all content? This cannot be undone. (yes/no) ");
                if matches!(answer.as_deref().map(str::trim), Ok("yes" | "y")) {
                    match editor.confirm_clear().await {
                        Ok(()) => println!("{}", "Cleared.".bright_green()),
                        Err(e) => println!("{}", format!("Clear failed: {e}").red()),
                    }
                } else {
                    editor.cancel_clear();
                }
            }
            command => {
                let Some(editor) = pad.editor_mut() else {
                    return Ok(Flow::Locked);
                };
                apply(editor, command).await;
            }
        }
    }
}

async fn apply(editor: &mut EditingSession<RichTextBuffer>, command: Command) {
    match command {
        Command::Type(text) => {
            editor.type_text(&text).await;
            print_suggestions(editor);
        }
        Command::NewLine => editor.type_text("\n").await,
        Command::Bold => {
            editor.handle_key(&KeyPress::ctrl('b')).await;
            print_formatting(editor);
        }
        Command::Italic => {
            editor.handle_key(&KeyPress::ctrl('i')).await;
            print_formatting(editor);
        }
        Command::Next => suggestion_key(editor, Key::ArrowDown).await,
        Command::Prev => suggestion_key(editor, Key::ArrowUp).await,
        Command::Accept => suggestion_key(editor, Key::Enter).await,
        Command::Dismiss => suggestion_key(editor, Key::Escape).await,
        Command::Pick(index) => {
            if editor.choose_suggestion(index).await.is_none() {
                println!("{}", "No such suggestion.".yellow());
            }
        }
        Command::Picker(query) => {
            let picker = editor.picker_mut();
            if !picker.is_open() {
                picker.toggle();
            }
            match query {
                Some(query) => picker.set_query(query),
                None => picker.clear_query(),
            }
            print_picker(editor);
        }
        Command::Category(category) => {
            let picker = editor.picker_mut();
            picker.clear_query();
            picker.set_category(category);
            if !picker.is_open() {
                picker.toggle();
            }
            print_picker(editor);
        }
        Command::Insert(glyph) => {
            if editor.picker().is_open() {
                editor.pick_emoji(&glyph).await;
            } else {
                editor.insert_emoji(&EmojiValue::glyph(glyph)).await;
            }
        }
        Command::Paste(text) => {
            editor.paste(&ClipboardPayload::plain(text)).await;
        }
        Command::Show => print_pad(editor),
        Command::Status => {
            let recent = if editor.autosave().recently_saved().await {
                " (just now)"
            } else {
                ""
            };
            println!("{}{}", editor.status_label(), recent);
        }
        Command::Save => match editor.flush().await {
            Ok(true) => println!("{}", "Saved.".bright_green()),
            Ok(false) => println!("{}", "Nothing to save.".bright_black()),
            Err(e) => println!("{}", format!("Save failed: {e}").red()),
        },
        Command::Help => {
            for (name, help) in COMMANDS {
                println!("  {:<10} {}", name.bright_cyan(), help);
            }
        }
        Command::Invalid(message) => println!("{}", message.yellow()),
        Command::Clear | Command::SignOut | Command::Quit => {}
    }
}

async fn suggestion_key(editor: &mut EditingSession<RichTextBuffer>, key: Key) {
    if !editor.handle_key(&KeyPress::plain(key)).await {
        println!("{}", "No suggestions open.".bright_black());
    }
    print_suggestions(editor);
}

fn print_suggestions(editor: &EditingSession<RichTextBuffer>) {
    let suggestions = editor.suggestions();
    if !suggestions.is_active() {
        return;
    }
    for (index, suggestion) in suggestions.candidates().iter().enumerate() {
        let shown = match &suggestion.value {
            EmojiValue::Text { value } => value.clone(),
            EmojiValue::Image(image) => format!("[{}]", image.alt),
        };
        let row = format!("{:>2}. {} :{}", index + 1, shown, suggestion.shortcode);
        if index == suggestions.selected_index() {
            println!("{}", row.bright_yellow().bold());
        } else {
            println!("{}", row.bright_black());
        }
    }
}

fn print_picker(editor: &EditingSession<RichTextBuffer>) {
    let picker = editor.picker();
    let glyphs = editor.picker_glyphs();
    let title = if picker.shows_categories() {
        picker.category().to_string()
    } else {
        format!("\"{}\"", picker.query())
    };
    println!("{} ({} glyphs)", title.bright_magenta(), glyphs.len());
    for chunk in glyphs.iter().take(PICKER_PAGE).collect::<Vec<_>>().chunks(12) {
        let row: Vec<&str> = chunk.iter().map(|glyph| glyph.as_str()).collect();
        println!("  {}", row.join(" "));
    }
}

fn print_formatting(editor: &EditingSession<RichTextBuffer>) {
    let formatting = editor.formatting();
    let flag = |on: bool, kind: FormatKind| {
        if on {
            kind.to_string().bold().to_string()
        } else {
            kind.to_string().bright_black().to_string()
        }
    };
    println!(
        "{} {}",
        flag(formatting.bold, FormatKind::Bold),
        flag(formatting.italic, FormatKind::Italic)
    );
}

fn print_pad(editor: &EditingSession<RichTextBuffer>) {
    let text = editor.surface().text_content();
    if text.is_empty() {
        println!("{}", "(empty pad)".bright_black());
        return;
    }
    println!("{}", "-".repeat(40).bright_black());
    for line in text.lines() {
        println!("{line}");
    }
    println!("{}", "-".repeat(40).bright_black());
}
