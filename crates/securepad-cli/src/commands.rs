//! REPL line parsing.
//!
//! A line that does not start with `/` is typed into the pad as-is. `//` at
//! the start types a literal slash.

use securepad_core::emoji::EmojiCategory;
use strum::IntoEnumIterator;

/// Slash commands offered by completion, in help order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/nl", "insert a line break"),
    ("/b", "toggle bold"),
    ("/i", "toggle italic"),
    ("/next", "highlight the next suggestion"),
    ("/prev", "highlight the previous suggestion"),
    ("/ok", "insert the highlighted suggestion"),
    ("/esc", "close the suggestion list"),
    ("/pick", "insert suggestion <n>"),
    ("/emoji", "open the emoji picker [query]"),
    ("/tab", "switch picker category <name>"),
    ("/insert", "insert <glyph>"),
    ("/paste", "paste <text> as plain text"),
    ("/show", "print the pad"),
    ("/status", "print the save status"),
    ("/save", "save now"),
    ("/clear", "erase the whole pad"),
    ("/signout", "sign out and lock the pad"),
    ("/help", "list commands"),
    ("/quit", "save and exit"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Type(String),
    NewLine,
    Bold,
    Italic,
    Next,
    Prev,
    Accept,
    Dismiss,
    /// Zero-based suggestion index
    Pick(usize),
    Picker(Option<String>),
    Category(EmojiCategory),
    Insert(String),
    Paste(String),
    Show,
    Status,
    Save,
    Clear,
    SignOut,
    Help,
    Quit,
    Invalid(String),
}

pub fn parse(line: &str) -> Command {
    if let Some(rest) = line.strip_prefix("//") {
        return Command::Type(format!("/{rest}"));
    }
    let Some(body) = line.strip_prefix('/') else {
        return Command::Type(line.to_string());
    };

    let (name, arg) = match body.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (body.trim_end(), ""),
    };

    match name {
        "nl" => Command::NewLine,
        "b" | "bold" => Command::Bold,
        "i" | "italic" => Command::Italic,
        "next" => Command::Next,
        "prev" => Command::Prev,
        "ok" => Command::Accept,
        "esc" => Command::Dismiss,
        "pick" => match arg.parse::<usize>() {
            Ok(n) if n >= 1 => Command::Pick(n - 1),
            _ => Command::Invalid("usage: /pick <n> (n starts at 1)".to_string()),
        },
        "emoji" => Command::Picker((!arg.is_empty()).then(|| arg.to_string())),
        "tab" => match parse_category(arg) {
            Some(category) => Command::Category(category),
            None => Command::Invalid(format!("unknown category '{arg}'")),
        },
        "insert" if !arg.is_empty() => Command::Insert(arg.to_string()),
        "insert" => Command::Invalid("usage: /insert <glyph>".to_string()),
        "paste" => Command::Paste(arg.to_string()),
        "show" => Command::Show,
        "status" => Command::Status,
        "save" => Command::Save,
        "clear" => Command::Clear,
        "signout" => Command::SignOut,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Invalid(format!("unknown command '/{other}'")),
    }
}

fn parse_category(name: &str) -> Option<EmojiCategory> {
    EmojiCategory::iter().find(|category| category.to_string().eq_ignore_ascii_case(name))
}
