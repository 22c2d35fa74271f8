//! Markup codec for pad content.
//!
//! Content is stored as a small HTML subset: `<b>`, `<i>`, `<br>` and
//! `<img>`. The parser also accepts `<strong>`, `<em>`, `<div>` and `<p>`
//! (block tags become line breaks) and drops any other tag while keeping its
//! text.

use super::surface::{ImageNode, InlineNode, Marks};
use crate::config::DEFAULT_IMAGE_EMOJI_HEIGHT_PX;

/// Serializes inline nodes. Adjacent text nodes with equal marks share one
/// run of tags.
pub fn serialize(nodes: &[InlineNode]) -> String {
    let mut out = String::new();
    let mut index = 0;

    while index < nodes.len() {
        match &nodes[index] {
            InlineNode::Text { marks, .. } => {
                let marks = *marks;
                let mut run = String::new();
                while let Some(InlineNode::Text { text, marks: next }) = nodes.get(index) {
                    if *next != marks {
                        break;
                    }
                    run.push_str(text);
                    index += 1;
                }
                write_text_run(&mut out, &run, marks);
            }
            InlineNode::Image(image) => {
                write_image(&mut out, image);
                index += 1;
            }
        }
    }

    out
}

fn write_text_run(out: &mut String, text: &str, marks: Marks) {
    if text.is_empty() {
        return;
    }
    if marks.bold {
        out.push_str("<b>");
    }
    if marks.italic {
        out.push_str("<i>");
    }
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br>"),
            '\u{a0}' => out.push_str("&nbsp;"),
            other => out.push(other),
        }
    }
    if marks.italic {
        out.push_str("</i>");
    }
    if marks.bold {
        out.push_str("</b>");
    }
}

fn write_image(out: &mut String, image: &ImageNode) {
    out.push_str(&format!(
        "<img src=\"{}\" alt=\"{}\" class=\"custom-emoji-image\" style=\"height: {}px; display: inline-block; vertical-align: text-bottom; margin: 0 2px;\">",
        escape_attribute(&image.src),
        escape_attribute(&image.alt),
        image.height_px
    ));
}

fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            other => out.push(other),
        }
    }
    out
}

/// Parses markup into inline nodes, merging adjacent text with equal marks.
pub fn parse(markup: &str) -> Vec<InlineNode> {
    let mut parser = Parser::default();
    let mut rest = markup;

    while let Some(first) = rest.chars().next() {
        match first {
            '<' => match rest.find('>') {
                Some(end) => {
                    parser.tag(&rest[1..end]);
                    rest = &rest[end + 1..];
                }
                None => {
                    parser.push_text("<");
                    rest = &rest[1..];
                }
            },
            '&' => match decode_entity(rest) {
                Some((ch, consumed)) => {
                    parser.push_char(ch);
                    rest = &rest[consumed..];
                }
                None => {
                    parser.push_text("&");
                    rest = &rest[1..];
                }
            },
            _ => {
                let end = rest.find(['<', '&']).unwrap_or(rest.len());
                parser.push_text(&rest[..end]);
                rest = &rest[end..];
            }
        }
    }

    parser.nodes
}

/// Plain text of a markup fragment.
pub fn plain_text(markup: &str) -> String {
    parse(markup)
        .iter()
        .filter_map(InlineNode::as_text)
        .collect()
}

#[derive(Default)]
struct Parser {
    nodes: Vec<InlineNode>,
    bold: usize,
    italic: usize,
}

impl Parser {
    fn marks(&self) -> Marks {
        Marks {
            bold: self.bold > 0,
            italic: self.italic > 0,
        }
    }

    fn push_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.push_text(ch.encode_utf8(&mut buf));
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let marks = self.marks();
        if let Some(InlineNode::Text {
            text: last,
            marks: last_marks,
        }) = self.nodes.last_mut()
        {
            if *last_marks == marks {
                last.push_str(text);
                return;
            }
        }
        self.nodes.push(InlineNode::styled(text, marks));
    }

    fn ends_with_line_break(&self) -> bool {
        match self.nodes.last() {
            Some(InlineNode::Text { text, .. }) => text.ends_with('\n'),
            Some(InlineNode::Image(_)) => false,
            None => true,
        }
    }

    fn tag(&mut self, raw: &str) {
        let raw = raw.trim();
        if raw.starts_with('!') {
            return;
        }
        let closing = raw.starts_with('/');
        let body = raw.trim_start_matches('/');
        let name_len = body
            .find(|c: char| !c.is_ascii_alphanumeric())
            .unwrap_or(body.len());
        let name = body[..name_len].to_ascii_lowercase();

        match name.as_str() {
            "b" | "strong" => adjust_depth(&mut self.bold, closing),
            "i" | "em" => adjust_depth(&mut self.italic, closing),
            "br" => self.push_text("\n"),
            "div" | "p" if !closing && !self.ends_with_line_break() => self.push_text("\n"),
            "img" if !closing => {
                let attributes = parse_attributes(&body[name_len..]);
                let lookup = |key: &str| {
                    attributes
                        .iter()
                        .find(|(name, _)| name == key)
                        .map(|(_, value)| value.clone())
                };
                let height_px = lookup("style")
                    .as_deref()
                    .and_then(style_height)
                    .or_else(|| lookup("height").and_then(|h| h.trim().parse().ok()))
                    .unwrap_or(DEFAULT_IMAGE_EMOJI_HEIGHT_PX);
                self.nodes.push(InlineNode::Image(ImageNode {
                    src: lookup("src").unwrap_or_default(),
                    alt: lookup("alt").unwrap_or_default(),
                    height_px,
                }));
            }
            _ => {}
        }
    }
}

fn adjust_depth(depth: &mut usize, closing: bool) {
    if closing {
        *depth = depth.saturating_sub(1);
    } else {
        *depth += 1;
    }
}

fn parse_attributes(mut rest: &str) -> Vec<(String, String)> {
    let mut attributes = Vec::new();

    loop {
        rest = rest.trim_start_matches(|c: char| c.is_whitespace() || c == '/');
        if rest.is_empty() {
            break;
        }
        let name_end = rest
            .find(|c: char| c == '=' || c.is_whitespace() || c == '/')
            .unwrap_or(rest.len());
        if name_end == 0 {
            // Stray '='; skip it so parsing always advances.
            rest = &rest[1..];
            continue;
        }
        let name = rest[..name_end].to_ascii_lowercase();
        rest = rest[name_end..].trim_start();

        let value = if let Some(after_eq) = rest.strip_prefix('=') {
            let after_eq = after_eq.trim_start();
            match after_eq.chars().next() {
                Some(quote @ ('"' | '\'')) => {
                    let inner = &after_eq[1..];
                    let end = inner.find(quote).unwrap_or(inner.len());
                    rest = inner.get(end + 1..).unwrap_or("");
                    decode_entities(&inner[..end])
                }
                _ => {
                    let end = after_eq
                        .find(char::is_whitespace)
                        .unwrap_or(after_eq.len());
                    rest = &after_eq[end..];
                    decode_entities(&after_eq[..end])
                }
            }
        } else {
            String::new()
        };

        attributes.push((name, value));
    }

    attributes
}

fn style_height(style: &str) -> Option<u32> {
    style.split(';').find_map(|declaration| {
        let (property, value) = declaration.split_once(':')?;
        if property.trim().eq_ignore_ascii_case("height") {
            value.trim().trim_end_matches("px").trim().parse().ok()
        } else {
            None
        }
    })
}

fn decode_entities(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(position) = rest.find('&') {
        out.push_str(&rest[..position]);
        rest = &rest[position..];
        match decode_entity(rest) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decodes one entity at the start of `input`, returning the char and the
/// number of bytes consumed.
fn decode_entity(input: &str) -> Option<(char, usize)> {
    let semicolon = input.get(..12).unwrap_or(input).find(';')?;
    let name = &input[1..semicolon];
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => {
            let number = name.strip_prefix('#')?;
            let code = match number.strip_prefix(['x', 'X']) {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => number.parse().ok()?,
            };
            char::from_u32(code)?
        }
    };
    Some((ch, semicolon + 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bold() -> Marks {
        Marks {
            bold: true,
            italic: false,
        }
    }

    #[test]
    fn test_serialize_groups_runs() {
        let nodes = vec![
            InlineNode::text("Hello "),
            InlineNode::styled("wor", bold()),
            InlineNode::styled("ld", bold()),
            InlineNode::text("!"),
        ];
        assert_eq!(serialize(&nodes), "Hello <b>world</b>!");
    }

    #[test]
    fn test_serialize_escapes_text() {
        let nodes = vec![InlineNode::text("a < b & c\nnext")];
        assert_eq!(serialize(&nodes), "a &lt; b &amp; c<br>next");
    }

    #[test]
    fn test_image_markup() {
        let nodes = vec![InlineNode::Image(ImageNode {
            src: "assets/emojis/sadcat.jpg".to_string(),
            alt: "sad cat".to_string(),
            height_px: 24,
        })];
        let markup = serialize(&nodes);
        assert!(markup.starts_with("<img src=\"assets/emojis/sadcat.jpg\" alt=\"sad cat\""));
        assert!(markup.contains("height: 24px"));
        assert!(markup.contains("vertical-align: text-bottom"));
        assert_eq!(parse(&markup), nodes);
    }

    #[test]
    fn test_parse_nested_and_aliases() {
        let nodes = parse("<strong>bo<em>th</em></strong> plain");
        assert_eq!(
            nodes,
            vec![
                InlineNode::styled("bo", bold()),
                InlineNode::styled(
                    "th",
                    Marks {
                        bold: true,
                        italic: true
                    }
                ),
                InlineNode::text(" plain"),
            ]
        );
    }

    #[test]
    fn test_parse_blocks_and_entities() {
        let nodes = parse("<div>one</div><div>two&nbsp;&amp;&#x1F600;</div>");
        assert_eq!(nodes, vec![InlineNode::text("one\ntwo\u{a0}&😀")]);
    }

    #[test]
    fn test_unknown_tags_keep_text() {
        assert_eq!(
            plain_text("<span style=\"color:red\">red</span> <script>x</script>"),
            "red x"
        );
    }

    #[test]
    fn test_malformed_input_does_not_panic() {
        assert_eq!(plain_text("a < b"), "a < b");
        assert_eq!(plain_text("fish & chips"), "fish & chips");
        assert_eq!(plain_text("&unknownentity;"), "&unknownentity;");
        let nodes = parse("<img src=\"x\" = alt='y'>");
        assert!(matches!(&nodes[0], InlineNode::Image(image) if image.alt == "y"));
    }

    #[test]
    fn test_markup_survives_reload() {
        let markup = "Hi <b>there</b> <i>you</i><br>😀 ";
        assert_eq!(serialize(&parse(markup)), markup);
    }
}
