//! In-memory inline-node buffer.

use super::markup;
use super::surface::{Caret, InlineNode, Marks, RichTextSurface, Selection, TextContext};
use crate::error::{PadError, Result};
use std::ops::Range;

/// Flat list of inline nodes with a selection.
///
/// Adjacent text nodes are never merged implicitly, so node indices handed
/// out by [`RichTextSurface::insert_node_at_cursor`] stay meaningful until
/// the next structural edit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RichTextBuffer {
    nodes: Vec<InlineNode>,
    selection: Selection,
    /// Marks toggled on a collapsed caret, applied to the next typed text
    pending: Option<Marks>,
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

fn byte_index(text: &str, char_offset: usize) -> usize {
    text.char_indices()
        .nth(char_offset)
        .map_or(text.len(), |(index, _)| index)
}

impl RichTextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a buffer with the caret at the end.
    pub fn from_nodes(nodes: Vec<InlineNode>) -> Self {
        let end = nodes.len();
        Self {
            nodes,
            selection: Selection::collapsed(Caret::Boundary(end)),
            pending: None,
        }
    }

    pub fn from_markup(markup: &str) -> Self {
        Self::from_nodes(markup::parse(markup))
    }

    pub fn nodes(&self) -> &[InlineNode] {
        &self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.iter().all(|node| node.as_text() == Some(""))
    }

    pub fn is_collapsed(&self) -> bool {
        self.point(self.selection.anchor) == self.point(self.selection.focus)
    }

    /// Moves the caret to the end of the content.
    pub fn move_to_end(&mut self) {
        self.set_selection(Selection::collapsed(Caret::Boundary(self.nodes.len())));
    }

    /// Selects everything.
    pub fn select_all(&mut self) {
        self.set_selection(Selection::range(
            Caret::Boundary(0),
            Caret::Boundary(self.nodes.len()),
        ));
    }

    fn text_len(&self, node: usize) -> Option<usize> {
        self.nodes.get(node)?.as_text().map(char_len)
    }

    fn clamp(&self, caret: Caret) -> Caret {
        match caret {
            Caret::Text { node, offset } => match self.text_len(node) {
                Some(len) => Caret::Text {
                    node,
                    offset: offset.min(len),
                },
                None => Caret::Boundary(node.min(self.nodes.len())),
            },
            Caret::Boundary(index) => Caret::Boundary(index.min(self.nodes.len())),
        }
    }

    /// Document-order position of a caret. Offsets at either end of a text
    /// node collapse onto the neighbouring boundary so equal points compare
    /// equal.
    fn point(&self, caret: Caret) -> (usize, usize) {
        match self.clamp(caret) {
            Caret::Text { node, offset } => {
                let len = self.text_len(node).unwrap_or(0);
                if offset == 0 {
                    (node, 0)
                } else if offset >= len {
                    (node + 1, 0)
                } else {
                    (node, offset)
                }
            }
            Caret::Boundary(index) => (index, 0),
        }
    }

    fn ordered(&self) -> (Caret, Caret) {
        let Selection { anchor, focus } = self.selection;
        if self.point(anchor) <= self.point(focus) {
            (self.clamp(anchor), self.clamp(focus))
        } else {
            (self.clamp(focus), self.clamp(anchor))
        }
    }

    /// Splits the text node under `caret` so the caret falls on a boundary.
    ///
    /// Returns the boundary index and whether a node was inserted.
    fn split_at(&mut self, caret: Caret) -> (usize, bool) {
        match self.clamp(caret) {
            Caret::Boundary(index) => (index, false),
            Caret::Text { node, offset } => {
                let Some(InlineNode::Text { text, marks }) = self.nodes.get_mut(node) else {
                    return (node, false);
                };
                let len = char_len(text);
                if offset == 0 {
                    (node, false)
                } else if offset >= len {
                    (node + 1, false)
                } else {
                    let tail = text.split_off(byte_index(text, offset));
                    let marks = *marks;
                    self.nodes.insert(node + 1, InlineNode::styled(tail, marks));
                    (node + 1, true)
                }
            }
        }
    }

    /// Splits both selection ends onto boundaries, returning the node range
    /// the selection covers.
    fn split_selection(&mut self) -> Range<usize> {
        let (start, end) = self.ordered();
        let (mut end_index, _) = self.split_at(end);
        let (start_index, inserted) = self.split_at(start);
        if inserted {
            end_index += 1;
        }
        start_index..end_index.max(start_index)
    }

    /// Removes the selected content and collapses the selection onto its
    /// start.
    fn delete_selection(&mut self) -> Caret {
        let (start, _) = self.ordered();
        if self.is_collapsed() {
            self.selection = Selection::collapsed(start);
            return start;
        }
        let range = self.split_selection();
        let boundary = range.start;
        self.nodes.drain(range);
        let caret = match start {
            Caret::Text { node, offset } if offset > 0 => Caret::Text { node, offset },
            _ => Caret::Boundary(boundary),
        };
        self.selection = Selection::collapsed(caret);
        caret
    }

    /// Marks of the text immediately before `caret`, falling back to the
    /// text after it.
    fn marks_at(&self, caret: Caret) -> Marks {
        let previous = |index: usize| {
            index
                .checked_sub(1)
                .and_then(|i| self.nodes.get(i))
                .and_then(InlineNode::marks)
        };
        match self.clamp(caret) {
            Caret::Text { node, offset } => {
                let own = self.nodes.get(node).and_then(InlineNode::marks);
                if offset == 0 {
                    previous(node).or(own).unwrap_or_default()
                } else {
                    own.unwrap_or_default()
                }
            }
            Caret::Boundary(index) => previous(index)
                .or_else(|| self.nodes.get(index).and_then(InlineNode::marks))
                .unwrap_or_default(),
        }
    }

    /// Text nodes overlapping the (non-collapsed) selection.
    fn selected_text_nodes(&self) -> impl Iterator<Item = &InlineNode> {
        let (start, end) = self.ordered();
        let (from, to) = (self.point(start), self.point(end));
        self.nodes
            .iter()
            .enumerate()
            .filter(move |(index, node)| {
                node.as_text().is_some_and(|text| !text.is_empty())
                    && (*index, 0) < to
                    && from < (index + 1, 0)
            })
            .map(|(_, node)| node)
    }

    fn edit_text(&mut self, node: usize, edit: impl FnOnce(&mut String)) {
        if let Some(InlineNode::Text { text, .. }) = self.nodes.get_mut(node) {
            edit(text);
        }
    }

    fn current_marks(&self) -> Marks {
        if let Some(pending) = self.pending {
            return pending;
        }
        if self.is_collapsed() {
            return self.marks_at(self.selection.focus);
        }
        let mut any = false;
        let mut marks = Marks {
            bold: true,
            italic: true,
        };
        for node in self.selected_text_nodes() {
            any = true;
            let node_marks = node.marks().unwrap_or_default();
            marks.bold &= node_marks.bold;
            marks.italic &= node_marks.italic;
        }
        if any { marks } else { Marks::default() }
    }

    fn toggle(&mut self, flip: fn(&mut Marks, bool), read: fn(&Marks) -> bool) {
        let current = self.current_marks();
        if self.is_collapsed() {
            let mut marks = current;
            flip(&mut marks, !read(&current));
            self.pending = Some(marks);
            return;
        }

        let value = !read(&current);
        let range = self.split_selection();
        for node in &mut self.nodes[range.clone()] {
            if let InlineNode::Text { marks, .. } = node {
                flip(marks, value);
            }
        }
        self.selection = Selection::range(Caret::Boundary(range.start), Caret::Boundary(range.end));
        self.pending = None;
    }
}

impl RichTextSurface for RichTextBuffer {
    fn toggle_bold(&mut self) {
        self.toggle(|marks, value| marks.bold = value, |marks| marks.bold);
    }

    fn toggle_italic(&mut self) {
        self.toggle(|marks, value| marks.italic = value, |marks| marks.italic);
    }

    fn is_bold_active(&self) -> bool {
        self.current_marks().bold
    }

    fn is_italic_active(&self) -> bool {
        self.current_marks().italic
    }

    fn insert_node_at_cursor(&mut self, node: InlineNode) -> usize {
        let caret = self.delete_selection();
        let (index, _) = self.split_at(caret);
        self.nodes.insert(index, node);
        self.selection = Selection::collapsed(Caret::Boundary(index + 1));
        self.pending = None;
        index
    }

    fn replace_range_with_text(&mut self, node: usize, range: Range<usize>, text: &str) -> Result<()> {
        let Some(InlineNode::Text { text: existing, .. }) = self.nodes.get_mut(node) else {
            return Err(PadError::internal(format!("node {node} is not a text node")));
        };
        let len = char_len(existing);
        if range.start > range.end || range.end > len {
            return Err(PadError::internal(format!(
                "range {}..{} out of bounds for text of length {len}",
                range.start, range.end
            )));
        }
        let start = byte_index(existing, range.start);
        let end = byte_index(existing, range.end);
        existing.replace_range(start..end, text);
        self.selection = Selection::collapsed(Caret::Text {
            node,
            offset: range.start + char_len(text),
        });
        self.pending = None;
        Ok(())
    }

    fn insert_text(&mut self, text: &str) {
        let (start, _) = self.ordered();
        let marks = self.pending.unwrap_or_else(|| self.marks_at(start));
        let caret = self.delete_selection();
        self.pending = None;
        if text.is_empty() {
            return;
        }
        let added = char_len(text);
        let same_marks =
            |nodes: &[InlineNode], index: usize| nodes.get(index).and_then(InlineNode::marks) == Some(marks);

        let caret = match caret {
            Caret::Text { node, offset } if same_marks(&self.nodes, node) => {
                self.edit_text(node, |existing| {
                    let at = byte_index(existing, offset);
                    existing.insert_str(at, text);
                });
                Caret::Text {
                    node,
                    offset: offset + added,
                }
            }
            Caret::Boundary(index) if index > 0 && same_marks(&self.nodes, index - 1) => {
                let mut len = 0;
                self.edit_text(index - 1, |existing| {
                    existing.push_str(text);
                    len = char_len(existing);
                });
                Caret::Text {
                    node: index - 1,
                    offset: len,
                }
            }
            Caret::Boundary(index) if same_marks(&self.nodes, index) => {
                self.edit_text(index, |existing| existing.insert_str(0, text));
                Caret::Text {
                    node: index,
                    offset: added,
                }
            }
            _ => {
                let (index, _) = self.split_at(caret);
                self.nodes.insert(index, InlineNode::styled(text, marks));
                Caret::Text {
                    node: index,
                    offset: added,
                }
            }
        };
        self.selection = Selection::collapsed(caret);
    }

    fn selection(&self) -> Selection {
        self.selection
    }

    fn set_selection(&mut self, selection: Selection) {
        self.selection = Selection::range(self.clamp(selection.anchor), self.clamp(selection.focus));
        self.pending = None;
    }

    fn caret_text(&self) -> Option<TextContext> {
        match self.clamp(self.selection.focus) {
            Caret::Text { node, offset } => Some(TextContext {
                node,
                text: self.nodes.get(node)?.as_text()?.to_string(),
                offset,
            }),
            Caret::Boundary(_) => None,
        }
    }

    fn to_markup(&self) -> String {
        markup::serialize(&self.nodes)
    }

    fn load_markup(&mut self, markup: &str) {
        *self = Self::from_markup(markup);
    }

    fn text_content(&self) -> String {
        self.nodes.iter().filter_map(InlineNode::as_text).collect()
    }
}
