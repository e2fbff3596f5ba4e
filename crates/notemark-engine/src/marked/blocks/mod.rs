//! # Block Matchers
//!
//! Line-anchored constructs, tried in this order:
//!
//! 1. **`code_block`**: fenced ```` ``` ```` region, highlighted, never parsed
//! 2. **`todo_item`**: `- [ ] content`
//! 3. **`todo_item`** (done): `- [x] content`
//! 4. **`ordered_item`**: `12. content`
//! 5. **`unordered_item`**: `- content` or `* content`
//! 6. **`paragraph`**: the rest of the line (fallback)
//!
//! Every block consumes its trailing newline, if any, and re-emits it after
//! the element so line structure survives in the markup.

pub mod kinds;

use std::borrow::Cow;

use regex::Captures;

use super::{
    escape::escape_text,
    matcher::{Matcher, MatcherList, PatternMatcher},
};
use kinds::{code_block, ordered_item, paragraph, todo_item, unordered_item};

/// Builds the block matcher list in precedence order.
pub fn matchers() -> MatcherList {
    let matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(PatternMatcher::new(
            "code block",
            &code_block::PATTERN,
            code_block::render,
        )),
        Box::new(PatternMatcher::new(
            "todo item",
            &todo_item::TODO_PATTERN,
            todo_item::render_todo,
        )),
        Box::new(PatternMatcher::new(
            "done item",
            &todo_item::DONE_PATTERN,
            todo_item::render_done,
        )),
        Box::new(PatternMatcher::new(
            "ordered list",
            &ordered_item::PATTERN,
            ordered_item::render,
        )),
        Box::new(PatternMatcher::new(
            "unordered list",
            &unordered_item::PATTERN,
            unordered_item::render,
        )),
        Box::new(
            PatternMatcher::new("paragraph", &paragraph::PATTERN, paragraph::render).fallback(),
        ),
    ];
    MatcherList::new(matchers).expect("block matchers end with the paragraph fallback")
}

/// The trailing newline captured in `group`, escaped like any emitted text.
pub(crate) fn trailing<'c>(caps: &Captures<'c>, group: usize) -> Cow<'c, str> {
    escape_text(caps.get(group).map_or("", |m| m.as_str()))
}

/// A slice of note text as the block matchers see it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Byte offset of `text` in the note.
    pub offset: usize,
    pub text: &'a str,
    /// Whether this is a whole fenced code block.
    pub is_code: bool,
}

/// Splits note text into fenced code blocks and single lines.
///
/// Code blocks are recognised with the code block pattern itself, so
/// callers can skip raw zones the same way rendering does.
pub fn segments(text: &str) -> Segments<'_> {
    Segments { text, offset: 0 }
}

/// Iterator returned by [`segments`].
pub struct Segments<'a> {
    text: &'a str,
    offset: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        let rest = &self.text[self.offset..];
        if rest.is_empty() {
            return None;
        }

        let (len, is_code) = match code_block::PATTERN.find(rest) {
            Some(m) => (m.end(), true),
            None => (rest.find('\n').map_or(rest.len(), |i| i + 1), false),
        };

        let segment = Segment {
            offset: self.offset,
            text: &rest[..len],
            is_code,
        };
        self.offset += len;
        Some(segment)
    }
}
