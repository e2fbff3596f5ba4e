use crate::marked::{
    Fragment, Matcher, RenderContext, escape::escape_text, inline::cursor::Cursor,
};

use super::{CodeSpan, Tag};

/// Plain text inline type (fallback).
///
/// Consumes its first char unconditionally, then runs until another inline
/// matcher accepts the remaining text, so the list always makes progress and
/// text between constructs stays in one piece for highlighting. Delimiters
/// that open nothing (`a*b`, an unclosed `~~`, an unknown `#tag`) stay inside
/// the run.
pub struct PlainText;

impl PlainText {
    pub const LINK_SCHEMES: [&'static str; 2] = ["http://", "https://"];

    /// Length in bytes of the text run at the start of `rest`.
    pub fn run_len(rest: &str, ctx: &RenderContext<'_>) -> usize {
        let mut cur = Cursor::new(rest);
        cur.bump();
        while let Some(c) = cur.peek() {
            if Self::may_open(&cur, c) && Self::opens_construct(&cur, ctx) {
                break;
            }
            cur.bump();
        }
        cur.pos()
    }

    /// Cheap first check: can `c` start any inline construct at all.
    fn may_open(cur: &Cursor<'_>, c: char) -> bool {
        match c {
            CodeSpan::TICK | '[' | '*' | Tag::HASH => true,
            '!' => cur.starts_with("!["),
            '~' => cur.starts_with("~~"),
            'h' => Self::LINK_SCHEMES.iter().any(|scheme| cur.starts_with(scheme)),
            _ => false,
        }
    }

    fn opens_construct(cur: &Cursor<'_>, ctx: &RenderContext<'_>) -> bool {
        let here = ctx.after(cur.prev());
        ctx.inline
            .iter()
            .filter(|m| !m.is_fallback())
            .any(|m| m.accepts(cur.rest(), &here))
    }
}

impl Matcher for PlainText {
    fn name(&self) -> &'static str {
        "plain text"
    }

    fn try_match(&self, rest: &str, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if rest.is_empty() {
            return None;
        }
        let consumed = Self::run_len(rest, ctx);
        let text = escape_text(&rest[..consumed]);
        Some(Fragment {
            markup: ctx.mark(&text).into_owned(),
            consumed,
        })
    }

    fn is_fallback(&self) -> bool {
        true
    }
}
