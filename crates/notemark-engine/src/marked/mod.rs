//! # Note Markup Rendering
//!
//! Turns a note's raw text into HTML by repeatedly consuming a prefix of the
//! remaining text with the first matcher that accepts it.
//!
//! ## Matcher Lists
//!
//! Two process-wide lists drive rendering:
//! - **`blocks`**: code block, to-do items, list items, paragraph (fallback)
//! - **`inline`**: code span, image, link, bare URL, emphasis family, tag,
//!   plain text (fallback)
//!
//! Both are walked by the same [`render`] function. Block renderers render
//! their content by calling [`render`] again with the inline list carried in
//! the [`RenderContext`].
//!
//! ## Key Invariants
//!
//! - Every list ends with a fallback, so any non-empty input makes progress
//! - The bytes consumed by all fragments of one call sum to the input length
//! - Fenced code is a raw zone: its body is highlighted, never parsed
//! - Highlighting is applied by each renderer to the text it owns
//! - Each matcher sees the char preceding its input in
//!   [`RenderContext::preceding`]; that is how tags know they start a word

pub mod blocks;
pub mod context;
pub mod escape;
pub mod highlight;
pub mod inline;
pub mod matcher;

use std::sync::LazyLock;

use crate::highlighter::{Highlighter, default_highlighter};

pub use context::RenderContext;
pub use highlight::{HighlightTerm, inject};
pub use matcher::{Fragment, Matcher, MatcherList, MatcherListError, PatternMatcher};

static BLOCK_MATCHERS: LazyLock<MatcherList> = LazyLock::new(blocks::matchers);
static INLINE_MATCHERS: LazyLock<MatcherList> = LazyLock::new(inline::matchers);

/// Block-level matchers in precedence order.
pub fn block_matchers() -> &'static MatcherList {
    &BLOCK_MATCHERS
}

/// Inline matchers in precedence order.
pub fn inline_matchers() -> &'static MatcherList {
    &INLINE_MATCHERS
}

/// Renders `text` with `matchers`, concatenating every fragment.
pub fn render(text: &str, matchers: &MatcherList, ctx: &RenderContext<'_>) -> String {
    dispatch(text, matchers, ctx).map(|f| f.markup).collect()
}

/// Walks `text` with `matchers`, yielding one [`Fragment`] per match.
pub fn dispatch<'t, 'c>(
    text: &'t str,
    matchers: &'c MatcherList,
    ctx: &RenderContext<'c>,
) -> Dispatch<'t, 'c> {
    Dispatch {
        rest: text,
        matchers,
        ctx: *ctx,
    }
}

/// Iterator returned by [`dispatch`].
pub struct Dispatch<'t, 'c> {
    rest: &'t str,
    matchers: &'c MatcherList,
    ctx: RenderContext<'c>,
}

impl<'t> Dispatch<'t, '_> {
    /// The input not consumed yet.
    pub fn rest(&self) -> &'t str {
        self.rest
    }
}

impl Iterator for Dispatch<'_, '_> {
    type Item = Fragment;

    fn next(&mut self) -> Option<Fragment> {
        if self.rest.is_empty() {
            return None;
        }

        let Some((name, fragment)) = self.matchers.iter().find_map(|m| {
            m.try_match(self.rest, &self.ctx)
                .map(|fragment| (m.name(), fragment))
        }) else {
            unreachable!(
                "no matcher accepted {:?}; matcher lists end with a fallback",
                preview(self.rest)
            );
        };

        // A matcher that makes no progress, or overshoots, is a bug in that matcher.
        assert!(
            fragment.consumed > 0 && fragment.consumed <= self.rest.len(),
            "matcher `{name}` consumed {} of {} remaining bytes",
            fragment.consumed,
            self.rest.len()
        );

        let (done, rest) = self.rest.split_at(fragment.consumed);
        self.ctx.preceding = done.chars().next_back();
        self.rest = rest;
        Some(fragment)
    }
}

fn preview(s: &str) -> &str {
    match s.char_indices().nth(40) {
        Some((i, _)) => &s[..i],
        None => s,
    }
}

/// Renders notes with the process-wide matcher lists.
///
/// Holds what stays fixed between requests: known tags and the highlighter.
/// The search term is per request.
pub struct Renderer<'h> {
    tags: Vec<String>,
    highlighter: &'h dyn Highlighter,
}

impl Renderer<'static> {
    /// A renderer with no known tags and the syntect highlighter.
    pub fn new() -> Self {
        Self {
            tags: Vec::new(),
            highlighter: default_highlighter(),
        }
    }
}

impl Default for Renderer<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'h> Renderer<'h> {
    #[must_use]
    pub fn with_highlighter<'n>(self, highlighter: &'n dyn Highlighter) -> Renderer<'n> {
        Renderer {
            tags: self.tags,
            highlighter,
        }
    }

    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Renders a whole note, marking `highlight` when given.
    pub fn render_note(&self, text: &str, highlight: Option<&str>) -> String {
        let term = highlight.and_then(HighlightTerm::new);
        let ctx = RenderContext::new(inline_matchers(), self.highlighter)
            .with_tags(&self.tags)
            .with_highlight(term.as_ref());
        render(text, block_matchers(), &ctx)
    }
}

/// Renders a note with the default highlighter.
pub fn render_with(text: &str, highlight: Option<&str>, tags: &[String]) -> String {
    let term = highlight.and_then(HighlightTerm::new);
    let ctx = RenderContext::new(inline_matchers(), default_highlighter())
        .with_tags(tags)
        .with_highlight(term.as_ref());
    render(text, block_matchers(), &ctx)
}
