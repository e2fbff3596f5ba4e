use std::borrow::Cow;

use regex::Captures;

use crate::highlighter::{Highlighter, PlainHighlighter};

use super::{highlight::HighlightTerm, inline_matchers, matcher::MatcherList, render};

/// Parameters threaded through every matcher call of one render request.
///
/// `Copy` and never mutated in place. The only field that changes while
/// walking text is `preceding`, and each step gets its own copy, so a render
/// call depends on nothing but its arguments.
#[derive(Clone, Copy)]
pub struct RenderContext<'a> {
    /// Search term to mark in rendered text.
    pub highlight: Option<&'a HighlightTerm>,
    /// Tag names that `#name` may refer to.
    pub tags: &'a [String],
    /// Matchers used when a renderer parses its content inline.
    pub inline: &'a MatcherList,
    pub highlighter: &'a dyn Highlighter,
    /// The char just before the text being matched; `None` at the start of
    /// a note.
    pub preceding: Option<char>,
}

impl<'a> RenderContext<'a> {
    pub fn new(inline: &'a MatcherList, highlighter: &'a dyn Highlighter) -> Self {
        Self {
            highlight: None,
            tags: &[],
            inline,
            highlighter,
            preceding: None,
        }
    }

    /// Default inline matchers, escape-only highlighting, no tags.
    pub fn plain() -> RenderContext<'static> {
        RenderContext::new(inline_matchers(), &PlainHighlighter)
    }

    #[must_use]
    pub fn with_highlight(mut self, highlight: Option<&'a HighlightTerm>) -> Self {
        self.highlight = highlight;
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: &'a [String]) -> Self {
        self.tags = tags;
        self
    }

    /// The same context, positioned after `preceding`.
    #[must_use]
    pub fn after(mut self, preceding: Option<char>) -> Self {
        self.preceding = preceding;
        self
    }

    /// Whether the text being matched starts a word.
    pub fn at_word_start(&self) -> bool {
        self.preceding.is_none_or(char::is_whitespace)
    }

    pub fn is_known_tag(&self, name: &str) -> bool {
        self.tags.iter().any(|tag| tag == name)
    }

    /// Applies the highlight term, if any, to already-rendered markup.
    pub fn mark<'m>(&self, markup: &'m str) -> Cow<'m, str> {
        match self.highlight {
            Some(term) => term.apply(markup),
            None => Cow::Borrowed(markup),
        }
    }

    /// Renders `text` with the inline matchers of this context.
    pub fn render_inline(&self, text: &str) -> String {
        render(text, self.inline, self)
    }

    /// Renders capture `group` inline, positioned after whatever the match
    /// consumed before it (an opening delimiter, a list marker).
    pub fn render_capture(&self, caps: &Captures<'_>, group: usize) -> String {
        let (Some(whole), Some(content)) = (caps.get(0), caps.get(group)) else {
            return String::new();
        };
        let before = &whole.as_str()[..content.start() - whole.start()];
        let ctx = match before.chars().next_back() {
            Some(c) => self.after(Some(c)),
            None => *self,
        };
        ctx.render_inline(content.as_str())
    }
}
