//! Search-term highlighting over rendered markup.
//!
//! Only text runs are searched: anything between `<` and `>` is copied
//! through untouched, and a match may not start or end inside a character
//! entity such as `&amp;`. Matching is case-insensitive and the original
//! casing is kept inside the `<mark>` element.

use std::{borrow::Cow, ops::Range, sync::LazyLock};

use regex::{Regex, RegexBuilder};

use super::escape::escape_text;

static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(?:#[0-9]+|#[xX][0-9a-fA-F]+|[a-zA-Z][a-zA-Z0-9]*);").expect("Invalid entity regex")
});

/// A compiled search term, built once per render request.
#[derive(Debug, Clone)]
pub struct HighlightTerm {
    term: String,
    pattern: Regex,
}

impl HighlightTerm {
    pub const OPEN: &'static str = "<mark>";
    pub const CLOSE: &'static str = "</mark>";

    /// Returns `None` for an empty term.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        // Rendered text is escaped, so search for the escaped form.
        let needle = escape_text(term);
        match RegexBuilder::new(&regex::escape(&needle))
            .case_insensitive(true)
            .build()
        {
            Ok(pattern) => Some(Self {
                term: term.to_string(),
                pattern,
            }),
            Err(err) => {
                log::warn!("Ignoring highlight term {term:?}: {err}");
                None
            }
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Wraps every occurrence of the term in the text content of `markup`.
    pub fn apply<'m>(&self, markup: &'m str) -> Cow<'m, str> {
        let mut out = String::with_capacity(markup.len() + Self::OPEN.len() + Self::CLOSE.len());
        let mut marked = false;
        let mut rest = markup;

        while !rest.is_empty() {
            let split = rest.find('<').unwrap_or(rest.len());
            let (text, tail) = rest.split_at(split);
            marked |= self.mark_text(text, &mut out);

            // Copy the tag through, up to and including `>`.
            let tag_end = tail.find('>').map_or(tail.len(), |i| i + 1);
            out.push_str(&tail[..tag_end]);
            rest = &tail[tag_end..];
        }

        if marked {
            Cow::Owned(out)
        } else {
            Cow::Borrowed(markup)
        }
    }

    fn mark_text(&self, text: &str, out: &mut String) -> bool {
        let entities: Vec<Range<usize>> = ENTITY.find_iter(text).map(|m| m.range()).collect();
        let inside_entity = |pos: usize| entities.iter().any(|r| r.start < pos && pos < r.end);

        let mut last = 0;
        let mut marked = false;
        for m in self.pattern.find_iter(text) {
            if inside_entity(m.start()) || inside_entity(m.end()) {
                continue;
            }
            out.push_str(&text[last..m.start()]);
            out.push_str(Self::OPEN);
            out.push_str(m.as_str());
            out.push_str(Self::CLOSE);
            last = m.end();
            marked = true;
        }
        out.push_str(&text[last..]);
        marked
    }
}

/// One-shot form of [`HighlightTerm::apply`]; identity for an empty term.
pub fn inject<'m>(markup: &'m str, term: &str) -> Cow<'m, str> {
    match HighlightTerm::new(term) {
        Some(term) => term.apply(markup),
        None => Cow::Borrowed(markup),
    }
}
