use std::sync::LazyLock;

use regex::Regex;

use crate::marked::{Fragment, Matcher, RenderContext, escape::escape_text};

/// `#name` tag reference.
///
/// Matches only names present in the render context, and only at the start
/// of a word, so arbitrary hash text (`#1`, `C#`, `**x**#y`) stays plain.
/// Names stop at markup delimiters, and trailing sentence punctuation is not
/// part of the name.
pub struct Tag;

impl Tag {
    pub const HASH: char = '#';
}

pub static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#([^\s#*~`\[\]()]*[^\s#*~`\[\]().,;:!?])").expect("Invalid tag regex")
});

impl Matcher for Tag {
    fn name(&self) -> &'static str {
        "tag"
    }

    fn try_match(&self, rest: &str, ctx: &RenderContext<'_>) -> Option<Fragment> {
        if !ctx.at_word_start() {
            return None;
        }
        let caps = PATTERN.captures(rest)?;
        let name = caps.get(1)?.as_str();
        if !ctx.is_known_tag(name) {
            return None;
        }
        Some(Fragment {
            markup: format!(
                "<span class=\"tag-span\">{}{}</span>",
                Self::HASH,
                ctx.mark(&escape_text(name))
            ),
            consumed: caps.get(0)?.end(),
        })
    }
}
