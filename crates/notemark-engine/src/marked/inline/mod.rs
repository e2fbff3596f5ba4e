//! # Inline Matchers
//!
//! Constructs inside a block's content, tried in this order:
//!
//! 1. code span (raw zone, so nothing inside it is parsed)
//! 2. image, then link (`![` must win over `[`)
//! 3. bare URL
//! 4. bold-emphasis, bold, italic, strikethrough
//! 5. tag
//! 6. plain text (fallback)
//!
//! Unclosed constructs are not errors: their opening delimiter is taken by
//! the plain text fallback and parsing continues after it.

pub mod cursor;
pub mod kinds;

use super::matcher::{Matcher, MatcherList, PatternMatcher};
use kinds::{PlainText, Tag, code_span, emphasis, image, link, plain_link};

/// Builds the inline matcher list in precedence order.
pub fn matchers() -> MatcherList {
    let matchers: Vec<Box<dyn Matcher>> = vec![
        Box::new(PatternMatcher::new(
            "code span",
            &code_span::PATTERN,
            code_span::render,
        )),
        Box::new(PatternMatcher::new("image", &image::PATTERN, image::render)),
        Box::new(PatternMatcher::new("link", &link::PATTERN, link::render)),
        Box::new(PatternMatcher::new(
            "plain link",
            &plain_link::PATTERN,
            plain_link::render,
        )),
        Box::new(PatternMatcher::new(
            "bold emphasis",
            &emphasis::BOLD_EMPHASIS,
            emphasis::render_bold_emphasis,
        )),
        Box::new(PatternMatcher::new(
            "bold",
            &emphasis::BOLD,
            emphasis::render_bold,
        )),
        Box::new(PatternMatcher::new(
            "italic",
            &emphasis::ITALIC,
            emphasis::render_italic,
        )),
        Box::new(PatternMatcher::new(
            "strikethrough",
            &emphasis::STRIKETHROUGH,
            emphasis::render_strikethrough,
        )),
        Box::new(Tag),
        Box::new(PlainText),
    ];
    MatcherList::new(matchers).expect("inline matchers end with the plain text fallback")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marked::{RenderContext, render};
    use pretty_assertions::assert_eq;

    #[test]
    fn inline_order() {
        assert_eq!(
            matchers().names(),
            vec![
                "code span",
                "image",
                "link",
                "plain link",
                "bold emphasis",
                "bold",
                "italic",
                "strikethrough",
                "tag",
                "plain text"
            ]
        );
    }

    #[test]
    fn mixed_line() {
        let tags = vec!["idea".to_string()];
        let ctx = RenderContext::plain().with_tags(&tags);
        assert_eq!(
            render("*new* #idea: see `x` & [y](z)", &matchers(), &ctx),
            "<em>new</em> <span class=\"tag-span\">#idea</span>: see <code>x</code> &amp; <a class=\"link\" target=\"_blank\" rel=\"noreferrer\" href=\"z\">y</a>"
        );
    }

    #[test]
    fn newlines_are_plain_text() {
        assert_eq!(
            render("a\nb", &matchers(), &RenderContext::plain()),
            "a\nb"
        );
    }
}
