use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{
    RenderContext,
    escape::{escape_attr, escape_text},
};

pub static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[([^\]\n]*)\]\(([^)\s]+)\)").expect("Invalid link regex"));

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    let label = caps.get(1).map_or("", |m| m.as_str());
    let url = caps.get(2).map_or("", |m| m.as_str());
    let text = if label.is_empty() {
        ctx.mark(&escape_text(url)).into_owned()
    } else {
        ctx.render_capture(caps, 1)
    };
    anchor(url, &text)
}

/// An external link opening in a new tab.
pub(crate) fn anchor(url: &str, text: &str) -> String {
    format!(
        "<a class=\"link\" target=\"_blank\" rel=\"noreferrer\" href=\"{}\">{}</a>",
        escape_attr(url),
        text
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marked::{inline_matchers, render};
    use pretty_assertions::assert_eq;

    fn inline(text: &str) -> String {
        render(text, inline_matchers(), &RenderContext::plain())
    }

    #[test]
    fn link_with_label() {
        assert_eq!(
            inline("see [docs](https://x.test/a?b=1&c=2)"),
            "see <a class=\"link\" target=\"_blank\" rel=\"noreferrer\" href=\"https://x.test/a?b=1&amp;c=2\">docs</a>"
        );
    }

    #[test]
    fn label_is_parsed_inline() {
        assert!(inline("[**big**](u)").contains("><strong>big</strong></a>"));
    }

    #[test]
    fn empty_label_shows_url() {
        assert!(inline("[](https://x.test)").ends_with(">https://x.test</a>"));
    }

    #[test]
    fn brackets_without_url_are_text() {
        assert_eq!(inline("[just brackets]"), "[just brackets]");
    }
}
