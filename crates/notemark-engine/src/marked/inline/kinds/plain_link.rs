use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, escape::escape_text};

use super::link::anchor;

/// Bare `http(s)://` URLs. Trailing sentence punctuation is left out.
pub static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://[^\s<>]*[^\s<>.,:;!?)\]]").expect("Invalid URL regex")
});

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    let url = caps.get(0).map_or("", |m| m.as_str());
    anchor(url, &ctx.mark(&escape_text(url)))
}
