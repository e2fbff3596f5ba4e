//! Emphasis family. Content is parsed inline, so these nest.
//!
//! Order matters: `***` must be tried before `**`, and `**` before `*`.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::RenderContext;

pub static BOLD_EMPHASIS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\*\*(.+?)\*\*\*").expect("Invalid bold emphasis regex")
});

pub static BOLD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*\*(.+?)\*\*").expect("Invalid bold regex"));

pub static ITALIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\*(.+?)\*").expect("Invalid italic regex"));

pub static STRIKETHROUGH: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^~~(.+?)~~").expect("Invalid strikethrough regex"));

fn content(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    ctx.render_capture(caps, 1)
}

pub fn render_bold_emphasis(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!("<strong><em>{}</em></strong>", content(caps, ctx))
}

pub fn render_bold(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!("<strong>{}</strong>", content(caps, ctx))
}

pub fn render_italic(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!("<em>{}</em>", content(caps, ctx))
}

pub fn render_strikethrough(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!("<del>{}</del>", content(caps, ctx))
}
