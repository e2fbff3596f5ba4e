use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, blocks::trailing};

/// Paragraph block, the default when nothing else matches: the rest of the
/// current line, possibly empty, plus its newline. Always matches, and
/// consumes at least one byte of any non-empty input.
pub static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.*)(\n?)").expect("Invalid paragraph regex"));

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!("<p>{}</p>{}", ctx.render_capture(caps, 1), trailing(caps, 2))
}
