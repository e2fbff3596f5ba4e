use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, blocks::trailing, escape::escape_text};

/// Ordered list item: digits, `. `, then content to end of line.
///
/// The number is kept as written; items are not renumbered.
pub static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\. (.+)(\n?)").expect("Invalid ordered list regex")
});

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    let number = caps.get(1).map_or("", |m| m.as_str());
    format!(
        "<p><span class=\"ol-block\">{}.</span>{}</p>{}",
        escape_text(number),
        ctx.render_capture(caps, 2),
        trailing(caps, 3)
    )
}
