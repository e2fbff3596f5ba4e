use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, blocks::trailing};

/// Unordered list item: `- ` or `* ` then content to end of line.
pub struct UnorderedItem;

impl UnorderedItem {
    pub const BULLET: &'static str = "•";
}

pub static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*-] (.+)(\n?)").expect("Invalid unordered list regex"));

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    format!(
        "<p><span class=\"ul-block\">{}</span>{}</p>{}",
        UnorderedItem::BULLET,
        ctx.render_capture(caps, 1),
        trailing(caps, 2)
    )
}
