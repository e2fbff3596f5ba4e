use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, escape::escape_attr};

pub static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^!\[([^\]\n]*)\]\(([^)\s]+)\)").expect("Invalid image regex")
});

pub fn render(caps: &Captures<'_>, _ctx: &RenderContext<'_>) -> String {
    let alt = caps.get(1).map_or("", |m| m.as_str());
    let url = caps.get(2).map_or("", |m| m.as_str());
    format!(
        "<img class=\"img\" src=\"{}\" alt=\"{}\" />",
        escape_attr(url),
        escape_attr(alt)
    )
}
