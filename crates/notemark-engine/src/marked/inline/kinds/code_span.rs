use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::marked::{RenderContext, escape::escape_text};

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: content is escaped and highlighted but no other
/// inline parsing happens inside them.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: char = '`';
}

pub static PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^`([^`\n]+)`").expect("Invalid code span regex"));

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    let code = escape_text(caps.get(1).map_or("", |m| m.as_str()));
    format!("<code>{}</code>", ctx.mark(&code))
}
