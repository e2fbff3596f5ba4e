use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    marked::{RenderContext, blocks::trailing},
    todo::TodoStatus,
};

/// Checkable to-do item, open (`- [ ] `) or done (`- [x] `).
///
/// Rendered with a checkbox span whose `data-value` carries the status so
/// the consumer can toggle the item in the raw text.
pub struct TodoItem;

impl TodoItem {
    pub const TODO_MARKER: &'static str = "- [ ] ";
    pub const DONE_MARKER: &'static str = "- [x] ";
}

pub static TODO_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[ \] ([^\n]+)(\n?)").expect("Invalid todo regex"));

pub static DONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^- \[[xX]\] ([^\n]+)(\n?)").expect("Invalid done regex"));

pub fn render_todo(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    render_item(caps, ctx, TodoStatus::Todo)
}

pub fn render_done(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    render_item(caps, ctx, TodoStatus::Done)
}

fn render_item(caps: &Captures<'_>, ctx: &RenderContext<'_>, status: TodoStatus) -> String {
    format!(
        "<p><span class=\"todo-block {}\" data-value=\"{}\"></span>{}</p>{}",
        status.class(),
        status.as_str(),
        ctx.render_capture(caps, 1),
        trailing(caps, 2)
    )
}
