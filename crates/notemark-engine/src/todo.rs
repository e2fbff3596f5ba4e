//! To-do items in raw note text.
//!
//! Rendered to-do checkboxes carry `data-value="TODO"` or `"DONE"`. A
//! consumer that knows which checkbox was clicked (its status and its index
//! among checkboxes with that status) flips it in the raw text with
//! [`toggle`]. Items are found exactly where the block matchers find them, so
//! indexes line up with the rendered markup.

use std::{fmt, str::FromStr};

use crate::marked::blocks::{kinds::todo_item, segments};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TodoStatus {
    Todo,
    Done,
}

impl TodoStatus {
    /// The `data-value` written into rendered markup.
    pub fn as_str(self) -> &'static str {
        match self {
            TodoStatus::Todo => "TODO",
            TodoStatus::Done => "DONE",
        }
    }

    /// CSS class added next to `todo-block`.
    pub fn class(self) -> &'static str {
        match self {
            TodoStatus::Todo => "todo",
            TodoStatus::Done => "done",
        }
    }

    /// The raw-text marker that produces this status.
    pub fn marker(self) -> &'static str {
        match self {
            TodoStatus::Todo => todo_item::TodoItem::TODO_MARKER,
            TodoStatus::Done => todo_item::TodoItem::DONE_MARKER,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            TodoStatus::Todo => TodoStatus::Done,
            TodoStatus::Done => TodoStatus::Todo,
        }
    }
}

impl fmt::Display for TodoStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown to-do status `{0}`, expected TODO or DONE")]
pub struct ParseTodoStatusError(String);

impl FromStr for TodoStatus {
    type Err = ParseTodoStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "TODO" => Ok(TodoStatus::Todo),
            "DONE" => Ok(TodoStatus::Done),
            _ => Err(ParseTodoStatusError(s.to_string())),
        }
    }
}

/// A to-do line found in note text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoItem<'a> {
    pub status: TodoStatus,
    /// Raw content after the marker, without the newline.
    pub content: &'a str,
    /// Byte offset of the marker in the note.
    pub offset: usize,
}

/// Lists every to-do item in rendering order. Fenced code is skipped.
pub fn items(text: &str) -> Vec<TodoItem<'_>> {
    segments(text)
        .filter(|segment| !segment.is_code)
        .filter_map(|segment| {
            let (status, caps) = match todo_item::TODO_PATTERN.captures(segment.text) {
                Some(caps) => (TodoStatus::Todo, caps),
                None => (TodoStatus::Done, todo_item::DONE_PATTERN.captures(segment.text)?),
            };
            Some(TodoItem {
                status,
                content: caps.get(1)?.as_str(),
                offset: segment.offset,
            })
        })
        .collect()
}

/// Flips the `index`-th item with `status`, counting from zero.
///
/// Returns `None` when there is no such item.
pub fn toggle(text: &str, status: TodoStatus, index: usize) -> Option<String> {
    let item = items(text)
        .into_iter()
        .filter(|item| item.status == status)
        .nth(index)?;

    let marker = status.toggled().marker();
    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..item.offset]);
    out.push_str(marker);
    out.push_str(&text[item.offset + marker.len()..]);
    log::debug!("Toggled {status} item {index} at byte {}", item.offset);
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const NOTE: &str = "shopping\n- [ ] milk\n- [x] bread\n- [ ] eggs\n```\n- [ ] in code\n```\n- plain bullet\n";

    #[test]
    fn lists_items_in_order() {
        let found: Vec<_> = items(NOTE).iter().map(|i| (i.status, i.content)).collect();
        assert_eq!(
            found,
            vec![
                (TodoStatus::Todo, "milk"),
                (TodoStatus::Done, "bread"),
                (TodoStatus::Todo, "eggs"),
            ]
        );
    }

    #[test]
    fn toggle_counts_per_status() {
        let out = toggle(NOTE, TodoStatus::Todo, 1).unwrap();
        assert!(out.contains("- [ ] milk\n"));
        assert!(out.contains("- [x] eggs\n"));
        assert!(out.contains("- [x] bread\n"));
    }

    #[test]
    fn toggle_done_reopens() {
        let out = toggle(NOTE, TodoStatus::Done, 0).unwrap();
        assert!(out.contains("- [ ] bread\n"));
        assert_eq!(out.len(), NOTE.len());
    }

    #[test]
    fn items_in_code_blocks_are_ignored() {
        assert!(toggle(NOTE, TodoStatus::Todo, 2).is_none());
    }

    #[test]
    fn capital_x_reopens_with_lowercase_marker() {
        assert_eq!(toggle("- [X] a", TodoStatus::Done, 0).unwrap(), "- [ ] a");
    }

    #[test]
    fn toggle_twice_round_trips() {
        let once = toggle(NOTE, TodoStatus::Todo, 0).unwrap();
        let twice = toggle(&once, TodoStatus::Done, 0).unwrap();
        assert_eq!(twice, NOTE);
    }

    #[rstest]
    #[case("TODO", TodoStatus::Todo)]
    #[case("done", TodoStatus::Done)]
    fn parses_status(#[case] input: &str, #[case] expected: TodoStatus) {
        assert_eq!(input.parse::<TodoStatus>().unwrap(), expected);
    }

    #[test]
    fn rejects_unknown_status() {
        let err = "maybe".parse::<TodoStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown to-do status `maybe`, expected TODO or DONE");
    }

    #[test]
    fn status_display_matches_data_value() {
        assert_eq!(TodoStatus::Done.to_string(), "DONE");
        assert_eq!(TodoStatus::Todo.toggled(), TodoStatus::Done);
    }
}
