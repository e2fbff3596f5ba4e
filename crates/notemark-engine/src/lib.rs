pub mod highlighter;
pub mod io;
pub mod marked;
pub mod tags;
pub mod todo;

// Re-export key types for easier usage
pub use highlighter::{HighlightError, Highlighter, PlainHighlighter, SyntectHighlighter};
pub use io::{IoError, NoteStore};
pub use marked::{
    Fragment, HighlightTerm, Matcher, MatcherList, MatcherListError, RenderContext, Renderer,
    block_matchers, inline_matchers, render, render_with,
};
pub use tags::{collect_tags, extract_tags};
pub use todo::{TodoItem, TodoStatus};
