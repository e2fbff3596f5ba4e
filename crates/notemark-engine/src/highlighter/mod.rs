//! # Syntax Highlighting
//!
//! The rendering engine treats syntax highlighting as a black box behind the
//! [`Highlighter`] trait. Code block renderers only ever see markup strings;
//! `syntect` types stay inside [`SyntectHighlighter`].
//!
//! ## Failure Model
//!
//! `highlight` with a language may fail (unknown language, grammar error).
//! `highlight` without a language auto-detects and should only fail on a
//! grammar error. Callers are expected to degrade, never to propagate.

mod syntect_html;

use std::sync::LazyLock;

use crate::marked::escape::escape_text;

pub use syntect_html::SyntectHighlighter;

#[derive(Debug, thiserror::Error)]
pub enum HighlightError {
    #[error("unsupported language `{0}`")]
    UnsupportedLanguage(String),
    #[error("failed to highlight code: {0}")]
    Syntax(#[from] syntect::Error),
}

/// Turns a code fragment into highlighted, HTML-escaped markup.
pub trait Highlighter: Send + Sync {
    /// Highlights `code` as `language`, or detects the language when `None`.
    ///
    /// The returned markup must already be escaped: it is embedded verbatim.
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String, HighlightError>;
}

/// A highlighter that only escapes. Accepts every language.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainHighlighter;

impl Highlighter for PlainHighlighter {
    fn highlight(&self, code: &str, _language: Option<&str>) -> Result<String, HighlightError> {
        Ok(escape_text(code).into_owned())
    }
}

static DEFAULT_HIGHLIGHTER: LazyLock<SyntectHighlighter> = LazyLock::new(SyntectHighlighter::new);

/// The process-wide syntect highlighter, loaded on first use.
pub fn default_highlighter() -> &'static SyntectHighlighter {
    &DEFAULT_HIGHLIGHTER
}
