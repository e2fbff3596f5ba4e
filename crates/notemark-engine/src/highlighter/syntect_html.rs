use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use super::{HighlightError, Highlighter};

/// Class-based HTML highlighting backed by syntect's default grammars.
///
/// Emits `<span class="hl-...">` markup so the stylesheet decides colours;
/// no theme is loaded. `SyntaxSet` is expensive to build, so share one
/// instance (see [`default_highlighter`](super::default_highlighter)).
pub struct SyntectHighlighter {
    syntax_set: SyntaxSet,
}

impl SyntectHighlighter {
    /// Prefix for every generated CSS class.
    pub const CLASS_STYLE: ClassStyle = ClassStyle::SpacedPrefixed { prefix: "hl-" };

    /// Language names that select the plain text grammar directly.
    pub const PLAIN_TOKENS: [&'static str; 3] = ["plaintext", "text", "txt"];

    pub fn new() -> Self {
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
        }
    }

    fn syntax_for(
        &self,
        code: &str,
        language: Option<&str>,
    ) -> Result<&SyntaxReference, HighlightError> {
        let plain = self.syntax_set.find_syntax_plain_text();
        match language {
            Some(lang) if Self::PLAIN_TOKENS.contains(&lang.to_ascii_lowercase().as_str()) => {
                Ok(plain)
            }
            Some(lang) => self
                .syntax_set
                .find_syntax_by_token(lang)
                .ok_or_else(|| HighlightError::UnsupportedLanguage(lang.to_string())),
            None => Ok(code
                .lines()
                .next()
                .and_then(|first| self.syntax_set.find_syntax_by_first_line(first))
                .unwrap_or(plain)),
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Result<String, HighlightError> {
        let syntax = self.syntax_for(code, language)?;
        let mut generator =
            ClassedHTMLGenerator::new_with_class_style(syntax, &self.syntax_set, Self::CLASS_STYLE);
        for line in LinesWithEndings::from(code) {
            generator.parse_html_for_line_which_includes_newline(line)?;
        }
        Ok(generator.finalize())
    }
}
