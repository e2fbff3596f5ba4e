use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::{
    highlighter::Highlighter,
    marked::{
        RenderContext,
        blocks::trailing,
        escape::{escape_attr, escape_text},
    },
};

/// Fenced code block: ```` ```lang ```` ... ```` ``` ````.
///
/// A raw zone. The body goes to the highlighter and is never parsed as block
/// or inline content. An unterminated fence does not match, so its lines
/// fall through to the other block matchers.
pub struct CodeBlock;

impl CodeBlock {
    pub const FENCE: &'static str = "```";
    /// Language class used when the opening fence names none.
    pub const DEFAULT_LANGUAGE: &'static str = "plaintext";
}

pub static PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^```(\S*?)\s(.*?)```(\n?)").expect("Invalid code block regex")
});

pub fn render(caps: &Captures<'_>, ctx: &RenderContext<'_>) -> String {
    let language = caps
        .get(1)
        .map(|m| m.as_str())
        .filter(|lang| !lang.is_empty())
        .unwrap_or(CodeBlock::DEFAULT_LANGUAGE);
    let code = caps.get(2).map_or("", |m| m.as_str());

    let highlighted = highlight_code(ctx.highlighter, code, language);
    format!(
        "<pre><code class=\"language-{}\">{}</code></pre>{}",
        escape_attr(language),
        ctx.mark(&highlighted),
        trailing(caps, 3)
    )
}

/// Highlights `code` as `language`, degrading to detection, then to escaping.
///
/// Never fails: a highlighter error only costs the requested styling.
pub fn highlight_code(highlighter: &dyn Highlighter, code: &str, language: &str) -> String {
    match highlighter.highlight(code, Some(language)) {
        Ok(markup) if usable(&markup, code) => return markup,
        Ok(_) => log::debug!("No markup for `{language}` code, detecting language"),
        Err(err) => log::debug!("{err}, detecting language"),
    }

    match highlighter.highlight(code, None) {
        Ok(markup) if usable(&markup, code) => markup,
        Ok(_) => {
            log::debug!("No markup from language detection, rendering code as text");
            escape_text(code).into_owned()
        }
        Err(err) => {
            log::warn!("Language detection failed, rendering code as text: {err}");
            escape_text(code).into_owned()
        }
    }
}

fn usable(markup: &str, code: &str) -> bool {
    code.is_empty() || !markup.is_empty()
}
