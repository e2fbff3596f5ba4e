use std::borrow::Cow;

/// Escapes text content (`&`, `<`, `>`).
pub fn escape_text(raw: &str) -> Cow<'_, str> {
    html_escape::encode_text(raw)
}

/// Escapes a value placed inside a double-quoted attribute.
pub fn escape_attr(raw: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(raw)
}
