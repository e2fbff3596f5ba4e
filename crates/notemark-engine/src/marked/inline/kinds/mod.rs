//! # Inline Kinds
//!
//! Inline constructs, one module each, owning their delimiters and patterns.
//!
//! ## Types
//!
//! - **`code_span`**: `` `code` ``, a raw zone: escaped, never parsed
//! - **`image`**: `![alt](url)`
//! - **`link`**: `[label](url)`, label parsed inline
//! - **`plain_link`**: bare `http://` and `https://` URLs
//! - **`emphasis`**: `***both***`, `**bold**`, `*italic*`, `~~struck~~`
//! - **`tag`**: `#name`, only for known tag names
//! - **`plain_text`**: everything else (fallback)

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;
pub mod plain_link;
pub mod plain_text;
pub mod tag;

pub use code_span::CodeSpan;
pub use plain_text::PlainText;
pub use tag::Tag;
