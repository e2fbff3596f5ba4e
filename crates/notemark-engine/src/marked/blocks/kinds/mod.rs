//! # Block Kinds
//!
//! One module per block construct. Each owns its pattern, its delimiter
//! constants and its render function; the dispatch code in the parent module
//! only decides the order.

pub mod code_block;
pub mod ordered_item;
pub mod paragraph;
pub mod todo_item;
pub mod unordered_item;

pub use code_block::CodeBlock;
pub use todo_item::TodoItem;
pub use unordered_item::UnorderedItem;
