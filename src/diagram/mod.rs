//! Tree diagram parsing.
//!
//! Turns the text drawn by `tree`-like tools into an ordered sequence of
//! `(depth, name)` entries. Depth is inferred from the `│` continuation
//! glyphs in front of each branch marker, so the sequence is a pre-order
//! walk of the drawn tree.

mod parser;
mod tree_entry;

pub use parser::{Diagram, Entries, parse_line};
pub use tree_entry::TreeEntry;
