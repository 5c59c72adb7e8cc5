//! Markdown to Atlassian Document Format converter.
//!
//! This crate turns the lightweight markdown people type into Jira issue
//! descriptions and comments into a typed [`Document`] tree, and serializes
//! that tree as Atlassian Document Format (ADF) JSON.
//!
//! # Architecture
//!
//! Conversion is a pure function of the input text:
//! - The block scanner walks the input line by line and recognizes tables,
//!   fenced code, headings, bullet and ordered lists, and paragraphs.
//! - The inline tokenizer splits heading, paragraph, list item and table cell
//!   text into runs carrying at most one [`Mark`].
//!
//! Malformed markup never fails the conversion; it degrades to literal text.
//!
//! # Example
//!
//! ```
//! use md2adf_converter::{Block, convert};
//!
//! let document = convert("# Release notes\n\n- **fixed** login");
//! assert_eq!(document.blocks.len(), 2);
//! assert!(matches!(document.blocks[0], Block::Heading { level: 1, .. }));
//!
//! let adf = document.to_adf();
//! let json = serde_json::to_string(&adf).unwrap();
//! assert!(json.starts_with(r#"{"type":"doc","version":1"#));
//! ```

mod adf;
mod block;
mod document;
mod inline;

pub use adf::{AdfDocument, AdfMark, AdfNode};
pub use block::convert;
pub use document::{
    Block, CellKind, Document, Inline, ListItem, Mark, Record, Table, TableCell, TableRow,
    plain_text,
};
pub use inline::parse_inline;
