//! # Inline Parsing
//!
//! Cursor-based inline scanning as a fixed pipeline of stages.
//!
//! ## Architecture
//!
//! Inline scanning runs over the text of inline-eligible blocks (paragraphs,
//! headings, list items). Scanning starts from a single text span; each
//! stage splits the remaining text spans around its own syntax and leaves
//! already-styled spans untouched, so nothing is ever parsed twice.
//!
//! ## Modules
//!
//! - **`types`**: `InlineSpan` enum (Text, Bold, Italic, Code, Link, Image)
//! - **`kinds`**: `Delimiter` and `Bracket`, which own the syntax markers
//! - **`cursor`**: `Cursor` for byte-wise scanning with position tracking
//! - **`parser`**: `scan_inline()` entry point and the stage table
//!
//! ## Stage Order
//!
//! Image, Link, Bold, Italic, Code. The order is part of the grammar: image
//! syntax contains link syntax, and URLs must be extracted before `_` or
//! `**` inside them can be taken for delimiters.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod types;

pub use parser::scan_inline;
pub use types::{InlineKind, InlineSpan};
