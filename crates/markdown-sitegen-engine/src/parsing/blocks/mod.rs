//! # Block Parsing
//!
//! Two-phase block parsing over blank-line separated segments.
//!
//! ## Parsing Phases
//!
//! 1. **Segmentation** (`segment`): the document is split on blank lines into
//!    trimmed, non-empty block strings
//!
//! 2. **Classification and Extraction** (`classify`, `builder`): each block is
//!    classified into a `BlockKind`, then its markers are stripped and its
//!    text inline-scanned into a `Block`
//!
//! ## Modules
//!
//! - **`types`**: Core types (`Block`, `BlockKind`)
//! - **`kinds`**: Block-specific types with owned markers (Heading, CodeFence,
//!   BlockQuote, UnorderedList, OrderedList, Paragraph)
//! - **`segment`**: `markdown_to_blocks` splitter
//! - **`classify`**: `classify_block` priority dispatch
//! - **`builder`**: `build_block` content extraction
//!
//! ## Key Invariants
//!
//! - Classification priority is Heading > Code > Quote > UnorderedList >
//!   OrderedList > Paragraph
//! - Code and quote content is never inline-scanned

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod segment;
pub mod types;

pub use builder::build_block;
pub use classify::classify_block;
pub use segment::markdown_to_blocks;
pub use types::{Block, BlockKind, ListItem};
