pub mod blocks;
pub mod error;
pub mod inline;

pub use error::ParseError;

use blocks::{Block, build_block, markdown_to_blocks};

/// Segments a document and builds every block, in source order.
///
/// The first failing block aborts the whole document.
pub fn parse_document(markdown: &str) -> Result<Vec<Block>, ParseError> {
    markdown_to_blocks(markdown)
        .into_iter()
        .map(build_block)
        .collect()
}
