use crate::parsing::{error::ParseError, inline::scan_inline};

use super::{
    classify::classify_block,
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, Paragraph, UnorderedList},
    types::{Block, BlockKind, ListItem},
};

/// Classifies a trimmed block string and extracts its content.
///
/// Marker stripping re-checks each marker even though classification has
/// already accepted the block, since the two passes are independent.
pub fn build_block(raw: &str) -> Result<Block, ParseError> {
    let kind = classify_block(raw);
    log::debug!("classified block as {kind:?}");

    match kind {
        BlockKind::Paragraph => Ok(Block::Paragraph(scan_inline(&Paragraph::join_lines(raw))?)),
        BlockKind::Heading { .. } => build_heading(raw),
        BlockKind::Code => Ok(Block::Code(CodeFence::body(raw))),
        BlockKind::Quote => Ok(Block::Quote(BlockQuote::strip(raw).to_string())),
        BlockKind::UnorderedList => Ok(Block::UnorderedList(build_items(raw, |_, line| {
            UnorderedList::strip_item(line).ok_or_else(|| ParseError::InvalidListItem {
                line: line.to_string(),
                marker: UnorderedList::MARKER.to_string(),
            })
        })?)),
        BlockKind::OrderedList => Ok(Block::OrderedList(build_items(raw, |i, line| {
            OrderedList::strip_item(line).ok_or_else(|| ParseError::InvalidListItem {
                line: line.to_string(),
                marker: OrderedList::marker(i),
            })
        })?)),
    }
}

fn build_heading(raw: &str) -> Result<Block, ParseError> {
    let (level, text) = Heading::split(raw).ok_or_else(|| ParseError::InvalidHeadingSyntax {
        block: raw.to_string(),
    })?;
    Ok(Block::Heading {
        level,
        content: scan_inline(text)?,
    })
}

fn build_items<'a, F>(raw: &'a str, strip: F) -> Result<Vec<ListItem>, ParseError>
where
    F: Fn(usize, &'a str) -> Result<&'a str, ParseError>,
{
    raw.split('\n')
        .enumerate()
        .map(|(i, line)| scan_inline(strip(i, line)?))
        .collect()
}
