use super::{
    kinds::{BlockQuote, CodeFence, Heading, OrderedList, UnorderedList},
    types::BlockKind,
};

/// Classifies a trimmed block string.
///
/// Openers are tried in a fixed priority order and the first match wins:
/// Heading, Code, Quote, UnorderedList, OrderedList, then Paragraph. A
/// block that opens like a quote or list but breaks the pattern on a later
/// line falls back to Paragraph.
pub fn classify_block(block: &str) -> BlockKind {
    let lines: Vec<&str> = block.split('\n').collect();

    if let Some((level, _)) = Heading::split(block) {
        return BlockKind::Heading { level };
    }
    if CodeFence::matches(&lines) {
        return BlockKind::Code;
    }
    if block.starts_with(BlockQuote::PREFIX) {
        return demote_unless(BlockQuote::matches(&lines), BlockKind::Quote);
    }
    if block.starts_with(UnorderedList::MARKER) {
        return demote_unless(UnorderedList::matches(&lines), BlockKind::UnorderedList);
    }
    if block.starts_with(&OrderedList::marker(0)) {
        return demote_unless(OrderedList::matches(&lines), BlockKind::OrderedList);
    }
    BlockKind::Paragraph
}

fn demote_unless(uniform: bool, kind: BlockKind) -> BlockKind {
    if uniform { kind } else { BlockKind::Paragraph }
}
