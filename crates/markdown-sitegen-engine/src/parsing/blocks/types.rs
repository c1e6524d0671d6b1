use crate::parsing::inline::InlineSpan;

/// The structural kind of a block, decided from its raw text alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    /// Default when no other block opener matches.
    Paragraph,
    /// ATX heading, `level` in `1..=6`.
    Heading { level: u8 },
    /// Fenced code block.
    Code,
    /// Every line starts with `>`.
    Quote,
    /// Every line starts with `- `.
    UnorderedList,
    /// Lines numbered `1. `, `2. `, ... in order.
    OrderedList,
}

/// The inline content of one list item.
pub type ListItem = Vec<InlineSpan>;

/// A classified block with its content extracted.
///
/// Blocks are transient: they are built per conversion and consumed when
/// folded into the element tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Paragraph(Vec<InlineSpan>),
    Heading { level: u8, content: Vec<InlineSpan> },
    /// Literal code, never inline-scanned.
    Code(String),
    /// Quote text with the leading marker removed, never inline-scanned.
    Quote(String),
    UnorderedList(Vec<ListItem>),
    OrderedList(Vec<ListItem>),
}

impl Block {
    pub fn kind(&self) -> BlockKind {
        match self {
            Block::Paragraph(_) => BlockKind::Paragraph,
            Block::Heading { level, .. } => BlockKind::Heading { level: *level },
            Block::Code(_) => BlockKind::Code,
            Block::Quote(_) => BlockKind::Quote,
            Block::UnorderedList(_) => BlockKind::UnorderedList,
            Block::OrderedList(_) => BlockKind::OrderedList,
        }
    }
}
