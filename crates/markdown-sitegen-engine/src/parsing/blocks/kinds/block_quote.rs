/// Blockquote: every line starts with `>`.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::PREFIX))
    }

    /// Strips the single leading `>` of the block and trims the rest.
    ///
    /// Markers on later lines are kept as written.
    pub fn strip(block: &str) -> &str {
        block.strip_prefix(Self::PREFIX).unwrap_or(block).trim()
    }
}
