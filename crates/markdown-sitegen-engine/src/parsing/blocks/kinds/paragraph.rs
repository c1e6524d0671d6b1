/// Paragraph block type.
///
/// Paragraphs have no delimiters - they are the default block kind when no
/// other opener matches. Their lines form one logical line.
pub struct Paragraph;

impl Paragraph {
    pub fn join_lines(block: &str) -> String {
        block.replace('\n', " ")
    }
}
