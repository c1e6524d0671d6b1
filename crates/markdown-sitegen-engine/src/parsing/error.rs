/// Failures while turning Markdown text into blocks and inline spans.
///
/// Any of these aborts conversion of the whole document.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Also raised when a marker pair encloses a link or image: bracket
    /// syntax is extracted first, leaving each marker in a separate text run.
    #[error(
        "Malformed inline syntax: unmatched or empty '{delimiter}' in text: '{text}' \
         (markers cannot wrap links, images or other styled spans)"
    )]
    MalformedInlineSyntax {
        delimiter: &'static str,
        text: String,
    },
    #[error("Invalid list item '{line}': expected marker '{marker}'")]
    InvalidListItem { line: String, marker: String },
    #[error("Invalid heading block, must start with 1-6 '#' characters followed by a space: '{block}'")]
    InvalidHeadingSyntax { block: String },
}
