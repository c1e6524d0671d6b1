/// A styled or plain run of text within a block.
///
/// Only `Link` and `Image` carry a URL, so a span can never hold a URL it
/// has no use for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Text outside any delimiter.
    Text(String),
    /// `**bold**`
    Bold(String),
    /// `_italic_`
    Italic(String),
    /// `` `code` `` - never scanned for other delimiters.
    Code(String),
    /// `[text](url)`
    Link { text: String, url: String },
    /// `![alt](url)`
    Image { alt: String, url: String },
}

/// Tag-only view of an [`InlineSpan`], used to name pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineKind {
    Text,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl InlineSpan {
    pub fn kind(&self) -> InlineKind {
        match self {
            InlineSpan::Text(_) => InlineKind::Text,
            InlineSpan::Bold(_) => InlineKind::Bold,
            InlineSpan::Italic(_) => InlineKind::Italic,
            InlineSpan::Code(_) => InlineKind::Code,
            InlineSpan::Link { .. } => InlineKind::Link,
            InlineSpan::Image { .. } => InlineKind::Image,
        }
    }

    /// The display text of the span (the alt text for images).
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::Text(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::Code(t) => t,
            InlineSpan::Link { text, .. } => text,
            InlineSpan::Image { alt, .. } => alt,
        }
    }

    /// The target URL, present only for links and images.
    pub fn url(&self) -> Option<&str> {
        match self {
            InlineSpan::Link { url, .. } | InlineSpan::Image { url, .. } => Some(url),
            _ => None,
        }
    }
}
