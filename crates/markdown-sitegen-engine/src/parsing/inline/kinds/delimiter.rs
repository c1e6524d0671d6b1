use crate::parsing::inline::types::{InlineKind, InlineSpan};

/// A symmetric inline delimiter: the same marker opens and closes the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiter {
    pub marker: &'static str,
    pub kind: InlineKind,
}

impl Delimiter {
    pub const BOLD: Delimiter = Delimiter {
        marker: "**",
        kind: InlineKind::Bold,
    };
    pub const ITALIC: Delimiter = Delimiter {
        marker: "_",
        kind: InlineKind::Italic,
    };
    /// Code spans are raw: their content is emitted as-is.
    pub const CODE: Delimiter = Delimiter {
        marker: "`",
        kind: InlineKind::Code,
    };

    /// Wraps the text found between a pair of markers.
    pub fn wrap(&self, text: &str) -> InlineSpan {
        let text = text.to_string();
        match self.kind {
            InlineKind::Bold => InlineSpan::Bold(text),
            InlineKind::Italic => InlineSpan::Italic(text),
            InlineKind::Code => InlineSpan::Code(text),
            InlineKind::Text | InlineKind::Link | InlineKind::Image => InlineSpan::Text(text),
        }
    }
}
