use crate::parsing::inline::types::{InlineKind, InlineSpan};

/// `prefix[label](url)` syntax shared by links and images.
///
/// The label may not contain `]` and the URL may not contain `)`; nested
/// brackets are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub prefix: &'static str,
    pub kind: InlineKind,
}

impl Bracket {
    pub const IMAGE: Bracket = Bracket {
        prefix: "![",
        kind: InlineKind::Image,
    };
    pub const LINK: Bracket = Bracket {
        prefix: "[",
        kind: InlineKind::Link,
    };

    pub const LABEL_CLOSE: &'static [u8] = b"](";
    pub const LABEL_END: &'static [u8] = b"]";
    pub const URL_CLOSE: &'static [u8] = b")";

    pub fn wrap(&self, label: &str, url: &str) -> InlineSpan {
        match self.kind {
            InlineKind::Image => InlineSpan::Image {
                alt: label.to_string(),
                url: url.to_string(),
            },
            _ => InlineSpan::Link {
                text: label.to_string(),
                url: url.to_string(),
            },
        }
    }
}
