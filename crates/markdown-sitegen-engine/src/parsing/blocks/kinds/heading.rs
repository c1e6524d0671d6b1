use std::sync::OnceLock;

use regex::Regex;

/// ATX heading: 1-6 `#` characters, a space, then the heading text.
pub struct Heading;

impl Heading {
    pub const MAX_LEVEL: usize = 6;

    fn opener() -> &'static Regex {
        static OPENER: OnceLock<Regex> = OnceLock::new();
        OPENER.get_or_init(|| Regex::new(r"^(#{1,6}) .").expect("Invalid heading regex"))
    }

    /// Splits a heading block into its level and trimmed text.
    ///
    /// Returns `None` when the block doesn't start with a heading marker.
    pub fn split(block: &str) -> Option<(u8, &str)> {
        let caps = Self::opener().captures(block)?;
        let hashes = caps.get(1)?.as_str().len();
        let level = u8::try_from(hashes).ok()?;
        // Skip the hashes and exactly one space.
        Some((level, block[hashes + 1..].trim()))
    }
}
