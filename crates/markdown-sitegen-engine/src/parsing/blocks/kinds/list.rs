use std::sync::OnceLock;

use regex::Regex;

/// Unordered list: every line starts with `- `.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty() && lines.iter().all(|line| line.starts_with(Self::MARKER))
    }

    /// Removes the `- ` marker from an item line.
    pub fn strip_item(line: &str) -> Option<&str> {
        line.strip_prefix(Self::MARKER)
    }
}

/// Ordered list: line `i` (0-based) starts with `"{i+1}. "`.
pub struct OrderedList;

impl OrderedList {
    /// Marker expected on the item at 0-based `index`.
    pub fn marker(index: usize) -> String {
        format!("{}. ", index + 1)
    }

    pub fn matches(lines: &[&str]) -> bool {
        !lines.is_empty()
            && lines
                .iter()
                .enumerate()
                .all(|(i, line)| line.starts_with(&Self::marker(i)))
    }

    fn item_prefix() -> &'static Regex {
        static ITEM_PREFIX: OnceLock<Regex> = OnceLock::new();
        ITEM_PREFIX.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid list item regex"))
    }

    /// Removes any numeric `N. ` marker from an item line.
    pub fn strip_item(line: &str) -> Option<&str> {
        let prefix = Self::item_prefix().find(line)?;
        Some(&line[prefix.end()..])
    }
}
