/// Fenced code block: first and last lines start with the fence marker.
pub struct CodeFence;

impl CodeFence {
    pub const FENCE: &'static str = "```";

    /// Whether `lines` form a fenced block: more than one line, opened and
    /// closed by a fence.
    pub fn matches(lines: &[&str]) -> bool {
        match lines {
            [first, .., last] => first.starts_with(Self::FENCE) && last.starts_with(Self::FENCE),
            _ => false,
        }
    }

    /// The lines strictly between the opening and closing fences, joined
    /// with newlines. Delimiters inside are left alone.
    pub fn body(block: &str) -> String {
        let lines: Vec<&str> = block.split('\n').collect();
        match lines.as_slice() {
            [_, inner @ .., _] => inner.join("\n"),
            _ => String::new(),
        }
    }
}
