/// A cursor for byte-wise inline scanning over a single text span.
///
/// Delimiters are all ASCII, so byte positions found by the cursor are
/// always valid `str` slice boundaries.
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being scanned.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns the current byte position.
    pub fn pos(&self) -> usize {
        self.i
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// Checks if the remaining input starts with the given byte pattern.
    pub fn starts_with(&self, pat: &[u8]) -> bool {
        self.s
            .as_bytes()
            .get(self.i..)
            .is_some_and(|rest| rest.starts_with(pat))
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances until the remaining input starts with `pat`, returning the
    /// position of the match. Leaves the cursor at end of input and returns
    /// `None` when `pat` does not occur.
    pub fn seek(&mut self, pat: &[u8]) -> Option<usize> {
        while !self.eof() {
            if self.starts_with(pat) {
                return Some(self.i);
            }
            self.bump();
        }
        None
    }

    /// Returns the text between two byte positions.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        &self.s[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_basics() {
        let mut cur = Cursor::new("hello");
        assert_eq!(cur.pos(), 0);
        assert!(!cur.eof());
        assert_eq!(cur.peek(), Some(b'h'));
        assert_eq!(cur.bump(), Some(b'h'));
        assert_eq!(cur.pos(), 1);
    }

    #[test]
    fn cursor_starts_with() {
        let cur = Cursor::new("**bold**");
        assert!(cur.starts_with(b"**"));
        assert!(!cur.starts_with(b"_"));
    }

    #[test]
    fn empty_string_input() {
        let cur = Cursor::new("");
        assert!(cur.eof());
        assert_eq!(cur.peek(), None);
        assert_eq!(cur.pos(), 0);
    }

    #[test]
    fn starts_with_past_end() {
        let mut cur = Cursor::new("ab");
        cur.bump_n(10);
        assert!(cur.eof());
        assert!(!cur.starts_with(b"a"));
    }

    #[test]
    fn seek_finds_pattern() {
        let mut cur = Cursor::new("plain **bold**");
        assert_eq!(cur.seek(b"**"), Some(6));
        assert_eq!(cur.pos(), 6);
    }

    #[test]
    fn seek_missing_pattern_runs_to_end() {
        let mut cur = Cursor::new("no markers");
        assert_eq!(cur.seek(b"**"), None);
        assert!(cur.eof());
    }

    #[test]
    fn seek_handles_multibyte_text() {
        let mut cur = Cursor::new("héllo _wörld_");
        let start = cur.seek(b"_").unwrap();
        assert_eq!(cur.slice(0, start), "héllo ");
    }
}
