use std::ops::RangeInclusive;

use ropey::Rope;

/// A flat text buffer backed by a Rope.
///
/// All positions are `char` indices. Line structure is not tracked; a
/// newline is just another character.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
}

impl Buffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer holding `text`.
    #[cfg(test)]
    pub fn with_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Number of chars in the buffer.
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    /// Insert `text` at `char_idx` and return the number of chars inserted.
    ///
    /// `char_idx` is clamped to the end of the buffer.
    pub fn insert(&mut self, char_idx: usize, text: &str) -> usize {
        if text.is_empty() {
            return 0;
        }
        let at = char_idx.min(self.rope.len_chars());
        self.rope.insert(at, text);
        text.chars().count()
    }

    /// Remove an inclusive char range. Out-of-bounds ranges are ignored.
    pub fn remove(&mut self, range: RangeInclusive<usize>) {
        let (start, end) = range.into_inner();
        if start > end || end >= self.rope.len_chars() {
            return;
        }
        self.rope.remove(start..end + 1);
    }

    /// Text of an inclusive char range, or `None` if it is out of bounds.
    pub fn slice(&self, range: RangeInclusive<usize>) -> Option<String> {
        let (start, end) = range.into_inner();
        if start > end || end >= self.rope.len_chars() {
            return None;
        }
        Some(self.rope.slice(start..end + 1).chunks().collect())
    }

    /// Whole buffer contents.
    pub fn text(&self) -> String {
        self.rope.chunks().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_into_empty_buffer() {
        let mut buf = Buffer::new();
        assert_eq!(buf.insert(0, "Hello"), 5);
        assert_eq!(buf.text(), "Hello");
        assert_eq!(buf.len_chars(), 5);
    }

    #[test]
    fn insert_in_middle() {
        let mut buf = Buffer::with_text("Helld");
        buf.insert(3, "lo Wor");
        assert_eq!(buf.text(), "Hello World");
    }

    #[test]
    fn insert_past_end_appends() {
        let mut buf = Buffer::with_text("ab");
        buf.insert(99, "c");
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn insert_counts_chars_not_bytes() {
        let mut buf = Buffer::new();
        assert_eq!(buf.insert(0, "héllo"), 5);
        assert_eq!(buf.len_chars(), 5);
    }

    #[test]
    fn remove_is_inclusive() {
        let mut buf = Buffer::with_text("Hello World");
        buf.remove(0..=5);
        assert_eq!(buf.text(), "World");
    }

    #[test]
    fn remove_out_of_bounds_is_ignored() {
        let mut buf = Buffer::with_text("abc");
        buf.remove(1..=3);
        buf.remove(2..=1);
        assert_eq!(buf.text(), "abc");
    }

    #[test]
    fn slice_bounds() {
        let buf = Buffer::with_text("Hello World");
        assert_eq!(buf.slice(6..=10).as_deref(), Some("World"));
        assert_eq!(buf.slice(6..=11), None);
        assert_eq!(buf.slice(3..=2), None);
        assert!(Buffer::new().slice(0..=0).is_none());
    }
}
