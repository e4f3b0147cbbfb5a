//! Shared code buffer
//!
//! A single-slot mailbox holding the one in-flight playground source text.
//! Lesson pages write into it ("open this snippet in the playground"), the
//! editor session reads it back on every mount. Last writer wins; there is
//! no history and no queue, since only one user-initiated navigation can be
//! in flight at a time on the single-threaded update loop.

use ropey::Rope;

/// The process-wide code slot, owned by [`crate::model::AppContext`]
#[derive(Debug, Clone, Default)]
pub struct CodeBuffer {
    text: Rope,
}

impl CodeBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the buffer contents
    pub fn set(&mut self, text: &str) {
        self.text = Rope::from_str(text);
    }

    /// Current contents (empty string initially)
    pub fn get(&self) -> String {
        self.text.to_string()
    }

    /// Contents as a rope, for seeding an editor session without a copy
    pub fn rope(&self) -> &Rope {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.len_chars() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let buffer = CodeBuffer::new();
        assert!(buffer.is_empty());
        assert_eq!(buffer.get(), "");
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut buffer = CodeBuffer::new();
        buffer.set("console.log(1)");
        assert_eq!(buffer.get(), "console.log(1)");
    }

    #[test]
    fn test_round_trip_unicode_and_control_chars() {
        let mut buffer = CodeBuffer::new();
        let text = "let π = 3.14;\n\t// ünïcode ✓\r\n\u{0}";
        buffer.set(text);
        assert_eq!(buffer.get(), text);
    }

    #[test]
    fn test_last_writer_wins() {
        let mut buffer = CodeBuffer::new();
        buffer.set("first");
        buffer.set("second");
        assert_eq!(buffer.get(), "second");
    }

    #[test]
    fn test_set_empty_string() {
        let mut buffer = CodeBuffer::new();
        buffer.set("something");
        buffer.set("");
        assert!(buffer.is_empty());
    }
}
