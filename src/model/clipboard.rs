/// Append-only history of copied selections, most recent last.
#[derive(Debug, Default, Clone)]
pub struct Clipboard {
    entries: Vec<String>,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a snapshot. Empty strings are ignored.
    pub fn push(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        self.entries.push(text.to_string());
    }

    /// The `steps_back`-th most recent entry; 1 is the latest copy.
    ///
    /// Returns `None` for 0 or anything past the oldest entry.
    pub fn nth_back(&self, steps_back: usize) -> Option<&str> {
        let idx = self.entries.len().checked_sub(steps_back)?;
        self.entries.get(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Drop every entry.
    #[allow(dead_code)] // reset hook for embedders
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
