use crate::error::EditError;

use super::buffer::Buffer;
use super::clipboard::Clipboard;
use super::cursor::{CursorState, Selection};

/// The editor state machine: one buffer, one cursor, one clipboard history.
///
/// Every operation either applies fully or returns an error with the state
/// untouched.
#[derive(Debug, Default)]
pub struct Editor {
    buffer: Buffer,
    cursor: CursorState,
    clipboard: Clipboard,
}

impl Editor {
    pub fn new() -> Self {
        Self {
            buffer: Buffer::new(),
            cursor: CursorState::default(),
            clipboard: Clipboard::new(),
        }
    }

    pub fn text(&self) -> String {
        self.buffer.text()
    }

    pub fn cursor(&self) -> usize {
        self.cursor.pos
    }

    pub fn selection(&self) -> &Selection {
        &self.cursor.selection
    }

    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Type `text` at the cursor, replacing the selection if there is one.
    pub fn insert(&mut self, text: &str) {
        if let Some(range) = self.cursor.selection.range() {
            let start = *range.start();
            self.buffer.remove(range);
            self.cursor.pos = start;
        }

        self.cursor.pos += self.buffer.insert(self.cursor.pos, text);
        self.cursor.clear_selection();
    }

    /// Select the inclusive range `start..=end` and park the cursor after it.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), EditError> {
        let len = self.buffer.len_chars();
        let text = self
            .buffer
            .slice(start..=end)
            .ok_or(EditError::OutOfRangeSelection { start, end, len })?;

        self.cursor.selection = Selection::Active { start, end, text };
        self.cursor.pos = end + 1;
        Ok(())
    }

    /// Move the cursor by `offset` chars, clamped to the buffer. Always deselects.
    pub fn move_cursor(&mut self, offset: isize) {
        self.cursor.move_by(offset, self.buffer.len_chars());
    }

    /// Push the current selection onto the clipboard. No-op without a selection.
    pub fn copy(&mut self) {
        if let Some(text) = self.cursor.selection.text() {
            self.clipboard.push(text);
        }
    }

    /// Insert the `steps_back`-th most recent clipboard entry.
    ///
    /// Returns `false` without touching anything when no such entry exists.
    pub fn paste(&mut self, steps_back: usize) -> bool {
        let Some(entry) = self.clipboard.nth_back(steps_back) else {
            return false;
        };
        let entry = entry.to_string();
        self.insert(&entry);
        true
    }
}
