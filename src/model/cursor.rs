use std::ops::RangeInclusive;

/// The current selection, if any.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection {
    #[default]
    None,
    /// Inclusive char range with the text it covered when it was made.
    Active {
        start: usize,
        end: usize,
        text: String,
    },
}

impl Selection {
    pub fn is_active(&self) -> bool {
        matches!(self, Selection::Active { .. })
    }

    pub fn range(&self) -> Option<RangeInclusive<usize>> {
        match self {
            Selection::None => None,
            Selection::Active { start, end, .. } => Some(*start..=*end),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Selection::None => None,
            Selection::Active { text, .. } => Some(text),
        }
    }
}

/// Cursor position and selection state within a buffer.
#[derive(Debug, Clone, Default)]
pub struct CursorState {
    /// Insertion point as a char index, `0..=len`.
    pub pos: usize,
    pub selection: Selection,
}

impl CursorState {
    /// Move to `pos`, clamped to `len`, dropping any selection.
    pub fn move_to(&mut self, pos: usize, len: usize) {
        self.pos = pos.min(len);
        self.clear_selection();
    }

    /// Shift by a signed offset, clamped to `0..=len`, dropping any selection.
    pub fn move_by(&mut self, offset: isize, len: usize) {
        let pos = self.pos.saturating_add_signed(offset);
        self.move_to(pos, len);
    }

    pub fn clear_selection(&mut self) {
        self.selection = Selection::None;
    }
}
