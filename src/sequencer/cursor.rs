//! Cursor blink state. Cosmetic only; never affects text.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorBlink {
    visible: bool,
}

impl CursorBlink {
    /// Starts visible.
    #[must_use]
    pub fn new() -> Self {
        Self { visible: true }
    }

    #[must_use]
    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Flip visibility and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.visible = !self.visible;
        self.visible
    }
}

impl Default for CursorBlink {
    fn default() -> Self {
        Self::new()
    }
}
