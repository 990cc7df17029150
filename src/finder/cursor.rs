//! Clamped cursor shared by the item list and the query line

/// A zero-based position clamped to `[0, max]`
///
/// The upper bound is supplied on every move because it changes with the
/// data (filtered list length, query length), so one type serves both the
/// item cursor and the query cursor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BoundedCursor {
    pos: usize,
}

impl BoundedCursor {
    /// Create a cursor at `pos`
    #[must_use]
    pub const fn at(pos: usize) -> Self {
        Self { pos }
    }

    /// Current position
    #[must_use]
    pub const fn get(&self) -> usize {
        self.pos
    }

    /// Move to `target`, clamped to `[0, max]`
    pub fn move_to(&mut self, target: isize, max: usize) {
        self.pos = usize::try_from(target).map_or(0, |t| t.min(max));
    }

    /// Move by `delta`, clamped to `[0, max]`
    pub fn move_by(&mut self, delta: isize, max: usize) {
        let current = isize::try_from(self.pos).unwrap_or(isize::MAX);
        self.move_to(current.saturating_add(delta), max);
    }

    /// Set the position without clamping
    ///
    /// Used by query edits, which compute the new position themselves.
    pub const fn set(&mut self, pos: usize) {
        self.pos = pos;
    }

    /// Return to position 0
    pub const fn reset(&mut self) {
        self.pos = 0;
    }
}
