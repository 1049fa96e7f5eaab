//! Position handles into a [`SimpleVec`](crate::SimpleVec).
//!
//! A [`Position`] names a slot in the live range `[begin, end]` of one array
//! state. It is generation-scoped: every operation that reallocates or
//! shifts elements bumps the array's generation, and a handle from an older
//! generation is stale. Using a stale handle is a contract violation that
//! the array detects with an O(1) comparison and reports with a panic.

use std::fmt;

/// A cursor into the live range of a `SimpleVec`.
///
/// Handles are plain values; they borrow nothing, so the array stays usable
/// while they exist. Whether a handle is still valid is checked when it is
/// used, not when it is moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) index: usize,
    pub(crate) generation: u64,
}

impl Position {
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }

    /// Slot index this handle points at.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Array generation the handle was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The handle `n` slots towards the end.
    ///
    /// Range is checked when the handle is used.
    #[must_use]
    pub fn advance(self, n: usize) -> Self {
        match self.index.checked_add(n) {
            Some(index) => Self { index, ..self },
            None => panic!("position advanced past usize::MAX"),
        }
    }

    /// The handle `n` slots towards the beginning.
    ///
    /// # Panics
    ///
    /// Panics if that would move before the first slot.
    #[must_use]
    pub fn retreat(self, n: usize) -> Self {
        match self.index.checked_sub(n) {
            Some(index) => Self { index, ..self },
            None => panic!("position {} retreated by {} before begin", self.index, n),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(index={}, gen={})", self.index, self.generation)
    }
}
