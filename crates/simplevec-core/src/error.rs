//! Error types for simplevec.
//!
//! Two recoverable classes are reported as values: allocation failures,
//! raised by the raw allocation layer and handed back unchanged through every
//! `try_*` operation, and out-of-range checked access. Contract violations
//! (stale positions, unchecked indexing past the end) are not errors; the
//! safe API reports them with a panic.

use std::alloc::Layout;
use std::error::Error;
use std::fmt;

/// Errors from obtaining a heap block for a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AllocError {
    /// The requested element count does not fit in a valid `Layout`
    /// (the byte size overflows `isize::MAX`).
    CapacityOverflow,
    /// The global allocator could not satisfy the request.
    Exhausted {
        /// The layout that was passed to the allocator.
        layout: Layout,
    },
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::Exhausted { layout } => {
                write!(
                    f,
                    "memory allocation of {} bytes (align {}) failed",
                    layout.size(),
                    layout.align()
                )
            }
        }
    }
}

impl Error for AllocError {}

/// A checked access named an index at or past the logical length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// The logical length at the time of the access.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of range for length {}",
            self.index, self.len
        )
    }
}

impl Error for OutOfRange {}
