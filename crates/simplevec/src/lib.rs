//! Simplevec: a growable array with explicit capacity control.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! simplevec sub-crates. For most users, adding `simplevec` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use simplevec::prelude::*;
//!
//! // Pre-allocate ten slots without creating any elements.
//! let mut v = SimpleVec::with_capacity_request(reserve(10));
//! for i in 0..10 {
//!     v.push_back(i);
//! }
//! assert_eq!(v.len(), 10);
//! assert_eq!(v.capacity(), 10);
//!
//! // Positions are invalidated by shifts and reallocations.
//! let next = v.erase(v.begin());
//! assert_eq!(v[next], 1);
//!
//! // Checked access reports the index and length.
//! assert_eq!(v.at(9), Err(OutOfRange { index: 9, len: 9 }));
//!
//! // Resizing past capacity reallocates to exactly the new length.
//! v.resize(12);
//! assert_eq!(v.capacity(), 12);
//! assert_eq!(&v.as_slice()[9..], &[0, 0, 0]);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `simplevec-core` | Errors, capacity requests, growth policies |
//! | [`buffer`] | `simplevec-buffer` | `ArrayBuf`, the exclusive-ownership heap block |
//! | [`vector`] | `simplevec-vector` | `SimpleVec`, positions, iterators |
//!
//! # Logging
//!
//! Allocation and reallocation events are emitted through the `log` facade:
//! block allocation and release at `trace`, array reallocations at `debug`
//! (with the cause, old and new capacity, and growth policy). Install any
//! `log` backend to see them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Error types, the capacity request token and growth policies
/// (`simplevec-core`).
pub use simplevec_core as types;

/// The exclusive-ownership heap buffer (`simplevec-buffer`).
///
/// Most users never touch [`buffer::ArrayBuf`] directly; it is the backing
/// store of [`vector::SimpleVec`].
pub use simplevec_buffer as buffer;

/// The dynamic array (`simplevec-vector`).
pub use simplevec_vector as vector;

pub use simplevec_vector::simple_vec;

/// Common imports for typical simplevec usage.
///
/// ```rust
/// use simplevec::prelude::*;
/// ```
pub mod prelude {
    // Array
    pub use simplevec_vector::{simple_vec, Position, SimpleVec};

    // Capacity control
    pub use simplevec_core::{reserve, CapacityRequest, Doubling, ExactFit, GrowthPolicy};

    // Errors
    pub use simplevec_core::{AllocError, OutOfRange};
}
