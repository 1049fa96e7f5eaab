//! A growable array on a manually managed heap buffer.
//!
//! [`SimpleVec`] keeps a logical length over an [`ArrayBuf`] whose length is
//! the capacity. It offers the usual dynamic-array operations with explicit
//! capacity control: construction with `n` defaults or from a
//! [`CapacityRequest`], checked and unchecked access, three-way `resize`,
//! exact `reserve`, policy-driven `push_back`, and position-based `insert`
//! and `erase`.
//!
//! # Positions
//!
//! `insert` and `erase` take a [`Position`] rather than a borrow. A position
//! is stamped with the array's generation; any operation that reallocates
//! or shifts elements starts a new generation, and using a handle from an
//! older one panics.
//!
//! ```
//! use simplevec_vector::{reserve, SimpleVec};
//!
//! let mut v = SimpleVec::with_capacity_request(reserve(4));
//! v.push_back(10);
//! v.push_back(30);
//! let at = v.insert(v.position(1), 20);
//! assert_eq!(v[at], 20);
//! assert_eq!(v, [10, 20, 30]);
//! assert_eq!(v.capacity(), 4);
//! ```
//!
//! # Element requirements
//!
//! Operations that can create slots (growth, `resize`, construction with
//! defaults) need `T: Default`, because every slot of the buffer always
//! holds a value.
//!
//! [`ArrayBuf`]: simplevec_buffer::ArrayBuf

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod iter;
mod macros;
pub mod position;
mod traits;
pub mod vec;

pub use iter::IntoIter;
pub use position::Position;
pub use vec::SimpleVec;

pub use simplevec_core::{
    reserve, AllocError, CapacityRequest, Doubling, ExactFit, GrowthPolicy, OutOfRange,
};
