//! Core types for the simplevec workspace.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! pieces shared by the buffer owner and the dynamic array: allocation and
//! access error types, the capacity request token, and the growth policies
//! that decide how far a full array grows.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod policy;
pub mod request;

pub use error::{AllocError, OutOfRange};
pub use policy::{Doubling, ExactFit, GrowthPolicy};
pub use request::{reserve, CapacityRequest};
