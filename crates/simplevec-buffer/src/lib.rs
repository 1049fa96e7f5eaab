//! Exclusive-ownership heap buffers for simplevec.
//!
//! [`ArrayBuf`] owns one fixed-length block of initialised elements and is
//! the backing store of `SimpleVec`. It never grows or shrinks: the dynamic
//! array replaces the whole buffer when it needs a different capacity.
//!
//! # Ownership
//!
//! ```text
//! SimpleVec<T>
//! └── ArrayBuf<T>  (sole owner, move-only)
//!     └── [T; capacity] on the global heap, Box<[T]> layout
//! ```
//!
//! Blocks cross raw boundaries only through [`ArrayBuf::release`] and
//! [`ArrayBuf::adopt`]. `unsafe` code is confined to `raw.rs` (allocator
//! calls), `buf.rs` (element initialisation and drop) and `iter.rs`
//! (moving elements out).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

pub mod buf;
pub mod iter;
mod raw;

pub use buf::ArrayBuf;
pub use iter::IntoIter;
pub use raw::unwrap_alloc;
pub use simplevec_core::AllocError;
