//! Low-level primitives for heap block management.
//!
//! Every call into the global allocator goes through this module. Blocks
//! are laid out with `Layout::array::<T>(count)`, the same layout a
//! `Box<[T]>` of `count` elements uses, so blocks can cross the boundary in
//! both directions. Zero-sized layouts (no elements, or a zero-sized `T`)
//! never reach the allocator and are represented by a dangling pointer.
//!
//! Each `unsafe` block carries a `// SAFETY:` comment.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::ptr::NonNull;

use log::trace;
use simplevec_core::AllocError;

/// Layout of a block of `count` elements of `T`.
pub(crate) fn layout_for<T>(count: usize) -> Result<Layout, AllocError> {
    Layout::array::<T>(count).map_err(|_| AllocError::CapacityOverflow)
}

/// Allocate an uninitialised block of `count` elements.
///
/// Returns a dangling pointer for zero-sized layouts. The caller owns the
/// block and must release it with [`deallocate`] using the same `count`.
pub(crate) fn allocate<T>(count: usize) -> Result<NonNull<T>, AllocError> {
    let layout = layout_for::<T>(count)?;
    if layout.size() == 0 {
        return Ok(NonNull::dangling());
    }
    // SAFETY: `layout` has a non-zero size.
    let ptr = unsafe { alloc::alloc(layout) };
    match NonNull::new(ptr.cast::<T>()) {
        Some(ptr) => {
            trace!(
                "allocated {} bytes for {} elements at {:p}",
                layout.size(),
                count,
                ptr
            );
            Ok(ptr)
        }
        None => Err(AllocError::Exhausted { layout }),
    }
}

/// Return a block obtained from [`allocate`] to the global allocator.
///
/// Elements are not dropped; that is the caller's job.
///
/// # Safety
///
/// `ptr` must come from `allocate::<T>(count)` (or an equivalent
/// `Box<[T]>` of `count` elements) and must not be used afterwards.
pub(crate) unsafe fn deallocate<T>(ptr: NonNull<T>, count: usize) {
    let Ok(layout) = layout_for::<T>(count) else {
        return;
    };
    if layout.size() == 0 {
        return;
    }
    trace!(
        "freeing {} bytes for {} elements at {:p}",
        layout.size(),
        count,
        ptr
    );
    // SAFETY: per the caller contract the block was allocated with this
    // exact layout by the global allocator.
    unsafe { alloc::dealloc(ptr.as_ptr().cast::<u8>(), layout) }
}

/// Frees a block when dropped, including during unwinding.
pub(crate) struct BlockGuard<T> {
    ptr: NonNull<T>,
    count: usize,
}

impl<T> BlockGuard<T> {
    /// # Safety
    ///
    /// Same contract as [`deallocate`]: the guard takes ownership of the block.
    pub(crate) unsafe fn new(ptr: NonNull<T>, count: usize) -> Self {
        Self { ptr, count }
    }
}

impl<T> Drop for BlockGuard<T> {
    fn drop(&mut self) {
        // SAFETY: the guard owns the block per the contract of `new`.
        unsafe { deallocate(self.ptr, self.count) }
    }
}

/// Unwrap the result of an allocation the way the standard collections do:
/// panic on layout overflow, abort through `handle_alloc_error` when the
/// allocator is exhausted.
pub fn unwrap_alloc<T>(result: Result<T, AllocError>) -> T {
    match result {
        Ok(value) => value,
        Err(AllocError::CapacityOverflow) => panic!("capacity overflow"),
        Err(AllocError::Exhausted { layout }) => alloc::handle_alloc_error(layout),
    }
}
