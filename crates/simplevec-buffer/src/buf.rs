//! Exclusive owner of a fixed-length heap block.
//!
//! [`ArrayBuf`] is the backing store of the dynamic array. It owns exactly
//! one block of `len` fully initialised elements for its whole life and
//! never resizes. Ownership moves with the value; [`ArrayBuf::release`] and
//! [`ArrayBuf::adopt`] move it across a raw-pointer boundary. There is no
//! `Clone` impl, so duplicating a block is a compile error.

#![allow(unsafe_code)]

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use simplevec_core::AllocError;

use crate::iter::IntoIter;
use crate::raw::{self, unwrap_alloc, BlockGuard};

/// A heap block of `len` initialised elements with a single owner.
///
/// An empty buffer holds no block and never touches the allocator.
pub struct ArrayBuf<T> {
    /// Start of the block. Dangling when `len == 0` or `T` is zero-sized.
    ptr: NonNull<T>,
    /// Element count, fixed at construction.
    len: usize,
    _owns: PhantomData<T>,
}

// SAFETY: `ArrayBuf<T>` owns its elements like `Box<[T]>` does.
unsafe impl<T: Send> Send for ArrayBuf<T> {}
// SAFETY: shared access only hands out `&T`.
unsafe impl<T: Sync> Sync for ArrayBuf<T> {}

impl<T> ArrayBuf<T> {
    /// An owner holding no block.
    pub const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            len: 0,
            _owns: PhantomData,
        }
    }

    /// Allocate `count` default-initialised elements.
    ///
    /// A zero count holds no block.
    ///
    /// # Panics
    ///
    /// Panics on layout overflow; aborts if the allocator is exhausted.
    pub fn with_len(count: usize) -> Self
    where
        T: Default,
    {
        unwrap_alloc(Self::try_with_len(count))
    }

    /// Fallible form of [`ArrayBuf::with_len`].
    ///
    /// The allocation error is returned as the raw layer reported it.
    pub fn try_with_len(count: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Self::try_from_fn(count, |_| T::default())
    }

    /// Allocate `count` elements, initialising slot `i` with `f(i)`.
    ///
    /// # Panics
    ///
    /// Panics on layout overflow; aborts if the allocator is exhausted.
    /// If `f` panics, the elements written so far are dropped and the
    /// block is freed.
    pub fn from_fn<F>(count: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        unwrap_alloc(Self::try_from_fn(count, f))
    }

    /// Fallible form of [`ArrayBuf::from_fn`].
    ///
    /// The block is obtained before `f` is ever called, so an allocation
    /// failure has no side effects.
    pub fn try_from_fn<F>(count: usize, mut f: F) -> Result<Self, AllocError>
    where
        F: FnMut(usize) -> T,
    {
        if count == 0 {
            return Ok(Self::new());
        }
        let ptr = raw::allocate::<T>(count)?;
        let mut filling = Filling {
            ptr,
            count,
            initialized: 0,
        };
        while filling.initialized < count {
            let value = f(filling.initialized);
            // SAFETY: `initialized < count`, so the slot lies inside the
            // block and has not been written yet.
            unsafe { ptr.as_ptr().add(filling.initialized).write(value) };
            filling.initialized += 1;
        }
        mem::forget(filling);
        Ok(Self {
            ptr,
            len: count,
            _owns: PhantomData,
        })
    }

    /// Take ownership of an existing block without allocating.
    ///
    /// Never fails. A zero-length block is treated as no block.
    ///
    /// # Safety
    ///
    /// `block` must describe `block.len()` initialised elements allocated by
    /// the global allocator with `Layout::array::<T>(block.len())`, which is
    /// what [`ArrayBuf::release`] and `Box::<[T]>::into_raw` produce. Nobody
    /// else may use or free the block afterwards.
    pub unsafe fn adopt(block: NonNull<[T]>) -> Self {
        let len = block.len();
        if len == 0 {
            return Self::new();
        }
        Self {
            ptr: block.cast::<T>(),
            len,
            _owns: PhantomData,
        }
    }

    /// Detach the held block and hand it to the caller.
    ///
    /// Leaves this owner empty. Returns `None` (and changes nothing) when no
    /// block is held. The caller becomes responsible for dropping the
    /// elements and freeing the block, typically by passing it back to
    /// [`ArrayBuf::adopt`] or `Box::from_raw`.
    #[must_use = "the released block leaks unless it is adopted again"]
    pub fn release(&mut self) -> Option<NonNull<[T]>> {
        if self.len == 0 {
            return None;
        }
        let block = NonNull::slice_from_raw_parts(self.ptr, self.len);
        self.ptr = NonNull::dangling();
        self.len = 0;
        Some(block)
    }

    /// Convert into a boxed slice without copying.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        match self.release() {
            // SAFETY: the block was allocated with the layout `Box<[T]>`
            // uses and all of its elements are initialised.
            Some(block) => unsafe { Box::from_raw(block.as_ptr()) },
            None => {
                let empty: Box<[T]> = Box::new([]);
                empty
            }
        }
    }

    /// Number of elements in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the block has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether a block is currently held.
    #[inline]
    pub fn has_block(&self) -> bool {
        self.len != 0
    }

    /// Raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    /// Mutable raw pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// The whole block as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `ptr` is valid for `len` initialised elements (or
        // dangling with `len == 0`).
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The whole block as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`; `&mut self` guarantees uniqueness.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.len) }
    }

    /// Element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: caller guarantees `index < len`.
        unsafe { &*self.ptr.as_ptr().add(index) }
    }

    /// Mutable element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: caller guarantees `index < len`.
        unsafe { &mut *self.ptr.as_ptr().add(index) }
    }

    /// Exchange blocks with `other` in O(1).
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.ptr, &mut other.ptr);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move out the first `live` elements through an iterator.
    ///
    /// Elements past `live` are never yielded; they are dropped with the
    /// iterator. `live` is clamped to the block length.
    pub fn into_prefix_iter(self, live: usize) -> IntoIter<T> {
        IntoIter::new(self, live)
    }
}

/// Partially written block inside [`ArrayBuf::try_from_fn`]. On unwind it
/// drops the written prefix and frees the block.
struct Filling<T> {
    ptr: NonNull<T>,
    count: usize,
    initialized: usize,
}

impl<T> Drop for Filling<T> {
    fn drop(&mut self) {
        // SAFETY: the block came from `raw::allocate::<T>(count)`.
        let _block = unsafe { BlockGuard::new(self.ptr, self.count) };
        // SAFETY: exactly the first `initialized` slots were written.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.initialized,
            ))
        }
    }
}

impl<T> Drop for ArrayBuf<T> {
    fn drop(&mut self) {
        if self.len == 0 {
            return;
        }
        // Frees the block even if an element's destructor panics.
        // SAFETY: the owner holds the block and nothing else refers to it.
        let _block = unsafe { BlockGuard::new(self.ptr, self.len) };
        // SAFETY: all `len` elements are initialised and dropped once here.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.ptr.as_ptr(),
                self.len,
            ))
        }
    }
}

impl<T> Default for ArrayBuf<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for ArrayBuf<T> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for ArrayBuf<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> From<Box<[T]>> for ArrayBuf<T> {
    fn from(boxed: Box<[T]>) -> Self {
        let block = NonNull::from(Box::leak(boxed));
        // SAFETY: a leaked `Box<[T]>` is a global-allocator block with the
        // array layout, and we are its only owner now.
        unsafe { Self::adopt(block) }
    }
}

impl<T: fmt::Debug> fmt::Debug for ArrayBuf<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
