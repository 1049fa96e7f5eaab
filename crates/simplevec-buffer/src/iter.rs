//! Owning iteration over a released block.
//!
//! [`IntoIter`] takes the block out of an [`ArrayBuf`] and moves elements
//! out one by one from either end. Only a live prefix of the block is
//! yielded; the slots past it are dropped with the iterator.
//!
//! ```text
//! [0, front)        yielded from the front
//! [front, back)     not yet yielded
//! [back, live)      yielded from the back
//! [live, capacity)  never yielded, dropped on drop
//! ```

#![allow(unsafe_code)]

use std::fmt;
use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::{self, NonNull};
use std::slice;

use crate::buf::ArrayBuf;
use crate::raw::BlockGuard;

/// Owning iterator over the first `live` elements of a block.
pub struct IntoIter<T> {
    ptr: NonNull<T>,
    capacity: usize,
    live: usize,
    front: usize,
    back: usize,
    _owns: PhantomData<T>,
}

// SAFETY: the iterator owns its elements like `ArrayBuf<T>` does.
unsafe impl<T: Send> Send for IntoIter<T> {}
// SAFETY: shared access only hands out `&[T]`.
unsafe impl<T: Sync> Sync for IntoIter<T> {}

impl<T> IntoIter<T> {
    pub(crate) fn new(mut buf: ArrayBuf<T>, live: usize) -> Self {
        let capacity = buf.len();
        let live = live.min(capacity);
        let ptr = match buf.release() {
            Some(block) => block.cast::<T>(),
            None => NonNull::dangling(),
        };
        Self {
            ptr,
            capacity,
            live,
            front: 0,
            back: live,
            _owns: PhantomData,
        }
    }

    /// The elements not yet yielded.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front, back)` lies inside the block and holds
        // initialised elements that have not been moved out.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().add(self.front), self.back - self.front) }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        // SAFETY: `front < back <= capacity`, and the slot is read once
        // because `front` moves past it.
        let value = unsafe { self.ptr.as_ptr().add(self.front).read() };
        self.front += 1;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        // SAFETY: `front <= back < capacity`, and the slot is read once
        // because `back` moved below it.
        Some(unsafe { self.ptr.as_ptr().add(self.back).read() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        // SAFETY: the block came from `ArrayBuf::release` with `capacity`
        // elements and is owned by nobody else.
        let _block = unsafe { BlockGuard::new(self.ptr, self.capacity) };
        let base = self.ptr.as_ptr();
        // SAFETY: `[front, back)` and `[live, capacity)` are disjoint,
        // initialised, and never moved out.
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.front),
                self.back - self.front,
            ));
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                base.add(self.live),
                self.capacity - self.live,
            ));
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> IntoIterator for ArrayBuf<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        let len = self.len();
        IntoIter::new(self, len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use simplevec_test_utils::{values, Tracked};

    fn tracked_buf(items: &[u32]) -> ArrayBuf<Tracked> {
        ArrayBuf::from_fn(items.len(), |i| Tracked::new(items[i]))
    }

    #[test]
    fn yields_every_element_in_order() {
        let buf = ArrayBuf::from_fn(4, |i| i * 10);
        let out: Vec<usize> = buf.into_iter().collect();
        assert_eq!(out, vec![0, 10, 20, 30]);
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        let mut it = ArrayBuf::from_fn(4, |i| i).into_iter();
        assert_eq!(it.len(), 4);
        assert_eq!(it.next(), Some(0));
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.as_slice(), &[1, 2]);
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
        assert_eq!(it.len(), 0);
    }

    #[test]
    fn live_prefix_only() {
        let buf = tracked_buf(&[1, 2, 3, 4, 5]);
        let out: Vec<Tracked> = buf.into_prefix_iter(2).collect();
        assert_eq!(values(&out), vec![1, 2]);
    }

    #[test]
    fn drop_releases_unyielded_and_slack() {
        let before = Tracked::live();
        {
            let mut it = tracked_buf(&[1, 2, 3, 4, 5, 6]).into_prefix_iter(4);
            let first = it.next();
            let last = it.next_back();
            assert_eq!(first.map(|t| t.value()), Some(1));
            assert_eq!(last.map(|t| t.value()), Some(4));
            assert_eq!(Tracked::live(), before + 4);
        }
        assert_eq!(Tracked::live(), before);
    }

    #[test]
    fn prefix_longer_than_block_is_clamped() {
        let it = ArrayBuf::from_fn(2, |i| i).into_prefix_iter(10);
        assert_eq!(it.len(), 2);
    }

    #[test]
    fn empty_buffer_yields_nothing() {
        let mut it = ArrayBuf::<String>::new().into_iter();
        assert_eq!(it.next(), None);
    }

    #[test]
    fn zero_sized_elements() {
        let it = ArrayBuf::from_fn(1000, |_| ()).into_prefix_iter(600);
        assert_eq!(it.count(), 600);
    }
}
