//! The dynamic array.
//!
//! [`SimpleVec`] owns one [`ArrayBuf`] whose length is the capacity, and
//! tracks the logical length separately. Every slot of the buffer always
//! holds an initialised value: slots `[len, capacity)` keep leftovers from
//! earlier use or defaults, and are overwritten when they come back into the
//! live range. That is why growth requires `T: Default`.
//!
//! # Growth
//!
//! - `resize` and `reserve` are exact: a reallocation produces precisely the
//!   requested capacity.
//! - `push_back` and `insert` on a full array ask the growth policy `P`
//!   (`Doubling` unless chosen otherwise).
//!
//! A reallocation always obtains the new block before touching the old one,
//! so an allocation failure leaves the array unchanged.

#![allow(unsafe_code)]

use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use log::debug;
use simplevec_buffer::{unwrap_alloc, ArrayBuf};
use simplevec_core::{AllocError, CapacityRequest, Doubling, GrowthPolicy, OutOfRange};

use crate::position::Position;

/// A growable array on a manually managed heap block.
///
/// `P` picks how a full array grows on `push_back`/`insert`; see
/// [`GrowthPolicy`].
pub struct SimpleVec<T, P = Doubling> {
    /// Backing store. Its length is the capacity.
    pub(crate) buf: ArrayBuf<T>,
    /// Logical length, always `<= buf.len()`.
    pub(crate) len: usize,
    /// Bumped by every reallocation or shift; stamps issued positions.
    pub(crate) generation: u64,
    pub(crate) _policy: PhantomData<fn() -> P>,
}

impl<T> SimpleVec<T> {
    /// An empty array. Does not allocate.
    pub const fn new() -> Self {
        Self::from_parts(ArrayBuf::new(), 0)
    }

    /// An array of `len` default values, with capacity `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        unwrap_alloc(Self::try_with_len(len))
    }

    /// Fallible form of [`SimpleVec::with_len`].
    pub fn try_with_len(len: usize) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Ok(Self::from_parts(ArrayBuf::try_with_len(len)?, len))
    }

    /// An array of `len` copies of `value`, with capacity `len`.
    ///
    /// ```
    /// use simplevec_vector::SimpleVec;
    ///
    /// let v = SimpleVec::from_elem(3, 'x');
    /// assert_eq!(v, ['x', 'x', 'x']);
    /// ```
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::from_parts(ArrayBuf::from_fn(len, |_| value.clone()), len)
    }

    /// An empty array with exactly the requested capacity allocated.
    ///
    /// ```
    /// use simplevec_core::reserve;
    /// use simplevec_vector::SimpleVec;
    ///
    /// let v = SimpleVec::<u8>::with_capacity_request(reserve(10));
    /// assert_eq!(v.len(), 0);
    /// assert_eq!(v.capacity(), 10);
    /// ```
    pub fn with_capacity_request(request: CapacityRequest) -> Self
    where
        T: Default,
    {
        unwrap_alloc(Self::try_with_capacity_request(request))
    }

    /// Fallible form of [`SimpleVec::with_capacity_request`].
    pub fn try_with_capacity_request(request: CapacityRequest) -> Result<Self, AllocError>
    where
        T: Default,
    {
        Ok(Self::from_parts(
            ArrayBuf::try_with_len(request.capacity())?,
            0,
        ))
    }
}

impl<T, P> SimpleVec<T, P> {
    pub(crate) const fn from_parts(buf: ArrayBuf<T>, len: usize) -> Self {
        Self {
            buf,
            len,
            generation: 0,
            _policy: PhantomData,
        }
    }

    /// Re-label the array with another growth policy. No data moves.
    pub fn into_policy<Q>(self) -> SimpleVec<T, Q> {
        SimpleVec {
            buf: self.buf,
            len: self.len,
            generation: self.generation,
            _policy: PhantomData,
        }
    }

    /// Number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Whether there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The live elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// The live elements, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buf[..len]
    }

    /// Iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access.
    ///
    /// ```
    /// use simplevec_vector::simple_vec;
    ///
    /// let v = simple_vec![1, 2, 3];
    /// assert_eq!(v.at(1), Ok(&2));
    /// assert!(v.at(3).is_err());
    /// ```
    pub fn at(&self, index: usize) -> Result<&T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&self.buf[index])
    }

    /// Checked mutable access.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, OutOfRange> {
        if index >= self.len {
            return Err(OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(&mut self.buf[index])
    }

    /// Element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`. Reading a slot past the logical length is a
    /// contract violation even when it lies inside the capacity.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: `index < len <= capacity` per the caller contract.
        unsafe { self.buf.get_unchecked(index) }
    }

    /// Mutable element `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len, "index {index} out of bounds for length {}", self.len);
        // SAFETY: `index < len <= capacity` per the caller contract.
        unsafe { self.buf.get_unchecked_mut(index) }
    }

    /// Set the length to zero.
    ///
    /// Capacity is kept and elements are not dropped here; their slots are
    /// overwritten when reused, or dropped with the array.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Exchange contents, capacity and generation with `other` in O(1).
    pub fn swap(&mut self, other: &mut Self) {
        self.buf.swap(&mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
        mem::swap(&mut self.generation, &mut other.generation);
    }

    /// Handle to the first slot.
    #[must_use]
    pub fn begin(&self) -> Position {
        Position::new(0, self.generation)
    }

    /// Handle one past the last live element.
    #[must_use]
    pub fn end(&self) -> Position {
        Position::new(self.len, self.generation)
    }

    /// Handle to slot `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn position(&self, index: usize) -> Position {
        assert!(
            index <= self.len,
            "position {index} out of range for length {}",
            self.len
        );
        Position::new(index, self.generation)
    }

    /// Validate a handle and return its index.
    ///
    /// `allow_end` admits the one-past-the-end handle (insertion).
    fn resolve(&self, pos: Position, allow_end: bool) -> usize {
        assert!(
            pos.generation == self.generation,
            "stale {pos}: the array is at generation {}",
            self.generation
        );
        let in_range = if allow_end {
            pos.index <= self.len
        } else {
            pos.index < self.len
        };
        assert!(
            in_range,
            "{pos} out of range for length {}",
            self.len
        );
        pos.index
    }

    fn bump_generation(&mut self) {
        self.generation = self.generation.wrapping_add(1);
    }

    /// Erase the element at `pos`, shifting everything after it one slot
    /// towards the beginning.
    ///
    /// Returns a handle to the same index, which now holds the element that
    /// followed the erased one (or is `end()`). The erased value moves into
    /// the first absent slot and is dropped when that slot is reused or the
    /// array is dropped. Invalidates all earlier handles.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale or not in `[begin, end)`.
    pub fn erase(&mut self, pos: Position) -> Position {
        let index = self.resolve(pos, false);
        let len = self.len;
        self.buf[index..len].rotate_left(1);
        self.len -= 1;
        self.bump_generation();
        Position::new(index, self.generation)
    }
}

impl<T: Default, P: GrowthPolicy> SimpleVec<T, P> {
    /// Replace the buffer with one of exactly `new_capacity` slots.
    ///
    /// Live elements move into the prefix, the rest is default-filled. The
    /// new block is allocated first, so failure leaves `self` intact.
    fn reallocate(&mut self, new_capacity: usize, cause: &str) -> Result<(), AllocError> {
        debug_assert!(new_capacity >= self.len);
        let len = self.len;
        let old_capacity = self.buf.len();
        let old = &mut self.buf;
        let mut fresh = ArrayBuf::try_from_fn(new_capacity, |i| {
            if i < len {
                mem::take(&mut old[i])
            } else {
                T::default()
            }
        })?;
        debug!(
            "{cause}: reallocated from capacity {old_capacity} to {new_capacity} (len {len}, {} growth)",
            P::NAME
        );
        self.buf.swap(&mut fresh);
        self.bump_generation();
        Ok(())
    }

    /// Make room for one more element, growing through the policy.
    fn grow_for_one(&mut self, cause: &str) -> Result<(), AllocError> {
        if self.len < self.capacity() {
            return Ok(());
        }
        let required = self
            .len
            .checked_add(1)
            .ok_or(AllocError::CapacityOverflow)?;
        let new_capacity = P::grow(self.capacity(), required);
        self.reallocate(new_capacity, cause)
    }

    /// Change the logical length to `new_len`.
    ///
    /// - Shorter: the length drops; nothing is reallocated or dropped.
    /// - Longer but below capacity: new slots are overwritten with defaults.
    /// - At or above capacity: reallocates to exactly `new_len` slots.
    ///
    /// ```
    /// use simplevec_vector::simple_vec;
    ///
    /// let mut v = simple_vec![1, 2, 3];
    /// v.resize(5);
    /// assert_eq!(v, [1, 2, 3, 0, 0]);
    /// assert_eq!(v.capacity(), 5);
    /// v.resize(1);
    /// assert_eq!(v, [1]);
    /// assert_eq!(v.capacity(), 5);
    /// ```
    pub fn resize(&mut self, new_len: usize) {
        unwrap_alloc(self.try_resize(new_len))
    }

    /// Fallible form of [`SimpleVec::resize`].
    pub fn try_resize(&mut self, new_len: usize) -> Result<(), AllocError> {
        if new_len <= self.len {
            self.len = new_len;
            return Ok(());
        }
        if new_len < self.capacity() {
            let len = self.len;
            self.buf[len..new_len].fill_with(T::default);
        } else {
            self.reallocate(new_len, "resize")?;
        }
        self.len = new_len;
        Ok(())
    }

    /// Grow the capacity to exactly `new_capacity` if it is larger than the
    /// current one. Length and elements are preserved.
    pub fn reserve(&mut self, new_capacity: usize) {
        unwrap_alloc(self.try_reserve(new_capacity))
    }

    /// Fallible form of [`SimpleVec::reserve`].
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), AllocError> {
        if new_capacity > self.capacity() {
            self.reallocate(new_capacity, "reserve")?;
        }
        Ok(())
    }

    /// Drop unused capacity, reallocating to exactly `len` slots.
    pub fn shrink_to_fit(&mut self) {
        if self.capacity() > self.len {
            unwrap_alloc(self.reallocate(self.len, "shrink_to_fit"))
        }
    }

    /// Append `value`.
    ///
    /// A full array grows through the policy first; with [`Doubling`] that
    /// makes repeated pushes amortised O(1).
    pub fn push_back(&mut self, value: T) {
        unwrap_alloc(self.try_push_back(value))
    }

    /// Fallible form of [`SimpleVec::push_back`]. On error `value` is dropped
    /// and the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<(), AllocError> {
        self.grow_for_one("push_back")?;
        let len = self.len;
        self.buf[len] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the last element; `None` on an empty array.
    ///
    /// The vacated slot is left holding a default value.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(mem::take(&mut self.buf[self.len]))
    }

    /// Insert `value` before `pos`, shifting the tail one slot towards the
    /// end. Returns a handle to the inserted element and invalidates all
    /// earlier handles.
    ///
    /// ```
    /// use simplevec_vector::simple_vec;
    ///
    /// let mut v = simple_vec!['a', 'c'];
    /// let at = v.insert(v.position(1), 'b');
    /// assert_eq!(v[at], 'b');
    /// assert_eq!(v, ['a', 'b', 'c']);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `pos` is stale or not in `[begin, end]`.
    pub fn insert(&mut self, pos: Position, value: T) -> Position {
        unwrap_alloc(self.try_insert(pos, value))
    }

    /// Fallible form of [`SimpleVec::insert`].
    pub fn try_insert(&mut self, pos: Position, value: T) -> Result<Position, AllocError> {
        let index = self.resolve(pos, true);
        self.grow_for_one("insert")?;
        let len = self.len;
        self.buf[len] = value;
        self.buf[index..=len].rotate_right(1);
        self.len += 1;
        self.bump_generation();
        Ok(Position::new(index, self.generation))
    }

    /// Shrink the buffer to the live elements and hand it over as a boxed
    /// slice.
    pub fn into_boxed_slice(mut self) -> Box<[T]> {
        self.shrink_to_fit();
        self.buf.into_boxed_slice()
    }
}

impl<T, P> Index<usize> for SimpleVec<T, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P> IndexMut<usize> for SimpleVec<T, P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.at_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P> Index<Position> for SimpleVec<T, P> {
    type Output = T;

    fn index(&self, pos: Position) -> &T {
        let index = self.resolve(pos, false);
        &self.buf[index]
    }
}

impl<T, P> IndexMut<Position> for SimpleVec<T, P> {
    fn index_mut(&mut self, pos: Position) -> &mut T {
        let index = self.resolve(pos, false);
        &mut self.buf[index]
    }
}
