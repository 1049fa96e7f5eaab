//! Standard trait impls for [`SimpleVec`].
//!
//! Comparison, hashing and formatting look only at the live elements;
//! capacity and growth policy never affect the result.

use std::borrow::{Borrow, BorrowMut};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Deref, DerefMut};

use simplevec_buffer::ArrayBuf;
use simplevec_core::{CapacityRequest, GrowthPolicy};

use crate::vec::SimpleVec;

impl<T, P> Default for SimpleVec<T, P> {
    fn default() -> Self {
        Self::from_parts(ArrayBuf::new(), 0)
    }
}

/// The copy holds exactly the live elements; its capacity equals its length.
impl<T: Clone, P> Clone for SimpleVec<T, P> {
    fn clone(&self) -> Self {
        let live = self.as_slice();
        Self::from_parts(ArrayBuf::from_fn(live.len(), |i| live[i].clone()), live.len())
    }
}

impl<T: fmt::Debug, P> fmt::Debug for SimpleVec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, U, P, Q> PartialEq<SimpleVec<U, Q>> for SimpleVec<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &SimpleVec<U, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P> Eq for SimpleVec<T, P> {}

impl<T, U, P, const N: usize> PartialEq<[U; N]> for SimpleVec<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, P> PartialEq<[U]> for SimpleVec<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.as_slice() == other
    }
}

impl<T, U, P> PartialEq<Vec<U>> for SimpleVec<T, P>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vec<U>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialOrd, P, Q> PartialOrd<SimpleVec<T, Q>> for SimpleVec<T, P> {
    fn partial_cmp(&self, other: &SimpleVec<T, Q>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, P> Ord for SimpleVec<T, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash, P> Hash for SimpleVec<T, P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, P> Deref for SimpleVec<T, P> {
    type Target = [T];

    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> DerefMut for SimpleVec<T, P> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P> AsRef<[T]> for SimpleVec<T, P> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> AsMut<[T]> for SimpleVec<T, P> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, P> Borrow<[T]> for SimpleVec<T, P> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, P> BorrowMut<[T]> for SimpleVec<T, P> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

/// Fulfil a capacity request: empty, with exactly the requested capacity.
impl<T: Default, P> From<CapacityRequest> for SimpleVec<T, P> {
    fn from(request: CapacityRequest) -> Self {
        Self::from_parts(ArrayBuf::with_len(request.capacity()), 0)
    }
}

impl<T, P> From<Box<[T]>> for SimpleVec<T, P> {
    fn from(block: Box<[T]>) -> Self {
        let len = block.len();
        Self::from_parts(ArrayBuf::from(block), len)
    }
}

impl<T, P, const N: usize> From<[T; N]> for SimpleVec<T, P> {
    fn from(items: [T; N]) -> Self {
        let block: Box<[T]> = Box::new(items);
        Self::from(block)
    }
}

impl<T, P> From<Vec<T>> for SimpleVec<T, P> {
    fn from(items: Vec<T>) -> Self {
        Self::from(items.into_boxed_slice())
    }
}

impl<T: Clone, P> From<&[T]> for SimpleVec<T, P> {
    fn from(items: &[T]) -> Self {
        Self::from_parts(ArrayBuf::from_fn(items.len(), |i| items[i].clone()), items.len())
    }
}

/// Hand the live elements to a `Vec`; slots past the length are dropped.
impl<T, P> From<SimpleVec<T, P>> for Vec<T> {
    fn from(array: SimpleVec<T, P>) -> Self {
        array.into_iter().collect()
    }
}

impl<T: Default, P: GrowthPolicy> Extend<T> for SimpleVec<T, P> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        if let Some(wanted) = self.len().checked_add(lower) {
            if wanted > self.capacity() {
                self.reserve(P::grow(self.capacity(), wanted));
            }
        }
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + Default + 'a, P: GrowthPolicy> Extend<&'a T> for SimpleVec<T, P> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T: Default, P: GrowthPolicy> FromIterator<T> for SimpleVec<T, P> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::default();
        array.extend(iter);
        array
    }
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    use super::*;
    use crate::simple_vec;
    use simplevec_core::{reserve, Doubling, ExactFit};
    use simplevec_test_utils::Tracked;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn clone_is_deep_and_tight() {
        let mut v = SimpleVec::with_capacity_request(reserve(10));
        v.push_back(String::from("a"));
        v.push_back(String::from("b"));
        let mut c = v.clone();
        assert_eq!(c, v);
        assert_eq!(c.capacity(), 2);
        c[0].push('!');
        assert_eq!(v[0], "a");
        assert_eq!(c[0], "a!");
    }

    #[test]
    fn clone_from_replaces_contents() {
        let source = simple_vec![7, 8];
        let mut target = simple_vec![1, 2, 3, 4];
        target.clone_from(&source);
        assert_eq!(target, [7, 8]);
        assert_eq!(source, [7, 8]);
    }

    #[test]
    fn clone_of_empty_has_no_capacity() {
        let v = SimpleVec::<Tracked>::with_capacity_request(reserve(4));
        let clones = Tracked::clones();
        let c = v.clone();
        assert_eq!(c.capacity(), 0);
        assert_eq!(Tracked::clones(), clones);
    }

    #[test]
    fn equality_ignores_capacity_and_policy() {
        let a = simple_vec![1, 2, 3];
        let mut b: SimpleVec<i32, ExactFit> = SimpleVec::from(reserve(16));
        b.extend([1, 2, 3]);
        assert!(a == b);
        b.push_back(4);
        assert!(a != b);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(simple_vec![1, 2] < simple_vec![1, 3]);
        assert!(simple_vec![1, 2] < simple_vec![1, 2, 0]);
        assert!(SimpleVec::<i32>::new() < simple_vec![0]);
        assert_eq!(simple_vec![2].cmp(&simple_vec![1, 9]), Ordering::Greater);
    }

    #[test]
    fn hash_follows_live_elements() {
        let a = simple_vec![1u8, 2];
        let mut b = simple_vec![1u8, 2, 3];
        b.pop_back();
        assert_eq!(hash_of(&a), hash_of(&b));

        let set: HashSet<SimpleVec<u8>> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut v = simple_vec![1, 2, 3];
        v.resize(2);
        assert_eq!(format!("{v:?}"), "[1, 2]");
    }

    #[test]
    fn slice_methods_through_deref() {
        let mut v = simple_vec![3, 1, 2];
        v.sort_unstable();
        assert_eq!(v, [1, 2, 3]);
        assert!(v.contains(&2));
        assert_eq!(v.first(), Some(&1));
        assert_eq!(v.iter().rev().next(), Some(&3));
    }

    #[test]
    fn from_capacity_request_is_empty() {
        let v: SimpleVec<u8> = reserve(6).into();
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 6);
    }

    #[test]
    fn from_conversions() {
        let a: SimpleVec<_> = SimpleVec::from(vec![1, 2]);
        assert_eq!(a.capacity(), 2);
        let b: SimpleVec<i32> = SimpleVec::from(&[1, 2][..]);
        assert_eq!(a, b);
        let boxed: Box<[i32]> = Box::new([1, 2]);
        let c: SimpleVec<i32, Doubling> = boxed.into();
        assert_eq!(c, vec![1, 2]);
    }

    #[test]
    fn into_vec_drops_slack() {
        let before = Tracked::live();
        let mut v = SimpleVec::with_capacity_request(reserve(5));
        v.push_back(Tracked::new(7));
        let items = Vec::from(v);
        assert_eq!(items.len(), 1);
        assert_eq!(Tracked::live(), before + 1);
    }

    #[test]
    fn repeated_small_extends_grow_through_policy() {
        let mut v = SimpleVec::<u32>::new();
        let mut reallocations = 0;
        for i in 0..64 {
            let cap = v.capacity();
            v.extend(Some(i));
            if v.capacity() != cap {
                reallocations += 1;
            }
        }
        assert_eq!(v.len(), 64);
        assert_eq!(reallocations, 7);
        assert_eq!(v.capacity(), 64);
    }

    #[test]
    fn extend_with_exact_fit_grows_to_hint() {
        let mut v: SimpleVec<u32, ExactFit> = SimpleVec::default();
        v.extend([1, 2, 3]);
        v.extend([4, 5]);
        assert_eq!(v.capacity(), 5);
    }

    #[test]
    fn collect_and_extend() {
        let v: SimpleVec<u32> = (1..=4).collect();
        assert_eq!(v, [1, 2, 3, 4]);
        assert_eq!(v.capacity(), 4);

        let mut w = SimpleVec::new();
        w.extend(&[5u32, 6]);
        w.extend(v.iter().copied());
        assert_eq!(w, [5, 6, 1, 2, 3, 4]);
    }
}
