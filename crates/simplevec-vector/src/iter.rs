//! Owning iteration.

pub use simplevec_buffer::IntoIter;

use crate::vec::SimpleVec;

impl<T, P> IntoIterator for SimpleVec<T, P> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Slots past the logical length are dropped with the iterator.
    fn into_iter(self) -> IntoIter<T> {
        self.buf.into_prefix_iter(self.len)
    }
}

impl<'a, T, P> IntoIterator for &'a SimpleVec<T, P> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, P> IntoIterator for &'a mut SimpleVec<T, P> {
    type Item = &'a mut T;
    type IntoIter = std::slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
