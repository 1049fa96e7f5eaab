//! Capacity request token.
//!
//! A [`CapacityRequest`] selects the "allocate but leave empty" construction
//! path of the dynamic array. Both that path and "construct with `n` default
//! elements" take a single count, so the token is what tells them apart:
//!
//! ```
//! use simplevec_core::reserve;
//!
//! let request = reserve(10);
//! assert_eq!(request.capacity(), 10);
//! ```

/// An immutable request for a pre-allocated, logically empty container.
///
/// There is no `Default` impl: a request always names its
/// capacity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct CapacityRequest {
    capacity: usize,
}

impl CapacityRequest {
    /// Create a request for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The requested slot count.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl From<usize> for CapacityRequest {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Shorthand for [`CapacityRequest::new`].
pub const fn reserve(capacity: usize) -> CapacityRequest {
    CapacityRequest::new(capacity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserve_carries_capacity() {
        assert_eq!(reserve(10).capacity(), 10);
        assert_eq!(reserve(0).capacity(), 0);
    }

    #[test]
    fn from_usize_matches_new() {
        assert_eq!(CapacityRequest::from(5), CapacityRequest::new(5));
    }

    #[test]
    fn usable_in_const_context() {
        const REQUEST: CapacityRequest = reserve(64);
        assert_eq!(REQUEST.capacity(), 64);
    }
}
