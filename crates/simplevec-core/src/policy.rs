//! Growth policies for incremental insertion.
//!
//! When `push_back` or `insert` finds the array full, the policy picks the
//! new capacity. `resize` and `reserve` are exact and never consult it.
//!
//! Policies are zero-sized marker types selected through a type parameter,
//! so the choice costs nothing at run time.

/// Chooses the capacity a full array grows to.
pub trait GrowthPolicy {
    /// Short name used in log output.
    const NAME: &'static str;

    /// New capacity for an array of `capacity` slots that must hold at least
    /// `required` elements. Callers only ask when `required > capacity`.
    ///
    /// The result is always `>= required`.
    fn grow(capacity: usize, required: usize) -> usize;
}

/// Double the capacity, starting from one slot.
///
/// Amortised O(1) `push_back`: `n` pushes reallocate O(log n) times.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Doubling;

impl GrowthPolicy for Doubling {
    const NAME: &'static str = "doubling";

    #[inline]
    fn grow(capacity: usize, required: usize) -> usize {
        if capacity == 0 {
            return required.max(1);
        }
        // Doubling overflow falls back to exact fit.
        capacity.checked_mul(2).unwrap_or(required).max(required)
    }
}

/// Grow to exactly the required count.
///
/// Every push into a full array reallocates, so `n` pushes move O(n²)
/// elements in total. Useful when memory is tighter than time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExactFit;

impl GrowthPolicy for ExactFit {
    const NAME: &'static str = "exact-fit";

    #[inline]
    fn grow(_capacity: usize, required: usize) -> usize {
        required
    }
}
