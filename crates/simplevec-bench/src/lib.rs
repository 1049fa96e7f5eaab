//! Benchmark workloads for the simplevec dynamic array.
//!
//! Each workload builds an array from scratch and returns it, so the
//! benchmarks measure construction plus every reallocation on the way:
//!
//! - [`push_workload`]: `n` appends under a chosen growth policy
//! - [`reserved_push_workload`]: `n` appends into a pre-reserved array
//! - [`front_insert_workload`]: `n` insertions at the beginning
//! - [`resize_cycle_workload`]: shrink and regrow within and past capacity

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use simplevec_core::{reserve, GrowthPolicy};
use simplevec_vector::SimpleVec;

/// Append `0..n` to an empty array growing under `P`.
pub fn push_workload<P: GrowthPolicy>(n: usize) -> SimpleVec<u64, P> {
    let mut v = SimpleVec::<u64>::new().into_policy::<P>();
    for i in 0..n as u64 {
        v.push_back(i);
    }
    v
}

/// Append `0..n` to an array created from a capacity request for `n`.
pub fn reserved_push_workload(n: usize) -> SimpleVec<u64> {
    let mut v = SimpleVec::with_capacity_request(reserve(n));
    for i in 0..n as u64 {
        v.push_back(i);
    }
    v
}

/// Insert `0..n` one by one at the beginning, shifting the whole tail each
/// time.
pub fn front_insert_workload(n: usize) -> SimpleVec<u64> {
    let mut v = SimpleVec::new();
    for i in 0..n as u64 {
        v.insert(v.begin(), i);
    }
    v
}

/// Resize an `n`-element array down to half, back up to `n` (in place),
/// then to `2n` (reallocating).
pub fn resize_cycle_workload(n: usize) -> SimpleVec<u64> {
    let mut v = SimpleVec::with_len(n);
    v.resize(n / 2);
    v.resize(n.saturating_sub(1));
    v.resize(n * 2);
    v
}
