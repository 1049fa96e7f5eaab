//! Test utilities for simplevec development.
//!
//! Provides [`Tracked`], an element type that counts how many instances are
//! alive and how they came to be. Containers that manage element lifetimes
//! by hand are tested with it to prove that nothing leaks and nothing is
//! dropped twice.
//!
//! Counters are thread-local. The test harness runs each test on its own
//! thread, so tests do not see each other's instances; within one test,
//! compare against a value captured at the start rather than against zero.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::Cell;
use std::fmt;

thread_local! {
    static LIVE: Cell<isize> = const { Cell::new(0) };
    static DEFAULTS: Cell<usize> = const { Cell::new(0) };
    static CLONES: Cell<usize> = const { Cell::new(0) };
}

fn bump(counter: &'static std::thread::LocalKey<Cell<isize>>, by: isize) {
    counter.with(|c| c.set(c.get() + by));
}

fn count(counter: &'static std::thread::LocalKey<Cell<usize>>) {
    counter.with(|c| c.set(c.get() + 1));
}

/// An element that counts its live instances.
///
/// Equality and ordering look only at the carried value.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tracked {
    value: u32,
}

impl Tracked {
    pub fn new(value: u32) -> Self {
        bump(&LIVE, 1);
        Self { value }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Instances currently alive on this thread.
    pub fn live() -> isize {
        LIVE.with(Cell::get)
    }

    /// Instances created through `Default` on this thread.
    pub fn defaults() -> usize {
        DEFAULTS.with(Cell::get)
    }

    /// Instances created through `Clone` on this thread.
    pub fn clones() -> usize {
        CLONES.with(Cell::get)
    }
}

impl Default for Tracked {
    fn default() -> Self {
        count(&DEFAULTS);
        Self::new(0)
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        count(&CLONES);
        Self::new(self.value)
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        bump(&LIVE, -1);
    }
}

impl From<u32> for Tracked {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.value)
    }
}

/// Build `Tracked` values from plain numbers.
pub fn tracked(values: &[u32]) -> Vec<Tracked> {
    values.iter().copied().map(Tracked::new).collect()
}

/// Carried values of a slice of `Tracked`.
pub fn values(items: &[Tracked]) -> Vec<u32> {
    items.iter().map(Tracked::value).collect()
}
