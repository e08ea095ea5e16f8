#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod heap;

use heap::{MaxHeap, MinHeap};

/// Failures surfaced by [`MedianHeap`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The median of an empty stream is undefined
    #[error("median heap is empty")]
    Empty,
}

/// Running median of a stream of integers
///
/// The [`Self::new`] constructor creates the structure in an empty state.
/// Values are folded in with [`Self::insert`], and the current median can
/// be read at any time with [`Self::median`].
///
/// Internally the observed values are split between two heaps: a max-heap
/// holding the lower half of the stream and a min-heap holding the upper
/// half. After every insertion the halves differ in size by at most one
/// element, so the median is always sitting at one root or the other.
///
/// The structure assumes one logical caller. Concurrent producers must
/// wrap the whole structure in a single lock, since an insertion may touch
/// both halves.
#[derive(Debug, Clone, Default)]
pub struct MedianHeap {
    /// Lower half of the stream; its root is the largest of those values
    lower: MaxHeap<i64>,
    /// Upper half of the stream; its root is the smallest of those values
    upper: MinHeap<i64>,
}

impl MedianHeap {
    /// Constructs a new [`Self`] with no values observed
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of values inserted so far
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Whether no values have been inserted yet
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty() && self.upper.is_empty()
    }

    /// Folds `value` into the stream, updating the running median
    ///
    /// The first two values seed the lower half unconditionally. After
    /// that, `value` is routed by comparison against the lower half's
    /// root, and a single root is moved across whenever the halves drift
    /// more than one element apart.
    ///
    /// O(log n).
    pub fn insert(&mut self, value: i64) {
        // Seed the lower half before the routing comparison has a
        // meaningful root to work with
        if self.lower.len() < 2 {
            self.lower.push(value);
            return;
        }

        if self.lower.peek().is_some_and(|top| *top >= value) {
            self.lower.push(value);
        } else {
            self.upper.push(value);
        }

        self.rebalance();
    }

    /// The median of all values inserted so far
    ///
    /// With the halves at unequal sizes this is the root of the larger
    /// half. With the halves at equal sizes it is the mean of the two
    /// roots, truncated by integer division. Fails with [`Error::Empty`]
    /// when nothing has been inserted.
    ///
    /// O(1), no side effects.
    pub fn median(&self) -> Result<i64, Error> {
        use std::cmp::Ordering;

        match self.lower.len().cmp(&self.upper.len()) {
            Ordering::Greater => self.lower.peek().copied().ok_or(Error::Empty),
            Ordering::Less => self.upper.peek().copied().ok_or(Error::Empty),
            Ordering::Equal => match (self.lower.peek(), self.upper.peek()) {
                (Some(&lo), Some(&hi)) => Ok((lo + hi) / 2),
                _ => Err(Error::Empty),
            },
        }
    }

    /// Restores the size bound between the halves after an insertion
    ///
    /// A single insertion can push the sizes at most one step past
    /// balanced, so at most one element moves.
    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(v) = self.lower.pop() {
                #[cfg(feature = "log")]
                log::trace!("moving {v} from the lower to the upper half");

                self.upper.push(v);
            }
        } else if self.upper.len() > self.lower.len() + 1 {
            if let Some(v) = self.upper.pop() {
                #[cfg(feature = "log")]
                log::trace!("moving {v} from the upper to the lower half");

                self.lower.push(v);
            }
        }
    }
}
