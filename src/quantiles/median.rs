//! Exact running median over two heaps
//!
//! The lower half of the stream lives in a max-heap and the upper half in a
//! min-heap. After every insertion:
//!
//! - the lower half holds as many values as the upper half, or one more;
//! - every value in the lower half is `<=` every value in the upper half.
//!
//! So the median is always at one or both roots.
//!
//! # Memory
//!
//! Every accepted value is retained, O(n) in total. Insertion is O(log n)
//! and the median lookup is O(1).

use super::heap::{BinaryHeap, HeapOrder};
use crate::traits::{Statistic, StatsError};

/// Exact streaming median
///
/// # Example
///
/// ```
/// use streamstats::quantiles::StreamingMedian;
///
/// let mut median = StreamingMedian::new();
///
/// median.insert(1.0);
/// assert_eq!(median.median(), Ok(1.0));
///
/// median.insert(2.0);
/// assert_eq!(median.median(), Ok(1.5));
///
/// median.insert(137.036);
/// assert_eq!(median.median(), Ok(2.0));
/// ```
#[derive(Clone, Debug)]
pub struct StreamingMedian {
    /// Values <= median, largest at the root
    lower: BinaryHeap,
    /// Values >= median, smallest at the root
    upper: BinaryHeap,
}

impl Default for StreamingMedian {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamingMedian {
    /// Create an empty median tracker
    pub fn new() -> Self {
        Self {
            lower: BinaryHeap::new(HeapOrder::Max),
            upper: BinaryHeap::new(HeapOrder::Min),
        }
    }

    /// Record a value
    ///
    /// Non-finite values are ignored.
    pub fn insert(&mut self, value: f64) {
        if !value.is_finite() {
            return;
        }

        match self.lower.peek() {
            Some(top) if value > top => self.upper.push(value),
            _ => self.lower.push(value),
        }
        self.rebalance();
    }

    fn rebalance(&mut self) {
        if self.lower.len() > self.upper.len() + 1 {
            if let Some(v) = self.lower.pop() {
                self.upper.push(v);
            }
        } else if self.upper.len() > self.lower.len() {
            if let Some(v) = self.upper.pop() {
                self.lower.push(v);
            }
        }
    }

    /// Current median
    ///
    /// For an even number of values this is the mean of the two central
    /// order statistics. Fails with [`StatsError::NoData`] when empty.
    pub fn median(&self) -> Result<f64, StatsError> {
        match (self.lower.peek(), self.upper.peek()) {
            (Some(lo), Some(hi)) if self.lower.len() == self.upper.len() => {
                // halve first so two huge roots cannot overflow
                Ok(lo / 2.0 + hi / 2.0)
            }
            (Some(lo), _) => Ok(lo),
            (None, _) => Err(StatsError::NoData),
        }
    }

    /// Largest value in the lower half
    pub fn lower_max(&self) -> Option<f64> {
        self.lower.peek()
    }

    /// Smallest value in the upper half
    pub fn upper_min(&self) -> Option<f64> {
        self.upper.peek()
    }

    /// Sizes of the lower and upper halves
    pub fn half_sizes(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }

    /// Number of values recorded
    pub fn len(&self) -> usize {
        self.lower.len() + self.upper.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Check size balance and ordering between the halves, plus the heap
    /// property inside each one
    pub fn is_balanced(&self) -> bool {
        let sizes_ok = self.lower.len() >= self.upper.len()
            && self.lower.len() - self.upper.len() <= 1;
        let order_ok = match (self.lower.peek(), self.upper.peek()) {
            (Some(lo), Some(hi)) => lo <= hi,
            _ => true,
        };
        sizes_ok && order_ok && self.lower.is_valid() && self.upper.is_valid()
    }
}

impl Statistic for StreamingMedian {
    fn update(&mut self, value: f64) {
        self.insert(value);
    }

    fn clear(&mut self) {
        self.lower.clear();
        self.upper.clear();
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
            + (self.lower.capacity() + self.upper.capacity()) * core::mem::size_of::<f64>()
    }

    fn count(&self) -> u64 {
        self.len() as u64
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for StreamingMedian {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("StreamingMedian", 2)?;
        state.serialize_field("lower", self.lower.as_slice())?;
        state.serialize_field("upper", self.upper.as_slice())?;
        state.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
