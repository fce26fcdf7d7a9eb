//! Array-backed binary heap over `f64`
//!
//! A plain `Vec<f64>` with explicit sift-up/sift-down. The orientation is
//! chosen at construction so the same type serves as the max-heap holding
//! the lower half of a stream and the min-heap holding the upper half.
//!
//! Values are compared with [`f64::total_cmp`]; callers are expected to feed
//! finite values only.

use core::cmp::Ordering;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Which element sits at the root
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeapOrder {
    /// Largest value at the root
    Max,
    /// Smallest value at the root
    Min,
}

impl HeapOrder {
    /// True if `a` belongs strictly above `b` in a heap of this order
    #[inline]
    fn above(self, a: f64, b: f64) -> bool {
        match self {
            HeapOrder::Max => a.total_cmp(&b) == Ordering::Greater,
            HeapOrder::Min => a.total_cmp(&b) == Ordering::Less,
        }
    }
}

/// Binary heap stored as an implicit tree in a vector
///
/// Children of slot `i` live at `2i + 1` and `2i + 2`.
///
/// # Example
///
/// ```
/// use streamstats::quantiles::{BinaryHeap, HeapOrder};
///
/// let mut heap = BinaryHeap::new(HeapOrder::Max);
/// heap.push(3.0);
/// heap.push(7.0);
/// heap.push(1.0);
///
/// assert_eq!(heap.peek(), Some(7.0));
/// assert_eq!(heap.pop(), Some(7.0));
/// assert_eq!(heap.peek(), Some(3.0));
/// ```
#[derive(Clone, Debug)]
pub struct BinaryHeap {
    data: Vec<f64>,
    order: HeapOrder,
}

impl BinaryHeap {
    /// Create an empty heap
    pub fn new(order: HeapOrder) -> Self {
        Self {
            data: Vec::new(),
            order,
        }
    }

    /// Create an empty heap with room for `capacity` values
    pub fn with_capacity(order: HeapOrder, capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            order,
        }
    }

    /// Orientation of this heap
    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Root value without removing it
    pub fn peek(&self) -> Option<f64> {
        self.data.first().copied()
    }

    /// Insert a value, O(log n)
    pub fn push(&mut self, value: f64) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Remove and return the root, O(log n)
    pub fn pop(&mut self) -> Option<f64> {
        if self.data.is_empty() {
            return None;
        }
        let root = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(root)
    }

    /// Drop all values, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Underlying storage in heap order (not sorted)
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Allocated capacity in elements
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Check the heap property over every parent/child pair
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| !self.order.above(self.data[i], self.data[(i - 1) / 2]))
    }

    fn sift_up(&mut self, mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if !self.order.above(self.data[idx], self.data[parent]) {
                break;
            }
            self.data.swap(idx, parent);
            idx = parent;
        }
    }

    fn sift_down(&mut self, mut idx: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * idx + 1;
            let right = left + 1;
            let mut top = idx;

            if left < len && self.order.above(self.data[left], self.data[top]) {
                top = left;
            }
            if right < len && self.order.above(self.data[right], self.data[top]) {
                top = right;
            }
            if top == idx {
                break;
            }
            self.data.swap(idx, top);
            idx = top;
        }
    }
}
