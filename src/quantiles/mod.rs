//! Exact running median
//!
//! - [`StreamingMedian`]: two-heap median with O(log n) insert, O(1) query
//! - [`BinaryHeap`]: the array-backed heap both halves are built on
//!
//! # Example
//!
//! ```
//! use streamstats::quantiles::StreamingMedian;
//!
//! let mut median = StreamingMedian::new();
//!
//! for value in [5.0, 1.0, 4.0, 2.0, 3.0] {
//!     median.insert(value);
//! }
//!
//! assert_eq!(median.median(), Ok(3.0));
//! ```

mod heap;
mod median;

pub use heap::{BinaryHeap, HeapOrder};
pub use median::StreamingMedian;
