//! # Streamstats
//!
//! Exact running statistics over a stream of numbers.
//!
//! After every observation streamstats reports the running mean, standard
//! deviation and median without rescanning earlier data:
//!
//! - **Moments**: Welford's online algorithm, O(1) per value
//! - **Median**: two balanced heaps, O(log n) per value, O(1) lookup
//! - **Stream coordination**: token parsing, reset, output precision
//!
//! The median is exact, so every accepted value is kept (O(n) memory).
//!
//! ## Quick Start
//!
//! ```rust
//! use streamstats::prelude::*;
//!
//! let mut stream = StreamCoordinator::new();
//! stream.set_precision(3).unwrap();
//!
//! for raw in ["1", "2", "3"] {
//!     stream.observe(raw).unwrap();
//! }
//!
//! let summary = stream.observe("137.036").unwrap();
//! assert_eq!(summary.to_string(), "35.759,58.477,2.5");
//! ```
//!
//! ## Feature Flags
//!
//! Algorithm families:
//! - `statistics` (default): running mean and variance
//! - `quantiles` (default): exact streaming median
//! - `stream` (default): coordinator, tokens and sessions
//! - `full`: everything above plus `serde` and `log`
//!
//! Platform features:
//! - `std` (default): Standard library support
//! - `serde`: Enable serialization
//! - `log`: Emit diagnostics through the `log` facade
//! - `cli` (default): the `streamstats` binary

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[macro_use]
mod fmt;

#[allow(dead_code)]
mod math;

// Core traits always available
pub mod traits;

#[cfg(feature = "statistics")]
#[cfg_attr(docsrs, doc(cfg(feature = "statistics")))]
pub mod statistics;

#[cfg(feature = "quantiles")]
#[cfg_attr(docsrs, doc(cfg(feature = "quantiles")))]
pub mod quantiles;

#[cfg(feature = "stream")]
#[cfg_attr(docsrs, doc(cfg(feature = "stream")))]
pub mod stream;

pub mod prelude {
    pub use crate::traits::*;

    #[cfg(feature = "statistics")]
    pub use crate::statistics::RunningMoments;

    #[cfg(feature = "quantiles")]
    pub use crate::quantiles::StreamingMedian;

    #[cfg(feature = "stream")]
    pub use crate::stream::{Response, Session, StreamConfig, StreamCoordinator, Summary, Token};
}

pub use traits::{Statistic, StatsError};

#[cfg(feature = "statistics")]
pub use statistics::RunningMoments;

#[cfg(feature = "quantiles")]
pub use quantiles::StreamingMedian;

#[cfg(feature = "stream")]
pub use stream::StreamCoordinator;
