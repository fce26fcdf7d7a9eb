//! Core traits and error types shared by the streaming accumulators
//!
//! Both accumulators implement [`Statistic`]; the error type [`StatsError`]
//! covers every recoverable failure the crate reports.

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Errors reported by the statistics engine
///
/// None of these are fatal: the stream keeps going and the accumulated
/// state is left as it was before the failing call.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// Token does not parse as a finite real number
    Malformed(String),
    /// A value was NaN or infinite
    NonFinite(f64),
    /// A median or summary was requested before any observation
    NoData,
    /// Precision that is negative or does not fit in a `u32`
    InvalidPrecision(i64),
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::Malformed(token) => write!(f, "malformed input: {:?}", token),
            StatsError::NonFinite(v) => write!(f, "non-finite value: {}", v),
            StatsError::NoData => write!(f, "no data: at least one observation is required"),
            StatsError::InvalidPrecision(p) => {
                write!(f, "invalid precision {}: expected a non-negative integer", p)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

impl StatsError {
    /// Whether this error came from bad input rather than from API misuse
    pub fn is_input_error(&self) -> bool {
        matches!(self, StatsError::Malformed(_) | StatsError::NonFinite(_))
    }
}

/// Core trait for exact streaming statistics
///
/// Implementors accept one `f64` at a time and never rescan prior data.
pub trait Statistic: Clone + Debug {
    /// Add an observation
    ///
    /// Non-finite values are ignored.
    fn update(&mut self, value: f64);

    /// Reset to the empty state, keeping configuration
    fn clear(&mut self);

    /// Memory usage in bytes, including heap allocations
    fn size_bytes(&self) -> usize;

    /// Number of observations recorded
    fn count(&self) -> u64;

    /// Check if nothing has been recorded yet
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}

/// Validate a requested precision
///
/// Accepts a signed value so callers can pass user input straight through
/// and get a [`StatsError::InvalidPrecision`] for negatives.
pub fn check_precision(precision: i64) -> Result<u32, StatsError> {
    u32::try_from(precision).map_err(|_| StatsError::InvalidPrecision(precision))
}
