//! Stream coordinator: one owner for moments, median and output precision
//!
//! Every accepted value goes to both accumulators before the result triple
//! is computed, so a summary is never requested with zero observations
//! through [`StreamCoordinator::observe`].
//!
//! # Thread Safety
//!
//! All mutation goes through `&mut self`. To share a coordinator between
//! producers wrap it in `Arc<Mutex<_>>`.

use super::summary::Summary;
use super::token::Token;
use crate::quantiles::StreamingMedian;
use crate::statistics::RunningMoments;
use crate::traits::{check_precision, Statistic, StatsError};

#[cfg(feature = "std")]
use std::string::ToString;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::ToString;

/// Default number of decimals in output
pub const DEFAULT_PRECISION: u32 = 5;

/// Coordinator configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StreamConfig {
    /// Decimal places for every output value
    pub precision: u32,
    /// Delta degrees of freedom for the variance divisor
    pub ddof: u32,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            ddof: 0,
        }
    }
}

/// Running mean, standard deviation and median over a stream
///
/// # Example
///
/// ```
/// use streamstats::stream::StreamCoordinator;
///
/// let mut stream = StreamCoordinator::new();
/// stream.set_precision(3).unwrap();
///
/// let outputs: Vec<String> = ["1", "2", "3", "137.036"]
///     .iter()
///     .map(|raw| stream.observe(raw).unwrap().to_string())
///     .collect();
///
/// assert_eq!(outputs, ["1,0,1", "1.5,0.5,1.5", "2,0.816,2", "35.759,58.477,2.5"]);
///
/// // Garbage is reported and leaves the statistics alone
/// assert!(stream.observe("abc").is_err());
/// assert_eq!(stream.count(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct StreamCoordinator {
    moments: RunningMoments,
    median: StreamingMedian,
    precision: u32,
}

impl Default for StreamCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

impl StreamCoordinator {
    /// Create a coordinator with default configuration
    pub fn new() -> Self {
        Self {
            moments: RunningMoments::new(),
            median: StreamingMedian::new(),
            precision: DEFAULT_PRECISION,
        }
    }

    /// Create a coordinator with the given configuration
    pub fn with_config(config: StreamConfig) -> Self {
        Self {
            moments: RunningMoments::with_ddof(config.ddof),
            median: StreamingMedian::new(),
            precision: config.precision,
        }
    }

    /// Parse a raw token and record it
    ///
    /// Anything that is not a finite real, control words included, is
    /// rejected with [`StatsError::Malformed`] and the state is unchanged.
    pub fn observe(&mut self, raw: &str) -> Result<Summary, StatsError> {
        match Token::parse(raw) {
            Token::Value(v) => self.observe_value(v),
            Token::Malformed(token) => {
                log_debug!("rejected malformed token {:?}", token);
                Err(StatsError::Malformed(token))
            }
            Token::Command(_) => Err(StatsError::Malformed(raw.trim().to_string())),
        }
    }

    /// Record an already-parsed value
    pub fn observe_value(&mut self, value: f64) -> Result<Summary, StatsError> {
        if !value.is_finite() {
            log_debug!("rejected non-finite value {}", value);
            return Err(StatsError::NonFinite(value));
        }

        self.moments.add(value);
        self.median.insert(value);
        log_trace!(
            "observed {} (n={}, mean={}, m2={})",
            value,
            self.moments.len(),
            self.moments.mean(),
            self.moments.m2()
        );

        self.summary()
    }

    /// Current statistics at the configured precision
    ///
    /// Fails with [`StatsError::NoData`] before the first observation.
    pub fn summary(&self) -> Result<Summary, StatsError> {
        self.summary_with_precision(self.precision)
    }

    /// Current statistics at an explicit precision
    ///
    /// Does not change the configured precision.
    pub fn summary_with_precision(&self, precision: u32) -> Result<Summary, StatsError> {
        Ok(Summary {
            count: self.moments.len(),
            mean: self.moments.mean(),
            stddev: self.moments.stddev(),
            median: self.median.median()?,
            precision,
        })
    }

    /// Drop all recorded observations
    ///
    /// Precision and ddof are configuration and survive the reset.
    pub fn reset(&mut self) {
        log_debug!("reset after {} observations", self.moments.len());
        self.moments.clear();
        self.median.clear();
    }

    /// Change the output precision
    ///
    /// Negative values (or values beyond `u32`) are rejected and the previous
    /// precision stays in effect. Precision past what an `f64` resolves
    /// prints the value unrounded.
    pub fn set_precision(&mut self, precision: i64) -> Result<(), StatsError> {
        match check_precision(precision) {
            Ok(p) => {
                log_debug!("precision {} -> {}", self.precision, p);
                self.precision = p;
                Ok(())
            }
            Err(e) => {
                log_warn!("{}", e);
                Err(e)
            }
        }
    }

    /// Configured output precision
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Current configuration
    pub fn config(&self) -> StreamConfig {
        StreamConfig {
            precision: self.precision,
            ddof: self.moments.ddof(),
        }
    }

    /// Number of observations recorded since creation or the last reset
    pub fn count(&self) -> u64 {
        self.moments.len()
    }

    /// Check if nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// The moment accumulator
    pub fn moments(&self) -> &RunningMoments {
        &self.moments
    }

    /// The median structure
    pub fn median_state(&self) -> &StreamingMedian {
        &self.median
    }

    /// Memory used by the accumulated state
    pub fn size_bytes(&self) -> usize {
        self.moments.size_bytes() + self.median.size_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(stream: &mut StreamCoordinator, values: &[&str]) -> Vec<String> {
        values
            .iter()
            .map(|raw| stream.observe(raw).unwrap().to_string())
            .collect()
    }

    // ---- Basic functionality ----

    #[test]
    fn test_known_sequence() {
        let mut stream = StreamCoordinator::new();
        stream.set_precision(3).unwrap();

        assert_eq!(
            feed(&mut stream, &["1", "2", "3", "137.036"]),
            ["1,0,1", "1.5,0.5,1.5", "2,0.816,2", "35.759,58.477,2.5"]
        );
    }

    #[test]
    fn test_default_precision() {
        let mut stream = StreamCoordinator::new();
        assert_eq!(stream.precision(), DEFAULT_PRECISION);
        assert_eq!(feed(&mut stream, &["1", "2", "3"])[2], "2,0.8165,2");
    }

    #[test]
    fn test_summary_before_data() {
        let stream = StreamCoordinator::new();
        assert!(stream.is_empty());
        assert_eq!(stream.summary(), Err(StatsError::NoData));
    }

    // ---- Malformed input ----

    #[test]
    fn test_malformed_leaves_state() {
        let mut stream = StreamCoordinator::new();
        feed(&mut stream, &["4", "8"]);
        let before = stream.summary().unwrap();

        for raw in ["", "abc", "inf", "nan", "reset", "precision 2"] {
            assert!(matches!(stream.observe(raw), Err(StatsError::Malformed(_))));
        }

        assert_eq!(stream.summary().unwrap(), before);
        assert_eq!(stream.count(), 2);
    }

    #[test]
    fn test_observe_value_rejects_non_finite() {
        let mut stream = StreamCoordinator::new();
        assert!(matches!(
            stream.observe_value(f64::NAN),
            Err(StatsError::NonFinite(_))
        ));
        assert_eq!(
            stream.observe_value(f64::NEG_INFINITY),
            Err(StatsError::NonFinite(f64::NEG_INFINITY))
        );
        assert!(stream.is_empty());
    }

    #[test]
    fn test_extreme_magnitudes_stay_finite() {
        let mut stream = StreamCoordinator::new();
        stream.observe_value(f64::MAX).unwrap();
        let summary = stream.observe_value(f64::MAX).unwrap();
        assert_eq!(summary.mean, f64::MAX);
        assert_eq!(summary.stddev, 0.0);
        assert_eq!(summary.median, f64::MAX);

        stream.reset();
        stream.observe("1e308").unwrap();
        let summary = stream.observe("-1e308").unwrap();
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert!(!summary.stddev.is_nan());
    }

    // ---- Precision ----

    #[test]
    fn test_precision_change_mid_stream() {
        let mut stream = StreamCoordinator::new();
        stream.set_precision(3).unwrap();
        feed(&mut stream, &["1", "2"]);

        stream.set_precision(2).unwrap();
        let step3 = stream.observe("3").unwrap();
        assert_eq!(step3.to_string(), "2,0.82,2");

        let wide = stream.summary_with_precision(5).unwrap();
        assert_eq!(wide.to_string(), "2,0.8165,2");
        assert_eq!(stream.precision(), 2);
    }

    #[test]
    fn test_invalid_precision_keeps_previous() {
        let mut stream = StreamCoordinator::new();
        stream.set_precision(4).unwrap();

        assert_eq!(stream.set_precision(-1), Err(StatsError::InvalidPrecision(-1)));
        assert_eq!(
            stream.set_precision(i64::MAX),
            Err(StatsError::InvalidPrecision(i64::MAX))
        );
        assert_eq!(stream.precision(), 4);
    }

    #[test]
    fn test_precision_beyond_f64_resolution() {
        let mut stream = StreamCoordinator::new();
        stream.set_precision(16).unwrap();
        stream.set_precision(20).unwrap();
        assert_eq!(stream.precision(), 20);

        feed(&mut stream, &["1", "2"]);
        let summary = stream.observe("3").unwrap();
        let unrounded = format!("{},{},{}", summary.mean, summary.stddev, summary.median);
        assert_eq!(summary.to_string(), unrounded);
        assert_eq!(summary.to_string(), format!("2,{},2", (2.0f64 / 3.0).sqrt()));
    }

    // ---- Reset ----

    #[test]
    fn test_reset_matches_fresh() {
        let mut stream = StreamCoordinator::new();
        feed(&mut stream, &["1", "2", "3"]);
        stream.reset();
        let after_reset = stream.observe("5").unwrap();

        let mut fresh = StreamCoordinator::new();
        assert_eq!(after_reset, fresh.observe("5").unwrap());
        assert_eq!(after_reset.to_string(), "5,0,5");
    }

    #[test]
    fn test_reset_keeps_config() {
        let config = StreamConfig {
            precision: 2,
            ddof: 1,
        };
        let mut stream = StreamCoordinator::with_config(config);
        feed(&mut stream, &["1", "2"]);
        stream.reset();
        stream.reset();

        assert!(stream.is_empty());
        assert_eq!(stream.config(), config);
        assert!(stream.median_state().is_empty());
    }

    // ---- Configuration ----

    #[test]
    fn test_with_config_large_precision() {
        let config = StreamConfig {
            precision: 40,
            ddof: 0,
        };
        let mut stream = StreamCoordinator::with_config(config);
        assert_eq!(stream.config(), config);
        assert_eq!(stream.observe("0.1").unwrap().to_string(), "0.1,0,0.1");
    }

    #[test]
    fn test_sample_stddev() {
        let config = StreamConfig {
            precision: 4,
            ddof: 1,
        };
        let mut stream = StreamCoordinator::with_config(config);
        // First value: count <= ddof, reported as 0
        assert_eq!(stream.observe("1").unwrap().to_string(), "1,0,1");
        assert_eq!(stream.observe("3").unwrap().to_string(), "2,1.4142,2");
    }
}
