//! Running moments (count, mean, variance)
//!
//! Computes streaming statistics using Welford's numerically stable online algorithm.

use crate::math;
use crate::traits::Statistic;

/// Running mean and variance using Welford's algorithm
///
/// Keeps O(1) state no matter how long the stream is, and avoids the
/// catastrophic cancellation of the naive sum / sum-of-squares formulas.
///
/// The variance divisor is `count - ddof`. With the default `ddof = 0`
/// this is the population variance; `ddof = 1` gives the sample variance.
///
/// # Example
///
/// ```
/// use streamstats::statistics::RunningMoments;
///
/// let mut moments = RunningMoments::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     moments.add(value);
/// }
///
/// assert!((moments.mean() - 5.0).abs() < 0.001);
/// assert!((moments.variance() - 4.0).abs() < 0.001);
/// assert!((moments.stddev() - 2.0).abs() < 0.001);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunningMoments {
    /// Number of values seen
    count: u64,
    /// Running mean
    mean: f64,
    /// Sum of squared differences from mean (M2 in Welford's algorithm)
    m2: f64,
    /// Delta degrees of freedom
    ddof: u32,
}

impl Default for RunningMoments {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningMoments {
    /// Create a new empty accumulator reporting population variance
    pub fn new() -> Self {
        Self::with_ddof(0)
    }

    /// Create a new empty accumulator with the given delta degrees of freedom
    pub fn with_ddof(ddof: u32) -> Self {
        Self {
            count: 0,
            mean: 0.0,
            m2: 0.0,
            ddof,
        }
    }

    /// Return the state after observing `value`, leaving `self` untouched
    ///
    /// Non-finite values are not counted and the state comes back unchanged.
    #[must_use]
    pub fn updated(self, value: f64) -> Self {
        if !value.is_finite() {
            return self;
        }

        let count = self.count + 1;
        // delta / 2, computed so that values of opposite sign near f64::MAX
        // cannot overflow; scaling by 2 is exact otherwise
        let half_delta = value / 2.0 - self.mean / 2.0;
        let mean = self.mean + half_delta / count as f64 * 2.0;
        let delta2 = value - mean;

        Self {
            count,
            mean,
            m2: self.m2 + 2.0 * half_delta * delta2,
            ddof: self.ddof,
        }
    }

    /// Add a value in place
    pub fn add(&mut self, value: f64) {
        *self = self.updated(value);
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get the mean, 0 when empty
    pub fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.mean
        }
    }

    /// Sum of squared deviations from the mean
    pub fn m2(&self) -> f64 {
        self.m2
    }

    /// Delta degrees of freedom used by [`variance`](Self::variance)
    pub fn ddof(&self) -> u32 {
        self.ddof
    }

    /// Get the variance with divisor `count - ddof`
    ///
    /// Returns 0 while `count <= ddof`, including the empty state.
    pub fn variance(&self) -> f64 {
        if self.count <= self.ddof as u64 {
            0.0
        } else {
            self.m2 / (self.count - self.ddof as u64) as f64
        }
    }

    /// Get the standard deviation
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }
}

impl Statistic for RunningMoments {
    fn update(&mut self, value: f64) {
        self.add(value);
    }

    fn clear(&mut self) {
        *self = Self::with_ddof(self.ddof);
    }

    fn size_bytes(&self) -> usize {
        core::mem::size_of::<Self>()
    }

    fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for RunningMoments {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("RunningMoments", 4)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &self.mean)?;
        state.serialize_field("m2", &self.m2)?;
        state.serialize_field("ddof", &self.ddof)?;
        state.end()
    }
}
