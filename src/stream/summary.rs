//! The (mean, stddev, median) result triple

use core::fmt;

use crate::math;

/// Statistics after one observation, ready for output
///
/// Values are stored unrounded; rounding to `precision` decimals happens in
/// [`Summary::rounded`] and in the `Display` impl, which prints
/// `mean,stddev,median`.
///
/// ```
/// use streamstats::stream::StreamCoordinator;
///
/// let mut stream = StreamCoordinator::new();
/// stream.set_precision(3).unwrap();
///
/// stream.observe("1").unwrap();
/// stream.observe("2").unwrap();
/// let summary = stream.observe("3").unwrap();
///
/// assert_eq!(summary.to_string(), "2,0.816,2");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    /// Observations the statistics cover
    pub count: u64,
    /// Running mean
    pub mean: f64,
    /// Running standard deviation
    pub stddev: f64,
    /// Running median
    pub median: f64,
    /// Decimal places used for output
    pub precision: u32,
}

impl Summary {
    /// Mean, standard deviation and median rounded to `precision` decimals
    pub fn rounded(&self) -> (f64, f64, f64) {
        (
            math::round_to(self.mean, self.precision),
            math::round_to(self.stddev, self.precision),
            math::round_to(self.median, self.precision),
        )
    }

    /// Same statistics with a different output precision
    pub fn with_precision(self, precision: u32) -> Self {
        Self { precision, ..self }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (mean, stddev, median) = self.rounded();
        write!(f, "{},{},{}", mean, stddev, median)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Summary {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let (mean, stddev, median) = self.rounded();
        let mut state = serializer.serialize_struct("Summary", 4)?;
        state.serialize_field("count", &self.count)?;
        state.serialize_field("mean", &mean)?;
        state.serialize_field("stddev", &stddev)?;
        state.serialize_field("median", &median)?;
        state.end()
    }
}
