//! Math function wrappers for std/no_std compatibility
//!
//! Uses standard library math when available, falls back to libm for no_std.

#[cfg(feature = "std")]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    x.sqrt()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn sqrt(x: f64) -> f64 {
    libm::sqrt(x)
}

/// Round half away from zero
#[cfg(feature = "std")]
#[inline]
pub fn round(x: f64) -> f64 {
    x.round()
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn round(x: f64) -> f64 {
    libm::round(x)
}

#[cfg(feature = "std")]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    x.powi(n)
}

#[cfg(not(feature = "std"))]
#[inline]
pub fn powi(x: f64, n: i32) -> f64 {
    libm::pow(x, n as f64)
}

/// Every `f64` at or above 2^52 is an integer
const INTEGRAL_THRESHOLD: f64 = 4_503_599_627_370_496.0;

/// Round `x` to `decimals` places after the point
///
/// Returns `x` untouched once `x * 10^decimals` has no fractional bits left
/// (or overflows): the requested decimals are below `f64` resolution and
/// rounding would only add representation error.
pub fn round_to(x: f64, decimals: u32) -> f64 {
    // 10^400 is already infinite
    let scale = powi(10.0, decimals.min(400) as i32);
    let scaled = x * scale;
    if !scaled.is_finite() || scaled.abs() >= INTEGRAL_THRESHOLD {
        return x;
    }
    let rounded = round(scaled) / scale;
    // -0.0 prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}
