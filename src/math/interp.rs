use std::ops::{Add, Mul, Sub};

use tracing::debug;

use crate::error::{GeometryError, Result};

/// Linear interpolation: `start + (end - start) * alpha`.
///
/// Works for scalars and for the nalgebra vector types. `alpha` is not
/// clamped, so values outside `[0, 1]` extrapolate.
#[must_use]
pub fn lerp<T>(start: T, alpha: f32, end: T) -> T
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    start + (end - start) * alpha
}

/// Bounds `value` to `[min, max]`.
///
/// The caller is expected to pass `min <= max`. Otherwise the lower bound
/// is checked first, so any value below `min` returns `min` and any other
/// value above `max` returns `max`.
#[must_use]
pub fn clamp<T: PartialOrd>(min: T, value: T, max: T) -> T {
    if value < min {
        return min;
    }
    if value > max {
        return max;
    }
    value
}

/// Returns the relative position of `pos` between `start` and `end`.
///
/// `0.0` at `start`, `1.0` at `end`. Equal bounds return `1.0` instead of
/// dividing by zero.
#[must_use]
#[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
pub fn unlerp(start: f64, pos: f64, end: f64) -> f32 {
    if start == end {
        debug!(start, pos, "unlerp over an empty range");
        return 1.0;
    }
    ((pos - start) / (end - start)) as f32
}

/// [`unlerp`] clamped to `[0, 1]`, so positions outside the bounds do not
/// extrapolate.
#[must_use]
pub fn unlerp_clamped(start: f64, pos: f64, end: f64) -> f32 {
    clamp(0.0, unlerp(start, pos, end), 1.0)
}

/// [`unlerp`] that reports equal bounds instead of returning `1.0`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroRange` if `start == end`.
#[allow(clippy::float_cmp)]
pub fn checked_unlerp(start: f64, pos: f64, end: f64) -> Result<f32> {
    if start == end {
        return Err(GeometryError::ZeroRange {
            quantity: "interpolation range",
        }
        .into());
    }
    Ok(unlerp(start, pos, end))
}
