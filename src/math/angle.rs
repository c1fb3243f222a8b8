use std::f32::consts::TAU;

use tracing::debug;

use super::{Vector3, DEGREES_PER_RADIAN, RADIANS_PER_DEGREE};
use crate::error::{GeometryError, Result};

/// Wraps `value` into `[0, high)` using a floored modulo.
///
/// A zero `high` leaves no range to wrap into and yields `0.0`.
/// Use [`checked_wrap_around`] to have that case reported instead.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn wrap_around(value: f32, high: f32) -> f32 {
    if high == 0.0 {
        debug!(value, "wrap_around called with a zero range");
        return 0.0;
    }

    let mut wrapped = value - high * (value / high).floor();

    // Rounding can land a hair outside the half-open range.
    if high > 0.0 {
        if wrapped < 0.0 {
            wrapped += high;
        }
        if wrapped >= high {
            wrapped = 0.0;
        }
    }
    wrapped
}

/// Wraps `value` into `[0, high)`, reporting a degenerate range.
///
/// # Errors
///
/// Returns `GeometryError::ZeroRange` if `high` is zero and
/// `GeometryError::Degenerate` if it is not finite.
#[allow(clippy::float_cmp)]
pub fn checked_wrap_around(value: f32, high: f32) -> Result<f32> {
    if high == 0.0 {
        return Err(GeometryError::ZeroRange {
            quantity: "wrap range",
        }
        .into());
    }
    if !high.is_finite() {
        return Err(GeometryError::Degenerate(format!("wrap range {high} is not finite")).into());
    }
    Ok(wrap_around(value, high))
}

/// Converts an angle in radians to degrees in `[0, 360)`.
#[must_use]
pub fn radians_to_degrees(radians: f32) -> f32 {
    wrap_around(radians * DEGREES_PER_RADIAN + 360.0, 360.0)
}

/// Converts an angle in degrees to radians in `[0, 2π)`.
#[must_use]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    wrap_around(degrees * RADIANS_PER_DEGREE + TAU, TAU)
}

/// Component-wise [`radians_to_degrees`] for a rotation vector.
#[must_use]
pub fn radians_to_degrees_vec(rotation: &Vector3) -> Vector3 {
    rotation.map(radians_to_degrees)
}

/// Component-wise [`degrees_to_radians`] for a rotation vector.
#[must_use]
pub fn degrees_to_radians_vec(rotation: &Vector3) -> Vector3 {
    rotation.map(degrees_to_radians)
}

/// Returns the signed offset from heading `a` to heading `b`, in degrees.
///
/// The result lies in `(-180, 180]`, so a positive value means `b` is
/// reached from `a` by turning through increasing angles.
#[must_use]
pub fn offset_degrees(a: f32, b: f32) -> f32 {
    let mut offset = b - a;

    if offset > 180.0 {
        offset -= 360.0;
    } else if offset <= -180.0 {
        offset += 360.0;
    }

    // Inputs more than a full turn apart need a real modulo.
    if offset > 180.0 || offset <= -180.0 {
        offset = 180.0 - wrap_around(180.0 - offset, 360.0);
    }
    offset
}

/// Component-wise [`offset_degrees`] between two rotation vectors.
#[must_use]
pub fn offset_degrees_vec(a: &Vector3, b: &Vector3) -> Vector3 {
    a.zip_map(b, offset_degrees)
}
