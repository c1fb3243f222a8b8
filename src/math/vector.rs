use tracing::debug;

use super::{Vector3, DEGREES_PER_RADIAN, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Length of `v` projected onto the XY plane. The z component is ignored.
#[must_use]
pub fn vector_length(v: &Vector3) -> f32 {
    (v.x * v.x + v.y * v.y).sqrt()
}

/// Dot product of `a` and `b` projected onto the XY plane.
#[must_use]
pub fn dot_product(a: &Vector3, b: &Vector3) -> f32 {
    a.x * b.x + a.y * b.y
}

/// Returns the angle in degrees, in `[0, 180]`, between the position
/// vectors `(x1, y1)` and `(x2, y2)`.
///
/// Both vectors are measured from the coordinate origin, not from a shared
/// vertex. The cosine is clamped to `[-1, 1]` before `acos`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if either point is the origin.
#[allow(clippy::cast_precision_loss)]
pub fn angle_between_points(x1: i32, y1: i32, x2: i32, y2: i32) -> Result<f32> {
    let v1 = Vector3::new(x1 as f32, y1 as f32, 0.0);
    let v2 = Vector3::new(x2 as f32, y2 as f32, 0.0);

    let lengths = vector_length(&v1) * vector_length(&v2);
    if lengths < TOLERANCE {
        debug!(x1, y1, x2, y2, "angle requested against a zero-length vector");
        return Err(GeometryError::ZeroVector.into());
    }

    let cos = (dot_product(&v1, &v2) / lengths).clamp(-1.0, 1.0);
    Ok(cos.acos() * DEGREES_PER_RADIAN)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::error::WorldMathError;

    const TOL: f32 = 1e-3;

    #[test]
    fn length_ignores_z() {
        assert_abs_diff_eq!(vector_length(&Vector3::new(3.0, 4.0, 100.0)), 5.0, epsilon = 1e-6);
    }

    #[test]
    fn dot_ignores_z() {
        let a = Vector3::new(1.0, 2.0, 50.0);
        let b = Vector3::new(3.0, -1.0, 50.0);
        assert_abs_diff_eq!(dot_product(&a, &b), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn angle_perpendicular_axes() {
        assert_abs_diff_eq!(angle_between_points(1, 0, 0, 1).unwrap(), 90.0, epsilon = TOL);
        assert_abs_diff_eq!(angle_between_points(0, 5, -3, 0).unwrap(), 90.0, epsilon = TOL);
    }

    #[test]
    fn angle_parallel_and_opposite() {
        // acos is steep near 1, so f32 rounding in the lengths shows up here.
        assert_abs_diff_eq!(angle_between_points(2, 2, 7, 7).unwrap(), 0.0, epsilon = 0.05);
        assert_abs_diff_eq!(angle_between_points(1, 0, -4, 0).unwrap(), 180.0, epsilon = TOL);
    }

    #[test]
    fn angle_is_unsigned() {
        let a = angle_between_points(1, 0, 1, 1).unwrap();
        let b = angle_between_points(1, 0, 1, -1).unwrap();
        assert_abs_diff_eq!(a, 45.0, epsilon = TOL);
        assert_abs_diff_eq!(a, b, epsilon = TOL);
    }

    #[test]
    fn angle_large_collinear_coordinates_stay_finite() {
        let a = angle_between_points(46_341, 46_341, 92_682, 92_682).unwrap();
        assert!(a.is_finite());
        assert_abs_diff_eq!(a, 0.0, epsilon = 0.1);
    }

    #[test]
    fn angle_against_origin_is_an_error() {
        let err = angle_between_points(0, 0, 3, 4).unwrap_err();
        assert!(matches!(err, WorldMathError::Geometry(GeometryError::ZeroVector)));
        assert!(angle_between_points(3, 4, 0, 0).is_err());
    }
}
