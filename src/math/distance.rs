use super::Vector3;

/// Returns the distance between `(x, y)` and `(xx, yy)`.
#[must_use]
pub fn distance_2d(x: f32, y: f32, xx: f32, yy: f32) -> f32 {
    let dx = xx - x;
    let dy = yy - y;
    (dx * dx + dy * dy).sqrt()
}

/// Returns the distance between `(x, y, z)` and `(xx, yy, zz)`.
#[must_use]
pub fn distance_3d(x: f32, y: f32, z: f32, xx: f32, yy: f32, zz: f32) -> f32 {
    let dx = xx - x;
    let dy = yy - y;
    let dz = zz - z;
    (dx * dx + dy * dy + dz * dz).sqrt()
}

/// Returns the distance between two world positions.
#[must_use]
pub fn distance_between(a: &Vector3, b: &Vector3) -> f32 {
    distance_3d(a.x, a.y, a.z, b.x, b.y, b.z)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const TOL: f32 = 1e-6;

    #[test]
    fn distance_2d_pythagorean() {
        assert_abs_diff_eq!(distance_2d(0.0, 0.0, 3.0, 4.0), 5.0, epsilon = TOL);
        assert_abs_diff_eq!(distance_2d(1.0, 1.0, -2.0, -3.0), 5.0, epsilon = TOL);
    }

    #[test]
    fn distance_2d_same_point_is_zero() {
        assert_abs_diff_eq!(distance_2d(7.5, -2.0, 7.5, -2.0), 0.0, epsilon = TOL);
    }

    #[test]
    fn distance_3d_basic() {
        assert_abs_diff_eq!(distance_3d(0.0, 0.0, 0.0, 2.0, 3.0, 6.0), 7.0, epsilon = TOL);
        assert_abs_diff_eq!(distance_3d(1.0, 2.0, 3.0, 1.0, 2.0, 3.0), 0.0, epsilon = TOL);
    }

    #[test]
    fn distance_is_symmetric() {
        let d1 = distance_3d(-1.0, 4.0, 2.0, 5.0, 0.5, -3.0);
        let d2 = distance_3d(5.0, 0.5, -3.0, -1.0, 4.0, 2.0);
        assert_abs_diff_eq!(d1, d2, epsilon = TOL);
    }

    #[test]
    fn distance_between_matches_nalgebra_metric() {
        let a = Vector3::new(1.0, -2.0, 0.5);
        let b = Vector3::new(-3.0, 4.0, 2.5);
        assert_abs_diff_eq!(distance_between(&a, &b), (b - a).norm(), epsilon = 1e-5);
    }
}
