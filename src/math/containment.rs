//! Point-in-shape tests against game-world coordinates.
//!
//! Round shapes (circle, tube, ball) exclude their boundary; axis-aligned
//! boxes include it.

use tracing::debug;

use super::{distance_2d, distance_3d, Vector2};
use crate::error::{InputError, Result};

/// Checks if `(px, py)` lies strictly inside the circle at `(cx, cy)`.
#[must_use]
pub fn is_point_in_circle(cx: f32, cy: f32, radius: f32, px: f32, py: f32) -> bool {
    distance_2d(cx, cy, px, py) < radius
}

/// Checks if a point lies inside a vertical tube.
///
/// The tube is centered on `(tube_x, tube_y)`, starts at `tube_z` and
/// extends `height` upwards. The bottom cap is included, the top cap and
/// the side wall are not.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn is_point_in_tube(
    tube_x: f32,
    tube_y: f32,
    tube_z: f32,
    height: f32,
    radius: f32,
    px: f32,
    py: f32,
    pz: f32,
) -> bool {
    distance_2d(tube_x, tube_y, px, py) < radius && pz >= tube_z && pz < tube_z + height
}

/// Checks if `(px, py, pz)` lies strictly inside the ball at `(bx, by, bz)`.
#[must_use]
pub fn is_point_in_ball(bx: f32, by: f32, bz: f32, radius: f32, px: f32, py: f32, pz: f32) -> bool {
    distance_3d(bx, by, bz, px, py, pz) < radius
}

/// Checks if `(px, py)` lies in the rectangle `[x1, x2] x [y1, y2]`,
/// edges included.
#[must_use]
pub fn is_point_in_area(x1: f32, y1: f32, x2: f32, y2: f32, px: f32, py: f32) -> bool {
    px >= x1 && px <= x2 && py >= y1 && py <= y2
}

/// Checks if a point lies in the box `[x1, x2] x [y1, y2] x [z1, z2]`,
/// faces included.
///
/// Same test as [`is_point_in_cuboid`].
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn is_point_in_area_3d(
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
    px: f32,
    py: f32,
    pz: f32,
) -> bool {
    is_point_in_area(x1, y1, x2, y2, px, py) && pz >= z1 && pz <= z2
}

/// Checks if a point lies in the cuboid `[x1, x2] x [y1, y2] x [z1, z2]`,
/// faces included.
#[must_use]
#[allow(clippy::too_many_arguments)]
pub fn is_point_in_cuboid(
    x1: f32,
    y1: f32,
    z1: f32,
    x2: f32,
    y2: f32,
    z2: f32,
    px: f32,
    py: f32,
    pz: f32,
) -> bool {
    is_point_in_area_3d(x1, y1, z1, x2, y2, z2, px, py, pz)
}

/// Even-odd point-in-polygon test.
///
/// The polygon is closed implicitly (last vertex connects to the first).
/// Fewer than three vertices never contain anything.
#[must_use]
pub fn is_point_in_polygon(vertices: &[Vector2], point: &Vector2) -> bool {
    crossing_parity(vertices.len(), |i| (vertices[i].x, vertices[i].y), point.x, point.y)
}

/// Even-odd point-in-polygon test over parallel coordinate arrays.
///
/// # Errors
///
/// Returns `InputError::LengthMismatch` if `poly_x` and `poly_y` have
/// different lengths.
pub fn is_point_in_polygon_xy(poly_x: &[f32], poly_y: &[f32], px: f32, py: f32) -> Result<bool> {
    if poly_x.len() != poly_y.len() {
        return Err(InputError::LengthMismatch {
            xs: poly_x.len(),
            ys: poly_y.len(),
        }
        .into());
    }
    Ok(crossing_parity(poly_x.len(), |i| (poly_x[i], poly_y[i]), px, py))
}

/// Toggles on every edge crossed by the ray from `(px, py)` towards +x.
///
/// Horizontal edges never pass the straddle check, so the division is
/// always by a non-zero height.
fn crossing_parity(n: usize, vertex: impl Fn(usize) -> (f32, f32), px: f32, py: f32) -> bool {
    if n < 3 {
        debug!(vertices = n, "point-in-polygon test on a degenerate polygon");
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;
    for i in 0..n {
        let (xi, yi) = vertex(i);
        let (xj, yj) = vertex(j);
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
