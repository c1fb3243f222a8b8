use std::ops::Mul;

use crate::math::{Matrix3, Vector3};

/// An orientation basis plus a position in the game world.
///
/// `right`, `forward` and `up` are the rows of the 3x3 rotation block and
/// are expected to form an orthonormal basis. Nothing enforces that; see
/// [`Matrix::is_orthonormal`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    /// Right axis (first row).
    pub right: Vector3,
    /// Forward axis (second row).
    pub forward: Vector3,
    /// Up axis (third row).
    pub up: Vector3,
    /// World position.
    pub position: Vector3,
}

impl Matrix {
    /// Creates a matrix from its basis axes and position.
    #[must_use]
    pub fn new(right: Vector3, forward: Vector3, up: Vector3, position: Vector3) -> Self {
        Self {
            right,
            forward,
            up,
            position,
        }
    }

    /// The identity orientation at the origin.
    #[must_use]
    pub fn identity() -> Self {
        Self::new(Vector3::x(), Vector3::y(), Vector3::z(), Vector3::zeros())
    }

    /// Resets this matrix to [`Matrix::identity`].
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Returns the rotation block as an nalgebra matrix, one axis per row.
    #[must_use]
    pub fn rotation(&self) -> Matrix3 {
        Matrix3::from_rows(&[
            self.right.transpose(),
            self.forward.transpose(),
            self.up.transpose(),
        ])
    }

    /// Builds a matrix from an nalgebra rotation block (rows are
    /// right/forward/up) and a position.
    #[must_use]
    pub fn from_rotation(rotation: &Matrix3, position: Vector3) -> Self {
        Self::new(
            rotation.row(0).transpose(),
            rotation.row(1).transpose(),
            rotation.row(2).transpose(),
            position,
        )
    }

    /// Checks whether the axes are unit length and mutually perpendicular
    /// within `tolerance`.
    #[must_use]
    pub fn is_orthonormal(&self, tolerance: f32) -> bool {
        let axes = [&self.right, &self.forward, &self.up];
        let unit = axes.iter().all(|a| (a.norm() - 1.0).abs() <= tolerance);
        unit && self.right.dot(&self.forward).abs() <= tolerance
            && self.right.dot(&self.up).abs() <= tolerance
            && self.forward.dot(&self.up).abs() <= tolerance
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::identity()
    }
}

/// Row `row` of `lhs` times the rotation block of `rhs`.
fn compose_row(row: &Vector3, rhs: &Matrix) -> Vector3 {
    Vector3::new(
        row.x * rhs.right.x + row.y * rhs.forward.x + row.z * rhs.up.x,
        row.x * rhs.right.y + row.y * rhs.forward.y + row.z * rhs.up.y,
        row.x * rhs.right.z + row.y * rhs.forward.z + row.z * rhs.up.z,
    )
}

/// Composes the rotation blocks. The result sits at the origin; positions
/// are not combined.
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        Matrix::new(
            compose_row(&self.right, rhs),
            compose_row(&self.forward, rhs),
            compose_row(&self.up, rhs),
            Vector3::zeros(),
        )
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Matrix) -> Matrix {
        &self * &rhs
    }
}
