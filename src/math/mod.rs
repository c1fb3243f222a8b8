pub mod angle;
pub mod containment;
pub mod distance;
pub mod interp;
pub mod vector;

pub use angle::{
    checked_wrap_around, degrees_to_radians, degrees_to_radians_vec, offset_degrees,
    offset_degrees_vec, radians_to_degrees, radians_to_degrees_vec, wrap_around,
};
pub use containment::{
    is_point_in_area, is_point_in_area_3d, is_point_in_ball, is_point_in_circle,
    is_point_in_cuboid, is_point_in_polygon, is_point_in_polygon_xy, is_point_in_tube,
};
pub use distance::{distance_2d, distance_3d, distance_between};
pub use interp::{checked_unlerp, clamp, lerp, unlerp, unlerp_clamped};
pub use vector::{angle_between_points, dot_product, vector_length};

/// 2D point/vector type.
pub type Vector2 = nalgebra::Vector2<f32>;

/// 3D vector type used for game-world positions and rotations.
pub type Vector3 = nalgebra::Vector3<f32>;

/// 4-component vector type.
pub type Vector4 = nalgebra::Vector4<f32>;

/// 3x3 matrix type used when handing orientations to nalgebra.
pub type Matrix3 = nalgebra::Matrix3<f32>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f32 = 1e-6;

/// Degrees in one radian.
pub const DEGREES_PER_RADIAN: f32 = 180.0 / std::f32::consts::PI;

/// Radians in one degree.
pub const RADIANS_PER_DEGREE: f32 = std::f32::consts::PI / 180.0;
