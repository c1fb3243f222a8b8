pub mod error;
pub mod geometry;
pub mod math;

pub use error::{GeometryError, InputError, Result, WorldMathError};
pub use geometry::Matrix;
