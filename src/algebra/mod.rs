//! Integer vector and rotation algebra
//!
//! All movement and folding math is exact quarter-turn arithmetic:
//! - Planar and spatial facings with their unit-vector mappings
//! - Integer vectors with row-vector rotation multiplies
//! - 2x2 and 3x3 rotation matrices closed under composition

/// Planar and spatial facings and the quarter-turn table
pub mod direction;
/// Quarter-turn rotation matrices in two and three dimensions
pub mod rotation;
/// Integer vectors and their operator algebra
pub mod vector;

pub use direction::{Direction2, Direction3, Turn};
pub use rotation::{Rotation2, Rotation3};
pub use vector::{Vec2, Vec3};
