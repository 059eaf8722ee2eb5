//! Quarter-turn rotation matrices
//!
//! Rotations are exact integer matrices built by table lookup, never
//! floating-point trigonometry. Angles must be signed multiples of 90
//! degrees; anything else is rejected at construction. Every matrix is
//! orthonormal with determinant 1, so the inverse is the transpose.

use crate::algebra::direction::Turn;
use crate::error::{Result, TraversalError};

/// Integer sine and cosine for a quarter-turn count
const fn sin_cos(turns: i32) -> (i32, i32) {
    match turns.rem_euclid(4) {
        0 => (0, 1),
        1 => (1, 0),
        2 => (0, -1),
        _ => (-1, 0),
    }
}

/// Convert degrees to quarter turns, rejecting non-multiples of 90
fn quarter_turns(degrees: i32) -> Result<i32> {
    if degrees % 90 == 0 {
        Ok(degrees / 90)
    } else {
        Err(TraversalError::InvalidRotation { degrees })
    }
}

/// Planar rotation by a multiple of 90 degrees
///
/// Positive angles turn counterclockwise on screen (y grows downward),
/// matching the `Turn::Left` sense.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation2 {
    matrix: [[i32; 2]; 2],
}

impl Rotation2 {
    /// The identity rotation
    pub const IDENTITY: Self = Self::quarter(0);

    /// Rotation by a quarter-turn count, positive counterclockwise
    pub const fn quarter(turns: i32) -> Self {
        let (s, c) = sin_cos(turns);
        Self {
            matrix: [[c, -s], [s, c]],
        }
    }

    /// Rotation by an angle in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::InvalidRotation`] when the angle is not
    /// a multiple of 90 degrees.
    pub fn from_degrees(degrees: i32) -> Result<Self> {
        quarter_turns(degrees).map(Self::quarter)
    }

    /// The rotation performed by a single turn command
    pub const fn from_turn(turn: Turn) -> Self {
        match turn {
            Turn::Left => Self::quarter(1),
            Turn::Right => Self::quarter(-1),
        }
    }

    /// This rotation followed by another
    pub const fn then(&self, next: &Self) -> Self {
        let [[a00, a01], [a10, a11]] = self.matrix;
        let [[b00, b01], [b10, b11]] = next.matrix;
        Self {
            matrix: [
                [a00 * b00 + a01 * b10, a00 * b01 + a01 * b11],
                [a10 * b00 + a11 * b10, a10 * b01 + a11 * b11],
            ],
        }
    }

    /// The inverse rotation (transpose)
    pub const fn inverse(&self) -> Self {
        let [[a, b], [c, d]] = self.matrix;
        Self {
            matrix: [[a, c], [b, d]],
        }
    }

    /// Raw matrix rows
    pub const fn matrix(&self) -> [[i32; 2]; 2] {
        self.matrix
    }
}

/// Spatial rotation composed from quarter turns about the X, Y, and Z axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rotation3 {
    matrix: [[i32; 3]; 3],
}

impl Rotation3 {
    /// The identity rotation
    pub const IDENTITY: Self = Self::quarter_x(0);

    /// Rotation about the X axis by a quarter-turn count
    pub const fn quarter_x(turns: i32) -> Self {
        let (s, c) = sin_cos(turns);
        Self {
            matrix: [[1, 0, 0], [0, c, -s], [0, s, c]],
        }
    }

    /// Rotation about the Y axis by a quarter-turn count
    pub const fn quarter_y(turns: i32) -> Self {
        let (s, c) = sin_cos(turns);
        Self {
            matrix: [[c, 0, s], [0, 1, 0], [-s, 0, c]],
        }
    }

    /// Rotation about the Z axis by a quarter-turn count
    pub const fn quarter_z(turns: i32) -> Self {
        let (s, c) = sin_cos(turns);
        Self {
            matrix: [[c, -s, 0], [s, c, 0], [0, 0, 1]],
        }
    }

    /// Rotation about the X axis by an angle in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::InvalidRotation`] when the angle is not
    /// a multiple of 90 degrees.
    pub fn about_x(degrees: i32) -> Result<Self> {
        quarter_turns(degrees).map(Self::quarter_x)
    }

    /// Rotation about the Y axis by an angle in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::InvalidRotation`] when the angle is not
    /// a multiple of 90 degrees.
    pub fn about_y(degrees: i32) -> Result<Self> {
        quarter_turns(degrees).map(Self::quarter_y)
    }

    /// Rotation about the Z axis by an angle in degrees
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::InvalidRotation`] when the angle is not
    /// a multiple of 90 degrees.
    pub fn about_z(degrees: i32) -> Result<Self> {
        quarter_turns(degrees).map(Self::quarter_z)
    }

    /// This rotation followed by another
    ///
    /// Composition is matrix multiplication and does not commute.
    pub const fn then(&self, next: &Self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.matrix;
        let [[b00, b01, b02], [b10, b11, b12], [b20, b21, b22]] = next.matrix;
        Self {
            matrix: [
                [
                    a00 * b00 + a01 * b10 + a02 * b20,
                    a00 * b01 + a01 * b11 + a02 * b21,
                    a00 * b02 + a01 * b12 + a02 * b22,
                ],
                [
                    a10 * b00 + a11 * b10 + a12 * b20,
                    a10 * b01 + a11 * b11 + a12 * b21,
                    a10 * b02 + a11 * b12 + a12 * b22,
                ],
                [
                    a20 * b00 + a21 * b10 + a22 * b20,
                    a20 * b01 + a21 * b11 + a22 * b21,
                    a20 * b02 + a21 * b12 + a22 * b22,
                ],
            ],
        }
    }

    /// The inverse rotation (transpose)
    pub const fn inverse(&self) -> Self {
        let [[a00, a01, a02], [a10, a11, a12], [a20, a21, a22]] = self.matrix;
        Self {
            matrix: [[a00, a10, a20], [a01, a11, a21], [a02, a12, a22]],
        }
    }

    /// The planar restriction of a rotation that fixes the net plane
    ///
    /// A rotation about the Z axis leaves the plane in place; its upper
    /// 2x2 block is the corresponding planar rotation. Returns `None`
    /// for rotations that tilt the plane.
    pub const fn planar(&self) -> Option<Rotation2> {
        let [[a, b, z0], [c, d, z1], [z2, z3, z4]] = self.matrix;
        if z0 == 0 && z1 == 0 && z2 == 0 && z3 == 0 && z4 == 1 {
            Some(Rotation2 {
                matrix: [[a, b], [c, d]],
            })
        } else {
            None
        }
    }

    /// Raw matrix rows
    pub const fn matrix(&self) -> [[i32; 3]; 3] {
        self.matrix
    }
}
