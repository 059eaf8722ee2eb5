//! Integer vectors with operator algebra
//!
//! Vectors multiply with rotations in row-vector convention (`v * m`),
//! so composed rotations apply left to right.

use crate::algebra::direction::{Direction2, Direction3};
use crate::algebra::rotation::{Rotation2, Rotation3};
use std::ops::{Add, Mul, Sub};

/// Integer point or offset in the plane
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec2 {
    /// Column component
    pub x: i32,
    /// Row component
    pub y: i32,
}

impl Vec2 {
    /// The origin
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a vector from components
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Componentwise Euclidean division
    pub const fn div_euclid(self, divisor: i32) -> Self {
        Self::new(self.x.div_euclid(divisor), self.y.div_euclid(divisor))
    }

    /// Componentwise Euclidean remainder, always in `0..modulus`
    pub const fn rem_euclid(self, modulus: i32) -> Self {
        Self::new(self.x.rem_euclid(modulus), self.y.rem_euclid(modulus))
    }

    /// Componentwise minimum
    pub fn min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Interpret this vector as a planar facing
    ///
    /// Only the four axis-aligned unit vectors map to a facing; anything
    /// else is `None`.
    pub const fn direction(self) -> Option<Direction2> {
        match (self.x, self.y) {
            (-1, 0) => Some(Direction2::Left),
            (1, 0) => Some(Direction2::Right),
            (0, -1) => Some(Direction2::Up),
            (0, 1) => Some(Direction2::Down),
            _ => None,
        }
    }
}

impl Add for Vec2 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y)
    }
}

impl Add<Direction2> for Vec2 {
    type Output = Self;

    fn add(self, direction: Direction2) -> Self {
        self + direction.unit()
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<i32> for Vec2 {
    type Output = Self;

    fn mul(self, scale: i32) -> Self {
        Self::new(self.x * scale, self.y * scale)
    }
}

impl Mul<Rotation2> for Vec2 {
    type Output = Self;

    fn mul(self, rotation: Rotation2) -> Self {
        let [[a, b], [c, d]] = rotation.matrix();
        Self::new(self.x * a + self.y * c, self.x * b + self.y * d)
    }
}

/// Integer point or offset in space
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vec3 {
    /// Column component
    pub x: i32,
    /// Row component
    pub y: i32,
    /// Depth component, positive behind the net plane
    pub z: i32,
}

impl Vec3 {
    /// Create a vector from components
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Interpret this vector as a spatial facing
    ///
    /// Only the six axis-aligned unit vectors map to a facing.
    pub const fn direction(self) -> Option<Direction3> {
        match (self.x, self.y, self.z) {
            (-1, 0, 0) => Some(Direction3::Left),
            (1, 0, 0) => Some(Direction3::Right),
            (0, -1, 0) => Some(Direction3::Up),
            (0, 1, 0) => Some(Direction3::Down),
            (0, 0, -1) => Some(Direction3::Front),
            (0, 0, 1) => Some(Direction3::Back),
            _ => None,
        }
    }

    /// Drop the depth component
    pub const fn planar(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<i32> for Vec3 {
    type Output = Self;

    fn mul(self, scale: i32) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl Mul<Rotation3> for Vec3 {
    type Output = Self;

    fn mul(self, rotation: Rotation3) -> Self {
        let [[a, b, c], [d, e, f], [g, h, i]] = rotation.matrix();
        Self::new(
            self.x * a + self.y * d + self.z * g,
            self.x * b + self.y * e + self.z * h,
            self.x * c + self.y * f + self.z * i,
        )
    }
}

