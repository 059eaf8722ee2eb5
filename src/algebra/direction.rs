//! Facings and quarter turns in screen coordinates
//!
//! The plane uses screen conventions: x grows rightward, y grows downward.
//! The third axis points behind the plane, so `Front` faces the viewer
//! and `Back` points away.

use crate::algebra::vector::{Vec2, Vec3};

/// A quarter-turn command
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Turn {
    /// Rotate 90 degrees counterclockwise on screen
    Left,
    /// Rotate 90 degrees clockwise on screen
    Right,
}

/// Planar facing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction2 {
    /// Toward negative x
    Left,
    /// Toward positive x
    Right,
    /// Toward negative y
    Up,
    /// Toward positive y
    Down,
}

impl Direction2 {
    /// All four facings in a fixed order
    pub const ALL: [Self; 4] = [Self::Left, Self::Right, Self::Up, Self::Down];

    /// Rotate this facing by a quarter turn
    pub const fn turn(self, turn: Turn) -> Self {
        match (self, turn) {
            (Self::Left, Turn::Left) | (Self::Right, Turn::Right) => Self::Down,
            (Self::Left, Turn::Right) | (Self::Right, Turn::Left) => Self::Up,
            (Self::Up, Turn::Left) | (Self::Down, Turn::Right) => Self::Left,
            (Self::Up, Turn::Right) | (Self::Down, Turn::Left) => Self::Right,
        }
    }

    /// The facing pointing the opposite way
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }

    /// Unit step vector for this facing
    pub const fn unit(self) -> Vec2 {
        match self {
            Self::Left => Vec2::new(-1, 0),
            Self::Right => Vec2::new(1, 0),
            Self::Up => Vec2::new(0, -1),
            Self::Down => Vec2::new(0, 1),
        }
    }

    /// Unit step vector embedded in the net plane
    pub const fn unit3(self) -> Vec3 {
        let Vec2 { x, y } = self.unit();
        Vec3::new(x, y, 0)
    }

    /// Checksum code for this facing: Right=0, Down=1, Left=2, Up=3
    pub const fn facing_code(self) -> i32 {
        match self {
            Self::Right => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Up => 3,
        }
    }
}

/// Spatial facing: the planar four plus the two normals of the net plane
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction3 {
    /// Toward negative x
    Left,
    /// Toward positive x
    Right,
    /// Toward negative y
    Up,
    /// Toward positive y
    Down,
    /// Toward the viewer (negative z)
    Front,
    /// Behind the net plane (positive z)
    Back,
}

impl Direction3 {
    /// All six facings in a fixed order
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Right,
        Self::Up,
        Self::Down,
        Self::Front,
        Self::Back,
    ];

    /// Unit vector for this facing
    pub const fn unit(self) -> Vec3 {
        match self {
            Self::Left => Vec3::new(-1, 0, 0),
            Self::Right => Vec3::new(1, 0, 0),
            Self::Up => Vec3::new(0, -1, 0),
            Self::Down => Vec3::new(0, 1, 0),
            Self::Front => Vec3::new(0, 0, -1),
            Self::Back => Vec3::new(0, 0, 1),
        }
    }
}

