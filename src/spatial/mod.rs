//! Tile storage and face-block layout
//!
//! This module contains the board's spatial data:
//! - Row-major tile storage with point lookup and directional scans
//! - The face-block layout sampled from the grid for cube folding

/// Row-major tile storage
pub mod grid;
/// Face-block layout of the net
pub mod net;

pub use grid::{Grid, Tile};
pub use net::FaceNet;
