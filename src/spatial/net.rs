//! Face-block layout sampled from the grid
//!
//! The layout is read as a 4x4 grid of square blocks with edge length
//! `max(width, height) / 4`. A block is present when its top-left cell
//! holds any tile; void there means the block is empty everywhere, since
//! faces never partially overlap blocks.

use crate::algebra::vector::Vec2;
use crate::folding::faces::FaceSet;
use crate::spatial::grid::Grid;

/// Blocks per axis of the net layout
pub const NET_SPAN: i32 = 4;

/// Faces of a cube
pub const FACE_COUNT: usize = 6;

/// Presence map of face blocks plus the shared face edge length
#[derive(Clone, Debug)]
pub struct FaceNet {
    present: FaceSet,
    edge_length: i32,
}

impl FaceNet {
    /// Sample the face layout from a grid
    pub fn from_grid(grid: &Grid) -> Self {
        let edge_length = grid.width().max(grid.height()) / NET_SPAN;
        let mut present = FaceSet::new();
        for y in 0..NET_SPAN {
            for x in 0..NET_SPAN {
                let block = Vec2::new(x, y);
                if grid.tile(block * edge_length).is_some() {
                    present.insert(block);
                }
            }
        }
        Self {
            present,
            edge_length,
        }
    }

    /// Shared edge length of every face
    pub const fn edge_length(&self) -> i32 {
        self.edge_length
    }

    /// Whether a block coordinate holds a face
    pub fn contains(&self, block: Vec2) -> bool {
        self.present.contains(block)
    }

    /// Number of present face blocks
    pub fn face_count(&self) -> usize {
        self.present.count()
    }

    /// Present face blocks in index order
    pub fn blocks(&self) -> Vec<Vec2> {
        self.present.blocks()
    }

    /// Block containing a cell position
    pub const fn block_of(&self, position: Vec2) -> Vec2 {
        position.div_euclid(self.edge_length)
    }

    /// Absolute top-left cell of a block
    pub const fn top_left(&self, block: Vec2) -> Vec2 {
        Vec2::new(block.x * self.edge_length, block.y * self.edge_length)
    }
}

