//! Fixed-size bitset over the 4x4 block grid
//!
//! Tracks face-block membership for presence maps and fold traversal.
//! Blocks outside the 4x4 layout are silently absent.

use crate::algebra::vector::Vec2;
use crate::spatial::net::NET_SPAN;
use bitvec::prelude::*;
use std::fmt;

/// Set of face blocks with O(1) membership testing
#[derive(Clone, Debug, Default)]
pub struct FaceSet {
    bits: BitArr!(for 16),
}

impl FaceSet {
    /// Create a set with no blocks present
    pub fn new() -> Self {
        Self::default()
    }

    /// Bit index of a block, or `None` outside the 4x4 layout
    const fn index(block: Vec2) -> Option<usize> {
        if block.x >= 0 && block.x < NET_SPAN && block.y >= 0 && block.y < NET_SPAN {
            Some((block.y * NET_SPAN + block.x) as usize)
        } else {
            None
        }
    }

    /// Insert a block, ignoring coordinates outside the layout
    pub fn insert(&mut self, block: Vec2) {
        if let Some(index) = Self::index(block) {
            self.bits.set(index, true);
        }
    }

    /// Test block membership
    pub fn contains(&self, block: Vec2) -> bool {
        Self::index(block)
            .and_then(|index| self.bits.get(index).as_deref().copied())
            .unwrap_or(false)
    }

    /// Count blocks in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no blocks are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Extract all blocks in index order
    pub fn blocks(&self) -> Vec<Vec2> {
        self.bits
            .iter_ones()
            .map(|index| {
                Vec2::new(
                    index as i32 % NET_SPAN,
                    index as i32 / NET_SPAN,
                )
            })
            .collect()
    }
}

impl fmt::Display for FaceSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FaceSet({} blocks: {:?})", self.count(), self.blocks())
    }
}

