//! Movement resolution against the grid and wrap policy
//!
//! A board owns the tile storage and a constructed wrap policy and
//! resolves one movement step at a time. Wrapping only happens when the
//! naive next cell is void or off-grid; walls always reject the step
//! with position and facing untouched, whether met directly or through
//! a wrap.

use crate::algebra::direction::Direction2;
use crate::algebra::vector::Vec2;
use crate::error::{Result, TraversalError};
use crate::spatial::grid::{Grid, Tile};
use crate::traversal::wrap::{WrapMode, WrapPolicy};

/// A grid composed with a boundary-handling policy
#[derive(Debug)]
pub struct Board {
    grid: Grid,
    policy: WrapPolicy,
}

impl Board {
    /// Build a board over a grid with the selected wrap behavior
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::MalformedNet`] when cubic wrapping is
    /// selected and the grid's face layout is not a cube unfolding.
    pub fn new(grid: Grid, mode: WrapMode) -> Result<Self> {
        let policy = WrapPolicy::new(mode, &grid)?;
        Ok(Self { grid, policy })
    }

    /// The underlying tile storage
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Resolve a single movement step
    ///
    /// Open floor ahead moves onto it; a wall ahead keeps the walker in
    /// place. Void or off-grid ahead asks the wrap policy for the
    /// re-entry cell, which again either admits the walker, rejects the
    /// whole step at a wall, or is refused as corrupt.
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::IllegalWrapTarget`] when the wrapped
    /// destination is itself void, or a policy error when resolution
    /// fails.
    pub fn step(
        &mut self,
        position: Vec2,
        direction: Direction2,
    ) -> Result<(Vec2, Direction2)> {
        let ahead = position + direction;
        match self.grid.tile(ahead) {
            Some(Tile::Open) => Ok((ahead, direction)),
            Some(Tile::Wall) => Ok((position, direction)),
            None => {
                let (wrapped, facing) = self.policy.wrap_next(&self.grid, position, direction)?;
                match self.grid.tile(wrapped) {
                    Some(Tile::Open) => Ok((wrapped, facing)),
                    Some(Tile::Wall) => Ok((position, direction)),
                    None => Err(TraversalError::IllegalWrapTarget { position: wrapped }),
                }
            }
        }
    }
}
