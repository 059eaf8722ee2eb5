//! Boundary-handling policies
//!
//! Two interchangeable behaviors for movement that leaves the occupied
//! layout: toroidal wrap to the far end of the occupied extent, and
//! cube-surface wrap across the folded net. Policies only decide the
//! wrapped cell and facing; the board applies the wall rules afterward.

use crate::algebra::direction::Direction2;
use crate::algebra::rotation::Rotation2;
use crate::algebra::vector::Vec2;
use crate::error::{Result, TraversalError, malformed_net};
use crate::folding::cache::{CacheStats, WrapCache, WrapKey, WrapTarget};
use crate::folding::folder::{fold_net, fold_rotation};
use crate::spatial::grid::Grid;
use crate::spatial::net::FaceNet;

/// Selector for the boundary-handling behavior of a board
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WrapMode {
    /// Wrap to the far end of the row or column's occupied extent
    Simple,
    /// Fold the layout into a cube and cross onto the adjacent face
    Cubic,
}

/// A constructed boundary-handling policy
#[derive(Debug)]
pub enum WrapPolicy {
    /// Toroidal wrapping over the occupied extent
    Simple(SimpleWrap),
    /// Cube-surface wrapping over the folded net
    Cubic(CubicWrap),
}

impl WrapPolicy {
    /// Construct the policy selected by a mode tag
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::MalformedNet`] when cubic wrapping is
    /// requested for a grid whose face layout is not a cube unfolding.
    pub fn new(mode: WrapMode, grid: &Grid) -> Result<Self> {
        match mode {
            WrapMode::Simple => Ok(Self::Simple(SimpleWrap)),
            WrapMode::Cubic => Ok(Self::Cubic(CubicWrap::new(grid)?)),
        }
    }

    /// Resolve a boundary crossing to a wrapped cell and facing
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::IllegalWrapTarget`] when the occupied
    /// extent is empty, or [`TraversalError::MalformedNet`] when cubic
    /// resolution meets an inconsistent fold.
    pub fn wrap_next(
        &mut self,
        grid: &Grid,
        position: Vec2,
        direction: Direction2,
    ) -> Result<(Vec2, Direction2)> {
        match self {
            Self::Simple(policy) => policy.wrap_next(grid, position, direction),
            Self::Cubic(policy) => policy.wrap_next(position, direction),
        }
    }
}

/// Toroidal wrapping bounded to the occupied extent
///
/// A horizontal crossing re-enters at the opposite end of the current
/// row's occupied tiles, skipping void; vertical crossings scan the
/// column. Facing never changes.
#[derive(Debug)]
pub struct SimpleWrap;

impl SimpleWrap {
    fn wrap_next(
        &self,
        grid: &Grid,
        position: Vec2,
        direction: Direction2,
    ) -> Result<(Vec2, Direction2)> {
        let target = match direction {
            Direction2::Right => grid.first_occupied_in_row(position.y),
            Direction2::Left => grid.last_occupied_in_row(position.y),
            Direction2::Down => grid.first_occupied_in_column(position.x),
            Direction2::Up => grid.last_occupied_in_column(position.x),
        };
        target
            .map(|cell| (cell, direction))
            .ok_or(TraversalError::IllegalWrapTarget { position })
    }
}

/// Cube-surface wrapping over the folded net
///
/// The layout is validated as a cube unfolding at construction, so every
/// later crossing resolves against a well-formed fold.
#[derive(Debug)]
pub struct CubicWrap {
    net: FaceNet,
    cache: WrapCache,
}

impl CubicWrap {
    /// Sample and validate the face layout of a grid
    ///
    /// # Errors
    ///
    /// Returns [`TraversalError::MalformedNet`] when the layout is too
    /// small to carry square faces or cannot fold into a cube.
    pub fn new(grid: &Grid) -> Result<Self> {
        let net = FaceNet::from_grid(grid);
        if net.edge_length() == 0 {
            return Err(malformed_net(&format!(
                "grid {}x{} is too small for square faces",
                grid.width(),
                grid.height()
            )));
        }
        let root = net
            .blocks()
            .first()
            .copied()
            .ok_or_else(|| malformed_net(&"layout holds no face blocks"))?;
        fold_net(&net, root)?;
        Ok(Self {
            net,
            cache: WrapCache::new(),
        })
    }

    /// Cache statistics for the resolved boundary crossings
    pub const fn cache_stats(&self) -> &CacheStats {
        &self.cache.stats
    }

    fn wrap_next(&mut self, position: Vec2, direction: Direction2) -> Result<(Vec2, Direction2)> {
        let edge = self.net.edge_length();
        let root = self.net.block_of(position);
        let Self { net, cache } = self;

        let key = WrapKey {
            block: root,
            direction,
        };
        let target = cache.get_or_try_compute(key, || resolve_crossing(net, root, direction))?;
        let refold = target.unfold.inverse();

        let facing = (direction.unit() * refold).direction().ok_or_else(|| {
            malformed_net(&format!(
                "unfold rotation for block ({}, {}) skews facings",
                target.block.x, target.block.y
            ))
        })?;

        // One step past the departure edge, reduced into face-local
        // coordinates, is the entry cell on the unfolded destination.
        let entry = (position + direction).rem_euclid(edge);
        let landed = entry * refold;
        let origin = corner_minimum(edge, refold);
        let cell = net.top_left(target.block) + (landed - origin);

        Ok((cell, facing))
    }
}

/// Resolve one boundary crossing against a fresh fold of the net
///
/// Folds rooted at the departing face, picks the face whose folded
/// outward normal points along the travel direction (the face physically
/// adjacent across the crossed edge), and unfolds it across that edge.
fn resolve_crossing(net: &FaceNet, root: Vec2, direction: Direction2) -> Result<WrapTarget> {
    let folded = fold_net(net, root)?;
    let outward = direction.unit3();

    let face = folded
        .iter()
        .find(|face| face.outward_normal() == outward)
        .copied()
        .ok_or_else(|| {
            malformed_net(&format!(
                "no face opposes travel from block ({}, {})",
                root.x, root.y
            ))
        })?;

    let unfold = face
        .rotation
        .then(&fold_rotation(direction).inverse())
        .planar()
        .ok_or_else(|| {
            malformed_net(&format!(
                "block ({}, {}) does not unfold into the net plane",
                face.block.x, face.block.y
            ))
        })?;

    Ok(WrapTarget {
        block: face.block,
        unfold,
    })
}

/// Minimum-(x, y) corner of a face's local square after rotation
///
/// Rotating the square `{0..edge-1}^2` about the origin keeps it axis
/// aligned; its minimum corner is the offset that re-anchors local
/// coordinates at zero.
fn corner_minimum(edge: i32, rotation: Rotation2) -> Vec2 {
    let span = edge - 1;
    [
        Vec2::new(span, 0),
        Vec2::new(0, span),
        Vec2::new(span, span),
    ]
    .into_iter()
    .fold(Vec2::ZERO, |minimum, corner| minimum.min(corner * rotation))
}
