//! Memoized wrap targets
//!
//! Folding re-roots at whichever face the walker currently occupies, so
//! resolved boundaries are cached per (root block, departure direction).
//! The 4x4 layout bounds the key space, keeping recomputation cost fixed
//! regardless of walk length.

use crate::algebra::direction::Direction2;
use crate::algebra::rotation::Rotation2;
use crate::algebra::vector::Vec2;
use crate::error::Result;
use std::collections::HashMap;

/// Key identifying one resolved boundary crossing
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct WrapKey {
    /// Face block the walker departs from
    pub block: Vec2,
    /// Direction of travel across the boundary
    pub direction: Direction2,
}

/// A resolved wrap destination
///
/// Holds the destination face block and its unfold rotation: the
/// cumulative fold rotation composed with the inverse single fold across
/// the crossed edge, which leaves a pure in-plane rotation. That pair is
/// everything position and facing projection need.
#[derive(Clone, Copy, Debug)]
pub struct WrapTarget {
    /// Destination face block
    pub block: Vec2,
    /// In-plane rotation of the destination face once unfolded across
    /// the crossed edge
    pub unfold: Rotation2,
}

/// Performance metrics for cache effectiveness
#[derive(Default, Debug)]
pub struct CacheStats {
    /// Number of cache hits
    pub hits: usize,
    /// Number of cache misses
    pub misses: usize,
}

/// Memoization cache for resolved boundary crossings
#[derive(Default, Debug)]
pub struct WrapCache {
    /// Crossing to destination mapping
    targets: HashMap<WrapKey, WrapTarget>,

    /// Cache performance statistics
    pub stats: CacheStats,
}

impl WrapCache {
    /// Create an empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Retrieve a cached target or compute and store a new one
    ///
    /// Uses the provided closure to resolve the crossing only when the
    /// key is not already cached. A failed resolution is returned as-is
    /// and nothing is stored.
    ///
    /// # Errors
    ///
    /// Propagates any error from the compute closure.
    pub fn get_or_try_compute<F>(&mut self, key: WrapKey, compute_fn: F) -> Result<WrapTarget>
    where
        F: FnOnce() -> Result<WrapTarget>,
    {
        use std::collections::hash_map::Entry;

        match self.targets.entry(key) {
            Entry::Occupied(entry) => {
                self.stats.hits += 1;
                Ok(*entry.get())
            }
            Entry::Vacant(entry) => {
                self.stats.misses += 1;
                Ok(*entry.insert(compute_fn()?))
            }
        }
    }
}

