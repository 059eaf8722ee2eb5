//! Cube net folding
//!
//! Folds the flat face layout into a cube by assigning each face the
//! cumulative rotation it picks up along the fold tree, and caches the
//! per-boundary results consumed by the cube wrap policy.

/// Memoized wrap-target cache
pub mod cache;
/// Fixed-size set of face blocks
pub mod faces;
/// The net folder and its validation
pub mod folder;
