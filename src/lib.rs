//! Board traversal across flat and cube-folded tile layouts
//!
//! The engine walks a tile grid under one of two boundary behaviors: a
//! toroidal wrap bounded to the occupied extent of each row and column,
//! or a cube-surface wrap that folds the layout's square faces into a
//! cube and carries both cell and facing across face edges consistently
//! with the folded geometry.

#![forbid(unsafe_code)]

/// Integer vector and rotation algebra for quarter-turn math
pub mod algebra;
/// Error types and result alias
pub mod error;
/// Cube net folding and wrap-target caching
pub mod folding;
/// Boundary adapters for raw layout and instruction text
pub mod input;
/// Tile storage and face-block layout
pub mod spatial;
/// Boards, wrap policies, and instruction-driven walking
pub mod traversal;

pub use error::{Result, TraversalError};
