//! Error types for board construction and traversal

use crate::algebra::vector::Vec2;
use std::fmt;

/// Main error type for all traversal operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraversalError {
    /// A requested rotation angle is not a multiple of 90 degrees
    InvalidRotation {
        /// The rejected angle in degrees
        degrees: i32,
    },

    /// The face layout cannot be folded into a cube
    ///
    /// Raised during policy construction when the net has the wrong
    /// number of face blocks, contains a block unreachable from the fold
    /// root, or folds onto itself (duplicate outward normals).
    MalformedNet {
        /// Description of what's wrong with the net
        reason: String,
    },

    /// A wrap resolved to a cell that is neither open floor nor wall
    ///
    /// Indicates a corrupt net or grid; the computation is deterministic
    /// so there is no retry.
    IllegalWrapTarget {
        /// The resolved destination cell
        position: Vec2,
    },

    /// The instruction stream contains a character that is neither a
    /// digit nor a turn letter
    MalformedInstruction {
        /// The offending character
        character: char,
        /// Byte offset into the instruction stream
        offset: usize,
    },

    /// The character grid contains a tile outside the known alphabet
    UnexpectedTile {
        /// The offending character
        character: char,
        /// Column of the offending character
        column: usize,
        /// Row of the offending character
        row: usize,
    },
}

impl fmt::Display for TraversalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => {
                write!(f, "Rotation angle {degrees} is not a multiple of 90 degrees")
            }
            Self::MalformedNet { reason } => {
                write!(f, "Malformed cube net: {reason}")
            }
            Self::IllegalWrapTarget { position } => {
                write!(
                    f,
                    "Wrap resolved to a void cell at ({}, {})",
                    position.x, position.y
                )
            }
            Self::MalformedInstruction { character, offset } => {
                write!(
                    f,
                    "Unexpected character '{character}' at offset {offset} in instruction stream"
                )
            }
            Self::UnexpectedTile {
                character,
                column,
                row,
            } => {
                write!(f, "Unexpected tile '{character}' at ({column}, {row})")
            }
        }
    }
}

impl std::error::Error for TraversalError {}

/// Convenience type alias for traversal results
pub type Result<T> = std::result::Result<T, TraversalError>;

/// Create a malformed net error
pub fn malformed_net(reason: &impl ToString) -> TraversalError {
    TraversalError::MalformedNet {
        reason: reason.to_string(),
    }
}
