//! The walker and its instruction stream
//!
//! A walker is the moving entity: a position, a facing, and the ability
//! to run move instructions against a board. Walks are finite and
//! deterministic; wall rejections inside a walk silently freeze the
//! remaining steps.

use crate::algebra::direction::{Direction2, Turn};
use crate::algebra::vector::Vec2;
use crate::error::Result;
use crate::traversal::board::Board;

/// One movement instruction
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Step forward up to this many cells
    Walk(u32),
    /// Rotate facing a quarter turn in place
    Turn(Turn),
}

/// The moving entity holding position and facing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Walker {
    position: Vec2,
    facing: Direction2,
}

impl Walker {
    /// Place a walker on a cell with an initial facing
    pub const fn new(position: Vec2, facing: Direction2) -> Self {
        Self { position, facing }
    }

    /// Current cell
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Current facing
    pub const fn facing(&self) -> Direction2 {
        self.facing
    }

    /// Run an instruction sequence against a board
    ///
    /// `Turn` rotates facing in place; `Walk(n)` resolves exactly n
    /// steps, each of which may move, wrap, or stand still at a wall.
    ///
    /// # Errors
    ///
    /// Propagates the first board error; the walker keeps the state it
    /// reached before the failing step.
    pub fn apply(&mut self, board: &mut Board, instructions: &[Instruction]) -> Result<()> {
        for &instruction in instructions {
            match instruction {
                Instruction::Turn(turn) => self.facing = self.facing.turn(turn),
                Instruction::Walk(count) => {
                    for _ in 0..count {
                        let (position, facing) = board.step(self.position, self.facing)?;
                        self.position = position;
                        self.facing = facing;
                    }
                }
            }
        }
        Ok(())
    }

    /// Compatibility checksum of the final pose
    ///
    /// `1000 * (row + 1) + 4 * (column + 1) + facing code`, with facings
    /// coded Right=0, Down=1, Left=2, Up=3.
    pub const fn password(&self) -> i32 {
        1000 * (self.position.y + 1) + 4 * (self.position.x + 1) + self.facing.facing_code()
    }
}

