//! Boundary adapters for the collaborator's raw formats
//!
//! The surrounding layer supplies a character layout and a flat
//! instruction stream; these adapters turn both into typed values. File
//! handling and drivers stay outside the crate.

use crate::algebra::direction::Turn;
use crate::error::{Result, TraversalError};
use crate::spatial::grid::{Grid, Tile};
use crate::traversal::walker::Instruction;

/// Parse a character layout into a grid
///
/// `.` is open floor, `#` a wall, and a space void. Rows may be ragged;
/// missing cells are void.
///
/// # Errors
///
/// Returns [`TraversalError::UnexpectedTile`] for any other character.
pub fn parse_grid<S: AsRef<str>>(lines: &[S]) -> Result<Grid> {
    let mut rows = Vec::with_capacity(lines.len());
    for (row, line) in lines.iter().enumerate() {
        let mut cells = Vec::new();
        for (column, character) in line.as_ref().chars().enumerate() {
            let cell = match character {
                '.' => Some(Tile::Open),
                '#' => Some(Tile::Wall),
                ' ' => None,
                _ => {
                    return Err(TraversalError::UnexpectedTile {
                        character,
                        column,
                        row,
                    });
                }
            };
            cells.push(cell);
        }
        rows.push(cells);
    }
    Ok(Grid::from_rows(&rows))
}

/// Parse an instruction stream
///
/// The stream alternates non-negative walk counts with single `L`/`R`
/// turn letters, e.g. `10R5L5`. Surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`TraversalError::MalformedInstruction`] for any character
/// that is neither a digit nor a turn letter.
pub fn parse_instructions(stream: &str) -> Result<Vec<Instruction>> {
    let mut instructions = Vec::new();
    let mut pending: Option<u32> = None;

    for (offset, character) in stream.trim().char_indices() {
        if let Some(digit) = character.to_digit(10) {
            pending = Some(pending.unwrap_or(0) * 10 + digit);
            continue;
        }
        if let Some(count) = pending.take() {
            instructions.push(Instruction::Walk(count));
        }
        let turn = match character {
            'L' => Turn::Left,
            'R' => Turn::Right,
            _ => return Err(TraversalError::MalformedInstruction { character, offset }),
        };
        instructions.push(Instruction::Turn(turn));
    }
    if let Some(count) = pending {
        instructions.push(Instruction::Walk(count));
    }

    Ok(instructions)
}
