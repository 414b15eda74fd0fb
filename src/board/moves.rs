//! Move descriptor: a placement followed by a quadrant rotation

use std::fmt;
use std::str::FromStr;

use super::{Board, Direction, Pos, NUM_QUADRANTS};
use crate::error::PentagoError;

/// A full Pentago move.
///
/// Moves are plain values; nothing is range-checked on construction with
/// [`Move::new`]. Use [`Move::try_new`] or [`str::parse`] for external input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// Cell receiving the new piece
    pub pos: Pos,
    /// Quadrant to rotate afterwards (0-3, row-major)
    pub quadrant: u8,
    pub direction: Direction,
}

impl Move {
    #[inline]
    pub fn new(pos: Pos, quadrant: u8, direction: Direction) -> Self {
        Self {
            pos,
            quadrant,
            direction,
        }
    }

    /// Build a move from raw prompt values, rejecting anything out of range.
    pub fn try_new(row: i32, col: i32, quadrant: i32, direction: i32) -> Result<Self, PentagoError> {
        if !Pos::is_valid(row, col) {
            return Err(PentagoError::CellOutOfRange { row, col });
        }
        if !(0..NUM_QUADRANTS as i32).contains(&quadrant) {
            return Err(PentagoError::QuadrantOutOfRange(quadrant));
        }
        let direction = u8::try_from(direction)
            .ok()
            .and_then(Direction::from_code)
            .ok_or(PentagoError::InvalidDirection(direction))?;
        Ok(Self::new(Pos::new(row as u8, col as u8), quadrant as u8, direction))
    }

    /// A move is valid when its target cell is empty. Quadrant and
    /// direction are trusted.
    #[inline]
    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_empty(self.pos)
    }

    /// Cell holding the placed piece once the rotation is done
    pub fn landing(&self) -> Pos {
        if self.pos.quadrant() != self.quadrant {
            return self.pos;
        }
        let turns = match self.direction {
            Direction::Clockwise => 1,
            Direction::CounterClockwise => 3,
        };
        (0..turns).fold(self.pos, |pos, _| pos.rotated_cw())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Put piece ({}, {}), rotate quadrant {} {}",
            self.pos.row,
            self.pos.col,
            self.quadrant,
            self.direction.abbrev()
        )
    }
}

/// Parses `"row col quadrant direction"`, e.g. `"2 1 2 1"`.
impl FromStr for Move {
    type Err = PentagoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split_whitespace()
            .map(str::parse::<i32>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| PentagoError::InvalidFormat(s.trim().to_string()))?;

        match fields[..] {
            [row, col, quadrant, direction] => Move::try_new(row, col, quadrant, direction),
            _ => Err(PentagoError::InvalidFormat(s.trim().to_string())),
        }
    }
}
