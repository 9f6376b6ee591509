//! Standard move notation: `R`, `R'`, `R2`.

use crate::error::NotationError;
use crate::{moves, Face, Facelets};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Amount a face is turned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Clockwise,
    CounterClockwise,
    Double,
}

impl Turn {
    /// Number of clockwise quarter turns
    pub fn quarter_turns(self) -> usize {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    pub fn inverse(self) -> Self {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

/// A single face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    pub const fn new(face: Face, turn: Turn) -> Self {
        Move { face, turn }
    }

    pub const fn clockwise(face: Face) -> Self {
        Move::new(face, Turn::Clockwise)
    }

    pub const fn counter_clockwise(face: Face) -> Self {
        Move::new(face, Turn::CounterClockwise)
    }

    pub const fn double(face: Face) -> Self {
        Move::new(face, Turn::Double)
    }

    /// Move that undoes this one
    pub fn inverse(self) -> Self {
        Move::new(self.face, self.turn.inverse())
    }

    /// Apply to a cube in place
    pub fn apply(self, cube: &mut Facelets) {
        match self.turn {
            Turn::CounterClockwise => moves::turn_prime(cube, self.face),
            turn => {
                for _ in 0..turn.quarter_turns() {
                    moves::turn(cube, self.face);
                }
            }
        }
    }

    /// All 18 moves: every face, every turn
    pub fn all() -> impl Iterator<Item = Move> {
        Face::iter().flat_map(|face| {
            [Turn::Clockwise, Turn::CounterClockwise, Turn::Double]
                .into_iter()
                .map(move |turn| Move::new(face, turn))
        })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.label(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = NotationError;

    /// Accepts `X`, `X'`, `X2`, `X2'` and `X3` for each face letter X
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || NotationError::UnknownMove(s.to_string());
        let mut chars = s.chars();
        let face = chars
            .next()
            .filter(char::is_ascii_uppercase)
            .and_then(Face::from_label)
            .ok_or_else(unknown)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "'" | "3" => Turn::CounterClockwise,
            "2" | "2'" => Turn::Double,
            _ => return Err(unknown()),
        };
        Ok(Move::new(face, turn))
    }
}

/// Parse a whitespace-separated move sequence
pub fn parse_sequence(s: &str) -> Result<Vec<Move>, NotationError> {
    s.split_whitespace().map(str::parse).collect()
}

/// Render a move sequence in standard notation
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sequence that undoes `moves`
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|m| m.inverse()).collect()
}

impl Facelets {
    /// Apply one move in place
    pub fn apply(&mut self, mv: Move) {
        mv.apply(self);
    }

    /// Apply moves in order
    pub fn apply_sequence<'a>(&mut self, moves: impl IntoIterator<Item = &'a Move>) {
        for mv in moves {
            mv.apply(self);
        }
    }

    /// Parse a sequence and apply it
    pub fn apply_notation(&mut self, sequence: &str) -> Result<(), NotationError> {
        let moves = parse_sequence(sequence)?;
        self.apply_sequence(&moves);
        Ok(())
    }
}
