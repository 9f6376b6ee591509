//! Random scrambles.
//!
//! A scramble is produced by turning a solved cube, so its facelets are
//! always a reachable cube. The result is handed back as a value: the moves
//! used and the cube they produce.

use crate::notation::{format_sequence, Move, Turn};
use crate::{Face, Facelets};
use rand::Rng;
use serde::Serialize;
use std::collections::BTreeMap;

/// Number of moves in a scramble when none is given
pub const DEFAULT_LENGTH: usize = 25;

/// A scramble sequence and the cube it produces from solved
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scramble {
    moves: Vec<Move>,
    cube: Facelets,
}

impl Scramble {
    /// Random sequence of `length` moves, never turning one face twice in a row
    pub fn random<R: Rng + ?Sized>(rng: &mut R, length: usize) -> Self {
        const TURNS: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

        let mut moves: Vec<Move> = Vec::with_capacity(length);
        while moves.len() < length {
            let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
            if moves.last().is_some_and(|prev| prev.face == face) {
                continue;
            }
            let turn = TURNS[rng.random_range(0..TURNS.len())];
            moves.push(Move::new(face, turn));
        }
        Self::from_moves(moves)
    }

    /// Scramble with a caller-chosen sequence
    pub fn from_moves(moves: Vec<Move>) -> Self {
        let mut cube = Facelets::solved();
        cube.apply_sequence(&moves);
        Scramble { moves, cube }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Moves in standard notation, e.g. "R U' F2"
    pub fn sequence(&self) -> String {
        format_sequence(&self.moves)
    }

    pub fn cube(&self) -> &Facelets {
        &self.cube
    }

    pub fn into_cube(self) -> Facelets {
        self.cube
    }

    /// Nine color codes per face, in the order faces are entered by hand
    /// (U, L, F, R, B, D)
    pub fn face_strings(&self) -> Vec<(Face, String)> {
        Face::PROMPT
            .iter()
            .map(|&face| (face, self.cube.face_string(face)))
            .collect()
    }

    /// Serializable summary of this scramble
    pub fn report(&self) -> ScrambleReport {
        ScrambleReport {
            sequence: self.sequence(),
            faces: self
                .face_strings()
                .into_iter()
                .map(|(face, s)| (face.label().to_string(), s))
                .collect(),
        }
    }
}

/// Scramble as plain data: the sequence plus per-face color strings keyed
/// by face label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrambleReport {
    pub sequence: String,
    pub faces: BTreeMap<String, String>,
}

/// Random scramble of `length` moves from the thread-local generator
pub fn generate(length: usize) -> Scramble {
    Scramble::random(&mut rand::rng(), length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_length_and_no_repeated_faces() {
        let mut rng = StdRng::seed_from_u64(7);
        let scramble = Scramble::random(&mut rng, DEFAULT_LENGTH);

        assert_eq!(scramble.moves().len(), DEFAULT_LENGTH);
        for pair in scramble.moves().windows(2) {
            assert_ne!(pair[0].face, pair[1].face);
        }
    }

    #[test]
    fn test_seeded_scrambles_repeat() {
        let a = Scramble::random(&mut StdRng::seed_from_u64(42), 20);
        let b = Scramble::random(&mut StdRng::seed_from_u64(42), 20);
        assert_eq!(a, b);
    }

    #[test]
    fn test_scrambled_cube_is_valid() {
        let scramble = generate(30);
        assert!(validate::validate(scramble.cube()));
        assert_eq!(scramble.sequence().split(' ').count(), 30);
    }

    #[test]
    fn test_face_strings_in_prompt_order() {
        let scramble = Scramble::from_moves(Vec::new());
        let faces: Vec<Face> = scramble.face_strings().iter().map(|(f, _)| *f).collect();
        assert_eq!(faces, Face::PROMPT.to_vec());
        assert_eq!(scramble.face_strings()[0].1, "WWWWWWWWW");

        let rebuilt = Facelets::from_face_strings(scramble.face_strings()).unwrap();
        assert_eq!(&rebuilt, scramble.cube());
    }

    #[test]
    fn test_empty_scramble_is_solved() {
        let scramble = Scramble::from_moves(Vec::new());
        assert!(scramble.cube().is_solved());
        assert_eq!(scramble.sequence(), "");
        assert_eq!(scramble.report().faces.len(), 6);
    }
}
