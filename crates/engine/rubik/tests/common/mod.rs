//! Shared helpers for integration tests

#![allow(dead_code)]

use rubik::notation::format_sequence;
use rubik::{AlgorithmError, FaceletString, Facelets, Move, SolveAlgorithm};

/// Facelet-string indices of the eight corner pieces (URF, UFL, ULB, UBR,
/// DFR, DLF, DBL, DRB)
pub const CORNERS: [[usize; 3]; 8] = [
    [8, 9, 20],
    [6, 18, 38],
    [0, 36, 47],
    [2, 45, 11],
    [29, 26, 15],
    [27, 44, 24],
    [33, 53, 42],
    [35, 17, 51],
];

/// Facelet-string indices of the twelve edge pieces (UR, UF, UL, UB, DR, DF,
/// DL, DB, FR, FL, BL, BR)
pub const EDGES: [[usize; 2]; 12] = [
    [5, 10],
    [7, 19],
    [3, 37],
    [1, 46],
    [32, 16],
    [28, 25],
    [30, 43],
    [34, 52],
    [23, 12],
    [21, 41],
    [50, 39],
    [48, 14],
];

/// Sorted labels found at each piece position
pub fn pieces<const N: usize>(facelets: &str, positions: &[[usize; N]]) -> Vec<String> {
    let labels: Vec<char> = facelets.chars().collect();
    let mut found: Vec<String> = positions
        .iter()
        .map(|piece| {
            let mut chars: Vec<char> = piece.iter().map(|&i| labels[i]).collect();
            chars.sort_unstable();
            chars.into_iter().collect()
        })
        .collect();
    found.sort();
    found
}

/// Iterative-deepening search over the 18 face turns
///
/// Only good for shallow cubes; stands in for the external two-phase solver.
pub struct ShallowSolver {
    pub max_depth: usize,
}

impl ShallowSolver {
    pub fn new(max_depth: usize) -> Self {
        ShallowSolver { max_depth }
    }

    fn search(&self, cube: &Facelets, depth: usize, path: &mut Vec<Move>) -> bool {
        if cube.is_solved() {
            return true;
        }
        if depth == 0 {
            return false;
        }
        for mv in Move::all() {
            if path.last().is_some_and(|prev| prev.face == mv.face) {
                continue;
            }
            let mut next = cube.clone();
            next.apply(mv);
            path.push(mv);
            if self.search(&next, depth - 1, path) {
                return true;
            }
            path.pop();
        }
        false
    }
}

impl SolveAlgorithm for ShallowSolver {
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError> {
        let cube = facelets.to_facelets();
        for depth in 0..=self.max_depth {
            let mut path = Vec::new();
            if self.search(&cube, depth, &mut path) {
                return Ok(format_sequence(&path));
            }
        }
        Err(AlgorithmError::Rejected(format!(
            "no solution within {} moves",
            self.max_depth
        )))
    }
}
