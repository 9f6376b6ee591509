//! Bridge to an external two-phase solver.
//!
//! The search itself lives outside this crate, behind [`SolveAlgorithm`]. A
//! [`Solver`] takes a private copy of the cube, checks and encodes it, hands
//! the facelet string to the algorithm, and turns whatever comes back into a
//! [`Solution`] or a [`SolveError`]. It never panics on solver failure and
//! never retries.

mod command;

pub use command::CommandSolver;

use crate::encode::{FaceletString, LabelScheme};
use crate::error::{AlgorithmError, NotationError, SolveError};
use crate::notation::{parse_sequence, Move};
use crate::state::CubeState;
use crate::{validate, Facelets};
use std::fmt;
use std::sync::Arc;

/// An external solving algorithm
pub trait SolveAlgorithm {
    /// Solve the cube described by a facelet string
    ///
    /// Returns a whitespace-separated move sequence in standard notation. An
    /// already solved cube yields an empty sequence.
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError>;
}

impl<T: SolveAlgorithm + ?Sized> SolveAlgorithm for &T {
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError> {
        (**self).solve(facelets)
    }
}

impl<T: SolveAlgorithm + ?Sized> SolveAlgorithm for Box<T> {
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError> {
        (**self).solve(facelets)
    }
}

impl<T: SolveAlgorithm + ?Sized> SolveAlgorithm for Arc<T> {
    fn solve(&self, facelets: &FaceletString) -> Result<String, AlgorithmError> {
        (**self).solve(facelets)
    }
}

/// Move sequence returned by the algorithm, exactly as it was returned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution(String);

impl Solution {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// No moves needed
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Parse the sequence into moves
    pub fn moves(&self) -> Result<Vec<Move>, NotationError> {
        parse_sequence(&self.0)
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Solve orchestrator: validate, encode, delegate
#[derive(Debug, Clone)]
pub struct Solver<A> {
    algorithm: A,
    labels: LabelScheme,
}

impl<A: SolveAlgorithm> Solver<A> {
    /// Orchestrator using the default (center-relative) label scheme
    pub fn new(algorithm: A) -> Self {
        Solver {
            algorithm,
            labels: LabelScheme::default(),
        }
    }

    /// Set the label scheme (builder pattern)
    pub fn with_labels(mut self, labels: LabelScheme) -> Self {
        self.labels = labels;
        self
    }

    pub fn labels(&self) -> LabelScheme {
        self.labels
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Solve a cube
    ///
    /// The caller's cube is never modified. Structural and encoding problems
    /// are reported before the algorithm is called.
    pub fn solve(&self, cube: &Facelets) -> Result<Solution, SolveError> {
        let cube = cube.clone();

        tracing::debug!(labels = %self.labels, "encoding cube");
        validate::check(&cube)?;
        let facelets = self.labels.encode(&cube)?;

        tracing::debug!(%facelets, "delegating to solver");
        match self.algorithm.solve(&facelets) {
            Ok(sequence) => {
                tracing::debug!(%sequence, "solved");
                Ok(Solution(sequence))
            }
            Err(err) => {
                tracing::warn!(%facelets, error = %err, "solver failed");
                Err(err.into())
            }
        }
    }

    /// Solve caller-supplied cube data
    ///
    /// Shape problems come back as [`crate::Error::State`], everything after
    /// that as [`crate::Error::Solve`].
    pub fn solve_state(&self, state: &CubeState) -> crate::Result<Solution> {
        let cube = state.to_facelets()?;
        Ok(self.solve(&cube)?)
    }

    /// Check that the algorithm can solve the solved cube
    ///
    /// Any failure here means the algorithm is unusable, so it is reported as
    /// [`SolveError::Unavailable`].
    pub fn self_test(&self) -> Result<(), SolveError> {
        self.algorithm
            .solve(&FaceletString::solved())
            .map(|_| ())
            .map_err(|err| SolveError::Unavailable(err.to_string()))
    }
}
