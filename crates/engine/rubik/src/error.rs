//! Error types for the rubik crate

use crate::validate::ColorCounts;
use crate::{Color, Face};
use thiserror::Error;

/// Result type alias for rubik operations
pub type Result<T> = std::result::Result<T, Error>;

/// Any error produced by this crate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    State(#[from] StateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Encode(#[from] EncodeError),

    #[error(transparent)]
    Notation(#[from] NotationError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Caller-supplied cube data does not have the shape of a cube
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    /// One of the six faces is absent
    #[error("Missing face \"{0}\" in cube state")]
    MissingFace(Face),

    /// A key that is not one of U, D, L, R, F, B
    #[error("Unknown face \"{0}\" in cube state")]
    UnknownFace(String),

    /// The same face given twice, e.g. under both "U" and "u"
    #[error("Face \"{0}\" given more than once in cube state")]
    DuplicateFace(Face),

    /// Face does not have exactly three rows
    #[error("Invalid format for face \"{face}\": must be a 3x3 array, found {rows} rows")]
    RowCount { face: Face, rows: usize },

    /// Row does not have exactly three stickers
    #[error("Invalid format for face \"{face}\": row {row} must have 3 elements, found {len}")]
    RowLength { face: Face, row: usize, len: usize },

    /// Face string does not have exactly nine stickers
    #[error("Face \"{face}\" needs exactly 9 colors, found {len}")]
    FaceLength { face: Face, len: usize },

    /// Symbol outside W, Y, O, R, G, B
    #[error("Invalid color '{symbol}' on face \"{face}\" at row {row}, column {col}")]
    UnknownColor {
        face: Face,
        row: usize,
        col: usize,
        symbol: char,
    },
}

/// Cube failed the color-count check
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid sticker counts ({counts}); each color must have 9 stickers")]
    ColorCounts { counts: ColorCounts },
}

/// Cube could not be turned into a facelet string
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Color has no entry in the active label table
    #[error("Color {color} on face {face} has no face label")]
    UnmappedColor { color: Color, face: Face },

    /// Facelet string is not 54 characters long
    #[error("Facelet string must have 54 characters, found {0}")]
    Length(usize),

    /// Facelet string contains something other than U, R, F, D, L, B
    #[error("Invalid face label '{symbol}' at position {index}")]
    Label { index: usize, symbol: char },
}

/// Move notation could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("Unknown move \"{0}\"")]
    UnknownMove(String),
}

/// Failure reported by an external solving algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// Algorithm ran and rejected the cube
    #[error("{0}")]
    Rejected(String),

    /// Algorithm could not be run at all
    #[error("{0}")]
    Unavailable(String),
}

/// Outcome of a failed solve
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    /// Sticker counts are wrong; nothing was sent to the solver
    #[error("Invalid cube state: {0}")]
    Invalid(#[from] ValidationError),

    /// Cube could not be encoded; nothing was sent to the solver
    #[error("Could not encode cube: {0}")]
    Encoding(#[from] EncodeError),

    /// Solver rejected a well-formed facelet string
    #[error("No solution exists for this configuration: {0}")]
    Unsolvable(String),

    /// Solver could not be reached
    #[error("Solver unavailable: {0}")]
    Unavailable(String),
}

impl From<AlgorithmError> for SolveError {
    fn from(err: AlgorithmError) -> Self {
        match err {
            AlgorithmError::Rejected(reason) => SolveError::Unsolvable(reason),
            AlgorithmError::Unavailable(reason) => SolveError::Unavailable(reason),
        }
    }
}
