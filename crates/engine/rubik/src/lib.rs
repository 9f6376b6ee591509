//! Rubik - 3x3x3 cube state, move engine and solver bridge
//!
//! This crate models a cube at the sticker level, turns its faces, checks
//! that a state is structurally plausible, and encodes it into the
//! 54-character facelet string understood by two-phase solvers.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Facelets                                                │
//! │  ├── 6 faces x 3x3 Color grid, indexed by Face          │
//! │  ├── solved(), is_solved(), Display (unfolded net)      │
//! │  └── CubeState / face strings (caller-facing input)     │
//! ├─────────────────────────────────────────────────────────┤
//! │  moves                                                   │
//! │  ├── rotate face grid clockwise                         │
//! │  └── cycle the four bordering bands                     │
//! ├─────────────────────────────────────────────────────────┤
//! │  validate          9 stickers of each of 6 colors       │
//! ├─────────────────────────────────────────────────────────┤
//! │  encode            URFDLB facelet string                │
//! │  ├── LabelScheme::Center (labels from centers)          │
//! │  └── LabelScheme::Fixed  (white up, green front)        │
//! ├─────────────────────────────────────────────────────────┤
//! │  solver            copy → check → encode → delegate     │
//! │  └── SolveAlgorithm (external, e.g. CommandSolver)      │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use rubik::{moves, validate, Facelets, LabelScheme};
//!
//! let mut cube = Facelets::solved();
//! moves::right(&mut cube);
//! assert!(validate::validate(&cube));
//! assert!(!cube.is_solved());
//!
//! let facelets = LabelScheme::Center.encode(&cube).unwrap();
//! assert_eq!(
//!     facelets.as_str(),
//!     "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
//! );
//! ```

mod color;
mod face;
mod facelets;

pub mod encode;
pub mod error;
pub mod moves;
pub mod notation;
pub mod scramble;
pub mod solver;
pub mod state;
pub mod validate;

pub use color::Color;
pub use encode::{encode, FaceletString, LabelScheme};
pub use error::{
    AlgorithmError, EncodeError, Error, NotationError, Result, SolveError, StateError,
    ValidationError,
};
pub use face::Face;
pub use facelets::{parse_face, Facelets, Grid};
pub use notation::{Move, Turn};
pub use scramble::Scramble;
pub use solver::{CommandSolver, SolveAlgorithm, Solution, Solver};
pub use state::CubeState;
