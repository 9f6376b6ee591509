//! Rubik CLI - terminal front end for the `rubik` engine
//!
//! The `rubik` binary reads a cube (JSON file or typed-in faces), solves it
//! through an external two-phase solver, and offers scramble, apply and
//! encode helpers. The command bodies live here so they can be tested
//! against in-memory input and output.

pub mod commands;
pub mod input;

pub use commands::SolveOutcome;
