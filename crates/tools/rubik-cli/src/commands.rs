//! Subcommand bodies. Each writes its report to the given output.

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rubik::{
    validate, CubeState, Facelets, LabelScheme, Scramble, SolveAlgorithm, SolveError, Solution,
    Solver,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::io::Write;

/// What `solve` ended up doing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Sticker counts are wrong; the solver was not called
    Invalid,
    AlreadySolved,
    Solved(Solution),
    /// The solver refused the cube or could not be run
    Failed(SolveError),
}

pub fn solve<A: SolveAlgorithm, W: Write>(
    cube: &Facelets,
    solver: &Solver<A>,
    out: &mut W,
) -> Result<SolveOutcome> {
    writeln!(out, "\n--- You entered the following cube state: ---")?;
    writeln!(out, "{cube}")?;

    if let Err(e) = validate::check(cube) {
        writeln!(out, "This is not a valid cube configuration: {e}")?;
        return Ok(SolveOutcome::Invalid);
    }
    if cube.is_solved() {
        writeln!(out, "The cube is already solved!")?;
        return Ok(SolveOutcome::AlreadySolved);
    }

    let solution = match solver.solve(cube) {
        Ok(solution) => solution,
        Err(e) => {
            writeln!(out, "Could not solve the cube: {e}")?;
            return Ok(SolveOutcome::Failed(e));
        }
    };
    let count = solution.moves().map(|m| m.len()).unwrap_or_default();
    writeln!(out, "Solution ({count} moves):\n")?;
    writeln!(out, "{solution}")?;
    Ok(SolveOutcome::Solved(solution))
}

#[derive(Serialize)]
struct ScrambleDocument {
    sequence: String,
    faces: BTreeMap<String, String>,
    cube_state: CubeState,
}

/// Random scramble, reproducible when a seed is given
pub fn scramble<W: Write>(
    length: usize,
    seed: Option<u64>,
    json: bool,
    out: &mut W,
) -> Result<Scramble> {
    anyhow::ensure!(length >= 1, "scramble length must be >= 1");

    let scramble = match seed {
        Some(seed) => Scramble::random(&mut StdRng::seed_from_u64(seed), length),
        None => rubik::scramble::generate(length),
    };

    if json {
        let report = scramble.report();
        let document = ScrambleDocument {
            sequence: report.sequence,
            faces: report.faces,
            cube_state: CubeState::from(scramble.cube()),
        };
        serde_json::to_writer_pretty(&mut *out, &document)?;
        writeln!(out)?;
    } else {
        writeln!(out, "Scramble sequence used: {}\n", scramble.sequence())?;
        for (face, colors) in scramble.face_strings() {
            writeln!(out, "# {} face:", face.name())?;
            writeln!(out, "{colors}")?;
        }
    }
    Ok(scramble)
}

/// Apply a move sequence to a cube and show the result
pub fn apply<W: Write>(mut cube: Facelets, sequence: &str, out: &mut W) -> Result<Facelets> {
    cube.apply_notation(sequence)?;

    writeln!(out, "{cube}")?;
    writeln!(out, "Solved: {}", cube.is_solved())?;
    match LabelScheme::default().encode(&cube) {
        Ok(facelets) => writeln!(out, "Facelets: {facelets}")?,
        Err(e) => writeln!(out, "Facelets: unavailable ({e})")?,
    }
    Ok(cube)
}

/// Print the facelet string a solver would receive
pub fn encode<W: Write>(cube: &Facelets, labels: LabelScheme, out: &mut W) -> Result<()> {
    let facelets = labels.encode(cube)?;
    writeln!(out, "{facelets}")?;
    Ok(())
}
