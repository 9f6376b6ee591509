//! Getting a cube into the program: JSON state files or typed-in faces.

use anyhow::{bail, Context, Result};
use rubik::{parse_face, Color, CubeState, Face, Facelets};
use std::io::{BufRead, Write};
use std::path::Path;

/// Read a `{"U": [["W", ...], ...], ...}` file
pub fn load_state(path: &Path) -> Result<Facelets> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let state: CubeState = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a cube state document", path.display()))?;
    let cube = state
        .to_facelets()
        .with_context(|| format!("bad cube state in {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded cube state");
    Ok(cube)
}

/// Load from a file when one is given, otherwise start from a solved cube
pub fn load_or_solved(path: Option<&Path>) -> Result<Facelets> {
    match path {
        Some(path) => load_state(path),
        None => Ok(Facelets::solved()),
    }
}

/// Ask for the nine stickers of each face, in U, L, F, R, B, D order
///
/// A bad line is reported and asked again; running out of input is an error.
pub fn prompt_cube<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<Facelets> {
    writeln!(output, "--- Rubik's Cube Solver ---")?;
    writeln!(
        output,
        "Enter the colors for each face, with WHITE on top and GREEN at the front."
    )?;
    writeln!(output, "Color codes: W, Y, O, R, G, B")?;
    writeln!(
        output,
        "Type the 9 colors of a face row by row as one string (e.g. 'GGGGGGGGG').\n"
    )?;

    let mut entries = Vec::with_capacity(Face::PROMPT.len());
    for face in Face::PROMPT {
        let line = loop {
            write!(
                output,
                "Enter the 9 colors for the {} ({} Center) face: ",
                face.name(),
                Color::home_of(face).name()
            )?;
            output.flush()?;

            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                bail!("input ended before the {} face was entered", face.name());
            }
            match parse_face(face, &line) {
                Ok(_) => break line,
                Err(e) => writeln!(
                    output,
                    "Invalid input ({e}). Please enter exactly 9 valid color characters (W,Y,O,R,G,B)."
                )?,
            }
        };
        entries.push((face, line));
    }

    Ok(Facelets::from_face_strings(entries)?)
}
