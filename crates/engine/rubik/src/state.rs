//! Caller-facing cube state: `{"U": [["W","W","W"], ...], "D": ..., ...}`.
//!
//! This is the shape cube data arrives in over HTTP and from JSON files. It
//! is loosely typed on purpose, so that a bad payload can be reported face
//! by face instead of failing as a whole.

use crate::error::StateError;
use crate::{Color, Face, Facelets};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Face label to 3x3 grid of color codes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CubeState(pub BTreeMap<String, Vec<Vec<char>>>);

impl CubeState {
    /// Check the shape and color symbols, producing a cube
    ///
    /// Color counts are not checked here; see [`crate::validate`].
    pub fn to_facelets(&self) -> Result<Facelets, StateError> {
        let mut seen = [false; 6];
        for key in self.0.keys() {
            let mut chars = key.chars();
            let face = match (chars.next().and_then(Face::from_label), chars.next()) {
                (Some(face), None) => face,
                _ => return Err(StateError::UnknownFace(key.clone())),
            };
            if std::mem::replace(&mut seen[face.index()], true) {
                return Err(StateError::DuplicateFace(face));
            }
        }

        let mut faces = [[[Color::White; 3]; 3]; 6];
        for face in Face::iter() {
            let rows = self.rows(face).ok_or(StateError::MissingFace(face))?;
            if rows.len() != 3 {
                return Err(StateError::RowCount {
                    face,
                    rows: rows.len(),
                });
            }
            for (r, row) in rows.iter().enumerate() {
                if row.len() != 3 {
                    return Err(StateError::RowLength {
                        face,
                        row: r,
                        len: row.len(),
                    });
                }
                for (c, &symbol) in row.iter().enumerate() {
                    faces[face.index()][r][c] =
                        Color::from_code(symbol).ok_or(StateError::UnknownColor {
                            face,
                            row: r,
                            col: c,
                            symbol,
                        })?;
                }
            }
        }
        Ok(Facelets::from_faces(faces))
    }

    /// Rows of a face, looked up by label in either case
    fn rows(&self, face: Face) -> Option<&Vec<Vec<char>>> {
        let upper = face.label().to_string();
        let lower = face.label().to_ascii_lowercase().to_string();
        self.0.get(&upper).or_else(|| self.0.get(&lower))
    }
}

impl From<&Facelets> for CubeState {
    fn from(cube: &Facelets) -> Self {
        let map = Face::iter()
            .map(|face| {
                let rows = cube
                    .face(face)
                    .iter()
                    .map(|row| row.iter().map(|c| c.code()).collect())
                    .collect();
                (face.label().to_string(), rows)
            })
            .collect();
        CubeState(map)
    }
}

impl TryFrom<&CubeState> for Facelets {
    type Error = StateError;

    fn try_from(state: &CubeState) -> Result<Self, Self::Error> {
        state.to_facelets()
    }
}
