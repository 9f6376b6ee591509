//! Sticker-level cube state.

use crate::error::StateError;
use crate::{Color, Face};
use std::fmt;

/// One face: three rows of three stickers, row-major, viewed from outside
pub type Grid = [[Color; 3]; 3];

/// The 54 facelets of a 3x3x3 cube
///
/// Storage is indexed by [`Face::index`]. Any assignment of colors is
/// representable, including ones with wrong color counts; see
/// [`crate::validate`] for the structural check.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Facelets {
    faces: [Grid; 6],
}

impl Facelets {
    /// Solved cube with white up and green in front
    pub fn solved() -> Self {
        let mut faces = [[[Color::White; 3]; 3]; 6];
        for face in Face::iter() {
            faces[face.index()] = [[Color::home_of(face); 3]; 3];
        }
        Facelets { faces }
    }

    /// Wrap caller-supplied grids as-is, in [`Face::ALL`] order
    pub fn from_faces(faces: [Grid; 6]) -> Self {
        Facelets { faces }
    }

    /// Build a cube from one 9-character color string per face
    ///
    /// Strings are read row-major; case is ignored and spaces are skipped.
    pub fn from_face_strings<S: AsRef<str>>(
        strings: impl IntoIterator<Item = (Face, S)>,
    ) -> Result<Self, StateError> {
        let mut grids: [Option<Grid>; 6] = [None; 6];
        for (face, s) in strings {
            grids[face.index()] = Some(parse_face(face, s.as_ref())?);
        }

        let mut faces = [[[Color::White; 3]; 3]; 6];
        for face in Face::iter() {
            faces[face.index()] = grids[face.index()].ok_or(StateError::MissingFace(face))?;
        }
        Ok(Facelets { faces })
    }

    /// Borrow a face grid
    #[inline]
    pub fn face(&self, face: Face) -> &Grid {
        &self.faces[face.index()]
    }

    /// Mutably borrow a face grid
    #[inline]
    pub fn face_mut(&mut self, face: Face) -> &mut Grid {
        &mut self.faces[face.index()]
    }

    /// Read one sticker
    #[inline]
    pub fn sticker(&self, face: Face, row: usize, col: usize) -> Color {
        self.faces[face.index()][row][col]
    }

    /// Overwrite one sticker
    #[inline]
    pub fn set_sticker(&mut self, face: Face, row: usize, col: usize, color: Color) {
        self.faces[face.index()][row][col] = color;
    }

    /// Center sticker of a face
    #[inline]
    pub fn center(&self, face: Face) -> Color {
        self.sticker(face, 1, 1)
    }

    /// All 54 stickers in [`Face::ALL`] order, each face row-major
    pub fn stickers(&self) -> impl Iterator<Item = Color> + '_ {
        self.faces.iter().flatten().flatten().copied()
    }

    /// Every face is a single color
    ///
    /// Relative to the centers, so a solved cube held in any orientation
    /// counts as solved.
    pub fn is_solved(&self) -> bool {
        Face::iter().all(|face| {
            let center = self.center(face);
            self.face(face).iter().flatten().all(|&c| c == center)
        })
    }

    /// Nine color codes of a face, row-major (e.g. "WWWWWWWWW")
    pub fn face_string(&self, face: Face) -> String {
        self.face(face).iter().flatten().map(|c| c.code()).collect()
    }

    fn write_row(&self, f: &mut fmt::Formatter<'_>, face: Face, row: usize) -> fmt::Result {
        let [a, b, c] = self.face(face)[row];
        write!(f, "{a} {b} {c}")
    }
}

impl Default for Facelets {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Facelets {
    /// Unfolded net: Up, then Left/Front/Right/Back side by side, then Down
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            write!(f, "      ")?;
            self.write_row(f, Face::Up, row)?;
            writeln!(f)?;
        }
        writeln!(f)?;
        for row in 0..3 {
            for (i, face) in [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .enumerate()
            {
                if i > 0 {
                    write!(f, "  ")?;
                }
                self.write_row(f, face, row)?;
            }
            writeln!(f)?;
        }
        writeln!(f)?;
        for row in 0..3 {
            write!(f, "      ")?;
            self.write_row(f, Face::Down, row)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parse nine color codes into a face grid
///
/// Case is ignored and whitespace is skipped, so "wwg ybr ooo" is accepted.
pub fn parse_face(face: Face, input: &str) -> Result<Grid, StateError> {
    let symbols: Vec<char> = input.chars().filter(|c| !c.is_whitespace()).collect();
    if symbols.len() != 9 {
        return Err(StateError::FaceLength {
            face,
            len: symbols.len(),
        });
    }

    let mut grid = [[Color::White; 3]; 3];
    for (i, &symbol) in symbols.iter().enumerate() {
        let (row, col) = (i / 3, i % 3);
        grid[row][col] = Color::from_code(symbol).ok_or(StateError::UnknownColor {
            face,
            row,
            col,
            symbol,
        })?;
    }
    Ok(grid)
}
