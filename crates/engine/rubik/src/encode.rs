//! Canonical facelet string for the two-phase solver.
//!
//! The solver reads 54 face labels: the U, R, F, D, L and B faces in that
//! order, nine labels each, row-major. Each sticker is written as the label
//! of the face whose color it carries. Which face a color "belongs to" is
//! decided by a [`LabelScheme`].

use crate::error::EncodeError;
use crate::{Color, Face, Facelets};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How sticker colors are resolved to face labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelScheme {
    /// A color is labelled by the face it is the center of
    ///
    /// Works for a cube held in any orientation, as long as the six centers
    /// are six different colors.
    #[default]
    #[serde(alias = "center-relative")]
    Center,

    /// White=U, Yellow=D, Orange=L, Red=R, Green=F, Blue=B
    ///
    /// The cube must be entered white up, green front. Other orientations
    /// produce a string describing a different cube.
    Fixed,
}

/// Color-to-face table, indexed by [`Color::index`]
pub type LabelTable = [Option<Face>; 6];

impl LabelScheme {
    /// Build the color-to-face table for a cube
    pub fn table(self, cube: &Facelets) -> LabelTable {
        let mut table = [None; 6];
        match self {
            LabelScheme::Center => {
                for face in Face::CANONICAL {
                    table[cube.center(face).index()] = Some(face);
                }
            }
            LabelScheme::Fixed => {
                for color in Color::iter() {
                    table[color.index()] = Some(color.home_face());
                }
            }
        }
        table
    }

    /// Encode a cube into the solver's 54-character string
    pub fn encode(self, cube: &Facelets) -> Result<FaceletString, EncodeError> {
        let table = self.table(cube);
        let mut out = String::with_capacity(FaceletString::LEN);
        for face in Face::CANONICAL {
            for &color in cube.face(face).iter().flatten() {
                let label = table[color.index()].ok_or(EncodeError::UnmappedColor { color, face })?;
                out.push(label.label());
            }
        }
        FaceletString::new(out)
    }
}

impl fmt::Display for LabelScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LabelScheme::Center => write!(f, "center"),
            LabelScheme::Fixed => write!(f, "fixed"),
        }
    }
}

impl FromStr for LabelScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center" | "centre" | "center-relative" => Ok(LabelScheme::Center),
            "fixed" => Ok(LabelScheme::Fixed),
            other => Err(format!(
                "unknown label scheme \"{other}\" (expected \"center\" or \"fixed\")"
            )),
        }
    }
}

/// Encode with the default [`LabelScheme::Center`] strategy
pub fn encode(cube: &Facelets) -> Result<FaceletString, EncodeError> {
    LabelScheme::default().encode(cube)
}

/// A checked 54-character string over U, R, F, D, L, B
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceletString(String);

impl FaceletString {
    /// Length of every facelet string
    pub const LEN: usize = 54;

    /// Check length and alphabet
    pub fn new(s: impl Into<String>) -> Result<Self, EncodeError> {
        let s = s.into();
        let len = s.chars().count();
        if len != Self::LEN {
            return Err(EncodeError::Length(len));
        }
        if let Some((index, symbol)) = s
            .chars()
            .enumerate()
            .find(|&(_, c)| !"URFDLB".contains(c))
        {
            return Err(EncodeError::Label { index, symbol });
        }
        Ok(FaceletString(s))
    }

    /// String of the solved cube
    pub fn solved() -> Self {
        let s: String = Face::CANONICAL
            .iter()
            .flat_map(|face| std::iter::repeat(face.label()).take(9))
            .collect();
        FaceletString(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Face labels in string order
    pub fn labels(&self) -> impl Iterator<Item = Face> + '_ {
        self.0.chars().filter_map(Face::from_label)
    }

    /// Rebuild a cube in standard colors (each label painted its home color)
    pub fn to_facelets(&self) -> Facelets {
        let mut cube = Facelets::solved();
        for (i, label) in self.labels().enumerate() {
            let face = Face::CANONICAL[i / 9];
            let (row, col) = ((i % 9) / 3, i % 3);
            cube.set_sticker(face, row, col, Color::home_of(label));
        }
        cube
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FaceletString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for FaceletString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for FaceletString {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FaceletString::new(s)
    }
}
