//! Sticker colors.
//!
//! Colors and faces share letters by convention (`R`, `B`) but are separate
//! alphabets: a scrambled cube carries every color on every face.

use crate::Face;
use serde::{Deserialize, Serialize};

/// Color of a single facelet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    #[serde(rename = "W")]
    White,
    #[serde(rename = "Y")]
    Yellow,
    #[serde(rename = "O")]
    Orange,
    #[serde(rename = "R")]
    Red,
    #[serde(rename = "G")]
    Green,
    #[serde(rename = "B")]
    Blue,
}

impl Color {
    /// All six colors
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Orange,
        Color::Red,
        Color::Green,
        Color::Blue,
    ];

    /// Index for per-color tables
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter code (W, Y, O, R, G, B)
    pub fn code(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
        }
    }

    /// Parse a color code, accepting either case
    pub fn from_code(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'W' => Some(Color::White),
            'Y' => Some(Color::Yellow),
            'O' => Some(Color::Orange),
            'R' => Some(Color::Red),
            'G' => Some(Color::Green),
            'B' => Some(Color::Blue),
            _ => None,
        }
    }

    /// Color of `face` on a solved cube in standard orientation
    /// (white up, green front).
    pub fn home_of(face: Face) -> Self {
        match face {
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
            Face::Left => Color::Orange,
            Face::Right => Color::Red,
            Face::Front => Color::Green,
            Face::Back => Color::Blue,
        }
    }

    /// Face this color belongs to in standard orientation
    pub fn home_face(self) -> Face {
        match self {
            Color::White => Face::Up,
            Color::Yellow => Face::Down,
            Color::Orange => Face::Left,
            Color::Red => Face::Right,
            Color::Green => Face::Front,
            Color::Blue => Face::Back,
        }
    }

    /// Iterator over all colors
    #[inline]
    pub fn iter() -> impl Iterator<Item = Color> {
        Self::ALL.iter().copied()
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
