use serde::{Deserialize, Serialize};

/// Face of the cube, named from the solver's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Face {
    #[serde(rename = "U")]
    Up,
    #[serde(rename = "D")]
    Down,
    #[serde(rename = "L")]
    Left,
    #[serde(rename = "R")]
    Right,
    #[serde(rename = "F")]
    Front,
    #[serde(rename = "B")]
    Back,
}

impl Face {
    /// All six faces in storage order
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Left,
        Face::Right,
        Face::Front,
        Face::Back,
    ];

    /// Face order of the 54-character facelet string (U, R, F, D, L, B)
    pub const CANONICAL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    /// Order in which faces are entered by hand and listed by the scrambler
    pub const PROMPT: [Face; 6] = [
        Face::Up,
        Face::Left,
        Face::Front,
        Face::Right,
        Face::Back,
        Face::Down,
    ];

    /// Index into per-face storage
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter label used by the solver (U, D, L, R, F, B)
    pub fn label(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Parse a face label, accepting either case
    pub fn from_label(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'U' => Some(Face::Up),
            'D' => Some(Face::Down),
            'L' => Some(Face::Left),
            'R' => Some(Face::Right),
            'F' => Some(Face::Front),
            'B' => Some(Face::Back),
            _ => None,
        }
    }

    /// Get the opposite face
    pub fn opposite(self) -> Self {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Human-readable name, e.g. "Up"
    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "Up",
            Face::Down => "Down",
            Face::Left => "Left",
            Face::Right => "Right",
            Face::Front => "Front",
            Face::Back => "Back",
        }
    }

    /// Iterator over all faces
    #[inline]
    pub fn iter() -> impl Iterator<Item = Face> {
        Self::ALL.iter().copied()
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
