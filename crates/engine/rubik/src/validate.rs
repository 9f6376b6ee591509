//! Structural validation: sticker counts only.
//!
//! A cube passes when each of the six colors appears exactly nine times.
//! That rejects typos and faces entered twice, but not impossible piece
//! arrangements such as a single twisted corner; the solver rejects those.

use crate::error::ValidationError;
use crate::{Color, Facelets};
use std::fmt;

/// Number of stickers of each color, indexed by [`Color::index`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorCounts([usize; 6]);

impl ColorCounts {
    /// Count the stickers of a cube
    pub fn of(cube: &Facelets) -> Self {
        let mut counts = [0usize; 6];
        for color in cube.stickers() {
            counts[color.index()] += 1;
        }
        ColorCounts(counts)
    }

    /// Stickers of one color
    pub fn get(&self, color: Color) -> usize {
        self.0[color.index()]
    }

    /// Number of colors that appear at least once
    pub fn distinct(&self) -> usize {
        self.0.iter().filter(|&&n| n > 0).count()
    }

    /// Six colors, nine stickers each
    pub fn is_balanced(&self) -> bool {
        self.distinct() == 6 && self.0.iter().all(|&n| n == 9)
    }
}

impl fmt::Display for ColorCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, color) in Color::iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", color, self.get(color))?;
        }
        Ok(())
    }
}

/// True if the cube has six colors with nine stickers each
pub fn validate(cube: &Facelets) -> bool {
    ColorCounts::of(cube).is_balanced()
}

/// Like [`validate`], reporting the offending counts
pub fn check(cube: &Facelets) -> Result<(), ValidationError> {
    let counts = ColorCounts::of(cube);
    if counts.is_balanced() {
        Ok(())
    } else {
        Err(ValidationError::ColorCounts { counts })
    }
}
