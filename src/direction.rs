//! Seam direction, and the axis mapping built on it.
//!
//! Every stage of the carver is written once, in terms of *steps*
//! (the axis a seam travels along, one entry per step) and *offsets*
//! (the axis a seam entry selects from).  For a vertical seam the
//! steps are rows and the offsets are columns; for a horizontal seam
//! it is the other way around.  Rather than keep a second, mirrored
//! copy of every loop, the direction turns `(step, offset)` back into
//! `(x, y)` on demand.  Think of it as virtually rotating the image
//! 90° so that a column can be walked like a row.

use crate::error::SeamError;
use std::fmt;
use std::str::FromStr;

/// Which way the seams run.
#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Direction {
    /// Top-to-bottom seams; each removal narrows the image by a column.
    Vertical,
    /// Left-to-right seams; each removal shortens the image by a row.
    Horizontal,
}

impl Direction {
    /// How many entries a seam has in an image of this size.
    pub fn seam_len(self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Vertical => height,
            Direction::Horizontal => width,
        }
    }

    /// How many offsets each seam entry may choose from, which is also
    /// the most seams that can ever be removed.
    pub fn span(self, width: u32, height: u32) -> u32 {
        match self {
            Direction::Vertical => width,
            Direction::Horizontal => height,
        }
    }

    /// Map a step along the seam and an offset across it to `(x, y)`.
    #[inline]
    pub fn at(self, step: u32, offset: u32) -> (u32, u32) {
        match self {
            Direction::Vertical => (offset, step),
            Direction::Horizontal => (step, offset),
        }
    }

    /// The size of the image once one seam has been removed.
    pub fn shrunk(self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Direction::Vertical => (width.saturating_sub(1), height),
            Direction::Horizontal => (width, height.saturating_sub(1)),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Direction::Vertical => "vertical",
            Direction::Horizontal => "horizontal",
        })
    }
}

// "0" and "1" are accepted because that is how the direction has
// always been typed in at the prompt.
impl FromStr for Direction {
    type Err = SeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vertical" | "v" | "0" => Ok(Direction::Vertical),
            "horizontal" | "h" | "1" => Ok(Direction::Horizontal),
            _ => Err(SeamError::UnknownDirection(s.to_string())),
        }
    }
}
