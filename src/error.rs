//! The ways a retargeting run can fail.

use crate::direction::Direction;
use failure::Fail;

/// Everything that can go wrong between handing an image to the
/// carver and getting a smaller one back.
#[derive(Debug, Fail)]
pub enum SeamError {
    /// The request cannot be satisfied by an image of this size: more
    /// seams than the axis holds, or any removal at all from an image
    /// with no pixels.
    #[fail(
        display = "cannot remove {} {} seam(s) from a {}x{} image",
        requested, direction, width, height
    )]
    InvalidDimensions {
        width: u32,
        height: u32,
        direction: Direction,
        requested: u32,
    },

    /// A resize that would make the image larger along either axis.
    /// Seams can only be taken away.
    #[fail(
        display = "cannot carve a {}x{} image up to {}x{}",
        width, height, new_width, new_height
    )]
    Upscale {
        width: u32,
        height: u32,
        new_width: u32,
        new_height: u32,
    },

    /// A seam that does not fit the image it is applied to.  This is
    /// always a bug in the finder or the remover, never bad input.
    #[fail(display = "malformed seam: {}", _0)]
    MalformedSeam(String),

    /// The energy function failed, or handed back a grid we cannot
    /// use.  The original error is available as the cause.
    #[fail(display = "energy function failed: {}", _0)]
    EnergySourceFailure(#[cause] failure::Error),

    /// A direction name we do not recognize.
    #[fail(
        display = "unknown seam direction {:?} (expected vertical or horizontal)",
        _0
    )]
    UnknownDirection(String),
}

impl SeamError {
    pub(crate) fn invalid_dimensions(
        (width, height): (u32, u32),
        direction: Direction,
        requested: u32,
    ) -> Self {
        SeamError::InvalidDimensions {
            width,
            height,
            direction,
            requested,
        }
    }

    pub(crate) fn malformed<S: Into<String>>(reason: S) -> Self {
        SeamError::MalformedSeam(reason.into())
    }
}
