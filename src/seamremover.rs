//! Removing a seam
//!
//! Cutting a different pixel out of every row would leave a ragged
//! image.  Instead, every row's hole is first slid over to one column,
//! the *anchor* (the seam's offset on the final row), by shifting the
//! pixels that sit between the hole and the anchor one place toward
//! the hole.  Once every hole lines up, the anchor column is spliced
//! out in one pass.  Rows stand in for columns, and columns for rows,
//! when the seam is horizontal.

use crate::direction::Direction;
use crate::error::SeamError;
use crate::seamfinder::Seam;
use crate::PixelBuffer;
use image::{ImageBuffer, Pixel};
use itertools::iproduct;

// Slide the pixels between `hole` and `anchor` one place toward the
// hole, so that the hole ends up at the anchor.  Order is preserved.
fn shift_hole<P>(
    scratch: &mut PixelBuffer<P>,
    direction: Direction,
    step: u32,
    hole: u32,
    anchor: u32,
) where
    P: Pixel + 'static,
{
    let mut copy = |to: u32, from: u32| {
        let pixel = *scratch.get_pixel_at(direction.at(step, from));
        scratch.put_pixel_at(direction.at(step, to), pixel);
    };

    if hole < anchor {
        for offset in hole..anchor {
            copy(offset, offset + 1);
        }
    } else if hole > anchor {
        for offset in ((anchor + 1)..=hole).rev() {
            copy(offset, offset - 1);
        }
    }
}

// Small conveniences so the shifting code can pass `(x, y)` pairs
// straight from `Direction::at`.
trait AtPoint<P: Pixel> {
    fn get_pixel_at(&self, xy: (u32, u32)) -> &P;
    fn put_pixel_at(&mut self, xy: (u32, u32), pixel: P);
}

impl<P: Pixel + 'static> AtPoint<P> for PixelBuffer<P> {
    #[inline]
    fn get_pixel_at(&self, (x, y): (u32, u32)) -> &P {
        self.get_pixel(x, y)
    }

    #[inline]
    fn put_pixel_at(&mut self, (x, y): (u32, u32), pixel: P) {
        self.put_pixel(x, y, pixel)
    }
}

/// Return a copy of `image` with `seam` cut out of it: one column
/// narrower for a vertical seam, one row shorter for a horizontal one.
/// Every other pixel survives, in its original order.
///
/// The seam must have exactly one entry per row (or column) and every
/// entry must lie inside the image; anything else is a
/// `MalformedSeam`.  An image with nothing left to remove along the
/// seam's axis is an `InvalidDimensions`.
pub fn remove_seam<P>(image: &PixelBuffer<P>, seam: &Seam) -> Result<PixelBuffer<P>, SeamError>
where
    P: Pixel + 'static,
{
    let direction = seam.direction();
    let (width, height) = image.dimensions();
    let (seam_len, span) = (
        direction.seam_len(width, height),
        direction.span(width, height),
    );
    if span == 0 {
        return Err(SeamError::invalid_dimensions((width, height), direction, 1));
    }
    seam.check(width, height)?;

    let (new_width, new_height) = direction.shrunk(width, height);
    let anchor = match seam.anchor() {
        Some(anchor) => anchor,
        // No steps at all: the image is zero pixels along the seam.
        None => return Ok(ImageBuffer::new(new_width, new_height)),
    };

    let mut scratch = image.clone();
    for (step, hole) in (0..seam_len).zip(seam.as_slice().iter()).rev() {
        shift_hole(&mut scratch, direction, step, *hole, anchor);
    }

    // Every hole now sits on the anchor; splice it out.  Whatever lies
    // before the anchor stays put, whatever lies after moves up by one,
    // and either side may be empty.
    let mut carved: PixelBuffer<P> = ImageBuffer::new(new_width, new_height);
    for (step, offset) in iproduct!(0..seam_len, 0..span).filter(|(_, o)| *o != anchor) {
        let target = if offset < anchor { offset } else { offset - 1 };
        carved.put_pixel_at(
            direction.at(step, target),
            *scratch.get_pixel_at(direction.at(step, offset)),
        );
    }
    Ok(carved)
}
