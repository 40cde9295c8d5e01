//! The energy of an image
//!
//! The carver does not decide what makes a pixel important.  Gradient
//! magnitude, a saliency model, a hand-painted mask: any of them will
//! do, so long as it produces one non-negative score per pixel.  That
//! decision belongs to an `EnergyFunction`, supplied by the caller,
//! and this module is the thin layer that calls it and refuses to
//! pass along anything the rest of the pipeline can't trust.

use crate::error::SeamError;
use crate::twodmap::TwoDimensionalMap;
use crate::PixelBuffer;
use failure::format_err;
use image::Pixel;

/// Per-pixel importance, one value per pixel of the source image.
pub type EnergyMap = TwoDimensionalMap<f64>;

/// Anything that can score the pixels of an image.  The result must
/// have the same width and height as the image, and every score must
/// be finite and non-negative.  It must also be deterministic: the
/// carver calls it again for every seam it removes.
pub trait EnergyFunction<P: Pixel> {
    fn energy(&self, image: &PixelBuffer<P>) -> Result<EnergyMap, failure::Error>;
}

impl<P, F> EnergyFunction<P> for F
where
    P: Pixel,
    F: Fn(&PixelBuffer<P>) -> Result<EnergyMap, failure::Error>,
{
    fn energy(&self, image: &PixelBuffer<P>) -> Result<EnergyMap, failure::Error> {
        self(image)
    }
}

/// Ask the energy function for a grid, and check that what comes back
/// matches the image and holds only usable values.  Any problem,
/// including a failure inside the function itself, is reported as an
/// `EnergySourceFailure`.
pub fn energy_grid<P, E>(source: &E, image: &PixelBuffer<P>) -> Result<EnergyMap, SeamError>
where
    P: Pixel + 'static,
    E: EnergyFunction<P> + ?Sized,
{
    let grid = source
        .energy(image)
        .map_err(SeamError::EnergySourceFailure)?;

    if grid.dimensions() != image.dimensions() {
        let ((gw, gh), (iw, ih)) = (grid.dimensions(), image.dimensions());
        return Err(SeamError::EnergySourceFailure(format_err!(
            "energy grid is {}x{} but the image is {}x{}",
            gw,
            gh,
            iw,
            ih
        )));
    }

    let width = grid.width() as usize;
    if let Some(index) = grid
        .as_slice()
        .iter()
        .position(|e| !(e.is_finite() && *e >= 0.0))
    {
        return Err(SeamError::EnergySourceFailure(format_err!(
            "energy at ({}, {}) is {}; energies must be finite and non-negative",
            index % width,
            index / width,
            grid.as_slice()[index]
        )));
    }

    Ok(grid)
}
