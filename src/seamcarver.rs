// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main loop
//!
//! Remove seams one at a time until the image is the size asked for.
//! Every pass starts over from the current image: new energy, new
//! cumulative costs, new seam.  Nothing carries from one pass to the
//! next except the (slightly smaller) image itself.

use crate::costmap::{cumulative_cost, CumulativeCostMap};
use crate::direction::Direction;
use crate::energy::{energy_grid, EnergyFunction, EnergyMap};
use crate::error::SeamError;
use crate::seamfinder::find_seam;
use crate::seamremover::remove_seam;
use crate::PixelBuffer;
use image::Pixel;
use tracing::{debug, info_span, trace};

/// Something that wants to look at the maps the carver builds.  It is
/// handed the energy and cumulative cost maps of the first pass of
/// every run, before the first seam is removed.
pub type Observer<'a> = Box<dyn FnMut(&EnergyMap, &CumulativeCostMap) + 'a>;

/// A seam carver: an energy function, and optionally someone watching.
pub struct SeamCarver<'a, E> {
    energy: E,
    observer: Option<Observer<'a>>,
}

impl<'a, E> SeamCarver<'a, E> {
    /// Creates a new SeamCarver that scores pixels with `energy`.
    pub fn new(energy: E) -> Self {
        SeamCarver {
            energy,
            observer: None,
        }
    }

    /// Install an observer for the first-pass maps.  The carver works
    /// the same with or without one.
    pub fn with_observer<F>(mut self, observer: F) -> Self
    where
        F: FnMut(&EnergyMap, &CumulativeCostMap) + 'a,
    {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Remove `count` seams running in `direction` from a copy of
    /// `image`, and return the copy.
    ///
    /// Asking for more seams than the image has columns (or rows), or
    /// for any seams at all from an empty image, is an
    /// `InvalidDimensions` error and nothing is done.  If anything goes
    /// wrong part way through, the whole run fails; there is no partial
    /// result.  A count of zero returns an unchanged copy.
    pub fn retarget<P>(
        &mut self,
        image: &PixelBuffer<P>,
        direction: Direction,
        count: u32,
    ) -> Result<PixelBuffer<P>, SeamError>
    where
        P: Pixel + 'static,
        E: EnergyFunction<P>,
    {
        let (width, height) = image.dimensions();
        if count > 0 && (width == 0 || height == 0 || count > direction.span(width, height)) {
            return Err(SeamError::invalid_dimensions(
                (width, height),
                direction,
                count,
            ));
        }

        let span = info_span!("retarget", %direction, count, width, height);
        let _enter = span.enter();
        debug!("retargeting");

        let mut scratch = image.clone();
        for pass in 0..count {
            let energy = energy_grid(&self.energy, &scratch)?;
            let costs = cumulative_cost(&energy, direction);
            if pass == 0 {
                if let Some(observer) = self.observer.as_mut() {
                    observer(&energy, &costs);
                }
            }
            let seam = find_seam(&costs)?;
            scratch = remove_seam(&scratch, &seam)?;
            trace!(pass, anchor = ?seam.anchor(), "removed seam");
        }

        debug!(
            width = scratch.width(),
            height = scratch.height(),
            "retarget complete"
        );
        Ok(scratch)
    }

    /// Given an image and a desired new width and height, carve
    /// vertical seams until the width fits, then horizontal seams until
    /// the height does.  The carver cannot make an image larger.
    pub fn carve<P>(
        &mut self,
        image: &PixelBuffer<P>,
        new_width: u32,
        new_height: u32,
    ) -> Result<PixelBuffer<P>, SeamError>
    where
        P: Pixel + 'static,
        E: EnergyFunction<P>,
    {
        let (width, height) = image.dimensions();
        if new_width > width || new_height > height {
            return Err(SeamError::Upscale {
                width,
                height,
                new_width,
                new_height,
            });
        }
        let narrowed = self.retarget(image, Direction::Vertical, width - new_width)?;
        self.retarget(&narrowed, Direction::Horizontal, height - new_height)
    }
}
