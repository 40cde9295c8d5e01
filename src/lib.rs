//! Content-aware image retargeting
//!
//! Shrink an image one seam at a time, where a seam is a connected
//! path of pixels running top-to-bottom (or left-to-right) whose total
//! energy is as low as possible.  The energy itself comes from the
//! caller: see `EnergyFunction`.
//!
//! ```
//! use image::{ImageBuffer, Luma};
//! use seamretarget::{retarget, Direction, EnergyMap, PixelBuffer, TwoDimensionalMap};
//!
//! let image: PixelBuffer<Luma<u8>> =
//!     ImageBuffer::from_raw(3, 2, vec![9, 0, 9, 9, 0, 9]).unwrap();
//! let brightness = |img: &PixelBuffer<Luma<u8>>| -> Result<EnergyMap, failure::Error> {
//!     Ok(TwoDimensionalMap::from_fn(img.width(), img.height(), |x, y| {
//!         f64::from(img.get_pixel(x, y).0[0])
//!     }))
//! };
//! let narrower = retarget(&image, Direction::Vertical, 1, brightness).unwrap();
//! assert_eq!(narrower.into_raw(), vec![9, 9, 9, 9]);
//! ```

use image::{ImageBuffer, Pixel};

/// My ternary expression handler.  While it may seem redundant, it's
/// surprisingly useful when working with complex logic tables, such
/// as the edge (literally) cases is the seam carving algorithm.
#[doc(hidden)]
#[macro_export]
macro_rules! cq {
    ($condition: expr, $_true: expr, $_false: expr) => {
        if $condition {
            $_true
        } else {
            $_false
        }
    };
}

pub mod costmap;
pub mod direction;
pub mod energy;
pub mod error;
pub mod seamcarver;
pub mod seamfinder;
pub mod seamremover;
pub mod twodmap;

pub use costmap::{cumulative_cost, CumulativeCostMap};
pub use direction::Direction;
pub use energy::{energy_grid, EnergyFunction, EnergyMap};
pub use error::SeamError;
pub use seamcarver::{Observer, SeamCarver};
pub use seamfinder::{find_seam, Seam};
pub use seamremover::remove_seam;
pub use twodmap::TwoDimensionalMap;

/// The images the carver works on: any pixel type, stored the way
/// `image` stores them.
pub type PixelBuffer<P> = ImageBuffer<P, Vec<<P as Pixel>::Subpixel>>;

/// Remove `count` seams running in `direction` from a copy of `image`,
/// scoring pixels with `energy`.  See `SeamCarver::retarget`.
pub fn retarget<P, E>(
    image: &PixelBuffer<P>,
    direction: Direction,
    count: u32,
    energy: E,
) -> Result<PixelBuffer<P>, SeamError>
where
    P: Pixel + 'static,
    E: EnergyFunction<P>,
{
    SeamCarver::new(energy).retarget(image, direction, count)
}
