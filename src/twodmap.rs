//! Two dimensional maps
//!
//! The energy grid, the cumulative cost grid, and the 8-bit level map
//! derived from the latter are all the same thing underneath: a
//! rectangle of values addressed by `(x, y)`, stored row-major.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of values.  `x` runs across
/// the width, `y` down the height, exactly as in `image::ImageBuffer`.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    values: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map of the given size, every cell holding the
    /// content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            values: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector of values.  Returns `None` if
    /// the vector does not hold exactly `width * height` values.
    pub fn from_vec(width: u32, height: u32, values: Vec<P>) -> Option<Self> {
        if values.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            values,
        })
    }

    /// Build a map by calling `f(x, y)` for every cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> P,
    {
        let mut values = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                values.push(f(x, y));
            }
        }
        TwoDimensionalMap {
            width,
            height,
            values,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// True when the map has no cells at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values in row-major order.
    pub fn as_slice(&self) -> &[P] {
        &self.values
    }

    /// The value at `(x, y)`, or `None` outside the map.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.values[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// A new map of the same shape, each value passed through `f`.
    pub fn map<Q, F>(&self, f: F) -> TwoDimensionalMap<Q>
    where
        Q: Default + Copy,
        F: FnMut(&P) -> Q,
    {
        TwoDimensionalMap {
            width: self.width,
            height: self.height,
            values: self.values.iter().map(f).collect(),
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.  This
    // particular variant is the same one used in image.rs.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        let index = self.get_index(x, y);
        &self.values[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        let index = self.get_index(x, y);
        &mut self.values[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRID: [u32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn addressing_is_row_major() {
        let map = TwoDimensionalMap::from_vec(3, 2, GRID.to_vec()).unwrap();
        assert_eq!(map[(0, 0)], 1);
        assert_eq!(map[(2, 0)], 3);
        assert_eq!(map[(0, 1)], 4);
        assert_eq!(map[(2, 1)], 6);
        assert_eq!(map.get(3, 0), None);
        assert_eq!(map.get(0, 2), None);
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(TwoDimensionalMap::from_vec(4, 2, GRID.to_vec()).is_none());
        assert!(TwoDimensionalMap::<u32>::from_vec(0, 5, vec![]).is_some());
    }

    #[test]
    fn from_fn_matches_from_vec() {
        let built = TwoDimensionalMap::from_fn(3, 2, |x, y| y * 3 + x + 1);
        assert_eq!(built.as_slice(), &GRID);
        let mut doubled = built.map(|v| v * 2);
        doubled[(1, 1)] = 0;
        assert_eq!(doubled.as_slice(), &[2, 4, 6, 8, 0, 12]);
    }
}
