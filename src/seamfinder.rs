//! Finding the seam
//!
//! Walk a cumulative cost map backwards, from the cheapest cell on the
//! last step to the first step, always moving to the cheapest of the
//! (up to three) cells that could have led here.
//!
//! Ties go to the lowest offset, every time: when scanning the last
//! step, and when choosing between `offset - 1`, `offset` and
//! `offset + 1`.  Nothing about the image makes the leftmost (or
//! topmost) choice better; it is simply the rule, and sticking to it
//! is what makes the same map always yield the same seam.

use crate::costmap::{neighbours, CumulativeCostMap};
use crate::cq;
use crate::direction::Direction;
use crate::error::SeamError;
use itertools::Itertools;
use std::cmp::Ordering;

/// A seam: for each step across the image, the offset of the pixel to
/// remove.  For a vertical seam `as_slice()[y]` is a column; for a
/// horizontal seam `as_slice()[x]` is a row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam {
    direction: Direction,
    path: Vec<u32>,
}

impl Seam {
    /// Wrap a list of offsets as a seam.  Nothing is checked here; see
    /// `check` and `is_connected`.
    pub fn new(direction: Direction, path: Vec<u32>) -> Self {
        Seam { direction, path }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn len(&self) -> usize {
        self.path.len()
    }

    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.path
    }

    /// The offset on the last step.  This is where every other step's
    /// hole gets shuffled to when the seam is removed.
    pub fn anchor(&self) -> Option<u32> {
        self.path.last().copied()
    }

    /// True if no two neighbouring steps are more than one offset
    /// apart.
    pub fn is_connected(&self) -> bool {
        self.path
            .iter()
            .tuple_windows()
            .all(|(a, b)| cq!(a > b, a - b, b - a) <= 1)
    }

    /// The `(x, y)` coordinates of every pixel on the seam, in step
    /// order.
    pub fn positions<'a>(&'a self) -> impl Iterator<Item = (u32, u32)> + 'a {
        let direction = self.direction;
        (0u32..)
            .zip(self.path.iter())
            .map(move |(step, offset)| direction.at(step, *offset))
    }

    /// Make sure this seam can be cut out of an image of the given
    /// size: one entry per step, every entry in range.
    pub fn check(&self, width: u32, height: u32) -> Result<(), SeamError> {
        let (seam_len, span) = (
            self.direction.seam_len(width, height),
            self.direction.span(width, height),
        );
        if self.path.len() != seam_len as usize {
            return Err(SeamError::malformed(format!(
                "{} seam has {} entries, a {}x{} image needs {}",
                self.direction,
                self.path.len(),
                width,
                height,
                seam_len
            )));
        }
        if let Some((step, offset)) = self.path.iter().enumerate().find(|(_, o)| **o >= span) {
            return Err(SeamError::malformed(format!(
                "entry {} is {}, past the last offset {}",
                step,
                offset,
                span.saturating_sub(1)
            )));
        }
        Ok(())
    }
}

// The first of several equally cheap offsets wins; `min_by` keeps the
// earliest of equal elements.
fn cheapest<I, F>(offsets: I, cost: F) -> Option<u32>
where
    I: Iterator<Item = u32>,
    F: Fn(u32) -> f64,
{
    offsets
        .map(|o| (o, cost(o)))
        .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal))
        .map(|(o, _)| o)
}

/// Given a cumulative cost map, return the cheapest seam through it.
/// An empty map has no seams at all, and is refused.
pub fn find_seam(costs: &CumulativeCostMap) -> Result<Seam, SeamError> {
    let direction = costs.direction();
    if costs.is_empty() {
        return Err(SeamError::invalid_dimensions(
            (costs.width(), costs.height()),
            direction,
            1,
        ));
    }

    let (seam_len, span) = (costs.seam_len(), costs.span());
    let no_candidates = || SeamError::malformed("no candidate offsets on a non-empty map");

    // Find the offset of the cheapest seam on the final step.
    let last = seam_len - 1;
    let mut current = cheapest(0..span, |o| costs.at(last, o)).ok_or_else(no_candidates)?;

    // Working backwards, each step takes the cheapest of the cells that
    // could have led to the one below it.
    let mut path = vec![0; seam_len as usize];
    path[last as usize] = current;
    for step in (1..seam_len).rev() {
        current = cheapest(neighbours(current, span), |o| costs.at(step - 1, o))
            .ok_or_else(no_candidates)?;
        path[(step - 1) as usize] = current;
    }

    Ok(Seam::new(direction, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::costmap::cumulative_cost;
    use crate::energy::EnergyMap;
    use crate::twodmap::TwoDimensionalMap;

    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    fn energy_map(width: u32, height: u32, values: &[f64]) -> EnergyMap {
        TwoDimensionalMap::from_vec(width, height, values.to_vec()).unwrap()
    }

    fn seam_of(energy: &EnergyMap, direction: Direction) -> Seam {
        find_seam(&cumulative_cost(energy, direction)).unwrap()
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = energy_map(5, 4, &ENERGY_DATA);
        assert_eq!(seam_of(&energy, Direction::Vertical).as_slice(), &[2, 3, 4, 3]);
    }

    #[test]
    fn energy_grid_to_horizontal_seam() {
        let energy = energy_map(5, 4, &ENERGY_DATA);
        assert_eq!(
            seam_of(&energy, Direction::Horizontal).as_slice(),
            &[0, 1, 0, 1, 2]
        );
    }

    #[test]
    fn cheap_middle_column_is_chosen() {
        let energy = energy_map(3, 3, &[5.0, 1.0, 5.0, 5.0, 1.0, 5.0, 5.0, 1.0, 5.0]);
        let costs = cumulative_cost(&energy, Direction::Vertical);
        let last_row_min = (0..3).map(|x| costs[(x, 2)]).fold(std::f64::INFINITY, f64::min);
        assert_eq!(last_row_min, 3.0);
        assert_eq!(find_seam(&costs).unwrap().as_slice(), &[1, 1, 1]);
    }

    #[test]
    fn ties_go_to_the_lowest_offset() {
        // Two identical valleys; the left one wins, every time.
        let energy = energy_map(
            5,
            3,
            &[
                1.0, 9.0, 9.0, 9.0, 1.0, //
                1.0, 9.0, 9.0, 9.0, 1.0, //
                1.0, 9.0, 9.0, 9.0, 1.0,
            ],
        );
        let first = seam_of(&energy, Direction::Vertical);
        assert_eq!(first.as_slice(), &[0, 0, 0]);
        for _ in 0..10 {
            assert_eq!(seam_of(&energy, Direction::Vertical), first);
        }

        let flat = EnergyMap::new(4, 4);
        assert_eq!(seam_of(&flat, Direction::Vertical).as_slice(), &[0, 0, 0, 0]);
        assert_eq!(seam_of(&flat, Direction::Horizontal).as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn backtracking_ties_prefer_the_upper_left_neighbour() {
        let energy = energy_map(3, 2, &[2.0, 2.0, 2.0, 9.0, 0.0, 9.0]);
        assert_eq!(seam_of(&energy, Direction::Vertical).as_slice(), &[0, 1]);
    }

    #[test]
    fn seams_are_connected_and_as_cheap_as_promised() {
        let energy = TwoDimensionalMap::from_fn(9, 7, |x, y| f64::from((x * 5 + y * 11 + x * y) % 7));
        for &direction in &[Direction::Vertical, Direction::Horizontal] {
            let costs = cumulative_cost(&energy, direction);
            let seam = find_seam(&costs).unwrap();
            assert_eq!(seam.len() as u32, costs.seam_len());
            assert!(seam.is_connected());
            assert!(seam.check(9, 7).is_ok());

            let last = costs.seam_len() - 1;
            let best = (0..costs.span())
                .map(|o| costs.at(last, o))
                .fold(std::f64::INFINITY, f64::min);
            let total: f64 = seam.positions().map(|xy| energy[xy]).sum();
            assert_eq!(total, best);
        }
    }

    #[test]
    fn one_pixel_wide_images_still_have_a_seam() {
        let energy = energy_map(1, 3, &[4.0, 2.0, 7.0]);
        assert_eq!(seam_of(&energy, Direction::Vertical).as_slice(), &[0, 0, 0]);
        assert_eq!(seam_of(&energy, Direction::Horizontal).as_slice(), &[1]);
    }

    #[test]
    fn empty_maps_have_no_seam() {
        let costs = cumulative_cost(&EnergyMap::new(0, 3), Direction::Vertical);
        assert!(matches!(
            find_seam(&costs),
            Err(SeamError::InvalidDimensions { requested: 1, .. })
        ));
    }

    #[test]
    fn positions_follow_the_direction() {
        let seam = Seam::new(Direction::Horizontal, vec![2, 1, 1]);
        assert_eq!(seam.positions().collect::<Vec<_>>(), vec![(0, 2), (1, 1), (2, 1)]);
        let seam = Seam::new(Direction::Vertical, vec![2, 1, 1]);
        assert_eq!(seam.positions().collect::<Vec<_>>(), vec![(2, 0), (1, 1), (1, 2)]);
        assert_eq!(seam.anchor(), Some(1));
    }

    #[test]
    fn check_refuses_seams_that_do_not_fit() {
        let short = Seam::new(Direction::Vertical, vec![0, 1]);
        assert!(matches!(short.check(3, 3), Err(SeamError::MalformedSeam(_))));
        let wide = Seam::new(Direction::Vertical, vec![0, 1, 3]);
        assert!(matches!(wide.check(3, 3), Err(SeamError::MalformedSeam(_))));
        let jumpy = Seam::new(Direction::Vertical, vec![0, 2, 2]);
        assert!(jumpy.check(3, 3).is_ok());
        assert!(!jumpy.is_connected());
    }
}
