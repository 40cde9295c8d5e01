//! The cumulative cost map
//!
//! Given an energy map, compute for every pixel the least total energy
//! of any seam that starts on the first step (the top row, or the left
//! column) and ends at that pixel.  This is the textbook dynamic
//! programming pass from [Avidan & Shamir (2007)]: each step depends
//! only on the step before it, so the map is filled in one sweep.

use crate::cq;
use crate::direction::Direction;
use crate::energy::EnergyMap;
use crate::twodmap::TwoDimensionalMap;
use std::ops::{Index, RangeInclusive};

/// The offsets on the previous step from which a seam can reach
/// `offset`: at most three, fewer at either edge.  Neighbours that fall
/// outside the image are left out rather than given a stand-in value.
#[inline]
pub(crate) fn neighbours(offset: u32, span: u32) -> RangeInclusive<u32> {
    cq!(offset == 0, 0, offset - 1)..=cq!(offset + 1 >= span, offset, offset + 1)
}

/// The cumulative cost of reaching each pixel, for seams running in
/// one particular direction.
#[derive(Debug, Clone)]
pub struct CumulativeCostMap {
    direction: Direction,
    costs: TwoDimensionalMap<f64>,
    range: Option<(f64, f64)>,
}

impl CumulativeCostMap {
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn width(&self) -> u32 {
        self.costs.width()
    }

    pub fn height(&self) -> u32 {
        self.costs.height()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    /// The costs themselves, addressed by `(x, y)`.
    pub fn costs(&self) -> &TwoDimensionalMap<f64> {
        &self.costs
    }

    /// Number of steps a seam takes across this map.
    pub fn seam_len(&self) -> u32 {
        self.direction.seam_len(self.width(), self.height())
    }

    /// Number of offsets available on every step.
    pub fn span(&self) -> u32 {
        self.direction.span(self.width(), self.height())
    }

    /// The cost at a `(step, offset)` address.
    #[inline]
    pub fn at(&self, step: u32, offset: u32) -> f64 {
        self.costs[self.direction.at(step, offset)]
    }

    /// The smallest and largest cumulative cost in the map, or `None`
    /// for an empty map.
    pub fn range(&self) -> Option<(f64, f64)> {
        self.range
    }

    /// Scale every cost linearly onto `0..=255`, the cheapest cost
    /// becoming 0 and the dearest 255.  A flat map comes back all 0.
    pub fn to_levels(&self) -> TwoDimensionalMap<u8> {
        use num_traits::NumCast;
        let (low, high) = self.range.unwrap_or((0.0, 0.0));
        let scale = cq!(high > low, 255.0 / (high - low), 0.0);
        self.costs.map(|c| {
            let level = ((c - low) * scale).round().max(0.0).min(255.0);
            NumCast::from(level).unwrap_or(u8::max_value())
        })
    }
}

impl Index<(u32, u32)> for CumulativeCostMap {
    type Output = f64;

    fn index(&self, xy: (u32, u32)) -> &f64 {
        &self.costs[xy]
    }
}

/// Build the cumulative cost map for seams running in `direction`.
///
/// The first step copies the energy straight across.  Every later
/// cell is its own energy plus the cheapest of the (up to three) cells
/// that could precede it on the step before.
pub fn cumulative_cost(energy: &EnergyMap, direction: Direction) -> CumulativeCostMap {
    let (width, height) = energy.dimensions();
    let (seam_len, span) = (
        direction.seam_len(width, height),
        direction.span(width, height),
    );
    let mut costs: TwoDimensionalMap<f64> = TwoDimensionalMap::new(width, height);
    let mut range: Option<(f64, f64)> = None;

    for step in 0..seam_len {
        for offset in 0..span {
            let here = direction.at(step, offset);
            let cost = if step == 0 {
                energy[here]
            } else {
                let cheapest = neighbours(offset, span)
                    .map(|o| costs[direction.at(step - 1, o)])
                    .fold(std::f64::INFINITY, f64::min);
                energy[here] + cheapest
            };
            costs[here] = cost;
            range = Some(match range {
                None => (cost, cost),
                Some((low, high)) => (low.min(cost), high.max(cost)),
            });
        }
    }

    CumulativeCostMap {
        direction,
        costs,
        range,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One cheap seam runs each way through this grid.
    const ENERGY_DATA: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        9.0, 1.0, 9.0, 8.0, 9.0, //
        9.0, 9.0, 9.0, 9.0, 0.0, //
        9.0, 9.0, 9.0, 0.0, 9.0,
    ];

    const VERTICAL_COSTS: [f64; 20] = [
        9.0, 9.0, 0.0, 9.0, 9.0, //
        18.0, 1.0, 9.0, 8.0, 18.0, //
        10.0, 10.0, 10.0, 17.0, 8.0, //
        19.0, 19.0, 19.0, 8.0, 17.0,
    ];

    const HORIZONTAL_COSTS: [f64; 20] = [
        9.0, 18.0, 10.0, 19.0, 27.0, //
        9.0, 10.0, 19.0, 18.0, 27.0, //
        9.0, 18.0, 19.0, 28.0, 18.0, //
        9.0, 18.0, 27.0, 19.0, 28.0,
    ];

    fn energy() -> EnergyMap {
        TwoDimensionalMap::from_vec(5, 4, ENERGY_DATA.to_vec()).unwrap()
    }

    #[test]
    fn vertical_costs_accumulate_downward() {
        let costs = cumulative_cost(&energy(), Direction::Vertical);
        assert_eq!(costs.costs().as_slice(), &VERTICAL_COSTS);
        assert_eq!(costs.range(), Some((0.0, 19.0)));
    }

    #[test]
    fn horizontal_costs_accumulate_rightward() {
        let costs = cumulative_cost(&energy(), Direction::Horizontal);
        assert_eq!(costs.costs().as_slice(), &HORIZONTAL_COSTS);
        assert_eq!(costs.range(), Some((9.0, 28.0)));
    }

    #[test]
    fn first_step_is_copied_exactly() {
        let energy = energy();
        let vertical = cumulative_cost(&energy, Direction::Vertical);
        for x in 0..5 {
            assert_eq!(vertical[(x, 0)], energy[(x, 0)]);
        }
        let horizontal = cumulative_cost(&energy, Direction::Horizontal);
        for y in 0..4 {
            assert_eq!(horizontal[(0, y)], energy[(0, y)]);
        }
    }

    #[test]
    fn later_steps_never_cost_less_than_their_energy() {
        let energy = TwoDimensionalMap::from_fn(7, 6, |x, y| f64::from((x * 7 + y * 3) % 5) * 0.5);
        for &direction in &[Direction::Vertical, Direction::Horizontal] {
            let costs = cumulative_cost(&energy, direction);
            for step in 1..costs.seam_len() {
                for offset in 0..costs.span() {
                    let here = direction.at(step, offset);
                    assert!(costs[here] >= energy[here]);
                }
            }
        }
    }

    #[test]
    fn edges_do_not_see_past_the_boundary() {
        // A zero just outside the reach of the corner cells must not
        // leak into them.
        let energy =
            TwoDimensionalMap::from_vec(4, 2, vec![5.0, 5.0, 0.0, 5.0, 1.0, 1.0, 1.0, 1.0])
                .unwrap();
        let costs = cumulative_cost(&energy, Direction::Vertical);
        assert_eq!(costs[(0, 1)], 6.0);
        assert_eq!(costs[(1, 1)], 1.0);
        assert_eq!(costs[(3, 1)], 1.0);
    }

    #[test]
    fn single_column_is_a_running_sum() {
        let energy = TwoDimensionalMap::from_vec(1, 3, vec![2.0, 3.0, 4.0]).unwrap();
        let costs = cumulative_cost(&energy, Direction::Vertical);
        assert_eq!(costs.costs().as_slice(), &[2.0, 5.0, 9.0]);
    }

    #[test]
    fn empty_energy_gives_empty_costs() {
        let costs = cumulative_cost(&EnergyMap::new(0, 4), Direction::Vertical);
        assert!(costs.is_empty());
        assert_eq!(costs.range(), None);
        assert!(costs.to_levels().is_empty());
    }

    #[test]
    fn levels_span_the_full_byte() {
        let costs = cumulative_cost(&energy(), Direction::Vertical);
        let levels = costs.to_levels();
        assert_eq!(levels[(2, 0)], 0);
        assert_eq!(levels[(0, 3)], 255);
        let flat = cumulative_cost(&EnergyMap::new(3, 1), Direction::Vertical);
        assert_eq!(flat.to_levels().as_slice(), &[0, 0, 0]);
    }
}
