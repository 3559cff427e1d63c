// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map
//!
//! The classic dynamic-programming pass: every cell accumulates its own
//! energy plus the cheapest of the three cells above it, and remembers
//! which of the three it took.  The seam is then read back from the
//! cheapest cell of the bottom row.
//!
//! When two or more parents cost the same, the leftmost wins: left,
//! then straight up, then right.  The bottom row likewise resolves ties
//! to the lowest column.  Reimplementations that want identical seams
//! have to agree on this.

use crate::grid::{EnergyMap, Grid};
use crate::seam::Seam;

/// Which cell of the row above a cell's cheapest path came through.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    Left,
    Straight,
    Right,
}

impl Default for Step {
    fn default() -> Self {
        Step::Straight
    }
}

impl Step {
    // Tie-break order.
    const PRIORITY: [Step; 3] = [Step::Left, Step::Straight, Step::Right];

    /// The column in the row above, given the column in this row.
    /// Only valid for steps the finder actually recorded.
    pub fn parent_of(self, x: u32) -> u32 {
        match self {
            Step::Left => x - 1,
            Step::Straight => x,
            Step::Right => x + 1,
        }
    }

    // Out of range neighbours cost infinity, which keeps the edges from
    // needing special cases below.
    fn cost_above(self, above: &[f64], x: u32) -> f64 {
        let x = x as usize;
        match self {
            Step::Left if x == 0 => std::f64::INFINITY,
            Step::Left => above[x - 1],
            Step::Straight => above[x],
            Step::Right if x + 1 >= above.len() => std::f64::INFINITY,
            Step::Right => above[x + 1],
        }
    }
}

fn cheapest_parent(above: &[f64], x: u32) -> (Step, f64) {
    Step::PRIORITY
        .iter()
        .map(|&step| (step, step.cost_above(above, x)))
        .fold((Step::Straight, std::f64::INFINITY), |best, candidate| {
            if candidate.1 < best.1 {
                candidate
            } else {
                best
            }
        })
}

/// The accumulated cost of the cheapest path reaching every pixel, and
/// the step each pixel took to get there.
#[derive(Debug, Clone)]
pub struct CostMap {
    cost: Grid<f64>,
    steps: Grid<Step>,
}

impl CostMap {
    /// Run the dynamic-programming sweep over an energy map.
    pub fn accumulate(energy: &EnergyMap) -> Self {
        let (width, height) = energy.dimensions();
        assert!(
            width > 0 && height > 0,
            "cannot find a seam in an empty {}x{} energy map",
            width,
            height
        );

        // The first row costs exactly its own energy.
        let mut cost = energy.clone();
        let mut steps: Grid<Step> = Grid::new(width, height);

        for y in 1..height {
            for x in 0..width {
                let (step, parent_cost) = cheapest_parent(cost.row(y - 1), x);
                cost[(x, y)] += parent_cost;
                steps[(x, y)] = step;
            }
        }

        CostMap { cost, steps }
    }

    /// The accumulated cost grid.
    pub fn cost(&self) -> &Grid<f64> {
        &self.cost
    }

    // First occurrence wins.
    fn cheapest_bottom_column(&self) -> u32 {
        let bottom = self.cost.row(self.cost.height() - 1);
        (0..bottom.len()).fold(0, |best, x| if bottom[x] < bottom[best] { x } else { best }) as u32
    }

    /// The total energy of the cheapest seam.
    pub fn minimum_cost(&self) -> f64 {
        self.cost[(self.cheapest_bottom_column(), self.cost.height() - 1)]
    }

    /// Working backwards from the cheapest cell of the bottom row,
    /// collect the column of every row on the path.
    pub fn backtrack(&self) -> Seam {
        let height = self.cost.height();
        let mut seam_col = self.cheapest_bottom_column();
        let mut columns = vec![0; height as usize];
        for y in (0..height).rev() {
            columns[y as usize] = seam_col;
            if y > 0 {
                seam_col = self.steps[(seam_col, y)].parent_of(seam_col);
            }
        }
        Seam::from(columns)
    }
}

/// Given an energy map, return the cheapest vertical seam.
pub fn find_vertical_seam(energy: &EnergyMap) -> Seam {
    CostMap::accumulate(energy).backtrack()
}
