// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The seam itself: one column index per row, top to bottom.

use crate::grid::EnergyMap;
use std::ops::Deref;

/// A list of x-coordinates that, when zipped with the range
/// (0..height), give the XY coordinates of every pixel in the seam.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seam(Vec<u32>);

impl Seam {
    pub fn into_inner(self) -> Vec<u32> {
        self.0
    }

    /// True if every pair of neighbouring rows differs by at most one
    /// column.
    pub fn is_connected(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| (i64::from(pair[0]) - i64::from(pair[1])).abs() <= 1)
    }

    /// The total energy of the pixels this seam passes through.
    pub fn energy(&self, energy: &EnergyMap) -> f64 {
        assert_eq!(self.0.len(), energy.height() as usize);
        self.0
            .iter()
            .zip(0..)
            .map(|(&x, y)| energy[(x, y)])
            .sum()
    }
}

impl From<Vec<u32>> for Seam {
    fn from(columns: Vec<u32>) -> Self {
        Seam(columns)
    }
}

impl Deref for Seam {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;

    #[test]
    fn connectivity() {
        assert!(Seam::from(vec![2, 3, 4, 3]).is_connected());
        assert!(Seam::from(vec![0]).is_connected());
        assert!(!Seam::from(vec![0, 2]).is_connected());
        assert!(!Seam::from(vec![3, 2, 0]).is_connected());
    }

    #[test]
    fn sums_the_path() {
        let energy = Grid::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(Seam::from(vec![0, 1, 0]).energy(&energy), 10.0);
    }
}
