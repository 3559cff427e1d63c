// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A dense, row-major two-dimensional grid
//!
//! Everything the carver computes that is not an image lives in one of
//! these: the energy map, the dynamic-programming cost accumulator,
//! and the record of which parent each cell chose.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field of values, stored row by row.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

/// One non-negative importance value per pixel.
pub type EnergyMap = Grid<f64>;

impl<T: Default + Clone> Grid<T> {
    /// A new grid with every cell set to the type's default.
    pub fn new(width: u32, height: u32) -> Self {
        Grid {
            width,
            height,
            cells: vec![T::default(); width as usize * height as usize],
        }
    }
}

impl<T> Grid<T> {
    /// Wrap an existing row-major vector.  The vector must hold exactly
    /// `width * height` cells.
    pub fn from_vec(width: u32, height: u32, cells: Vec<T>) -> Self {
        assert_eq!(
            cells.len(),
            width as usize * height as usize,
            "a {}x{} grid needs {} cells, got {}",
            width,
            height,
            width as usize * height as usize,
            cells.len()
        );
        Grid {
            width,
            height,
            cells,
        }
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        (y as usize) * (self.width as usize) + (x as usize)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// (width, height), in the same order as `GenericImageView`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// A single row as a contiguous slice.
    pub fn row(&self, y: u32) -> &[T] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }
}

impl<T: Clone> Grid<T> {
    /// Swap the two axes: the cell at `(x, y)` moves to `(y, x)`.
    pub fn transpose(&self) -> Self {
        let mut cells = Vec::with_capacity(self.cells.len());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push(self[(x, y)].clone());
            }
        }
        Grid {
            width: self.height,
            height: self.width,
            cells,
        }
    }
}

impl<T> Index<(u32, u32)> for Grid<T> {
    type Output = T;

    fn index(&self, (x, y): (u32, u32)) -> &T {
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<T> IndexMut<(u32, u32)> for Grid<T> {
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut T {
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CELLS: [u32; 6] = [1, 2, 3, 4, 5, 6];

    #[test]
    fn addressing_is_row_major() {
        let grid = Grid::from_vec(3, 2, CELLS.to_vec());
        assert_eq!(grid[(0, 0)], 1);
        assert_eq!(grid[(2, 0)], 3);
        assert_eq!(grid[(0, 1)], 4);
        assert_eq!(grid.row(1), &[4, 5, 6]);
    }

    #[test]
    fn transpose_swaps_axes() {
        let grid = Grid::from_vec(3, 2, CELLS.to_vec());
        let flipped = grid.transpose();
        assert_eq!(flipped.dimensions(), (2, 3));
        assert_eq!(flipped.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(flipped.transpose(), grid);
    }

    #[test]
    fn new_grid_is_defaulted_and_writable() {
        let mut grid: Grid<f64> = Grid::new(2, 2);
        assert!(grid.iter().all(|&c| c == 0.0));
        grid[(1, 1)] = 4.5;
        assert_eq!(grid.as_slice(), &[0.0, 0.0, 0.0, 4.5]);
    }

    #[test]
    #[should_panic]
    fn mismatched_vector_is_rejected() {
        Grid::from_vec(2, 2, vec![0u8; 3]);
    }
}
