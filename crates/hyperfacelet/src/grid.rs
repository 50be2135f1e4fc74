//! Square grid of stickers on one face.

use std::fmt;
use std::ops::Index;

use itertools::Itertools;

use crate::{Color, Direction};

/// NxN grid of sticker colors on one face, stored row-major.
///
/// Row 0 is the top row and column 0 is the left column, viewed from outside
/// the cube facing the face.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FaceGrid {
    size: usize,
    cells: Vec<Color>,
}
impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(|c| c.symbol()).join(" "))?;
        }
        Ok(())
    }
}
impl Index<(usize, usize)> for FaceGrid {
    type Output = Color;

    /// Returns the sticker at `(row, col)`. Panics if either is out of range.
    fn index(&self, (row, col): (usize, usize)) -> &Color {
        assert!(
            row < self.size && col < self.size,
            "({row}, {col}) out of range for face of size {}",
            self.size,
        );
        &self.cells[row * self.size + col]
    }
}
impl FaceGrid {
    /// Constructs a grid where every sticker is `color`.
    pub fn uniform(size: usize, color: Color) -> Self {
        Self {
            size,
            cells: vec![color; size * size],
        }
    }

    /// Constructs a grid from a list of rows. Returns `None` if the rows do not
    /// form a square.
    pub fn from_rows(rows: Vec<Vec<Color>>) -> Option<Self> {
        let size = rows.len();
        if rows.iter().any(|row| row.len() != size) {
            return None;
        }
        let cells = rows.into_iter().flatten().collect();
        Some(Self { size, cells })
    }

    /// Constructs a grid by calling `f(row, col)` for each sticker.
    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Color) -> Self {
        let cells = (0..size)
            .cartesian_product(0..size)
            .map(|(row, col)| f(row, col))
            .collect();
        Self { size, cells }
    }

    /// Returns the number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the sticker at `(row, col)`, or `None` if it is out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    pub(crate) fn get_mut(&mut self, row: usize, col: usize) -> &mut Color {
        &mut self.cells[row * self.size + col]
    }

    /// Iterates over rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Color]> {
        // `chunks_exact(0)` panics
        self.cells.chunks_exact(self.size.max(1))
    }

    /// Iterates over all stickers in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Color> {
        self.cells.iter().copied()
    }

    /// Returns the number of stickers with the given color.
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }

    /// Returns whether every sticker has the same color.
    pub fn is_uniform(&self) -> bool {
        self.cells.iter().all_equal()
    }

    /// Returns the grid rotated a quarter turn in `direction`, viewed from
    /// outside the cube.
    ///
    /// Clockwise moves `(i, j)` to `(j, N-1-i)`; counterclockwise moves
    /// `(i, j)` to `(N-1-j, i)`.
    #[must_use]
    pub fn rotated(&self, direction: Direction) -> Self {
        let n = self.size;
        // Invert the mapping so that each destination cell is read once.
        Self::from_fn(n, |row, col| match direction {
            Direction::CW => self[(n - 1 - col, row)],
            Direction::CCW => self[(col, n - 1 - row)],
        })
    }
}
