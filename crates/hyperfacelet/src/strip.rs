//! Row and column access on a face grid.

use crate::{Color, FaceGrid, OffsetMode, StripError};

/// Whether a strip is a row or a column of a face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Axis {
    /// Horizontal strip, read left to right.
    Row,
    /// Vertical strip, read top to bottom.
    Col,
}

/// Which end of a face a strip is measured from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Offset {
    /// Top row or left column.
    First,
    /// Bottom row or right column.
    Last,
}
impl Offset {
    /// Returns the row or column index selected by this offset when twisting
    /// `layer` on a cube of size `size`.
    ///
    /// With [`OffsetMode::FixedEndpoint`], `First` is always `0` and `Last` is
    /// always `size - 1`. With [`OffsetMode::LayerDepth`], both move inward by
    /// `layer`.
    pub fn resolve(self, size: usize, layer: usize, mode: OffsetMode) -> Result<usize, StripError> {
        let depth = match mode {
            OffsetMode::FixedEndpoint => 0,
            OffsetMode::LayerDepth => layer,
        };
        let index = match self {
            Offset::First => Some(depth),
            Offset::Last => size.checked_sub(depth + 1),
        };
        match index {
            Some(i) if i < size => Ok(i),
            Some(i) => Err(StripError::InvalidOffset { offset: i, size }),
            None => Err(StripError::InvalidOffset {
                offset: depth,
                size,
            }),
        }
    }
}

impl FaceGrid {
    /// Returns a copy of row or column `index`.
    pub fn strip(&self, axis: Axis, index: usize) -> Result<Vec<Color>, StripError> {
        let size = self.size();
        if index >= size {
            return Err(StripError::InvalidOffset {
                offset: index,
                size,
            });
        }
        Ok(match axis {
            Axis::Row => self.rows().nth(index).map(<[Color]>::to_vec).unwrap_or_default(),
            Axis::Col => self.rows().map(|row| row[index]).collect(),
        })
    }

    /// Overwrites row or column `index` with `strip`.
    ///
    /// The grid is unchanged if this returns an error.
    pub(crate) fn set_strip(
        &mut self,
        axis: Axis,
        index: usize,
        strip: &[Color],
    ) -> Result<(), StripError> {
        let size = self.size();
        if index >= size {
            return Err(StripError::InvalidOffset {
                offset: index,
                size,
            });
        }
        if strip.len() != size {
            return Err(StripError::DimensionMismatch {
                expected: size,
                actual: strip.len(),
            });
        }
        for (i, &color) in strip.iter().enumerate() {
            match axis {
                Axis::Row => *self.get_mut(index, i) = color,
                Axis::Col => *self.get_mut(i, index) = color,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn numbered_grid(size: usize) -> FaceGrid {
        FaceGrid::from_fn(size, |i, j| Color::ALL[(i * size + j) % Color::COUNT])
    }

    #[test]
    fn test_resolve_fixed_endpoint() {
        let mode = OffsetMode::FixedEndpoint;
        for layer in 0..5 {
            assert_eq!(Ok(0), Offset::First.resolve(5, layer, mode));
            assert_eq!(Ok(4), Offset::Last.resolve(5, layer, mode));
        }
        assert_eq!(Ok(0), Offset::Last.resolve(1, 0, mode));
    }

    #[test]
    fn test_resolve_layer_depth() {
        let mode = OffsetMode::LayerDepth;
        assert_eq!(Ok(0), Offset::First.resolve(5, 0, mode));
        assert_eq!(Ok(4), Offset::Last.resolve(5, 0, mode));
        assert_eq!(Ok(2), Offset::First.resolve(5, 2, mode));
        assert_eq!(Ok(2), Offset::Last.resolve(5, 2, mode));
        assert_eq!(Ok(3), Offset::First.resolve(5, 3, mode));
        assert_eq!(Ok(1), Offset::Last.resolve(5, 3, mode));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let mode = OffsetMode::LayerDepth;
        assert_eq!(
            Err(StripError::InvalidOffset { offset: 5, size: 5 }),
            Offset::First.resolve(5, 5, mode),
        );
        assert_eq!(
            Err(StripError::InvalidOffset { offset: 5, size: 5 }),
            Offset::Last.resolve(5, 5, mode),
        );
        assert_eq!(
            Err(StripError::InvalidOffset { offset: 0, size: 0 }),
            Offset::Last.resolve(0, 0, OffsetMode::FixedEndpoint),
        );
    }

    #[test]
    fn test_get_strip() {
        let g = numbered_grid(3);
        assert_eq!(
            Ok(vec![Color::Blue, Color::Orange, Color::Red]),
            g.strip(Axis::Row, 1),
        );
        assert_eq!(
            Ok(vec![Color::Green, Color::Red, Color::Green]),
            g.strip(Axis::Col, 2),
        );
        assert_eq!(
            Err(StripError::InvalidOffset { offset: 3, size: 3 }),
            g.strip(Axis::Col, 3),
        );
    }

    #[test]
    fn test_strip_is_a_copy() {
        let mut g = numbered_grid(3);
        let before = g.strip(Axis::Row, 0).unwrap();
        g.set_strip(Axis::Row, 0, &[Color::Yellow; 3]).unwrap();
        assert_eq!(vec![Color::White, Color::Yellow, Color::Green], before);
        assert_eq!(Ok(vec![Color::Yellow; 3]), g.strip(Axis::Row, 0));
    }

    #[test]
    fn test_set_strip() {
        let mut g = FaceGrid::uniform(3, Color::White);
        let strip = [Color::Red, Color::Green, Color::Blue];

        g.set_strip(Axis::Col, 2, &strip).unwrap();
        assert_eq!(Ok(strip.to_vec()), g.strip(Axis::Col, 2));
        assert_eq!(Some(Color::Red), g.get(0, 2));
        assert_eq!(Some(Color::Blue), g.get(2, 2));

        g.set_strip(Axis::Row, 0, &strip).unwrap();
        assert_eq!(Ok(strip.to_vec()), g.strip(Axis::Row, 0));
        assert_eq!(Ok(vec![Color::Blue, Color::Green, Color::Blue]), g.strip(Axis::Col, 2));
    }

    #[test]
    fn test_set_strip_errors_leave_grid_unchanged() {
        let mut g = numbered_grid(3);
        let before = g.clone();
        assert_eq!(
            Err(StripError::DimensionMismatch {
                expected: 3,
                actual: 2
            }),
            g.set_strip(Axis::Row, 0, &[Color::Red; 2]),
        );
        assert_eq!(
            Err(StripError::InvalidOffset { offset: 7, size: 3 }),
            g.set_strip(Axis::Col, 7, &[Color::Red; 3]),
        );
        assert_eq!(before, g);
    }
}
