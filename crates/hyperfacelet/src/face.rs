//! Faces of the cube and sticker colors.

use std::ops::{Index, IndexMut};

use strum::{Display, EnumIter};

/// A face of a cube.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Face {
    /// Up.
    U,
    /// Down.
    D,
    /// Front.
    F,
    /// Back.
    B,
    /// Left.
    L,
    /// Right.
    R,
}
impl Face {
    /// Number of faces on a cube.
    pub const COUNT: usize = 6;

    /// All faces, in storage order.
    pub const ALL: [Face; Self::COUNT] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Returns an integer index for this face, in the range `0..6`.
    pub const fn idx(self) -> usize {
        match self {
            Face::U => 0,
            Face::D => 1,
            Face::F => 2,
            Face::B => 3,
            Face::L => 4,
            Face::R => 5,
        }
    }

    /// Returns the face on the other side of the cube.
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::U => Face::D,
            Face::D => Face::U,
            Face::F => Face::B,
            Face::B => Face::F,
            Face::L => Face::R,
            Face::R => Face::L,
        }
    }

    /// Returns the color of this face on a solved cube.
    pub const fn solved_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
            Face::L => Color::Orange,
            Face::R => Color::Red,
        }
    }
}

/// Sticker color.
#[derive(Debug, Display, EnumIter, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Color {
    /// White (`W`).
    White,
    /// Yellow (`Y`).
    Yellow,
    /// Green (`G`).
    Green,
    /// Blue (`B`).
    Blue,
    /// Orange (`O`).
    Orange,
    /// Red (`R`).
    Red,
}
impl Color {
    /// Number of sticker colors.
    pub const COUNT: usize = 6;

    /// All colors, in the same order as the faces they start on.
    pub const ALL: [Color; Self::COUNT] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Returns an integer index for this color, in the range `0..6`.
    pub const fn idx(self) -> usize {
        match self {
            Color::White => 0,
            Color::Yellow => 1,
            Color::Green => 2,
            Color::Blue => 3,
            Color::Orange => 4,
            Color::Red => 5,
        }
    }

    /// Returns the single-character symbol used in text output.
    pub const fn symbol(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }

    /// Returns the color with the given symbol, if there is one.
    pub fn from_symbol(c: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.symbol() == c.to_ascii_uppercase())
    }
}

/// Value for each face of a cube.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerFace<T>([T; Face::COUNT]);
impl<T> PerFace<T> {
    /// Constructs a value for each face using a function.
    pub fn from_fn(f: impl FnMut(Face) -> T) -> Self {
        Self(Face::ALL.map(f))
    }

    /// Iterates over faces and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Face, &T)> {
        Face::ALL.into_iter().zip(&self.0)
    }
}
impl<T> Index<Face> for PerFace<T> {
    type Output = T;

    fn index(&self, face: Face) -> &T {
        &self.0[face.idx()]
    }
}
impl<T> IndexMut<Face> for PerFace<T> {
    fn index_mut(&mut self, face: Face) -> &mut T {
        &mut self.0[face.idx()]
    }
}

/// Value for each sticker color.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PerColor<T>([T; Color::COUNT]);
impl<T> PerColor<T> {
    /// Constructs a value for each color using a function.
    pub fn from_fn(f: impl FnMut(Color) -> T) -> Self {
        Self(Color::ALL.map(f))
    }

    /// Iterates over colors and their values.
    pub fn iter(&self) -> impl Iterator<Item = (Color, &T)> {
        Color::ALL.into_iter().zip(&self.0)
    }
}
impl<T> Index<Color> for PerColor<T> {
    type Output = T;

    fn index(&self, color: Color) -> &T {
        &self.0[color.idx()]
    }
}
impl<T> IndexMut<Color> for PerColor<T> {
    fn index_mut(&mut self, color: Color) -> &mut T {
        &mut self.0[color.idx()]
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_face_indices_match_order() {
        for (i, face) in Face::iter().enumerate() {
            assert_eq!(i, face.idx());
            assert_eq!(face, Face::ALL[i]);
            assert_eq!(face, face.opposite().opposite());
            assert_ne!(face, face.opposite());
        }
        for (i, color) in Color::iter().enumerate() {
            assert_eq!(i, color.idx());
            assert_eq!(color, Color::ALL[i]);
        }
    }

    #[test]
    fn test_solved_colors_are_distinct() {
        let colors = PerColor::from_fn(|color| {
            Face::ALL
                .iter()
                .filter(|face| face.solved_color() == color)
                .count()
        });
        assert!(colors.iter().all(|(_, &n)| n == 1));
    }

    #[test]
    fn test_color_symbols() {
        for color in Color::iter() {
            assert_eq!(Some(color), Color::from_symbol(color.symbol()));
            assert_eq!(
                Some(color),
                Color::from_symbol(color.symbol().to_ascii_lowercase()),
            );
        }
        assert_eq!(None, Color::from_symbol('x'));
    }
}
