//! Twist directions and layered twists.

use std::fmt;

use strum::{Display, EnumIter};

use crate::Face;

/// Direction of a quarter turn, viewed from outside the cube facing the
/// rotated face.
#[derive(Debug, Display, EnumIter, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum Direction {
    /// Clockwise.
    #[default]
    CW,
    /// Counterclockwise.
    CCW,
}
impl Direction {
    /// Returns the signed quarter-turn count: `+1` for clockwise, `-1` for
    /// counterclockwise.
    pub const fn sign(self) -> isize {
        match self {
            Direction::CW => 1,
            Direction::CCW => -1,
        }
    }

    /// Returns the opposite direction.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Direction::CW => Direction::CCW,
            Direction::CCW => Direction::CW,
        }
    }

    /// Returns the direction with the given sign, or `None` if `sign` is not
    /// `1` or `-1`.
    pub const fn from_sign(sign: isize) -> Option<Self> {
        match sign {
            1 => Some(Direction::CW),
            -1 => Some(Direction::CCW),
            _ => None,
        }
    }
}

/// Quarter turn of a single layer around a face.
///
/// Layer `0` is the surface of `face`; layer `size - 1` is the surface of the
/// opposite face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Twist {
    /// Face that the layer is parallel to.
    pub face: Face,
    /// Depth of the layer, counting from `face`.
    pub layer: usize,
    /// Direction, viewed from outside the cube facing `face`.
    pub direction: Direction,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} layer {} {}", self.face, self.layer, self.direction)
    }
}
impl Twist {
    /// Constructs a new twist.
    pub const fn new(face: Face, layer: usize, direction: Direction) -> Self {
        Self {
            face,
            layer,
            direction,
        }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self {
            direction: self.direction.rev(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_direction_sign() {
        assert_eq!(1, Direction::CW.sign());
        assert_eq!(-1, Direction::CCW.sign());
        assert_eq!(Some(Direction::CCW), Direction::from_sign(-1));
        assert_eq!(None, Direction::from_sign(0));
        assert_eq!(None, Direction::from_sign(2));
    }

    #[test]
    fn test_twist_display() {
        let twist = Twist::new(Face::L, 1, Direction::CW);
        assert_eq!("L layer 1 CW", twist.to_string());
        assert_eq!("L layer 1 CCW", twist.rev().to_string());
    }

    proptest! {
        #[test]
        fn proptest_direction_rev(direction: Direction) {
            prop_assert_eq!(direction, direction.rev().rev());
            prop_assert_eq!(-direction.sign(), direction.rev().sign());
            prop_assert_eq!(Some(direction), Direction::from_sign(direction.sign()));
        }
    }
}
