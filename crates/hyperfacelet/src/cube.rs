use std::fmt;

use crate::{
    Axis, Color, CubeConfig, CubeError, Direction, Face, FaceGrid, PerColor, PerFace, StripError,
    Twist, engine,
};

/// Facelet state of an NxNxN cube.
///
/// All six faces always have the same size. The only way to change the state
/// is [`Cube::rotate_layer()`] (or its wrappers [`Cube::apply()`] and
/// [`Cube::apply_all()`]), so every state is reachable from solved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Cube {
    config: CubeConfig,
    faces: PerFace<FaceGrid>,
}
impl fmt::Display for Cube {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (face, grid) in self.faces.iter() {
            writeln!(f, "Face {face}:")?;
            writeln!(f, "{grid}")?;
        }
        Ok(())
    }
}
impl Cube {
    /// Constructs a solved cube with `size` layers along each axis.
    pub fn new(size: usize) -> Result<Self, CubeError> {
        Self::with_config(CubeConfig::with_size(size))
    }

    /// Constructs a solved cube from a config.
    pub fn with_config(config: CubeConfig) -> Result<Self, CubeError> {
        config.validate()?;
        let faces = PerFace::from_fn(|face| FaceGrid::uniform(config.size, face.solved_color()));
        Ok(Self { config, faces })
    }

    /// Returns the config used to construct the cube.
    pub fn config(&self) -> CubeConfig {
        self.config
    }

    /// Returns the number of layers along each axis.
    pub fn size(&self) -> usize {
        self.config.size
    }

    /// Returns a copy of the stickers on a face.
    pub fn face(&self, face: Face) -> FaceGrid {
        self.faces[face].clone()
    }

    /// Returns a copy of row or column `index` of a face.
    pub fn strip(&self, face: Face, axis: Axis, index: usize) -> Result<Vec<Color>, StripError> {
        self.faces[face].strip(axis, index)
    }

    /// Twists layer `layer` around `face` a quarter turn in `direction`.
    ///
    /// Layer `0` is the surface of `face`, and twisting it also turns the
    /// stickers on `face`. Returns [`CubeError::InvalidLayer`] without
    /// modifying the cube if `layer` is not less than the cube's size.
    pub fn rotate_layer(
        &mut self,
        face: Face,
        layer: usize,
        direction: Direction,
    ) -> Result<(), CubeError> {
        engine::rotate_layer(&mut self.faces, &self.config, face, layer, direction)
    }

    /// Applies a twist.
    pub fn apply(&mut self, twist: Twist) -> Result<(), CubeError> {
        self.rotate_layer(twist.face, twist.layer, twist.direction)
    }

    /// Applies twists in order, stopping at the first one that fails.
    ///
    /// Twists before the failing one remain applied.
    pub fn apply_all(&mut self, twists: impl IntoIterator<Item = Twist>) -> Result<(), CubeError> {
        twists.into_iter().try_for_each(|twist| self.apply(twist))
    }

    /// Returns whether every face has only one color.
    pub fn is_solved(&self) -> bool {
        self.faces.iter().all(|(_, grid)| grid.is_uniform())
    }

    /// Returns the number of stickers of each color across all faces.
    pub fn color_counts(&self) -> PerColor<usize> {
        PerColor::from_fn(|color| self.faces.iter().map(|(_, grid)| grid.count(color)).sum())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_new() {
        let cube = Cube::new(4).unwrap();
        assert_eq!(4, cube.size());
        assert!(cube.is_solved());
        for face in Face::ALL {
            assert_eq!(FaceGrid::uniform(4, face.solved_color()), cube.face(face));
        }
        assert_eq!(PerColor::from_fn(|_| 16), cube.color_counts());
    }

    #[test]
    fn test_new_invalid_size() {
        assert_eq!(Err(CubeError::InvalidSize { size: 0 }), Cube::new(0));

        // Face would have more stickers than fit in memory.
        let huge = 1 << (usize::BITS / 2);
        assert_eq!(Err(CubeError::InvalidSize { size: huge }), Cube::new(huge));
    }

    #[test]
    fn test_face_is_a_copy() {
        let mut cube = Cube::new(3).unwrap();
        let u = cube.face(Face::U);
        cube.rotate_layer(Face::F, 0, Direction::CW).unwrap();
        assert_eq!(FaceGrid::uniform(3, Color::White), u);
        assert_ne!(u, cube.face(Face::U));
    }

    #[test]
    fn test_apply_all_stops_at_error() {
        let mut cube = Cube::new(2).unwrap();
        let twists = [
            Twist::new(Face::R, 0, Direction::CW),
            Twist::new(Face::R, 2, Direction::CW),
            Twist::new(Face::U, 0, Direction::CW),
        ];
        assert_eq!(
            Err(CubeError::InvalidLayer { layer: 2, size: 2 }),
            cube.apply_all(twists),
        );

        let mut expected = Cube::new(2).unwrap();
        expected.apply(twists[0]).unwrap();
        assert_eq!(expected, cube);
    }

    #[test]
    fn test_display() {
        let cube = Cube::new(2).unwrap();
        let expected = "\
Face U:
W W
W W

Face D:
Y Y
Y Y

Face F:
G G
G G

Face B:
B B
B B

Face L:
O O
O O

Face R:
R R
R R

";
        assert_eq!(expected, cube.to_string());
    }
}
