//! Layer rotation: face transform plus a 4-cycle of neighboring strips.

use itertools::Itertools;

use crate::{
    AdjacencyEntry, Color, CubeConfig, CubeError, Direction, Face, FaceGrid, PerFace, StripError,
    neighbors_of,
};

/// Twists layer `layer` around `face` in `direction`.
///
/// All four neighboring strips are read before any of them is written, so
/// either the whole twist is applied or (on error) nothing is.
pub(crate) fn rotate_layer(
    faces: &mut PerFace<FaceGrid>,
    config: &CubeConfig,
    face: Face,
    layer: usize,
    direction: Direction,
) -> Result<(), CubeError> {
    let size = config.size;
    if layer >= size {
        return Err(CubeError::InvalidLayer { layer, size });
    }

    log::debug!("twisting {face} layer {layer} {direction}");

    let entries = neighbors_of(face);
    let indices =
        entries.map(|e| assert_paired(&e, e.offset.resolve(size, layer, config.offset_mode)));

    // Read phase
    let mut strips: [Vec<Color>; 4] = std::array::from_fn(|i| {
        let e = &entries[i];
        assert_paired(e, faces[e.face].strip(e.axis, indices[i]))
    });
    log::trace!(
        "captured strips: {}",
        strips
            .iter()
            .map(|strip| strip.iter().map(|c| c.symbol()).collect::<String>())
            .join(" "),
    );

    if layer == 0 {
        faces[face] = faces[face].rotated(direction);
    }

    // Clockwise moves each strip to the next entry.
    match direction {
        Direction::CW => strips.rotate_right(1),
        Direction::CCW => strips.rotate_left(1),
    }

    // Write phase
    for ((e, index), strip) in entries.iter().zip(indices).zip(&strips) {
        assert_paired(e, faces[e.face].set_strip(e.axis, index, strip));
    }

    Ok(())
}

/// Unwraps the result of a strip operation.
///
/// Strip errors here mean the adjacency table does not fit the face grids,
/// which would corrupt the cube if ignored.
#[track_caller]
fn assert_paired<T>(entry: &AdjacencyEntry, result: Result<T, StripError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("adjacency entry {entry:?} does not fit face grid: {e}"),
    }
}
