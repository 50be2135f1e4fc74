//! Which strips of which faces border each face.

use crate::{Axis, Face, Offset};

use Axis::{Col, Row};
use Face::{B, D, F, L, R, U};
use Offset::{First, Last};

/// Strip on a neighboring face that moves when a layer is twisted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct AdjacencyEntry {
    /// Neighboring face.
    pub face: Face,
    /// Whether the strip is a row or column of `face`.
    pub axis: Axis,
    /// Which end of `face` the strip is measured from.
    pub offset: Offset,
}

const fn entry(face: Face, axis: Axis, offset: Offset) -> AdjacencyEntry {
    AdjacencyEntry { face, axis, offset }
}

/// Neighbors of each face, indexed by [`Face::idx()`].
///
/// Each list is in cycle order: a clockwise twist moves each strip into the
/// next entry.
static ADJACENCY: [[AdjacencyEntry; 4]; Face::COUNT] = [
    // U
    [
        entry(B, Row, First),
        entry(R, Row, First),
        entry(F, Row, First),
        entry(L, Row, First),
    ],
    // D
    [
        entry(F, Row, Last),
        entry(R, Row, Last),
        entry(B, Row, Last),
        entry(L, Row, Last),
    ],
    // F
    [
        entry(U, Row, Last),
        entry(R, Col, First),
        entry(D, Row, First),
        entry(L, Col, Last),
    ],
    // B
    [
        entry(U, Row, First),
        entry(L, Col, First),
        entry(D, Row, Last),
        entry(R, Col, Last),
    ],
    // L
    [
        entry(U, Col, First),
        entry(F, Col, First),
        entry(D, Col, First),
        entry(B, Col, Last),
    ],
    // R
    [
        entry(U, Col, Last),
        entry(B, Col, First),
        entry(D, Col, Last),
        entry(F, Col, Last),
    ],
];

/// Returns the four strips bordering `face`, in cycle order.
pub fn neighbors_of(face: Face) -> &'static [AdjacencyEntry; 4] {
    &ADJACENCY[face.idx()]
}
