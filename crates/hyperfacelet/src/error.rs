use thiserror::Error;

/// Error produced by constructing or twisting a [`crate::Cube`].
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CubeError {
    /// Cube size is less than 1, or too large for a face to fit in memory
    #[error("invalid cube size {size}; size must be at least 1 and fit in memory")]
    InvalidSize {
        /// Requested size.
        size: usize,
    },
    /// Layer index is outside `0..size`
    ///
    /// The cube is not modified when this occurs.
    #[error("invalid layer {layer} for cube of size {size}")]
    InvalidLayer {
        /// Requested layer.
        layer: usize,
        /// Size of the cube.
        size: usize,
    },
}

/// Error produced when reading or writing a row or column of a face grid.
///
/// These indicate a mismatch between the adjacency table and the face grids,
/// so they never occur during a valid twist.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum StripError {
    /// Row or column index is outside `0..size`
    #[error("offset {offset} out of range for face of size {size}")]
    InvalidOffset {
        /// Requested row or column index, or layer depth if the index could
        /// not be computed.
        offset: usize,
        /// Size of the face.
        size: usize,
    },
    /// Strip length does not match face size
    #[error("strip has length {actual} but face has size {expected}")]
    DimensionMismatch {
        /// Size of the face.
        expected: usize,
        /// Length of the strip.
        actual: usize,
    },
}
