//! Facelet model and layer rotation engine for NxNxN cube puzzles.
//!
//! A [`Cube`] owns six [`FaceGrid`]s and exposes a single mutating operation,
//! [`Cube::rotate_layer()`], which twists one layer around a face and carries
//! the change over to the four neighboring faces in one indivisible step.

mod adjacency;
mod config;
mod cube;
mod engine;
mod error;
mod face;
mod grid;
mod scramble;
mod strip;
mod twist;


pub use prelude::*;

/// Prelude of common imports.
pub mod prelude {
    pub use crate::adjacency::{AdjacencyEntry, neighbors_of};
    pub use crate::config::{CubeConfig, OffsetMode};
    pub use crate::cube::Cube;
    pub use crate::error::{CubeError, StripError};
    pub use crate::face::{Color, Face, PerColor, PerFace};
    pub use crate::grid::FaceGrid;
    pub use crate::scramble::{ScrambleParams, ScrambledCube, scramble};
    pub use crate::strip::{Axis, Offset};
    pub use crate::twist::{Direction, Twist};
}

/// Version string such as `hyperfacelet v1.2.3`.
pub const ENGINE_VERSION_STRING: &str =
    concat!(env!("CARGO_PKG_NAME"), " v", env!("CARGO_PKG_VERSION"));

/// Default number of twists in a scramble.
///
/// **Changing this will break scramble compatibility.**
pub const DEFAULT_SCRAMBLE_LENGTH: u32 = 100;
