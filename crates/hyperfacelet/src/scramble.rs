//! Deterministic random twist sequences.

use rand::{Rng, SeedableRng};
use sha2::{Digest, Sha256};

use crate::{Cube, CubeConfig, CubeError, Direction, Face, Twist};

/// Parameters to deterministically generate a twist sequence to scramble a
/// cube.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrambleParams {
    /// Random seed.
    pub seed: String,
    /// Number of twists.
    pub length: u32,
}
impl ScrambleParams {
    /// Returns parameters for a scramble of the default length.
    pub fn new(seed: impl Into<String>) -> Self {
        Self {
            seed: seed.into(),
            length: crate::DEFAULT_SCRAMBLE_LENGTH,
        }
    }

    fn rng(&self) -> rand_chacha::ChaCha12Rng {
        let mut sha256 = Sha256::new();
        sha256.update((self.seed.len() as u64).to_le_bytes());
        sha256.update(self.seed.as_bytes());
        let digest = sha256.finalize();

        let mut seed = [0; 32];
        seed.copy_from_slice(&digest);
        rand_chacha::ChaCha12Rng::from_seed(seed)
    }
}

/// Scrambled cube along with the twists used to scramble it.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScrambledCube {
    /// Parameters used to generate the scramble.
    pub params: ScrambleParams,
    /// Twists applied to the solved cube, in order.
    pub twists: Vec<Twist>,
    /// Cube state after the scramble.
    pub cube: Cube,
}

/// Generates a scramble for a cube with the given config.
///
/// Every twist picks a face, a layer, and a direction uniformly at random.
/// The same parameters and config always produce the same scramble.
pub fn scramble(params: ScrambleParams, config: CubeConfig) -> Result<ScrambledCube, CubeError> {
    let mut cube = Cube::with_config(config)?;
    let mut rng = params.rng();

    let size = cube.size();
    let twists: Vec<Twist> = std::iter::repeat_with(|| {
        let face = Face::ALL[rng.random_range(0..Face::COUNT)];
        let layer = rng.random_range(0..size);
        let direction = match rng.random_bool(0.5) {
            true => Direction::CW,
            false => Direction::CCW,
        };
        Twist::new(face, layer, direction)
    })
    .take(params.length as usize)
    .collect();

    log::debug!(
        "scrambling {size}x{size}x{size} cube with {} twists from seed {:?}",
        twists.len(),
        params.seed,
    );
    cube.apply_all(twists.iter().copied())?;

    Ok(ScrambledCube {
        params,
        twists,
        cube,
    })
}
