use crate::CubeError;

/// How the row or column touched on each neighboring face is chosen for a
/// twist of an inner layer.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum OffsetMode {
    /// Every twist touches the outermost row or column on each neighboring
    /// face, regardless of layer depth. Inner-layer twists therefore move the
    /// same neighboring stickers as the outer layer, without turning the face
    /// itself.
    #[default]
    FixedEndpoint,
    /// The row or column on each neighboring face moves inward with the layer
    /// depth, so a twist of layer `k` touches the stickers `k` steps in from
    /// the twisted face.
    LayerDepth,
}

/// Parameters for constructing a [`crate::Cube`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CubeConfig {
    /// Number of layers along each axis.
    pub size: usize,
    /// How rows and columns are chosen on neighboring faces.
    pub offset_mode: OffsetMode,
}
impl Default for CubeConfig {
    fn default() -> Self {
        Self {
            size: 3,
            offset_mode: OffsetMode::default(),
        }
    }
}
impl CubeConfig {
    /// Returns a config for a cube of the given size with the default offset
    /// mode.
    pub fn with_size(size: usize) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Returns an error if the config cannot describe a cube.
    ///
    /// The size must be at least 1, and the number of stickers on one face
    /// must fit in a `Vec`.
    pub fn validate(&self) -> Result<(), CubeError> {
        let size = self.size;
        let too_big = size
            .checked_mul(size)
            .is_none_or(|stickers| stickers > isize::MAX as usize);
        if size < 1 || too_big {
            return Err(CubeError::InvalidSize { size });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate() {
        assert_eq!(Ok(()), CubeConfig::default().validate());
        assert_eq!(Ok(()), CubeConfig::with_size(1).validate());
        assert_eq!(
            Err(CubeError::InvalidSize { size: 0 }),
            CubeConfig::with_size(0).validate(),
        );
    }

    #[test]
    fn test_validate_rejects_overflowing_size() {
        for size in [1 << (usize::BITS / 2), usize::MAX] {
            assert_eq!(
                Err(CubeError::InvalidSize { size }),
                CubeConfig::with_size(size).validate(),
            );
        }
    }

    #[test]
    fn test_defaults() {
        let config = CubeConfig::default();
        assert_eq!(3, config.size);
        assert_eq!(OffsetMode::FixedEndpoint, config.offset_mode);
    }
}
