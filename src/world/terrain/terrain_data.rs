//! Terrain generation parameters

use crate::constants::{self, terrain};

/// Inputs to the heightmap builder.
///
/// `ground_level` is the pixel y of the ground line; the first terrain row
/// sits directly above it at `ground_level - block_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainParams {
    /// Number of columns to generate, starting at x = 0
    pub world_width: u32,

    /// Column index is divided by this before sampling noise
    pub scale: f64,

    pub block_size: i32,

    pub ground_level: i32,

    /// Height for a noise value of -1, in blocks
    pub min_height: i32,

    /// Blocks added per unit of `noise + 1`
    pub amplitude: f64,

    /// Dirt rows stacked on the stone row
    pub dirt_rows: i32,
}

impl Default for TerrainParams {
    fn default() -> Self {
        Self {
            world_width: constants::core::WORLD_WIDTH,
            scale: constants::core::NOISE_SCALE,
            block_size: constants::core::BLOCK_SIZE,
            ground_level: constants::core::VIEWPORT_HEIGHT as i32 - constants::core::BLOCK_SIZE,
            min_height: terrain::MIN_HEIGHT,
            amplitude: terrain::HEIGHT_AMPLITUDE,
            dirt_rows: terrain::DIRT_ROWS,
        }
    }
}
