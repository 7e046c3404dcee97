//! Terrain operations - noise in, blocks out
//!
//! Pure heightmap: every column is a solid stack of exactly `height` blocks
//! rising from the ground line. No caves, no overhangs.

use super::terrain_data::TerrainParams;
use crate::world::block::{Block, BlockKind};
use ::noise::NoiseFn;

/// Column height in blocks for a noise sample.
///
/// `round((noise + 1) * amplitude + min_height)`; with the defaults a sample
/// in `[-1, 1]` maps to `10..=30`.
pub fn column_height(noise_value: f64, params: &TerrainParams) -> i32 {
    let noise_value = noise_value.clamp(-1.0, 1.0);
    ((noise_value + 1.0) * params.amplitude + f64::from(params.min_height)).round() as i32
}

/// Kind of the block `row` rows above the ground line (row 0 touches it).
///
/// Row 0 is stone, the next `dirt_rows` are dirt, everything higher is grass.
pub fn layer_kind(row: i32, params: &TerrainParams) -> BlockKind {
    if row == 0 {
        BlockKind::Stone
    } else if row <= params.dirt_rows {
        BlockKind::Dirt
    } else {
        BlockKind::Grass
    }
}

/// Generate the initial block list.
///
/// Columns are emitted left to right, each from its top block down to the
/// stone row, so the same noise always yields the same ordered list.
pub fn generate_terrain<N>(noise: &N, params: &TerrainParams) -> Vec<Block>
where
    N: NoiseFn<f64, 1> + ?Sized,
{
    let size = params.block_size;
    let mut blocks = Vec::new();

    for column in 0..params.world_width {
        let sample = noise.get([f64::from(column) / params.scale]);
        let height = column_height(sample, params);
        let x = column as i32 * size;

        for row in (0..height).rev() {
            let y = params.ground_level - (row + 1) * size;
            blocks.push(Block::new(x, y, layer_kind(row, params)));
        }
    }

    log::info!(
        "[generate_terrain] Generated {} blocks across {} columns",
        blocks.len(),
        params.world_width
    );

    blocks
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{create_noise, sample};

    struct Flat(f64);

    impl NoiseFn<f64, 1> for Flat {
        fn get(&self, _point: [f64; 1]) -> f64 {
            self.0
        }
    }

    #[test]
    fn test_height_range() {
        let params = TerrainParams::default();
        assert_eq!(column_height(-1.0, &params), 10);
        assert_eq!(column_height(0.0, &params), 20);
        assert_eq!(column_height(1.0, &params), 30);
        assert_eq!(column_height(0.26, &params), 23);
        assert_eq!(column_height(5.0, &params), 30);
    }

    #[test]
    fn test_layering_from_ground_up() {
        let params = TerrainParams {
            world_width: 1,
            ..TerrainParams::default()
        };
        let blocks = generate_terrain(&Flat(0.0), &params);
        assert_eq!(blocks.len(), 20);

        let ground = params.ground_level;
        let kind_at = |y: i32| blocks.iter().find(|b| b.y == y).map(|b| b.kind);

        assert_eq!(kind_at(ground - 15), Some(BlockKind::Stone));
        for row in 1..=9 {
            assert_eq!(kind_at(ground - (row + 1) * 15), Some(BlockKind::Dirt));
        }
        for row in 10..20 {
            assert_eq!(kind_at(ground - (row + 1) * 15), Some(BlockKind::Grass));
        }
    }

    #[test]
    fn test_columns_have_no_gaps() {
        let params = TerrainParams {
            world_width: 64,
            ..TerrainParams::default()
        };
        let noise = create_noise(11);
        let blocks = generate_terrain(&noise, &params);

        for column in 0..64 {
            let x = column * 15;
            let mut ys: Vec<i32> = blocks.iter().filter(|b| b.x == x).map(|b| b.y).collect();
            ys.sort_unstable();
            let expected = column_height(sample(&noise, f64::from(column) / 24.0), &params);
            assert_eq!(ys.len() as i32, expected);
            assert_eq!(*ys.last().unwrap(), params.ground_level - 15);
            assert!(ys.windows(2).all(|w| w[1] - w[0] == 15));
        }
    }

    #[test]
    fn test_same_seed_same_world() {
        let params = TerrainParams::default();
        let a = generate_terrain(&create_noise(2024), &params);
        let b = generate_terrain(&create_noise(2024), &params);
        assert_eq!(a, b);
    }

    #[test]
    fn test_column_zero_height_from_noise_at_origin() {
        let params = TerrainParams::default();
        let noise = create_noise(77);
        let blocks = generate_terrain(&noise, &params);

        let expected = column_height(sample(&noise, 0.0 / 24.0), &params);
        assert_eq!(expected, 20);
        assert_eq!(blocks.iter().filter(|b| b.x == 0).count() as i32, expected);
    }

    #[test]
    fn test_blocks_are_grid_aligned() {
        let params = TerrainParams::default();
        for block in generate_terrain(&create_noise(9), &params) {
            assert_eq!(block.x % 15, 0);
            assert_eq!(block.y % 15, 0);
        }
    }
}
