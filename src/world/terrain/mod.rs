/// Terrain Module - heightmap world generation
///
/// - terrain_data.rs: generation parameters
/// - terrain_operations.rs: column heights, layering and block emission

pub mod terrain_data;
pub mod terrain_operations;

pub use terrain_data::TerrainParams;

pub use terrain_operations::{column_height, generate_terrain, layer_kind};
