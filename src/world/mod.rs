//! World Module - blocks, terrain and the block store
//!
//! - block.rs: block kinds and the block record
//! - terrain/: heightmap terrain generation
//! - block_store/: the mutable block grid and its spatial queries
//! - error.rs: block store errors

pub mod block;
pub mod block_store;
pub mod error;
pub mod terrain;

pub use block::{block_aabb, Block, BlockKind};
pub use block_store::BlockStore;
pub use error::{WorldError, WorldResult};
pub use terrain::{generate_terrain, TerrainParams};
