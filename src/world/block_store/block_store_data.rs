//! Block store data
//!
//! NO METHODS beyond construction. All queries live in block_store_operations.rs

use crate::world::block::Block;
use rustc_hash::FxHashMap;

/// Grid cell coordinate: pixel position divided by the block size
pub type CellPos = (i32, i32);

/// Every block in the world.
///
/// `blocks` is the authoritative, ordered list. `index` maps each occupied
/// cell to its slot in `blocks`; the two are kept in lockstep so each cell
/// holds at most one block.
#[derive(Debug, Clone, Default)]
pub struct BlockStore {
    /// Edge length of every block, in pixels
    pub block_size: i32,

    pub blocks: Vec<Block>,

    pub index: FxHashMap<CellPos, usize>,
}
