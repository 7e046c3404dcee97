/// Block Store Module - owns every placed block
///
/// - block_store_data.rs: the store itself (dense list + cell index)
/// - block_store_operations.rs: queries and mutations

pub mod block_store_data;
pub mod block_store_operations;

pub use block_store_data::{BlockStore, CellPos};

pub use block_store_operations::{
    // Construction
    create_block_store,
    create_block_store_with,

    // Coordinates
    cell_of,
    snap_to_grid,

    // Queries
    block_count,
    iter_blocks,
    query_point,
    query_rect,
    query_solid_rect,
    is_cell_occupied,

    // Mutations
    place_block,
    remove_block_at,
    replace_blocks,
    clear_blocks,
};
