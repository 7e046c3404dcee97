//! Block store operations
//!
//! Point and rectangle queries go through the cell index, so they only touch
//! the cells the query covers. Results match a full scan of `blocks`.

use super::block_store_data::{BlockStore, CellPos};
use crate::physics::aabb::{aabb_contains_point, aabb_intersects, AABB};
use crate::world::block::{block_aabb, Block, BlockKind};
use crate::world::error::{WorldError, WorldResult};
use glam::Vec2;
use rustc_hash::FxHashMap;

// ============================================================================
// CONSTRUCTION
// ============================================================================

/// Create an empty store
pub fn create_block_store(block_size: i32) -> WorldResult<BlockStore> {
    if block_size <= 0 {
        return Err(WorldError::InvalidBlockSize(block_size));
    }

    Ok(BlockStore {
        block_size,
        blocks: Vec::new(),
        index: FxHashMap::default(),
    })
}

/// Create a store from an initial block list.
///
/// Blocks landing on an already occupied cell are dropped (first wins).
pub fn create_block_store_with(
    block_size: i32,
    blocks: impl IntoIterator<Item = Block>,
) -> WorldResult<BlockStore> {
    let mut store = create_block_store(block_size)?;
    replace_blocks(&mut store, blocks)?;
    Ok(store)
}

// ============================================================================
// COORDINATES
// ============================================================================

/// Cell containing a pixel-space point
pub fn cell_of(store: &BlockStore, point: Vec2) -> CellPos {
    let size = store.block_size as f32;
    (
        (point.x / size).floor() as i32,
        (point.y / size).floor() as i32,
    )
}

/// Top-left pixel corner of the cell containing `point`
pub fn snap_to_grid(store: &BlockStore, point: Vec2) -> (i32, i32) {
    let (cx, cy) = cell_of(store, point);
    (cx * store.block_size, cy * store.block_size)
}

fn aligned_cell(store: &BlockStore, x: i32, y: i32) -> WorldResult<CellPos> {
    let size = store.block_size;
    if x.rem_euclid(size) != 0 || y.rem_euclid(size) != 0 {
        return Err(WorldError::MisalignedPosition {
            x,
            y,
            block_size: size,
        });
    }
    Ok((x.div_euclid(size), y.div_euclid(size)))
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn block_count(store: &BlockStore) -> usize {
    store.blocks.len()
}

/// All blocks, in store order
pub fn iter_blocks(store: &BlockStore) -> impl Iterator<Item = &Block> + '_ {
    store.blocks.iter()
}

pub fn is_cell_occupied(store: &BlockStore, x: i32, y: i32) -> bool {
    aligned_cell(store, x, y)
        .map(|cell| store.index.contains_key(&cell))
        .unwrap_or(false)
}

/// Block whose square contains the point, if any
pub fn query_point(store: &BlockStore, point: Vec2) -> Option<&Block> {
    if !point.is_finite() {
        return None;
    }

    let cell = cell_of(store, point);
    store
        .index
        .get(&cell)
        .map(|&slot| &store.blocks[slot])
        .filter(|block| aabb_contains_point(&block_aabb(block, store.block_size), point))
}

/// Blocks strictly overlapping `rect`
pub fn query_rect<'a>(store: &'a BlockStore, rect: &AABB) -> Vec<&'a Block> {
    let size = store.block_size;

    if !rect.min.is_finite() || !rect.max.is_finite() {
        return Vec::new();
    }

    let (min_cx, min_cy) = cell_of(store, rect.min);
    let (max_cx, max_cy) = cell_of(store, rect.max);
    let span = (i64::from(max_cx) - i64::from(min_cx) + 1) * (i64::from(max_cy) - i64::from(min_cy) + 1);

    // Huge rectangles are cheaper to answer with a scan
    if span > store.blocks.len() as i64 {
        return store
            .blocks
            .iter()
            .filter(|block| aabb_intersects(&block_aabb(block, size), rect))
            .collect();
    }

    let mut hits = Vec::new();
    for cy in min_cy..=max_cy {
        for cx in min_cx..=max_cx {
            if let Some(&slot) = store.index.get(&(cx, cy)) {
                let block = &store.blocks[slot];
                if aabb_intersects(&block_aabb(block, size), rect) {
                    hits.push(block);
                }
            }
        }
    }
    hits
}

/// Blocks overlapping `rect` that entities collide with
pub fn query_solid_rect<'a>(store: &'a BlockStore, rect: &AABB) -> Vec<&'a Block> {
    let mut hits = query_rect(store, rect);
    hits.retain(|block| block.blocks_player());
    hits
}

// ============================================================================
// MUTATIONS
// ============================================================================

/// Place a block at a cell-aligned pixel position.
///
/// Returns `Ok(false)` without touching the store when the cell is occupied.
pub fn place_block(store: &mut BlockStore, x: i32, y: i32, kind: BlockKind) -> WorldResult<bool> {
    let cell = aligned_cell(store, x, y)?;
    if store.index.contains_key(&cell) {
        log::trace!("[place_block] Cell {:?} already occupied", cell);
        return Ok(false);
    }

    store.index.insert(cell, store.blocks.len());
    store.blocks.push(Block::new(x, y, kind));
    Ok(true)
}

/// Remove the block containing `point`, returning it
pub fn remove_block_at(store: &mut BlockStore, point: Vec2) -> Option<Block> {
    if !point.is_finite() {
        return None;
    }

    let cell = cell_of(store, point);
    let slot = store.index.remove(&cell)?;
    let removed = store.blocks.swap_remove(slot);

    // The last block moved into `slot`; repoint its index entry
    if let Some(moved) = store.blocks.get(slot) {
        let moved_cell = (moved.x.div_euclid(store.block_size), moved.y.div_euclid(store.block_size));
        store.index.insert(moved_cell, slot);
    }

    Some(removed)
}

/// Replace the whole block set.
///
/// Fails without modifying the store if any block is misaligned. Duplicate
/// cells keep the first occurrence. Returns the number of blocks kept.
pub fn replace_blocks(
    store: &mut BlockStore,
    blocks: impl IntoIterator<Item = Block>,
) -> WorldResult<usize> {
    let mut next_blocks = Vec::new();
    let mut next_index = FxHashMap::default();

    for block in blocks {
        let cell = aligned_cell(store, block.x, block.y)?;
        if next_index.contains_key(&cell) {
            continue;
        }
        next_index.insert(cell, next_blocks.len());
        next_blocks.push(block);
    }

    store.blocks = next_blocks;
    store.index = next_index;
    Ok(store.blocks.len())
}

pub fn clear_blocks(store: &mut BlockStore) {
    store.blocks.clear();
    store.index.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::aabb::aabb_from_rect;

    fn store() -> BlockStore {
        create_block_store(15).unwrap()
    }

    #[test]
    fn test_place_then_place_again_is_noop() {
        let mut store = store();
        assert_eq!(place_block(&mut store, 120, 120, BlockKind::Stone), Ok(true));
        assert_eq!(block_count(&store), 1);

        assert_eq!(place_block(&mut store, 120, 120, BlockKind::Dirt), Ok(false));
        assert_eq!(block_count(&store), 1);
        assert_eq!(store.blocks[0].kind, BlockKind::Stone);
    }

    #[test]
    fn test_place_rejects_misaligned() {
        let mut store = store();
        assert_eq!(
            place_block(&mut store, 7, 15, BlockKind::Grass),
            Err(WorldError::MisalignedPosition {
                x: 7,
                y: 15,
                block_size: 15
            })
        );
        assert_eq!(block_count(&store), 0);
    }

    #[test]
    fn test_invalid_block_size() {
        assert_eq!(create_block_store(0).unwrap_err(), WorldError::InvalidBlockSize(0));
    }

    #[test]
    fn test_query_point_inside_and_outside() {
        let mut store = store();
        place_block(&mut store, 120, 120, BlockKind::Grass).unwrap();

        assert!(query_point(&store, Vec2::new(127.5, 134.0)).is_some());
        assert!(query_point(&store, Vec2::new(135.0, 125.0)).is_none());
        assert!(query_point(&store, Vec2::new(f32::NAN, 0.0)).is_none());
    }

    #[test]
    fn test_negative_coordinates() {
        let mut store = store();
        place_block(&mut store, -15, -30, BlockKind::Dirt).unwrap();
        assert_eq!(snap_to_grid(&store, Vec2::new(-0.5, -16.0)), (-15, -30));
        assert!(query_point(&store, Vec2::new(-1.0, -29.0)).is_some());
        assert!(remove_block_at(&mut store, Vec2::new(-14.0, -16.0)).is_some());
        assert_eq!(block_count(&store), 0);
    }

    #[test]
    fn test_remove_keeps_index_consistent() {
        let mut store = store();
        for i in 0..5 {
            place_block(&mut store, i * 15, 0, BlockKind::Stone).unwrap();
        }

        let removed = remove_block_at(&mut store, Vec2::new(16.0, 1.0));
        assert_eq!(removed, Some(Block::new(15, 0, BlockKind::Stone)));
        assert_eq!(block_count(&store), 4);
        assert!(remove_block_at(&mut store, Vec2::new(16.0, 1.0)).is_none());

        for block in iter_blocks(&store) {
            let found = query_point(&store, Vec2::new(block.x as f32 + 1.0, block.y as f32 + 1.0));
            assert_eq!(found, Some(block));
        }
    }

    #[test]
    fn test_query_rect_matches_full_scan() {
        let mut store = store();
        for x in 0..20 {
            for y in 0..6 {
                let kind = if (x + y) % 3 == 0 { BlockKind::WoodWall } else { BlockKind::Dirt };
                place_block(&mut store, x * 15, 300 + y * 15, kind).unwrap();
            }
        }

        let rects = [
            aabb_from_rect(10.0, 290.0, 30.0, 46.0),
            aabb_from_rect(-50.0, -50.0, 10.0, 10.0),
            aabb_from_rect(15.0, 300.0, 15.0, 15.0),
            aabb_from_rect(-1000.0, -1000.0, 5000.0, 5000.0),
        ];

        for rect in rects.iter() {
            let mut indexed: Vec<Block> = query_rect(&store, rect).into_iter().copied().collect();
            let mut scanned: Vec<Block> = store
                .blocks
                .iter()
                .filter(|b| aabb_intersects(&block_aabb(b, 15), rect))
                .copied()
                .collect();
            indexed.sort_by_key(|b| (b.x, b.y));
            scanned.sort_by_key(|b| (b.x, b.y));
            assert_eq!(indexed, scanned);
        }

        let exact = aabb_from_rect(15.0, 300.0, 15.0, 15.0);
        assert_eq!(query_rect(&store, &exact).len(), 1);
    }

    #[test]
    fn test_query_solid_rect_skips_walls() {
        let mut store = store();
        place_block(&mut store, 0, 0, BlockKind::WoodWall).unwrap();
        place_block(&mut store, 15, 0, BlockKind::Stone).unwrap();
        let rect = aabb_from_rect(5.0, 5.0, 20.0, 5.0);
        assert_eq!(query_rect(&store, &rect).len(), 2);
        assert_eq!(query_solid_rect(&store, &rect).len(), 1);
    }

    #[test]
    fn test_replace_blocks_dedupes_and_validates() {
        let mut store = store();
        place_block(&mut store, 0, 0, BlockKind::Grass).unwrap();

        let kept = replace_blocks(
            &mut store,
            vec![
                Block::new(30, 30, BlockKind::Dirt),
                Block::new(30, 30, BlockKind::Stone),
                Block::new(45, 30, BlockKind::Stone),
            ],
        )
        .unwrap();
        assert_eq!(kept, 2);
        assert_eq!(store.blocks[0].kind, BlockKind::Dirt);
        assert!(query_point(&store, Vec2::new(1.0, 1.0)).is_none());

        let before = store.blocks.clone();
        assert!(replace_blocks(&mut store, vec![Block::new(1, 0, BlockKind::Dirt)]).is_err());
        assert_eq!(store.blocks, before);
    }

    #[test]
    fn test_grid_invariant_holds_after_mutations() {
        let mut store = store();
        for i in 0..50 {
            let p = Vec2::new((i * 37 % 400) as f32 - 200.0, (i * 53 % 300) as f32);
            let (x, y) = snap_to_grid(&store, p);
            place_block(&mut store, x, y, BlockKind::Grass).unwrap();
            if i % 4 == 0 {
                remove_block_at(&mut store, p);
            }
        }

        let mut seen = std::collections::HashSet::new();
        for block in iter_blocks(&store) {
            assert_eq!(block.x.rem_euclid(15), 0);
            assert_eq!(block.y.rem_euclid(15), 0);
            assert!(seen.insert((block.x, block.y)));
        }
        assert_eq!(store.index.len(), block_count(&store));
    }
}
