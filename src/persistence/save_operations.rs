//! Save operations
//!
//! Saving snapshots the player and the block list into a `SaveRecord`;
//! loading validates the whole record before touching live state, so a bad
//! file leaves the session exactly as it was.

use super::save_data::{SaveFormat, SaveRecord};
use super::{PersistenceError, PersistenceResult};
use crate::entities::player::PlayerData;
use crate::world::block::Block;
use crate::world::block_store::{create_block_store_with, iter_blocks, BlockStore};
use glam::Vec2;
use std::fs;
use std::io::Write;
use std::path::Path;

// ============================================================================
// LIVE STATE
// ============================================================================

pub fn capture_record(player: &PlayerData, store: &BlockStore) -> SaveRecord {
    SaveRecord {
        player_x: player.body.position.x,
        player_y: player.body.position.y,
        blocks: iter_blocks(store)
            .map(|block| (block.x, block.y, block.kind))
            .collect(),
        health: player.health,
        spawn_point: (player.spawn_point.x, player.spawn_point.y),
    }
}

/// Check a record and build the block store it describes.
///
/// Rejects non-finite coordinates and blocks off the grid. Blocks sharing a
/// cell keep the first occurrence.
pub fn validate_record(record: &SaveRecord, block_size: i32) -> PersistenceResult<BlockStore> {
    let coords = [
        record.player_x,
        record.player_y,
        record.spawn_point.0,
        record.spawn_point.1,
    ];
    if coords.iter().any(|v| !v.is_finite()) {
        return Err(PersistenceError::CorruptedData(
            "player or spawn coordinates are not finite".to_string(),
        ));
    }

    let blocks = record
        .blocks
        .iter()
        .map(|&(x, y, kind)| Block::new(x, y, kind));
    let store = create_block_store_with(block_size, blocks)
        .map_err(|e| PersistenceError::CorruptedData(e.to_string()))?;

    let dropped = record.blocks.len() - store.blocks.len();
    if dropped > 0 {
        log::warn!("[validate_record] Dropped {} duplicate block(s)", dropped);
    }

    Ok(store)
}

/// Replace the live block set and player state with a record.
///
/// Motion state is reset; health is clamped into `1..=max_health`.
pub fn apply_record(
    record: &SaveRecord,
    player: &mut PlayerData,
    store: &mut BlockStore,
) -> PersistenceResult<()> {
    let restored = validate_record(record, store.block_size)?;
    *store = restored;

    player.body.position = Vec2::new(record.player_x, record.player_y);
    player.body.velocity_y = 0.0;
    player.body.grounded = false;
    player.jumping = false;
    player.fall_apex_y = None;
    player.health = record.health.clamp(1, player.max_health);
    player.spawn_point = Vec2::new(record.spawn_point.0, record.spawn_point.1);

    Ok(())
}

// ============================================================================
// ENCODING
// ============================================================================

pub fn encode_record(record: &SaveRecord, format: SaveFormat) -> PersistenceResult<Vec<u8>> {
    match format {
        SaveFormat::Json => serde_json::to_vec(record)
            .map_err(|e| PersistenceError::SerializationError(e.to_string())),
        SaveFormat::Binary => bincode::serialize(record)
            .map_err(|e| PersistenceError::SerializationError(e.to_string())),
    }
}

pub fn decode_record(bytes: &[u8], format: SaveFormat) -> PersistenceResult<SaveRecord> {
    match format {
        SaveFormat::Json => serde_json::from_slice(bytes)
            .map_err(|e| PersistenceError::DeserializationError(e.to_string())),
        SaveFormat::Binary => bincode::deserialize(bytes)
            .map_err(|e| PersistenceError::DeserializationError(e.to_string())),
    }
}

// ============================================================================
// FILE I/O
// ============================================================================

fn format_for(path: &Path) -> PersistenceResult<SaveFormat> {
    SaveFormat::from_path(path).ok_or_else(|| {
        PersistenceError::UnsupportedFormat(
            path.extension()
                .map(|ext| ext.to_string_lossy().into_owned())
                .unwrap_or_default(),
        )
    })
}

fn io_error(path: &Path, error: std::io::Error) -> PersistenceError {
    PersistenceError::IoError {
        path: path.display().to_string(),
        error: error.to_string(),
    }
}

/// Write a record, replacing any existing file atomically.
///
/// The bytes go to a sibling `.tmp` file first, then the temp file is renamed
/// over the target.
pub fn save_to_path(path: &Path, record: &SaveRecord) -> PersistenceResult<()> {
    let format = format_for(path)?;
    let bytes = encode_record(record, format)?;

    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = Path::new(&tmp_name);

    {
        let mut file = fs::File::create(tmp_path).map_err(|e| io_error(tmp_path, e))?;
        file.write_all(&bytes).map_err(|e| io_error(tmp_path, e))?;
        file.sync_all().map_err(|e| io_error(tmp_path, e))?;
    }
    fs::rename(tmp_path, path).map_err(|e| io_error(path, e))?;

    log::info!(
        "[save_to_path] Saved {} blocks to {}",
        record.blocks.len(),
        path.display()
    );
    Ok(())
}

pub fn load_from_path(path: &Path) -> PersistenceResult<SaveRecord> {
    let format = format_for(path)?;
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(PersistenceError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(io_error(path, e)),
    };

    let record = decode_record(&bytes, format)?;
    log::info!(
        "[load_from_path] Loaded {} blocks from {}",
        record.blocks.len(),
        path.display()
    );
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlayerSettings;
    use crate::entities::player::create_player;
    use crate::world::block::BlockKind;
    use crate::world::block_store::{block_count, create_block_store, place_block};

    fn sample_state() -> (PlayerData, BlockStore) {
        let mut player = create_player(&PlayerSettings::default(), Vec2::new(385.0, 359.0));
        player.body.position = Vec2::new(412.5, 300.0);
        player.health = 64;

        let mut store = create_block_store(15).unwrap();
        place_block(&mut store, 0, 585, BlockKind::Stone).unwrap();
        place_block(&mut store, 15, 570, BlockKind::Dirt).unwrap();
        place_block(&mut store, -30, 555, BlockKind::WoodWall).unwrap();
        (player, store)
    }

    fn assert_restored(record: &SaveRecord) {
        let mut player = create_player(&PlayerSettings::default(), Vec2::ZERO);
        let mut store = create_block_store(15).unwrap();
        apply_record(record, &mut player, &mut store).unwrap();

        assert_eq!(player.body.position, Vec2::new(412.5, 300.0));
        assert_eq!(player.health, 64);
        assert_eq!(player.spawn_point, Vec2::new(385.0, 359.0));
        assert_eq!(
            store.blocks,
            vec![
                Block::new(0, 585, BlockKind::Stone),
                Block::new(15, 570, BlockKind::Dirt),
                Block::new(-30, 555, BlockKind::WoodWall),
            ]
        );
    }

    #[test]
    fn test_json_layout_matches_classic_save() {
        let (player, store) = sample_state();
        let record = capture_record(&player, &store);
        let json: serde_json::Value =
            serde_json::from_slice(&encode_record(&record, SaveFormat::Json).unwrap()).unwrap();

        assert_eq!(json["player_x"], 412.5);
        assert_eq!(json["health"], 64);
        assert_eq!(json["blocks"][0], serde_json::json!([0, 585, "stone"]));
        assert_eq!(json["blocks"][2], serde_json::json!([-30, 555, "wood_wall"]));
        assert_eq!(json["spawn_point"], serde_json::json!([385.0, 359.0]));
    }

    #[test]
    fn test_reads_classic_integer_save() {
        let source = r#"{
            "player_x": 400, "player_y": 539,
            "blocks": [[0, 585, "stone"], [15, 585, "grass"]],
            "health": 100, "spawn_point": [385, 359]
        }"#;
        let record = decode_record(source.as_bytes(), SaveFormat::Json).unwrap();
        assert_eq!(record.player_x, 400.0);
        assert_eq!(record.blocks[1], (15, 585, BlockKind::Grass));
    }

    #[test]
    fn test_round_trip_on_disk_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        let (player, store) = sample_state();
        let record = capture_record(&player, &store);

        for name in ["save.json", "save.bin"] {
            let path = dir.path().join(name);
            save_to_path(&path, &record).unwrap();
            let loaded = load_from_path(&path).unwrap();
            assert_eq!(loaded, record);
            assert_restored(&loaded);
        }
        // no temp files left behind
        let leftovers = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().to_string_lossy().ends_with(".tmp"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from_path(&dir.path().join("nothing.json")).unwrap_err();
        assert!(matches!(err, PersistenceError::NotFound(_)));
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let (player, store) = sample_state();
        let record = capture_record(&player, &store);
        let err = save_to_path(&dir.path().join("save.xml"), &record).unwrap_err();
        assert!(matches!(err, PersistenceError::UnsupportedFormat(ref ext) if ext == "xml"));
    }

    #[test]
    fn test_misaligned_record_leaves_state_untouched() {
        let (mut player, mut store) = sample_state();
        let mut record = capture_record(&player, &store);
        record.blocks.push((7, 585, BlockKind::Dirt));
        record.player_x = 0.0;

        let err = apply_record(&record, &mut player, &mut store).unwrap_err();
        assert!(matches!(err, PersistenceError::CorruptedData(_)));
        assert_eq!(block_count(&store), 3);
        assert_eq!(player.body.position.x, 412.5);
    }

    #[test]
    fn test_non_finite_position_rejected() {
        let (player, store) = sample_state();
        let mut record = capture_record(&player, &store);
        record.spawn_point.1 = f32::NAN;
        assert!(matches!(
            validate_record(&record, 15),
            Err(PersistenceError::CorruptedData(_))
        ));
    }

    #[test]
    fn test_duplicates_dropped_and_health_clamped() {
        let (mut player, mut store) = sample_state();
        let mut record = capture_record(&player, &store);
        record.blocks.push((0, 585, BlockKind::Grass));
        record.health = 500;

        apply_record(&record, &mut player, &mut store).unwrap();
        assert_eq!(block_count(&store), 3);
        assert_eq!(store.blocks[0].kind, BlockKind::Stone);
        assert_eq!(player.health, 100);
    }

    #[test]
    fn test_corrupt_bytes_fail_to_decode() {
        assert!(matches!(
            decode_record(b"{ not json", SaveFormat::Json),
            Err(PersistenceError::DeserializationError(_))
        ));
        assert!(matches!(
            decode_record(&[1, 2, 3], SaveFormat::Binary),
            Err(PersistenceError::DeserializationError(_))
        ));
    }
}
