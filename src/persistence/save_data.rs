//! Save record data - NO METHODS beyond format detection

use crate::world::block::BlockKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Everything a save file holds.
///
/// Field names and shapes match the classic `save.json` layout: blocks are
/// `[x, y, "kind"]` triples and the spawn point is an `[x, y]` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub player_x: f32,
    pub player_y: f32,
    pub blocks: Vec<(i32, i32, BlockKind)>,
    pub health: u32,
    pub spawn_point: (f32, f32),
}

/// On-disk encoding, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    /// `.json`, human-readable
    Json,
    /// `.bin`, bincode
    Binary,
}

impl SaveFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        if ext.eq_ignore_ascii_case("json") {
            Some(SaveFormat::Json)
        } else if ext.eq_ignore_ascii_case("bin") {
            Some(SaveFormat::Binary)
        } else {
            None
        }
    }
}
