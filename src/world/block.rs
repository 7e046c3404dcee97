use crate::error::SandboxError;
use crate::physics::aabb::{aabb_from_rect, AABB};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Material of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    Grass,
    Dirt,
    Stone,
    /// Background wall; drawn but passable
    WoodWall,
}

impl BlockKind {
    /// Placement palette, in cycling order
    pub const PALETTE: [BlockKind; 4] = [
        BlockKind::Grass,
        BlockKind::Dirt,
        BlockKind::Stone,
        BlockKind::WoodWall,
    ];

    /// Whether entities collide with this kind
    pub const fn blocks_player(self) -> bool {
        !matches!(self, BlockKind::WoodWall)
    }

    /// Stable lowercase name, also the save-file spelling
    pub const fn name(self) -> &'static str {
        match self {
            BlockKind::Grass => "grass",
            BlockKind::Dirt => "dirt",
            BlockKind::Stone => "stone",
            BlockKind::WoodWall => "wood_wall",
        }
    }

    /// Asset key a presentation layer maps to a texture
    pub fn asset_path(self) -> String {
        format!("images/blocks/{}.png", self.name())
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockKind::Grass => write!(f, "Grass"),
            BlockKind::Dirt => write!(f, "Dirt"),
            BlockKind::Stone => write!(f, "Stone"),
            BlockKind::WoodWall => write!(f, "Wood Wall"),
        }
    }
}

impl FromStr for BlockKind {
    type Err = SandboxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlockKind::PALETTE
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| SandboxError::UnknownBlockKind {
                name: s.to_string(),
            })
    }
}

/// A single immovable grid cell.
///
/// `x` and `y` are pixel coordinates of the top-left corner and are always
/// multiples of the owning store's block size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Block {
    pub x: i32,
    pub y: i32,
    pub kind: BlockKind,
}

impl Block {
    pub const fn new(x: i32, y: i32, kind: BlockKind) -> Self {
        Self { x, y, kind }
    }

    pub const fn blocks_player(&self) -> bool {
        self.kind.blocks_player()
    }
}

/// Bounding box of a block of edge `block_size`
pub fn block_aabb(block: &Block, block_size: i32) -> AABB {
    aabb_from_rect(
        block.x as f32,
        block.y as f32,
        block_size as f32,
        block_size as f32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_wood_wall_is_passable() {
        assert!(BlockKind::Grass.blocks_player());
        assert!(BlockKind::Dirt.blocks_player());
        assert!(BlockKind::Stone.blocks_player());
        assert!(!BlockKind::WoodWall.blocks_player());
    }

    #[test]
    fn test_parse_block_kind() {
        assert_eq!("wood_wall".parse::<BlockKind>().ok(), Some(BlockKind::WoodWall));
        assert_eq!(" Stone ".parse::<BlockKind>().ok(), Some(BlockKind::Stone));
        assert!("lava".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&BlockKind::WoodWall).unwrap();
        assert_eq!(json, "\"wood_wall\"");
    }

    #[test]
    fn test_asset_path() {
        assert_eq!(BlockKind::Dirt.asset_path(), "images/blocks/dirt.png");
    }
}
