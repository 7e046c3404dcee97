/// World Error Handling
///
/// Errors raised by block store mutations. Gameplay paths treat most of these
/// as silent no-ops; they only surface to callers that ask.
use crate::error::SandboxError;

/// World-specific result type
pub type WorldResult<T> = Result<T, WorldError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorldError {
    #[error("Position ({x}, {y}) is not aligned to block size {block_size}")]
    MisalignedPosition { x: i32, y: i32, block_size: i32 },

    #[error("Block size must be positive, got {0}")]
    InvalidBlockSize(i32),
}

impl From<WorldError> for SandboxError {
    fn from(err: WorldError) -> Self {
        match err {
            WorldError::MisalignedPosition { x, y, block_size } => SandboxError::MisalignedBlock {
                pos: (x, y),
                block_size,
            },
            WorldError::InvalidBlockSize(size) => SandboxError::InvalidConfig {
                field: "world.block_size".to_string(),
                value: size.to_string(),
                reason: "must be positive".to_string(),
            },
        }
    }
}
