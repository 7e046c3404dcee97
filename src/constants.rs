//! Global tunables shared across the simulation.
//!
//! These are the defaults baked into `SandboxConfig`. Code that runs inside a
//! session reads the config instead so tests can vary them.

use static_assertions::const_assert;

/// Core world dimensions
pub mod core {
    /// Edge length of one block, in pixels
    pub const BLOCK_SIZE: i32 = 15;

    /// Number of terrain columns generated for a new world
    pub const WORLD_WIDTH: u32 = 256;

    /// Divisor applied to the column index before sampling noise
    pub const NOISE_SCALE: f64 = 24.0;

    /// Size of the permutation table before doubling
    pub const PERMUTATION_SIZE: usize = 256;

    /// Visible play area
    pub const VIEWPORT_WIDTH: f32 = 800.0;
    pub const VIEWPORT_HEIGHT: f32 = 600.0;
}

/// Terrain shaping
pub mod terrain {
    /// Lowest column height, in blocks
    pub const MIN_HEIGHT: i32 = 10;

    /// Height added per unit of `noise + 1`
    pub const HEIGHT_AMPLITUDE: f64 = 10.0;

    /// Rows of dirt sitting on top of the stone row
    pub const DIRT_ROWS: i32 = 9;
}

/// Simulation clock
pub mod timing {
    pub const TICKS_PER_SECOND: u32 = 60;

    /// Upper bound on catch-up ticks run for a single presented frame
    pub const MAX_TICKS_PER_FRAME: u32 = 8;
}

/// Player defaults
pub mod player {
    pub const WIDTH: f32 = 30.0;
    pub const HEIGHT: f32 = 46.0;
    pub const SPEED: f32 = 5.0;
    pub const JUMP_POWER: f32 = 15.0;
    pub const GRAVITY: f32 = 1.0;
    pub const TERMINAL_VELOCITY: f32 = 10.0;
    pub const MAX_HEALTH: u32 = 100;

    /// Falls strictly longer than this many blocks hurt
    pub const FALL_DAMAGE_THRESHOLD_BLOCKS: f32 = 25.0;
    pub const FALL_DAMAGE: u32 = 10;

    /// Pointer interactions further than this many blocks away are ignored
    pub const INTERACTION_RANGE_BLOCKS: i32 = 10;

    /// 5 seconds at 60 ticks per second
    pub const RESPAWN_DELAY_TICKS: u32 = 300;
}

/// Mob defaults
pub mod mob {
    pub const SIZE: f32 = 25.0;
    pub const SPEED: f32 = 2.0;
    pub const GRAVITY: f32 = 1.0;
    pub const JUMP_POWER: f32 = 10.0;
    pub const JUMP_CHANCE: f64 = 0.05;
    pub const MAX_HEALTH: u32 = 3;
    pub const CONTACT_DAMAGE: u32 = 6;

    /// 5 seconds at 60 ticks per second
    pub const SPAWN_INTERVAL_TICKS: u32 = 300;
    pub const SPAWN_OFFSET: i32 = 200;

    /// Distance outside the viewport before a mob is dropped
    pub const CULL_MARGIN: f32 = 100.0;
}

/// Combat defaults
pub mod combat {
    pub const ATTACK_COOLDOWN_TICKS: u32 = 10;
    pub const ATTACK_RANGE: f32 = 50.0;
    pub const ATTACK_DAMAGE: u32 = 1;
}

/// Camera defaults
pub mod camera {
    pub const DEFAULT_ZOOM: f32 = 1.0;
    pub const ZOOM_STEP: f32 = 0.1;
    pub const MIN_ZOOM: f32 = 0.5;
}

const_assert!(core::BLOCK_SIZE > 0);
const_assert!(terrain::MIN_HEIGHT > terrain::DIRT_ROWS);
const_assert!(timing::TICKS_PER_SECOND > 0);
const_assert!(core::PERMUTATION_SIZE.is_power_of_two());
