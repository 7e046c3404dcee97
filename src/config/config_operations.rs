//! Config operations - loading, validation, derived parameters

use super::config_data::SandboxConfig;
use crate::error::{SandboxError, SandboxResult};
use crate::physics::GravityParams;
use crate::world::terrain::TerrainParams;
use anyhow::{anyhow, Result};
use std::path::Path;

// ============================================================================
// LOADING
// ============================================================================

/// Parse a TOML document. Missing keys fall back to defaults.
pub fn parse_config(source: &str) -> SandboxResult<SandboxConfig> {
    let config: SandboxConfig = toml::from_str(source)?;
    Ok(config)
}

/// Load and validate a TOML config file
pub fn load_config(path: impl AsRef<Path>) -> SandboxResult<SandboxConfig> {
    let path = path.as_ref();
    log::debug!("[load_config] Reading {}", path.display());

    let source = std::fs::read_to_string(path).map_err(|e| SandboxError::IoError {
        path: path.display().to_string(),
        error: e.to_string(),
    })?;

    let config = parse_config(&source)?;
    validate_config(&config).map_err(|e| SandboxError::InvalidConfig {
        field: path.display().to_string(),
        value: String::new(),
        reason: e.to_string(),
    })?;

    log::info!("[load_config] Loaded configuration from {}", path.display());
    Ok(config)
}

// ============================================================================
// VALIDATION
// ============================================================================

/// Validate configuration parameters
pub fn validate_config(config: &SandboxConfig) -> Result<()> {
    let world = &config.world;
    if world.block_size <= 0 {
        return Err(anyhow!("SandboxConfig: world.block_size must be positive"));
    }
    if world.world_width == 0 {
        return Err(anyhow!("SandboxConfig: world.world_width cannot be 0"));
    }
    if !(world.noise_scale.is_finite() && world.noise_scale > 0.0) {
        return Err(anyhow!(
            "SandboxConfig: world.noise_scale {} must be a positive number",
            world.noise_scale
        ));
    }
    if world.viewport_width <= 0.0 || world.viewport_height <= 0.0 {
        return Err(anyhow!("SandboxConfig: viewport dimensions must be positive"));
    }
    if world.viewport_height < world.block_size as f32 {
        return Err(anyhow!(
            "SandboxConfig: viewport height {} is smaller than one block",
            world.viewport_height
        ));
    }

    let player = &config.player;
    if player.width <= 0.0 || player.height <= 0.0 {
        return Err(anyhow!("SandboxConfig: player dimensions must be positive"));
    }
    if player.max_health == 0 {
        return Err(anyhow!("SandboxConfig: player.max_health cannot be 0"));
    }
    if player.terminal_velocity <= 0.0 {
        return Err(anyhow!("SandboxConfig: player.terminal_velocity must be positive"));
    }
    if player.interaction_range_blocks < 0 {
        return Err(anyhow!("SandboxConfig: player.interaction_range_blocks cannot be negative"));
    }

    let mob = &config.mob;
    if mob.size <= 0.0 {
        return Err(anyhow!("SandboxConfig: mob.size must be positive"));
    }
    if mob.max_health == 0 {
        return Err(anyhow!("SandboxConfig: mob.max_health cannot be 0"));
    }
    if !(0.0..=1.0).contains(&mob.jump_chance) {
        return Err(anyhow!(
            "SandboxConfig: mob.jump_chance {} is not a probability",
            mob.jump_chance
        ));
    }
    if mob.spawn_offset < 0 {
        return Err(anyhow!("SandboxConfig: mob.spawn_offset cannot be negative"));
    }

    if config.combat.range <= 0.0 {
        return Err(anyhow!("SandboxConfig: combat.range must be positive"));
    }

    let camera = &config.camera;
    if camera.min_zoom <= 0.0 || camera.zoom_step <= 0.0 {
        return Err(anyhow!("SandboxConfig: camera zoom settings must be positive"));
    }

    if config.session.ticks_per_second == 0 {
        return Err(anyhow!("SandboxConfig: session.ticks_per_second cannot be 0"));
    }
    if config.session.max_ticks_per_frame == 0 {
        return Err(anyhow!("SandboxConfig: session.max_ticks_per_frame cannot be 0"));
    }

    log::debug!("[validate_config] Configuration validated successfully");
    Ok(())
}

// ============================================================================
// DERIVED PARAMETERS
// ============================================================================

/// The configured seed, or a fresh one from entropy
pub fn resolve_seed(config: &SandboxConfig) -> u64 {
    config.world.seed.unwrap_or_else(rand::random)
}

/// Ground line sits one block above the bottom of the viewport
pub fn terrain_params(config: &SandboxConfig) -> TerrainParams {
    let world = &config.world;
    TerrainParams {
        world_width: world.world_width,
        scale: world.noise_scale,
        block_size: world.block_size,
        ground_level: world.viewport_height as i32 - world.block_size,
        ..TerrainParams::default()
    }
}

pub fn player_gravity(config: &SandboxConfig) -> GravityParams {
    GravityParams {
        gravity: config.player.gravity,
        terminal_velocity: Some(config.player.terminal_velocity),
    }
}

/// Mobs fall without a speed cap
pub fn mob_gravity(config: &SandboxConfig) -> GravityParams {
    GravityParams {
        gravity: config.mob.gravity,
        terminal_velocity: None,
    }
}
