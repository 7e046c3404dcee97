//! Headless play session
//!
//! Drives a world through the fixed-timestep clock with scripted input and
//! logs what happened. Pass a TOML config path as the first argument to
//! override the defaults.
//!
//! RUST_LOG=info cargo run --example headless_session [config.toml]

use hearth_sandbox::{
    advance_timestep, build_scene, create_timestep, create_world, drain_notifications, load_config,
    load_game, save_game, tick_world, InputFrame, NotificationLevel, SandboxConfig, TickReport,
};
use std::path::PathBuf;

/// Simulated frame time of a 60 Hz display
const FRAME_SECONDS: f64 = 1.0 / 60.0;
const FRAMES: u32 = 1200;

fn scripted_input(frame: u32) -> InputFrame {
    let phase = (frame / 120) % 4;
    InputFrame {
        move_right: phase == 0 || phase == 1,
        move_left: phase == 2,
        jump: frame % 45 == 0,
        attack: frame % 20 == 0,
        palette_step: if frame % 300 == 0 { 1 } else { 0 },
        ..InputFrame::default()
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = match std::env::args().nth(1) {
        Some(path) => load_config(&path)?,
        None => SandboxConfig {
            world: hearth_sandbox::config::WorldSettings {
                seed: Some(2024),
                ..Default::default()
            },
            ..Default::default()
        },
    };

    let mut world = create_world(config)?;
    let mut clock = create_timestep(&world.config.session);

    let mut totals = TickReport::default();
    let mut kills = 0;
    let mut spawned = 0;
    let mut deaths = 0;

    for frame in 0..FRAMES {
        let input = scripted_input(frame);
        for _ in 0..advance_timestep(&mut clock, FRAME_SECONDS) {
            let report = tick_world(&mut world, &input);
            kills += report.attack.kills;
            spawned += u32::from(report.mob_spawned);
            deaths += u32::from(report.died);
            totals.mobs_culled += report.mobs_culled;
            totals.contact_damage += report.contact_damage;
        }

        for note in drain_notifications(&mut world) {
            match note.level {
                NotificationLevel::Warning => log::warn!("[headless_session] {}", note.message),
                _ => log::info!("[headless_session] {}", note.message),
            }
        }
    }

    let save_path = std::env::temp_dir().join(PathBuf::from("hearth_sandbox_demo.json"));
    save_game(&mut world, &save_path);
    load_game(&mut world, &save_path);
    for note in drain_notifications(&mut world) {
        log::info!("[headless_session] {}", note.message);
    }

    let scene = build_scene(&world);
    log::info!(
        "[headless_session] {} ticks: player at ({:.1}, {:.1}) health {}/{}, {} mobs live, {} spawned, {} killed, {} culled, {} deaths, {} contact damage, {} blocks, selected {}",
        clock.total_ticks,
        scene.player.position.x,
        scene.player.position.y,
        scene.health,
        scene.max_health,
        scene.mobs.len(),
        spawned,
        kills,
        totals.mobs_culled,
        deaths,
        totals.contact_damage,
        scene.blocks.len(),
        scene.selected_block
    );

    Ok(())
}
