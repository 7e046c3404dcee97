//! Fixed-timestep clock operations

use super::timestep_data::FixedTimestep;
use crate::config::SessionSettings;

/// Longest frame time fed into the accumulator, in seconds
pub const MAX_FRAME_SECONDS: f64 = 0.25;

pub fn create_timestep(settings: &SessionSettings) -> FixedTimestep {
    FixedTimestep {
        tick_seconds: 1.0 / f64::from(settings.ticks_per_second.max(1)),
        accumulator: 0.0,
        max_ticks_per_frame: settings.max_ticks_per_frame,
        paused: false,
        total_ticks: 0,
    }
}

/// Feed one frame's elapsed time and return how many ticks to run.
///
/// Returns 0 while paused. When the catch-up cap is hit the backlog of whole
/// ticks is dropped so a slow frame cannot snowball into the next one.
pub fn advance_timestep(clock: &mut FixedTimestep, frame_seconds: f64) -> u32 {
    if clock.paused {
        clock.accumulator = 0.0;
        return 0;
    }

    let dt = if frame_seconds.is_finite() {
        frame_seconds.clamp(0.0, MAX_FRAME_SECONDS)
    } else {
        0.0
    };
    clock.accumulator += dt;

    let mut ticks = 0;
    while clock.accumulator >= clock.tick_seconds && ticks < clock.max_ticks_per_frame {
        clock.accumulator -= clock.tick_seconds;
        ticks += 1;
    }

    if clock.accumulator >= clock.tick_seconds {
        log::trace!(
            "[advance_timestep] Dropping {:.3}s of backlog",
            clock.accumulator
        );
        clock.accumulator %= clock.tick_seconds;
    }

    clock.total_ticks += u64::from(ticks);
    ticks
}

/// Stop producing ticks. Time spent paused is discarded, not replayed.
pub fn pause_timestep(clock: &mut FixedTimestep) {
    clock.paused = true;
    clock.accumulator = 0.0;
}

pub fn resume_timestep(clock: &mut FixedTimestep) {
    clock.paused = false;
}

/// Fraction of a tick left in the accumulator, for render interpolation
pub fn interpolation_alpha(clock: &FixedTimestep) -> f64 {
    clock.accumulator / clock.tick_seconds
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_clock(ticks_per_second: u32, max_ticks_per_frame: u32) -> FixedTimestep {
        create_timestep(&SessionSettings {
            ticks_per_second,
            max_ticks_per_frame,
        })
    }

    #[test]
    fn test_whole_ticks_from_frame_time() {
        let mut clock = make_clock(8, 8);
        assert_eq!(advance_timestep(&mut clock, 0.0625), 0);
        assert_eq!(advance_timestep(&mut clock, 0.0625), 1);
        assert_eq!(advance_timestep(&mut clock, 0.25), 2);
        assert_eq!(clock.total_ticks, 3);
        assert_eq!(clock.accumulator, 0.0);
    }

    #[test]
    fn test_long_frames_are_capped() {
        let mut clock = make_clock(8, 8);
        // 10 seconds counts as 0.25
        assert_eq!(advance_timestep(&mut clock, 10.0), 2);

        let mut capped = make_clock(64, 4);
        assert_eq!(advance_timestep(&mut capped, 0.25), 4);
        assert!(capped.accumulator < capped.tick_seconds);
    }

    #[test]
    fn test_pause_discards_time() {
        let mut clock = make_clock(8, 8);
        advance_timestep(&mut clock, 0.0625);
        pause_timestep(&mut clock);
        assert_eq!(advance_timestep(&mut clock, 0.25), 0);
        assert_eq!(clock.accumulator, 0.0);

        resume_timestep(&mut clock);
        assert_eq!(advance_timestep(&mut clock, 0.0625), 0);
        assert_eq!(interpolation_alpha(&clock), 0.5);
    }

    #[test]
    fn test_bad_frame_times_ignored() {
        let mut clock = make_clock(8, 8);
        assert_eq!(advance_timestep(&mut clock, -1.0), 0);
        assert_eq!(advance_timestep(&mut clock, f64::NAN), 0);
        assert_eq!(clock.accumulator, 0.0);
    }
}
