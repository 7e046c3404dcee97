//! Fixed-timestep clock data - NO METHODS

/// Turns variable frame times into whole simulation ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedTimestep {
    /// Seconds per simulation tick
    pub tick_seconds: f64,

    /// Unspent frame time, always below `tick_seconds` between frames
    pub accumulator: f64,

    /// Catch-up cap for one frame
    pub max_ticks_per_frame: u32,

    pub paused: bool,

    pub total_ticks: u64,
}
