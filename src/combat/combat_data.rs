//! Combat data - NO METHODS

/// Attack cooldown tracking for the player
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackState {
    /// Ticks left before another attack may fire. Zero means ready.
    pub cooldown_remaining: u32,
}

/// Result of one swing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttackOutcome {
    /// False when the swing was swallowed by the cooldown
    pub fired: bool,
    pub hits: u32,
    pub kills: u32,
}
