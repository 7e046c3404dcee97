//! Per-tick input intents consumed by the simulation.
//!
//! A presentation layer gathers key and pointer state each frame and hands
//! the world one `InputFrame` per tick. Pointer intents carry world-space
//! coordinates; `camera::screen_to_world` does the translation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Camera zoom request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomIntent {
    #[default]
    None,
    In,
    Out,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct InputFrame {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    pub attack: bool,

    /// Palette cycle: positive steps forward, negative steps back, wrapping
    pub palette_step: i32,

    pub zoom: ZoomIntent,

    /// Place the selected block in the cell containing this world point
    pub place_block: Option<Vec2>,

    /// Remove the block containing this world point
    pub remove_block: Option<Vec2>,
}

impl InputFrame {
    pub const fn new() -> Self {
        Self {
            move_left: false,
            move_right: false,
            jump: false,
            attack: false,
            palette_step: 0,
            zoom: ZoomIntent::None,
            place_block: None,
            remove_block: None,
        }
    }

    pub fn has_pointer_intent(&self) -> bool {
        self.place_block.is_some() || self.remove_block.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_frame_is_idle() {
        let frame = InputFrame::default();
        assert_eq!(frame, InputFrame::new());
        assert!(!frame.has_pointer_intent());
    }

    #[test]
    fn test_pointer_intent() {
        let frame = InputFrame {
            remove_block: Some(Vec2::new(3.0, 4.0)),
            ..InputFrame::new()
        };
        assert!(frame.has_pointer_intent());
    }
}
