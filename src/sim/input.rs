//! Input events
//!
//! Events are applied the moment they arrive, between ticks. A tick sees
//! whatever the latest input left behind.

use glam::Vec2;

use super::state::SimulationState;

/// Key that toggles the speed boost
pub const BOOST_KEY: &str = "f";

/// Player input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer position relative to the canvas
    PointerMove { x: f32, y: f32 },
    /// Double or halve max speed
    ToggleSpeedBoost,
}

impl InputEvent {
    /// Map a key name to an event. Unbound keys map to nothing.
    pub fn from_key(key: &str) -> Option<Self> {
        key.eq_ignore_ascii_case(BOOST_KEY)
            .then_some(InputEvent::ToggleSpeedBoost)
    }
}

/// Apply one input event to the run
pub fn handle_input(state: &mut SimulationState, event: InputEvent) {
    match event {
        InputEvent::PointerMove { x, y } => {
            if !x.is_finite() || !y.is_finite() {
                log::debug!("Ignoring pointer event without a usable position");
                return;
            }
            if state.steering_locked() {
                return;
            }
            state.player.steer_toward(Vec2::new(x, y));
        }
        InputEvent::ToggleSpeedBoost => {
            let max_speed = state.player.toggle_boost(&state.tuning);
            log::info!(
                "Speed boost {} (max speed {})",
                if state.player.boosted { "on" } else { "off" },
                max_speed
            );
        }
    }
}
