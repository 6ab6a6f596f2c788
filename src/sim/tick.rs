//! Fixed timestep simulation tick
//!
//! One tick: scroll every obstacle against the skier, recycle the ones
//! that left the band, test collisions, then advance the skier's speed.
//! The tick also fills the render frame as it goes.

use super::collision;
use super::state::SimulationState;
use crate::renderer::{FrameStats, RenderFrame};

/// Advance the run by one tick.
///
/// `elapsed` is the wall-clock time since the previous tick (seconds); it
/// only drives the crash pause. Per-tick physics constants do not scale
/// with it.
pub fn tick(state: &mut SimulationState, elapsed: f32, frame: &mut RenderFrame) {
    state.advance_pause(elapsed);
    state.time_ticks += 1;
    frame.clear();

    for i in 0..state.entities.len() {
        // Re-read each time: a crash earlier in this loop zeroes the speed
        let player_speed = state.player.speed;

        let hit = {
            let entity = &mut state.entities[i];
            if let Some(recycle) = entity.move_by(player_speed, &state.viewport, &mut state.rng) {
                log::trace!("{:?} #{} recycled: {:?}", entity.kind, i, recycle);
            }
            if entity.is_visible(&state.viewport) {
                frame.push(entity.region(), entity.pos, entity.size());
            }
            collision::check_collision(&state.player, entity)
        };

        if hit {
            state.register_crash();
        }
    }

    state.player.advance(&state.tuning);

    let player = &state.player;
    frame.push(player.frame().region(), player.pos, player.size());
    frame.stats = FrameStats::new(player.current_speed, player.distance);
    frame.crashed = player.crashed;
}
