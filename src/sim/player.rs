//! The skier
//!
//! The skier stays put on screen; the world scrolls past at `-speed`.
//! Steering picks a banded heading, the speed model integrates a scalar
//! speed toward the current max, and a crash resets the run while leaving a
//! short invincibility window.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::steering::{self, Steering};
use crate::consts::*;
use crate::renderer::SpriteRegion;
use crate::settings::Tuning;

/// Speed model state, derived from `(stopped, current_speed)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedPhase {
    /// Stopped and at rest
    Idle,
    /// Stopped, bleeding off speed
    Braking,
    /// Moving, below max speed
    Accelerating,
    /// Moving at exactly max speed
    Cruising,
    /// Moving above max speed (boost just switched off)
    Overspeed,
}

impl SpeedPhase {
    pub fn of(stopped: bool, current_speed: f32, max_speed: f32) -> Self {
        if stopped {
            if current_speed <= 0.0 {
                SpeedPhase::Idle
            } else {
                SpeedPhase::Braking
            }
        } else if current_speed < max_speed {
            SpeedPhase::Accelerating
        } else if current_speed > max_speed {
            SpeedPhase::Overspeed
        } else {
            SpeedPhase::Cruising
        }
    }
}

/// Player sprite frames
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerFrame {
    Down,
    Left,
    Right,
    FullLeft,
    FullRight,
    Crashed,
}

impl PlayerFrame {
    /// Pick the frame for a banded heading
    pub fn select(heading: f32, crashed: bool) -> Self {
        if crashed {
            PlayerFrame::Crashed
        } else if heading > TURN_BAND {
            PlayerFrame::FullRight
        } else if heading > STRAIGHT_BAND {
            PlayerFrame::Right
        } else if heading < -TURN_BAND {
            PlayerFrame::FullLeft
        } else if heading < -STRAIGHT_BAND {
            PlayerFrame::Left
        } else {
            PlayerFrame::Down
        }
    }

    /// Sprite sheet origin; frames sit side by side on the top row
    pub const fn region(self) -> SpriteRegion {
        let column = match self {
            PlayerFrame::Down => 0.0,
            PlayerFrame::Left => 1.0,
            PlayerFrame::Right => 2.0,
            PlayerFrame::FullLeft => 3.0,
            PlayerFrame::FullRight => 4.0,
            PlayerFrame::Crashed => 5.0,
        };
        SpriteRegion::new(column * PLAYER_WIDTH, 0.0)
    }
}

/// The player's skier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Start-of-run draw position
    pub spawn: Vec2,
    /// Top-left draw position
    pub pos: Vec2,
    /// Velocity the world scrolls against, recomputed each tick
    pub speed: Vec2,
    /// Banded heading (radians, 0 = straight downhill, positive = right)
    pub heading: f32,
    pub current_speed: f32,
    pub max_speed: f32,
    /// Speed boost toggle
    pub boosted: bool,
    pub stopped: bool,
    /// Showing the crash sprite
    pub crashed: bool,
    /// Ticks left before collisions count again
    pub invincibility_ticks: u32,
    /// Meters travelled this run
    pub distance: f32,
}

impl Player {
    pub fn new(spawn: Vec2, tuning: &Tuning) -> Self {
        Self {
            spawn,
            pos: spawn,
            speed: Vec2::ZERO,
            heading: 0.0,
            current_speed: 0.0,
            max_speed: tuning.base_max_speed,
            boosted: false,
            stopped: true,
            crashed: false,
            invincibility_ticks: 0,
            distance: 0.0,
        }
    }

    /// Put the skier back at the top of the run, standing still.
    ///
    /// Crash flags and the distance counter are left alone.
    pub fn reset(&mut self, tuning: &Tuning) {
        self.pos = self.spawn;
        self.speed = Vec2::ZERO;
        self.heading = 0.0;
        self.current_speed = 0.0;
        self.max_speed = tuning.base_max_speed;
        self.boosted = false;
        self.stopped = true;
    }

    /// Point used for collision tests (bottom center of the sprite)
    #[inline]
    pub fn hit_point(&self) -> Vec2 {
        Vec2::new(self.pos.x + PLAYER_WIDTH / 2.0, self.pos.y + PLAYER_HEIGHT)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(PLAYER_WIDTH, PLAYER_HEIGHT)
    }

    /// Collisions only count when not crashed and not invincible
    #[inline]
    pub fn is_vulnerable(&self) -> bool {
        !self.crashed && self.invincibility_ticks == 0
    }

    /// Steer toward a pointer position. Also clears the crash sprite.
    pub fn steer_toward(&mut self, pointer: Vec2) {
        self.crashed = false;

        match steering::steer(self.hit_point(), pointer) {
            Steering::Stop => self.stopped = true,
            Steering::Heading(heading) => {
                self.heading = heading;
                self.stopped = false;
            }
        }
    }

    /// Flip the speed boost. Returns the new max speed.
    pub fn toggle_boost(&mut self, tuning: &Tuning) -> f32 {
        self.boosted = !self.boosted;
        if self.boosted {
            self.max_speed *= tuning.boost_factor;
        } else {
            self.max_speed /= tuning.boost_factor;
        }
        self.max_speed
    }

    pub fn speed_phase(&self) -> SpeedPhase {
        SpeedPhase::of(self.stopped, self.current_speed, self.max_speed)
    }

    /// One step of the speed model
    pub fn update_speed(&mut self, tuning: &Tuning) {
        match self.speed_phase() {
            SpeedPhase::Idle | SpeedPhase::Cruising => {}
            SpeedPhase::Braking => {
                self.current_speed = (self.current_speed - tuning.drag).max(0.0);
            }
            SpeedPhase::Accelerating => {
                self.current_speed = (self.current_speed + tuning.acceleration).min(self.max_speed);
            }
            SpeedPhase::Overspeed => {
                self.current_speed = (self.current_speed - tuning.drag).max(0.0);
            }
        }
    }

    /// Advance one tick: speed, velocity, invincibility and distance
    pub fn advance(&mut self, tuning: &Tuning) {
        self.update_speed(tuning);

        // Sideways motion runs at half rate
        self.speed = Vec2::new(
            self.heading.sin() * (self.current_speed / 2.0),
            self.heading.cos() * self.current_speed,
        );

        if !self.crashed && self.invincibility_ticks > 0 {
            self.invincibility_ticks -= 1;
        }

        self.distance += self.speed.y / tuning.distance_scale;
    }

    /// Crash: reset the run and start the invincibility window.
    ///
    /// Returns `false` (and changes nothing) if this crash is already
    /// in progress.
    pub fn crash(&mut self, tuning: &Tuning) -> bool {
        if self.crashed && self.invincibility_ticks > 0 {
            return false;
        }
        self.reset(tuning);
        self.crashed = true;
        self.invincibility_ticks = tuning.invincibility_ticks;
        true
    }

    pub fn frame(&self) -> PlayerFrame {
        PlayerFrame::select(self.heading, self.crashed)
    }
}
