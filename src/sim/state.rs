//! Simulation state
//!
//! Everything a run owns: the skier, the obstacle pool, the crash pause
//! and the seeded RNG that places obstacles.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::player::Player;
use crate::consts::PLAYER_START_Y;
use crate::error::SettingsError;
use crate::settings::{Settings, Tuning};

/// Visible canvas area (pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Result<Self, SettingsError> {
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(SettingsError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Where the skier starts: horizontally centered, near the top
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, PLAYER_START_Y)
    }
}

/// Run phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    /// Normal play, pointer steers
    Running,
    /// Just crashed; steering locked until the pause runs out
    CrashPaused,
}

/// Complete run state
#[derive(Debug, Clone)]
pub struct SimulationState {
    /// Slope seed for reproducibility
    pub seed: u64,
    pub viewport: Viewport,
    pub tuning: Tuning,
    pub player: Player,
    /// Obstacle pool, fixed size, in collision priority order
    pub entities: Vec<Entity>,
    pub phase: SimPhase,
    /// Wall-clock seconds left in the crash pause
    pub pause_remaining: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Obstacle placement RNG
    pub rng: Pcg32,
}

impl SimulationState {
    /// Build a run. Fails on bad settings or viewport.
    pub fn new(settings: &Settings, viewport: Viewport, seed: u64) -> Result<Self, SettingsError> {
        settings.tuning.validate()?;
        let kinds = settings.pool_kinds()?;
        // Re-check in case the caller built the viewport by hand
        let viewport = Viewport::new(viewport.width, viewport.height)?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let entities = kinds
            .into_iter()
            .map(|kind| Entity::spawn(kind, &viewport, &mut rng))
            .collect::<Vec<_>>();

        log::info!(
            "New run: seed {}, viewport {}x{}, {} obstacles",
            seed,
            viewport.width,
            viewport.height,
            entities.len()
        );

        Ok(Self {
            seed,
            viewport,
            tuning: settings.tuning,
            player: Player::new(viewport.spawn_point(), &settings.tuning),
            entities,
            phase: SimPhase::Running,
            pause_remaining: 0.0,
            time_ticks: 0,
            rng,
        })
    }

    /// Start a fresh run on the same slope generator.
    ///
    /// The RNG keeps going, so obstacles land in new places.
    pub fn restart(&mut self) {
        self.player = Player::new(self.viewport.spawn_point(), &self.tuning);
        for entity in &mut self.entities {
            entity.scatter(&self.viewport, &mut self.rng);
        }
        self.phase = SimPhase::Running;
        self.pause_remaining = 0.0;
        self.time_ticks = 0;
        log::info!("Run restarted ({} obstacles)", self.entities.len());
    }

    /// Pointer steering is ignored while this is true
    #[inline]
    pub fn steering_locked(&self) -> bool {
        self.phase == SimPhase::CrashPaused
    }

    /// Crash the player and lock steering. Returns `false` if the crash
    /// was already registered.
    pub fn register_crash(&mut self) -> bool {
        if !self.player.crash(&self.tuning) {
            return false;
        }
        self.phase = SimPhase::CrashPaused;
        self.pause_remaining = self.tuning.crash_pause_secs;
        log::info!(
            "Crash at tick {} ({:.0} m)",
            self.time_ticks,
            self.player.distance
        );
        true
    }

    /// Run down the crash pause by `elapsed` wall-clock seconds
    pub fn advance_pause(&mut self, elapsed: f32) {
        if self.phase != SimPhase::CrashPaused {
            return;
        }
        self.pause_remaining -= elapsed.max(0.0);
        if self.pause_remaining <= 0.0 {
            self.pause_remaining = 0.0;
            self.phase = SimPhase::Running;
            log::debug!("Crash pause over, steering unlocked");
        }
    }
}
