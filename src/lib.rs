//! Ski Run - an endless downhill skiing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (steering, speed, obstacle pool, collisions)
//! - `renderer`: Sprite-frame description handed to an external renderer
//! - `settings`: Tuning and obstacle pool configuration
//! - `error`: Startup/configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SettingsError;
pub use settings::{PoolEntry, Settings, Tuning};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (30 Hz)
    pub const SIM_DT: f32 = 1.0 / 30.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;

    /// Player sprite size (pixels)
    pub const PLAYER_WIDTH: f32 = 16.0;
    pub const PLAYER_HEIGHT: f32 = 32.0;
    /// Player spawn height from the top of the viewport
    pub const PLAYER_START_Y: f32 = 100.0;

    /// Speed model defaults (per tick)
    pub const ACCELERATION: f32 = 0.3;
    pub const DRAG: f32 = 0.8;
    pub const BASE_MAX_SPEED: f32 = 10.0;
    /// Speed boost multiplies max speed by this factor
    pub const BOOST_FACTOR: f32 = 2.0;
    /// Forward speed units per "meter" on the distance counter
    pub const DISTANCE_SCALE: f32 = 25.0;

    /// Crash recovery
    pub const INVINCIBILITY_TICKS: u32 = 15;
    pub const CRASH_PAUSE_SECS: f32 = 1.0;

    /// Steering bands (radians)
    pub const STRAIGHT_BAND: f32 = 0.3;
    pub const TURN_BAND: f32 = 0.8;
    pub const MAX_BANK: f32 = 1.1;

    /// Default obstacle pool
    pub const DEFAULT_ROCK_COUNT: usize = 10;
    pub const DEFAULT_TREE_COUNT: usize = 20;
}
