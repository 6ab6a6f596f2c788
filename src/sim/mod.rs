//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool order)
//! - No platform dependencies; drawing goes out through `RenderFrame`

pub mod collision;
pub mod entity;
pub mod input;
pub mod player;
pub mod state;
pub mod steering;
pub mod tick;

pub use collision::check_collision;
pub use entity::{Entity, EntityDescriptor, EntityKind, Recycle};
pub use input::{InputEvent, handle_input};
pub use player::{Player, PlayerFrame, SpeedPhase};
pub use state::{SimPhase, SimulationState, Viewport};
pub use steering::{Steering, steer};
pub use tick::tick;
