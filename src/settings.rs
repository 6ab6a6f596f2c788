//! Game settings
//!
//! Tuning constants and the obstacle pool layout. Persisted as JSON in
//! LocalStorage on the web, read from a file on native.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::SettingsError;
use crate::sim::EntityKind;

/// Speed model and crash recovery tuning
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Speed gained per tick while moving (below max speed)
    pub acceleration: f32,
    /// Speed lost per tick while stopped or over max speed
    pub drag: f32,
    /// Max speed with the boost off
    pub base_max_speed: f32,
    /// Boost multiplies max speed by this
    pub boost_factor: f32,
    /// Forward speed units per meter on the distance counter
    pub distance_scale: f32,
    /// Ticks of collision immunity after a crash
    pub invincibility_ticks: u32,
    /// Wall-clock seconds steering is locked after a crash
    pub crash_pause_secs: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            acceleration: ACCELERATION,
            drag: DRAG,
            base_max_speed: BASE_MAX_SPEED,
            boost_factor: BOOST_FACTOR,
            distance_scale: DISTANCE_SCALE,
            invincibility_ticks: INVINCIBILITY_TICKS,
            crash_pause_secs: CRASH_PAUSE_SECS,
        }
    }
}

impl Tuning {
    /// Reject zero, negative and non-finite constants
    pub fn validate(&self) -> Result<(), SettingsError> {
        let checks = [
            ("acceleration", self.acceleration),
            ("drag", self.drag),
            ("base_max_speed", self.base_max_speed),
            ("boost_factor", self.boost_factor),
            ("distance_scale", self.distance_scale),
        ];
        for (name, value) in checks {
            if !value.is_finite() || value <= 0.0 {
                return Err(SettingsError::InvalidTuning { name, value });
            }
        }
        // Zero pause is allowed: steering simply unlocks on the next tick
        if !self.crash_pause_secs.is_finite() || self.crash_pause_secs < 0.0 {
            return Err(SettingsError::InvalidTuning {
                name: "crash_pause_secs",
                value: self.crash_pause_secs,
            });
        }
        Ok(())
    }
}

/// One run of same-kind slots in the obstacle pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolEntry {
    /// Entity kind name ("tree" or "rock")
    pub kind: String,
    pub count: usize,
}

impl PoolEntry {
    pub fn new(kind: EntityKind, count: usize) -> Self {
        Self {
            kind: kind.name().to_string(),
            count,
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    /// Pool layout, in slot order (also collision priority order)
    pub pool: Vec<PoolEntry>,
    /// Fixed slope seed; random per run when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            pool: vec![
                PoolEntry::new(EntityKind::Rock, DEFAULT_ROCK_COUNT),
                PoolEntry::new(EntityKind::Tree, DEFAULT_TREE_COUNT),
            ],
            seed: None,
        }
    }
}

impl Settings {
    /// Parse settings from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check tuning and pool layout
    pub fn validate(&self) -> Result<(), SettingsError> {
        self.tuning.validate()?;
        self.pool_kinds().map(|_| ())
    }

    /// Expand the pool layout into one kind per slot
    pub fn pool_kinds(&self) -> Result<Vec<EntityKind>, SettingsError> {
        let mut kinds = Vec::new();
        for entry in &self.pool {
            let kind = EntityKind::from_name(&entry.kind)
                .ok_or_else(|| SettingsError::UnknownEntityKind(entry.kind.clone()))?;
            kinds.extend(std::iter::repeat_n(kind, entry.count));
        }
        if kinds.is_empty() {
            return Err(SettingsError::EmptyPool);
        }
        Ok(kinds)
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "ski_run_settings";

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(json) = self.to_json() {
                let _ = storage.set_item(Self::STORAGE_KEY, &json);
                log::info!("Settings saved");
            }
        }
    }

    /// Load settings from a JSON file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from_path(path: impl AsRef<std::path::Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}
