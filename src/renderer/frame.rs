//! Per-tick frame description

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::sprite::{Renderer, SpriteDraw, SpriteRegion};

/// Numbers for the stats overlay (speed in m/s, distance in m)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameStats {
    pub speed: u32,
    pub distance: u64,
}

impl FrameStats {
    pub fn new(current_speed: f32, distance: f32) -> Self {
        Self {
            speed: current_speed.max(0.0).round() as u32,
            distance: distance.max(0.0).round() as u64,
        }
    }
}

/// Everything the renderer needs for one tick, in draw order
/// (obstacles in pool order, player last).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderFrame {
    pub sprites: Vec<SpriteDraw>,
    pub stats: FrameStats,
    /// Player is showing the crash sprite
    pub crashed: bool,
}

impl RenderFrame {
    /// Preallocate room for every pool slot plus the player
    pub fn with_capacity(sprites: usize) -> Self {
        Self {
            sprites: Vec::with_capacity(sprites),
            ..Default::default()
        }
    }

    /// Drop last tick's sprites, keeping the allocation
    pub fn clear(&mut self) {
        self.sprites.clear();
        self.stats = FrameStats::default();
        self.crashed = false;
    }

    pub fn push(&mut self, region: SpriteRegion, dest: Vec2, size: Vec2) {
        self.sprites.push(SpriteDraw { region, dest, size });
    }

    /// Replay the frame into a renderer
    pub fn draw<R: Renderer + ?Sized>(&self, renderer: &mut R) {
        for sprite in &self.sprites {
            renderer.draw_sprite(sprite.region, sprite.dest, sprite.size);
        }
    }
}
