//! Sprite sheet regions and the renderer capability

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Top-left corner of a sprite in the sprite sheet (pixels).
///
/// The blit size is carried separately and is the same on the sheet and
/// on screen, so a region is just an origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteRegion {
    pub x: f32,
    pub y: f32,
}

impl SpriteRegion {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// A single sprite blit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteDraw {
    pub region: SpriteRegion,
    /// Top-left screen position
    pub dest: Vec2,
    pub size: Vec2,
}

/// Something that can blit sprite-sheet regions to the screen
///
/// Implementations must finish drawing before returning; the frame they
/// read from is reused on the next tick.
pub trait Renderer {
    fn draw_sprite(&mut self, region: SpriteRegion, dest: Vec2, size: Vec2);
}

/// Collecting renderer, handy for headless runs
impl Renderer for Vec<SpriteDraw> {
    fn draw_sprite(&mut self, region: SpriteRegion, dest: Vec2, size: Vec2) {
        self.push(SpriteDraw { region, dest, size });
    }
}
