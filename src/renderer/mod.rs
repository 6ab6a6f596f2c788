//! Render-frame description
//!
//! The simulation never touches pixels. Each tick it fills a `RenderFrame`
//! with sprite-sheet blits that an external `Renderer` carries out.

pub mod frame;
pub mod sprite;

pub use frame::{FrameStats, RenderFrame};
pub use sprite::{Renderer, SpriteDraw, SpriteRegion};
