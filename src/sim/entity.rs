//! Slope obstacles
//!
//! A fixed pool of trees and rocks covers a band three viewports wide.
//! Obstacles never die: when one scrolls off the band it is moved back in
//! on the far side, so a handful of entities makes an endless slope.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::state::Viewport;
use crate::renderer::SpriteRegion;

/// Obstacle types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Tree,
    /// Decorative, never collides
    Rock,
}

/// Fixed per-kind properties
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityDescriptor {
    pub region: SpriteRegion,
    pub size: Vec2,
    pub collidable: bool,
}

impl EntityKind {
    pub const ALL: [EntityKind; 2] = [EntityKind::Tree, EntityKind::Rock];

    pub const fn descriptor(self) -> EntityDescriptor {
        match self {
            EntityKind::Tree => EntityDescriptor {
                region: SpriteRegion::new(0.0, 32.0),
                size: Vec2::new(32.0, 32.0),
                collidable: true,
            },
            EntityKind::Rock => EntityDescriptor {
                region: SpriteRegion::new(32.0, 32.0),
                size: Vec2::new(16.0, 16.0),
                collidable: false,
            },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Tree => "tree",
            EntityKind::Rock => "rock",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tree" => Some(EntityKind::Tree),
            "rock" => Some(EntityKind::Rock),
            _ => None,
        }
    }
}

/// Where a recycled obstacle re-entered the band
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recycle {
    /// Left over the top, back in at the bottom
    Bottom,
    /// Left past the far left, back in on the right
    Right,
    /// Left past the far right, back in on the left
    Left,
}

/// A pooled obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    /// Top-left draw position
    pub pos: Vec2,
}

impl Entity {
    /// Create an obstacle at a random spot in the band
    pub fn spawn<R: Rng + ?Sized>(kind: EntityKind, viewport: &Viewport, rng: &mut R) -> Self {
        let mut entity = Self { kind, pos: Vec2::ZERO };
        entity.scatter(viewport, rng);
        entity
    }

    /// Move to a random spot in the band
    pub fn scatter<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) {
        self.pos = Vec2::new(random_band_x(viewport, rng), random_y(viewport, rng));
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.kind.descriptor().size
    }

    #[inline]
    pub fn collidable(&self) -> bool {
        self.kind.descriptor().collidable
    }

    #[inline]
    pub fn region(&self) -> SpriteRegion {
        self.kind.descriptor().region
    }

    /// Point used for collision tests (bottom center of the sprite)
    #[inline]
    pub fn hit_point(&self) -> Vec2 {
        let size = self.size();
        Vec2::new(self.pos.x + size.x / 2.0, self.pos.y + size.y)
    }

    /// Scroll against the player's velocity, then recycle if off the band
    pub fn move_by<R: Rng + ?Sized>(
        &mut self,
        player_speed: Vec2,
        viewport: &Viewport,
        rng: &mut R,
    ) -> Option<Recycle> {
        self.pos -= player_speed;
        self.recycle(viewport, rng)
    }

    /// Reposition if the obstacle has left the band. Vertical exit wins.
    pub fn recycle<R: Rng + ?Sized>(&mut self, viewport: &Viewport, rng: &mut R) -> Option<Recycle> {
        let size = self.size();

        if self.pos.y + size.y < 0.0 {
            self.pos = Vec2::new(random_band_x(viewport, rng), viewport.height);
            Some(Recycle::Bottom)
        } else if self.pos.x < -2.0 * viewport.width {
            self.pos = Vec2::new(viewport.width + size.x, random_y(viewport, rng));
            Some(Recycle::Right)
        } else if self.pos.x > 3.0 * viewport.width {
            self.pos = Vec2::new(-size.x, random_y(viewport, rng));
            Some(Recycle::Left)
        } else {
            None
        }
    }

    /// Whether any part of the sprite is on screen
    pub fn is_visible(&self, viewport: &Viewport) -> bool {
        let size = self.size();
        self.pos.x + size.x >= 0.0
            && self.pos.x <= viewport.width
            && self.pos.y + size.y >= 0.0
            && self.pos.y <= viewport.height
    }
}

/// Random x across the band `[-width, 2 * width)`
fn random_band_x<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> f32 {
    rng.random_range(-viewport.width..2.0 * viewport.width)
}

/// Random y across the screen `[0, height)`
fn random_y<R: Rng + ?Sized>(viewport: &Viewport, rng: &mut R) -> f32 {
    rng.random_range(0.0..viewport.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn viewport() -> Viewport {
        Viewport {
            width: 800.0,
            height: 600.0,
        }
    }

    #[test]
    fn test_descriptors() {
        let tree = EntityKind::Tree.descriptor();
        assert!(tree.collidable);
        assert_eq!(tree.size, Vec2::new(32.0, 32.0));
        let rock = EntityKind::Rock.descriptor();
        assert!(!rock.collidable);
        assert_eq!(rock.region, SpriteRegion::new(32.0, 32.0));

        for kind in EntityKind::ALL {
            assert_eq!(EntityKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(EntityKind::from_name("Tree"), Some(EntityKind::Tree));
        assert_eq!(EntityKind::from_name("snowman"), None);
    }

    #[test]
    fn test_spawn_within_band() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(1);
        for _ in 0..500 {
            let e = Entity::spawn(EntityKind::Tree, &vp, &mut rng);
            assert!(e.pos.x >= -vp.width && e.pos.x < 2.0 * vp.width);
            assert!(e.pos.y >= 0.0 && e.pos.y < vp.height);
        }
    }

    #[test]
    fn test_move_subtracts_player_speed() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut e = Entity {
            kind: EntityKind::Rock,
            pos: Vec2::new(100.0, 300.0),
        };
        assert_eq!(e.move_by(Vec2::new(1.5, 10.0), &vp, &mut rng), None);
        assert_eq!(e.pos, Vec2::new(98.5, 290.0));
    }

    #[test]
    fn test_recycle_off_top_reappears_at_bottom() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(3);
        let mut e = Entity {
            kind: EntityKind::Tree,
            pos: Vec2::new(100.0, -20.0),
        };
        // y + h = -40 + 32 < 0 after the move
        assert_eq!(e.move_by(Vec2::new(0.0, 20.0), &vp, &mut rng), Some(Recycle::Bottom));
        assert_eq!(e.pos.y, vp.height);
        assert!(e.pos.x >= -vp.width && e.pos.x < 2.0 * vp.width);
        assert!(e.pos.y + e.size().y >= 0.0);
    }

    #[test]
    fn test_recycle_far_left_reappears_right() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(4);
        let mut e = Entity {
            kind: EntityKind::Tree,
            pos: Vec2::new(-2.0 * vp.width - 1.0, 200.0),
        };
        assert_eq!(e.move_by(Vec2::ZERO, &vp, &mut rng), Some(Recycle::Right));
        assert_eq!(e.pos.x, vp.width + 32.0);
        assert!(e.pos.y >= 0.0 && e.pos.y < vp.height);
    }

    #[test]
    fn test_recycle_far_right_reappears_left() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(5);
        let mut e = Entity {
            kind: EntityKind::Rock,
            pos: Vec2::new(3.0 * vp.width + 0.5, 200.0),
        };
        assert_eq!(e.recycle(&vp, &mut rng), Some(Recycle::Left));
        assert_eq!(e.pos.x, -16.0);
    }

    #[test]
    fn test_vertical_exit_checked_first() {
        let vp = viewport();
        let mut rng = Pcg32::seed_from_u64(6);
        let mut e = Entity {
            kind: EntityKind::Tree,
            pos: Vec2::new(-5000.0, -100.0),
        };
        assert_eq!(e.recycle(&vp, &mut rng), Some(Recycle::Bottom));
        assert_eq!(e.pos.y, vp.height);
    }

    #[test]
    fn test_visibility() {
        let vp = viewport();
        let at = |x: f32, y: f32| Entity {
            kind: EntityKind::Tree,
            pos: Vec2::new(x, y),
        };
        assert!(at(0.0, 0.0).is_visible(&vp));
        assert!(at(-32.0, 10.0).is_visible(&vp));
        assert!(!at(-33.0, 10.0).is_visible(&vp));
        assert!(!at(801.0, 10.0).is_visible(&vp));
        assert!(!at(100.0, 601.0).is_visible(&vp));
        assert!(!at(100.0, -33.0).is_visible(&vp));
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn recycled_entities_land_in_band(
                seed in any::<u64>(),
                speeds in proptest::collection::vec((-60.0f32..60.0, 0.0f32..40.0), 1..300),
            ) {
                let vp = viewport();
                let mut rng = Pcg32::seed_from_u64(seed);
                let mut e = Entity::spawn(EntityKind::Tree, &vp, &mut rng);
                for (sx, sy) in speeds {
                    if e.move_by(Vec2::new(sx, sy), &vp, &mut rng) == Some(Recycle::Bottom) {
                        prop_assert!(e.pos.y + e.size().y >= 0.0);
                    }
                    prop_assert!(e.pos.y + e.size().y >= 0.0);
                    prop_assert!(e.pos.x >= -2.0 * vp.width - 60.0);
                    prop_assert!(e.pos.x <= 3.0 * vp.width + 60.0);
                }
            }
        }
    }
}
