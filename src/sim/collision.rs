//! Collision detection
//!
//! Both sides collide through a single hit point at the bottom center of
//! their sprite. The obstacle's half-width is the hit radius.

use glam::Vec2;

use super::entity::Entity;
use super::player::Player;

/// Whether `point` lies strictly inside the circle
#[inline]
pub fn circle_contains(center: Vec2, radius: f32, point: Vec2) -> bool {
    center.distance(point) < radius
}

/// Whether an obstacle's hit circle covers the player's hit point.
///
/// Decorative obstacles never hit.
pub fn entity_hits(entity: &Entity, player_hit: Vec2) -> bool {
    entity.collidable() && circle_contains(entity.hit_point(), entity.size().x / 2.0, player_hit)
}

/// Whether this obstacle should crash the player right now
pub fn check_collision(player: &Player, entity: &Entity) -> bool {
    player.is_vulnerable() && entity_hits(entity, player.hit_point())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::PLAYER_START_Y;
    use crate::settings::Tuning;
    use crate::sim::EntityKind;

    fn player() -> Player {
        Player::new(Vec2::new(400.0, PLAYER_START_Y), &Tuning::default())
    }

    /// Place an obstacle so its hit point is `offset` from the player's
    fn entity_near(kind: EntityKind, player: &Player, offset: Vec2) -> Entity {
        let size = kind.descriptor().size;
        let hit = player.hit_point() + offset;
        Entity {
            kind,
            pos: Vec2::new(hit.x - size.x / 2.0, hit.y - size.y),
        }
    }

    #[test]
    fn test_circle_contains_is_strict() {
        assert!(circle_contains(Vec2::ZERO, 16.0, Vec2::new(15.9, 0.0)));
        assert!(!circle_contains(Vec2::ZERO, 16.0, Vec2::new(16.0, 0.0)));
        assert!(!circle_contains(Vec2::ZERO, 16.0, Vec2::new(12.0, 12.0)));
    }

    #[test]
    fn test_tree_hits_within_half_width() {
        let p = player();
        let tree = entity_near(EntityKind::Tree, &p, Vec2::new(10.0, 5.0));
        assert!(check_collision(&p, &tree));
        let far = entity_near(EntityKind::Tree, &p, Vec2::new(16.0, 0.0));
        assert!(!check_collision(&p, &far));
    }

    #[test]
    fn test_rock_never_hits() {
        let p = player();
        let rock = entity_near(EntityKind::Rock, &p, Vec2::ZERO);
        assert!(!check_collision(&p, &rock));
    }

    #[test]
    fn test_suppressed_while_crashed_or_invincible() {
        let tuning = Tuning::default();
        let mut p = player();
        let tree = entity_near(EntityKind::Tree, &p, Vec2::ZERO);

        p.crash(&tuning);
        assert!(!check_collision(&p, &tree));

        p.crashed = false;
        assert!(p.invincibility_ticks > 0);
        assert!(!check_collision(&p, &tree));

        p.invincibility_ticks = 0;
        assert!(check_collision(&p, &tree));
    }
}
