//! Pointer steering
//!
//! The skier heads toward the pointer, but only in five fixed directions:
//! straight down, turning left/right, and hard left/right. Pointing at or
//! above the skier's feet, or further sideways than the hardest turn,
//! brings the skier to a stop.

use glam::Vec2;

use crate::consts::{MAX_BANK, STRAIGHT_BAND, TURN_BAND};

/// Every heading steering can produce
pub const HEADINGS: [f32; 5] = [0.0, TURN_BAND, -TURN_BAND, MAX_BANK, -MAX_BANK];

/// Outcome of a steering update
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Steering {
    /// Stop; keep the previous heading
    Stop,
    /// Move with this banded heading (radians, 0 = straight down)
    Heading(f32),
}

/// Snap a raw angle magnitude onto the heading bands.
///
/// Returns `None` past the hardest turn.
pub fn band(angle: f32) -> Option<f32> {
    let magnitude = angle.abs();
    if magnitude > MAX_BANK {
        None
    } else if magnitude > TURN_BAND {
        Some(MAX_BANK)
    } else if magnitude > STRAIGHT_BAND {
        Some(TURN_BAND)
    } else {
        Some(0.0)
    }
}

/// Work out steering from the skier's hit point and the pointer position
/// (both in canvas pixels, y down).
pub fn steer(hit_point: Vec2, pointer: Vec2) -> Steering {
    let dist_x = hit_point.x - pointer.x;
    let dist_y = hit_point.y - pointer.y;

    // Pointer level with or above the skier's feet
    if dist_y >= 0.0 {
        return Steering::Stop;
    }

    let Some(magnitude) = band((dist_x / dist_y).atan()) else {
        return Steering::Stop;
    };

    // Pointer left of the skier turns left
    let sign = if dist_x > 0.0 { -1.0 } else { 1.0 };
    Steering::Heading(magnitude * sign)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pointer_straight_below() {
        // Screen y grows downward, so "below" on screen is a larger y
        let steering = steer(Vec2::new(100.0, 100.0), Vec2::new(100.0, 150.0));
        assert_eq!(steering, Steering::Heading(0.0));
    }

    #[test]
    fn test_pointer_level_or_above_stops() {
        let hit = Vec2::new(100.0, 100.0);
        assert_eq!(steer(hit, Vec2::new(100.0, 100.0)), Steering::Stop);
        assert_eq!(steer(hit, Vec2::new(100.0, 50.0)), Steering::Stop);
        assert_eq!(steer(hit, Vec2::new(-400.0, 20.0)), Steering::Stop);
        assert_eq!(steer(hit, Vec2::new(900.0, 99.0)), Steering::Stop);
    }

    #[test]
    fn test_bands() {
        assert_eq!(band(0.0), Some(0.0));
        assert_eq!(band(0.29), Some(0.0));
        assert_eq!(band(0.3), Some(0.0));
        assert_eq!(band(0.31), Some(TURN_BAND));
        assert_eq!(band(0.8), Some(TURN_BAND));
        assert_eq!(band(-0.81), Some(MAX_BANK));
        assert_eq!(band(1.1), Some(MAX_BANK));
        assert_eq!(band(1.2), None);
    }

    #[test]
    fn test_turn_direction_follows_pointer() {
        let hit = Vec2::new(100.0, 100.0);
        // 45 degrees down-left: |atan(1)| ~ 0.785 -> turn band, negative
        assert_eq!(steer(hit, Vec2::new(50.0, 150.0)), Steering::Heading(-TURN_BAND));
        // 45 degrees down-right
        assert_eq!(steer(hit, Vec2::new(150.0, 150.0)), Steering::Heading(TURN_BAND));
        // ~56 degrees down-right -> hard turn
        assert_eq!(steer(hit, Vec2::new(160.0, 140.0)), Steering::Heading(MAX_BANK));
    }

    #[test]
    fn test_beyond_max_bank_stops() {
        // Nearly horizontal pointer: atan(200 / 10) ~ 1.52
        let steering = steer(Vec2::new(100.0, 100.0), Vec2::new(300.0, 110.0));
        assert_eq!(steering, Steering::Stop);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn heading_always_banded(
                hx in -500.0f32..1500.0,
                hy in -500.0f32..1500.0,
                px in -500.0f32..1500.0,
                py in -500.0f32..1500.0,
            ) {
                if let Steering::Heading(h) = steer(Vec2::new(hx, hy), Vec2::new(px, py)) {
                    prop_assert!(HEADINGS.contains(&h), "heading {} not banded", h);
                }
            }

            #[test]
            fn pointer_at_or_above_always_stops(
                hx in -500.0f32..1500.0,
                hy in -500.0f32..1500.0,
                px in -500.0f32..1500.0,
                above in 0.0f32..800.0,
            ) {
                let steering = steer(Vec2::new(hx, hy), Vec2::new(px, hy - above));
                prop_assert_eq!(steering, Steering::Stop);
            }
        }
    }
}
