//! Entity physics shared by the player and enemies
//!
//! Every moving thing in the world is a `Body`: a rectangle plus a vertical
//! velocity and an on-ground flag. Horizontal motion is decided by the owner
//! (player input or enemy patrol), vertical motion comes from gravity.
//!
//! All constants are per frame at 60 FPS.

use crate::config::WorldConfig;
use crate::geometry::Rect;

/// Downward acceleration added to vertical velocity each frame.
pub const GRAVITY: f32 = 0.5;

/// Maximum fall speed. Bounds how far a body can sink into a platform in a
/// single frame.
pub const MAX_FALL_SPEED: f32 = 15.0;

/// A moving axis-aligned body subject to gravity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub velocity_y: f32,
    pub on_ground: bool,
}

impl Body {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Body {
            rect: Rect::new(x, y, width, height),
            velocity_y: 0.0,
            on_ground: false,
        }
    }

    /// Accelerates downward and caps the result at `MAX_FALL_SPEED`.
    pub fn apply_gravity(&mut self) {
        self.velocity_y = (self.velocity_y + GRAVITY).min(MAX_FALL_SPEED);
    }

    /// Keeps the horizontal extent inside `[0, world_width]`.
    pub fn clamp_to_world(&mut self, world: &WorldConfig) {
        if self.rect.left() < 0.0 {
            self.rect.set_left(0.0);
        }
        if self.rect.right() > world.world_width() {
            self.rect.set_right(world.world_width());
        }
    }

    /// Snaps the body onto the ground line if it reached or passed it.
    ///
    /// Sets `on_ground` either way and returns whether the ground caught the
    /// body.
    pub fn resolve_ground(&mut self, world: &WorldConfig) -> bool {
        if self.rect.bottom() >= world.ground_y() {
            self.land_at(world.ground_y());
            true
        } else {
            self.on_ground = false;
            false
        }
    }

    /// Rests the body's bottom edge at `surface_y` and stops vertical motion.
    pub fn land_at(&mut self, surface_y: f32) {
        self.rect.set_bottom(surface_y);
        self.velocity_y = 0.0;
        self.on_ground = true;
    }

    /// True when moving downward.
    pub fn is_falling(&self) -> bool {
        self.velocity_y > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldConfig {
        WorldConfig::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_gravity_accumulates() {
        let mut body = Body::new(0.0, 0.0, 10.0, 10.0);
        body.apply_gravity();
        body.apply_gravity();
        assert_eq!(body.velocity_y, 1.0);
    }

    #[test]
    fn test_fall_speed_is_capped() {
        let mut body = Body::new(0.0, 0.0, 10.0, 10.0);
        for _ in 0..100 {
            body.apply_gravity();
            assert!(body.velocity_y <= MAX_FALL_SPEED);
        }
        assert_eq!(body.velocity_y, MAX_FALL_SPEED);
    }

    #[test]
    fn test_jump_velocity_decays_through_gravity() {
        let mut body = Body::new(0.0, 0.0, 10.0, 10.0);
        body.velocity_y = -15.0;
        body.apply_gravity();
        assert_eq!(body.velocity_y, -14.5);
    }

    #[test]
    fn test_clamp_to_world_left_and_right() {
        let world = world();

        let mut body = Body::new(-20.0, 0.0, 40.0, 60.0);
        body.clamp_to_world(&world);
        assert_eq!(body.rect.left(), 0.0);

        let mut body = Body::new(2390.0, 0.0, 40.0, 60.0);
        body.clamp_to_world(&world);
        assert_eq!(body.rect.right(), 2400.0);
    }

    #[test]
    fn test_ground_snaps_and_grounds() {
        let world = world();
        let mut body = Body::new(100.0, 500.0, 40.0, 60.0);
        body.velocity_y = 12.0;

        assert!(body.resolve_ground(&world));
        assert_eq!(body.rect.bottom(), 550.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn test_airborne_body_clears_on_ground() {
        let world = world();
        let mut body = Body::new(100.0, 100.0, 40.0, 60.0);
        body.on_ground = true;
        body.velocity_y = 3.0;

        assert!(!body.resolve_ground(&world));
        assert!(!body.on_ground);
        assert_eq!(body.velocity_y, 3.0);
    }

    #[test]
    fn test_exactly_touching_ground_counts() {
        let world = world();
        let mut body = Body::new(100.0, 490.0, 40.0, 60.0);
        assert!(body.resolve_ground(&world));
        assert!(body.on_ground);
    }
}
