use crate::collision::Collidable;
use crate::config::WorldConfig;
use crate::geometry::Rect;
use crate::physics::Body;

pub const PLAYER_WIDTH: f32 = 40.0;
pub const PLAYER_HEIGHT: f32 = 60.0;
/// Horizontal pixels per frame while a move key is held
pub const PLAYER_SPEED: f32 = 5.0;
/// Vertical velocity applied by a jump (negative is up)
pub const JUMP_STRENGTH: f32 = -15.0;
/// Upward nudge on jump so the body leaves the surface in the same frame
pub const JUMP_NUDGE: f32 = 2.0;
/// Frames between attacks (half a second at 60 FPS)
pub const ATTACK_COOLDOWN_FRAMES: i32 = 30;
pub const MAX_HEALTH: i32 = 100;

/// The player character.
///
/// The player is either grounded or airborne, and independently either idle
/// or attacking. Health is never clamped here: callers check `is_defeated()`
/// to end the session.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: Body,
    pub facing_right: bool,
    pub health: i32,
    pub attacking: bool,
    /// Frames remaining until the next attack is allowed
    pub attack_cooldown: i32,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Player {
            body: Body::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            facing_right: true,
            health: MAX_HEALTH,
            attacking: false,
            attack_cooldown: 0,
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    pub fn on_ground(&self) -> bool {
        self.body.on_ground
    }

    pub fn velocity_y(&self) -> f32 {
        self.body.velocity_y
    }

    /// Moves the player and re-applies the ground check.
    ///
    /// Facing follows the sign of `dx` (unchanged when `dx` is zero). The
    /// horizontal position is clamped to the world before vertical motion is
    /// applied. The ground check at the end overrides whatever a platform
    /// landing decided earlier in the frame.
    pub fn move_by(&mut self, dx: f32, dy: f32, world: &WorldConfig) {
        if dx > 0.0 {
            self.facing_right = true;
        } else if dx < 0.0 {
            self.facing_right = false;
        }

        self.body.rect.translate(dx, 0.0);
        self.body.clamp_to_world(world);

        self.body.rect.translate(0.0, dy);
        self.body.resolve_ground(world);
    }

    /// Starts a jump. Does nothing unless the player is on the ground.
    pub fn jump(&mut self) {
        if !self.body.on_ground {
            return;
        }

        self.body.velocity_y = JUMP_STRENGTH;
        self.body.on_ground = false;
        self.body.rect.translate(0.0, -JUMP_NUDGE);
    }

    /// Starts an attack. Does nothing while the cooldown is running.
    pub fn attack(&mut self) {
        if self.attack_cooldown <= 0 {
            self.attacking = true;
            self.attack_cooldown = ATTACK_COOLDOWN_FRAMES;
        }
    }

    /// Per-frame gravity, vertical motion and attack timer.
    pub fn update(&mut self, world: &WorldConfig) {
        self.body.apply_gravity();
        self.move_by(0.0, self.body.velocity_y, world);

        if self.attack_cooldown > 0 {
            self.attack_cooldown -= 1;
        }
        if self.attacking && self.attack_cooldown <= 0 {
            self.attacking = false;
        }
    }

    pub fn take_damage(&mut self, amount: i32) {
        self.health -= amount;
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health as a fraction of max, clamped to `[0, 1]` for drawing.
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / MAX_HEALTH as f32).clamp(0.0, 1.0)
    }
}

impl Collidable for Player {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn world() -> WorldConfig {
        WorldConfig::new(800.0, 600.0).unwrap()
    }

    fn grounded_player(world: &WorldConfig) -> Player {
        let mut player = Player::new(100.0, world.ground_y() - PLAYER_HEIGHT);
        player.body.on_ground = true;
        player
    }

    #[test]
    fn test_move_sets_facing() {
        let world = world();
        let mut player = grounded_player(&world);

        player.move_by(-5.0, 0.0, &world);
        assert!(!player.facing_right);

        player.move_by(0.0, 0.0, &world);
        assert!(!player.facing_right);

        player.move_by(5.0, 0.0, &world);
        assert!(player.facing_right);
    }

    #[test]
    fn test_move_clamps_to_world() {
        let world = world();
        let mut player = grounded_player(&world);

        player.move_by(-500.0, 0.0, &world);
        assert_eq!(player.rect().left(), 0.0);

        player.move_by(10_000.0, 0.0, &world);
        assert_eq!(player.rect().right(), world.world_width());
    }

    #[test]
    fn test_jump_from_ground() {
        let world = world();
        let mut player = grounded_player(&world);
        let y_before = player.rect().y;

        player.jump();

        assert_eq!(player.velocity_y(), JUMP_STRENGTH);
        assert!(!player.on_ground());
        assert!(player.rect().y <= y_before - JUMP_NUDGE);
    }

    #[test]
    fn test_jump_in_air_is_noop() {
        let mut player = Player::new(100.0, 100.0);
        player.body.velocity_y = 3.0;
        let before = player.clone();

        player.jump();

        assert_eq!(player, before);
    }

    #[test]
    fn test_attack_respects_cooldown() {
        let world = world();
        let mut player = grounded_player(&world);

        player.attack();
        assert!(player.attacking);
        assert_eq!(player.attack_cooldown, ATTACK_COOLDOWN_FRAMES);

        player.update(&world);
        player.attack();
        assert_eq!(player.attack_cooldown, ATTACK_COOLDOWN_FRAMES - 1);
    }

    #[test]
    fn test_attack_ends_when_cooldown_expires() {
        let world = world();
        let mut player = grounded_player(&world);
        player.attack();

        for _ in 0..ATTACK_COOLDOWN_FRAMES - 1 {
            player.update(&world);
            assert!(player.attacking);
        }

        player.update(&world);
        assert!(!player.attacking);
        assert_eq!(player.attack_cooldown, 0);

        player.attack();
        assert!(player.attacking);
    }

    #[test]
    fn test_update_keeps_grounded_player_on_ground() {
        let world = world();
        let mut player = grounded_player(&world);

        player.update(&world);

        assert!(player.on_ground());
        assert_eq!(player.rect().bottom(), world.ground_y());
        assert_eq!(player.velocity_y(), 0.0);
    }

    #[test]
    fn test_falling_player_speed_capped() {
        let world = world();
        let mut player = Player::new(100.0, -2000.0);

        for _ in 0..60 {
            player.update(&world);
            assert!(player.velocity_y() <= crate::physics::MAX_FALL_SPEED);
        }
    }

    #[test]
    fn test_health_fraction_clamped() {
        let mut player = Player::new(0.0, 0.0);
        assert_eq!(player.health_fraction(), 1.0);

        player.take_damage(150);
        assert_eq!(player.health, -50);
        assert!(player.is_defeated());
        assert_eq!(player.health_fraction(), 0.0);
    }
}
