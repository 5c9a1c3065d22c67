// Game module - the per-frame simulation step
//
// This module contains:
// - world.rs: GameWorld struct and level construction
// - types.rs: SessionState and EndReason
//
// Game owns all session state exclusively for the duration of a frame and
// exposes a single update() entry point to the host loop.

pub mod types;
pub mod world;

pub use types::*;
pub use world::GameWorld;

use crate::camera::camera_offset;
use crate::collision::{LandingRule, Platform, resolve_platform_landing};
use crate::combat::{CombatReport, resolve_combat};
use crate::config::{LevelLayout, WorldConfig};
use crate::enemy::Enemy;
use crate::error::ConfigError;
use crate::geometry::Rect;
use crate::input::{FrameInput, GameAction};
use crate::player::Player;
use log::{debug, info};

/// A play session.
#[derive(Debug, Clone)]
pub struct Game {
    world: WorldConfig,
    state: GameWorld,
    score: u32,
    camera_offset: f32,
    session: SessionState,
    frame: u64,
    last_report: CombatReport,
}

impl Game {
    /// Starts a session on the built-in palace level.
    pub fn new(world: WorldConfig) -> Result<Self, ConfigError> {
        let layout = LevelLayout::palace()?;
        Ok(Self::with_layout(world, &layout))
    }

    pub fn with_layout(world: WorldConfig, layout: &LevelLayout) -> Self {
        Self::from_world(world, GameWorld::from_layout(&world, layout))
    }

    pub fn from_world(world: WorldConfig, state: GameWorld) -> Self {
        info!(
            "Session started: {} platforms, {} enemies, world {}x{}",
            state.platforms.len(),
            state.enemies.len(),
            world.world_width(),
            world.viewport_height
        );

        let camera_offset = camera_offset(state.player.rect().x, &world);
        Game {
            world,
            state,
            score: 0,
            camera_offset,
            session: SessionState::Running,
            frame: 0,
            last_report: CombatReport::default(),
        }
    }

    /// Advances the simulation by one frame.
    ///
    /// Order: discrete actions, held jump, player motion, enemy motion,
    /// combat, player platform landing, camera. Once the session has ended
    /// this is a no-op.
    pub fn update(&mut self, input: &FrameInput) -> SessionState {
        if !self.session.is_running() {
            return self.session;
        }

        for action in &input.pressed {
            match action {
                GameAction::Jump => self.state.player.jump(),
                GameAction::Attack => self.state.player.attack(),
                GameAction::Quit => {
                    info!("Quit requested. Final score: {}", self.score);
                    self.session = SessionState::Ended(EndReason::Quit);
                    return self.session;
                }
            }
        }

        if input.held.jump && self.state.player.on_ground() {
            self.state.player.jump();
        }

        let player = &mut self.state.player;
        player.move_by(input.held.horizontal_intent(), 0.0, &self.world);
        player.update(&self.world);

        for enemy in &mut self.state.enemies {
            enemy.update(&self.state.platforms, &self.world);
        }

        let report = resolve_combat(player, &mut self.state.enemies, &self.world);
        self.score += report.score_awarded;
        if !report.events.is_empty() {
            debug!(
                "Frame {}: {} defeated, {} damage taken, {:?}",
                self.frame,
                report.defeated_count(),
                report.damage_taken(),
                report.events
            );
        }
        self.last_report = report;

        // Player landing runs after combat so knockback is settled. The
        // ground line still wins when the player stands on it.
        let landed =
            resolve_platform_landing(&mut player.body, &self.state.platforms, LandingRule::PLAYER);
        if landed.is_none() {
            player.body.resolve_ground(&self.world);
        }

        self.camera_offset = camera_offset(player.rect().x, &self.world);
        self.frame += 1;

        if player.is_defeated() {
            info!("Game Over! Your score: {}", self.score);
            self.session = SessionState::Ended(EndReason::PlayerDefeated);
        }

        self.session
    }

    pub fn running(&self) -> bool {
        self.session.is_running()
    }

    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn camera_offset(&self) -> f32 {
        self.camera_offset
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &WorldConfig {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.state.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.state.enemies
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.state.platforms
    }

    pub fn decorations(&self) -> &[Rect] {
        &self.state.decorations
    }

    /// Combat events from the most recent frame.
    pub fn last_report(&self) -> &CombatReport {
        &self.last_report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyKind;
    use crate::input::HeldActions;
    use crate::player::PLAYER_HEIGHT;

    fn world() -> WorldConfig {
        WorldConfig::new(900.0, 600.0).unwrap()
    }

    fn grounded_game(x: f32) -> Game {
        let world = world();
        let player = Player::new(x, world.ground_y() - PLAYER_HEIGHT);
        Game::from_world(world, GameWorld::empty(&world, player))
    }

    #[test]
    fn test_palace_session_starts_running() {
        let game = Game::new(world()).unwrap();
        assert!(game.running());
        assert_eq!(game.score(), 0);
        assert_eq!(game.enemies().len(), 12);
        assert_eq!(game.platforms().len(), 13);
    }

    #[test]
    fn test_player_stays_grounded_on_ground_line() {
        let mut game = grounded_game(100.0);

        for _ in 0..10 {
            game.update(&FrameInput::idle());
            assert!(game.player().on_ground());
            assert_eq!(game.player().rect().bottom(), game.world().ground_y());
        }
    }

    #[test]
    fn test_held_jump_leaves_ground() {
        let mut game = grounded_game(100.0);
        game.update(&FrameInput::idle());
        let bottom = game.player().rect().bottom();

        let held = HeldActions {

            jump: true,

            ..Default::default()

        };
        game.update(&FrameInput::idle().with_held(held));

        assert!(!game.player().on_ground());
        assert!(game.player().rect().bottom() < bottom);
        assert!(game.player().velocity_y() < 0.0);
    }

    #[test]
    fn test_moving_right_scrolls_camera() {
        let mut game = grounded_game(280.0);
        let held = HeldActions {
            move_right: true,
            ..Default::default()
        };

        for _ in 0..10 {
            game.update(&FrameInput::idle().with_held(held));
        }

        assert_eq!(game.player().rect().x, 330.0);
        assert_eq!(game.camera_offset(), 30.0);
        assert!(game.player().facing_right);
    }

    #[test]
    fn test_quit_ends_session_without_simulating() {
        let mut game = grounded_game(100.0);
        let state = game.update(&FrameInput::idle().with_pressed(GameAction::Quit));

        assert_eq!(state, SessionState::Ended(EndReason::Quit));
        assert_eq!(game.frame(), 0);
        assert!(!game.running());

        // Further updates do nothing
        let held = HeldActions {
            move_right: true,
            ..Default::default()
        };
        game.update(&FrameInput::idle().with_held(held));
        assert_eq!(game.player().rect().x, 100.0);
    }

    #[test]
    fn test_attack_kills_adjacent_enemy_and_scores() {
        let world = world();
        let player = Player::new(100.0, world.ground_y() - PLAYER_HEIGHT);
        let mut state = GameWorld::empty(&world, player);
        let enemy = Enemy::new(145.0, world.ground_y() - 50.0, EnemyKind::Fast, 0.0);
        state.enemies.push(enemy);
        let mut game = Game::from_world(world, state);

        game.update(&FrameInput::idle().with_pressed(GameAction::Attack));

        assert!(game.enemies().is_empty());
        assert_eq!(game.score(), 150);
        assert_eq!(game.last_report().defeated_count(), 1);
    }
}
