//! King of Persia - a side-scrolling action platformer
//!
//! This crate is the headless simulation core: physics, platform collision,
//! enemy patrols, melee combat and the camera. It has no windowing or
//! rendering dependency; the `king_of_persia` binary drives it with SDL2.
//!
//! # Example
//!
//! ```rust
//! use king_of_persia::{FrameInput, Game, WorldConfig};
//!
//! let world = WorldConfig::new(1280.0, 720.0).unwrap();
//! let mut game = Game::new(world).unwrap();
//!
//! while game.running() && game.frame() < 60 {
//!     game.update(&FrameInput::idle());
//! }
//! println!("Score: {}", game.score());
//! ```

pub mod camera;
pub mod collision;
pub mod combat;
pub mod config;
pub mod enemy;
pub mod error;
pub mod game;
pub mod geometry;
pub mod input;
pub mod physics;
pub mod player;

pub use config::{LevelLayout, WorldConfig};
pub use enemy::{Enemy, EnemyKind};
pub use error::{ConfigError, GameError};
pub use game::{EndReason, Game, GameWorld, SessionState};
pub use geometry::Rect;
pub use input::{FrameInput, GameAction, HeldActions};
pub use player::Player;
