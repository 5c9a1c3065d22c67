//! Patrolling enemies
//!
//! Every enemy belongs to one of three kinds. The kind is fixed at spawn and
//! resolves to a constant stats table, so no code outside this module needs
//! to branch on it.

use crate::collision::{Collidable, LandingRule, Platform, resolve_platform_landing};
use crate::config::WorldConfig;
use crate::geometry::Rect;
use crate::physics::Body;
use serde::{Deserialize, Serialize};

pub const ENEMY_WIDTH: f32 = 30.0;
pub const ENEMY_HEIGHT: f32 = 50.0;

/// The closed set of enemy kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnemyKind {
    Normal,
    Fast,
    Strong,
}

/// Constant per-kind tuning values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyStats {
    /// Body color as RGB
    pub color: (u8, u8, u8),
    /// Horizontal pixels per frame
    pub speed: f32,
    pub max_health: i32,
    /// Damage dealt to the player per frame of contact
    pub contact_damage: i32,
    /// Health lost per attack hit
    pub damage_taken: i32,
    /// Score awarded when defeated
    pub score: u32,
}

const NORMAL_STATS: EnemyStats = EnemyStats {
    color: (220, 20, 60),
    speed: 2.0,
    max_health: 50,
    contact_damage: 1,
    damage_taken: 25,
    score: 100,
};

const FAST_STATS: EnemyStats = EnemyStats {
    color: (255, 165, 0),
    speed: 4.0,
    max_health: 30,
    contact_damage: 2,
    damage_taken: 30,
    score: 150,
};

const STRONG_STATS: EnemyStats = EnemyStats {
    color: (128, 0, 128),
    speed: 1.5,
    max_health: 100,
    contact_damage: 3,
    damage_taken: 15,
    score: 200,
};

impl EnemyKind {
    pub const fn stats(self) -> &'static EnemyStats {
        match self {
            EnemyKind::Normal => &NORMAL_STATS,
            EnemyKind::Fast => &FAST_STATS,
            EnemyKind::Strong => &STRONG_STATS,
        }
    }
}

/// Horizontal patrol direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolDirection {
    Left,
    Right,
}

impl PatrolDirection {
    pub fn sign(self) -> f32 {
        match self {
            PatrolDirection::Left => -1.0,
            PatrolDirection::Right => 1.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: Body,
    kind: EnemyKind,
    pub direction: PatrolDirection,
    /// Patrol anchor, the spawn x coordinate
    pub start_x: f32,
    pub patrol_distance: f32,
    pub health: i32,
}

impl Enemy {
    pub fn new(x: f32, y: f32, kind: EnemyKind, patrol_distance: f32) -> Self {
        Enemy {
            body: Body::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT),
            kind,
            direction: PatrolDirection::Right,
            start_x: x,
            patrol_distance,
            health: kind.stats().max_health,
        }
    }

    pub fn kind(&self) -> EnemyKind {
        self.kind
    }

    pub fn stats(&self) -> &'static EnemyStats {
        self.kind.stats()
    }

    pub fn rect(&self) -> &Rect {
        &self.body.rect
    }

    /// Patrol step, then gravity and landing.
    ///
    /// Both patrol bounds are checked every frame, right bound first.
    pub fn update(&mut self, platforms: &[Platform], world: &WorldConfig) {
        self.body
            .rect
            .translate(self.stats().speed * self.direction.sign(), 0.0);

        if self.body.rect.x > self.start_x + self.patrol_distance {
            self.direction = PatrolDirection::Left;
        }
        if self.body.rect.x < self.start_x - self.patrol_distance {
            self.direction = PatrolDirection::Right;
        }
        self.body.clamp_to_world(world);

        self.body.apply_gravity();
        self.body.rect.translate(0.0, self.body.velocity_y);

        if !self.body.resolve_ground(world) {
            resolve_platform_landing(&mut self.body, platforms, LandingRule::ENEMY);
        }
    }

    /// Applies one attack hit. Returns true if this hit defeated the enemy.
    pub fn take_hit(&mut self) -> bool {
        self.health -= self.stats().damage_taken;
        self.is_defeated()
    }

    pub fn is_defeated(&self) -> bool {
        self.health <= 0
    }

    /// Health as a fraction of the kind's max, clamped to `[0, 1]` for drawing.
    pub fn health_fraction(&self) -> f32 {
        (self.health as f32 / self.stats().max_health as f32).clamp(0.0, 1.0)
    }
}

impl Collidable for Enemy {
    fn get_bounds(&self) -> Rect {
        self.body.rect
    }
}
