//! Combat resolution between the player and enemies
//!
//! This module runs once per frame after all movement. It covers two cases:
//! - **Melee hits**: while the player is attacking, a small hitbox in front of
//!   them damages every enemy it overlaps, once per frame.
//! - **Contact damage**: while the player is not attacking, every overlapping
//!   enemy hurts the player and knocks them back. There is no invulnerability
//!   window, so damage repeats every frame the overlap lasts.
//!
//! Defeated enemies are removed after the scan (two-phase), so removal never
//! disturbs the enemies still being examined.

use crate::collision::{Collidable, aabb_intersect, check_collisions_with_collection};
use crate::config::WorldConfig;
use crate::enemy::{Enemy, EnemyKind};
use crate::geometry::Rect;
use crate::player::Player;
use log::debug;

pub const ATTACK_WIDTH: f32 = 30.0;
pub const ATTACK_HEIGHT: f32 = 10.0;
/// Horizontal push applied to the player on enemy contact
pub const KNOCKBACK: f32 = 5.0;

/// Something that happened during combat resolution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CombatEvent {
    /// An attack landed but the enemy survived
    EnemyHit {
        kind: EnemyKind,
        remaining_health: i32,
    },
    /// An attack defeated the enemy and awarded score
    EnemyDefeated { kind: EnemyKind, score: u32 },
    /// An enemy touched the player
    PlayerHit { kind: EnemyKind, damage: i32 },
}

/// Everything combat produced in one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CombatReport {
    pub events: Vec<CombatEvent>,
    pub score_awarded: u32,
}

impl CombatReport {
    pub fn defeated_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, CombatEvent::EnemyDefeated { .. }))
            .count()
    }

    pub fn damage_taken(&self) -> i32 {
        self.events
            .iter()
            .map(|event| match event {
                CombatEvent::PlayerHit { damage, .. } => *damage,
                _ => 0,
            })
            .sum()
    }
}

/// The player's melee hitbox.
///
/// A 30x10 box flush against the facing edge and vertically centered on the
/// player. Computed regardless of attack state; callers decide whether it is
/// active.
pub fn attack_hitbox(player: &Player) -> Rect {
    let bounds = player.rect();
    let x = if player.facing_right {
        bounds.right()
    } else {
        bounds.left() - ATTACK_WIDTH
    };

    Rect::new(
        x,
        bounds.center_y() - ATTACK_HEIGHT / 2.0,
        ATTACK_WIDTH,
        ATTACK_HEIGHT,
    )
}

/// Resolves one frame of combat.
///
/// Enemies are examined in list order. When the player is attacking only the
/// hitbox test runs, so an enemy overlapping the player is never a contact
/// source in the same frame.
pub fn resolve_combat(
    player: &mut Player,
    enemies: &mut Vec<Enemy>,
    world: &WorldConfig,
) -> CombatReport {
    if player.attacking {
        resolve_attack(player, enemies)
    } else {
        resolve_contact(player, enemies, world)
    }
}

fn resolve_attack(player: &Player, enemies: &mut Vec<Enemy>) -> CombatReport {
    let mut report = CombatReport::default();
    let hitbox = attack_hitbox(player);

    // Phase 1: apply hits
    for index in check_collisions_with_collection(&hitbox, enemies) {
        let enemy = &mut enemies[index];
        let kind = enemy.kind();

        if enemy.take_hit() {
            let score = kind.stats().score;
            debug!("{:?} enemy defeated, +{} score", kind, score);
            report.score_awarded += score;
            report.events.push(CombatEvent::EnemyDefeated { kind, score });
        } else {
            report.events.push(CombatEvent::EnemyHit {
                kind,
                remaining_health: enemy.health,
            });
        }
    }

    // Phase 2: drop the defeated. Anything at or below zero health was hit
    // this frame, earlier defeats were already removed.
    if report.score_awarded > 0 {
        enemies.retain(|enemy| !enemy.is_defeated());
    }

    report
}

fn resolve_contact(player: &mut Player, enemies: &[Enemy], world: &WorldConfig) -> CombatReport {
    let mut report = CombatReport::default();

    for enemy in enemies {
        let enemy_bounds = enemy.get_bounds();
        if !aabb_intersect(player.rect(), &enemy_bounds) {
            continue;
        }

        let damage = enemy.stats().contact_damage;
        player.take_damage(damage);

        let push = if player.rect().center_x() < enemy_bounds.center_x() {
            -KNOCKBACK
        } else {
            KNOCKBACK
        };
        player.body.rect.translate(push, 0.0);
        player.body.clamp_to_world(world);

        debug!(
            "{:?} enemy hit player for {} (health {})",
            enemy.kind(),
            damage,
            player.health
        );
        report.events.push(CombatEvent::PlayerHit {
            kind: enemy.kind(),
            damage,
        });
    }

    report
}
