// GameWorld struct and level construction
//
// GameWorld owns every entity in a session: the player, the live enemies, the
// static platforms and the decorative arches. It is built once from a
// LevelLayout scaled to the current WorldConfig.

use crate::collision::Platform;
use crate::config::{LevelLayout, WorldConfig};
use crate::enemy::Enemy;
use crate::geometry::Rect;
use crate::player::Player;

/// GameWorld encapsulates all game entities and world state
#[derive(Debug, Clone)]
pub struct GameWorld {
    pub player: Player,
    pub enemies: Vec<Enemy>,
    pub platforms: Vec<Platform>,
    /// Background arches, drawn only
    pub decorations: Vec<Rect>,
}

impl GameWorld {
    /// Builds a world from a layout in viewport-relative units.
    pub fn from_layout(world: &WorldConfig, layout: &LevelLayout) -> Self {
        let w = world.viewport_width;
        let h = world.viewport_height;

        let player = Player::new(layout.spawn.x, h - layout.spawn.rise);

        let platforms = layout
            .platforms
            .iter()
            .map(|spec| Platform::new(spec.x * w, h - spec.rise, spec.width * w, spec.height))
            .collect();

        let enemies = layout
            .enemies
            .iter()
            .map(|spawn| Enemy::new(spawn.x * w, h - spawn.rise, spawn.kind, spawn.patrol * w))
            .collect();

        let row = &layout.decorations;
        let decorations = (0..row.count)
            .map(|i| {
                let x = i as f32 * row.spacing * w;
                Rect::new(x, h - row.rise, row.width * w, row.height)
            })
            .collect();

        GameWorld {
            player,
            enemies,
            platforms,
            decorations,
        }
    }

    /// A world with just a player and a ground platform. Handy for scripted
    /// scenarios.
    pub fn empty(world: &WorldConfig, player: Player) -> Self {
        GameWorld {
            player,
            enemies: Vec::new(),
            platforms: vec![Platform::new(
                0.0,
                world.ground_y(),
                world.world_width(),
                world.viewport_height - world.ground_y(),
            )],
            decorations: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enemy::EnemyKind;

    #[test]
    fn test_palace_scales_to_viewport() {
        let world = WorldConfig::new(1000.0, 800.0).unwrap();
        let layout = LevelLayout::palace().unwrap();
        let game_world = GameWorld::from_layout(&world, &layout);

        assert_eq!(game_world.player.rect().x, 100.0);
        assert_eq!(game_world.player.rect().y, 650.0);

        // Ground spans the whole level
        let ground = game_world.platforms[0].rect();
        assert_eq!(*ground, Rect::new(0.0, 750.0, 3000.0, 50.0));

        let first_step = game_world.platforms[1].rect();
        assert_eq!(*first_step, Rect::new(250.0, 650.0, 150.0, 20.0));

        let first_enemy = &game_world.enemies[0];
        assert_eq!(first_enemy.kind(), EnemyKind::Normal);
        assert_eq!(first_enemy.rect().x, 400.0);
        assert_eq!(first_enemy.rect().y, 600.0);
        assert_eq!(first_enemy.patrol_distance, 100.0);

        assert_eq!(game_world.decorations.len(), 20);
        assert_eq!(
            game_world.decorations[3],
            Rect::new(300.0, 500.0, 80.0, 80.0)
        );
    }
}
