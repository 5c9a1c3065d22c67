/// Collision detection for King of Persia
///
/// This module provides AABB (Axis-Aligned Bounding Box) overlap tests between
/// dynamic entities, and the landing rule that lets a falling body come to rest
/// on top of a static platform.
///
/// # Architecture
///
/// - `Collidable` trait: implemented by dynamic entities (player, enemies, hitboxes)
/// - `Platform`: static, immutable rectangle the world is built from
/// - `LandingRule`: tolerance band plus match policy for platform landings
///
/// # Landing asymmetry
///
/// Enemies and the player land on platforms with different rules. Enemies use a
/// 10 px tolerance band and stop at the first qualifying platform in list
/// order. The player uses a 15 px band and keeps the last qualifying platform.
/// Both are evaluated against the body's state at the start of the pass, so
/// the chosen platform does not depend on snapping side effects.
use crate::geometry::Rect;
use crate::physics::Body;

/// Landing tolerance band below a platform top for enemies.
pub const ENEMY_LANDING_TOLERANCE: f32 = 10.0;

/// Landing tolerance band below a platform top for the player.
pub const PLAYER_LANDING_TOLERANCE: f32 = 15.0;

/// Trait for anything that has a world-space bounding box.
///
/// # Example
///
/// ```rust
/// use king_of_persia::collision::Collidable;
/// use king_of_persia::geometry::Rect;
///
/// struct Crate { bounds: Rect }
///
/// impl Collidable for Crate {
///     fn get_bounds(&self) -> Rect {
///         self.bounds
///     }
/// }
/// ```
pub trait Collidable {
    /// Returns the axis-aligned bounding box for this entity.
    fn get_bounds(&self) -> Rect;
}

impl Collidable for Rect {
    fn get_bounds(&self) -> Rect {
        *self
    }
}

/// Checks if two axis-aligned bounding boxes intersect.
///
/// Touching edges do not count as an intersection.
pub fn aabb_intersect(a: &Rect, b: &Rect) -> bool {
    a.intersects(b)
}

/// Returns the indices of every entity in `entities` that overlaps `entity`.
///
/// Indices come back in list order.
pub fn check_collisions_with_collection<T: Collidable>(
    entity: &impl Collidable,
    entities: &[T],
) -> Vec<usize> {
    let entity_bounds = entity.get_bounds();

    entities
        .iter()
        .enumerate()
        .filter(|(_, other)| aabb_intersect(&entity_bounds, &other.get_bounds()))
        .map(|(index, _)| index)
        .collect()
}

/// A static platform. Never moves and is never destroyed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Platform {
    rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Platform {
            rect: Rect::new(x, y, width, height),
        }
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    pub fn top(&self) -> f32 {
        self.rect.top()
    }
}

/// Which qualifying platform wins when several match in one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPolicy {
    /// Stop at the first qualifying platform in list order
    First,
    /// Keep scanning and use the last qualifying platform
    Last,
}

/// Parameters for landing a falling body on platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LandingRule {
    pub tolerance: f32,
    pub policy: MatchPolicy,
}

impl LandingRule {
    pub const ENEMY: LandingRule = LandingRule {
        tolerance: ENEMY_LANDING_TOLERANCE,
        policy: MatchPolicy::First,
    };

    pub const PLAYER: LandingRule = LandingRule {
        tolerance: PLAYER_LANDING_TOLERANCE,
        policy: MatchPolicy::Last,
    };

    /// True when `body` would land on `platform` this frame.
    ///
    /// The body must be falling, its bottom must lie within
    /// `[top, top + tolerance]`, and it must overlap the platform horizontally.
    pub fn qualifies(&self, body: &Body, platform: &Platform) -> bool {
        let bottom = body.rect.bottom();
        let top = platform.top();

        body.is_falling()
            && bottom >= top
            && bottom <= top + self.tolerance
            && body.rect.overlaps_horizontally(platform.rect())
    }

    /// Finds the platform `body` lands on, if any.
    pub fn find_landing(&self, body: &Body, platforms: &[Platform]) -> Option<usize> {
        let mut candidates = platforms
            .iter()
            .enumerate()
            .filter(|(_, platform)| self.qualifies(body, platform))
            .map(|(index, _)| index);

        match self.policy {
            MatchPolicy::First => candidates.next(),
            MatchPolicy::Last => candidates.last(),
        }
    }
}

/// Lands `body` on a platform if one qualifies.
///
/// On a hit the body's bottom is snapped to the platform top, vertical
/// velocity is zeroed and `on_ground` is set. On a miss `on_ground` is
/// cleared. Returns the index of the platform landed on.
pub fn resolve_platform_landing(
    body: &mut Body,
    platforms: &[Platform],
    rule: LandingRule,
) -> Option<usize> {
    match rule.find_landing(body, platforms) {
        Some(index) => {
            body.land_at(platforms[index].top());
            Some(index)
        }
        None => {
            body.on_ground = false;
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn falling_body(x: f32, bottom: f32) -> Body {
        let mut body = Body::new(x, bottom - 60.0, 40.0, 60.0);
        body.velocity_y = 5.0;
        body
    }

    #[test]
    fn test_check_collisions_with_collection_returns_indices() {
        let area = Rect::new(0.0, 0.0, 50.0, 50.0);
        let others = vec![
            Rect::new(25.0, 25.0, 10.0, 10.0),
            Rect::new(100.0, 100.0, 10.0, 10.0),
            Rect::new(49.0, 0.0, 10.0, 10.0),
        ];

        assert_eq!(check_collisions_with_collection(&area, &others), vec![0, 2]);
    }

    #[test]
    fn test_lands_inside_tolerance_band() {
        let platforms = vec![Platform::new(0.0, 400.0, 200.0, 20.0)];
        let mut body = falling_body(50.0, 408.0);

        let landed = resolve_platform_landing(&mut body, &platforms, LandingRule::ENEMY);

        assert_eq!(landed, Some(0));
        assert_eq!(body.rect.bottom(), 400.0);
        assert_eq!(body.velocity_y, 0.0);
        assert!(body.on_ground);
    }

    #[test]
    fn test_tolerance_differs_between_player_and_enemy() {
        let platforms = vec![Platform::new(0.0, 400.0, 200.0, 20.0)];
        let body = falling_body(50.0, 412.0);

        assert!(!LandingRule::ENEMY.qualifies(&body, &platforms[0]));
        assert!(LandingRule::PLAYER.qualifies(&body, &platforms[0]));
    }

    #[test]
    fn test_rising_body_never_lands() {
        let platforms = vec![Platform::new(0.0, 400.0, 200.0, 20.0)];
        let mut body = falling_body(50.0, 405.0);
        body.velocity_y = -3.0;
        body.on_ground = true;

        assert_eq!(
            resolve_platform_landing(&mut body, &platforms, LandingRule::PLAYER),
            None
        );
        assert!(!body.on_ground);
        assert_eq!(body.rect.bottom(), 405.0);
    }

    #[test]
    fn test_touching_platform_edge_is_not_overlap() {
        let platforms = vec![Platform::new(100.0, 400.0, 200.0, 20.0)];
        // Right edge of the body touches the left edge of the platform
        let body = falling_body(60.0, 405.0);

        assert!(!LandingRule::PLAYER.qualifies(&body, &platforms[0]));
    }

    #[test]
    fn test_above_platform_top_does_not_land() {
        let platforms = vec![Platform::new(0.0, 400.0, 200.0, 20.0)];
        let body = falling_body(50.0, 399.5);

        assert_eq!(LandingRule::PLAYER.find_landing(&body, &platforms), None);
    }

    #[test]
    fn test_enemy_takes_first_match_player_takes_last() {
        // Two stacked platforms whose tops both fall inside the band
        let platforms = vec![
            Platform::new(0.0, 400.0, 200.0, 20.0),
            Platform::new(0.0, 404.0, 200.0, 20.0),
        ];

        let mut enemy = falling_body(50.0, 408.0);
        let mut player = falling_body(50.0, 408.0);

        assert_eq!(
            resolve_platform_landing(&mut enemy, &platforms, LandingRule::ENEMY),
            Some(0)
        );
        assert_eq!(
            resolve_platform_landing(&mut player, &platforms, LandingRule::PLAYER),
            Some(1)
        );
        assert_eq!(enemy.rect.bottom(), 400.0);
        assert_eq!(player.rect.bottom(), 404.0);
    }
}
