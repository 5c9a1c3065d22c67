use crate::config::WorldConfig;

/// Horizontal scroll offset that keeps the player about a third of the way
/// into the viewport.
///
/// Pure function of the current player x: no smoothing, never negative.
pub fn camera_offset(player_x: f32, world: &WorldConfig) -> f32 {
    (player_x - world.viewport_width / 3.0).max(0.0)
}
