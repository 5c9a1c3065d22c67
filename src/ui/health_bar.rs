//! Health bar component for displaying entity health
//!
//! A flat bar centered above an entity whose width shrinks with health. The
//! fraction is clamped before drawing, since entity health itself may drop
//! below zero and must never produce a negative-width rectangle.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for health bar appearance
///
/// # Example
///
/// ```rust,ignore
/// // Enemy health bar: smaller and closer to the body
/// let enemy_style = HealthBarStyle {
///     width: 30,
///     height: 4,
///     offset_y: -8,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct HealthBarStyle {
    /// Bar width in pixels at full health
    pub width: u32,

    /// Bar height in pixels
    pub height: u32,

    /// Vertical offset from entity top (negative = above entity)
    pub offset_y: i32,

    /// Fill color
    pub health_color: Color,
}

impl Default for HealthBarStyle {
    fn default() -> Self {
        HealthBarStyle {
            width: 40,
            height: 5,
            offset_y: -10,
            health_color: Color::RGB(255, 0, 0),
        }
    }
}

/// A health bar component that renders above entities
pub struct HealthBar {
    style: HealthBarStyle,
}

impl HealthBar {
    /// Creates a new health bar with the player style (40x5, 10 px above)
    pub fn new() -> Self {
        HealthBar {
            style: HealthBarStyle::default(),
        }
    }

    /// Creates a health bar with custom styling
    pub fn with_style(style: HealthBarStyle) -> Self {
        HealthBar { style }
    }

    /// Screen rectangle of the filled part, or `None` when there is nothing
    /// to draw.
    ///
    /// `entity` is the entity's screen rectangle (already camera adjusted).
    pub fn fill_rect(&self, entity: Rect, health_fraction: f32) -> Option<Rect> {
        let fill_width = (self.style.width as f32 * health_fraction.clamp(0.0, 1.0)) as u32;
        if fill_width == 0 {
            return None;
        }

        let bar_x = entity.center().x() - self.style.width as i32 / 2;
        let bar_y = entity.y() + self.style.offset_y;

        Some(Rect::new(bar_x, bar_y, fill_width, self.style.height))
    }

    /// Renders the health bar above an entity
    ///
    /// # Returns
    ///
    /// - `Ok(())` on success
    /// - `Err(String)` if SDL2 rendering fails
    pub fn render(
        &self,
        canvas: &mut Canvas<Window>,
        entity: Rect,
        health_fraction: f32,
    ) -> Result<(), String> {
        if let Some(fill) = self.fill_rect(entity, health_fraction) {
            canvas.set_draw_color(self.style.health_color);
            canvas.fill_rect(fill)?;
        }

        Ok(())
    }

    #[allow(dead_code)] // Inspected by tests
    pub fn style(&self) -> &HealthBarStyle {
        &self.style
    }
}

impl Default for HealthBar {
    fn default() -> Self {
        Self::new()
    }
}
