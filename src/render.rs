/// Frame rendering for the SDL2 host
///
/// Draws one frame of a `Game` in camera space. Everything here is read-only
/// with respect to the simulation: the renderer receives the current camera
/// offset through the game and converts world rectangles to screen
/// rectangles at the last moment.
///
/// Draw order (back to front):
/// 1. Sky background
/// 2. Decorative arches that are on screen
/// 3. Platforms
/// 4. Enemies with direction eye and health bar
/// 5. Player with facing eye, attack flash and health bar
/// 6. Score and health text
use crate::text::draw_text;
use crate::ui::{HealthBar, HealthBarStyle};
use king_of_persia::combat::attack_hitbox;
use king_of_persia::enemy::{Enemy, PatrolDirection};
use king_of_persia::player::Player;
use king_of_persia::{Game, Rect as WorldRect};
use sdl2::pixels::Color;
use sdl2::rect::{Point, Rect};
use sdl2::render::Canvas;
use sdl2::video::Window;
use std::f32::consts::PI;

const SKY: Color = Color::RGB(135, 206, 235);
const TURQUOISE: Color = Color::RGB(64, 224, 208);
const SANDSTONE: Color = Color::RGB(194, 178, 128);
const GOLD: Color = Color::RGB(218, 165, 32);
const BLACK: Color = Color::RGB(0, 0, 0);
const WHITE: Color = Color::RGB(255, 255, 255);

const ARCH_THICKNESS: i32 = 3;
const ARCH_SEGMENTS: usize = 24;
const TEXT_SCALE: u32 = 3;

/// Converts a world rectangle to a screen rectangle.
fn to_screen(rect: &WorldRect, camera_offset: f32) -> Rect {
    let shifted = rect.offset_x(camera_offset);
    Rect::new(
        shifted.x.round() as i32,
        shifted.y.round() as i32,
        shifted.width.round().max(1.0) as u32,
        shifted.height.round().max(1.0) as u32,
    )
}

fn fill_circle(canvas: &mut Canvas<Window>, cx: i32, cy: i32, radius: i32) -> Result<(), String> {
    for dy in -radius..=radius {
        let half = ((radius * radius - dy * dy) as f32).sqrt() as i32;
        canvas.draw_line(
            Point::new(cx - half, cy + dy),
            Point::new(cx + half, cy + dy),
        )?;
    }
    Ok(())
}

/// Upper half of the ellipse inscribed in `bounds`, drawn as a polyline.
fn draw_arch(canvas: &mut Canvas<Window>, bounds: Rect) -> Result<(), String> {
    let cx = bounds.x() as f32 + bounds.width() as f32 / 2.0;
    let cy = bounds.y() as f32 + bounds.height() as f32 / 2.0;

    for inset in 0..ARCH_THICKNESS {
        let rx = bounds.width() as f32 / 2.0 - inset as f32;
        let ry = bounds.height() as f32 / 2.0 - inset as f32;
        let points: Vec<Point> = (0..=ARCH_SEGMENTS)
            .map(|i| {
                let angle = PI * i as f32 / ARCH_SEGMENTS as f32;
                Point::new(
                    (cx + rx * angle.cos()) as i32,
                    (cy - ry * angle.sin()) as i32,
                )
            })
            .collect();
        canvas.draw_lines(points.as_slice())?;
    }

    Ok(())
}

/// Draws game frames. Holds the reusable HUD components.
pub struct Renderer {
    player_health_bar: HealthBar,
    enemy_health_bar: HealthBar,
}

impl Renderer {
    pub fn new() -> Self {
        Renderer {
            player_health_bar: HealthBar::new(),
            enemy_health_bar: HealthBar::with_style(HealthBarStyle {
                width: 30,
                height: 4,
                offset_y: -8,
                ..Default::default()
            }),
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>, game: &Game) -> Result<(), String> {
        let offset = game.camera_offset();
        let viewport_width = game.world().viewport_width as i32;

        canvas.set_draw_color(SKY);
        canvas.clear();

        canvas.set_draw_color(TURQUOISE);
        for decoration in game.decorations() {
            let screen = to_screen(decoration, offset);
            if (0..=viewport_width).contains(&screen.x()) {
                draw_arch(canvas, screen)?;
            }
        }

        canvas.set_draw_color(SANDSTONE);
        for platform in game.platforms() {
            canvas.fill_rect(to_screen(platform.rect(), offset))?;
        }

        for enemy in game.enemies() {
            self.render_enemy(canvas, enemy, offset)?;
        }

        self.render_player(canvas, game.player(), offset)?;

        draw_text(
            canvas,
            &format!("Score: {}", game.score()),
            20,
            20,
            WHITE,
            TEXT_SCALE,
        )?;
        draw_text(
            canvas,
            &format!("Health: {}", game.player().health),
            20,
            60,
            WHITE,
            TEXT_SCALE,
        )?;

        Ok(())
    }

    fn render_enemy(
        &self,
        canvas: &mut Canvas<Window>,
        enemy: &Enemy,
        offset: f32,
    ) -> Result<(), String> {
        let screen = to_screen(enemy.rect(), offset);
        let (r, g, b) = enemy.stats().color;
        canvas.set_draw_color(Color::RGB(r, g, b));
        canvas.fill_rect(screen)?;

        let eye_x = match enemy.direction {
            PatrolDirection::Right => screen.right() - 8,
            PatrolDirection::Left => screen.left() + 8,
        };
        canvas.set_draw_color(BLACK);
        fill_circle(canvas, eye_x, screen.top() + 12, 4)?;

        self.enemy_health_bar.render(canvas, screen, enemy.health_fraction())
    }

    fn render_player(
        &self,
        canvas: &mut Canvas<Window>,
        player: &Player,
        offset: f32,
    ) -> Result<(), String> {
        let screen = to_screen(player.rect(), offset);
        canvas.set_draw_color(GOLD);
        canvas.fill_rect(screen)?;

        let eye_x = if player.facing_right {
            screen.right() - 10
        } else {
            screen.left() + 10
        };
        canvas.set_draw_color(BLACK);
        fill_circle(canvas, eye_x, screen.top() + 15, 5)?;

        if player.attacking {
            canvas.set_draw_color(TURQUOISE);
            canvas.fill_rect(to_screen(&attack_hitbox(player), offset))?;
        }

        self.player_health_bar.render(canvas, screen, player.health_fraction())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
