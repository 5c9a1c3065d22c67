mod input_system;
mod render;
mod text;
mod ui;

use input_system::InputSystem;
use king_of_persia::config::FPS;
use king_of_persia::{EndReason, Game, GameError, SessionState, WorldConfig};
use log::{info, warn};
use render::Renderer;
use std::time::{Duration, Instant};

const WINDOW_TITLE: &str = "King of Persia";

/// Picks the world size from the desktop resolution.
///
/// The game runs fullscreen, so the viewport is the whole display. Falls
/// back to the default viewport if the display mode can't be read.
fn detect_world_config(video_subsystem: &sdl2::VideoSubsystem) -> WorldConfig {
    match video_subsystem.desktop_display_mode(0) {
        Ok(mode) => match WorldConfig::new(mode.w as f32, mode.h as f32) {
            Ok(world) => world,
            Err(e) => {
                warn!("{}, using default viewport", e);
                WorldConfig::default()
            }
        },
        Err(e) => {
            warn!(
                "Could not detect display mode ({}), using default viewport",
                e
            );
            WorldConfig::default()
        }
    }
}

fn main() -> Result<(), GameError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let sdl_context = sdl2::init()?;
    let video_subsystem = sdl_context.video()?;

    let world = detect_world_config(&video_subsystem);
    info!(
        "Viewport {}x{}, world width {}",
        world.viewport_width,
        world.viewport_height,
        world.world_width()
    );

    let window = video_subsystem
        .window(
            WINDOW_TITLE,
            world.viewport_width as u32,
            world.viewport_height as u32,
        )
        .fullscreen_desktop()
        .build()
        .map_err(|e| GameError::Platform(e.to_string()))?;

    let mut canvas = window
        .into_canvas()
        .build()
        .map_err(|e| GameError::Platform(e.to_string()))?;
    canvas
        .set_logical_size(world.viewport_width as u32, world.viewport_height as u32)
        .map_err(|e| GameError::Platform(e.to_string()))?;

    let mut event_pump = sdl_context.event_pump()?;
    let input_system = InputSystem::new();
    let renderer = Renderer::new();
    let mut game = Game::new(world)?;

    info!("Controls: Left/A Right/D move, F jump, Space attack, Esc quit");

    let frame_duration = Duration::from_secs(1) / FPS;

    while game.running() {
        let frame_start = Instant::now();

        let input = input_system.poll(&mut event_pump);
        let session = game.update(&input);

        // Draw the final frame too, so the defeat is visible
        renderer.render(&mut canvas, &game)?;
        canvas.present();

        if !session.is_running() {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    match game.session() {
        SessionState::Ended(EndReason::PlayerDefeated) => {
            println!("Game Over! Your score: {}", game.score());
        }
        _ => println!("Final score: {}", game.score()),
    }

    Ok(())
}
