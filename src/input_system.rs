use king_of_persia::{FrameInput, GameAction, HeldActions};
use sdl2::EventPump;
use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};

/// InputSystem turns SDL2 events into logical game input
///
/// Raw keys never reach the simulation. Each tick this system:
/// 1. Drains pending SDL2 events into discrete `GameAction`s (key-down only)
/// 2. Samples the keyboard state for held movement and jump keys
/// 3. Returns both as a `FrameInput`
///
/// # Controls
///
/// - Left / A: move left
/// - Right / D: move right
/// - F: jump (tap or hold)
/// - Space: attack
/// - Escape or closing the window: quit
pub struct InputSystem;

impl InputSystem {
    pub fn new() -> Self {
        InputSystem
    }

    /// Collects the input for one tick.
    pub fn poll(&self, event_pump: &mut EventPump) -> FrameInput {
        let mut pressed = Vec::new();

        for event in event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => pressed.push(GameAction::Quit),
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => {
                    if let Some(action) = Self::map_keydown(key) {
                        pressed.push(action);
                    }
                }
                _ => {}
            }
        }

        let keyboard = event_pump.keyboard_state();
        let held = HeldActions {
            move_left: keyboard.is_scancode_pressed(Scancode::Left)
                || keyboard.is_scancode_pressed(Scancode::A),
            move_right: keyboard.is_scancode_pressed(Scancode::Right)
                || keyboard.is_scancode_pressed(Scancode::D),
            jump: keyboard.is_scancode_pressed(Scancode::F),
        };

        FrameInput { pressed, held }
    }

    fn map_keydown(key: Keycode) -> Option<GameAction> {
        match key {
            Keycode::F => Some(GameAction::Jump),
            Keycode::Space => Some(GameAction::Attack),
            Keycode::Escape => Some(GameAction::Quit),
            _ => None,
        }
    }
}

impl Default for InputSystem {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keydown_mapping() {
        assert_eq!(InputSystem::map_keydown(Keycode::F), Some(GameAction::Jump));
        assert_eq!(
            InputSystem::map_keydown(Keycode::Space),
            Some(GameAction::Attack)
        );
        assert_eq!(
            InputSystem::map_keydown(Keycode::Escape),
            Some(GameAction::Quit)
        );
        assert_eq!(InputSystem::map_keydown(Keycode::Q), None);
    }
}
