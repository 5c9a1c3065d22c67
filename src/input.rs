//! Logical input for one simulation tick
//!
//! The simulation never sees raw keys. The host translates its events into
//! these actions, which decouples input handling from game logic.

use crate::player::PLAYER_SPEED;

/// Discrete actions triggered by a key press this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Jump,
    Attack,
    Quit,
}

/// Continuous pressed/released state sampled at the tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeldActions {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl HeldActions {
    /// Horizontal displacement for this frame. Right wins when both are held.
    pub fn horizontal_intent(&self) -> f32 {
        if self.move_right {
            PLAYER_SPEED
        } else if self.move_left {
            -PLAYER_SPEED
        } else {
            0.0
        }
    }
}

/// Everything the host reports for one tick.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrameInput {
    /// Key-down events in arrival order
    pub pressed: Vec<GameAction>,
    pub held: HeldActions,
}

impl FrameInput {
    /// An input with no keys pressed or held.
    pub fn idle() -> Self {
        FrameInput::default()
    }

    pub fn with_pressed(mut self, action: GameAction) -> Self {
        self.pressed.push(action);
        self
    }

    pub fn with_held(mut self, held: HeldActions) -> Self {
        self.held = held;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_intent() {
        let none = HeldActions::default();
        assert_eq!(none.horizontal_intent(), 0.0);

        let left = HeldActions {

            move_left: true,

            ..Default::default()

        };
        assert_eq!(left.horizontal_intent(), -PLAYER_SPEED);

        let both = HeldActions { move_left: true, move_right: true, jump: false };
        assert_eq!(both.horizontal_intent(), PLAYER_SPEED);
    }

    #[test]
    fn test_builder_keeps_order() {
        let input = FrameInput::idle()
            .with_pressed(GameAction::Attack)
            .with_pressed(GameAction::Jump);
        assert_eq!(input.pressed, vec![GameAction::Attack, GameAction::Jump]);
    }
}
