//! Keyboard mapping

use crate::carousel::{RingInput, StepDirection};

/// What a key press asks the carousel to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Step(StepDirection),
    /// Activate the focused card
    Activate,
}

impl Command {
    /// Ring input for navigation commands
    pub fn as_ring_input(self) -> Option<RingInput> {
        match self {
            Command::Step(dir) => Some(RingInput::Step(dir)),
            Command::Activate => None,
        }
    }
}

/// Map a window-level `KeyboardEvent.key` to a command
pub fn command_for_key(key: &str) -> Option<Command> {
    match key {
        "ArrowRight" => Some(Command::Step(StepDirection::Next)),
        "ArrowLeft" => Some(Command::Step(StepDirection::Prev)),
        _ => None,
    }
}

/// Map a key pressed on the focused card
pub fn card_command_for_key(key: &str) -> Option<Command> {
    match key {
        "Enter" | " " => Some(Command::Activate),
        _ => None,
    }
}
