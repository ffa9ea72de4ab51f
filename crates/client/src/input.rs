//! Input processing for the terminal client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application stays agnostic about concrete key bindings or the specifics
//! of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use frontier_core::{Command, Direction, GameMode};

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Forward the command to the game session.
    Submit(Command),
    /// No meaningful command was produced.
    None,
}

/// Translates a key into a command for the active mode.
pub fn handle_key(key: KeyEvent, mode: GameMode) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    let command = match mode {
        GameMode::Exploring => match key.code {
            KeyCode::Char('q') => return KeyAction::Quit,
            code => exploring(code),
        },
        GameMode::InCombat => combat(key.code),
        GameMode::InDialogue => menu(key.code),
        GameMode::InInventory => match key.code {
            KeyCode::Char('i') => Some(Command::ToggleInventory),
            code => menu(code),
        },
        GameMode::InCrafting => match key.code {
            KeyCode::Char('c') => Some(Command::ToggleCrafting),
            code => menu(code),
        },
    };

    command.map_or(KeyAction::None, KeyAction::Submit)
}

fn exploring(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w') => Command::Move(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Command::Move(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Command::Move(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Command::Move(Direction::Right),
        KeyCode::Char('e') => Command::Interact,
        KeyCode::Char('i') => Command::ToggleInventory,
        KeyCode::Char('c') => Command::ToggleCrafting,
        KeyCode::F(5) | KeyCode::Char('k') => Command::Save,
        KeyCode::F(9) | KeyCode::Char('l') => Command::Load,
        _ => return None,
    };
    Some(command)
}

fn combat(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Char('1') => Command::Attack,
        KeyCode::Char('2') => Command::UseSkill(0),
        KeyCode::Char('3') => Command::UseSkill(1),
        KeyCode::Char('4') => Command::UseItem("health_potion".to_string()),
        KeyCode::Char('5') => Command::UseItem("mana_potion".to_string()),
        KeyCode::Char('6') => Command::UseSkill(2),
        KeyCode::Esc => Command::Flee,
        _ => return None,
    };
    Some(command)
}

fn menu(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w') => Command::SelectUp,
        KeyCode::Down | KeyCode::Char('s') => Command::SelectDown,
        KeyCode::Enter | KeyCode::Char(' ') => Command::Confirm,
        KeyCode::Esc => Command::Cancel,
        _ => return None,
    };
    Some(command)
}
