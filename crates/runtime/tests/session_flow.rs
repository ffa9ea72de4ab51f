//! End-to-end flows through a file-backed game session.

use std::fs;
use std::time::Duration;

use frontier_core::{Command, Direction, GameMode, Position, World};
use frontier_runtime::{GameSession, RuntimeConfig};
use tempfile::TempDir;

const FRAME: Duration = Duration::from_millis(16);

fn config(dir: &TempDir) -> RuntimeConfig {
    RuntimeConfig::default()
        .with_save_path(dir.path().join("saves/save.json"))
        .with_game_seed(21)
}

fn step(session: &mut GameSession, direction: Direction, times: usize) {
    for _ in 0..times {
        session.handle(Command::Move(direction));
        session.update(FRAME);
    }
}

fn messages(session: &GameSession) -> Vec<String> {
    session.messages().iter().map(str::to_string).collect()
}

#[test]
fn first_start_has_no_save() {
    let dir = TempDir::new().unwrap();
    let session = GameSession::start(&config(&dir)).unwrap();

    assert_eq!(messages(&session), ["Welcome to the frontier."]);
    assert_eq!(session.mode(), GameMode::Exploring);
    assert!(!dir.path().join("saves/save.json").exists());
}

#[test]
fn saved_game_is_resumed_on_next_start() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);

    let mut session = GameSession::start(&config).unwrap();
    let spawn = session.player().position();
    step(&mut session, Direction::Right, 2);
    session.handle(Command::Save);
    assert_eq!(session.messages().last(), Some("Game saved."));
    let saved_world = session.world().snapshot();
    drop(session);

    let resumed = GameSession::start(&config).unwrap();
    assert_eq!(
        messages(&resumed),
        ["Loaded saved game.", "Welcome to the frontier."]
    );
    assert_eq!(resumed.player().position(), Position::new(spawn.x + 2, spawn.y));
    assert_eq!(resumed.world().snapshot(), saved_world);
}

#[test]
fn unreadable_save_is_left_alone() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    fs::create_dir_all(dir.path().join("saves")).unwrap();
    fs::write(&config.save_path, "{ broken").unwrap();

    let session = GameSession::start(&config).unwrap();

    assert_eq!(
        messages(&session),
        [
            "Save file is unreadable. Starting a new game.",
            "Welcome to the frontier."
        ]
    );
    assert_eq!(fs::read_to_string(&config.save_path).unwrap(), "{ broken");
}

#[test]
fn walking_into_an_enemy_starts_and_finishes_combat() {
    let dir = TempDir::new().unwrap();
    let mut session = GameSession::start(&config(&dir)).unwrap();
    let enemies_before = session.world().enemies().len();

    // Spawn sits below an open corridor leading to the enemy tile at (5, 1).
    step(&mut session, Direction::Up, 3);
    step(&mut session, Direction::Left, 6);
    assert_eq!(session.mode(), GameMode::InCombat);
    assert_eq!(session.world().enemies().len(), enemies_before - 1);

    for _ in 0..20 {
        if session.mode() != GameMode::InCombat {
            break;
        }
        session.handle(Command::Attack);
        session.update(FRAME);
    }

    assert_eq!(session.mode(), GameMode::Exploring);
    assert!(session.player().stats().is_alive());
    assert!(messages(&session).iter().any(|m| m.starts_with("Defeated ")));
    assert_eq!(session.world().enemies().len(), enemies_before - 1);
}

#[test]
fn saving_is_ignored_during_combat() {
    let dir = TempDir::new().unwrap();
    let config = config(&dir);
    let mut session = GameSession::start(&config).unwrap();

    step(&mut session, Direction::Up, 3);
    step(&mut session, Direction::Left, 6);
    assert_eq!(session.mode(), GameMode::InCombat);

    session.handle(Command::Save);
    assert!(!config.save_path.exists());
}
