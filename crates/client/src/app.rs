//! Frame loop: input, session update, rendering.
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEventKind};
use frontier_runtime::GameSession;

use crate::input::{self, KeyAction};
use crate::terminal::Tui;
use crate::ui;

const FRAME_INTERVAL_MS: u64 = 16;

pub struct App {
    session: GameSession,
}

impl App {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn run(mut self, terminal: &mut Tui) -> Result<()> {
        let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
        let mut last_tick = Instant::now();

        loop {
            terminal.draw(|frame| ui::render(frame, &self.session))?;

            let timeout = frame_interval.saturating_sub(last_tick.elapsed());
            if term_event::poll(timeout)?
                && let TermEvent::Key(key) = term_event::read()?
                && key.kind == KeyEventKind::Press
            {
                match input::handle_key(key, self.session.mode()) {
                    KeyAction::Quit => break,
                    KeyAction::Submit(command) => {
                        tracing::debug!("Command: {:?}", command);
                        self.session.handle(command);
                    }
                    KeyAction::None => {}
                }
            }

            let elapsed = last_tick.elapsed();
            if elapsed >= frame_interval {
                self.session.update(elapsed);
                last_tick = Instant::now();
            }
        }

        Ok(())
    }
}
