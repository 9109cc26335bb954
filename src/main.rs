//! Terminal runner (default binary).
//!
//! Single-threaded loop: poll keyboard input with a timeout bounded by the
//! clock, apply actions, poll the clock for gravity ticks, drain session
//! events to keep the clock schedule in sync, and redraw.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use gridfall::core::{GameSession, SessionEvent, SessionState};
use gridfall::engine::GameClock;
use gridfall::input::{handle_key_event, should_quit};
use gridfall::term::TerminalRenderer;
use gridfall::types::{GameAction, IDLE_POLL_MS, INITIAL_TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut session = GameSession::new();
    let mut clock = GameClock::new(Duration::from_millis(INITIAL_TICK_MS));

    term.draw(&session)?;

    loop {
        let timeout = clock
            .time_until_due(Instant::now())
            .unwrap_or(Duration::from_millis(IDLE_POLL_MS));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        match action {
                            // Lifecycle stays out of the session: a restart
                            // after game over swaps in a fresh session, so
                            // `Over` remains a one-way latch.
                            GameAction::Restart => match session.state() {
                                SessionState::Ready => session.start(),
                                SessionState::Over => {
                                    session = GameSession::new();
                                    session.start();
                                }
                                SessionState::Running => {}
                            },
                            other => session.apply_action(other),
                        }
                    }
                }
            }
        }

        if clock.poll(Instant::now()) {
            session.tick();
        }

        for event in session.drain_events() {
            match event {
                // Cancel-and-reinstall: the clock holds a single schedule,
                // so the old cadence dies the moment the new one starts.
                SessionEvent::TickIntervalChanged(ms) => {
                    clock.reschedule(Duration::from_millis(ms), Instant::now());
                }
                SessionEvent::GameOver { .. } => clock.cancel(),
                // The score is drawn as part of every frame.
                SessionEvent::ScoreChanged(_) => {}
            }
        }

        term.draw(&session)?;
    }
}
