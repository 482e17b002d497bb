use crate::engine::Engine;
use crate::protocol::ProtocolError;
use crate::sim::SimError;
use crate::tui::app::{AppState, InputAction, Scene};
use crate::tui::ui;
use crossterm::event::{self, Event, KeyCode};
use ratatui::prelude::{CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

pub fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut AppState,
    engine: &mut dyn Engine,
    tick_rate: Duration,
) -> io::Result<()> {
    let mut last_tick = Instant::now();
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // An in-flight run is stepped one phase per frame so the running
        // marker paints before each blocking engine call. Input is not read
        // until the run is over; triggers queued meanwhile are dropped.
        if app.sim.is_running() {
            let finished = match app.sim.step(engine) {
                Ok(more) => !more,
                Err(SimError::Protocol(ProtocolError::BadOutcome(flag))) => {
                    // Broken engine contract, not a transient condition.
                    return Err(io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("engine protocol violation: outcome flag '{flag}'"),
                    ));
                }
                Err(err) => {
                    app.show_toast(err.to_string());
                    true
                }
            };
            if finished {
                drain_pending_events()?;
            }
            continue;
        }

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if handle_key(app, key.code) {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.on_tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

fn drain_pending_events() -> io::Result<()> {
    while event::poll(Duration::ZERO)? {
        let _ = event::read()?;
    }
    Ok(())
}

fn handle_key(app: &mut AppState, code: KeyCode) -> bool {
    if matches!(code, KeyCode::Char('?')) {
        let _ = app.handle_input(InputAction::ToggleHelp);
        return false;
    }
    if app.help_open() {
        if matches!(code, KeyCode::Esc) {
            let _ = app.handle_input(InputAction::ToggleHelp);
        }
        return false;
    }

    match app.scene {
        Scene::Table => match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => return true,
            KeyCode::Left => {
                let _ = app.handle_input(InputAction::CursorLeft);
            }
            KeyCode::Right => {
                let _ = app.handle_input(InputAction::CursorRight);
            }
            KeyCode::Up => {
                let _ = app.handle_input(InputAction::CursorUp);
            }
            KeyCode::Down => {
                let _ = app.handle_input(InputAction::CursorDown);
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                let _ = app.handle_input(InputAction::ToggleCard);
            }
            KeyCode::Char(c) if ('1'..='3').contains(&c) => {
                let _ = app.handle_input(InputAction::SelectSeat((c as u8 - b'1') as usize));
            }
            KeyCode::Char('t') | KeyCode::Char('T') => {
                let _ = app.handle_input(InputAction::TrumpNext);
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                let _ = app.handle_input(InputAction::Simulate);
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                let _ = app.handle_input(InputAction::RandomDeal);
            }
            KeyCode::Char('c') | KeyCode::Char('C') => {
                let _ = app.handle_input(InputAction::ClearTable);
            }
            KeyCode::Char('[') => {
                let _ = app.handle_input(InputAction::RunPrev);
            }
            KeyCode::Char(']') => {
                let _ = app.handle_input(InputAction::RunNext);
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                let _ = app.handle_input(InputAction::OpenReplay);
            }
            _ => {}
        },
        Scene::Replay => match code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('p') => {
                let _ = app.handle_input(InputAction::CloseReplay);
            }
            KeyCode::Char('[') => {
                let _ = app.handle_input(InputAction::RunPrev);
            }
            KeyCode::Char(']') => {
                let _ = app.handle_input(InputAction::RunNext);
            }
            _ => {}
        },
    }
    false
}
