use clap::Parser;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use std::time::Duration;
use ulti_rs::contract::Contract;
use ulti_rs::tui::{app::AppState, controller};

/// Deal builder and minimax-simulation front end for Hungarian Ulti.
#[derive(Debug, Parser)]
#[command(name = "ulti-rs", version)]
struct Args {
    /// 61-byte deal code handed off from another view (trump digit + 60 card
    /// digits). Anything but exactly 61 valid bytes is a fatal input error.
    #[arg(long)]
    deal: Option<String>,

    /// Seed for R (random deal); subsequent deals increment it.
    #[arg(long)]
    seed: Option<u64>,

    /// Contract digits to simulate per run, in order (e.g. "147").
    #[arg(long, default_value = "14")]
    contracts: String,
}

fn parse_contracts(s: &str) -> Result<Vec<Contract>, String> {
    let contracts: Vec<Contract> = s
        .chars()
        .map(|c| Contract::from_digit(c).ok_or_else(|| format!("invalid contract digit '{c}'")))
        .collect::<Result<_, _>>()?;
    if contracts.is_empty() {
        return Err("at least one contract is required".to_string());
    }
    Ok(contracts)
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    crossterm::execute!(
        stdout,
        crossterm::terminal::EnterAlternateScreen,
        crossterm::event::EnableMouseCapture
    )?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(mut terminal: Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        crossterm::event::DisableMouseCapture,
        crossterm::terminal::LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

fn main() -> io::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let contracts = parse_contracts(&args.contracts)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    let mut app = AppState::new(contracts);
    if let Some(seed) = args.seed {
        app.set_seed(seed);
    }
    if let Some(code) = &args.deal {
        app.load_deal(code)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;
    }

    if !io::stdout().is_terminal() {
        println!(
            "ulti-rs TUI requires a real terminal (TTY).\nRun in Terminal and press q to quit. Version: {}",
            ulti_rs::VERSION
        );
        return Ok(());
    }

    #[cfg(feature = "ffi-engine")]
    let mut engine = ulti_rs::engine::FfiEngine;
    #[cfg(not(feature = "ffi-engine"))]
    let mut engine = ulti_rs::engine::Disconnected;

    let mut terminal = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);

    let res = controller::run(&mut terminal, &mut app, &mut engine, tick_rate);

    // Always attempt to restore terminal
    restore_terminal(terminal)?;
    res
}
