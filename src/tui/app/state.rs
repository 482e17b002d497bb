use crate::cards::{Card, Suit, DECK_SIZE, RANK_COUNT, SUIT_COUNT};
use crate::contract::Contract;
use crate::protocol::{Deal, ProtocolError};
use crate::sim::{Simulator, VariantStatus};
use crate::table::{Seat, Table};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Table,
    Replay,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    ToggleCard,
    SelectSeat(usize),
    TrumpNext,
    Simulate,
    RandomDeal,
    ClearTable,
    RunPrev,
    RunNext,
    OpenReplay,
    CloseReplay,
    ToggleHelp,
}

/// Default contract set simulated per run: trump party and ulti.
pub const DEFAULT_CONTRACTS: [Contract; 2] = [Contract::TrumpParty, Contract::Ulti];

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    // Placement state machine and orchestrator, owned here: one writer.
    pub table: Table,
    pub sim: Simulator,
    // Tray cursor, a home-slot index
    pub cursor: usize,
    // Selected row in the contract column
    pub selected_run: usize,
    next_seed: u64,
    help_open: bool,
    toast: Option<String>,
    toast_at: Option<Instant>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRACTS)
    }
}

impl AppState {
    const TOAST_TTL: Duration = Duration::from_secs(3);

    pub fn new(contracts: impl IntoIterator<Item = Contract>) -> Self {
        Self {
            scene: Scene::Table,
            table: Table::new(),
            sim: Simulator::new(contracts),
            cursor: 0,
            selected_run: 0,
            next_seed: 0,
            help_open: false,
            toast: None,
            toast_at: None,
        }
    }

    /// Seed used by the next `RandomDeal`; each deal bumps it.
    pub fn set_seed(&mut self, seed: u64) {
        self.next_seed = seed;
    }

    /// Apply a navigation-handoff deal code to the table.
    pub fn load_deal(&mut self, code: &str) -> Result<(), ProtocolError> {
        let deal = Deal::decode(code)?;
        deal.apply_to(&mut self.table);
        Ok(())
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn toast(&self) -> Option<&str> {
        self.toast.as_deref()
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(message.into());
        self.toast_at = Some(Instant::now());
    }

    fn clear_toast(&mut self) {
        self.toast = None;
        self.toast_at = None;
    }

    /// Card under the tray cursor.
    pub fn cursor_card(&self) -> Card {
        // cursor arithmetic keeps it inside the tray
        Card::from_home_slot(self.cursor).expect("cursor within tray")
    }

    /// Periodic housekeeping from the controller's tick.
    pub fn on_tick(&mut self) {
        if let Some(at) = self.toast_at {
            if at.elapsed() >= Self::TOAST_TTL {
                self.clear_toast();
            }
        }
    }

    /// Dispatch one input action. Returns true when a simulation run was
    /// armed and the controller should start stepping it.
    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::CursorLeft => {
                self.cursor = (self.cursor + DECK_SIZE - 1) % DECK_SIZE;
                false
            }
            InputAction::CursorRight => {
                self.cursor = (self.cursor + 1) % DECK_SIZE;
                false
            }
            InputAction::CursorUp => {
                self.cursor = (self.cursor + DECK_SIZE - RANK_COUNT) % DECK_SIZE;
                false
            }
            InputAction::CursorDown => {
                self.cursor = (self.cursor + RANK_COUNT) % DECK_SIZE;
                false
            }
            InputAction::ToggleCard => {
                if self.scene == Scene::Table {
                    self.table.toggle(self.cursor_card());
                }
                false
            }
            InputAction::SelectSeat(idx) => {
                if let Some(seat) = Seat::from_index(idx) {
                    self.table.set_active_seat(seat);
                }
                false
            }
            InputAction::TrumpNext => {
                let next = (self.table.active_trump() as usize + 1) % SUIT_COUNT;
                self.table.set_active_trump(Suit::ALL[next]);
                false
            }
            InputAction::Simulate => self.request_simulate(),
            InputAction::RandomDeal => {
                if self.scene == Scene::Table && !self.sim.is_running() {
                    self.table.deal_random(self.next_seed);
                    self.next_seed = self.next_seed.wrapping_add(1);
                }
                false
            }
            InputAction::ClearTable => {
                if self.scene == Scene::Table && !self.sim.is_running() {
                    self.table.reset();
                }
                false
            }
            InputAction::RunPrev => {
                let n = self.sim.runs().len();
                if n > 0 {
                    self.selected_run = (self.selected_run + n - 1) % n;
                }
                false
            }
            InputAction::RunNext => {
                let n = self.sim.runs().len();
                if n > 0 {
                    self.selected_run = (self.selected_run + 1) % n;
                }
                false
            }
            InputAction::OpenReplay => {
                match self.selected_contract() {
                    Some(c) if self.sim.replay(c).is_some() => self.scene = Scene::Replay,
                    _ => self.show_toast("No winning trace to replay"),
                }
                false
            }
            InputAction::CloseReplay => {
                if self.scene == Scene::Replay {
                    self.scene = Scene::Table;
                }
                false
            }
            InputAction::ToggleHelp => {
                self.help_open = !self.help_open;
                false
            }
        }
    }

    pub fn selected_contract(&self) -> Option<Contract> {
        self.sim.runs().get(self.selected_run).map(|r| r.contract())
    }

    /// Snapshot the table into a deal and arm a run. Incomplete hands are an
    /// input-validation error: toast, no state change.
    fn request_simulate(&mut self) -> bool {
        if self.scene != Scene::Table || self.sim.is_running() {
            return false;
        }
        match Deal::from_table(&self.table) {
            Ok(deal) => {
                self.clear_toast();
                self.sim.start(deal)
            }
            Err(ProtocolError::IncompleteDeal { .. }) => {
                self.show_toast("Deal 10 cards to each player");
                false
            }
            Err(err) => {
                self.show_toast(err.to_string());
                false
            }
        }
    }

    /// Status glyph for the contract column.
    pub fn status_label(status: VariantStatus) -> &'static str {
        match status {
            VariantStatus::Pending => "pending",
            VariantStatus::Running => "running",
            VariantStatus::Won => "win",
            VariantStatus::Lost => "loss",
            VariantStatus::Failed => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simulate_with_empty_table_toasts() {
        let mut app = AppState::default();
        assert!(!app.handle_input(InputAction::Simulate));
        assert_eq!(app.toast(), Some("Deal 10 cards to each player"));
        assert!(!app.sim.is_running());
    }

    #[test]
    fn cursor_wraps_on_tray_grid() {
        let mut app = AppState::default();
        app.handle_input(InputAction::CursorLeft);
        assert_eq!(app.cursor, DECK_SIZE - 1);
        app.handle_input(InputAction::CursorRight);
        assert_eq!(app.cursor, 0);
        app.handle_input(InputAction::CursorUp);
        assert_eq!(app.cursor, DECK_SIZE - RANK_COUNT);
    }

    #[test]
    fn replay_without_trace_is_refused() {
        let mut app = AppState::default();
        app.handle_input(InputAction::OpenReplay);
        assert_eq!(app.scene, Scene::Table);
        assert!(app.toast().is_some());
    }
}
