//! ulti-rs: deal builder and simulation front end for Hungarian Ulti
//!
//! Goals:
//! - Arrange the 32-card deck into three 10-card hands and pick a trump
//! - Speak the engine's fixed-format text protocol exactly (61/62-byte deals
//!   in, 91-byte played-out games back)
//! - Drive one engine call per configured contract, strictly in order, and
//!   keep the winning traces for replay
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! The game-playing algorithm itself lives in an external minimax engine
//! behind the [`engine::Engine`] trait; this crate only builds deals,
//! validates frames and renders progressions.
//!
//! ## Quick start: simulate a deal against a scripted engine
//! ```
//! use ulti_rs::contract::Contract;
//! use ulti_rs::engine::ScriptedEngine;
//! use ulti_rs::protocol::Deal;
//! use ulti_rs::sim::{Simulator, VariantStatus};
//! use ulti_rs::table::Table;
//!
//! let mut table = Table::new();
//! table.deal_random(42);
//! let deal = Deal::from_table(&table).unwrap();
//! assert_eq!(deal.encode().len(), 61);
//!
//! let mut engine = ScriptedEngine::new();
//! engine.push_response(format!("1{}", "9".repeat(90)));
//!
//! let mut sim = Simulator::new([Contract::TrumpParty]);
//! sim.start(deal);
//! while sim.step(&mut engine).unwrap() {}
//! assert_eq!(sim.runs()[0].status(), VariantStatus::Won);
//! assert!(sim.replay(Contract::TrumpParty).is_some());
//! ```
//!
//! ## TUI
//! Run the interactive TUI with:
//! ```sh
//! cargo run --bin ulti-rs
//! ```

pub mod cards;
pub mod contract;
pub mod engine;
pub mod protocol;
pub mod replay;
pub mod sim;
pub mod table;
pub mod tui;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
