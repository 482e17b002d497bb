//! Drives one engine call per configured contract, strictly in declaration
//! order, and keeps each variant's visible status plus the winning traces.
//!
//! The run is stepped, not looped: the first `step` marks the next variant
//! `Running` and returns so the presentation layer can repaint its busy
//! indicator; the following `step` performs the blocking engine exchange.
//! A protocol violation or engine failure aborts the whole run, later
//! variants are never invoked, and nothing is retried.

use crate::contract::Contract;
use crate::engine::{Engine, EngineError};
use crate::protocol::{Deal, Progression, ProtocolError, REQUEST_LEN};

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimError {
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Visible status of one variant within a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VariantStatus {
    Pending,
    Running,
    Won,
    Lost,
    /// The run aborted on this variant (engine failure or protocol
    /// violation).
    Failed,
}

/// One configured variant and what the current run knows about it.
#[derive(Debug, Clone)]
pub struct VariantRun {
    contract: Contract,
    status: VariantStatus,
    progression: Option<Progression>,
}

impl VariantRun {
    fn new(contract: Contract) -> Self {
        Self { contract, status: VariantStatus::Pending, progression: None }
    }

    pub fn contract(&self) -> Contract {
        self.contract
    }

    pub fn status(&self) -> VariantStatus {
        self.status
    }

    /// The decoded trace, kept only for won variants.
    pub fn progression(&self) -> Option<&Progression> {
        self.progression.as_ref()
    }
}

/// Per-run state machine: `Idle → Running(v0) → {Won|Lost} → Running(v1) →
/// … → Idle`, with abort-on-error.
#[derive(Debug)]
pub struct Simulator {
    runs: Vec<VariantRun>,
    deal: Option<Deal>,
}

impl Simulator {
    pub fn new(contracts: impl IntoIterator<Item = Contract>) -> Self {
        Self { runs: contracts.into_iter().map(VariantRun::new).collect(), deal: None }
    }

    pub fn runs(&self) -> &[VariantRun] {
        &self.runs
    }

    /// A run is in flight between a successful `start` and the `step` that
    /// finishes or aborts it.
    pub fn is_running(&self) -> bool {
        self.deal.is_some()
    }

    /// Arm a fresh run over the configured contracts. A trigger that arrives
    /// while a run is in flight is ignored (returns false) rather than
    /// restarting or queueing.
    pub fn start(&mut self, deal: Deal) -> bool {
        if self.is_running() {
            log::warn!("simulate trigger ignored: run already in flight");
            return false;
        }
        for run in &mut self.runs {
            run.status = VariantStatus::Pending;
            run.progression = None;
        }
        self.deal = Some(deal);
        true
    }

    /// Advance the run by one phase. Returns whether another `step` is
    /// needed; callers repaint between calls so the `Running` marker is
    /// visible before each blocking engine exchange.
    pub fn step(&mut self, engine: &mut dyn Engine) -> Result<bool, SimError> {
        let Some(deal) = self.deal.as_ref() else {
            return Ok(false);
        };

        if let Some(idx) = self.runs.iter().position(|r| r.status == VariantStatus::Running) {
            let contract = self.runs[idx].contract;
            let request = deal.encode_request(contract);
            if request.len() != REQUEST_LEN {
                self.abort(idx);
                return Err(ProtocolError::DealLength {
                    expected: REQUEST_LEN,
                    got: request.len(),
                }
                .into());
            }
            log::info!("simulating {contract} ({}/{})", idx + 1, self.runs.len());
            let response = match engine.simulate(&request) {
                Ok(r) => r,
                Err(e) => {
                    self.abort(idx);
                    return Err(e.into());
                }
            };
            let progression = match Progression::decode(&response) {
                Ok(p) => p,
                Err(e) => {
                    self.abort(idx);
                    return Err(e.into());
                }
            };
            let run = &mut self.runs[idx];
            if progression.outcome().is_win() {
                run.status = VariantStatus::Won;
                run.progression = Some(progression);
            } else {
                run.status = VariantStatus::Lost;
            }
            log::info!("{contract}: {:?}", run.status);
        }

        match self.runs.iter_mut().find(|r| r.status == VariantStatus::Pending) {
            Some(next) => {
                next.status = VariantStatus::Running;
                Ok(true)
            }
            None => {
                self.deal = None;
                Ok(false)
            }
        }
    }

    /// Replay trace for `contract`, present only if the last run won it.
    pub fn replay(&self, contract: Contract) -> Option<&Progression> {
        self.runs.iter().find(|r| r.contract == contract).and_then(|r| r.progression.as_ref())
    }

    fn abort(&mut self, idx: usize) {
        self.runs[idx].status = VariantStatus::Failed;
        self.deal = None;
        log::error!("run aborted at {}", self.runs[idx].contract);
    }
}
