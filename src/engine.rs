//! The narrow boundary to the external minimax engine.
//!
//! The engine is an opaque function from a deal request to a played-out game
//! frame; everything it knows about Ulti stays behind this trait. The real
//! binding (`ffi-engine` feature) crosses a C ABI with explicit buffer
//! ownership; `ScriptedEngine` stands in for it in tests and demos.

use std::collections::VecDeque;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("engine call failed: {0}")]
    CallFailed(String),
    #[error("engine returned no result")]
    NullResult,
    #[error("engine returned a non-text result")]
    NotText,
    #[error("no engine is linked into this build")]
    NotLinked,
}

/// Text-in/text-out call into the external engine. The request is a 62-byte
/// deal frame, the response a 91-byte game frame; framing is validated by the
/// caller, not here.
pub trait Engine {
    fn simulate(&mut self, request: &str) -> Result<String, EngineError>;
}

/// Test double: replays a queue of canned responses and records every
/// request it receives.
#[derive(Debug, Default)]
pub struct ScriptedEngine {
    responses: VecDeque<Result<String, EngineError>>,
    requests: Vec<String>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response frame for the next call.
    pub fn push_response(&mut self, response: impl Into<String>) {
        self.responses.push_back(Ok(response.into()));
    }

    /// Queue a failure for the next call.
    pub fn push_failure(&mut self, err: EngineError) {
        self.responses.push_back(Err(err));
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> &[String] {
        &self.requests
    }
}

impl Engine for ScriptedEngine {
    fn simulate(&mut self, request: &str) -> Result<String, EngineError> {
        self.requests.push(request.to_string());
        self.responses
            .pop_front()
            .unwrap_or(Err(EngineError::CallFailed("scripted engine exhausted".into())))
    }
}

/// Null engine for builds without `ffi-engine`: every call fails, which
/// exercises the orchestrator's abort path instead of pretending to play.
#[derive(Debug, Default, Clone, Copy)]
pub struct Disconnected;

impl Engine for Disconnected {
    fn simulate(&mut self, _request: &str) -> Result<String, EngineError> {
        Err(EngineError::NotLinked)
    }
}

#[cfg(feature = "ffi-engine")]
mod ffi;
#[cfg(feature = "ffi-engine")]
pub use ffi::FfiEngine;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scripted_engine_replays_in_order_and_logs_requests() {
        let mut eng = ScriptedEngine::new();
        eng.push_response("first");
        eng.push_failure(EngineError::NullResult);
        assert_eq!(eng.simulate("a").unwrap(), "first");
        assert_eq!(eng.simulate("b").unwrap_err(), EngineError::NullResult);
        assert!(matches!(eng.simulate("c"), Err(EngineError::CallFailed(_))));
        assert_eq!(eng.requests(), ["a", "b", "c"]);
    }

    #[test]
    fn disconnected_engine_always_fails() {
        let mut eng = Disconnected;
        assert_eq!(eng.simulate("x").unwrap_err(), EngineError::NotLinked);
    }
}
