//! C ABI binding to a natively linked engine build.
//!
//! Ownership contract: the request buffer is allocated on this side and must
//! stay alive for the duration of the call; the response buffer is allocated
//! by the engine and must be handed back to `ulti_engine_release` exactly
//! once. Both sides are covered by scope guards so no exit path leaks.

use super::{Engine, EngineError};
use std::ffi::{c_char, CStr, CString};

extern "C" {
    fn ulti_engine_simulate(deal: *const c_char) -> *mut c_char;
    fn ulti_engine_release(result: *mut c_char);
}

/// Engine-owned response buffer; releases itself on every path.
struct ResultBuffer(*mut c_char);

impl Drop for ResultBuffer {
    fn drop(&mut self) {
        // Safety: the pointer came from ulti_engine_simulate and is released
        // exactly once, here.
        unsafe { ulti_engine_release(self.0) }
    }
}

/// The natively linked minimax engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct FfiEngine;

impl Engine for FfiEngine {
    fn simulate(&mut self, request: &str) -> Result<String, EngineError> {
        // CString owns the request buffer; dropped on all paths.
        let deal = CString::new(request)
            .map_err(|e| EngineError::CallFailed(format!("request contains NUL: {e}")))?;

        // Safety: deal outlives the call; the engine does not retain it.
        let raw = unsafe { ulti_engine_simulate(deal.as_ptr()) };
        if raw.is_null() {
            return Err(EngineError::NullResult);
        }
        let guard = ResultBuffer(raw);

        // Safety: non-null, NUL-terminated per the engine contract; guard
        // keeps it alive while we copy out.
        let text = unsafe { CStr::from_ptr(guard.0) }
            .to_str()
            .map_err(|_| EngineError::NotText)?
            .to_owned();
        Ok(text)
    }
}
