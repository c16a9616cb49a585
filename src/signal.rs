// src/signal.rs

//! Wires an [`AbortSignal`] to Ctrl+C for graceful shutdown.

use crate::abort::AbortSignal;
use crate::errors::Error;
use std::sync::Arc;

/// Sets up a handler for Ctrl+C (SIGINT) that triggers the given signal.
///
/// When the interrupt is caught, [`AbortSignal::trigger`] is called on the
/// shared signal, releasing every worker currently blocked on a handle.
/// A second Ctrl+C after the first triggers again, which fires whatever
/// generation is open at that point (or is a no-op if none is).
///
/// # Errors
/// Returns an error if the signal handler cannot be set.
pub fn trigger_on_ctrlc(signal: Arc<AbortSignal>) -> Result<(), Error> {
    ctrlc::set_handler(move || {
        log::info!("Ctrl+C signal received, triggering abort.");
        signal.trigger();
    })?;
    Ok(())
}

// Note: Testing signal handlers directly is complex and often skipped
// or handled via integration tests that send signals to the process.
