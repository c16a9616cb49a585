//! Defines library-specific error types.
//!
//! The abort signal itself is infallible; the only operation in this crate
//! that can fail is installing the process-level interrupt handler.

use thiserror::Error;

/// Errors returned by `abortable`.
#[derive(Error, Debug)]
pub enum Error {
    // --- Signal Handling ---
    /// The Ctrl+C (SIGINT) handler could not be installed, e.g. because
    /// another handler is already registered for this process.
    #[error("Failed to set Ctrl+C signal handler: {0}")]
    SignalHandler(#[from] ctrlc::Error),
}
