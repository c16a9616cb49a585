//! `abortable` provides a single synchronization primitive: a broadcastable,
//! multi-waiter abort signal.
//!
//! A controller can notify an arbitrary number of independent worker threads
//! that they should stop, without tracking how many workers exist or
//! enumerating them individually. Workers obtain a waitable [`AbortHandle`]
//! from the shared [`AbortSignal`] and block on it (or poll it, or compose it
//! with timers via `crossbeam_channel::select!`); the controller calls
//! [`AbortSignal::trigger`] once to release all of them at the same time.
//!
//! The signal tracks neither worker completion nor an abort reason, and a
//! fired handle can never be reset. It is a building block for shutdown
//! coordination, not a task system.
//!
//! # Example
//!
//! ```
//! use abortable::AbortSignal;
//! use std::sync::Arc;
//! use std::thread;
//! use std::time::Duration;
//!
//! let signal = Arc::new(AbortSignal::new());
//!
//! // Spawn workers that each poll for the abort between units of work.
//! let mut workers = Vec::new();
//! for _ in 0..2 {
//!     let handle = signal.wait_handle();
//!     workers.push(thread::spawn(move || {
//!         while !handle.is_aborted() {
//!             thread::sleep(Duration::from_millis(10));
//!         }
//!     }));
//! }
//!
//! // The controller decides to stop everything.
//! signal.trigger();
//!
//! for worker in workers {
//!     worker.join().unwrap();
//! }
//! ```

pub mod abort;
pub mod errors;
pub mod signal;

// Re-export key public types for easier use as a library
pub use abort::{AbortHandle, AbortSignal};
pub use errors::Error;
pub use signal::trigger_on_ctrlc;
