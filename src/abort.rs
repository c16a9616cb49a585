//! Provides the broadcastable, multi-waiter abort signal.

use crossbeam_channel::{bounded, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// One lifecycle of the internal notification channel, from lazy creation
/// to firing.
///
/// Nothing is ever sent on the channel; it exists solely so that dropping
/// the retained `Sender` disconnects every outstanding `Receiver` clone at
/// once, waking all waiters simultaneously.
#[derive(Debug)]
struct Generation {
    _tx: Sender<()>,
    rx: Receiver<()>,
}

impl Generation {
    fn open() -> Self {
        // Zero capacity: a receive can only complete via disconnect.
        let (tx, rx) = bounded(0);
        Self { _tx: tx, rx }
    }
}

/// A broadcastable abort signal for notifying any number of concurrent
/// workers that they should stop.
///
/// A controller triggers the signal without needing to know how many workers
/// exist; every worker holding an [`AbortHandle`] obtained before the trigger
/// observes the abort, immediately or on its next inspection. Handles are
/// cheap to obtain and need not be cached.
///
/// The signal is generational: each [`trigger`](Self::trigger) permanently
/// fires the current generation's handles and clears the internal channel,
/// and the next [`wait_handle`](Self::wait_handle) call lazily opens a fresh,
/// unfired generation. Triggering is one-way per generation: a fired handle
/// stays fired forever, and there is no way to reset it.
///
/// Dropping the signal while a generation is open releases that generation's
/// waiters as if it had been triggered, so workers are never stranded on a
/// handle whose signal no longer exists.
///
/// # Examples
///
/// ```
/// use abortable::AbortSignal;
/// use std::sync::Arc;
/// use std::thread;
/// use std::time::Duration;
///
/// let signal = Arc::new(AbortSignal::new());
///
/// let mut workers = Vec::new();
/// for _ in 0..4 {
///     let handle = signal.wait_handle();
///     workers.push(thread::spawn(move || {
///         // Block until the controller decides to abort.
///         handle.wait();
///     }));
/// }
///
/// // Let the workers park for a moment, then release them all at once.
/// thread::sleep(Duration::from_millis(50));
/// signal.trigger();
///
/// for worker in workers {
///     worker.join().unwrap();
/// }
/// ```
#[derive(Debug, Default)]
pub struct AbortSignal {
    channel: Mutex<Option<Generation>>,
}

impl AbortSignal {
    /// Creates a new signal with no open generation.
    ///
    /// Equivalent to `AbortSignal::default()`; no generation is allocated
    /// until the signal is first used.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a handle that becomes signaled when [`trigger`](Self::trigger)
    /// is next called.
    ///
    /// Lazily opens a generation if none is open. Every caller between two
    /// triggers receives a handle onto the *same* underlying channel, so one
    /// trigger wakes all of them; calling this repeatedly has no effect
    /// beyond the first call per generation.
    ///
    /// This method never blocks and cannot fail.
    pub fn wait_handle(&self) -> AbortHandle {
        let mut slot = self.lock();
        let generation = slot.get_or_insert_with(|| {
            log::trace!("abort signal: opening a new generation");
            Generation::open()
        });
        AbortHandle {
            rx: generation.rx.clone(),
        }
    }

    /// Fires the current generation, waking all holders of its handles.
    ///
    /// Every [`AbortHandle`] obtained before this call becomes permanently
    /// signaled. The internal channel is then cleared, so a handle obtained
    /// *after* this call belongs to a fresh, unfired generation that needs a
    /// trigger of its own.
    ///
    /// Calling this when no generation is open (repeated triggers, or a
    /// trigger before any handle was ever requested) is a no-op: there is no
    /// handle that could observe the fire, and the next `wait_handle` opens a
    /// new generation either way.
    ///
    /// This method never blocks and cannot fail.
    pub fn trigger(&self) {
        let mut slot = self.lock();
        match slot.take() {
            Some(generation) => {
                // Dropping the sender disconnects every receiver clone,
                // releasing all current waiters at once.
                drop(generation);
                log::debug!("abort signal: generation fired, all waiters released");
            }
            None => {
                log::trace!("abort signal: trigger with no open generation (no-op)");
            }
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Generation>> {
        // The guarded state is a plain Option that is never left mid-update,
        // so a poisoned lock can be recovered without violating invariants.
        self.channel.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// An observe-only handle onto one generation of an [`AbortSignal`].
///
/// Handles are cheap to clone; all clones for a generation observe the same
/// fire event. Once the generation fires, every check or wait on the handle
/// reports the fired state, forever.
///
/// # Examples
///
/// ```
/// use abortable::AbortSignal;
///
/// let signal = AbortSignal::new();
/// let handle = signal.wait_handle();
/// assert!(!handle.is_aborted());
///
/// signal.trigger();
/// assert!(handle.is_aborted());
///
/// // A handle obtained after the trigger belongs to a new generation.
/// assert!(!signal.wait_handle().is_aborted());
/// ```
#[derive(Debug, Clone)]
pub struct AbortHandle {
    rx: Receiver<()>,
}

impl AbortHandle {
    /// Checks whether this handle's generation has fired, without blocking.
    pub fn is_aborted(&self) -> bool {
        matches!(self.rx.try_recv(), Err(TryRecvError::Disconnected))
    }

    /// Blocks the calling thread until this handle's generation fires.
    ///
    /// Returns immediately if the generation has already fired.
    pub fn wait(&self) {
        // No message is ever sent, so the receive completes only when the
        // generation fires and the channel disconnects.
        let _ = self.rx.recv();
    }

    /// Blocks until this handle's generation fires or `timeout` elapses.
    ///
    /// Returns `true` if the generation fired within the timeout.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        matches!(
            self.rx.recv_timeout(timeout),
            Err(RecvTimeoutError::Disconnected)
        )
    }

    /// Returns the underlying channel receiver, for composing the handle
    /// with [`crossbeam_channel::select!`] alongside timers or other
    /// channels.
    ///
    /// The receiver never yields a message; it disconnects when the
    /// generation fires. Callers must treat it as observe-only.
    pub fn receiver(&self) -> &Receiver<()> {
        &self.rx
    }
}
