//! Observable-state tests for `AbortSignal` and `AbortHandle`.

use abortable::AbortSignal;
use crossbeam_channel::{after, select};
use std::time::Duration;

#[test]
fn test_default_signal_starts_with_no_open_generation() {
    // Zero-value construction is valid; first use lazily opens a generation.
    let signal = AbortSignal::default();
    let handle = signal.wait_handle();
    assert!(!handle.is_aborted());
}

#[test]
fn test_handle_obtained_before_trigger_observes_fire() {
    // 1. Setup
    let signal = AbortSignal::new();
    let handle = signal.wait_handle();

    // 2. Execute
    signal.trigger();

    // 3. Assert: a wait on the fired handle returns immediately.
    handle.wait();
    assert!(handle.is_aborted());
}

#[test]
fn test_handle_obtained_after_trigger_is_not_pre_signaled() {
    let signal = AbortSignal::new();
    signal.trigger();

    let handle = signal.wait_handle();
    // A blocking wait on this handle would block: only the bounded variant
    // can be asserted here, and it must time out rather than fire.
    assert!(!handle.wait_timeout(Duration::from_millis(50)));
    assert!(!handle.is_aborted());
}

#[test]
fn test_triple_trigger_is_safe_and_third_is_noop() {
    let signal = AbortSignal::new();
    signal.trigger();
    signal.trigger();
    signal.trigger();

    // The signal is still usable afterwards.
    let handle = signal.wait_handle();
    assert!(!handle.is_aborted());
    signal.trigger();
    assert!(handle.is_aborted());
}

#[test]
fn test_wait_timeout_on_fired_generation_returns_immediately() {
    let signal = AbortSignal::new();
    let handle = signal.wait_handle();
    signal.trigger();

    // Generous timeout, but the call must not actually sleep it out.
    let start = std::time::Instant::now();
    assert!(handle.wait_timeout(Duration::from_secs(5)));
    assert!(start.elapsed() < Duration::from_secs(1));
}

#[test]
fn test_handle_composes_with_select_and_timer() {
    // 1. Setup: a waiter that wants "abort or timeout, whichever first".
    let signal = AbortSignal::new();
    let handle = signal.wait_handle();

    // 2. Execute: with no trigger, the timer side must win.
    let timer = after(Duration::from_millis(20));
    let timed_out = select! {
        recv(handle.receiver()) -> _ => false,
        recv(timer) -> _ => true,
    };
    assert!(timed_out);

    // 3. Execute: after a trigger, the handle side must win.
    signal.trigger();
    let timer = after(Duration::from_secs(5));
    let aborted = select! {
        recv(handle.receiver()) -> _ => true,
        recv(timer) -> _ => false,
    };
    assert!(aborted);
}

#[test]
fn test_repeated_wait_handle_calls_share_the_generation() {
    let signal = AbortSignal::new();

    // Obtaining a handle repeatedly has no effect beyond the first call.
    let handles: Vec<_> = (0..5).map(|_| signal.wait_handle()).collect();
    signal.trigger();

    for handle in &handles {
        assert!(handle.is_aborted());
    }
}
