// Host-side tests for the loading gate.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod loader {
    include!("../src/core/loader.rs");
}

use loader::*;

#[test]
fn progress_is_linear_in_elapsed_time() {
    let mut gate = LoadingGate::new(2500, 300);
    assert_eq!(gate.progress(), 0);
    gate.advance(1250);
    assert_eq!(gate.progress(), 50);
    gate.advance(625);
    assert_eq!(gate.progress(), 75);
}

#[test]
fn reaches_full_progress_at_the_configured_duration() {
    let mut gate = LoadingGate::new(2500, 300);
    let mut elapsed = 0;
    while elapsed + 50 < 2500 {
        assert!(!gate.advance(50));
        elapsed += 50;
        assert!(gate.progress() < 100, "full before the duration elapsed");
    }
    gate.advance(50);
    assert_eq!(gate.progress(), 100, "not full at the duration");
}

#[test]
fn signals_exactly_once_within_the_hold_window() {
    let mut gate = LoadingGate::new(2500, 300);
    let mut signals = 0;
    let mut signal_at = 0;
    let mut elapsed = 0;
    while elapsed < 10_000 {
        elapsed += 50;
        if gate.advance(50) {
            signals += 1;
            signal_at = elapsed;
        }
    }
    assert_eq!(signals, 1, "gate must signal exactly once");
    assert!(signal_at >= 2500, "signalled before full progress");
    assert!(
        signal_at <= 2500 + 300 + 50,
        "signalled later than the hold window (at {signal_at} ms)"
    );
    assert_eq!(gate.state(), GateState::Complete);
}

#[test]
fn stays_complete_and_silent_after_the_signal() {
    let mut gate = LoadingGate::new(100, 0);
    assert!(!gate.advance(50));
    assert!(gate.advance(50));
    for _ in 0..100 {
        assert!(!gate.advance(50));
        assert_eq!(gate.state(), GateState::Complete);
        assert_eq!(gate.progress(), 100);
    }
}

#[test]
fn progress_never_exceeds_one_hundred() {
    let mut gate = LoadingGate::new(200, 50);
    gate.advance(100_000);
    assert_eq!(gate.progress(), 100);
}

#[test]
fn default_gate_uses_the_splash_timing() {
    let gate = LoadingGate::default();
    assert_eq!(gate.state(), GateState::Loading);
    assert_eq!(gate.progress(), 0);
    // One tick short of the duration stays under 100%
    let mut gate = LoadingGate::new(LOAD_DURATION_MS, LOAD_HOLD_MS);
    gate.advance(LOAD_DURATION_MS - LOAD_TICK_MS);
    assert!(gate.progress() < 100);
}
