/// Default splash duration in milliseconds.
pub const LOAD_DURATION_MS: u32 = 2500;
/// Pump interval for the splash progress updates.
pub const LOAD_TICK_MS: u32 = 50;
/// Delay between hitting 100% and signalling completion.
pub const LOAD_HOLD_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateState {
    Loading,
    Complete,
}

/// Timer-driven loading gate.
///
/// Progress is synthetic: a linear function of elapsed time, not of any real
/// work. The gate reaches 100% after `duration_ms`, holds for `hold_ms`, then
/// signals completion exactly once. It cannot fail.
#[derive(Clone, Debug)]
pub struct LoadingGate {
    duration_ms: u32,
    hold_ms: u32,
    elapsed_ms: u32,
    signalled: bool,
}

impl LoadingGate {
    pub fn new(duration_ms: u32, hold_ms: u32) -> Self {
        Self {
            duration_ms: duration_ms.max(1),
            hold_ms,
            elapsed_ms: 0,
            signalled: false,
        }
    }

    /// Percent complete, 0..=100.
    #[inline]
    pub fn progress(&self) -> u32 {
        (self.elapsed_ms.saturating_mul(100) / self.duration_ms).min(100)
    }

    #[inline]
    pub fn state(&self) -> GateState {
        if self.signalled {
            GateState::Complete
        } else {
            GateState::Loading
        }
    }

    /// Advance the gate by `dt_ms`. Returns `true` on the single tick that
    /// crosses the completion point; every later call returns `false`.
    pub fn advance(&mut self, dt_ms: u32) -> bool {
        if self.signalled {
            return false;
        }
        self.elapsed_ms = self.elapsed_ms.saturating_add(dt_ms);
        if self.elapsed_ms >= self.duration_ms + self.hold_ms {
            self.signalled = true;
            return true;
        }
        false
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new(LOAD_DURATION_MS, LOAD_HOLD_MS)
    }
}
