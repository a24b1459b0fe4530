//! Per-question countdown state machine.
//!
//! One logical countdown exists at a time: Idle until `start`, then Running
//! and ticked once per second by the caller, back to Idle on `stop` or on
//! reaching zero. Each start resets to the full limit, so a superseded
//! countdown cannot leak time into the next question.

/// Seconds a question stays open before it is auto-resolved.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 30;

/// Outcome of a single one-second tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownStep {
    /// The countdown was not running; nothing changed.
    Idle,
    /// One second elapsed, time is still left.
    Counted,
    /// The countdown just reached zero and stopped.
    Expired,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    active: bool,
}

impl Countdown {
    #[must_use]
    pub fn idle() -> Self {
        Self {
            remaining: QUESTION_TIME_LIMIT_SECS,
            active: false,
        }
    }

    /// Start (or restart) the countdown at exactly the full limit.
    pub fn start(&mut self) {
        self.remaining = QUESTION_TIME_LIMIT_SECS;
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance by one second.
    ///
    /// `remaining` only decreases while active; hitting zero stops the
    /// countdown in the same step.
    pub fn tick_down(&mut self) -> CountdownStep {
        if !self.active {
            return CountdownStep::Idle;
        }
        if self.remaining > 0 {
            self.remaining -= 1;
        }
        if self.remaining == 0 {
            self.active = false;
            CountdownStep::Expired
        } else {
            CountdownStep::Counted
        }
    }
}

impl Default for Countdown {
    fn default() -> Self {
        Self::idle()
    }
}
