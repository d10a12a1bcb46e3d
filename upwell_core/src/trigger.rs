// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot visibility trigger.
//!
//! A deferred reveal waits for its element to become visible enough, then
//! applies the primary class exactly once. [`RevealTrigger`] is the
//! platform-independent half of that arrangement: backends feed it
//! visible-area ratios from whatever visibility-reporting mechanism the
//! platform offers, and it decides when (and that only once) the reveal
//! fires.
//!
//! The machine has two states. `Waiting` is the initial state; the first
//! report at or above [`VISIBILITY_THRESHOLD`] moves it to `Triggered`,
//! which is terminal. Scrolling back out of view never re-arms it.

/// Fraction of the element's area that must be visible for the reveal to
/// fire.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Lifecycle state of a [`RevealTrigger`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerState {
    /// Registered and receiving visibility reports; nothing applied yet.
    Waiting,
    /// Fired. Terminal; further reports are ignored.
    Triggered,
}

/// What the caller must do after feeding one report to
/// [`RevealTrigger::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TriggerDecision {
    /// Keep watching; nothing to apply.
    Hold,
    /// Apply the deferred class now and deregister the watch. Returned
    /// exactly once per trigger.
    Fire,
}

/// One-shot latch over a stream of visible-area ratios.
#[derive(Clone, Debug)]
pub struct RevealTrigger {
    state: TriggerState,
    reports: u64,
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new()
    }
}

impl RevealTrigger {
    /// Creates a trigger in the `Waiting` state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: TriggerState::Waiting,
            reports: 0,
        }
    }

    /// Feeds one visibility report (visible area as a 0.0–1.0 ratio).
    ///
    /// Returns [`TriggerDecision::Fire`] for the first report with
    /// `ratio >= VISIBILITY_THRESHOLD`; every other call returns
    /// [`TriggerDecision::Hold`]. A NaN ratio never fires.
    #[must_use]
    pub fn observe(&mut self, ratio: f64) -> TriggerDecision {
        self.reports = self.reports.saturating_add(1);
        match self.state {
            TriggerState::Waiting if ratio >= VISIBILITY_THRESHOLD => {
                self.state = TriggerState::Triggered;
                TriggerDecision::Fire
            }
            _ => TriggerDecision::Hold,
        }
    }

    /// Returns the current lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TriggerState {
        self.state
    }

    /// Returns `true` once the trigger has fired.
    #[must_use]
    pub const fn has_fired(&self) -> bool {
        matches!(self.state, TriggerState::Triggered)
    }

    /// Total number of reports observed, fired or not.
    #[must_use]
    pub const fn reports(&self) -> u64 {
        self.reports
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_at_exactly_the_threshold() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(VISIBILITY_THRESHOLD), TriggerDecision::Fire);
        assert!(trigger.has_fired());
    }

    #[test]
    fn holds_below_the_threshold() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(0.05), TriggerDecision::Hold);
        assert_eq!(trigger.state(), TriggerState::Waiting);
    }

    #[test]
    fn keeps_waiting_through_repeated_low_reports_then_fires() {
        let mut trigger = RevealTrigger::new();
        for _ in 0..5 {
            assert_eq!(trigger.observe(0.0), TriggerDecision::Hold);
        }
        assert_eq!(trigger.observe(0.4), TriggerDecision::Fire);
    }

    #[test]
    fn fires_once_then_ignores_further_reports() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(0.9), TriggerDecision::Fire);
        for _ in 0..10 {
            assert_eq!(trigger.observe(1.0), TriggerDecision::Hold);
        }
        assert_eq!(trigger.state(), TriggerState::Triggered);
    }

    #[test]
    fn scrolling_out_and_back_does_not_rearm() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(0.5), TriggerDecision::Fire);
        assert_eq!(trigger.observe(0.0), TriggerDecision::Hold);
        assert_eq!(trigger.observe(0.9), TriggerDecision::Hold);
    }

    #[test]
    fn fully_visible_fires() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(1.0), TriggerDecision::Fire);
    }

    #[test]
    fn nan_ratio_never_fires() {
        let mut trigger = RevealTrigger::new();
        assert_eq!(trigger.observe(f64::NAN), TriggerDecision::Hold);
        assert_eq!(trigger.state(), TriggerState::Waiting);
    }

    #[test]
    fn report_counter_tracks_every_observation() {
        let mut trigger = RevealTrigger::new();
        let _ = trigger.observe(0.0);
        let _ = trigger.observe(0.5);
        let _ = trigger.observe(0.5);
        assert_eq!(trigger.reports(), 3);
    }
}
