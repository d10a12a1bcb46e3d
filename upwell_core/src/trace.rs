// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for deferred reveals.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that
//! watch instrumentation calls across a deferred reveal's lifecycle. All
//! method bodies default to no-ops, so implementing only the events you
//! care about is fine.
//!
//! Events fire a handful of times per element (registration, visibility
//! boundary crossings, the final fire or release), so backends dispatch
//! through a plain optional sink reference; there is no feature-gated
//! zero-overhead wrapper here.

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when a visibility watch is registered for an element.
#[derive(Clone, Copy, Debug)]
pub struct WatchRegisteredEvent {
    /// The primary class the watch will apply when it fires.
    pub class: &'static str,
    /// The visible-area ratio the trigger waits for.
    pub threshold: f64,
}

/// Emitted for each visibility report the watch receives.
#[derive(Clone, Copy, Debug)]
pub struct VisibilityReportEvent {
    /// Visible area as a 0.0–1.0 ratio.
    pub ratio: f64,
    /// 1-based index of this report within the watch's lifetime.
    pub report_index: u64,
}

/// Emitted when the trigger fires and the deferred class is applied.
#[derive(Clone, Copy, Debug)]
pub struct TriggerFiredEvent {
    /// The class that was just applied.
    pub class: &'static str,
    /// Total reports observed up to and including the firing one.
    pub reports: u64,
}

/// Emitted when a watch is released (cancelled or dropped).
#[derive(Clone, Copy, Debug)]
pub struct WatchReleasedEvent {
    /// Whether the trigger had fired before release.
    pub fired: bool,
    /// Total reports observed over the watch's lifetime.
    pub reports: u64,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a visibility watch.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when the watch registers with the platform's visibility
    /// mechanism.
    fn on_watch_registered(&mut self, e: &WatchRegisteredEvent) {
        _ = e;
    }

    /// Called for each visibility report, fired or not.
    fn on_visibility_report(&mut self, e: &VisibilityReportEvent) {
        _ = e;
    }

    /// Called when the trigger fires.
    fn on_trigger_fired(&mut self, e: &TriggerFiredEvent) {
        _ = e;
    }

    /// Called when the watch is released.
    fn on_watch_released(&mut self, e: &WatchReleasedEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_watch_registered(&WatchRegisteredEvent {
            class: "uk-anmt-fade",
            threshold: 0.1,
        });
        sink.on_visibility_report(&VisibilityReportEvent {
            ratio: 0.5,
            report_index: 1,
        });
        sink.on_trigger_fired(&TriggerFiredEvent {
            class: "uk-anmt-fade",
            reports: 1,
        });
        sink.on_watch_released(&WatchReleasedEvent {
            fired: true,
            reports: 1,
        });
    }

    #[test]
    fn partial_sink_overrides_only_what_it_needs() {
        #[derive(Default)]
        struct FireCounter {
            fired: u32,
        }

        impl TraceSink for FireCounter {
            fn on_trigger_fired(&mut self, _e: &TriggerFiredEvent) {
                self.fired += 1;
            }
        }

        let mut sink = FireCounter::default();
        sink.on_watch_registered(&WatchRegisteredEvent {
            class: "uk-anmt-fade",
            threshold: 0.1,
        });
        sink.on_trigger_fired(&TriggerFiredEvent {
            class: "uk-anmt-fade",
            reports: 3,
        });
        assert_eq!(sink.fired, 1);
    }
}
