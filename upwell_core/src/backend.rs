// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend contract for platform integrations.
//!
//! Upwell splits platform-specific work into *backend* crates. Each backend
//! provides the following pieces:
//!
//! - **Class sink** — Implements the [`ClassSink`] trait to carry composed
//!   class-list and style-property writes onto a concrete presentation
//!   surface (e.g. a DOM element).
//!
//! - **Visibility watch** — Wraps the platform's visibility-reporting
//!   mechanism (e.g. `IntersectionObserver`) and feeds visible-area ratios
//!   into a [`RevealTrigger`]. This is backend-specific and not abstracted
//!   by a trait because registration and lifecycle differ per platform.
//!
//! - **Locator** — A selector-based lookup that binds a config to the first
//!   matching element, or reports "no match" without constructing anything.
//!
//! # Crate boundaries
//!
//! `upwell_core` owns the class vocabulary, config normalization, plan
//! composition, the trigger state machine, and this contract module.
//! Backend crates depend on `upwell_core` and provide platform glue. Page
//! code depends on the backend and hands it configs.
//!
//! [`RevealTrigger`]: crate::trigger::RevealTrigger

/// Receives composed class and style-property writes.
///
/// Both the DOM-backed sink and in-memory test doubles implement this trait,
/// so plan application is testable without a browser.
///
/// The contract is additive: there is no removal operation. A deferred
/// primary class is *withheld* by the plan rather than added and removed,
/// so a sink never has to take anything back.
///
/// # Application sketch
///
/// ```rust,ignore
/// let plan = ClassPlan::new(&config);
/// plan.apply_immediate(&mut sink);
/// if let Some(primary) = plan.deferred {
///     // Register a visibility watch; on TriggerDecision::Fire:
///     sink.add_class(primary);
/// }
/// ```
pub trait ClassSink {
    /// Adds one class to the surface's class list.
    ///
    /// Adding a class that is already present must be a no-op, matching
    /// class-list semantics on every target platform.
    fn add_class(&mut self, class: &str);

    /// Sets one inline style property (custom properties included).
    fn set_property(&mut self, name: &str, value: &str);
}
