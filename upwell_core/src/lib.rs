// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core class composition and trigger logic for scroll-revealed CSS
//! animations.
//!
//! `upwell_core` turns a declarative animation description into the exact
//! class-list and style-property writes a presentation surface needs, and
//! decides when a scroll-deferred reveal fires. It is `no_std` compatible
//! (with `alloc`) and contains no platform code; browser glue lives in
//! `upwell_backend_web`.
//!
//! # Architecture
//!
//! Binding a config to an element is one pass through the crate:
//!
//! ```text
//!   AnimationConfig ──► ClassPlan::new() ──► ClassPlan
//!                                               │
//!                        immediate classes ─────┤──► ClassSink
//!                                               │
//!                        deferred class ────────┘
//!                                               │
//!   visibility reports ──► RevealTrigger::observe()
//!                                               │
//!                        TriggerDecision::Fire ─┴──► ClassSink::add_class
//! ```
//!
//! **[`class`]** — The fixed CSS class vocabulary: animation kinds,
//! transform origins, modifier classes, and the stroke custom property.
//!
//! **[`config`]** — [`AnimationConfig`](config::AnimationConfig) with its
//! documented default table.
//!
//! **[`plan`]** — Pure composition of a config into ordered writes, with
//! deferral routing the primary class past bind time.
//!
//! **[`trigger`]** — The one-shot `Waiting → Triggered` state machine fed
//! by visibility reports.
//!
//! **[`backend`]** — The [`ClassSink`](backend::ClassSink) trait that
//! platform backends implement to receive the writes.
//!
//! **[`trace`]** — [`TraceSink`](trace::TraceSink) trait and event types
//! for watch-lifecycle instrumentation.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod class;
pub mod config;
pub mod plan;
pub mod trace;
pub mod trigger;
