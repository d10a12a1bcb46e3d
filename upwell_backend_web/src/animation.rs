// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding a config to a DOM element.
//!
//! [`Animation`] is the handle page code holds (or forgets). Construction
//! is synchronous and side-effecting: the immediate classes and the stroke
//! property land on the element before the constructor returns, and a
//! deferred reveal registers its [`VisibilityWatch`] right away.

use alloc::boxed::Box;

use upwell_core::config::AnimationConfig;
use upwell_core::plan::ClassPlan;
use upwell_core::trace::TraceSink;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::sink::DomSink;
use crate::watch::VisibilityWatch;

/// A configured animation bound to one element.
///
/// The handle owns the deferred-reveal watch, if the config asked for one:
/// dropping the handle cancels a reveal that has not fired yet, and
/// [`forget`](Self::forget) opts into page-lifetime persistence instead.
/// Multiple handles may bind the same element; each manages its own watch.
#[derive(Debug)]
pub struct Animation {
    sink: DomSink,
    watch: Option<VisibilityWatch>,
}

impl Animation {
    /// Binds `config` to `element`.
    ///
    /// Applies the composed immediate classes (and the stroke property) to
    /// the element now. With `trigger_on_visible` set, the primary class is
    /// withheld and a visibility watch is registered instead; it adds the
    /// class the first time at least
    /// [`VISIBILITY_THRESHOLD`](upwell_core::trigger::VISIBILITY_THRESHOLD)
    /// of the element is inside the viewport.
    #[must_use]
    pub fn new(element: &Element, config: &AnimationConfig) -> Self {
        Self::build(element, config, None)
    }

    /// Like [`new`](Self::new), with a [`TraceSink`] receiving the watch's
    /// lifecycle events.
    ///
    /// Only deferred reveals produce events; for an immediate config the
    /// sink is dropped unused.
    #[must_use]
    pub fn with_trace(
        element: &Element,
        config: &AnimationConfig,
        trace: Box<dyn TraceSink>,
    ) -> Self {
        Self::build(element, config, Some(trace))
    }

    /// Binds `config` to the first element matching `selector`.
    ///
    /// Returns `Ok(None)` when nothing matches; that is an ordinary
    /// outcome, not an error, and nothing is written. An unparsable
    /// selector surfaces the environment's error.
    pub fn for_selector(
        document: &Document,
        selector: &str,
        config: &AnimationConfig,
    ) -> Result<Option<Self>, JsValue> {
        let Some(element) = document.query_selector(selector)? else {
            return Ok(None);
        };
        Ok(Some(Self::new(&element, config)))
    }

    fn build(
        element: &Element,
        config: &AnimationConfig,
        trace: Option<Box<dyn TraceSink>>,
    ) -> Self {
        let plan = ClassPlan::new(config);
        let mut sink = DomSink::new(element.clone());
        plan.apply_immediate(&mut sink);

        let watch = plan.deferred.map(|class| {
            let watch = match trace {
                Some(trace) => VisibilityWatch::with_sink(element, class, trace),
                None => VisibilityWatch::new(element, class),
            };
            watch.start();
            watch
        });

        Self { sink, watch }
    }

    /// Returns the element this animation is bound to.
    #[must_use]
    pub fn element(&self) -> &Element {
        self.sink.element()
    }

    /// Returns `true` while a deferred reveal is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.watch.as_ref().is_some_and(VisibilityWatch::is_watching)
    }

    /// Cancels a pending deferred reveal.
    ///
    /// The classes already on the element stay; only the not-yet-applied
    /// primary class is abandoned. No-op for immediate animations and for
    /// reveals that already fired.
    pub fn cancel(&mut self) {
        if let Some(watch) = self.watch.take() {
            watch.cancel();
        }
    }

    /// Consumes the handle, leaving any pending watch registered for the
    /// page's lifetime.
    pub fn forget(mut self) {
        if let Some(watch) = self.watch.take() {
            watch.forget();
        }
    }
}
