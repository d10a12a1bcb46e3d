// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! `IntersectionObserver` visibility watch.
//!
//! [`VisibilityWatch`] defers one class application until its element is
//! sufficiently visible, using the browser's [`IntersectionObserver`][mdn]
//! API. The observer is configured with [`VISIBILITY_THRESHOLD`], so the
//! browser reports each crossing of that boundary; every report's
//! intersection ratio feeds the one-shot [`RevealTrigger`], and the first
//! [`Fire`] decision applies the class and unobserves the element.
//!
//! Dropping the watch cancels a pending reveal. Call
//! [`forget`](VisibilityWatch::forget) to leave it registered for the
//! page's lifetime instead.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/IntersectionObserver
//! [`RevealTrigger`]: upwell_core::trigger::RevealTrigger
//! [`Fire`]: upwell_core::trigger::TriggerDecision::Fire

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::{Cell, RefCell};

use js_sys::Array;
use upwell_core::backend::ClassSink as _;
use upwell_core::trace::{
    TraceSink, TriggerFiredEvent, VisibilityReportEvent, WatchRegisteredEvent, WatchReleasedEvent,
};
use upwell_core::trigger::{RevealTrigger, TriggerDecision, VISIBILITY_THRESHOLD};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::sink::DomSink;

/// A one-shot visibility watch that adds a class when its element first
/// becomes visible enough.
///
/// Create with [`VisibilityWatch::new`], then call [`start`](Self::start)
/// to register with the browser. The watch deregisters itself after firing
/// once; [`cancel`](Self::cancel) (or dropping the handle) tears it down
/// earlier.
pub struct VisibilityWatch {
    inner: Rc<WatchInner>,
}

type WatchClosure = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct WatchInner {
    /// The JS closure registered as the observer callback.
    ///
    /// Stored in its own `RefCell` so `start()` can set it once and
    /// `cancel()` can drop it without touching the other state.
    closure: RefCell<Option<WatchClosure>>,

    /// Sink writing to the watched element.
    sink: RefCell<DomSink>,

    /// The class applied when the trigger fires.
    class: &'static str,

    /// One-shot trigger fed by intersection ratios.
    trigger: RefCell<RevealTrigger>,

    /// The live observer while registered.
    observer: RefCell<Option<IntersectionObserver>>,

    /// Optional instrumentation sink.
    trace: RefCell<Option<Box<dyn TraceSink>>>,

    /// Whether the element is currently being observed.
    watching: Cell<bool>,
}

impl WatchInner {
    /// Runs `f` against the trace sink, if one is attached.
    fn emit(&self, f: impl FnOnce(&mut dyn TraceSink)) {
        if let Some(sink) = self.trace.borrow_mut().as_deref_mut() {
            f(sink);
        }
    }
}

impl VisibilityWatch {
    /// Creates a watch for `element` that is **not yet registered**.
    ///
    /// Once [`start`](Self::start) is called, the first intersection report
    /// at or above [`VISIBILITY_THRESHOLD`] adds `class` to the element.
    #[must_use]
    pub fn new(element: &Element, class: &'static str) -> Self {
        Self::build(element, class, None)
    }

    /// Like [`new`](Self::new), with a [`TraceSink`] receiving lifecycle
    /// events.
    #[must_use]
    pub fn with_sink(element: &Element, class: &'static str, trace: Box<dyn TraceSink>) -> Self {
        Self::build(element, class, Some(trace))
    }

    fn build(element: &Element, class: &'static str, trace: Option<Box<dyn TraceSink>>) -> Self {
        Self {
            inner: Rc::new(WatchInner {
                closure: RefCell::new(None),
                sink: RefCell::new(DomSink::new(element.clone())),
                class,
                trigger: RefCell::new(RevealTrigger::new()),
                observer: RefCell::new(None),
                trace: RefCell::new(trace),
                watching: Cell::new(false),
            }),
        }
    }

    /// Registers the watch with the browser.
    ///
    /// No-op if already watching or already fired.
    pub fn start(&self) {
        if self.inner.watching.get() || self.inner.trigger.borrow().has_fired() {
            return;
        }
        self.inner.watching.set(true);

        let inner = Rc::clone(&self.inner);
        let closure = Closure::wrap(Box::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                        continue;
                    };
                    let ratio = entry.intersection_ratio();
                    let decision = inner.trigger.borrow_mut().observe(ratio);
                    let reports = inner.trigger.borrow().reports();
                    inner.emit(|t| {
                        t.on_visibility_report(&VisibilityReportEvent {
                            ratio,
                            report_index: reports,
                        });
                    });

                    match decision {
                        TriggerDecision::Hold => {}
                        TriggerDecision::Fire => {
                            inner.sink.borrow_mut().add_class(inner.class);
                            // One-shot: stop observing before anything else
                            // can scroll the element back out and in.
                            observer.unobserve(inner.sink.borrow().element());
                            inner.watching.set(false);
                            inner.emit(|t| {
                                t.on_trigger_fired(&TriggerFiredEvent {
                                    class: inner.class,
                                    reports,
                                });
                            });
                        }
                    }
                }
            },
        ) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from(VISIBILITY_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &options)
                .expect("IntersectionObserver construction failed");
        observer.observe(self.inner.sink.borrow().element());

        *self.inner.closure.borrow_mut() = Some(closure);
        *self.inner.observer.borrow_mut() = Some(observer);

        self.inner.emit(|t| {
            t.on_watch_registered(&WatchRegisteredEvent {
                class: self.inner.class,
                threshold: VISIBILITY_THRESHOLD,
            });
        });
    }

    /// Tears the watch down: disconnects the observer and drops the JS
    /// closure. A reveal that has not fired yet never will.
    ///
    /// Called automatically on drop.
    pub fn cancel(&self) {
        if let Some(observer) = self.inner.observer.borrow_mut().take() {
            observer.disconnect();
        }
        self.inner.watching.set(false);

        // Drop the JS closure so it doesn't leak.
        let closure = self.inner.closure.borrow_mut().take();
        if closure.is_some() {
            let (fired, reports) = {
                let trigger = self.inner.trigger.borrow();
                (trigger.has_fired(), trigger.reports())
            };
            self.inner
                .emit(|t| t.on_watch_released(&WatchReleasedEvent { fired, reports }));
        }
    }

    /// Leaks the watch so it stays registered for the page's lifetime.
    ///
    /// Fire-and-forget pages use this instead of holding the handle; the
    /// reveal still deregisters itself after firing once.
    pub fn forget(self) {
        core::mem::forget(self);
    }

    /// Returns `true` while the element is being observed.
    #[must_use]
    pub fn is_watching(&self) -> bool {
        self.inner.watching.get()
    }

    /// Returns `true` once the deferred class has been applied.
    #[must_use]
    pub fn has_fired(&self) -> bool {
        self.inner.trigger.borrow().has_fired()
    }
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.cancel();
    }
}

impl core::fmt::Debug for VisibilityWatch {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("VisibilityWatch")
            .field("class", &self.inner.class)
            .field("watching", &self.inner.watching.get())
            .field("fired", &self.inner.trigger.borrow().has_fired())
            .finish()
    }
}
