// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for upwell.
//!
//! This crate provides integration with browser APIs:
//!
//! - [`Animation`]: binds an [`AnimationConfig`] to a DOM element
//! - [`VisibilityWatch`]: one-shot `IntersectionObserver` wrapper for
//!   scroll-deferred reveals
//! - [`DomSink`]: class-list and inline-style writes
//!
//! [`AnimationConfig`]: upwell_core::config::AnimationConfig

#![no_std]

extern crate alloc;

mod animation;
mod sink;
mod watch;

pub use animation::Animation;
pub use sink::DomSink;
pub use upwell_core::backend::ClassSink;
pub use watch::VisibilityWatch;

use upwell_core::config::AnimationConfig;
use wasm_bindgen::JsValue;

/// Binds `config` to the first element matching `selector` in the global
/// document.
///
/// Convenience over [`Animation::for_selector`] for page-initialization
/// code; returns `Ok(None)` when nothing matches.
pub fn animate(selector: &str, config: &AnimationConfig) -> Result<Option<Animation>, JsValue> {
    let document = web_sys::window()
        .expect("no global window")
        .document()
        .expect("no document on window");
    Animation::for_selector(&document, selector, config)
}
