// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM class-list and inline-style plumbing.
//!
//! [`DomSink`] carries a [`ClassPlan`]'s writes onto a live
//! [`web_sys::Element`].
//!
//! [`ClassPlan`]: upwell_core::plan::ClassPlan

use upwell_core::backend::ClassSink;
use wasm_bindgen::JsCast as _;
use web_sys::{CssStyleDeclaration, Element, HtmlElement, SvgElement};

/// Applies [`ClassSink`] writes to a DOM element.
///
/// Class additions go through the element's `classList`, which already
/// ignores duplicates. Property writes go to the inline style; both HTML
/// and SVG elements carry one, but under different interface types, so the
/// sink casts to whichever fits. Stroke reveals in particular target SVG
/// elements.
pub struct DomSink {
    element: Element,
}

impl core::fmt::Debug for DomSink {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomSink")
            .field("element", &"Element")
            .finish()
    }
}

impl DomSink {
    /// Creates a sink writing to `element`.
    #[must_use]
    pub fn new(element: Element) -> Self {
        Self { element }
    }

    /// Returns the element this sink writes to.
    #[must_use]
    pub fn element(&self) -> &Element {
        &self.element
    }

    /// Returns the element's inline style, if its kind carries one.
    fn style(&self) -> Option<CssStyleDeclaration> {
        if let Some(html) = self.element.dyn_ref::<HtmlElement>() {
            Some(html.style())
        } else if let Some(svg) = self.element.dyn_ref::<SvgElement>() {
            Some(svg.style())
        } else {
            None
        }
    }
}

impl ClassSink for DomSink {
    fn add_class(&mut self, class: &str) {
        let _ = self.element.class_list().add_1(class);
    }

    fn set_property(&mut self, name: &str, value: &str) {
        if let Some(style) = self.style() {
            let _ = style.set_property(name, value);
        }
    }
}
