// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-triggered entrance animations composed entirely from Rust.
//!
//! The page is built from code: a hero that animates immediately, one
//! scroll-deferred card per animation kind, and an SVG stroke reveal driven
//! by the `--uk-anmt-stroke` custom property. The `uk-anmt-*` classes only
//! name animations; the CSS that defines them is injected by this demo, not
//! by the library.
//!
//! Build with: `wasm-pack build --target web demos/web_reveal`
//! Then serve `demos/web_reveal/` and open `index.html`.

#![no_std]
#![cfg_attr(
    not(target_arch = "wasm32"),
    allow(dead_code, reason = "this crate only runs in the browser")
)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::format;

use upwell_backend_web::{Animation, animate};
use upwell_core::class::{AnimationKind, TransformOrigin};
use upwell_core::config::AnimationConfig;
use upwell_core::trace::{
    TraceSink, TriggerFiredEvent, VisibilityReportEvent, WatchRegisteredEvent, WatchReleasedEvent,
};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, SvgGeometryElement, console};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const WAVE_PATH: &str = "M 40 120 C 140 20, 240 200, 340 90 S 520 40, 560 140";
/// Used when the path geometry cannot be measured; generous on purpose so
/// the dash still covers the whole stroke.
const FALLBACK_PATH_LENGTH: f64 = 700.0;

/// Everything the `uk-anmt-*` vocabulary means on this page. The library
/// composes class names and sets `--uk-anmt-stroke`; what those names do
/// is entirely the stylesheet's business.
const STYLESHEET: &str = r"
.uk-anmt-fade { animation: uk-anmt-fade 0.8s ease-out both; }
@keyframes uk-anmt-fade { from { opacity: 0; } to { opacity: 1; } }

.uk-anmt-scale-up { animation: uk-anmt-scale-up 0.8s ease-out both; }
@keyframes uk-anmt-scale-up {
  from { opacity: 0; transform: scale(0.6); }
  to { opacity: 1; transform: scale(1); }
}

.uk-anmt-scale-down { animation: uk-anmt-scale-down 0.8s ease-out both; }
@keyframes uk-anmt-scale-down {
  from { opacity: 0; transform: scale(1.4); }
  to { opacity: 1; transform: scale(1); }
}

.uk-anmt-slide-top { animation: uk-anmt-slide-top 0.8s ease-out both; }
@keyframes uk-anmt-slide-top {
  from { opacity: 0; transform: translateY(-40px); }
  to { opacity: 1; transform: translateY(0); }
}

.uk-anmt-slide-bottom { animation: uk-anmt-slide-bottom 0.8s ease-out both; }
@keyframes uk-anmt-slide-bottom {
  from { opacity: 0; transform: translateY(40px); }
  to { opacity: 1; transform: translateY(0); }
}

.uk-anmt-slide-left { animation: uk-anmt-slide-left 0.8s ease-out both; }
@keyframes uk-anmt-slide-left {
  from { opacity: 0; transform: translateX(-40px); }
  to { opacity: 1; transform: translateX(0); }
}

.uk-anmt-slide-right { animation: uk-anmt-slide-right 0.8s ease-out both; }
@keyframes uk-anmt-slide-right {
  from { opacity: 0; transform: translateX(40px); }
  to { opacity: 1; transform: translateX(0); }
}

.uk-anmt-kenburns { animation: uk-anmt-kenburns 12s ease-in-out both alternate infinite; }
@keyframes uk-anmt-kenburns { from { transform: scale(1); } to { transform: scale(1.2); } }

.uk-anmt-reverse { animation-direction: reverse; }
.uk-anmt-fast { animation-duration: 0.3s; }

.uk-transform-origin-top-left { transform-origin: 0 0; }
.uk-transform-origin-top-center { transform-origin: 50% 0; }
.uk-transform-origin-top-right { transform-origin: 100% 0; }
.uk-transform-origin-center-left { transform-origin: 0 50%; }
.uk-transform-origin-center-right { transform-origin: 100% 50%; }
.uk-transform-origin-bottom-left { transform-origin: 0 100%; }
.uk-transform-origin-bottom-center { transform-origin: 50% 100%; }
.uk-transform-origin-bottom-right { transform-origin: 100% 100%; }
.uk-transform-origin-top { transform-origin: 50% 0; }
.uk-transform-origin-bottom { transform-origin: 50% 100%; }
.uk-transform-origin-left { transform-origin: 0 50%; }
.uk-transform-origin-right { transform-origin: 100% 50%; }

.stroke-path {
  stroke-dasharray: var(--uk-anmt-stroke);
  stroke-dashoffset: var(--uk-anmt-stroke);
}
.stroke-path.uk-anmt-fade { animation: draw-stroke 2.4s ease-in-out both; }
@keyframes draw-stroke { to { stroke-dashoffset: 0; } }
";

struct CardSpec {
    title: &'static str,
    blurb: &'static str,
    kind: AnimationKind,
    reverse: bool,
    fast: bool,
    origin: Option<TransformOrigin>,
}

/// One scroll-deferred card per animation kind, with the modifier and
/// origin options spread across them.
const CARDS: [CardSpec; 8] = [
    CardSpec {
        title: "fade",
        blurb: "Opacity only; the gentlest entrance.",
        kind: AnimationKind::Fade,
        reverse: false,
        fast: false,
        origin: None,
    },
    CardSpec {
        title: "scale-up",
        blurb: "Grows from 60%, anchored to its bottom edge.",
        kind: AnimationKind::ScaleUp,
        reverse: false,
        fast: false,
        origin: Some(TransformOrigin::BottomCenter),
    },
    CardSpec {
        title: "scale-down",
        blurb: "Shrinks from 140%, anchored top-left.",
        kind: AnimationKind::ScaleDown,
        reverse: false,
        fast: false,
        origin: Some(TransformOrigin::TopLeft),
    },
    CardSpec {
        title: "slide-top",
        blurb: "Drops in from above at the fast duration.",
        kind: AnimationKind::SlideTop,
        reverse: false,
        fast: true,
        origin: None,
    },
    CardSpec {
        title: "slide-bottom",
        blurb: "Rises from below.",
        kind: AnimationKind::SlideBottom,
        reverse: false,
        fast: false,
        origin: None,
    },
    CardSpec {
        title: "slide-left",
        blurb: "Reversed, so the entrance plays backwards.",
        kind: AnimationKind::SlideLeft,
        reverse: true,
        fast: false,
        origin: None,
    },
    CardSpec {
        title: "slide-right",
        blurb: "Fast and reversed, composed together.",
        kind: AnimationKind::SlideRight,
        reverse: true,
        fast: true,
        origin: None,
    },
    CardSpec {
        title: "kenburns",
        blurb: "Slow pan-zoom, anchored top-right.",
        kind: AnimationKind::Kenburns,
        reverse: false,
        fast: false,
        origin: Some(TransformOrigin::TopRight),
    },
];

const CARD_ACCENTS: [&str; 4] = ["#89b4fa", "#a6e3a1", "#f9e2af", "#f38ba8"];

/// Forwards watch lifecycle events to the browser console.
struct ConsoleSink {
    label: &'static str,
}

impl TraceSink for ConsoleSink {
    fn on_watch_registered(&mut self, e: &WatchRegisteredEvent) {
        log(&format!(
            "[{}] watching for `{}` at threshold {}",
            self.label, e.class, e.threshold
        ));
    }

    fn on_visibility_report(&mut self, e: &VisibilityReportEvent) {
        log(&format!(
            "[{}] report #{}: intersection ratio {:.2}",
            self.label, e.report_index, e.ratio
        ));
    }

    fn on_trigger_fired(&mut self, e: &TriggerFiredEvent) {
        log(&format!(
            "[{}] fired `{}` after {} report(s)",
            self.label, e.class, e.reports
        ));
    }

    fn on_watch_released(&mut self, e: &WatchReleasedEvent) {
        log(&format!(
            "[{}] released (fired: {}, reports: {})",
            self.label, e.fired, e.reports
        ));
    }
}

fn log(message: &str) {
    console::log_1(&JsValue::from_str(message));
}

/// Entry point for the web-reveal demo.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() -> Result<(), JsValue> {
    let document = web_sys::window()
        .expect("no global window")
        .document()
        .expect("no document on window");

    install_stylesheet(&document)?;
    let body = document.body().expect("no body on document");
    let style = body.style();
    style.set_property("margin", "0")?;
    style.set_property("background", "#1e1e2e")?;
    style.set_property("color", "#cdd6f4")?;
    style.set_property("font-family", "system-ui, sans-serif")?;

    build_hero(&document, &body)?;
    for (index, spec) in CARDS.iter().enumerate() {
        build_card(&document, &body, spec, CARD_ACCENTS[index % CARD_ACCENTS.len()])?;
    }
    build_stroke_panel(&document, &body)?;

    Ok(())
}

fn install_stylesheet(document: &Document) -> Result<(), JsValue> {
    let style = document.create_element("style")?;
    style.set_text_content(Some(STYLESHEET));
    document
        .head()
        .expect("no head on document")
        .append_child(&style)?;
    Ok(())
}

/// A full-width flex panel that centers its content. Tall enough that
/// scrolling brings one card into view at a time.
fn panel(document: &Document, min_height: &str) -> Result<HtmlElement, JsValue> {
    let panel: HtmlElement = document.create_element("section")?.unchecked_into();
    let s = panel.style();
    s.set_property("min-height", min_height)?;
    s.set_property("display", "flex")?;
    s.set_property("flex-direction", "column")?;
    s.set_property("align-items", "center")?;
    s.set_property("justify-content", "center")?;
    Ok(panel)
}

fn build_hero(document: &Document, body: &HtmlElement) -> Result<(), JsValue> {
    let hero = panel(document, "100vh")?;

    let headline: HtmlElement = document.create_element("h1")?.unchecked_into();
    headline.set_id("headline");
    headline.set_text_content(Some("upwell"));
    let hs = headline.style();
    hs.set_property("font-size", "4rem")?;
    hs.set_property("margin", "0")?;
    hero.append_child(&headline)?;

    let lede: HtmlElement = document.create_element("p")?.unchecked_into();
    lede.set_text_content(Some("Scroll to reveal one entrance animation per kind."));
    lede.style().set_property("color", "#a6adc8")?;
    hero.append_child(&lede)?;

    body.append_child(&hero)?;

    // The headline goes through the selector entry point; everything else
    // animates its element directly. Handles are forgotten because the
    // page has no teardown and dropping one would cancel its trigger.
    let banner = AnimationConfig::new(AnimationKind::ScaleUp);
    if let Some(animation) = animate("#headline", &banner)? {
        animation.forget();
    }

    let below = AnimationConfig {
        fast: true,
        ..AnimationConfig::new(AnimationKind::SlideBottom)
    };
    Animation::new(&lede, &below).forget();
    Ok(())
}

fn build_card(
    document: &Document,
    body: &HtmlElement,
    spec: &CardSpec,
    accent: &str,
) -> Result<(), JsValue> {
    let outer = panel(document, "85vh")?;

    let card: HtmlElement = document.create_element("div")?.unchecked_into();
    let s = card.style();
    s.set_property("width", "20rem")?;
    s.set_property("padding", "2rem")?;
    s.set_property("border-radius", "12px")?;
    s.set_property("background", "#313244")?;
    s.set_property("border-top", &format!("4px solid {accent}"))?;

    let title: HtmlElement = document.create_element("h2")?.unchecked_into();
    title.set_text_content(Some(spec.title));
    let ts = title.style();
    ts.set_property("margin", "0 0 0.5rem 0")?;
    ts.set_property("color", accent)?;
    card.append_child(&title)?;

    let blurb: HtmlElement = document.create_element("p")?.unchecked_into();
    blurb.set_text_content(Some(spec.blurb));
    let bs = blurb.style();
    bs.set_property("margin", "0")?;
    bs.set_property("color", "#a6adc8")?;
    card.append_child(&blurb)?;

    outer.append_child(&card)?;
    body.append_child(&outer)?;

    let config = AnimationConfig {
        reverse: spec.reverse,
        fast: spec.fast,
        origin: spec.origin,
        trigger_on_visible: true,
        ..AnimationConfig::new(spec.kind)
    };
    Animation::new(&card, &config).forget();
    Ok(())
}

fn build_stroke_panel(document: &Document, body: &HtmlElement) -> Result<(), JsValue> {
    let outer = panel(document, "90vh")?;

    let svg = document.create_element_ns(Some(SVG_NS), "svg")?;
    svg.set_attribute("viewBox", "0 0 600 200")?;
    svg.set_attribute("width", "600")?;
    svg.set_attribute("height", "200")?;

    let path = document.create_element_ns(Some(SVG_NS), "path")?;
    path.set_attribute("d", WAVE_PATH)?;
    path.set_attribute("fill", "none")?;
    path.set_attribute("stroke", "#89b4fa")?;
    path.set_attribute("stroke-width", "5")?;
    path.set_attribute("stroke-linecap", "round")?;
    path.set_attribute("class", "stroke-path")?;
    svg.append_child(&path)?;
    outer.append_child(&svg)?;
    body.append_child(&outer)?;

    // Measure after insertion so the geometry is available.
    let length = path
        .dyn_ref::<SvgGeometryElement>()
        .map_or(FALLBACK_PATH_LENGTH, |p| f64::from(p.get_total_length()));

    let config = AnimationConfig {
        trigger_on_visible: true,
        stroke_reveal: true,
        stroke_length: Some(length),
        ..AnimationConfig::new(AnimationKind::Fade)
    };
    Animation::with_trace(&path, &config, Box::new(ConsoleSink { label: "stroke" })).forget();
    Ok(())
}
