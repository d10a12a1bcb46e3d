// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic class-plan composition.
//!
//! [`ClassPlan::new`] turns an [`AnimationConfig`] into the exact set of
//! writes a backend must perform: classes applied at bind time (in order),
//! the primary class to withhold for a deferred reveal, and the optional
//! stroke custom-property value. Composition is pure, so everything here is
//! testable against an in-memory [`ClassSink`].

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::backend::ClassSink;
use crate::class::{FAST_CLASS, REVERSE_CLASS, STROKE_PROPERTY};
use crate::config::AnimationConfig;

/// The writes composed from one [`AnimationConfig`].
///
/// Exactly one primary class exists per plan: in
/// [`immediate`](Self::immediate) for direct application, or in
/// [`deferred`](Self::deferred) when the reveal waits for visibility.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassPlan {
    /// Classes to add at bind time, in application order.
    pub immediate: Vec<&'static str>,
    /// The primary class withheld until the reveal trigger fires.
    pub deferred: Option<&'static str>,
    /// Value for [`STROKE_PROPERTY`], when a stroke reveal is active.
    pub stroke_value: Option<String>,
}

impl ClassPlan {
    /// Composes the plan for `config`.
    ///
    /// Application order is primary class, reverse modifier, fast modifier,
    /// transform-origin class; absent options contribute nothing. With
    /// `trigger_on_visible` set, the primary class moves to
    /// [`deferred`](Self::deferred) and the modifiers stay immediate, so a
    /// deferred element carries its timing/direction classes from the start.
    #[must_use]
    pub fn new(config: &AnimationConfig) -> Self {
        let primary = config.kind.class_name();
        let mut immediate = Vec::new();
        let mut deferred = None;

        if config.trigger_on_visible {
            deferred = Some(primary);
        } else {
            immediate.push(primary);
        }
        if config.reverse {
            immediate.push(REVERSE_CLASS);
        }
        if config.fast {
            immediate.push(FAST_CLASS);
        }
        if let Some(origin) = config.origin {
            immediate.push(origin.class_name());
        }

        Self {
            immediate,
            deferred,
            stroke_value: stroke_value(config),
        }
    }

    /// Performs the bind-time writes on `sink`: the immediate classes in
    /// order, then the stroke property. The deferred class (if any) is not
    /// touched; that write belongs to the trigger.
    pub fn apply_immediate(&self, sink: &mut dyn ClassSink) {
        for class in &self.immediate {
            sink.add_class(class);
        }
        if let Some(value) = &self.stroke_value {
            sink.set_property(STROKE_PROPERTY, value);
        }
    }

    /// Returns `true` if the primary class waits on a visibility trigger.
    #[must_use]
    pub fn is_deferred(&self) -> bool {
        self.deferred.is_some()
    }
}

/// Computes the stroke property value, if one should be written.
///
/// Requires `stroke_reveal` plus a usable length. A zero or NaN length is
/// treated as absent.
fn stroke_value(config: &AnimationConfig) -> Option<String> {
    if !config.stroke_reveal {
        return None;
    }
    match config.stroke_length {
        Some(len) if len != 0.0 && !len.is_nan() => Some(format!("{len}")),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::{ANIMATION_CLASS_PREFIX, AnimationKind, ORIGIN_CLASS_PREFIX, TransformOrigin};
    use alloc::string::ToString;
    use alloc::vec;

    /// In-memory sink that records every write in arrival order.
    #[derive(Default)]
    struct RecordingSink {
        classes: Vec<String>,
        properties: Vec<(String, String)>,
    }

    impl ClassSink for RecordingSink {
        fn add_class(&mut self, class: &str) {
            self.classes.push(class.to_string());
        }

        fn set_property(&mut self, name: &str, value: &str) {
            self.properties.push((name.to_string(), value.to_string()));
        }
    }

    fn applied(config: &AnimationConfig) -> RecordingSink {
        let mut sink = RecordingSink::default();
        ClassPlan::new(config).apply_immediate(&mut sink);
        sink
    }

    #[test]
    fn every_kind_yields_exactly_one_primary_class_immediately() {
        for kind in AnimationKind::ALL {
            let sink = applied(&AnimationConfig::new(kind));
            assert_eq!(sink.classes, vec![kind.class_name().to_string()]);
            assert!(sink.properties.is_empty());
        }
    }

    #[test]
    fn deferred_plan_withholds_the_primary_class() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.trigger_on_visible = true;

        let plan = ClassPlan::new(&config);
        assert!(plan.is_deferred());
        assert_eq!(plan.deferred, Some("uk-anmt-fade"));

        let mut sink = RecordingSink::default();
        plan.apply_immediate(&mut sink);
        assert!(
            sink.classes.is_empty(),
            "no class may appear before the trigger fires"
        );
    }

    #[test]
    fn modifiers_absent_by_default() {
        for kind in AnimationKind::ALL {
            let sink = applied(&AnimationConfig::new(kind));
            assert!(!sink.classes.contains(&REVERSE_CLASS.to_string()));
            assert!(!sink.classes.contains(&FAST_CLASS.to_string()));
        }
    }

    #[test]
    fn reverse_adds_its_modifier_for_any_kind() {
        for kind in AnimationKind::ALL {
            let mut config = AnimationConfig::new(kind);
            config.reverse = true;
            let sink = applied(&config);
            assert_eq!(
                sink.classes,
                vec![kind.class_name().to_string(), REVERSE_CLASS.to_string()]
            );
        }
    }

    #[test]
    fn fast_adds_its_modifier_for_any_kind() {
        let mut config = AnimationConfig::new(AnimationKind::SlideLeft);
        config.fast = true;
        let sink = applied(&config);
        assert_eq!(
            sink.classes,
            vec!["uk-anmt-slide-left".to_string(), FAST_CLASS.to_string()]
        );
    }

    #[test]
    fn modifiers_stay_immediate_under_deferral() {
        let mut config = AnimationConfig::new(AnimationKind::ScaleUp);
        config.reverse = true;
        config.fast = true;
        config.trigger_on_visible = true;

        let sink = applied(&config);
        // The primary class is withheld; the modifiers are not.
        assert_eq!(
            sink.classes,
            vec![REVERSE_CLASS.to_string(), FAST_CLASS.to_string()]
        );
    }

    #[test]
    fn origin_present_adds_the_matching_class() {
        for origin in TransformOrigin::ALL {
            let mut config = AnimationConfig::new(AnimationKind::ScaleDown);
            config.origin = Some(origin);
            let sink = applied(&config);
            assert!(sink.classes.contains(&origin.class_name().to_string()));
        }
    }

    #[test]
    fn origin_absent_adds_no_origin_class() {
        let sink = applied(&AnimationConfig::new(AnimationKind::ScaleDown));
        assert!(
            !sink
                .classes
                .iter()
                .any(|c| c.starts_with(ORIGIN_CLASS_PREFIX))
        );
    }

    #[test]
    fn application_order_is_primary_modifiers_origin() {
        let mut config = AnimationConfig::new(AnimationKind::ScaleUp);
        config.reverse = true;
        config.fast = true;
        config.origin = Some(TransformOrigin::BottomRight);

        let sink = applied(&config);
        assert_eq!(
            sink.classes,
            vec![
                "uk-anmt-scale-up".to_string(),
                REVERSE_CLASS.to_string(),
                FAST_CLASS.to_string(),
                "uk-transform-origin-bottom-right".to_string(),
            ]
        );
    }

    #[test]
    fn stroke_reveal_with_length_sets_the_property() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.stroke_reveal = true;
        config.stroke_length = Some(42.0);

        let sink = applied(&config);
        assert_eq!(
            sink.properties,
            vec![(STROKE_PROPERTY.to_string(), "42".to_string())]
        );
    }

    #[test]
    fn fractional_stroke_length_keeps_its_decimal_form() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.stroke_reveal = true;
        config.stroke_length = Some(133.7);

        let sink = applied(&config);
        assert_eq!(sink.properties[0].1, "133.7");
    }

    #[test]
    fn stroke_reveal_without_length_sets_nothing() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.stroke_reveal = true;

        let sink = applied(&config);
        assert!(sink.properties.is_empty());
    }

    #[test]
    fn stroke_length_without_reveal_sets_nothing() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.stroke_length = Some(42.0);

        let sink = applied(&config);
        assert!(sink.properties.is_empty());
    }

    #[test]
    fn zero_or_nan_stroke_length_is_treated_as_absent() {
        for len in [0.0, -0.0, f64::NAN] {
            let mut config = AnimationConfig::new(AnimationKind::Fade);
            config.stroke_reveal = true;
            config.stroke_length = Some(len);

            let sink = applied(&config);
            assert!(sink.properties.is_empty(), "length {len} must not be set");
        }
    }

    #[test]
    fn stroke_is_independent_of_deferral() {
        let mut config = AnimationConfig::new(AnimationKind::Fade);
        config.trigger_on_visible = true;
        config.stroke_reveal = true;
        config.stroke_length = Some(880.0);

        let sink = applied(&config);
        assert!(sink.classes.is_empty());
        assert_eq!(sink.properties[0].1, "880");
    }

    #[test]
    fn every_prefixed_class_comes_from_the_vocabulary() {
        let mut config = AnimationConfig::new(AnimationKind::Kenburns);
        config.reverse = true;
        config.origin = Some(TransformOrigin::TopLeft);

        let sink = applied(&config);
        for class in &sink.classes {
            assert!(
                class.starts_with(ANIMATION_CLASS_PREFIX) || class.starts_with(ORIGIN_CLASS_PREFIX),
                "unexpected class {class}"
            );
        }
    }
}
