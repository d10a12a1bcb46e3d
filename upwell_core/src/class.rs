// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS class vocabulary for reveal animations.
//!
//! Every visual treatment is expressed through a fixed set of class names:
//! a primary class per [`AnimationKind`] (`uk-anmt-` + kind literal), the
//! [`REVERSE_CLASS`] and [`FAST_CLASS`] modifiers, and one transform-origin
//! class per [`TransformOrigin`] (`uk-transform-origin-` + origin literal).
//! The classes only *name* the animations; the keyframes themselves live in
//! the page's stylesheet.

/// Prefix shared by the primary animation class and the modifier classes.
pub const ANIMATION_CLASS_PREFIX: &str = "uk-anmt-";

/// Prefix for transform-origin classes.
pub const ORIGIN_CLASS_PREFIX: &str = "uk-transform-origin-";

/// Modifier class that plays the animation backwards.
pub const REVERSE_CLASS: &str = "uk-anmt-reverse";

/// Modifier class that shortens the animation duration.
pub const FAST_CLASS: &str = "uk-anmt-fast";

/// Inline custom property carrying the SVG stroke length for stroke reveals.
///
/// The stylesheet's stroke keyframes read this to size `stroke-dasharray`.
pub const STROKE_PROPERTY: &str = "--uk-anmt-stroke";

/// The visual transition style a primary animation class selects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AnimationKind {
    /// Opacity ramp from transparent.
    Fade,
    /// Grow into place from slightly smaller.
    ScaleUp,
    /// Shrink into place from slightly larger.
    ScaleDown,
    /// Enter from above.
    SlideTop,
    /// Enter from below.
    SlideBottom,
    /// Enter from the left.
    SlideLeft,
    /// Enter from the right.
    SlideRight,
    /// Slow continuous pan/zoom (Ken Burns effect).
    Kenburns,
}

impl AnimationKind {
    /// All kinds, in declaration order.
    pub const ALL: [Self; 8] = [
        Self::Fade,
        Self::ScaleUp,
        Self::ScaleDown,
        Self::SlideTop,
        Self::SlideBottom,
        Self::SlideLeft,
        Self::SlideRight,
        Self::Kenburns,
    ];

    /// Returns the kind literal used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::ScaleUp => "scale-up",
            Self::ScaleDown => "scale-down",
            Self::SlideTop => "slide-top",
            Self::SlideBottom => "slide-bottom",
            Self::SlideLeft => "slide-left",
            Self::SlideRight => "slide-right",
            Self::Kenburns => "kenburns",
        }
    }

    /// Returns the full primary class name for this kind.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Fade => "uk-anmt-fade",
            Self::ScaleUp => "uk-anmt-scale-up",
            Self::ScaleDown => "uk-anmt-scale-down",
            Self::SlideTop => "uk-anmt-slide-top",
            Self::SlideBottom => "uk-anmt-slide-bottom",
            Self::SlideLeft => "uk-anmt-slide-left",
            Self::SlideRight => "uk-anmt-slide-right",
            Self::Kenburns => "uk-anmt-kenburns",
        }
    }
}

/// Anchor point for the CSS `transform-origin` of scale animations.
///
/// Absent (`None` in [`AnimationConfig::origin`]) means the stylesheet's
/// default origin applies and no origin class is added.
///
/// [`AnimationConfig::origin`]: crate::config::AnimationConfig::origin
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransformOrigin {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Top-right corner.
    TopRight,
    /// Top-left corner.
    TopLeft,
    /// Bottom edge, horizontally centered.
    BottomCenter,
    /// Bottom-right corner.
    BottomRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Left edge, vertically centered.
    CenterLeft,
    /// Right edge, vertically centered.
    CenterRight,
}

impl TransformOrigin {
    /// All origins, in declaration order.
    pub const ALL: [Self; 12] = [
        Self::Top,
        Self::Bottom,
        Self::Left,
        Self::Right,
        Self::TopCenter,
        Self::TopRight,
        Self::TopLeft,
        Self::BottomCenter,
        Self::BottomRight,
        Self::BottomLeft,
        Self::CenterLeft,
        Self::CenterRight,
    ];

    /// Returns the origin literal used in class names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
            Self::TopCenter => "top-center",
            Self::TopRight => "top-right",
            Self::TopLeft => "top-left",
            Self::BottomCenter => "bottom-center",
            Self::BottomRight => "bottom-right",
            Self::BottomLeft => "bottom-left",
            Self::CenterLeft => "center-left",
            Self::CenterRight => "center-right",
        }
    }

    /// Returns the full transform-origin class name for this anchor.
    #[must_use]
    pub const fn class_name(self) -> &'static str {
        match self {
            Self::Top => "uk-transform-origin-top",
            Self::Bottom => "uk-transform-origin-bottom",
            Self::Left => "uk-transform-origin-left",
            Self::Right => "uk-transform-origin-right",
            Self::TopCenter => "uk-transform-origin-top-center",
            Self::TopRight => "uk-transform-origin-top-right",
            Self::TopLeft => "uk-transform-origin-top-left",
            Self::BottomCenter => "uk-transform-origin-bottom-center",
            Self::BottomRight => "uk-transform-origin-bottom-right",
            Self::BottomLeft => "uk-transform-origin-bottom-left",
            Self::CenterLeft => "uk-transform-origin-center-left",
            Self::CenterRight => "uk-transform-origin-center-right",
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    #[test]
    fn kind_class_names_compose_prefix_and_literal() {
        for kind in AnimationKind::ALL {
            let expected = format!("{ANIMATION_CLASS_PREFIX}{}", kind.as_str());
            assert_eq!(kind.class_name(), expected);
        }
    }

    #[test]
    fn origin_class_names_compose_prefix_and_literal() {
        for origin in TransformOrigin::ALL {
            let expected = format!("{ORIGIN_CLASS_PREFIX}{}", origin.as_str());
            assert_eq!(origin.class_name(), expected);
        }
    }

    #[test]
    fn modifier_classes_share_the_animation_prefix() {
        assert!(REVERSE_CLASS.starts_with(ANIMATION_CLASS_PREFIX));
        assert!(FAST_CLASS.starts_with(ANIMATION_CLASS_PREFIX));
    }

    #[test]
    fn slide_kinds_spell_their_direction() {
        assert_eq!(AnimationKind::SlideTop.class_name(), "uk-anmt-slide-top");
        assert_eq!(
            AnimationKind::SlideBottom.class_name(),
            "uk-anmt-slide-bottom"
        );
        assert_eq!(AnimationKind::SlideLeft.class_name(), "uk-anmt-slide-left");
        assert_eq!(
            AnimationKind::SlideRight.class_name(),
            "uk-anmt-slide-right"
        );
    }

    #[test]
    fn corner_origin_encodes_both_axes() {
        assert_eq!(
            TransformOrigin::BottomRight.class_name(),
            "uk-transform-origin-bottom-right"
        );
    }

    #[test]
    fn primary_class_names_are_distinct() {
        for (i, a) in AnimationKind::ALL.iter().enumerate() {
            for b in &AnimationKind::ALL[i + 1..] {
                assert_ne!(a.class_name(), b.class_name(), "duplicate class name");
            }
        }
    }
}
