// Copyright 2026 the Upwell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative animation configuration.
//!
//! An [`AnimationConfig`] describes one element's visual treatment: which
//! [`AnimationKind`] to play, the optional modifiers, and whether to defer
//! the reveal until the element scrolls into view. The config never holds
//! the target element itself; binding to a concrete presentation surface is
//! the backend's job, so this type stays platform-independent.

use crate::class::{AnimationKind, TransformOrigin};

/// A fully-populated animation description.
///
/// [`new`](Self::new) fills in the default table; callers then flip the
/// fields they need:
///
/// ```
/// use upwell_core::class::{AnimationKind, TransformOrigin};
/// use upwell_core::config::AnimationConfig;
///
/// let mut config = AnimationConfig::new(AnimationKind::ScaleUp);
/// config.origin = Some(TransformOrigin::BottomRight);
/// config.trigger_on_visible = true;
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnimationConfig {
    /// The visual transition style. Selects the primary class.
    pub kind: AnimationKind,
    /// Play the animation backwards (adds [`REVERSE_CLASS`]). Default `false`.
    ///
    /// [`REVERSE_CLASS`]: crate::class::REVERSE_CLASS
    pub reverse: bool,
    /// Shorten the animation duration (adds [`FAST_CLASS`]). Default `false`.
    ///
    /// [`FAST_CLASS`]: crate::class::FAST_CLASS
    pub fast: bool,
    /// Anchor for scale animations. `None` (the default) leaves the
    /// stylesheet's `transform-origin` untouched.
    pub origin: Option<TransformOrigin>,
    /// Defer the primary class until the element is at least
    /// [`VISIBILITY_THRESHOLD`] visible in the viewport. Default `false`.
    ///
    /// [`VISIBILITY_THRESHOLD`]: crate::trigger::VISIBILITY_THRESHOLD
    pub trigger_on_visible: bool,
    /// Drive an SVG stroke reveal. Default `false`. Only takes effect
    /// together with a usable [`stroke_length`](Self::stroke_length).
    pub stroke_reveal: bool,
    /// Total path length for the stroke reveal, written to
    /// [`STROKE_PROPERTY`]. `None` (the default), zero, and NaN all leave
    /// the property unset.
    ///
    /// [`STROKE_PROPERTY`]: crate::class::STROKE_PROPERTY
    pub stroke_length: Option<f64>,
}

impl AnimationConfig {
    /// Creates a config for `kind` with everything else at its default:
    /// `reverse = false`, `fast = false`, `trigger_on_visible = false`,
    /// `stroke_reveal = false`, `origin` and `stroke_length` absent.
    #[must_use]
    pub const fn new(kind: AnimationKind) -> Self {
        Self {
            kind,
            reverse: false,
            fast: false,
            origin: None,
            trigger_on_visible: false,
            stroke_reveal: false,
            stroke_length: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_the_default_table() {
        let config = AnimationConfig::new(AnimationKind::Fade);
        assert_eq!(config.kind, AnimationKind::Fade);
        assert!(!config.reverse);
        assert!(!config.fast);
        assert_eq!(config.origin, None);
        assert!(!config.trigger_on_visible);
        assert!(!config.stroke_reveal);
        assert_eq!(config.stroke_length, None);
    }
}
