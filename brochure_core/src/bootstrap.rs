// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Isolated controller setup.
//!
//! The page mounts several independent controllers against one document.
//! [`isolated`] runs a single controller's setup and contains its failure:
//! the error is traced once and the remaining controllers still mount.

use core::fmt;

use crate::error::SetupError;
use crate::trace::Tracer;

/// The page's controllers and glue handlers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Controller {
    /// Language toggling.
    LanguageSwitcher,
    /// Feature carousel.
    FeatureSlider,
    /// In-page anchor scrolling.
    SmoothScroll,
    /// Reveal-on-scroll animations.
    PageAnimations,
    /// Layout-mode resize handler.
    Layout,
    /// Arrow-key forwarding to the slider.
    Keyboard,
    /// Injected reveal stylesheet.
    Styles,
    /// Body fade-in.
    FadeIn,
}

impl Controller {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::LanguageSwitcher => "language switcher",
            Self::FeatureSlider => "feature slider",
            Self::SmoothScroll => "smooth scroll",
            Self::PageAnimations => "page animations",
            Self::Layout => "layout",
            Self::Keyboard => "keyboard",
            Self::Styles => "styles",
            Self::FadeIn => "fade-in",
        }
    }
}

impl fmt::Display for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Runs one controller's setup.
///
/// On success the controller is traced as ready and returned. On failure
/// the error is traced once and `None` is returned; the caller carries on
/// with the next controller.
pub fn isolated<T>(
    tracer: &Tracer,
    controller: Controller,
    init: impl FnOnce() -> Result<T, SetupError>,
) -> Option<T> {
    match init() {
        Ok(value) => {
            tracer.setup(controller);
            Some(value)
        }
        Err(error) => {
            tracer.setup_skipped(controller, error);
            None
        }
    }
}
