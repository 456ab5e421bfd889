// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page configuration: selectors, marker classes, and timings.
//!
//! [`PageConfig::standard`] describes the structural contract of the
//! landing page markup. Backends read every selector and class name from
//! here rather than hard-coding them.

use core::time::Duration;

use crate::language::Language;
use crate::reveal::RevealPolicy;

/// CSS selectors for the elements each controller governs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Selectors {
    /// Every language selector control; the active marker is cleared on all
    /// of them before a switch.
    pub language_controls: &'static str,
    /// Prefix of the per-language control ids (`lang-zh`, `lang-en`).
    pub language_control_id_prefix: &'static str,
    /// The slider region (hover and keyboard focus scope).
    pub slider: &'static str,
    /// Slides, in display order.
    pub slides: &'static str,
    /// Slide indicators, paired 1:1 with slides.
    pub indicators: &'static str,
    /// The "previous slide" control.
    pub prev: &'static str,
    /// The "next slide" control.
    pub next: &'static str,
    /// Anchors with in-page fragment targets.
    pub anchors: &'static str,
    /// Elements that reveal on first qualifying visibility.
    pub reveal: &'static str,
}

/// Marker classes forming the visual state contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classes {
    /// Current selection among mutually exclusive options.
    pub active: &'static str,
    /// Post-animation visible state.
    pub revealed: &'static str,
    /// Narrow-viewport layout mode, applied to `<body>`.
    pub narrow: &'static str,
}

/// Slider timing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SliderConfig {
    /// Period of the autoplay timer.
    pub autoplay_period: Duration,
}

/// Layout-mode threshold.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutConfig {
    /// Widest viewport (CSS pixels, inclusive) still treated as narrow.
    pub narrow_max_width: f64,
}

/// Body fade-in applied once the controllers are mounted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FadeIn {
    /// Delay between hiding the body and starting the transition.
    pub delay: Duration,
    /// CSS `transition` value used for the fade.
    pub transition: &'static str,
}

/// Complete configuration for a page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageConfig {
    /// Element selectors.
    pub selectors: Selectors,
    /// Marker classes.
    pub classes: Classes,
    /// Language applied on load.
    pub default_language: Language,
    /// Slider timing.
    pub slider: SliderConfig,
    /// Reveal observation policy.
    pub reveal: RevealPolicy,
    /// Layout-mode threshold.
    pub layout: LayoutConfig,
    /// Body fade-in.
    pub fade_in: FadeIn,
}

impl PageConfig {
    /// Configuration matching the landing page markup.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            selectors: Selectors {
                language_controls: ".lang-btn",
                language_control_id_prefix: "lang-",
                slider: ".feature-slider",
                slides: ".feature-slide",
                indicators: ".dot",
                prev: ".prev-btn",
                next: ".next-btn",
                anchors: "a[href^=\"#\"]",
                reveal: ".step, .feature-slide",
            },
            classes: Classes {
                active: "active",
                revealed: "animate-in",
                narrow: "mobile",
            },
            default_language: Language::Zh,
            slider: SliderConfig {
                autoplay_period: Duration::from_millis(5000),
            },
            reveal: RevealPolicy::standard(),
            layout: LayoutConfig {
                narrow_max_width: 768.0,
            },
            fade_in: FadeIn {
                delay: Duration::from_millis(100),
                transition: "opacity 0.5s ease-in",
            },
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::standard()
    }
}
