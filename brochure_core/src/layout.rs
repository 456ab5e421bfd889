// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Narrow/wide layout mode.

use crate::backend::Element;
use crate::config::LayoutConfig;
use crate::trace::Tracer;

/// Layout mode derived from the viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayoutMode {
    /// At or below the narrow threshold.
    Narrow,
    /// Above the narrow threshold.
    Wide,
}

impl LayoutMode {
    /// Mode for a viewport `width` in CSS pixels.
    #[must_use]
    pub fn for_width(width: f64, config: &LayoutConfig) -> Self {
        if width <= config.narrow_max_width {
            Self::Narrow
        } else {
            Self::Wide
        }
    }
}

/// Keeps the narrow-mode class on a target element in sync with the
/// viewport width.
#[derive(Debug)]
pub struct ResponsiveLayout<E> {
    target: E,
    class: &'static str,
    config: LayoutConfig,
    mode: Option<LayoutMode>,
    tracer: Tracer,
}

impl<E: Element> ResponsiveLayout<E> {
    /// Creates a layout controller for `target` (normally `<body>`).
    #[must_use]
    pub fn new(target: E, class: &'static str, config: LayoutConfig, tracer: Tracer) -> Self {
        Self {
            target,
            class,
            config,
            mode: None,
            tracer,
        }
    }

    /// The last applied mode, if any.
    #[must_use]
    pub fn mode(&self) -> Option<LayoutMode> {
        self.mode
    }

    /// Applies the mode for `width`; returns `true` if the mode changed.
    ///
    /// The class is re-applied on every call so that markup edits by other
    /// scripts are corrected on the next resize.
    pub fn apply(&mut self, width: f64) -> bool {
        let mode = LayoutMode::for_width(width, &self.config);
        match mode {
            LayoutMode::Narrow => self.target.add_class(self.class),
            LayoutMode::Wide => self.target.remove_class(self.class),
        }
        let changed = self.mode != Some(mode);
        if changed {
            self.mode = Some(mode);
            self.tracer.layout(mode, width);
        }
        changed
    }
}
