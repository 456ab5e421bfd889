// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arrow-key routing for the slider.

/// A slider control reachable from the keyboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlideKey {
    /// `ArrowLeft`: the "previous" control.
    Previous,
    /// `ArrowRight`: the "next" control.
    Next,
}

impl SlideKey {
    /// Maps a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Self::Previous),
            "ArrowRight" => Some(Self::Next),
            _ => None,
        }
    }

    /// Routes a key press; keys only apply while focus is inside the slider.
    #[must_use]
    pub fn route(key: &str, within_slider: bool) -> Option<Self> {
        if within_slider {
            Self::from_key(key)
        } else {
            None
        }
    }
}
