// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Setup errors.

use alloc::string::String;
use core::fmt;

/// Errors raised while a controller collects the elements it governs.
///
/// None of these are fatal to the page: [`bootstrap::isolated`] reports
/// them once and skips the affected controller.
///
/// [`bootstrap::isolated`]: crate::bootstrap::isolated
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupError {
    /// A required element was not found.
    MissingElement {
        /// What the element is for (e.g. `"language control"`).
        role: &'static str,
        /// The selector or id that was queried.
        selector: String,
    },
    /// The slider has no slides to show.
    NoSlides,
    /// A host API call failed.
    Backend(String),
}

impl fmt::Display for SetupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingElement { role, selector } => {
                write!(f, "missing {role} ({selector})")
            }
            Self::NoSlides => f.write_str("slider has no slides"),
            Self::Backend(msg) => write!(f, "host call failed: {msg}"),
        }
    }
}

impl core::error::Error for SetupError {}
