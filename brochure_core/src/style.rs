// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stylesheet injected alongside the reveal controller.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

/// Builds the reveal transition CSS.
///
/// Every element matched by `selectors` (a comma-separated selector list)
/// starts hidden and shifted down; adding `revealed_class` fades it in.
#[must_use]
pub fn reveal_stylesheet(selectors: &str, revealed_class: &str) -> String {
    let parts: Vec<&str> = selectors
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let hidden = parts.join(", ");
    let shown = parts
        .iter()
        .map(|s| format!("{s}.{revealed_class}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{hidden} {{\n    opacity: 0;\n    transform: translateY(30px);\n    transition: all 0.6s ease-out;\n}}\n\
         {shown} {{\n    opacity: 1;\n    transform: translateY(0);\n}}\n"
    )
}
