// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Platform-agnostic controllers for an interactive bilingual landing page.
//!
//! `brochure_core` holds the state machines behind a static marketing page:
//! language toggling, a feature carousel, in-page smooth scrolling, and
//! one-shot reveal animations. It is `no_std` compatible (with `alloc`) and
//! never touches a browser API directly. Everything it needs from the host
//! document goes through the traits in [`backend`].
//!
//! # Architecture
//!
//! ```text
//!   Backend (DOM, timers, observers)
//!       │  implements Element / Document / Ticker
//!       ▼
//!   *Parts::discover(&doc) ──► controller::new(parts)
//!       │                           │
//!       │     bootstrap::isolated() wraps each setup; a failure is
//!       │     traced once and the controller is skipped
//!       ▼                           ▼
//!   browser events ──► LanguageSwitcher / FeatureSlider /
//!                      SmoothScroll / RevealSet / ResponsiveLayout
//!                                   │
//!                                   ▼
//!                      class, text and attribute updates
//! ```
//!
//! **[`language`]**: [`Language`](language::Language) codes and the
//! [`LanguageSwitcher`](language::LanguageSwitcher) that rewrites every
//! dual-labelled element.
//!
//! **[`slider`]**: [`FeatureSlider`](slider::FeatureSlider) with wrapping
//! navigation and an idempotent autoplay capability.
//!
//! **[`scroll`]**: Fragment resolution for in-page anchors.
//!
//! **[`reveal`]**: One-shot reveal bookkeeping plus the viewport geometry
//! used by polling backends.
//!
//! **[`layout`]**: Narrow/wide layout mode keyed on viewport width.
//!
//! **[`keyboard`]**: Arrow-key routing for the slider.
//!
//! **[`bootstrap`]**: Isolated controller setup.
//!
//! **[`config`]**: Selectors, class names and timings for a page.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and events for
//! diagnostics.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod keyboard;
pub mod language;
pub mod layout;
pub mod reveal;
pub mod scroll;
pub mod slider;
pub mod style;
pub mod trace;

#[cfg(test)]
mod testing;
