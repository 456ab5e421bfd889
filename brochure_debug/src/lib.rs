// Copyright 2026 the Brochure Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and JSON export for brochure diagnostics.
//!
//! This crate provides [`TraceSink`](brochure_core::trace::TraceSink)
//! implementations for development and post-mortem analysis:
//!
//! - [`recorder::RecorderSink`] keeps every event in memory.
//! - [`pretty::PrettyPrintSink`] writes one human-readable line per event.
//! - [`json::export`] turns a recording into a JSON array.
//! - [`fanout::FanOut`] forwards each event to several sinks.

pub mod fanout;
pub mod json;
pub mod pretty;
pub mod recorder;
