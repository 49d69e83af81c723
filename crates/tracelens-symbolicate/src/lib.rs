// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source map decoding for minified JavaScript stack traces.
//!
//! This crate provides functionality for:
//! - Extracting frame references from free-form stack trace text
//! - Locating local source maps, including rebuilt artifacts with different
//!   content hashes
//! - Mapping minified positions back to original sources
//! - Extracting and rendering source context around the original line
//!
//! # Example
//!
//! ```
//! use tracelens_symbolicate::{DecodeOptions, TraceDecoder};
//!
//! let decoder = TraceDecoder::new(DecodeOptions::new("dist/assets").with_context_radius(3));
//!
//! let trace = "TypeError: x is undefined\n    at toggle (https://cdn.example.com/assets/index-Q8JOaMCl.js:1:448)";
//! let reports = decoder.decode_trace(trace);
//!
//! // One frame per matched pattern: the URL and the call site.
//! assert_eq!(reports.len(), 2);
//! ```

pub mod consumer;
pub mod error;
pub mod mapping;
pub mod normalize;
pub mod parser;
pub mod processor;
pub mod render;
pub mod resolver;

// Re-export main types
pub use consumer::{MapCache, MapConsumer};
pub use error::{DecodeError, Result};
pub use mapping::{context_window, extract_context, lookup, map_position, MappedPosition};
pub use normalize::{is_hash_like, normalize};
pub use parser::{dedupe_frames, parse};
pub use processor::{DecodeOptions, TraceDecoder, DEFAULT_CONTEXT_RADIUS};
pub use render::{
	editor_link, local_source_path, render_frame, render_report, FrameDisplay, RenderOptions,
	ReportDisplay,
};
pub use resolver::{resolve, ResolveMiss};
