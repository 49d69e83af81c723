// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Symbolication processor for minified stack traces.
//!
//! This module provides the high-level API: parse a trace, resolve a map for
//! every frame, map the position and attach source context.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use tracelens_core::{DecodedFrame, FrameReport, RawFrameReference};

use crate::consumer::{MapCache, MapConsumer};
use crate::error::{DecodeError, Result};
use crate::mapping::{extract_context, lookup};
use crate::parser::{dedupe_frames, parse};
use crate::resolver::{resolve, ResolveMiss};

/// Number of context lines to include before and after the error line.
pub const DEFAULT_CONTEXT_RADIUS: usize = 5;

/// Inputs for a [`TraceDecoder`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeOptions {
	/// Directory holding the `*.js.map` build artifacts.
	pub map_dir: PathBuf,
	/// Lines of original source shown on each side of the target line.
	pub context_radius: usize,
	/// Drop frames repeating an earlier `(file, line, column)`.
	pub dedupe: bool,
	/// Keep parsed maps across frames, keyed by path and modification time.
	pub cache_maps: bool,
}

impl DecodeOptions {
	pub fn new(map_dir: impl Into<PathBuf>) -> Self {
		Self {
			map_dir: map_dir.into(),
			context_radius: DEFAULT_CONTEXT_RADIUS,
			dedupe: false,
			cache_maps: false,
		}
	}

	pub fn with_context_radius(mut self, radius: usize) -> Self {
		self.context_radius = radius;
		self
	}

	pub fn with_dedupe(mut self, dedupe: bool) -> Self {
		self.dedupe = dedupe;
		self
	}

	pub fn with_cache(mut self, cache_maps: bool) -> Self {
		self.cache_maps = cache_maps;
		self
	}
}

/// Decodes minified stack traces against a local map directory.
#[derive(Debug)]
pub struct TraceDecoder {
	options: DecodeOptions,
	cache: Option<MapCache>,
}

impl TraceDecoder {
	pub fn new(options: DecodeOptions) -> Self {
		let cache = options.cache_maps.then(MapCache::new);
		Self { options, cache }
	}

	pub fn options(&self) -> &DecodeOptions {
		&self.options
	}

	pub fn map_dir(&self) -> &Path {
		&self.options.map_dir
	}

	/// Parse `trace` and decode every frame, preserving trace order.
	///
	/// Failures are reported per frame and never stop the batch.
	#[instrument(skip(self, trace), fields(map_dir = %self.options.map_dir.display()))]
	pub fn decode_trace(&self, trace: &str) -> Vec<FrameReport> {
		let mut frames = parse(trace);
		if self.options.dedupe {
			frames = dedupe_frames(frames);
		}
		self.decode_frames(&frames)
	}

	/// Decode already-parsed frames, preserving their order.
	#[instrument(skip(self, frames), fields(frame_count = frames.len()))]
	pub fn decode_frames(&self, frames: &[RawFrameReference]) -> Vec<FrameReport> {
		let reports: Vec<FrameReport> = frames
			.iter()
			.map(|frame| match self.decode_frame(frame) {
				Ok(decoded) => FrameReport::Decoded(decoded),
				Err(e) => {
					match &e {
						DecodeError::MalformedSourceMap { .. } | DecodeError::Io { .. } => {
							warn!(error = %e, frame = %frame, "failed to decode frame")
						}
						_ => debug!(error = %e, frame = %frame, "frame not decoded"),
					}
					e.into_report(frame.clone())
				}
			})
			.collect();

		let decoded = reports.iter().filter(|r| r.is_decoded()).count();
		info!(decoded, total = reports.len(), "decoded stack trace");
		reports
	}

	/// Decode a single frame: resolve, open, map, extract context, release.
	#[instrument(level = "debug", skip(self, frame), fields(frame = %frame))]
	pub fn decode_frame(&self, frame: &RawFrameReference) -> Result<DecodedFrame> {
		let map_file = resolve(&self.options.map_dir, &frame.file).map_err(|miss| {
			DecodeError::SourceMapNotFound {
				file: frame.file.clone(),
				searched_dir: self.options.map_dir.clone(),
				directory_missing: miss == ResolveMiss::DirectoryMissing,
			}
		})?;

		let consumer = self.open(&map_file.path)?;

		let mapped = lookup(consumer.map(), frame.line, frame.column).ok_or_else(|| DecodeError::NoMapping {
			map_path: map_file.path.clone(),
			line: frame.line,
			column: frame.column,
		})?;
		let original_position = mapped.position;

		let context_window = extract_context(
			consumer.map(),
			mapped.source_id,
			original_position.line,
			self.options.context_radius,
		);
		if context_window.is_none() {
			debug!(source = %original_position.source_path, "map has no embedded source");
		}

		debug!(
			original_source = %original_position.source_path,
			original_line = original_position.line,
			original_column = original_position.column,
			"symbolicated frame"
		);

		Ok(DecodedFrame {
			minified_frame: frame.clone(),
			map_file,
			original_position,
			context_window,
		})
	}

	fn open(&self, path: &Path) -> Result<MapConsumer> {
		match &self.cache {
			Some(cache) => cache.open(path),
			None => MapConsumer::open(path),
		}
	}
}
