// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Frame extraction from free-form stack trace text.
//!
//! Three patterns are tried on every line, in order:
//! 1. absolute URLs: `https://cdn.example.com/assets/index-Q8JOaMCl.js:1:448`
//! 2. V8 call sites: `at handleClick (index-Q8JOaMCl.js:1:448)`
//! 3. bare V8 locations: `at index-Q8JOaMCl.js:1:448`
//!
//! A line can match more than one pattern and then yields duplicate frames.
//! Resolution is a pure function of `(file, line, column)`, so duplicates only
//! repeat work; [`dedupe_frames`] drops them when that matters.

use regex::{Captures, Regex};
use std::collections::HashSet;
use std::sync::LazyLock;
use tracelens_core::RawFrameReference;

static URL_FRAME: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"[A-Za-z][A-Za-z0-9+.\-]*://[^\s()]*?([^/\s()]+\.js):(\d+):(\d+)").unwrap()
});

static CALL_SITE_FRAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\bat\s+[^()]*?\s*\(([^()\s]+):(\d+):(\d+)\)").unwrap());

static BARE_FRAME: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\bat\s+([^()\s]+):(\d+):(\d+)").unwrap());

/// Extract frame references from a stack trace, in document order.
///
/// Empty input or text without recognizable frames yields an empty vector.
pub fn parse(trace: &str) -> Vec<RawFrameReference> {
	let patterns: [&Regex; 3] = [&URL_FRAME, &CALL_SITE_FRAME, &BARE_FRAME];
	let mut frames = Vec::new();

	for line in trace.lines() {
		for pattern in patterns {
			if let Some(frame) = pattern.captures(line).and_then(|caps| frame_from_captures(&caps)) {
				frames.push(frame);
			}
		}
	}

	tracing::trace!(frame_count = frames.len(), "parsed stack trace");
	frames
}

/// Drop repeated `(file, line, column)` triples, keeping first occurrences.
pub fn dedupe_frames(frames: Vec<RawFrameReference>) -> Vec<RawFrameReference> {
	let mut seen = HashSet::new();
	frames
		.into_iter()
		.filter(|frame| seen.insert((frame.file.clone(), frame.line, frame.column)))
		.collect()
}

fn frame_from_captures(caps: &Captures<'_>) -> Option<RawFrameReference> {
	let matched = caps.get(0)?.as_str();
	let file = bare_file_name(caps.get(1)?.as_str());
	let line: u32 = caps.get(2)?.as_str().parse().ok()?;
	let column: u32 = caps.get(3)?.as_str().parse().ok()?;

	if file.is_empty() || line == 0 {
		return None;
	}

	Some(RawFrameReference::new(matched.trim(), file, line, column))
}

/// Final path segment of a file reference, without query or fragment.
fn bare_file_name(path: &str) -> &str {
	let path = path.split(['?', '#']).next().unwrap_or(path);
	path.rsplit(['/', '\\']).next().unwrap_or(path)
}
