// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Position lookup and source context extraction.
//!
//! Decoding of the `mappings` field is left to the `sourcemap` crate; this
//! module only asks it for tokens and embedded sources.

use sourcemap::SourceMap;
use tracelens_core::{ContextLine, OriginalPosition, SourceContextWindow};

/// An original position and the index of its source within the map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedPosition {
	pub position: OriginalPosition,
	pub source_id: u32,
}

/// Lookup the original position for a generated line and column.
///
/// Lines are 1-indexed (as displayed in stack traces), columns are 0-indexed.
/// Only tokens on the same generated line count; a position with no token at
/// or before `column` on its line, or a token without a source, is unmapped.
pub fn lookup(map: &SourceMap, line: u32, column: u32) -> Option<MappedPosition> {
	let line_0indexed = line.checked_sub(1)?;
	let token = map.lookup_token(line_0indexed, column)?;

	if token.get_dst_line() != line_0indexed {
		return None;
	}

	let source_path = token.get_source()?;

	Some(MappedPosition {
		position: OriginalPosition {
			source_path: source_path.to_string(),
			line: token.get_src_line() + 1,
			column: token.get_src_col(),
			symbol_name: token.get_name().map(str::to_string),
		},
		source_id: token.get_src_id(),
	})
}

/// [`lookup`] without the source index.
pub fn map_position(map: &SourceMap, line: u32, column: u32) -> Option<OriginalPosition> {
	lookup(map, line, column).map(|mapped| mapped.position)
}

/// Embedded `sourcesContent` for the source at `source_id`.
pub fn source_contents(map: &SourceMap, source_id: u32) -> Option<&str> {
	map.get_source_contents(source_id)
}

/// Window of original source around `target_line`, read from the map.
///
/// Returns `None` when the map does not embed the source text.
pub fn extract_context(
	map: &SourceMap,
	source_id: u32,
	target_line: u32,
	radius: usize,
) -> Option<SourceContextWindow> {
	let content = source_contents(map, source_id)?;
	Some(context_window(content, target_line as usize, radius))
}

/// Slice `[target_line - radius, target_line + radius]` out of `content`.
///
/// `target_line` is 1-indexed. Bounds are clamped to the file; a target past
/// the end of the file yields whatever lines fall inside the clamp, none of
/// them marked as the target.
pub fn context_window(content: &str, target_line: usize, radius: usize) -> SourceContextWindow {
	let lines: Vec<&str> = content.lines().collect();

	let start = target_line.saturating_sub(radius).saturating_sub(1);
	let end = target_line.saturating_add(radius).min(lines.len());

	if start >= end {
		return SourceContextWindow::default();
	}

	let window = lines[start..end]
		.iter()
		.enumerate()
		.map(|(offset, content)| {
			let line_number = start + offset + 1;
			ContextLine {
				line_number: line_number as u32,
				content: (*content).to_string(),
				is_target: line_number == target_line,
			}
		})
		.collect();

	SourceContextWindow::new(window)
}
