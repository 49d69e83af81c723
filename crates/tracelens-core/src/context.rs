// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Source context windows around a mapped location.

use serde::{Deserialize, Serialize};

/// One line of original source inside a context window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextLine {
	/// 1-indexed line number in the original file.
	pub line_number: u32,
	pub content: String,
	pub is_target: bool,
}

/// Ordered slice of original source lines around a target line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceContextWindow {
	pub lines: Vec<ContextLine>,
}

impl SourceContextWindow {
	pub fn new(lines: Vec<ContextLine>) -> Self {
		Self { lines }
	}

	/// The line marked as the mapped location, if it fell inside the file.
	pub fn target(&self) -> Option<&ContextLine> {
		self.lines.iter().find(|l| l.is_target)
	}

	pub fn is_empty(&self) -> bool {
		self.lines.is_empty()
	}

	pub fn len(&self) -> usize {
		self.lines.len()
	}

	/// Width of the widest line number, used to align listings.
	pub fn gutter_width(&self) -> usize {
		self
			.lines
			.last()
			.map(|l| l.line_number.to_string().len())
			.unwrap_or(1)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn line(n: u32, target: bool) -> ContextLine {
		ContextLine {
			line_number: n,
			content: format!("line {n}"),
			is_target: target,
		}
	}

	#[test]
	fn test_target_lookup() {
		let window = SourceContextWindow::new(vec![line(9, false), line(10, true), line(11, false)]);
		assert_eq!(window.target().map(|l| l.line_number), Some(10));
		assert_eq!(window.len(), 3);
		assert_eq!(window.gutter_width(), 2);
	}

	#[test]
	fn test_empty_window() {
		let window = SourceContextWindow::default();
		assert!(window.is_empty());
		assert!(window.target().is_none());
		assert_eq!(window.gutter_width(), 1);
	}

	#[test]
	fn test_serializes_as_list() {
		let window = SourceContextWindow::new(vec![line(1, true)]);
		let json = serde_json::to_value(&window).unwrap();
		assert!(json.is_array());
		assert_eq!(json[0]["is_target"], true);
	}
}
