// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Raw frame references extracted from minified stack traces.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single `(file, line, column)` location found in a stack trace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RawFrameReference {
	/// The matched text, kept for display.
	pub original_text: String,
	/// Bare filename with directories and URL prefixes stripped.
	pub file: String,
	/// Generated line (1-indexed).
	pub line: u32,
	/// Generated column (0-indexed).
	pub column: u32,
}

impl RawFrameReference {
	pub fn new(original_text: impl Into<String>, file: impl Into<String>, line: u32, column: u32) -> Self {
		Self {
			original_text: original_text.into(),
			file: file.into(),
			line,
			column,
		}
	}

	/// Identity used for deduplication; the matched text is not part of it.
	pub fn location_key(&self) -> (&str, u32, u32) {
		(self.file.as_str(), self.line, self.column)
	}
}

impl fmt::Display for RawFrameReference {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.file, self.line, self.column)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_uses_location_only() {
		let frame = RawFrameReference::new("at foo (bundle.js:10:5)", "bundle.js", 10, 5);
		assert_eq!(frame.to_string(), "bundle.js:10:5");
	}

	#[test]
	fn test_location_key_ignores_original_text() {
		let a = RawFrameReference::new("at a (https://cdn/x.js:1:2)", "x.js", 1, 2);
		let b = RawFrameReference::new("https://cdn/x.js:1:2", "x.js", 1, 2);
		assert_ne!(a, b);
		assert_eq!(a.location_key(), b.location_key());
	}
}
