// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Resolved map files and original source positions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// How a source map file was located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
	/// `<file>.map` existed next to the requested name.
	Exact,
	/// Matched on the hash-stripped identity.
	Fuzzy,
}

impl fmt::Display for MatchKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Exact => write!(f, "exact"),
			Self::Fuzzy => write!(f, "fuzzy"),
		}
	}
}

/// A candidate source map file on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMapFile {
	pub path: PathBuf,
	/// `None` when the filesystem does not report modification times.
	pub modified_at: Option<DateTime<Utc>>,
	pub match_kind: MatchKind,
}

/// Original position information from a source map lookup.
///
/// An unmapped position is represented by the absence of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OriginalPosition {
	/// Logical source path as embedded in the map (may carry a bundler scheme).
	pub source_path: String,
	/// Line in the original source (1-indexed).
	pub line: u32,
	/// Column in the original source (0-indexed).
	pub column: u32,
	/// Original identifier name if the map records one.
	pub symbol_name: Option<String>,
}

impl fmt::Display for OriginalPosition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.source_path, self.line, self.column)
	}
}
