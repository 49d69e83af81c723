// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for symbolication operations.

use std::path::PathBuf;

use thiserror::Error;
use tracelens_core::{FailureKind, FrameReport, RawFrameReference};

/// Frame-local failures while decoding a stack trace.
#[derive(Debug, Error)]
pub enum DecodeError {
	#[error("no source map for {file} in {}{}", .searched_dir.display(), missing_suffix(.directory_missing))]
	SourceMapNotFound {
		file: String,
		searched_dir: PathBuf,
		directory_missing: bool,
	},

	#[error("no mapping found for line {line}, column {column} in {}", .map_path.display())]
	NoMapping {
		map_path: PathBuf,
		line: u32,
		column: u32,
	},

	#[error("invalid source map {}: {source}", .path.display())]
	MalformedSourceMap {
		path: PathBuf,
		#[source]
		source: sourcemap::Error,
	},

	#[error("failed to read {}: {source}", .path.display())]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},
}

impl DecodeError {
	pub fn kind(&self) -> FailureKind {
		match self {
			Self::SourceMapNotFound { .. } => FailureKind::SourceMapNotFound,
			Self::NoMapping { .. } => FailureKind::NoMapping,
			Self::MalformedSourceMap { .. } => FailureKind::MalformedSourceMap,
			Self::Io { .. } => FailureKind::Io,
		}
	}

	/// Convert into a serializable failure report for `frame`.
	pub fn into_report(self, frame: RawFrameReference) -> FrameReport {
		let searched_dir = match &self {
			Self::SourceMapNotFound { searched_dir, .. } => Some(searched_dir.clone()),
			_ => None,
		};
		FrameReport::Failed {
			frame,
			kind: self.kind(),
			message: self.to_string(),
			searched_dir,
		}
	}
}

fn missing_suffix(directory_missing: &bool) -> &'static str {
	if *directory_missing {
		" (directory does not exist)"
	} else {
		""
	}
}

pub type Result<T> = std::result::Result<T, DecodeError>;
