// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Per-frame decode results.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use crate::context::SourceContextWindow;
use crate::error::CoreError;
use crate::frame::RawFrameReference;
use crate::position::{OriginalPosition, ResolvedMapFile};

/// A frame that was mapped back to original source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecodedFrame {
	pub minified_frame: RawFrameReference,
	pub map_file: ResolvedMapFile,
	pub original_position: OriginalPosition,
	/// `None` when the map does not embed `sourcesContent` for the file.
	pub context_window: Option<SourceContextWindow>,
}

/// Category of a frame-local decode failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
	SourceMapNotFound,
	NoMapping,
	MalformedSourceMap,
	Io,
}

impl fmt::Display for FailureKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::SourceMapNotFound => write!(f, "source_map_not_found"),
			Self::NoMapping => write!(f, "no_mapping"),
			Self::MalformedSourceMap => write!(f, "malformed_source_map"),
			Self::Io => write!(f, "io"),
		}
	}
}

impl FromStr for FailureKind {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"source_map_not_found" => Ok(Self::SourceMapNotFound),
			"no_mapping" => Ok(Self::NoMapping),
			"malformed_source_map" => Ok(Self::MalformedSourceMap),
			"io" => Ok(Self::Io),
			_ => Err(CoreError::InvalidFailureKind(s.to_string())),
		}
	}
}

/// Serializable outcome for one frame of a batch decode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FrameReport {
	Decoded(DecodedFrame),
	Failed {
		frame: RawFrameReference,
		kind: FailureKind,
		message: String,
		/// Directory searched, for `source_map_not_found`.
		#[serde(skip_serializing_if = "Option::is_none")]
		searched_dir: Option<PathBuf>,
	},
}

impl FrameReport {
	pub fn frame(&self) -> &RawFrameReference {
		match self {
			Self::Decoded(decoded) => &decoded.minified_frame,
			Self::Failed { frame, .. } => frame,
		}
	}

	pub fn is_decoded(&self) -> bool {
		matches!(self, Self::Decoded(_))
	}

	pub fn failure_kind(&self) -> Option<FailureKind> {
		match self {
			Self::Decoded(_) => None,
			Self::Failed { kind, .. } => Some(*kind),
		}
	}

	pub fn to_json(&self) -> crate::Result<String> {
		Ok(serde_json::to_string(self)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_failed_report_json_shape() {
		let report = FrameReport::Failed {
			frame: RawFrameReference::new("at x (app.js:1:2)", "app.js", 1, 2),
			kind: FailureKind::SourceMapNotFound,
			message: "source map not found".to_string(),
			searched_dir: Some(PathBuf::from("dist/assets")),
		};

		let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
		assert_eq!(value["status"], "failed");
		assert_eq!(value["kind"], "source_map_not_found");
		assert_eq!(value["searched_dir"], "dist/assets");
		assert_eq!(report.frame().file, "app.js");
		assert!(!report.is_decoded());
	}

	#[test]
	fn test_no_mapping_omits_searched_dir() {
		let report = FrameReport::Failed {
			frame: RawFrameReference::new("app.js:9:0", "app.js", 9, 0),
			kind: FailureKind::NoMapping,
			message: "no mapping".to_string(),
			searched_dir: None,
		};

		let value = serde_json::to_value(&report).unwrap();
		assert!(value.get("searched_dir").is_none());
		assert_eq!(report.failure_kind(), Some(FailureKind::NoMapping));
	}

	proptest! {
		#[test]
		fn failure_kind_roundtrip(kind in prop_oneof![
			Just(FailureKind::SourceMapNotFound),
			Just(FailureKind::NoMapping),
			Just(FailureKind::MalformedSourceMap),
			Just(FailureKind::Io),
		]) {
			let s = kind.to_string();
			let parsed: FailureKind = s.parse().unwrap();
			prop_assert_eq!(kind, parsed);
		}
	}
}
