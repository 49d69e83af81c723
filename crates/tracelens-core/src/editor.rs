// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Editor link schemes for opening decoded locations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// Which editor an openable link targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditorScheme {
	/// `vscode://file/<path>:<line>:<column>`
	#[default]
	Vscode,
	/// `cursor://file/<path>:<line>:<column>`
	Cursor,
	/// `idea://open?file=<path>&line=<line>`
	Idea,
	/// `<path>:<line>:<column>`
	Plain,
}

impl fmt::Display for EditorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Vscode => write!(f, "vscode"),
			Self::Cursor => write!(f, "cursor"),
			Self::Idea => write!(f, "idea"),
			Self::Plain => write!(f, "plain"),
		}
	}
}

impl FromStr for EditorScheme {
	type Err = CoreError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"vscode" | "code" => Ok(Self::Vscode),
			"cursor" => Ok(Self::Cursor),
			"idea" | "intellij" | "webstorm" => Ok(Self::Idea),
			"plain" | "none" => Ok(Self::Plain),
			_ => Err(CoreError::InvalidEditorScheme(s.to_string())),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_aliases() {
		assert_eq!("code".parse::<EditorScheme>().unwrap(), EditorScheme::Vscode);
		assert_eq!("WebStorm".parse::<EditorScheme>().unwrap(), EditorScheme::Idea);
		assert!("emacs".parse::<EditorScheme>().is_err());
	}

	proptest! {
		#[test]
		fn editor_scheme_roundtrip(scheme in prop_oneof![
			Just(EditorScheme::Vscode),
			Just(EditorScheme::Cursor),
			Just(EditorScheme::Idea),
			Just(EditorScheme::Plain),
		]) {
			let s = scheme.to_string();
			let parsed: EditorScheme = s.parse().unwrap();
			prop_assert_eq!(scheme, parsed);
		}
	}
}
