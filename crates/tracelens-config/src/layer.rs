// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration produced by a single source.

use serde::Deserialize;
use std::path::PathBuf;

/// One layer of settings. Unset fields defer to lower layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigLayer {
	pub map_dir: Option<PathBuf>,
	pub context_radius: Option<usize>,
	pub project_root: Option<PathBuf>,
	/// Editor name, parsed with aliases when the layers are resolved.
	pub editor: Option<String>,
	pub dedupe: Option<bool>,
	pub cache_maps: Option<bool>,
}

impl ConfigLayer {
	/// Overlay `other` on top of `self`; set fields in `other` win.
	pub fn merge(&mut self, other: ConfigLayer) {
		if other.map_dir.is_some() {
			self.map_dir = other.map_dir;
		}
		if other.context_radius.is_some() {
			self.context_radius = other.context_radius;
		}
		if other.project_root.is_some() {
			self.project_root = other.project_root;
		}
		if other.editor.is_some() {
			self.editor = other.editor;
		}
		if other.dedupe.is_some() {
			self.dedupe = other.dedupe;
		}
		if other.cache_maps.is_some() {
			self.cache_maps = other.cache_maps;
		}
	}

	pub fn is_empty(&self) -> bool {
		*self == Self::default()
	}
}
