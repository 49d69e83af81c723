// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fully resolved runtime configuration.

use std::path::PathBuf;

use tracelens_core::EditorScheme;

use crate::{ConfigError, ConfigLayer};

pub const DEFAULT_MAP_DIR: &str = "dist/assets";
pub const DEFAULT_CONTEXT_RADIUS: usize = 5;
pub const MAX_CONTEXT_RADIUS: usize = 500;

/// Settings after all layers are merged and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracelensConfig {
	pub map_dir: PathBuf,
	pub context_radius: usize,
	pub project_root: Option<PathBuf>,
	pub editor: EditorScheme,
	pub dedupe: bool,
	pub cache_maps: bool,
}

impl Default for TracelensConfig {
	fn default() -> Self {
		Self {
			map_dir: PathBuf::from(DEFAULT_MAP_DIR),
			context_radius: DEFAULT_CONTEXT_RADIUS,
			project_root: None,
			editor: EditorScheme::default(),
			dedupe: false,
			cache_maps: true,
		}
	}
}

impl TracelensConfig {
	/// Apply a merged layer over the defaults and validate the result.
	pub fn from_layer(layer: ConfigLayer) -> Result<Self, ConfigError> {
		let defaults = Self::default();

		let editor = match layer.editor {
			Some(name) => name
				.parse()
				.map_err(|e: tracelens_core::CoreError| ConfigError::invalid_value("editor", e.to_string()))?,
			None => defaults.editor,
		};

		let config = Self {
			map_dir: layer.map_dir.unwrap_or(defaults.map_dir),
			context_radius: layer.context_radius.unwrap_or(defaults.context_radius),
			project_root: layer.project_root.or(defaults.project_root),
			editor,
			dedupe: layer.dedupe.unwrap_or(defaults.dedupe),
			cache_maps: layer.cache_maps.unwrap_or(defaults.cache_maps),
		};
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.map_dir.as_os_str().is_empty() {
			return Err(ConfigError::validation("map_dir must not be empty"));
		}
		if self.context_radius > MAX_CONTEXT_RADIUS {
			return Err(ConfigError::invalid_value(
				"context_radius",
				format!("{} exceeds the maximum of {MAX_CONTEXT_RADIUS}", self.context_radius),
			));
		}
		Ok(())
	}
}
