// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: TOML files, environment variables and CLI flags.

use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracelens_core::EditorScheme;

use crate::{ConfigError, ConfigLayer};

const ENV_PREFIX: &str = "TRACELENS_";

pub const ENV_MAP_DIR: &str = "TRACELENS_MAP_DIR";
pub const ENV_CONTEXT_RADIUS: &str = "TRACELENS_CONTEXT_RADIUS";
pub const ENV_PROJECT_ROOT: &str = "TRACELENS_PROJECT_ROOT";
pub const ENV_EDITOR: &str = "TRACELENS_EDITOR";
pub const ENV_DEDUPE: &str = "TRACELENS_DEDUPE";
pub const ENV_CACHE_MAPS: &str = "TRACELENS_CACHE_MAPS";

/// Load a TOML layer from `path`. A missing file yields `None`.
pub fn file_layer(path: &Path) -> Result<Option<ConfigLayer>, ConfigError> {
	let content = match fs::read_to_string(path) {
		Ok(content) => content,
		Err(e) if e.kind() == io::ErrorKind::NotFound => {
			tracing::debug!(path = %path.display(), "config file not present");
			return Ok(None);
		}
		Err(source) => {
			return Err(ConfigError::Io {
				path: path.to_path_buf(),
				source,
			})
		}
	};

	let layer = toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
		path: path.to_path_buf(),
		source,
	})?;
	tracing::debug!(path = %path.display(), "loaded config file");
	Ok(Some(layer))
}

/// Build a layer from `TRACELENS_*` variables. Other variables are ignored.
pub fn env_layer<I, K, V>(vars: I) -> Result<ConfigLayer, ConfigError>
where
	I: IntoIterator<Item = (K, V)>,
	K: AsRef<str>,
	V: AsRef<str>,
{
	let mut layer = ConfigLayer::default();
	for (key, value) in vars {
		let (key, value) = (key.as_ref(), value.as_ref());
		match key {
			ENV_MAP_DIR => layer.map_dir = Some(PathBuf::from(value)),
			ENV_PROJECT_ROOT => layer.project_root = Some(PathBuf::from(value)),
			ENV_EDITOR => layer.editor = Some(value.to_string()),
			ENV_CONTEXT_RADIUS => {
				let radius = value
					.trim()
					.parse()
					.map_err(|_| ConfigError::env(key, format!("expected a non-negative integer, got '{value}'")))?;
				layer.context_radius = Some(radius);
			}
			ENV_DEDUPE => layer.dedupe = Some(parse_bool(key, value)?),
			ENV_CACHE_MAPS => layer.cache_maps = Some(parse_bool(key, value)?),
			_ => continue,
		}
		tracing::trace!(var = key, "config override from environment");
	}
	Ok(layer)
}

/// Layer from the current process environment.
pub fn process_env_layer() -> Result<ConfigLayer, ConfigError> {
	os_env_layer(std::env::vars_os())
}

/// Like [`env_layer`] over raw OS strings.
///
/// Keys that are not UTF-8 cannot be `TRACELENS_*` and are skipped. A
/// `TRACELENS_*` value that is not UTF-8 is an error.
pub fn os_env_layer<I>(vars: I) -> Result<ConfigLayer, ConfigError>
where
	I: IntoIterator<Item = (OsString, OsString)>,
{
	let mut utf8 = Vec::new();
	for (key, value) in vars {
		let Ok(key) = key.into_string() else {
			continue;
		};
		if !key.starts_with(ENV_PREFIX) {
			continue;
		}
		let value = value
			.into_string()
			.map_err(|_| ConfigError::env(key.as_str(), "value is not valid UTF-8"))?;
		utf8.push((key, value));
	}
	env_layer(utf8)
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
	match value.trim().to_ascii_lowercase().as_str() {
		"1" | "true" | "yes" | "on" => Ok(true),
		"0" | "false" | "no" | "off" => Ok(false),
		_ => Err(ConfigError::env(var, format!("expected a boolean, got '{value}'"))),
	}
}

/// Overrides supplied on the command line; highest precedence.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub map_dir: Option<PathBuf>,
	pub context_radius: Option<usize>,
	pub project_root: Option<PathBuf>,
	pub editor: Option<EditorScheme>,
	/// Flags only ever switch behavior on.
	pub dedupe: bool,
	pub no_cache: bool,
}

impl From<CliOverrides> for ConfigLayer {
	fn from(cli: CliOverrides) -> Self {
		Self {
			map_dir: cli.map_dir,
			context_radius: cli.context_radius,
			project_root: cli.project_root,
			editor: cli.editor.map(|e| e.to_string()),
			dedupe: cli.dedupe.then_some(true),
			cache_maps: cli.no_cache.then_some(false),
		}
	}
}
