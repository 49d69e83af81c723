// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for tracelens.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation
//!
//! Precedence, lowest first: defaults, user file, workspace file,
//! `TRACELENS_*` environment variables, CLI flags.

pub mod error;
pub mod layer;
pub mod paths;
pub mod runtime;
pub mod sources;

pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use runtime::{TracelensConfig, DEFAULT_CONTEXT_RADIUS, DEFAULT_MAP_DIR, MAX_CONTEXT_RADIUS};
pub use sources::CliOverrides;

/// Load configuration from all sources with default precedence.
pub fn load_config() -> Result<TracelensConfig, ConfigError> {
	load_config_with_cli(CliOverrides::default())
}

/// Load configuration with CLI overrides.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<TracelensConfig, ConfigError> {
	let paths = paths::resolve_paths()?;
	let env = sources::process_env_layer()?;
	load_from(&paths, env, cli)
}

/// Merge the file layers at `paths` with explicit environment and CLI layers.
pub fn load_from(
	paths: &PathsConfig,
	env: ConfigLayer,
	cli: CliOverrides,
) -> Result<TracelensConfig, ConfigError> {
	let mut merged = ConfigLayer::default();

	for path in [&paths.user_config_file, &paths.workspace_config_file] {
		if let Some(layer) = sources::file_layer(path)? {
			merged.merge(layer);
		}
	}
	merged.merge(env);
	merged.merge(cli.into());

	let config = TracelensConfig::from_layer(merged)?;
	tracing::debug!(
		map_dir = %config.map_dir.display(),
		context_radius = config.context_radius,
		editor = %config.editor,
		dedupe = config.dedupe,
		cache_maps = config.cache_maps,
		"loaded configuration"
	);
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use std::path::PathBuf;
	use tempfile::TempDir;
	use tracelens_core::EditorScheme;

	struct Fixture {
		_dir: TempDir,
		paths: PathsConfig,
	}

	fn fixture(user: Option<&str>, workspace: Option<&str>) -> Fixture {
		let dir = TempDir::new().unwrap();
		let paths = PathsConfig::new(&dir.path().join("config"), &dir.path().join("work"));
		for (path, body) in [
			(&paths.user_config_file, user),
			(&paths.workspace_config_file, workspace),
		] {
			if let Some(body) = body {
				fs::create_dir_all(path.parent().unwrap()).unwrap();
				fs::write(path, body).unwrap();
			}
		}
		Fixture { _dir: dir, paths }
	}

	#[test]
	fn test_no_files_yields_defaults() {
		let fx = fixture(None, None);
		let config = load_from(&fx.paths, ConfigLayer::default(), CliOverrides::default()).unwrap();
		assert_eq!(config, TracelensConfig::default());
	}

	#[test]
	fn test_layer_precedence() {
		let fx = fixture(
			Some("map_dir = \"user\"\ncontext_radius = 1\neditor = \"cursor\"\n"),
			Some("map_dir = \"workspace\"\ncontext_radius = 2\n"),
		);
		let env = sources::env_layer([("TRACELENS_CONTEXT_RADIUS", "3")]).unwrap();
		let cli = CliOverrides {
			map_dir: Some(PathBuf::from("cli")),
			..Default::default()
		};

		let config = load_from(&fx.paths, env, cli).unwrap();
		assert_eq!(config.map_dir, PathBuf::from("cli"));
		assert_eq!(config.context_radius, 3);
		assert_eq!(config.editor, EditorScheme::Cursor);
	}

	#[test]
	fn test_workspace_overrides_user() {
		let fx = fixture(Some("dedupe = false\n"), Some("dedupe = true\n"));
		let config = load_from(&fx.paths, ConfigLayer::default(), CliOverrides::default()).unwrap();
		assert!(config.dedupe);
	}

	#[test]
	fn test_malformed_workspace_file_is_error() {
		let fx = fixture(None, Some("context_radius = \"wide\"\n"));
		let err = load_from(&fx.paths, ConfigLayer::default(), CliOverrides::default()).unwrap_err();
		match err {
			ConfigError::TomlParse { path, .. } => assert_eq!(path, fx.paths.workspace_config_file),
			other => panic!("expected TomlParse, got {other:?}"),
		}
	}

	#[test]
	fn test_cli_no_cache_wins_over_file() {
		let fx = fixture(Some("cache_maps = true\n"), None);
		let cli = CliOverrides {
			no_cache: true,
			..Default::default()
		};
		let config = load_from(&fx.paths, ConfigLayer::default(), cli).unwrap();
		assert!(!config.cache_maps);
	}
}
