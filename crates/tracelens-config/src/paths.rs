// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::{Path, PathBuf};

use crate::ConfigError;

const APP_DIR: &str = "tracelens";
const CONFIG_FILE: &str = "config.toml";

/// Config file locations, lowest precedence first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/tracelens/config.toml
	pub user_config_file: PathBuf,
	/// Workspace config file: ./.tracelens/config.toml
	pub workspace_config_file: PathBuf,
}

impl PathsConfig {
	/// Paths rooted at an explicit config home and workspace directory.
	pub fn new(config_home: &Path, workspace: &Path) -> Self {
		Self {
			user_config_file: config_home.join(APP_DIR).join(CONFIG_FILE),
			workspace_config_file: workspace.join(format!(".{APP_DIR}")).join(CONFIG_FILE),
		}
	}
}

/// Resolve config paths from `XDG_CONFIG_HOME` (or `~/.config`) and the
/// current directory.
pub fn resolve_paths() -> Result<PathsConfig, ConfigError> {
	let config_home = match std::env::var_os("XDG_CONFIG_HOME") {
		Some(dir) if !dir.is_empty() => PathBuf::from(dir),
		_ => dirs::home_dir()
			.ok_or(ConfigError::HomeDirNotFound)?
			.join(".config"),
	};

	let cwd = std::env::current_dir().map_err(|source| ConfigError::Io {
		path: PathBuf::from("."),
		source,
	})?;

	let paths = PathsConfig::new(&config_home, &cwd);
	tracing::debug!(
		user = %paths.user_config_file.display(),
		workspace = %paths.workspace_config_file.display(),
		"resolved config paths"
	);
	Ok(paths)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_paths_layout() {
		let paths = PathsConfig::new(Path::new("/home/me/.config"), Path::new("/work/app"));
		assert_eq!(
			paths.user_config_file,
			PathBuf::from("/home/me/.config/tracelens/config.toml")
		);
		assert_eq!(
			paths.workspace_config_file,
			PathBuf::from("/work/app/.tracelens/config.toml")
		);
	}

	#[test]
	fn test_resolve_paths_succeeds() {
		let paths = resolve_paths().unwrap();
		assert!(paths.user_config_file.ends_with("tracelens/config.toml"));
		assert!(paths.workspace_config_file.ends_with(".tracelens/config.toml"));
	}
}
