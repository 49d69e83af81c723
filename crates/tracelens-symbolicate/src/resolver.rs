// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locating source map files for minified filenames.
//!
//! Resolution is two-phase:
//! 1. exact: `<file>.map` (or `.js` → `.js.map`) in the map directory;
//! 2. fuzzy: every `*.js.map` whose hash-stripped name equals the
//!    hash-stripped request, newest modification time first.
//!
//! The fuzzy phase reconnects production filenames to locally rebuilt
//! artifacts whose content hashes differ. Newest-wins is a heuristic; equal
//! timestamps fall back to the smallest path so results are repeatable.

use chrono::{DateTime, Utc};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::{debug, instrument, warn};

use tracelens_core::{MatchKind, ResolvedMapFile};

use crate::normalize::{map_file_to_script_name, normalized_stem};

/// Why no source map could be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveMiss {
	/// The configured map directory does not exist.
	DirectoryMissing,
	/// The directory exists but nothing matched exactly or fuzzily.
	NoCandidate,
}

/// Resolve the source map for `file_name` inside `directory`.
#[instrument(level = "debug", skip(directory), fields(directory = %directory.display()))]
pub fn resolve(directory: &Path, file_name: &str) -> Result<ResolvedMapFile, ResolveMiss> {
	if let Some(exact) = resolve_exact(directory, file_name) {
		debug!(path = %exact.path.display(), "exact source map match");
		return Ok(exact);
	}

	if !directory.is_dir() {
		debug!("map directory does not exist");
		return Err(ResolveMiss::DirectoryMissing);
	}

	match resolve_fuzzy(directory, file_name) {
		Some(found) => {
			debug!(path = %found.path.display(), "fuzzy source map match");
			Ok(found)
		}
		None => {
			debug!("no source map candidate");
			Err(ResolveMiss::NoCandidate)
		}
	}
}

/// Probe the exact candidate names, in order.
pub fn exact_candidates(file_name: &str) -> Vec<String> {
	let mut candidates = vec![format!("{file_name}.map")];
	let replaced = file_name.replacen(".js", ".js.map", 1);
	if replaced != file_name && !candidates.contains(&replaced) {
		candidates.push(replaced);
	}
	candidates
}

fn resolve_exact(directory: &Path, file_name: &str) -> Option<ResolvedMapFile> {
	exact_candidates(file_name).into_iter().find_map(|candidate| {
		let path = directory.join(candidate);
		let metadata = fs::metadata(&path).ok()?;
		metadata.is_file().then(|| ResolvedMapFile {
			modified_at: metadata.modified().ok().map(DateTime::<Utc>::from),
			path,
			match_kind: MatchKind::Exact,
		})
	})
}

fn resolve_fuzzy(directory: &Path, file_name: &str) -> Option<ResolvedMapFile> {
	let wanted = normalized_stem(file_name);
	let candidates = match list_map_files(directory) {
		Ok(candidates) => candidates,
		Err(e) => {
			warn!(error = %e, directory = %directory.display(), "failed to list map directory");
			return None;
		}
	};

	let best = candidates
		.into_iter()
		.filter(|c| {
			map_file_to_script_name(&c.file_name)
				.is_some_and(|script| normalized_stem(&script) == wanted)
		})
		.inspect(|c| debug!(candidate = %c.path.display(), "fuzzy candidate"))
		.max_by(|a, b| {
			a.modified
				.cmp(&b.modified)
				.then_with(|| b.path.cmp(&a.path))
		})?;

	Some(ResolvedMapFile {
		modified_at: best.modified.map(DateTime::<Utc>::from),
		path: best.path,
		match_kind: MatchKind::Fuzzy,
	})
}

#[derive(Debug)]
struct MapCandidate {
	path: PathBuf,
	file_name: String,
	modified: Option<SystemTime>,
}

fn list_map_files(directory: &Path) -> io::Result<Vec<MapCandidate>> {
	let mut out = Vec::new();
	for entry in fs::read_dir(directory)? {
		let entry = entry?;
		let file_name = entry.file_name().to_string_lossy().into_owned();
		if !file_name.ends_with(".js.map") {
			continue;
		}
		let metadata = match entry.metadata() {
			Ok(m) if m.is_file() => m,
			_ => continue,
		};
		out.push(MapCandidate {
			path: entry.path(),
			file_name,
			modified: metadata.modified().ok(),
		});
	}
	Ok(out)
}
