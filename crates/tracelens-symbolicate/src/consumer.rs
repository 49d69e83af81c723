// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Scoped access to parsed source maps.
//!
//! A [`MapConsumer`] is acquired right before a frame is queried and dropped
//! when the frame is done, on every path out of the decode. With a
//! [`MapCache`] the parsed map outlives the consumer and is reused until the
//! file's modification time changes.

use sourcemap::SourceMap;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;
use tracing::{debug, trace};

use crate::error::{DecodeError, Result};

/// A parsed source map held for the duration of one frame.
#[derive(Debug)]
pub struct MapConsumer {
	path: PathBuf,
	map: Arc<SourceMap>,
}

impl MapConsumer {
	/// Read and parse the map at `path`.
	pub fn open(path: &Path) -> Result<Self> {
		let map = load(path)?;
		debug!(path = %path.display(), "opened source map");
		Ok(Self {
			path: path.to_path_buf(),
			map: Arc::new(map),
		})
	}

	/// Parse an in-memory map document; `path` is used for diagnostics only.
	pub fn from_slice(path: &Path, data: &[u8]) -> Result<Self> {
		let map = SourceMap::from_slice(data).map_err(|source| DecodeError::MalformedSourceMap {
			path: path.to_path_buf(),
			source,
		})?;
		Ok(Self {
			path: path.to_path_buf(),
			map: Arc::new(map),
		})
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub fn map(&self) -> &SourceMap {
		&self.map
	}
}

impl Drop for MapConsumer {
	fn drop(&mut self) {
		trace!(path = %self.path.display(), "released source map");
	}
}

fn load(path: &Path) -> Result<SourceMap> {
	let data = fs::read(path).map_err(|source| DecodeError::Io {
		path: path.to_path_buf(),
		source,
	})?;
	SourceMap::from_slice(&data).map_err(|source| DecodeError::MalformedSourceMap {
		path: path.to_path_buf(),
		source,
	})
}

#[derive(Debug)]
struct CachedMap {
	modified: Option<SystemTime>,
	map: Arc<SourceMap>,
}

/// Parsed maps keyed by path, invalidated by modification time.
#[derive(Debug, Default)]
pub struct MapCache {
	entries: Mutex<HashMap<PathBuf, CachedMap>>,
}

impl MapCache {
	pub fn new() -> Self {
		Self::default()
	}

	/// Open a consumer for `path`, reusing the cached parse when still fresh.
	pub fn open(&self, path: &Path) -> Result<MapConsumer> {
		let modified = fs::metadata(path).and_then(|m| m.modified()).ok();

		{
			let entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
			if let Some(cached) = entries.get(path) {
				if modified.is_some() && cached.modified == modified {
					trace!(path = %path.display(), "source map cache hit");
					return Ok(MapConsumer {
						path: path.to_path_buf(),
						map: Arc::clone(&cached.map),
					});
				}
			}
		}

		let map = Arc::new(load(path)?);
		debug!(path = %path.display(), "opened source map");

		let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
		entries.insert(
			path.to_path_buf(),
			CachedMap {
				modified,
				map: Arc::clone(&map),
			},
		);

		Ok(MapConsumer {
			path: path.to_path_buf(),
			map,
		})
	}

	pub fn len(&self) -> usize {
		self.entries.lock().map(|e| e.len()).unwrap_or(0)
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn clear(&self) {
		if let Ok(mut entries) = self.entries.lock() {
			entries.clear();
		}
	}
}
