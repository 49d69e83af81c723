// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for core model parsing.

use thiserror::Error;

/// Errors raised when parsing core model values from strings.
#[derive(Debug, Error)]
pub enum CoreError {
	#[error("invalid editor scheme: {0}")]
	InvalidEditorScheme(String),

	#[error("invalid failure kind: {0}")]
	InvalidFailureKind(String),

	#[error("serialization error: {0}")]
	Serialization(#[from] serde_json::Error),
}

/// Result type for core model operations.
pub type Result<T> = std::result::Result<T, CoreError>;
