// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Core types for tracelens stack trace symbolication.
//!
//! This crate provides the shared data model used by the decoding engine
//! (`tracelens-symbolicate`), the configuration layer and the CLI:
//! - Raw frame references extracted from minified stack traces
//! - Resolved source map files on disk
//! - Original positions and source context windows
//! - Per-frame decode reports suitable for JSON output
//!
//! None of these types are persisted. They live for the duration of a
//! single frame decode.

pub mod context;
pub mod editor;
pub mod error;
pub mod frame;
pub mod position;
pub mod report;

pub use context::{ContextLine, SourceContextWindow};
pub use editor::EditorScheme;
pub use error::{CoreError, Result};
pub use frame::RawFrameReference;
pub use position::{MatchKind, OriginalPosition, ResolvedMapFile};
pub use report::{DecodedFrame, FailureKind, FrameReport};
