// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Human-readable rendering of decode results and editor links.

use std::fmt;
use std::path::{Path, PathBuf};

use tracelens_core::{DecodedFrame, EditorScheme, FrameReport, SourceContextWindow};

/// Presentation settings for [`ReportDisplay`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
	/// Root joined with relative source paths when building editor links.
	pub project_root: Option<PathBuf>,
	pub editor: EditorScheme,
	/// Include the numbered source listing.
	pub show_context: bool,
}

/// Displays one frame report as an indented block.
pub struct ReportDisplay<'a> {
	report: &'a FrameReport,
	options: &'a RenderOptions,
}

impl<'a> ReportDisplay<'a> {
	pub fn new(report: &'a FrameReport, options: &'a RenderOptions) -> Self {
		Self { report, options }
	}
}

impl fmt::Display for ReportDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self.report {
			FrameReport::Decoded(decoded) => write_decoded(f, decoded, self.options),
			FrameReport::Failed {
				frame,
				kind,
				message,
				..
			} => {
				writeln!(f, "{frame}")?;
				writeln!(f, "  !! {message} [{kind}]")
			}
		}
	}
}

/// Displays one decoded frame.
pub struct FrameDisplay<'a> {
	decoded: &'a DecodedFrame,
	options: &'a RenderOptions,
}

impl<'a> FrameDisplay<'a> {
	pub fn new(decoded: &'a DecodedFrame, options: &'a RenderOptions) -> Self {
		Self { decoded, options }
	}
}

impl fmt::Display for FrameDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write_decoded(f, self.decoded, self.options)
	}
}

/// Render a report to a string.
pub fn render_report(report: &FrameReport, options: &RenderOptions) -> String {
	ReportDisplay::new(report, options).to_string()
}

/// Render a decoded frame to a string.
pub fn render_frame(decoded: &DecodedFrame, options: &RenderOptions) -> String {
	FrameDisplay::new(decoded, options).to_string()
}

fn write_decoded(f: &mut fmt::Formatter<'_>, decoded: &DecodedFrame, options: &RenderOptions) -> fmt::Result {
	let position = &decoded.original_position;

	writeln!(f, "{}", decoded.minified_frame)?;
	write!(f, "  -> {position}")?;
	if let Some(symbol) = &position.symbol_name {
		write!(f, " in {symbol}")?;
	}
	writeln!(f)?;
	writeln!(
		f,
		"     via {} ({})",
		decoded.map_file.path.display(),
		decoded.map_file.match_kind
	)?;
	writeln!(
		f,
		"     open {}",
		editor_link(
			options.project_root.as_deref(),
			&position.source_path,
			position.line,
			position.column,
			options.editor,
		)
	)?;

	if options.show_context {
		match &decoded.context_window {
			Some(window) if !window.is_empty() => {
				writeln!(f)?;
				write!(f, "{}", ContextDisplay(window))?;
			}
			_ => writeln!(f, "     (no embedded source)")?,
		}
	}
	Ok(())
}

/// Numbered listing with the target line marked `>`.
pub struct ContextDisplay<'a>(pub &'a SourceContextWindow);

impl fmt::Display for ContextDisplay<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let width = self.0.gutter_width();
		for line in &self.0.lines {
			let marker = if line.is_target { '>' } else { ' ' };
			writeln!(
				f,
				"  {marker} {:>width$} | {}",
				line.line_number,
				line.content,
				width = width
			)?;
		}
		Ok(())
	}
}

/// Strip bundler virtual prefixes so a map source reads as a project path.
///
/// `webpack:///./src/a.ts`, `webpack://app/./src/a.ts` and `../../src/a.ts`
/// all become `src/a.ts`. `file://` URLs keep their absolute path.
pub fn local_source_path(source_path: &str) -> &str {
	let mut path = source_path;

	if let Some(rest) = path.strip_prefix("file://") {
		return rest;
	}

	if let Some(idx) = path.find("://") {
		let rest = &path[idx + 3..];
		path = match rest.find('/') {
			Some(slash) => &rest[slash + 1..],
			None => rest,
		};
	}

	loop {
		if let Some(rest) = path.strip_prefix("./") {
			path = rest;
		} else if let Some(rest) = path.strip_prefix("../") {
			path = rest;
		} else {
			break;
		}
	}

	path
}

/// Build a link that opens the original location in an editor.
///
/// `column` is 0-indexed as stored in positions; links use 1-indexed columns.
pub fn editor_link(
	project_root: Option<&Path>,
	source_path: &str,
	line: u32,
	column: u32,
	editor: EditorScheme,
) -> String {
	let local = local_source_path(source_path);
	let resolved = match project_root {
		Some(root) if !Path::new(local).is_absolute() => root.join(local),
		_ => PathBuf::from(local),
	};
	let path = resolved.to_string_lossy();
	let column = column + 1;

	match editor {
		EditorScheme::Vscode | EditorScheme::Cursor => {
			let separator = if path.starts_with('/') { "" } else { "/" };
			format!("{editor}://file{separator}{path}:{line}:{column}")
		}
		EditorScheme::Idea => format!("idea://open?file={path}&line={line}&column={column}"),
		EditorScheme::Plain => format!("{path}:{line}:{column}"),
	}
}
