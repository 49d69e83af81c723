// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tracing::instrument;

use tracelens_config::{CliOverrides, TracelensConfig};
use tracelens_core::EditorScheme;
use tracelens_symbolicate::{
	dedupe_frames, normalize, parse, resolve, DecodeOptions, RenderOptions, ReportDisplay, ResolveMiss,
	TraceDecoder,
};

#[derive(Debug, Clone, Default, Args)]
pub struct TraceInputArgs {
	/// Stack trace text; `-` or omitted reads stdin
	pub trace: Option<String>,

	/// Read the stack trace from a file
	#[arg(long, short = 'f', value_name = "PATH")]
	pub file: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct DecodeArgs {
	#[command(flatten)]
	pub input: TraceInputArgs,

	/// Directory holding the *.js.map build artifacts
	#[arg(long, value_name = "DIR")]
	pub map_dir: Option<PathBuf>,

	/// Lines of original source shown around the target line
	#[arg(long = "context", short = 'C', value_name = "N")]
	pub context_radius: Option<usize>,

	/// Emit JSON reports instead of text
	#[arg(long)]
	pub json: bool,

	/// Drop frames repeating an earlier file, line and column
	#[arg(long)]
	pub dedupe: bool,

	/// Re-read source maps for every frame
	#[arg(long)]
	pub no_cache: bool,

	/// Root joined with original source paths in editor links
	#[arg(long, value_name = "DIR")]
	pub project_root: Option<PathBuf>,

	/// Editor link format: vscode, cursor, idea or plain
	#[arg(long)]
	pub editor: Option<EditorScheme>,
}

impl DecodeArgs {
	pub fn overrides(&self) -> CliOverrides {
		CliOverrides {
			map_dir: self.map_dir.clone(),
			context_radius: self.context_radius,
			project_root: self.project_root.clone(),
			editor: self.editor,
			dedupe: self.dedupe,
			no_cache: self.no_cache,
		}
	}
}

#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
	/// Minified filename as it appears in the trace
	pub file: String,

	/// Directory holding the *.js.map build artifacts
	#[arg(long, value_name = "DIR")]
	pub map_dir: Option<PathBuf>,

	/// Emit JSON instead of text
	#[arg(long)]
	pub json: bool,
}

impl ResolveArgs {
	pub fn overrides(&self) -> CliOverrides {
		CliOverrides {
			map_dir: self.map_dir.clone(),
			..Default::default()
		}
	}
}

#[derive(Debug, Clone, Args)]
pub struct NormalizeArgs {
	/// Filenames to strip of content hashes
	#[arg(required = true)]
	pub files: Vec<String>,
}

#[derive(Debug, Clone, Default, Args)]
pub struct FramesArgs {
	#[command(flatten)]
	pub input: TraceInputArgs,

	/// Drop frames repeating an earlier file, line and column
	#[arg(long)]
	pub dedupe: bool,

	/// Emit JSON instead of text
	#[arg(long)]
	pub json: bool,
}

pub fn decode_options(config: &TracelensConfig) -> DecodeOptions {
	DecodeOptions::new(&config.map_dir)
		.with_context_radius(config.context_radius)
		.with_dedupe(config.dedupe)
		.with_cache(config.cache_maps)
}

#[instrument(skip_all, fields(map_dir = %config.map_dir.display()))]
pub fn handle_decode(
	args: &DecodeArgs,
	config: &TracelensConfig,
	trace: &str,
	out: &mut impl Write,
) -> anyhow::Result<()> {
	let decoder = TraceDecoder::new(decode_options(config));
	let reports = decoder.decode_trace(trace);

	if args.json {
		serde_json::to_writer_pretty(&mut *out, &reports)?;
		writeln!(out)?;
		return Ok(());
	}

	if reports.is_empty() {
		writeln!(out, "no stack frames found")?;
		return Ok(());
	}

	let options = RenderOptions {
		project_root: config.project_root.clone(),
		editor: config.editor,
		show_context: true,
	};
	for report in &reports {
		writeln!(out, "{}", ReportDisplay::new(report, &options))?;
	}

	let decoded = reports.iter().filter(|r| r.is_decoded()).count();
	writeln!(out, "decoded {decoded} of {} frames", reports.len())?;
	Ok(())
}

pub fn handle_resolve(args: &ResolveArgs, config: &TracelensConfig, out: &mut impl Write) -> anyhow::Result<()> {
	match resolve(&config.map_dir, &args.file) {
		Ok(found) if args.json => {
			serde_json::to_writer_pretty(&mut *out, &found)?;
			writeln!(out)?;
		}
		Ok(found) => {
			write!(out, "{} ({})", found.path.display(), found.match_kind)?;
			if let Some(modified) = found.modified_at {
				write!(out, " modified {}", modified.to_rfc3339())?;
			}
			writeln!(out)?;
		}
		Err(miss) => {
			let reason = match miss {
				ResolveMiss::DirectoryMissing => " (directory does not exist)",
				ResolveMiss::NoCandidate => "",
			};
			if args.json {
				writeln!(out, "null")?;
			} else {
				writeln!(
					out,
					"no source map for {} in {}{reason}",
					args.file,
					config.map_dir.display()
				)?;
			}
		}
	}
	Ok(())
}

pub fn handle_normalize(args: &NormalizeArgs, out: &mut impl Write) -> anyhow::Result<()> {
	for file in &args.files {
		writeln!(out, "{file}\t{}", normalize(file))?;
	}
	Ok(())
}

pub fn handle_frames(args: &FramesArgs, trace: &str, out: &mut impl Write) -> anyhow::Result<()> {
	let mut frames = parse(trace);
	if args.dedupe {
		frames = dedupe_frames(frames);
	}

	if args.json {
		serde_json::to_writer_pretty(&mut *out, &frames)?;
		writeln!(out)?;
		return Ok(());
	}

	for frame in &frames {
		writeln!(out, "{frame}\t{}", frame.original_text)?;
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::fs;
	use tempfile::TempDir;

	const MAP: &str = r#"{"version":3,"sources":["src/app.ts"],"sourcesContent":["const a = 1;\nthrow new Error(a);\n"],"names":[],"mappings":"AAAA;AACA"}"#;

	fn config_for(dir: &TempDir) -> TracelensConfig {
		TracelensConfig {
			map_dir: dir.path().to_path_buf(),
			..TracelensConfig::default()
		}
	}

	fn output(f: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
		let mut buf = Vec::new();
		f(&mut buf).unwrap();
		String::from_utf8(buf).unwrap()
	}

	#[test]
	fn test_decode_text_output() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("app-Ab12Cd34.js.map"), MAP).unwrap();
		let config = config_for(&dir);

		let out = output(|buf| {
			handle_decode(
				&DecodeArgs::default(),
				&config,
				"Error: 1\n    at main (app-Zz99Yy88.js:2:0)",
				buf,
			)
		});

		assert!(out.contains("-> src/app.ts:2:0"));
		assert!(out.contains(">"));
		assert!(out.contains("throw new Error(a);"));
		assert!(out.ends_with("decoded 1 of 1 frames\n"));
	}

	#[test]
	fn test_decode_json_output() {
		let dir = TempDir::new().unwrap();
		let config = config_for(&dir);
		let args = DecodeArgs {
			json: true,
			..Default::default()
		};

		let out = output(|buf| handle_decode(&args, &config, "at main (gone.js:1:0)", buf));
		let value: serde_json::Value = serde_json::from_str(&out).unwrap();
		assert_eq!(value[0]["status"], "failed");
		assert_eq!(value[0]["kind"], "source_map_not_found");
	}

	#[test]
	fn test_decode_no_frames() {
		let dir = TempDir::new().unwrap();
		let out = output(|buf| handle_decode(&DecodeArgs::default(), &config_for(&dir), "hello", buf));
		assert_eq!(out, "no stack frames found\n");
	}

	#[test]
	fn test_resolve_output() {
		let dir = TempDir::new().unwrap();
		fs::write(dir.path().join("app-Ab12Cd34.js.map"), MAP).unwrap();
		let config = config_for(&dir);

		let args = ResolveArgs {
			file: "app-Zz99Yy88.js".to_string(),
			map_dir: None,
			json: false,
		};
		let out = output(|buf| handle_resolve(&args, &config, buf));
		assert!(out.contains("app-Ab12Cd34.js.map (fuzzy)"));

		let args = ResolveArgs {
			file: "other.js".to_string(),
			map_dir: None,
			json: false,
		};
		let out = output(|buf| handle_resolve(&args, &config, buf));
		assert!(out.starts_with("no source map for other.js"));
	}

	#[test]
	fn test_normalize_output() {
		let args = NormalizeArgs {
			files: vec!["index-Q8JOaMCl.js".to_string(), "date-picker.js".to_string()],
		};
		let out = output(|buf| handle_normalize(&args, buf));
		assert_eq!(out, "index-Q8JOaMCl.js\tindex\ndate-picker.js\tdate-picker\n");
	}

	#[test]
	fn test_frames_output() {
		let args = FramesArgs {
			dedupe: true,
			..Default::default()
		};
		let out = output(|buf| handle_frames(&args, "at a (https://x.io/app.js:3:7)", buf));
		assert_eq!(out.lines().count(), 1);
		assert!(out.starts_with("app.js:3:7\t"));
	}

	#[test]
	fn test_overrides_from_decode_args() {
		let args = DecodeArgs {
			map_dir: Some(PathBuf::from("build")),
			context_radius: Some(2),
			editor: Some(EditorScheme::Idea),
			dedupe: true,
			..Default::default()
		};
		let overrides = args.overrides();
		assert_eq!(overrides.map_dir, Some(PathBuf::from("build")));
		assert_eq!(overrides.context_radius, Some(2));
		assert_eq!(overrides.editor, Some(EditorScheme::Idea));
		assert!(overrides.dedupe);
		assert!(!overrides.no_cache);
	}
}
