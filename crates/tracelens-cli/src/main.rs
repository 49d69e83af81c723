// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! tracelens - decode minified JavaScript stack traces against local source maps.

use anyhow::Context;
use clap::{ArgAction, Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::EnvFilter;

mod commands;
mod input;

use commands::{DecodeArgs, FramesArgs, NormalizeArgs, ResolveArgs};

/// Decode production stack traces using locally built source maps.
#[derive(Parser, Debug)]
#[command(name = "tracelens", version)]
struct Args {
	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, global = true, action = ArgAction::Count)]
	verbose: u8,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Decode every frame of a stack trace
	Decode(DecodeArgs),
	/// Show which source map a minified filename resolves to
	Resolve(ResolveArgs),
	/// Print the hash-stripped identity of filenames
	Normalize(NormalizeArgs),
	/// Print the frame references found in a stack trace
	Frames(FramesArgs),
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "debug",
		_ => "trace",
	};
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_env("TRACELENS_LOG").unwrap_or_else(|_| EnvFilter::new(default_level)),
		)
		.with_writer(io::stderr)
		.init();
}

fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	init_tracing(args.verbose);

	let stdout = io::stdout();
	let mut out = stdout.lock();

	match args.command {
		Command::Decode(decode) => {
			let config = tracelens_config::load_config_with_cli(decode.overrides())
				.context("failed to load configuration")?;
			let trace = input::read_trace(decode.input.trace.as_deref(), decode.input.file.as_deref())?;
			commands::handle_decode(&decode, &config, &trace, &mut out)?;
		}
		Command::Resolve(resolve) => {
			let config = tracelens_config::load_config_with_cli(resolve.overrides())
				.context("failed to load configuration")?;
			commands::handle_resolve(&resolve, &config, &mut out)?;
		}
		Command::Normalize(normalize) => commands::handle_normalize(&normalize, &mut out)?,
		Command::Frames(frames) => {
			let trace = input::read_trace(frames.input.trace.as_deref(), frames.input.file.as_deref())?;
			commands::handle_frames(&frames, &trace, &mut out)?;
		}
	}

	out.flush()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;
	use tracelens_core::EditorScheme;

	#[test]
	fn test_cli_definition() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_parse_decode_flags() {
		let args = Args::try_parse_from([
			"tracelens",
			"-v",
			"decode",
			"--map-dir",
			"build",
			"--context",
			"2",
			"--editor",
			"intellij",
			"--json",
			"at a (app.js:1:0)",
		])
		.unwrap();

		assert_eq!(args.verbose, 1);
		let Command::Decode(decode) = args.command else {
			panic!("expected decode");
		};
		assert_eq!(decode.context_radius, Some(2));
		assert_eq!(decode.editor, Some(EditorScheme::Idea));
		assert!(decode.json);
		assert_eq!(decode.input.trace.as_deref(), Some("at a (app.js:1:0)"));
	}

	#[test]
	fn test_unknown_editor_rejected() {
		assert!(Args::try_parse_from(["tracelens", "decode", "--editor", "emacs"]).is_err());
	}

	#[test]
	fn test_normalize_requires_files() {
		assert!(Args::try_parse_from(["tracelens", "normalize"]).is_err());
	}
}
