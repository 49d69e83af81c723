// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Reading trace text from an argument, a file, or stdin.

use anyhow::{bail, Context};
use std::io::{self, IsTerminal, Read};
use std::path::Path;

/// Pick the trace source: inline text, then `--file`, then piped stdin.
///
/// An inline value of `-` reads stdin explicitly.
pub fn read_trace(inline: Option<&str>, file: Option<&Path>) -> anyhow::Result<String> {
	match (inline, file) {
		(Some(_), Some(_)) => bail!("pass either a trace argument or --file, not both"),
		(Some("-"), None) => read_stdin(),
		(Some(text), None) => Ok(text.to_string()),
		(None, Some(path)) => std::fs::read_to_string(path)
			.with_context(|| format!("failed to read trace file {}", path.display())),
		(None, None) => {
			if io::stdin().is_terminal() {
				bail!("no trace given; pass TRACE, --file PATH, or pipe the trace on stdin");
			}
			read_stdin()
		}
	}
}

fn read_stdin() -> anyhow::Result<String> {
	let mut buf = String::new();
	io::stdin()
		.read_to_string(&mut buf)
		.context("failed to read trace from stdin")?;
	Ok(buf)
}
