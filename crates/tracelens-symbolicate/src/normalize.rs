// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Hash-stripping for bundler output filenames.
//!
//! Production bundles and locally rebuilt bundles carry different content
//! hashes for the same module (`index-Q8JOaMCl.js` vs `index-Bglop3sX.js`).
//! [`normalize`] reduces both to the stable identity `index`.
//!
//! A suffix counts as a hash when it is:
//! - all digits (a numeric build counter), or
//! - at least two `[A-Za-z0-9_]` characters containing a digit or mixed case.
//!
//! Plain lowercase words are never stripped, so `date-picker.js` stays
//! `date-picker`.

/// Extension removed before looking for hash suffixes.
const JS_EXTENSION: &str = ".js";

/// Reduce a bundle filename to its hash-free base name, without extension.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(file_name: &str) -> String {
	normalized_stem(file_name).to_string()
}

/// Borrowing form of [`normalize`]; the result is always a prefix of the input.
pub fn normalized_stem(file_name: &str) -> &str {
	let mut current = file_name;
	while let Some(next) = strip_once(current) {
		current = next;
	}
	current
}

/// Remove one `.js` extension or one hash-like `-suffix`.
fn strip_once(name: &str) -> Option<&str> {
	if let Some(stem) = name.strip_suffix(JS_EXTENSION) {
		return Some(stem);
	}

	let idx = name.rfind('-')?;
	if idx == 0 {
		return None;
	}

	if is_hash_like(&name[idx + 1..]) {
		Some(&name[..idx])
	} else {
		None
	}
}

/// Whether a `-`-separated suffix looks like a build hash or counter.
pub fn is_hash_like(suffix: &str) -> bool {
	if suffix.is_empty() {
		return false;
	}

	if suffix.bytes().all(|b| b.is_ascii_digit()) {
		return true;
	}

	if suffix.len() < 2
		|| !suffix
			.bytes()
			.all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
	{
		return false;
	}

	let has_upper = suffix.bytes().any(|b| b.is_ascii_uppercase());
	let has_lower = suffix.bytes().any(|b| b.is_ascii_lowercase());
	let has_digit = suffix.bytes().any(|b| b.is_ascii_digit());

	(has_upper && has_lower) || has_digit
}

/// Base name of a `*.js.map` file as the `.js` name it maps.
pub fn map_file_to_script_name(map_file_name: &str) -> Option<String> {
	map_file_name
		.strip_suffix(".js.map")
		.map(|stem| format!("{stem}{JS_EXTENSION}"))
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_strips_mixed_case_hash() {
		assert_eq!(normalize("useAccessibilityStore-Q8JOaMCl.js"), "useAccessibilityStore");
		assert_eq!(normalize("chunk-Bglop.js"), "chunk");
	}

	#[test]
	fn test_strips_numeric_counter() {
		assert_eq!(normalize("index-9.js"), "index");
		assert_eq!(normalize("vendor-20240101123000.js"), "vendor");
	}

	#[test]
	fn test_strips_short_hash_with_digit() {
		assert_eq!(normalize("chunk-3s.js"), "chunk");
	}

	#[test]
	fn test_keeps_lowercase_word_suffix() {
		assert_eq!(normalize("foo-ab.js"), "foo-ab");
		assert_eq!(normalize("date-picker.js"), "date-picker");
		assert_eq!(normalize("react-dom-client.js"), "react-dom-client");
	}

	#[test]
	fn test_strips_stacked_suffixes() {
		assert_eq!(normalize("date-picker-3s-Q8JOaMCl.js"), "date-picker");
		assert_eq!(normalize("index-12-AbCdEf.js"), "index");
	}

	#[test]
	fn test_single_char_suffix_kept() {
		assert_eq!(normalize("foo-a.js"), "foo-a");
		assert_eq!(normalize("foo-.js"), "foo-");
	}

	#[test]
	fn test_leading_dash_is_not_a_separator() {
		assert_eq!(normalize("-Q8JOaMCl.js"), "-Q8JOaMCl");
	}

	#[test]
	fn test_no_extension() {
		assert_eq!(normalize("index-Q8JOaMCl"), "index");
		assert_eq!(normalize("main"), "main");
	}

	#[test]
	fn test_punctuation_suffix_kept() {
		assert_eq!(normalize("lib-1.2.js"), "lib-1.2");
	}

	#[test]
	fn test_normalized_stem_is_prefix() {
		let name = "index-Q8JOaMCl.js";
		let stem = normalized_stem(name);
		assert_eq!(stem, "index");
		assert!(name.starts_with(stem));
	}

	#[test]
	fn test_is_hash_like() {
		assert!(is_hash_like("123"));
		assert!(is_hash_like("9"));
		assert!(is_hash_like("Q8JOaMCl"));
		assert!(is_hash_like("aB"));
		assert!(is_hash_like("a_1"));
		assert!(!is_hash_like("ab"));
		assert!(!is_hash_like("ABC"));
		assert!(!is_hash_like("a"));
		assert!(!is_hash_like(""));
		assert!(!is_hash_like("a.1"));
	}

	#[test]
	fn test_map_file_to_script_name() {
		assert_eq!(
			map_file_to_script_name("index-Bglop3sX.js.map").as_deref(),
			Some("index-Bglop3sX.js")
		);
		assert_eq!(map_file_to_script_name("style.css.map"), None);
	}

	proptest! {
		#[test]
		fn normalize_is_idempotent(name in "[A-Za-z0-9_.-]{0,24}") {
			let once = normalize(&name);
			let twice = normalize(&once);
			prop_assert_eq!(once, twice);
		}

		#[test]
		fn normalize_is_idempotent_on_bundle_names(
			base in "[a-z]{1,8}(-[a-z]{2,6}){0,2}",
			hash in "[A-Za-z0-9]{2,10}",
		) {
			let name = format!("{base}-{hash}.js");
			let once = normalize(&name);
			prop_assert_eq!(normalize(&once), once.clone());
			prop_assert!(!once.ends_with(".js"));
		}

		#[test]
		fn lowercase_word_names_survive(base in "[a-z]{1,8}(-[a-z]{2,8}){0,3}") {
			let name = format!("{base}.js");
			prop_assert_eq!(normalize(&name), base);
		}
	}
}
