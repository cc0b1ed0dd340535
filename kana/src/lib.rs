//! Japanese character manipulation, classification and normalization.
//!
//! This is largely based on https://github.com/PSeitz/wana_kana_rust but
//! provides an API specifically designed for this application.

mod constants;
mod util;

pub mod is;
pub mod to;

pub use self::is::{is_hiragana, is_kanji, is_katakana, is_word_mark};
pub use self::to::{to_hiragana, to_romaji};

use std::borrow::Cow;

use unicode_normalization::UnicodeNormalization;

/// Returns true if `text` contains at least one kana or kanji code point.
///
/// Used by the OCR post-processor to drop lines that carry no Japanese
/// content before they are grouped into paragraphs.
pub fn has_japanese(text: &str) -> bool {
	text.chars().any(|c| is_kanji(c) || is_hiragana(c) || is_katakana(c))
}

/// Normalizes a string for use as a dictionary lookup key or for
/// equality comparison.
///
/// This is the single normalization function required to be applied
/// identically at dictionary-build time and at query time: ASCII is
/// lowercased, full-width katakana is converted to hiragana, kanji is
/// left untouched, voiced/semi-voiced marks that follow a base kana are
/// composed (NFC) rather than left as a base character plus a combining
/// mark, and surrounding whitespace is stripped. Long vowel marks (`ー`)
/// are preserved as-is.
pub fn normalize<'a, S>(text: S) -> String
where
	S: Into<Cow<'a, str>>,
{
	let text = text.into();
	let trimmed = text.trim();

	// Compose combining voiced/semi-voiced marks onto their base kana
	// (e.g. `か` + U+3099 -> `が`) before anything else, so that later
	// steps only ever see precomposed characters.
	let composed: String = trimmed.nfc().collect();

	let mut out = String::with_capacity(composed.len());
	for c in composed.chars() {
		if is_katakana(c) && c != 'ー' {
			out.push(util::katakana_to_hiragana(c));
		} else if c.is_ascii() {
			out.extend(c.to_ascii_lowercase().to_lowercase());
		} else {
			out.push(c);
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_normalize_idempotent() {
		let samples = ["食べる", "タベル", "ＡＢＣ", "  です｡  ", "こゝろ"];
		for s in samples.iter() {
			let once = normalize(*s);
			let twice = normalize(once.as_str());
			assert_eq!(once, twice, "normalize not idempotent for {:?}", s);
		}
	}

	#[test]
	fn test_normalize_katakana_to_hiragana() {
		assert_eq!(normalize("タベル"), normalize("たべる"));
	}

	#[test]
	fn test_normalize_ascii_lowercase() {
		assert_eq!(normalize("ABC"), "abc");
	}

	#[test]
	fn test_normalize_trims_whitespace() {
		assert_eq!(normalize("  です  "), normalize("です"));
	}

	#[test]
	fn test_has_japanese() {
		assert!(has_japanese("食べました"));
		assert!(!has_japanese("hello, world! 123"));
	}
}
