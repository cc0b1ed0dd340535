//! Dictionary entry data model (§3).

use serde::{Deserialize, Serialize};

/// One kanji (surface) spelling of an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KanjiForm {
	pub surface: String,
	/// JMdict priority tags (`spec1`, `news1`, `nf01`...), logically a set.
	pub pri: Vec<String>,
}

/// One reading of an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reading {
	pub reading: String,
	pub pri: Vec<String>,
	/// Surfaces this reading is restricted to, or empty for "any surface".
	pub restrictions: Vec<String>,
}

/// One sense (gloss group) of an entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sense {
	pub gloss: Vec<String>,
	pub pos: Vec<String>,
	pub misc: Vec<String>,
}

/// A single JMdict-derived dictionary entry (§3). Invariant: every entry
/// has at least one reading, and non-empty `restrictions` refer to
/// surfaces present in `kanji_forms`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DictionaryEntry {
	pub seq: u32,
	pub kanji_forms: Vec<KanjiForm>,
	pub readings: Vec<Reading>,
	pub senses: Vec<Sense>,
}

impl DictionaryEntry {
	/// Whether any sense's POS set contains `tag`.
	pub fn has_pos(&self, tag: &str) -> bool {
		self.senses.iter().any(|s| s.pos.iter().any(|p| p == tag))
	}
}

/// A non-negative "how common is this entry" score (§3). Higher is more
/// common; ties are broken by entry sequence number ascending.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PriorityScore(pub u32);

impl PriorityScore {
	pub const ZERO: PriorityScore = PriorityScore(0);

	pub fn add(self, amount: u32) -> PriorityScore {
		PriorityScore(self.0.saturating_add(amount))
	}
}

/// Which element of a `DictionaryEntry` a `DictIndex` entry matched
/// through (§3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchedElement {
	KanjiForm(u32),
	Reading(u32),
	/// Reached only via inverse-reading expansion (§4.5), not a direct key
	/// on the reading/surface itself.
	InverseReading(u32),
}

/// A pointer from a `DictIndex` key to one entry and the element within
/// it that produced the key (§3).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRef {
	pub entry_index: u32,
	pub element: MatchedElement,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_has_pos() {
		let entry = DictionaryEntry {
			seq: 1,
			kanji_forms: vec![],
			readings: vec![Reading {
				reading: "たべる".to_string(),
				pri: vec![],
				restrictions: vec![],
			}],
			senses: vec![Sense {
				gloss: vec!["to eat".to_string()],
				pos: vec!["v1".to_string()],
				misc: vec![],
			}],
		};
		assert!(entry.has_pos("v1"));
		assert!(!entry.has_pos("v5k"));
	}
}
