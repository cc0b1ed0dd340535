//! Dictionary lookup engine (L, §4.5): composes H's suffix string with the
//! deconjugator (J) and the dictionary index (D).

use meikipop_deconjugate::{can_deconjugate, deconjugate, DeconjugationForm, RuleTable};

use crate::artifact::Artifact;
use crate::entry::DictionaryEntry;

pub const MAX_DICT_ENTRIES: usize = 20;

/// One ranked lookup result (§4.5).
#[derive(Clone, Debug)]
pub struct LookupMatch<'a> {
	pub entry: &'a DictionaryEntry,
	pub matched_form: String,
	pub matched_length: usize,
	pub deconjugation_process: Vec<String>,
	entry_index: usize,
}

/// Runs the longest-match, POS-validated lookup described in §4.5 against
/// `s`, the suffix string produced by hit-scan.
pub fn lookup<'a>(s: &str, artifact: &'a Artifact, rules: &RuleTable) -> Vec<LookupMatch<'a>> {
	let chars: Vec<char> = s.chars().collect();

	for n in (1..=chars.len()).rev() {
		let prefix: String = chars[..n].iter().collect();
		// No rule's dec_end suffixes this prefix, so deconjugate() can only
		// ever produce the identity form back out; skip the full expansion.
		let candidates = if can_deconjugate(&prefix, rules) {
			deconjugate(&prefix, rules)
		} else {
			vec![DeconjugationForm::identity(&prefix)]
		};

		let mut matches: Vec<LookupMatch<'a>> = Vec::new();
		for form in &candidates {
			let key = kana::normalize(&form.underlying);
			let Some(refs) = artifact.index.get(&key) else {
				continue;
			};
			for entry_ref in refs {
				let entry_index = entry_ref.entry_index as usize;
				let entry = &artifact.entries[entry_index];
				let pos_ok = match form.last_tag() {
					None => true,
					Some(tag) => entry.has_pos(tag),
				};
				if !pos_ok {
					continue;
				}
				matches.push(LookupMatch {
					entry,
					matched_form: form.underlying.clone(),
					matched_length: n,
					deconjugation_process: form.process.clone(),
					entry_index,
				});
			}
		}

		if !matches.is_empty() {
			matches.sort_by(|a, b| {
				let pa = artifact.priority_of(a.entry_index);
				let pb = artifact.priority_of(b.entry_index);
				pb.cmp(&pa)
					.then_with(|| a.deconjugation_process.len().cmp(&b.deconjugation_process.len()))
					.then_with(|| a.entry.seq.cmp(&b.entry.seq))
			});
			matches.truncate(MAX_DICT_ENTRIES);
			return matches;
		}
	}

	Vec::new()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::{EntryRef, KanjiForm, MatchedElement, Reading, Sense};
	use meikipop_deconjugate::rule::{DeconjugationRule, RuleAlternative, StdRuleBody};

	fn entry(seq: u32, reading: &str, pos: &[&str]) -> DictionaryEntry {
		DictionaryEntry {
			seq,
			kanji_forms: vec![KanjiForm {
				surface: reading.to_string(),
				pri: vec![],
			}],
			readings: vec![Reading {
				reading: reading.to_string(),
				pri: vec![],
				restrictions: vec![],
			}],
			senses: vec![Sense {
				gloss: vec!["gloss".to_string()],
				pos: pos.iter().map(|s| s.to_string()).collect(),
				misc: vec![],
			}],
		}
	}

	fn artifact_with(entries: Vec<DictionaryEntry>) -> Artifact {
		let mut artifact = Artifact {
			entries,
			priorities: vec![],
			index: crate::index::DictIndex::new(),
			rules: RuleTable::default(),
		};
		artifact.priorities = artifact.entries.iter().map(|_| crate::entry::PriorityScore::ZERO).collect();
		for (i, e) in artifact.entries.iter().enumerate() {
			for r in &e.readings {
				artifact.index.insert(
					kana::normalize(&r.reading),
					EntryRef {
						entry_index: i as u32,
						element: MatchedElement::Reading(0),
					},
				);
			}
		}
		artifact
	}

	fn past_tense_rules() -> RuleTable {
		RuleTable::new(vec![DeconjugationRule::StdRule(StdRuleBody {
			detail: "past".to_string(),
			alternatives: vec![RuleAlternative {
				dec_end: "た".to_string(),
				con_end: "る".to_string(),
				dec_tag: "".to_string(),
				con_tag: "v1".to_string(),
			}],
		})])
	}

	#[test]
	fn test_identity_match() {
		let artifact = artifact_with(vec![entry(1, "読む", &["v5m"])]);
		let results = lookup("読む", &artifact, &RuleTable::default());
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].matched_length, 2);
		assert!(results[0].deconjugation_process.is_empty());
	}

	#[test]
	fn test_no_match_returns_empty() {
		let artifact = artifact_with(vec![entry(1, "読む", &["v5m"])]);
		let results = lookup("何もない", &artifact, &RuleTable::default());
		assert!(results.is_empty());
	}

	#[test]
	fn test_longest_match_wins() {
		let artifact = artifact_with(vec![entry(1, "綺麗", &["adj-na"])]);
		// no entry for "綺麗な" at length 3, only "綺麗" at length 2
		let results = lookup("綺麗な", &artifact, &RuleTable::default());
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].matched_length, 2);
	}

	#[test]
	fn test_pos_validated_conjugated_match() {
		let artifact = artifact_with(vec![entry(1, "る", &["v1"])]);
		let results = lookup("た", &artifact, &past_tense_rules());
		assert_eq!(results.len(), 1);
		assert_eq!(results[0].deconjugation_process, vec!["past".to_string()]);
	}
}
