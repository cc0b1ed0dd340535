//! The six literal end-to-end scenarios (§8), lookup half: given the
//! suffix string H would have produced, confirm J+L resolve it to the
//! expected dictionary entry.

use meikipop_dict::{lookup, Artifact, DictIndex, DictionaryEntry, EntryRef, KanjiForm, MatchedElement, PriorityScore, Reading, Sense};
use meikipop_deconjugate::RuleTable;

const RULES_JSON: &str = r#"[
	{"type": "stdrule", "detail": "past", "dec_end": "ました", "con_end": "ます", "dec_tag": "", "con_tag": ""},
	{"type": "stdrule", "detail": "polite", "dec_end": "ます", "con_end": "る", "dec_tag": "", "con_tag": "v1"},
	{"type": "stdrule", "detail": "negative past", "dec_end": "なかった", "con_end": "ない", "dec_tag": "", "con_tag": ""},
	{"type": "stdrule", "detail": "negative", "dec_end": "ない", "con_end": "", "dec_tag": "", "con_tag": ""},
	{"type": "stdrule", "detail": "v5k", "dec_end": "か", "con_end": "く", "dec_tag": "", "con_tag": "v5k"}
]"#;

fn entry(seq: u32, surface: &str, pos: &[&str]) -> DictionaryEntry {
	DictionaryEntry {
		seq,
		kanji_forms: vec![KanjiForm {
			surface: surface.to_string(),
			pri: vec![],
		}],
		readings: vec![Reading {
			reading: surface.to_string(),
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
	let mut index = DictIndex::new();
	for (i, e) in entries.iter().enumerate() {
		for (ki, k) in e.kanji_forms.iter().enumerate() {
			index.insert(
				kana::normalize(&k.surface),
				EntryRef {
					entry_index: i as u32,
					element: MatchedElement::KanjiForm(ki as u32),
				},
			);
		}
	}
	let priorities = entries.iter().map(|_| PriorityScore::ZERO).collect();
	Artifact {
		entries,
		priorities,
		index,
		rules: RuleTable::default(),
	}
}

#[test]
fn scenario_1_tabemashita_resolves_to_taberu_v1_past_polite() {
	let artifact = artifact_with(vec![entry(1, "食べる", &["v1"])]);
	let rules = RuleTable::from_json(RULES_JSON).unwrap();
	let results = lookup("食べました", &artifact, &rules);
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].entry.seq, 1);
	assert_eq!(results[0].matched_length, 5);
	assert_eq!(results[0].deconjugation_process, vec!["past".to_string(), "polite".to_string()]);
}

#[test]
fn scenario_2_hon_wo_yomu_identity_match() {
	let artifact = artifact_with(vec![entry(1, "読む", &["v5m"])]);
	let results = lookup("読む", &artifact, &RuleTable::default());
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].matched_length, 2);
	assert!(results[0].deconjugation_process.is_empty());
}

#[test]
fn scenario_3_kirei_na_falls_back_to_shorter_match() {
	let artifact = artifact_with(vec![entry(1, "綺麗", &["adj-na"])]);
	let rules = RuleTable::from_json(RULES_JSON).unwrap();
	let results = lookup("綺麗な", &artifact, &rules);
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].matched_length, 2);
}

#[test]
fn scenario_4_ikanakatta_resolves_to_iku_v5k_via_three_step_chain() {
	let artifact = artifact_with(vec![entry(1, "行く", &["v5k"])]);
	let rules = RuleTable::from_json(RULES_JSON).unwrap();
	let results = lookup("行かなかった", &artifact, &rules);
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].matched_length, 6);
	assert_eq!(
		results[0].deconjugation_process,
		vec!["negative past".to_string(), "negative".to_string(), "v5k".to_string()]
	);
}

#[test]
fn boundary_particle_no_succeeds_at_length_one() {
	let artifact = artifact_with(vec![entry(1, "の", &["prt"])]);
	let results = lookup("の", &artifact, &RuleTable::default());
	assert_eq!(results.len(), 1);
	assert_eq!(results[0].matched_length, 1);
}

#[test]
fn unrelated_suffix_has_no_match() {
	let artifact = artifact_with(vec![entry(1, "読む", &["v5m"])]);
	let results = lookup("何もない", &artifact, &RuleTable::default());
	assert!(results.is_empty());
}
