//! JMdict JSON ingestion and priority scoring (§4.6 steps 1-3, §6).

use meikipop_dict::{DictionaryEntry, KanjiForm, PriorityScore, Reading, Sense};
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Deserialize)]
pub struct RawEntry {
	pub seq: u32,
	#[serde(default)]
	pub k_ele: Vec<RawKanjiElement>,
	#[serde(default)]
	pub r_ele: Vec<RawReadingElement>,
	#[serde(default)]
	pub sense: Vec<RawSense>,
}

#[derive(Debug, Deserialize)]
pub struct RawKanjiElement {
	pub keb: String,
	#[serde(default)]
	pub pri: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawReadingElement {
	pub reb: String,
	#[serde(default)]
	pub pri: Vec<String>,
	#[serde(default)]
	pub restr: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RawSense {
	#[serde(default)]
	pub gloss: Vec<String>,
	#[serde(default)]
	pub pos: Vec<String>,
	#[serde(default)]
	pub misc: Vec<String>,
}

/// Weight contributed by one JMdict priority tag (§4.6 step 3). `nf01` is
/// the most common band, `nf48` the least; weight decreases linearly.
fn priority_weight(tag: &str) -> u32 {
	match tag {
		"spec1" => 200,
		"spec2" => 150,
		"news1" => 150,
		"ichi1" => 150,
		"news2" => 50,
		"ichi2" => 50,
		"gai1" => 100,
		"gai2" => 30,
		_ => {
			if let Some(band) = tag.strip_prefix("nf").and_then(|s| s.parse::<u32>().ok()) {
				(49u32.saturating_sub(band)) * 4
			} else {
				0
			}
		}
	}
}

/// Converts one raw JMdict entry into a normalized `DictionaryEntry`, or
/// `None` if it fails the §4.6 step-1 validation (no senses, or no
/// glosses across all senses).
pub fn convert_entry(raw: RawEntry, supplemental: &HashMap<String, u32>) -> Option<(DictionaryEntry, PriorityScore)> {
	if raw.sense.is_empty() || raw.sense.iter().all(|s| s.gloss.is_empty()) {
		return None;
	}

	let kanji_forms: Vec<KanjiForm> = raw
		.k_ele
		.iter()
		.map(|k| KanjiForm {
			surface: kana::normalize(&k.keb),
			pri: k.pri.clone(),
		})
		.collect();

	let known_surfaces: std::collections::HashSet<&str> = kanji_forms.iter().map(|k| k.surface.as_str()).collect();

	let readings: Vec<Reading> = raw
		.r_ele
		.iter()
		.map(|r| Reading {
			reading: kana::normalize(&r.reb),
			pri: r.pri.clone(),
			restrictions: r
				.restr
				.iter()
				.map(|s| kana::normalize(s))
				.filter(|s| known_surfaces.contains(s.as_str()))
				.collect(),
		})
		.collect();

	if readings.is_empty() {
		return None;
	}

	let senses: Vec<Sense> = raw
		.sense
		.into_iter()
		.map(|s| Sense {
			gloss: s.gloss,
			pos: s.pos,
			misc: s.misc,
		})
		.collect();

	let mut score = 0u32;
	for k in &kanji_forms {
		for tag in &k.pri {
			score += priority_weight(tag);
		}
	}
	for r in &readings {
		for tag in &r.pri {
			score += priority_weight(tag);
		}
	}
	for k in &kanji_forms {
		if let Some(extra) = supplemental.get(&k.surface) {
			score += extra;
		}
	}
	for r in &readings {
		if let Some(extra) = supplemental.get(&r.reading) {
			score += extra;
		}
	}

	let entry = DictionaryEntry {
		seq: raw.seq,
		kanji_forms,
		readings,
		senses,
	};

	Some((entry, PriorityScore(score)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_drops_entry_with_no_glosses() {
		let raw = RawEntry {
			seq: 1,
			k_ele: vec![],
			r_ele: vec![RawReadingElement {
				reb: "た".to_string(),
				pri: vec![],
				restr: vec![],
			}],
			sense: vec![RawSense {
				gloss: vec![],
				pos: vec![],
				misc: vec![],
			}],
		};
		assert!(convert_entry(raw, &HashMap::new()).is_none());
	}

	#[test]
	fn test_converts_valid_entry() {
		let raw = RawEntry {
			seq: 42,
			k_ele: vec![RawKanjiElement {
				keb: "食べる".to_string(),
				pri: vec!["ichi1".to_string()],
			}],
			r_ele: vec![RawReadingElement {
				reb: "たべる".to_string(),
				pri: vec!["ichi1".to_string()],
				restr: vec![],
			}],
			sense: vec![RawSense {
				gloss: vec!["to eat".to_string()],
				pos: vec!["v1".to_string()],
				misc: vec![],
			}],
		};
		let (entry, score) = convert_entry(raw, &HashMap::new()).unwrap();
		assert_eq!(entry.seq, 42);
		assert_eq!(score.0, 300);
	}

	#[test]
	fn test_drops_restriction_to_unknown_surface() {
		let raw = RawEntry {
			seq: 2,
			k_ele: vec![RawKanjiElement {
				keb: "一".to_string(),
				pri: vec![],
			}],
			r_ele: vec![RawReadingElement {
				reb: "ひと".to_string(),
				pri: vec![],
				restr: vec!["二".to_string()],
			}],
			sense: vec![RawSense {
				gloss: vec!["one".to_string()],
				pos: vec![],
				misc: vec![],
			}],
		};
		let (entry, _) = convert_entry(raw, &HashMap::new()).unwrap();
		assert!(entry.readings[0].restrictions.is_empty());
	}
}
