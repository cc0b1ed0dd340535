//! Orchestrates the six build steps described in §4.6.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use slog::{info, warn, Logger};

use meikipop_dict::entry::MatchedElement;
use meikipop_dict::{Artifact, DictIndex, EntryRef, PriorityScore};

use crate::error::BuildError;
use crate::jmdict::{convert_entry, RawEntry};

pub struct BuildInputs {
	pub jmdict_paths: Vec<PathBuf>,
	pub rules_path: PathBuf,
	pub priority_path: PathBuf,
	pub output_path: PathBuf,
}

fn read_to_string(path: &Path) -> Result<String, BuildError> {
	fs::read_to_string(path).map_err(|source| BuildError::Io {
		path: path.display().to_string(),
		source,
	})
}

fn parse_json<T: serde::de::DeserializeOwned>(path: &Path, text: &str) -> Result<T, BuildError> {
	serde_json::from_str(text).map_err(|source| BuildError::Json {
		path: path.display().to_string(),
		source,
	})
}

pub fn run(inputs: &BuildInputs, logger: &Logger) -> Result<(), BuildError> {
	// Step 1-3: parse, normalize and score every JMdict entry.
	let priority_json = read_to_string(&inputs.priority_path)?;
	let supplemental: HashMap<String, u32> = parse_json(&inputs.priority_path, &priority_json)?;

	let mut entries = Vec::new();
	let mut priorities = Vec::new();
	let mut skipped = 0usize;

	for path in &inputs.jmdict_paths {
		let text = read_to_string(path)?;
		let raw_entries: Vec<RawEntry> = parse_json(path, &text)?;
		for raw in raw_entries {
			match convert_entry(raw, &supplemental) {
				Some((entry, score)) => {
					entries.push(entry);
					priorities.push(score);
				}
				None => skipped += 1,
			}
		}
		info!(logger, "parsed JMdict file"; "path" => path.display().to_string(), "kept" => entries.len(), "skipped" => skipped);
	}

	// Step 4: build the index, with inverse-reading expansion for entries
	// that restrict a reading to specific kanji forms.
	let mut index = DictIndex::new();
	for (i, entry) in entries.iter().enumerate() {
		let entry_index = i as u32;
		for (ki, k) in entry.kanji_forms.iter().enumerate() {
			index.insert(
				k.surface.clone(),
				EntryRef {
					entry_index,
					element: MatchedElement::KanjiForm(ki as u32),
				},
			);
		}
		for (ri, r) in entry.readings.iter().enumerate() {
			index.insert(
				r.reading.clone(),
				EntryRef {
					entry_index,
					element: MatchedElement::Reading(ri as u32),
				},
			);
			for restricted_surface in &r.restrictions {
				index.insert(
					restricted_surface.clone(),
					EntryRef {
						entry_index,
						element: MatchedElement::InverseReading(ri as u32),
					},
				);
			}
		}
	}

	// Step 5: bind deconjugation rules.
	let rules_json = read_to_string(&inputs.rules_path)?;
	let rule_list = meikipop_deconjugate::rule::load_rules(&rules_json)?;
	let rules = meikipop_deconjugate::RuleTable::new(rule_list);
	info!(logger, "bound deconjugation rules"; "count" => rules.rules.len());

	// Stably re-sort every index bucket by priority descending.
	let priority_lookup: Vec<u32> = priorities.iter().map(|p: &PriorityScore| p.0).collect();
	index.resort_by(|entry_ref| std::cmp::Reverse(priority_lookup[entry_ref.entry_index as usize]));

	let artifact = Artifact {
		entries,
		priorities,
		index,
		rules,
	};

	if artifact.entries.is_empty() {
		warn!(logger, "build produced zero dictionary entries");
	}

	let output = fs::File::create(&inputs.output_path).map_err(|source| BuildError::Io {
		path: inputs.output_path.display().to_string(),
		source,
	})?;
	let mut writer = std::io::BufWriter::new(output);
	artifact.write_to(&mut writer)?;

	info!(logger, "wrote dictionary artifact";
		"path" => inputs.output_path.display().to_string(),
		"entries" => artifact.entries.len(),
		"index_keys" => artifact.index.len());

	Ok(())
}
