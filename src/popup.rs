//! Payload handed to the (out-of-scope) popup renderer, built from a
//! lookup result. Owned, since it crosses from the lookup worker to the
//! UI thread over a queue.

use meikipop_dict::LookupMatch;

#[derive(Clone, Debug)]
pub struct PopupEntry {
	pub seq: u32,
	pub kanji_forms: Vec<String>,
	pub readings: Vec<String>,
	pub glosses: Vec<String>,
	pub matched_form: String,
	pub matched_length: usize,
	pub deconjugation_process: Vec<String>,
}

impl<'a> From<&LookupMatch<'a>> for PopupEntry {
	fn from(m: &LookupMatch<'a>) -> PopupEntry {
		PopupEntry {
			seq: m.entry.seq,
			kanji_forms: m.entry.kanji_forms.iter().map(|k| k.surface.clone()).collect(),
			readings: m.entry.readings.iter().map(|r| r.reading.clone()).collect(),
			glosses: m.entry.senses.iter().flat_map(|s| s.gloss.clone()).collect(),
			matched_form: m.matched_form.clone(),
			matched_length: m.matched_length,
			deconjugation_process: m.deconjugation_process.clone(),
		}
	}
}

#[derive(Clone, Debug)]
pub struct PopupPayload {
	pub paragraph_index: usize,
	pub starting_word_index: usize,
	pub is_vertical: bool,
	pub entries: Vec<PopupEntry>,
}
