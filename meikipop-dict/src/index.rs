//! `DictIndex`: the persistent `lookup_key -> [EntryRef]` map (§3, §4.6).

use fnv::FnvHashMap;
use serde::{Deserialize, Serialize};

use crate::entry::EntryRef;

/// Maps a normalized lookup key to the entries it resolves to, sorted
/// (stably, at build time) by `PriorityScore` descending.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct DictIndex {
	map: FnvHashMap<String, Vec<EntryRef>>,
}

impl DictIndex {
	pub fn new() -> DictIndex {
		DictIndex::default()
	}

	pub fn get(&self, key: &str) -> Option<&[EntryRef]> {
		self.map.get(key).map(Vec::as_slice)
	}

	pub fn insert(&mut self, key: String, entry_ref: EntryRef) {
		self.map.entry(key).or_default().push(entry_ref);
	}

	pub fn len(&self) -> usize {
		self.map.len()
	}

	pub fn is_empty(&self) -> bool {
		self.map.is_empty()
	}

	/// Stably re-sorts every bucket by the given key (descending), as the
	/// build pipeline does once priority scores are known (§4.6 step 4).
	pub fn resort_by<F>(&mut self, mut key: F)
	where
		F: FnMut(&EntryRef) -> std::cmp::Reverse<u32>,
	{
		for bucket in self.map.values_mut() {
			bucket.sort_by_key(|r| key(r));
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::MatchedElement;

	#[test]
	fn test_insert_and_get() {
		let mut index = DictIndex::new();
		index.insert(
			"たべる".to_string(),
			EntryRef {
				entry_index: 0,
				element: MatchedElement::Reading(0),
			},
		);
		assert_eq!(index.get("たべる").unwrap().len(), 1);
		assert!(index.get("よむ").is_none());
	}

	#[test]
	fn test_multiple_entries_share_key() {
		let mut index = DictIndex::new();
		for i in 0..3u32 {
			index.insert(
				"key".to_string(),
				EntryRef {
					entry_index: i,
					element: MatchedElement::KanjiForm(0),
				},
			);
		}
		assert_eq!(index.get("key").unwrap().len(), 3);
	}
}
