//! Binary dictionary artifact layout and (de)serialization (§6).
//!
//! Layout: an 8-byte magic header, a little-endian `u32` version, then the
//! rest of the file is a single `bincode`-serialized [`Artifact`].
//! Compatibility is version-gated: a mismatched version is a fatal error
//! rather than a best-effort load (§7).

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{DictionaryEntry, PriorityScore};
use crate::error::DictError;
use crate::index::DictIndex;
use meikipop_deconjugate::RuleTable;

pub const MAGIC: &[u8; 8] = b"MEIKIPOP";
pub const VERSION: u32 = 1;

/// Everything D needs at runtime, loaded in one deserialization step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Artifact {
	pub entries: Vec<DictionaryEntry>,
	/// Parallel to `entries`: `priorities[i]` is `entries[i]`'s score.
	pub priorities: Vec<PriorityScore>,
	pub index: DictIndex,
	pub rules: RuleTable,
}

impl Artifact {
	pub fn priority_of(&self, entry_index: usize) -> PriorityScore {
		self.priorities.get(entry_index).copied().unwrap_or(PriorityScore::ZERO)
	}

	pub fn write_to<W: Write>(&self, mut w: W) -> Result<(), DictError> {
		w.write_all(MAGIC)?;
		w.write_all(&VERSION.to_le_bytes())?;
		bincode::serialize_into(&mut w, self).map_err(|e| DictError::Corrupt {
			path: "<writer>".to_string(),
			source: e,
		})
	}

	pub fn read_from<R: Read>(mut r: R, path: &str) -> Result<Artifact, DictError> {
		let mut magic = [0u8; 8];
		r.read_exact(&mut magic)?;
		if &magic != MAGIC {
			return Err(DictError::BadMagic(path.to_string()));
		}

		let mut version_bytes = [0u8; 4];
		r.read_exact(&mut version_bytes)?;
		let version = u32::from_le_bytes(version_bytes);
		if version != VERSION {
			return Err(DictError::VersionMismatch {
				path: path.to_string(),
				found: version,
				expected: VERSION,
			});
		}

		bincode::deserialize_from(r).map_err(|e| DictError::Corrupt {
			path: path.to_string(),
			source: e,
		})
	}

	/// Opens and loads the artifact at `path`, distinguishing "not built
	/// yet" (§7's `Missing`) from other I/O failures.
	pub fn load_from_path(path: &Path) -> Result<Artifact, DictError> {
		let path_display = path.display().to_string();
		let file = File::open(path).map_err(|e| {
			if e.kind() == std::io::ErrorKind::NotFound {
				DictError::Missing(path_display.clone())
			} else {
				DictError::Io(e)
			}
		})?;
		Artifact::read_from(BufReader::new(file), &path_display)
	}
}
