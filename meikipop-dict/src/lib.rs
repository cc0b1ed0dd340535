//! Dictionary data model (D), the binary artifact format, and the lookup
//! engine (L).

pub mod artifact;
pub mod entry;
pub mod error;
pub mod index;
pub mod lookup;

pub use artifact::{Artifact, MAGIC, VERSION};
pub use entry::{DictionaryEntry, EntryRef, KanjiForm, MatchedElement, PriorityScore, Reading, Sense};
pub use error::DictError;
pub use index::DictIndex;
pub use lookup::{lookup, LookupMatch, MAX_DICT_ENTRIES};
