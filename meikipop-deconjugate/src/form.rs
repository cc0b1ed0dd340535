use std::collections::HashSet;
use std::fmt;

/// One candidate reached while deconjugating a surface string (§3).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeconjugationForm {
	/// The surface as currently derived (what the previous rule produced).
	pub surface: String,
	/// The underlying dictionary-form candidate, i.e. the same as
	/// `surface` for every form (kept distinct in name only to match the
	/// vocabulary used when a form is consulted against the dictionary).
	pub underlying: String,
	/// POS-equivalence tags accumulated along the derivation, most recent
	/// last. Empty for the identity form.
	pub tags: Vec<String>,
	/// Every surface seen along this derivation, used to guarantee chains
	/// never revisit a surface (§3 invariant v).
	pub seen_text: HashSet<String>,
	/// Rule names applied so far, in application order.
	pub process: Vec<String>,
}

impl DeconjugationForm {
	/// The identity form: `q` itself, with no tags and no process.
	pub fn identity(q: &str) -> DeconjugationForm {
		let mut seen_text = HashSet::new();
		seen_text.insert(q.to_string());
		DeconjugationForm {
			surface: q.to_string(),
			underlying: q.to_string(),
			tags: Vec::new(),
			seen_text,
			process: Vec::new(),
		}
	}

	/// The most recently pushed tag, if any.
	pub fn last_tag(&self) -> Option<&str> {
		self.tags.last().map(|s| s.as_str())
	}

	/// Whether this form carries no conjugation tags at all, i.e. it is
	/// either the identity form or a still-unconjugated surface.
	pub fn is_initial(&self) -> bool {
		self.tags.is_empty()
	}
}

impl fmt::Display for DeconjugationForm {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.underlying)?;
		if !self.process.is_empty() {
			write!(f, " [{}]", self.process.join(" / "))?;
		}
		Ok(())
	}
}
