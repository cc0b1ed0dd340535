//! Rule table types and the on-disk JSON shape for `deconjugator.json`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single alternative within a rule: one dec_end/con_end/dec_tag/con_tag
/// tuple, per §3's "parallel vectors" description.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuleAlternative {
	/// Candidate ending to match against the current surface.
	pub dec_end: String,
	/// Replacement ending used to produce the underlying surface.
	pub con_end: String,
	/// Tag the form must carry for the rule to apply (empty means "any
	/// initial", i.e. only applicable to still-unconjugated surfaces).
	pub dec_tag: String,
	/// Tag the derived form will carry.
	pub con_tag: String,
}

/// A deconjugation rule, tagged by how and when it may apply (§3, §4.4).
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DeconjugationRule {
	#[serde(rename = "stdrule")]
	StdRule(StdRuleBody),
	#[serde(rename = "rewriterule")]
	RewriteRule(StdRuleBody),
	#[serde(rename = "onlyfinalrule")]
	OnlyFinalRule(StdRuleBody),
	#[serde(rename = "neverfinalrule")]
	NeverFinalRule(StdRuleBody),
	#[serde(rename = "contextrule")]
	ContextRule(ContextRuleBody),
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StdRuleBody {
	pub detail: String,
	pub alternatives: Vec<RuleAlternative>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContextRuleBody {
	pub detail: String,
	pub alternatives: Vec<RuleAlternative>,
	/// Name of the context predicate that additionally gates this rule
	/// (e.g. `"v1inftrap"`). Resolved against [`crate::context::lookup`].
	pub contextrule: String,
}

impl DeconjugationRule {
	pub fn detail(&self) -> &str {
		match self {
			DeconjugationRule::StdRule(b)
			| DeconjugationRule::RewriteRule(b)
			| DeconjugationRule::OnlyFinalRule(b)
			| DeconjugationRule::NeverFinalRule(b) => &b.detail,
			DeconjugationRule::ContextRule(b) => &b.detail,
		}
	}

	pub fn alternatives(&self) -> &[RuleAlternative] {
		match self {
			DeconjugationRule::StdRule(b)
			| DeconjugationRule::RewriteRule(b)
			| DeconjugationRule::OnlyFinalRule(b)
			| DeconjugationRule::NeverFinalRule(b) => &b.alternatives,
			DeconjugationRule::ContextRule(b) => &b.alternatives,
		}
	}
}

/// Raw wire format for one entry of `deconjugator.json`, mirroring §6: a
/// `type` discriminator plus either parallel arrays or bare scalars for
/// `dec_end`/`con_end`/`dec_tag`/`con_tag`.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRule {
	#[serde(rename = "type")]
	pub kind: String,
	pub detail: String,
	#[serde(default)]
	pub contextrule: Option<String>,
	pub dec_end: RawField,
	pub con_end: RawField,
	#[serde(default)]
	pub dec_tag: RawField,
	#[serde(default)]
	pub con_tag: RawField,
}

/// Either a single string or a sequence of strings, as allowed by §3.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum RawField {
	One(String),
	Many(Vec<String>),
}

impl Default for RawField {
	fn default() -> Self {
		RawField::One(String::new())
	}
}

impl RawField {
	fn into_vec(self) -> Vec<String> {
		match self {
			RawField::One(s) => vec![s],
			RawField::Many(v) => v,
		}
	}
}

/// Errors encountered while binding a rule file, all fatal at startup per §7.
#[derive(Debug, Error)]
pub enum RuleError {
	#[error("unknown rule type {0:?}")]
	UnknownType(String),
	#[error("rule {detail:?}: parallel arrays have mismatched lengths ({dec_end} dec_end, {con_end} con_end, {dec_tag} dec_tag, {con_tag} con_tag)")]
	ArityMismatch {
		detail: String,
		dec_end: usize,
		con_end: usize,
		dec_tag: usize,
		con_tag: usize,
	},
	#[error("contextrule {0:?} is missing its `contextrule` predicate name")]
	MissingContextPredicate(String),
	#[error("invalid rule JSON: {0}")]
	Json(#[from] serde_json::Error),
}

/// Binds [`RawRule`]s (as parsed straight from `deconjugator.json`) into
/// [`DeconjugationRule`]s, expanding scalar fields into one-element vectors
/// and validating that parallel vectors agree in length.
pub fn bind_rules(raw: Vec<RawRule>) -> Result<Vec<DeconjugationRule>, RuleError> {
	raw.into_iter().map(bind_one).collect()
}

fn bind_one(raw: RawRule) -> Result<DeconjugationRule, RuleError> {
	let dec_end = raw.dec_end.into_vec();
	let con_end = raw.con_end.into_vec();
	let mut dec_tag = raw.dec_tag.into_vec();
	let mut con_tag = raw.con_tag.into_vec();

	// Missing tag vectors default to "any"/"none" for every alternative.
	if dec_tag.len() == 1 && dec_tag[0].is_empty() && dec_end.len() > 1 {
		dec_tag = vec![String::new(); dec_end.len()];
	}
	if con_tag.len() == 1 && con_tag[0].is_empty() && con_end.len() > 1 {
		con_tag = vec![String::new(); con_end.len()];
	}

	let lengths = [dec_end.len(), con_end.len(), dec_tag.len(), con_tag.len()];
	if lengths.iter().any(|&n| n != lengths[0]) {
		return Err(RuleError::ArityMismatch {
			detail: raw.detail,
			dec_end: dec_end.len(),
			con_end: con_end.len(),
			dec_tag: dec_tag.len(),
			con_tag: con_tag.len(),
		});
	}

	let alternatives: Vec<RuleAlternative> = (0..dec_end.len())
		.map(|i| RuleAlternative {
			dec_end: dec_end[i].clone(),
			con_end: con_end[i].clone(),
			dec_tag: dec_tag[i].clone(),
			con_tag: con_tag[i].clone(),
		})
		.collect();

	let body = StdRuleBody {
		detail: raw.detail.clone(),
		alternatives,
	};

	Ok(match raw.kind.as_str() {
		"stdrule" => DeconjugationRule::StdRule(body),
		"rewriterule" => DeconjugationRule::RewriteRule(body),
		"onlyfinalrule" => DeconjugationRule::OnlyFinalRule(body),
		"neverfinalrule" => DeconjugationRule::NeverFinalRule(body),
		"contextrule" => DeconjugationRule::ContextRule(ContextRuleBody {
			detail: body.detail,
			alternatives: body.alternatives,
			contextrule: raw
				.contextrule
				.ok_or_else(|| RuleError::MissingContextPredicate(raw.detail.clone()))?,
		}),
		other => return Err(RuleError::UnknownType(other.to_string())),
	})
}

/// Parses a `deconjugator.json` document (an array of [`RawRule`]s) and
/// binds it into a ready-to-use rule table.
pub fn load_rules(json: &str) -> Result<Vec<DeconjugationRule>, RuleError> {
	let raw: Vec<RawRule> = serde_json::from_str(json)?;
	bind_rules(raw)
}

/// A bound, ready-to-query set of deconjugation rules.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RuleTable {
	pub rules: Vec<DeconjugationRule>,
}

impl RuleTable {
	pub fn new(rules: Vec<DeconjugationRule>) -> RuleTable {
		RuleTable { rules }
	}

	pub fn from_json(json: &str) -> Result<RuleTable, RuleError> {
		Ok(RuleTable::new(load_rules(json)?))
	}
}

/// A mapping from surface/reading to supplemental priority weight, as
/// parsed from `priority.json` (§6). Kept here only because it shares the
/// "flat string-keyed JSON map" shape with rule loading; semantically it
/// belongs to the build pipeline (§4.6 step 3).
pub fn load_priority_map(json: &str) -> Result<HashMap<String, i64>, serde_json::Error> {
	serde_json::from_str(json)
}
