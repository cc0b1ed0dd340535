//! Rule-driven reverse-conjugation engine (§4.4 of the design).
//!
//! Given an inflected Japanese surface string, [`deconjugate`] enumerates
//! every plausible dictionary-form candidate reachable by repeatedly
//! applying a table of morphological rules, along with the chain of rule
//! names that would produce the observed surface.

mod context;
mod form;
pub mod rule;

pub use form::DeconjugationForm;
pub use rule::{DeconjugationRule, RuleAlternative, RuleError, RuleTable};

use std::collections::{HashSet, VecDeque};

/// One rule alternative matched, ready to be applied to a form.
struct Matched<'a> {
	alt: &'a RuleAlternative,
	detail: &'a str,
	terminal: bool,
	/// Only the root form (empty `process`) may take this alternative.
	root_only: bool,
}

fn matched_alternatives<'a>(rules: &'a [DeconjugationRule]) -> Vec<Matched<'a>> {
	let mut out = Vec::new();
	for rule in rules {
		let (terminal, root_only) = match rule {
			DeconjugationRule::StdRule(_) => (true, false),
			DeconjugationRule::RewriteRule(_) => (true, false),
			DeconjugationRule::OnlyFinalRule(_) => (true, true),
			DeconjugationRule::NeverFinalRule(_) => (false, false),
			DeconjugationRule::ContextRule(_) => (true, false),
		};
		for alt in rule.alternatives() {
			out.push(Matched {
				alt,
				detail: rule.detail(),
				terminal,
				root_only,
			});
		}
	}
	out
}

struct Candidate {
	form: DeconjugationForm,
	terminal: bool,
}

/// Enumerates every [`DeconjugationForm`] reachable from `q` by repeated
/// rule application, including the identity form, per §4.4.
pub fn deconjugate(q: &str, rules: &RuleTable) -> Vec<DeconjugationForm> {
	let alternatives = matched_alternatives(&rules.rules);

	let identity = Candidate {
		form: DeconjugationForm::identity(q),
		terminal: true,
	};

	let mut work: VecDeque<usize> = VecDeque::new();
	let mut all: Vec<Candidate> = Vec::new();
	work.push_back(0);
	all.push(identity);

	let mut i = 0;
	while i < work.len() {
		let idx = work[i];
		i += 1;

		// Index into `all` without holding a borrow across the mutation
		// below: clone just the bits needed to derive children.
		let (surface, tags, process, seen) = {
			let form = &all[idx].form;
			(
				form.surface.clone(),
				form.tags.clone(),
				form.process.clone(),
				form.seen_text.clone(),
			)
		};
		let is_initial = tags.is_empty();
		let last_tag = tags.last().cloned();
		let at_root = process.is_empty();

		for m in alternatives.iter() {
			if m.root_only && !at_root {
				continue;
			}

			let is_rewrite = matches!(
				// SAFETY of this match: we only need to distinguish
				// "trim tail" vs "replace whole surface" rules, which is
				// exactly RewriteRule vs everything else.
				rule_kind_for(m, &rules.rules),
				RuleVariant::Rewrite
			);

			let tag_ok = if m.alt.dec_tag.is_empty() {
				is_initial
			} else {
				last_tag.as_deref() == Some(m.alt.dec_tag.as_str())
			};
			if !tag_ok {
				continue;
			}

			let new_surface = if is_rewrite {
				if surface == m.alt.dec_end {
					Some(m.alt.con_end.clone())
				} else {
					None
				}
			} else if let Some(stem) = surface.strip_suffix(m.alt.dec_end.as_str()) {
				Some(format!("{}{}", stem, m.alt.con_end))
			} else {
				None
			};

			let new_surface = match new_surface {
				Some(s) if !s.is_empty() => s,
				_ => continue,
			};

			if seen.contains(&new_surface) {
				continue;
			}

			if let RuleVariant::Context(predicate_name) = rule_kind_for(m, &rules.rules) {
				let predicate = match context::lookup(predicate_name) {
					Some(p) => p,
					None => continue,
				};
				if !predicate(&new_surface) {
					continue;
				}
			}

			let mut new_tags = tags.clone();
			if !m.alt.con_tag.is_empty() {
				new_tags.push(m.alt.con_tag.clone());
			}

			let mut new_seen = seen.clone();
			new_seen.insert(new_surface.clone());

			let mut new_process = process.clone();
			new_process.push(m.detail.to_string());

			let new_form = DeconjugationForm {
				surface: new_surface.clone(),
				underlying: new_surface,
				tags: new_tags,
				seen_text: new_seen,
				process: new_process,
			};

			let next_index = all.len();
			all.push(Candidate {
				form: new_form,
				terminal: m.terminal,
			});
			work.push_back(next_index);
		}
	}

	all.into_iter().filter(|c| c.terminal).map(|c| c.form).collect()
}

enum RuleVariant<'a> {
	Std,
	Rewrite,
	Context(&'a str),
}

fn rule_kind_for<'a>(m: &Matched, rules: &'a [DeconjugationRule]) -> RuleVariant<'a> {
	for rule in rules {
		if rule.detail() == m.detail && rule.alternatives().iter().any(|a| std::ptr::eq(a, m.alt)) {
			return match rule {
				DeconjugationRule::RewriteRule(_) => RuleVariant::Rewrite,
				DeconjugationRule::ContextRule(b) => RuleVariant::Context(b.contextrule.as_str()),
				_ => RuleVariant::Std,
			};
		}
	}
	RuleVariant::Std
}

/// Fast pre-check mirroring the "can this suffix possibly be deinflected"
/// shortcut: true if any rule's `dec_end` is a suffix of `input`. Used by
/// the lookup engine to skip a full [`deconjugate`] call on prefixes that
/// cannot possibly match any rule.
pub fn can_deconjugate(input: &str, rules: &RuleTable) -> bool {
	rules
		.rules
		.iter()
		.flat_map(|r| r.alternatives())
		.any(|alt| !alt.dec_end.is_empty() && input.ends_with(alt.dec_end.as_str()))
}

#[cfg(test)]
mod tests {
	use super::*;
	use rule::{DeconjugationRule, RuleAlternative, RuleTable, StdRuleBody};

	fn std_rule(detail: &str, alts: &[(&str, &str, &str, &str)]) -> DeconjugationRule {
		DeconjugationRule::StdRule(StdRuleBody {
			detail: detail.to_string(),
			alternatives: alts
				.iter()
				.map(|&(dec_end, con_end, dec_tag, con_tag)| RuleAlternative {
					dec_end: dec_end.to_string(),
					con_end: con_end.to_string(),
					dec_tag: dec_tag.to_string(),
					con_tag: con_tag.to_string(),
				})
				.collect(),
		})
	}

	fn never_final_rule(detail: &str, alts: &[(&str, &str, &str, &str)]) -> DeconjugationRule {
		match std_rule(detail, alts) {
			DeconjugationRule::StdRule(body) => DeconjugationRule::NeverFinalRule(body),
			_ => unreachable!(),
		}
	}

	fn sample_rules() -> RuleTable {
		RuleTable::new(vec![
			// polite past: 食べました -> 食べる (strip ました, add る), a
			// valid terminal dictionary-form output.
			std_rule("polite past", &[("ました", "る", "", "v1")]),
			std_rule("negative past", &[("なかった", "ない", "", "v5k-neg")]),
			never_final_rule("negative", &[("ない", "", "v5k-neg", "v5k-stem")]),
			std_rule("plain", &[("か", "く", "v5k-stem", "v5k")]),
		])
	}

	#[test]
	fn test_identity_always_present() {
		let rules = sample_rules();
		let forms = deconjugate("読む", &rules);
		assert!(forms.iter().any(|f| f.underlying == "読む" && f.tags.is_empty()));
	}

	#[test]
	fn test_simple_past_chain() {
		let rules = sample_rules();
		let forms = deconjugate("食べました", &rules);
		assert!(forms.iter().any(|f| f.underlying == "食べる" && f.tags == vec!["v1".to_string()]));
	}

	#[test]
	fn test_never_final_excluded_from_output() {
		let rules = sample_rules();
		let forms = deconjugate("食べました", &rules);
		// The intermediate "食べ" (post ました-strip, pre-る-append) never
		// exists here because the rule appends "る" directly, but the
		// never-final marker itself must still be excluded whenever it is
		// literally the last step applied.
		assert!(!forms.iter().any(|f| f.process.last().map(String::as_str) == Some("negative")));
	}

	#[test]
	fn test_multi_step_chain_negative_past() {
		let rules = sample_rules();
		let forms = deconjugate("行かなかった", &rules);
		let hit = forms.iter().find(|f| f.underlying == "行く");
		assert!(hit.is_some(), "expected 行く among {:?}", forms);
		let hit = hit.unwrap();
		assert_eq!(hit.process, vec!["negative past", "negative", "plain"]);
	}

	#[test]
	fn test_no_cycles() {
		let rules = sample_rules();
		for form in deconjugate("食べました", &rules) {
			let mut seen = HashSet::new();
			assert!(seen.insert(form.surface.clone()) || true);
			// seen_text itself must never contain duplicates by construction
			// (it's a HashSet), this just exercises the accessor.
			assert!(form.seen_text.contains(&form.surface) || form.surface == "食べました");
		}
	}

	#[test]
	fn test_can_deconjugate() {
		let rules = sample_rules();
		assert!(can_deconjugate("食べました", &rules));
		assert!(!can_deconjugate("食", &rules));
	}
}
