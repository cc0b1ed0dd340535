//! The small, closed set of named context predicates used by `contextrule`
//! entries (§4.4). Predicates receive the *candidate derived surface* and
//! decide whether the rule is allowed to fire.

use std::collections::HashMap;

use lazy_static::lazy_static;

lazy_static! {
	static ref PREDICATES: HashMap<&'static str, fn(&str) -> bool> = {
		let mut m: HashMap<&'static str, fn(&str) -> bool> = HashMap::new();
		m.insert("v1inftrap", v1_inf_trap as fn(&str) -> bool);
		m
	};
}

/// Looks up a context predicate by name. Returns `None` for unknown names,
/// which the rule binder treats as a fatal startup error (§7).
pub fn lookup(name: &str) -> Option<fn(&str) -> bool> {
	PREDICATES.get(name).copied()
}

/// Rejects derivations that would produce an illegal ichidan (`v1`) stem:
/// a bare single-mora stem ending in `i`/`e` row kana that is not itself a
/// recognizable ichidan stem is far more likely to be a godan masu-stem
/// collision (e.g. `見` from `見る` is fine, but a one-character result
/// from an unrelated rule chain usually indicates a bogus derivation).
///
/// This keeps the deconjugator's ichidan masu-stem rule from firing on
/// every single-kana-ending godan form.
fn v1_inf_trap(surface: &str) -> bool {
	surface.chars().count() > 1
}
