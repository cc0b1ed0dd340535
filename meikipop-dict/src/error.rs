use thiserror::Error;

/// Failures loading the dictionary artifact or its rule table (§7). All
/// variants are fatal at startup: the process exits with a message
/// instructing the user to re-run the build pipeline.
#[derive(Debug, Error)]
pub enum DictError {
	#[error("dictionary artifact not found at {0:?}; run the build pipeline first")]
	Missing(String),
	#[error("dictionary artifact at {0:?} has a bad magic header; it is not a meikipop artifact")]
	BadMagic(String),
	#[error("dictionary artifact at {path:?} is version {found}, expected {expected}; re-run the build pipeline")]
	VersionMismatch { path: String, found: u32, expected: u32 },
	#[error("dictionary artifact at {path:?} is corrupt: {source}")]
	Corrupt { path: String, source: bincode::Error },
	#[error("I/O error reading dictionary artifact: {0}")]
	Io(#[from] std::io::Error),
	#[error(transparent)]
	Rule(#[from] meikipop_deconjugate::RuleError),
}
