use thiserror::Error;

/// Failures during the build pipeline (§4.6, §7). All are fatal: the build
/// aborts and reports the problem rather than producing a partial
/// artifact.
#[derive(Debug, Error)]
pub enum BuildError {
	#[error("failed to read {path:?}: {source}")]
	Io {
		path: String,
		#[source]
		source: std::io::Error,
	},
	#[error("failed to parse JSON in {path:?}: {source}")]
	Json {
		path: String,
		#[source]
		source: serde_json::Error,
	},
	#[error(transparent)]
	Rule(#[from] meikipop_deconjugate::RuleError),
	#[error(transparent)]
	Dict(#[from] meikipop_dict::DictError),
}
