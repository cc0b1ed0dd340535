use thiserror::Error;

/// Failures produced while acquiring an OCR result (§7). All are non-fatal
/// per scan cycle; the caller converts them into "no result" and logs.
#[derive(Debug, Error)]
pub enum ScanError {
	#[error("OCR provider {0:?} timed out")]
	Timeout(String),
	#[error("OCR provider {0:?} failed: {1}")]
	ProviderFailure(String, String),
	#[error("OCR provider {0:?} returned output violating the contract: {1}")]
	MalformedOutput(String, String),
	#[error("OCR provider {0:?} is interface-only and not wired to a real backend")]
	NotImplemented(String),
}
