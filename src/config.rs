//! Process-wide configuration surface (§6, §9).
//!
//! The source used a module-level singleton; per the redesign guidance in
//! §9 this is an explicit value constructed once at startup and shared
//! behind a reader/writer lock, since only the UI thread mutates it and
//! every other thread only reads it.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// How aggressively the OCR/lookup pipeline should trade latency for
/// accuracy. The core only reads this value; it does not interpret it
/// beyond passing it to the active OCR provider.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityMode {
	Fast,
	Balanced,
	Best,
}

impl Default for QualityMode {
	fn default() -> QualityMode {
		QualityMode::Balanced
	}
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
	/// Maximum suffix length hit-scan will build (§4.3). `0` disables
	/// lookups entirely (§8 boundary behavior).
	pub max_lookup_length: usize,
	pub quality_mode: QualityMode,
	pub ocr_provider: String,
	/// When true, the capture trigger fires on a timer instead of waiting
	/// for a hotkey (hotkey listening itself is outside the core's scope).
	pub auto_scan_mode: bool,
	pub auto_scan_interval_ms: u64,
}

impl Default for Config {
	fn default() -> Config {
		Config {
			max_lookup_length: 25,
			quality_mode: QualityMode::default(),
			ocr_provider: "glensv2".to_string(),
			auto_scan_mode: false,
			auto_scan_interval_ms: 1500,
		}
	}
}

impl Config {
	pub fn from_json(text: &str) -> Result<Config, serde_json::Error> {
		serde_json::from_str(text)
	}
}

/// Shared, read-mostly configuration handle (§5).
pub type SharedConfig = Arc<RwLock<Config>>;

pub fn shared(config: Config) -> SharedConfig {
	Arc::new(RwLock::new(config))
}
