mod concurrency;
mod config;
mod popup;
mod workers;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use slog::{error, info, o, Drain};

use meikipop_dict::{Artifact, DictError};
use meikipop_ocr::ProviderRegistry;

use concurrency::LatestSlot;
use config::Config;
use workers::CaptureRequest;

const DEFAULT_ARTIFACT_PATH: &str = "data/dictionary.bin";
const DEFAULT_CONFIG_PATH: &str = "config.json";

fn root_logger() -> slog::Logger {
	let decorator = slog_term::TermDecorator::new().build();
	let drain = slog_term::FullFormat::new(decorator).build().fuse();
	let drain = slog::Async::new(drain).build().fuse();
	slog::Logger::root(drain, o!("app" => "meikipop"))
}

fn load_config(logger: &slog::Logger) -> Config {
	match fs::read_to_string(DEFAULT_CONFIG_PATH) {
		Ok(text) => match Config::from_json(&text) {
			Ok(config) => config,
			Err(err) => {
				error!(logger, "failed to parse config.json, using defaults"; "error" => err.to_string());
				Config::default()
			}
		},
		Err(_) => Config::default(),
	}
}

/// Placeholder capture source: screen capture and hotkey listening are
/// outside the core's scope (§1). A real build replaces this with the
/// platform-specific acquisition logic.
struct NullCaptureSource;
impl workers::CaptureSource for NullCaptureSource {
	fn capture(&self) -> Option<CaptureRequest> {
		None
	}
}

fn main() -> ExitCode {
	let logger = root_logger();
	let config = config::shared(load_config(&logger));

	let artifact_path = PathBuf::from(DEFAULT_ARTIFACT_PATH);
	let artifact = match Artifact::load_from_path(&artifact_path) {
		Ok(a) => a,
		Err(DictError::Missing(path)) => {
			error!(logger, "dictionary artifact not found; run dict-build first"; "path" => path);
			return ExitCode::FAILURE;
		}
		Err(err) => {
			error!(logger, "dictionary artifact is corrupt or incompatible; run dict-build again"; "error" => err.to_string());
			return ExitCode::FAILURE;
		}
	};
	let rules = Arc::new(artifact.rules.clone());
	let artifact = Arc::new(artifact);
	info!(logger, "loaded dictionary artifact"; "entries" => artifact.entries.len(), "index_keys" => artifact.index.len());

	let registry = ProviderRegistry::with_defaults();
	let configured_provider = config.read().unwrap().ocr_provider.clone();
	let (provider_name, provider) = match registry.load_with_fallback(&configured_provider, "mock") {
		Some(pair) => pair,
		None => {
			error!(logger, "no OCR providers available");
			return ExitCode::FAILURE;
		}
	};
	info!(logger, "selected OCR provider"; "name" => provider_name);
	let provider: Arc<dyn meikipop_ocr::OcrProvider> = provider.into();

	let shutdown = Arc::new(AtomicBool::new(false));
	let capture_requests = Arc::new(LatestSlot::new());
	let hitscan_jobs = Arc::new(LatestSlot::new());
	let (ui_sender, ui_receiver) = crossbeam::channel::unbounded();

	let ocr_handle = workers::spawn_ocr_worker(
		Arc::clone(&capture_requests),
		Arc::clone(&hitscan_jobs),
		provider,
		Arc::clone(&shutdown),
		logger.clone(),
	);
	let lookup_handle = workers::spawn_lookup_worker(
		Arc::clone(&hitscan_jobs),
		ui_sender,
		Arc::clone(&artifact),
		rules,
		Arc::clone(&config),
		Arc::clone(&shutdown),
		logger.clone(),
	);
	let trigger_handle = workers::spawn_capture_trigger(
		Arc::new(NullCaptureSource),
		capture_requests,
		config,
		Arc::clone(&shutdown),
		logger.clone(),
	);

	for payload in ui_receiver.iter() {
		info!(logger, "popup ready"; "paragraph" => payload.paragraph_index, "entries" => payload.entries.len());
	}

	shutdown.store(true, Ordering::Relaxed);
	let _ = ocr_handle.join();
	let _ = lookup_handle.join();
	let _ = trigger_handle.join();

	ExitCode::SUCCESS
}
