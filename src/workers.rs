//! The three long-lived workers described in §5: OCR, hit-scan/lookup,
//! and the capture trigger.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use slog::{debug, error, info, o, warn, Logger};

use meikipop_dict::{lookup, Artifact};
use meikipop_deconjugate::RuleTable;
use meikipop_ocr::{merge_lines, scan as hit_scan, CapturedImage, OcrProvider, OcrResult, ScanError};

use crate::concurrency::LatestSlot;
use crate::config::SharedConfig;
use crate::popup::{PopupEntry, PopupPayload};

const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

pub struct CaptureRequest {
	pub image: CapturedImage,
	pub cursor_x: f64,
	pub cursor_y: f64,
}

pub struct HitScanJob {
	pub ocr_result: OcrResult,
	pub cursor_x: f64,
	pub cursor_y: f64,
}

/// Runs `provider.scan` on a helper thread so a slow/hung provider call
/// can be treated as a timeout rather than blocking the worker forever
/// (§5).
fn scan_with_timeout(provider: Arc<dyn OcrProvider>, image: CapturedImage) -> Result<Option<OcrResult>, ScanError> {
	let (tx, rx) = mpsc::channel();
	thread::spawn(move || {
		let result = provider.scan(&image);
		let _ = tx.send(result);
	});
	match rx.recv_timeout(PROVIDER_TIMEOUT) {
		Ok(result) => result,
		Err(_) => Err(ScanError::Timeout(provider.name().to_string())),
	}
}

pub fn spawn_ocr_worker(
	requests: Arc<LatestSlot<CaptureRequest>>,
	hitscan_jobs: Arc<LatestSlot<HitScanJob>>,
	provider: Arc<dyn OcrProvider>,
	shutdown: Arc<AtomicBool>,
	logger: Logger,
) -> JoinHandle<()> {
	thread::spawn(move || {
		let logger = logger.new(o!("worker" => "ocr"));
		debug!(logger, "started");
		loop {
			let should_continue = || !shutdown.load(Ordering::Relaxed);
			let request = match requests.take_blocking(should_continue) {
				Some(r) => r,
				None => break,
			};
			if shutdown.load(Ordering::Relaxed) {
				break;
			}

			match scan_with_timeout(Arc::clone(&provider), request.image) {
				Ok(Some(result)) => {
					info!(logger, "scan completed"; "paragraphs" => result.len());
					hitscan_jobs.put(HitScanJob {
						ocr_result: result,
						cursor_x: request.cursor_x,
						cursor_y: request.cursor_y,
					});
				}
				Ok(None) => debug!(logger, "scan found nothing"),
				Err(err) => error!(logger, "scan failed, continuing"; "error" => err.to_string()),
			}
		}
		debug!(logger, "stopped");
	})
}

pub fn spawn_lookup_worker(
	hitscan_jobs: Arc<LatestSlot<HitScanJob>>,
	ui_sender: crossbeam::channel::Sender<PopupPayload>,
	artifact: Arc<Artifact>,
	rules: Arc<RuleTable>,
	config: SharedConfig,
	shutdown: Arc<AtomicBool>,
	logger: Logger,
) -> JoinHandle<()> {
	thread::spawn(move || {
		let logger = logger.new(o!("worker" => "hitscan-lookup"));
		debug!(logger, "started");
		loop {
			let should_continue = || !shutdown.load(Ordering::Relaxed);
			let job = match hitscan_jobs.take_blocking(should_continue) {
				Some(j) => j,
				None => break,
			};
			if shutdown.load(Ordering::Relaxed) {
				break;
			}

			let max_lookup_length = config.read().unwrap().max_lookup_length;
			let paragraphs = merge_lines(job.ocr_result);
			let hit = match hit_scan(&paragraphs, job.cursor_x, job.cursor_y, max_lookup_length) {
				Some(hit) => hit,
				None => {
					debug!(logger, "cursor missed all paragraphs/words");
					continue;
				}
			};

			let matches = lookup(&hit.suffix_text, &artifact, &rules);
			if matches.is_empty() {
				debug!(logger, "no dictionary match"; "suffix" => hit.suffix_text.clone());
				continue;
			}

			let payload = PopupPayload {
				paragraph_index: hit.paragraph_index,
				starting_word_index: hit.starting_word_index,
				is_vertical: hit.is_vertical,
				entries: matches.iter().map(PopupEntry::from).collect(),
			};
			if ui_sender.send(payload).is_err() {
				warn!(logger, "UI queue closed, dropping result");
			}
		}
		debug!(logger, "stopped");
	})
}

/// A source of capture requests. Real hotkey/region-capture acquisition is
/// outside the core's scope (§1); this only needs to produce the image and
/// cursor position the pipeline consumes.
pub trait CaptureSource: Send + Sync {
	fn capture(&self) -> Option<CaptureRequest>;
}

pub fn spawn_capture_trigger(
	source: Arc<dyn CaptureSource>,
	requests: Arc<LatestSlot<CaptureRequest>>,
	config: SharedConfig,
	shutdown: Arc<AtomicBool>,
	logger: Logger,
) -> JoinHandle<()> {
	thread::spawn(move || {
		let logger = logger.new(o!("worker" => "capture-trigger"));
		debug!(logger, "started");
		while !shutdown.load(Ordering::Relaxed) {
			let (auto_scan, interval_ms) = {
				let config = config.read().unwrap();
				(config.auto_scan_mode, config.auto_scan_interval_ms)
			};
			if !auto_scan {
				thread::sleep(Duration::from_millis(200));
				continue;
			}
			if let Some(request) = source.capture() {
				requests.put(request);
			}
			thread::sleep(Duration::from_millis(interval_ms));
		}
		debug!(logger, "stopped");
	})
}
