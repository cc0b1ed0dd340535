mod build;
mod error;
mod jmdict;

use std::path::PathBuf;
use std::process::ExitCode;

use slog::{o, Drain};

use build::BuildInputs;

/// Directory with JMdict/rule/priority JSON, relative to this crate.
const DEFAULT_JMDICT: &str = "../data/jmdict.json";
const DEFAULT_RULES: &str = "../data/deconjugator.json";
const DEFAULT_PRIORITY: &str = "../data/priority.json";
const DEFAULT_OUTPUT: &str = "../data/dictionary.bin";

fn root_logger() -> slog::Logger {
	let decorator = slog_term::TermDecorator::new().build();
	let drain = slog_term::FullFormat::new(decorator).build().fuse();
	let drain = slog::Async::new(drain).build().fuse();
	slog::Logger::root(drain, o!("component" => "dict-build"))
}

fn main() -> ExitCode {
	let logger = root_logger();

	let mut args = std::env::args().skip(1);
	let jmdict_paths: Vec<PathBuf> = match args.next() {
		Some(first) => first.split(',').map(PathBuf::from).collect(),
		None => vec![PathBuf::from(DEFAULT_JMDICT)],
	};
	let rules_path = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_RULES));
	let priority_path = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_PRIORITY));
	let output_path = args.next().map(PathBuf::from).unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

	let inputs = BuildInputs {
		jmdict_paths,
		rules_path,
		priority_path,
		output_path,
	};

	match build::run(&inputs, &logger) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			slog::error!(logger, "build failed"; "error" => err.to_string());
			ExitCode::FAILURE
		}
	}
}
