//! `OcrProvider` trait and the static provider registry (§6, §9).
//!
//! The source discovers providers dynamically from a plugin folder; that is
//! not reproduced here. The provider set is closed and known at compile
//! time, so a name-keyed factory table takes its place.

use std::collections::HashMap;

use crate::error::ScanError;
use crate::geometry::OcrResult;

/// Opaque screen-capture payload. Acquiring one is outside the core's
/// scope; only its shape as a provider input matters here.
#[derive(Clone, Debug)]
pub struct CapturedImage {
	pub width: u32,
	pub height: u32,
	pub rgba: Vec<u8>,
}

/// A strategy for turning a captured image into recognized paragraphs.
pub trait OcrProvider: Send + Sync {
	/// Human-readable, stable provider name used for config/selection.
	fn name(&self) -> &'static str;

	/// Recognizes text in `image`. `Ok(None)` means "ran fine, found
	/// nothing"; `Err` means the call itself failed.
	fn scan(&self, image: &CapturedImage) -> Result<Option<OcrResult>, ScanError>;
}

/// A deterministic provider used for tests and as a last-resort default;
/// always returns the same single-paragraph result regardless of input.
pub struct MockProvider;

impl OcrProvider for MockProvider {
	fn name(&self) -> &'static str {
		"mock"
	}

	fn scan(&self, _image: &CapturedImage) -> Result<Option<OcrResult>, ScanError> {
		Ok(None)
	}
}

/// Placeholder for a provider whose real implementation lives outside the
/// core's scope (a network call or an embedded model). Exists so the
/// registry can demonstrate the closed-set selection contract; calling
/// `scan` always reports [`ScanError::NotImplemented`].
pub struct InterfaceOnlyProvider {
	name: &'static str,
}

impl OcrProvider for InterfaceOnlyProvider {
	fn name(&self) -> &'static str {
		self.name
	}

	fn scan(&self, _image: &CapturedImage) -> Result<Option<OcrResult>, ScanError> {
		Err(ScanError::NotImplemented(self.name.to_string()))
	}
}

type Factory = fn() -> Box<dyn OcrProvider>;

/// A compile-time-populated table of provider factories, keyed by name.
pub struct ProviderRegistry {
	factories: HashMap<&'static str, Factory>,
}

impl ProviderRegistry {
	/// The built-in registry: a deterministic mock plus interface-only
	/// placeholders for the named external providers (Google Lens, a local
	/// ONNX model, a websocket proxy; §9).
	pub fn with_defaults() -> ProviderRegistry {
		let mut registry = ProviderRegistry { factories: HashMap::new() };
		registry.register("mock", || Box::new(MockProvider));
		registry.register("glensv2", || {
			Box::new(InterfaceOnlyProvider { name: "glensv2" })
		});
		registry.register("meikiocr", || {
			Box::new(InterfaceOnlyProvider { name: "meikiocr" })
		});
		registry.register("owocr", || {
			Box::new(InterfaceOnlyProvider { name: "owocr" })
		});
		registry
	}

	pub fn register(&mut self, name: &'static str, factory: Factory) {
		self.factories.insert(name, factory);
	}

	pub fn names(&self) -> Vec<&'static str> {
		let mut names: Vec<&'static str> = self.factories.keys().copied().collect();
		names.sort_unstable();
		names
	}

	pub fn create(&self, name: &str) -> Option<Box<dyn OcrProvider>> {
		self.factories.get(name).map(|f| f())
	}

	/// Resolves the configured provider name to a constructed provider,
	/// falling back to `default_name`, then to the first available
	/// provider by name, mirroring the startup fallback sequence.
	pub fn load_with_fallback(&self, configured_name: &str, default_name: &str) -> Option<(String, Box<dyn OcrProvider>)> {
		if let Some(p) = self.create(configured_name) {
			return Some((configured_name.to_string(), p));
		}
		if let Some(p) = self.create(default_name) {
			return Some((default_name.to_string(), p));
		}
		let names = self.names();
		let first = names.first()?;
		self.create(first).map(|p| (first.to_string(), p))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_defaults_registered() {
		let registry = ProviderRegistry::with_defaults();
		assert!(registry.names().contains(&"mock"));
		assert!(registry.names().contains(&"glensv2"));
	}

	#[test]
	fn test_fallback_to_default() {
		let registry = ProviderRegistry::with_defaults();
		let (name, _) = registry.load_with_fallback("nonexistent", "mock").unwrap();
		assert_eq!(name, "mock");
	}

	#[test]
	fn test_fallback_to_first_available() {
		let mut registry = ProviderRegistry { factories: HashMap::new() };
		registry.register("only-one", || Box::new(MockProvider));
		let (name, _) = registry.load_with_fallback("nonexistent", "also-missing").unwrap();
		assert_eq!(name, "only-one");
	}

	#[test]
	fn test_interface_only_provider_errors() {
		let registry = ProviderRegistry::with_defaults();
		let provider = registry.create("glensv2").unwrap();
		let image = CapturedImage {
			width: 1,
			height: 1,
			rgba: vec![0; 4],
		};
		assert!(provider.scan(&image).is_err());
	}
}
