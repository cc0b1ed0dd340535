//! OCR paragraph data model, post-processing (O), hit-scan (H), and the
//! OCR provider registry.

pub mod error;
pub mod geometry;
pub mod hitscan;
pub mod postprocess;
pub mod provider;

pub use error::ScanError;
pub use geometry::{BoundingBox, OcrResult, Paragraph, Word};
pub use hitscan::{scan, HitScanResult};
pub use postprocess::merge_lines;
pub use provider::{CapturedImage, MockProvider, OcrProvider, ProviderRegistry};
