//! Normalized-coordinate geometry: §3's `BoundingBox`, `Word`, `Paragraph`.

use serde::{Deserialize, Serialize};

/// An axis-aligned box in normalized `[0,1]` image coordinates (§3).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
	pub center_x: f64,
	pub center_y: f64,
	pub width: f64,
	pub height: f64,
}

impl BoundingBox {
	pub fn new(center_x: f64, center_y: f64, width: f64, height: f64) -> BoundingBox {
		BoundingBox {
			center_x,
			center_y,
			width,
			height,
		}
	}

	pub fn left(&self) -> f64 {
		self.center_x - self.width / 2.0
	}

	pub fn right(&self) -> f64 {
		self.center_x + self.width / 2.0
	}

	pub fn top(&self) -> f64 {
		self.center_y - self.height / 2.0
	}

	pub fn bottom(&self) -> f64 {
		self.center_y + self.height / 2.0
	}

	pub fn area(&self) -> f64 {
		self.width.max(0.0) * self.height.max(0.0)
	}

	pub fn contains(&self, x: f64, y: f64) -> bool {
		x >= self.left() && x <= self.right() && y >= self.top() && y <= self.bottom()
	}

	/// Smallest box containing both `self` and `other`.
	pub fn union(&self, other: &BoundingBox) -> BoundingBox {
		let left = self.left().min(other.left());
		let right = self.right().max(other.right());
		let top = self.top().min(other.top());
		let bottom = self.bottom().max(other.bottom());
		BoundingBox {
			center_x: (left + right) / 2.0,
			center_y: (top + bottom) / 2.0,
			width: right - left,
			height: bottom - top,
		}
	}

	/// Overlap fraction of `self`'s horizontal extent covered by `other`,
	/// relative to the narrower of the two.
	pub fn horizontal_overlap_ratio(&self, other: &BoundingBox) -> f64 {
		let overlap = (self.right().min(other.right()) - self.left().max(other.left())).max(0.0);
		let shorter = self.width.min(other.width);
		if shorter <= 0.0 {
			0.0
		} else {
			overlap / shorter
		}
	}

	/// Overlap fraction of `self`'s vertical extent covered by `other`,
	/// relative to the shorter of the two.
	pub fn vertical_overlap_ratio(&self, other: &BoundingBox) -> f64 {
		let overlap = (self.bottom().min(other.bottom()) - self.top().max(other.top())).max(0.0);
		let shorter = self.height.min(other.height);
		if shorter <= 0.0 {
			0.0
		} else {
			overlap / shorter
		}
	}
}

/// One OCR-recognized token within a line (§3). `text` may be a single
/// character or a multi-character segment, depending on the provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Word {
	pub text: String,
	pub separator: String,
	pub bbox: BoundingBox,
}

impl Word {
	pub fn new(text: impl Into<String>, separator: impl Into<String>, bbox: BoundingBox) -> Word {
		Word {
			text: text.into(),
			separator: separator.into(),
			bbox,
		}
	}
}

/// A coherent block of recognized text (§3), either a raw OCR line (before
/// post-processing) or a merged multi-line block (after it).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
	pub full_text: String,
	pub words: Vec<Word>,
	pub bbox: BoundingBox,
	pub is_vertical: bool,
}

impl Paragraph {
	/// Builds `full_text` from `words` the way the invariant in §8 requires:
	/// concatenate `text + separator` across words and trim.
	pub fn from_words(words: Vec<Word>, bbox: BoundingBox, is_vertical: bool) -> Paragraph {
		let mut full_text = String::new();
		for w in &words {
			full_text.push_str(&w.text);
			full_text.push_str(&w.separator);
		}
		Paragraph {
			full_text: full_text.trim().to_string(),
			words,
			bbox,
			is_vertical,
		}
	}
}

/// Output of one OCR cycle: an ordered sequence of paragraphs (§3).
pub type OcrResult = Vec<Paragraph>;
