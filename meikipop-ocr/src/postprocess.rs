//! Line-to-paragraph grouping (O, §4.2).

use crate::geometry::{BoundingBox, Paragraph};

const CROSS_AXIS_OVERLAP_MIN: f64 = 0.5;
const ALONG_AXIS_GAP_FACTOR: f64 = 1.5;

/// Groups raw per-line `Paragraph`s into coherent multi-line blocks.
///
/// Lines with no Japanese character are dropped first. Lines of different
/// writing direction never merge. Within a direction, adjacency, cross-axis
/// overlap and along-axis gap gate merging; merging is transitive.
pub fn merge_lines(lines: Vec<Paragraph>) -> Vec<Paragraph> {
	let lines: Vec<Paragraph> = lines.into_iter().filter(|p| kana::has_japanese(&p.full_text)).collect();

	let (vertical, horizontal): (Vec<Paragraph>, Vec<Paragraph>) = lines.into_iter().partition(|p| p.is_vertical);

	let mut merged = Vec::new();
	merged.extend(merge_direction(horizontal, false));
	merged.extend(merge_direction(vertical, true));

	merged.sort_by(|a, b| {
		a.bbox
			.center_y
			.partial_cmp(&b.bbox.center_y)
			.unwrap()
			.then(a.bbox.center_x.partial_cmp(&b.bbox.center_x).unwrap())
	});
	merged
}

fn merge_direction(mut lines: Vec<Paragraph>, is_vertical: bool) -> Vec<Paragraph> {
	if lines.is_empty() {
		return Vec::new();
	}

	sort_reading_order(&mut lines, is_vertical);

	let mut parent: Vec<usize> = (0..lines.len()).collect();
	for i in 0..lines.len().saturating_sub(1) {
		if should_merge(&lines[i].bbox, &lines[i + 1].bbox, is_vertical) {
			union(&mut parent, i, i + 1);
		}
	}

	let mut groups: std::collections::BTreeMap<usize, Vec<usize>> = std::collections::BTreeMap::new();
	for i in 0..lines.len() {
		let root = find(&mut parent, i);
		groups.entry(root).or_default().push(i);
	}

	groups
		.into_values()
		.map(|members| {
			let mut words = Vec::new();
			let mut bbox = lines[members[0]].bbox;
			let mut text_parts = Vec::new();
			for (pos, &idx) in members.iter().enumerate() {
				if pos > 0 {
					bbox = bbox.union(&lines[idx].bbox);
				}
				words.extend(lines[idx].words.clone());
				text_parts.push(lines[idx].full_text.clone());
			}
			Paragraph {
				full_text: text_parts.join("\n"),
				words,
				bbox,
				is_vertical,
			}
		})
		.collect()
}

fn should_merge(a: &BoundingBox, b: &BoundingBox, is_vertical: bool) -> bool {
	if is_vertical {
		let overlap = a.vertical_overlap_ratio(b);
		let thickness = a.width.min(b.width);
		let gap = (a.left() - b.right()).max(b.left() - a.right()).max(0.0);
		overlap >= CROSS_AXIS_OVERLAP_MIN && gap <= thickness * ALONG_AXIS_GAP_FACTOR
	} else {
		let overlap = a.horizontal_overlap_ratio(b);
		let thickness = a.height.min(b.height);
		let gap = (a.top() - b.bottom()).max(b.top() - a.bottom()).max(0.0);
		overlap >= CROSS_AXIS_OVERLAP_MIN && gap <= thickness * ALONG_AXIS_GAP_FACTOR
	}
}

fn sort_reading_order(lines: &mut [Paragraph], is_vertical: bool) {
	if is_vertical {
		// right-to-left, ties top-to-bottom
		lines.sort_by(|a, b| {
			b.bbox
				.center_x
				.partial_cmp(&a.bbox.center_x)
				.unwrap()
				.then(a.bbox.center_y.partial_cmp(&b.bbox.center_y).unwrap())
		});
	} else {
		// top-to-bottom, ties left-to-right
		lines.sort_by(|a, b| {
			a.bbox
				.center_y
				.partial_cmp(&b.bbox.center_y)
				.unwrap()
				.then(a.bbox.center_x.partial_cmp(&b.bbox.center_x).unwrap())
		});
	}
}

fn find(parent: &mut [usize], x: usize) -> usize {
	if parent[x] != x {
		parent[x] = find(parent, parent[x]);
	}
	parent[x]
}

fn union(parent: &mut [usize], a: usize, b: usize) {
	let ra = find(parent, a);
	let rb = find(parent, b);
	if ra != rb {
		parent[ra] = rb;
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geometry::Word;

	fn line(text: &str, cy: f64, cx: f64, w: f64, h: f64, vertical: bool) -> Paragraph {
		let bbox = BoundingBox::new(cx, cy, w, h);
		Paragraph::from_words(vec![Word::new(text, "", bbox)], bbox, vertical)
	}

	#[test]
	fn test_drops_non_japanese_lines() {
		let lines = vec![line("hello", 0.1, 0.1, 0.1, 0.05, false)];
		assert!(merge_lines(lines).is_empty());
	}

	#[test]
	fn test_merges_adjacent_horizontal_lines() {
		let lines = vec![
			line("食べました", 0.1, 0.3, 0.4, 0.05, false),
			line("本当に", 0.16, 0.3, 0.3, 0.05, false),
		];
		let merged = merge_lines(lines);
		assert_eq!(merged.len(), 1);
		assert_eq!(merged[0].full_text, "食べました\n本当に");
	}

	#[test]
	fn test_does_not_merge_across_directions() {
		let lines = vec![
			line("食べました", 0.1, 0.3, 0.4, 0.05, false),
			line("本当に", 0.1, 0.3, 0.05, 0.4, true),
		];
		let merged = merge_lines(lines);
		assert_eq!(merged.len(), 2);
	}

	#[test]
	fn test_does_not_merge_distant_lines() {
		let lines = vec![
			line("食べました", 0.1, 0.3, 0.4, 0.05, false),
			line("本当に", 0.9, 0.3, 0.3, 0.05, false),
		];
		let merged = merge_lines(lines);
		assert_eq!(merged.len(), 2);
	}
}
