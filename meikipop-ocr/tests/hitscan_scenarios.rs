//! The six literal end-to-end scenarios (§8), hit-scan half: given a
//! paragraph list and a cursor position, confirm the suffix string H hands
//! off to the deconjugator/lookup stage.

use meikipop_ocr::{scan, BoundingBox, Paragraph, Word};

fn word_at(text: &str, center_x: f64, width: f64, center_y: f64, height: f64) -> Word {
	Word::new(text, "", BoundingBox::new(center_x, center_y, width, height))
}

fn horizontal_paragraph(words: Vec<Word>) -> Paragraph {
	let bbox = words
		.iter()
		.map(|w| w.bbox)
		.reduce(|a, b| a.union(&b))
		.unwrap();
	Paragraph::from_words(words, bbox, false)
}

fn vertical_paragraph(words: Vec<Word>) -> Paragraph {
	let bbox = words
		.iter()
		.map(|w| w.bbox)
		.reduce(|a, b| a.union(&b))
		.unwrap();
	Paragraph::from_words(words, bbox, true)
}

#[test]
fn scenario_1_tabemashita_cursor_over_first_char() {
	// 食べました, one word per character, cursor over 食.
	let words = vec![
		word_at("食", 0.1, 0.1, 0.5, 0.2),
		word_at("べ", 0.2, 0.1, 0.5, 0.2),
		word_at("ま", 0.3, 0.1, 0.5, 0.2),
		word_at("し", 0.4, 0.1, 0.5, 0.2),
		word_at("た", 0.5, 0.1, 0.5, 0.2),
	];
	let paragraphs = vec![horizontal_paragraph(words)];
	let result = scan(&paragraphs, 0.1, 0.5, 25).unwrap();
	assert_eq!(result.suffix_text, "食べました");
	assert_eq!(result.starting_word_index, 0);
}

#[test]
fn scenario_2_hon_wo_yomu_cursor_over_yomu() {
	let words = vec![
		word_at("本", 0.1, 0.1, 0.5, 0.2),
		word_at("を", 0.2, 0.1, 0.5, 0.2),
		word_at("読", 0.3, 0.1, 0.5, 0.2),
		word_at("む", 0.4, 0.1, 0.5, 0.2),
	];
	let paragraphs = vec![horizontal_paragraph(words)];
	let result = scan(&paragraphs, 0.3, 0.5, 25).unwrap();
	assert_eq!(result.suffix_text, "読む");
}

#[test]
fn scenario_3_kirei_na_cursor_over_first_char() {
	let words = vec![
		word_at("綺", 0.1, 0.1, 0.5, 0.2),
		word_at("麗", 0.2, 0.1, 0.5, 0.2),
		word_at("な", 0.3, 0.1, 0.5, 0.2),
	];
	let paragraphs = vec![horizontal_paragraph(words)];
	let result = scan(&paragraphs, 0.1, 0.5, 25).unwrap();
	assert_eq!(result.suffix_text, "綺麗な");
}

#[test]
fn scenario_4_ikanakatta_cursor_over_first_char() {
	let words = vec![
		word_at("行", 0.1, 0.1, 0.5, 0.2),
		word_at("か", 0.2, 0.1, 0.5, 0.2),
		word_at("な", 0.3, 0.1, 0.5, 0.2),
		word_at("か", 0.4, 0.1, 0.5, 0.2),
		word_at("っ", 0.5, 0.1, 0.5, 0.2),
		word_at("た", 0.6, 0.1, 0.5, 0.2),
	];
	let paragraphs = vec![horizontal_paragraph(words)];
	let result = scan(&paragraphs, 0.1, 0.5, 25).unwrap();
	assert_eq!(result.suffix_text, "行かなかった");
}

#[test]
fn scenario_5_empty_paragraph_list_has_no_result() {
	let paragraphs: Vec<Paragraph> = vec![];
	assert!(scan(&paragraphs, 0.5, 0.5, 25).is_none());
}

#[test]
fn scenario_6_vertical_desu_cursor_over_de() {
	// です｡ stacked top-to-bottom, cursor over で.
	let words = vec![
		word_at("で", 0.5, 0.2, 0.1, 0.1),
		word_at("す", 0.5, 0.2, 0.2, 0.1),
		word_at("｡", 0.5, 0.2, 0.3, 0.1),
	];
	let paragraphs = vec![vertical_paragraph(words)];
	let result = scan(&paragraphs, 0.5, 0.1, 25).unwrap();
	assert_eq!(result.suffix_text, "です｡");
	assert!(result.is_vertical);
}

#[test]
fn boundary_max_lookup_length_zero_yields_nothing() {
	let words = vec![word_at("の", 0.5, 0.1, 0.5, 0.2)];
	let paragraphs = vec![horizontal_paragraph(words)];
	assert!(scan(&paragraphs, 0.5, 0.5, 0).is_none());
}

#[test]
fn boundary_single_character_paragraph_returns_length_one_suffix() {
	let words = vec![word_at("の", 0.5, 0.1, 0.5, 0.2)];
	let paragraphs = vec![horizontal_paragraph(words)];
	let result = scan(&paragraphs, 0.5, 0.5, 25).unwrap();
	assert_eq!(result.suffix_text, "の");
}
