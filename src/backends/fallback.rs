//! Serial fallback backend
//!
//! Straightforward single-pass counting, always available. Selected whenever
//! the accelerated backend is missing; must stay behaviorally identical to
//! it for every input.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::backends::{is_blank_line, is_counted_space, is_word, normalize_word, segment_has_word};
use crate::core::model::{RawCounts, TextStats};
use crate::core::readability::count_syllables;

// A run of terminators delimits one sentence; empty segments between runs
// never contain a word, so split-per-character would count the same.
static SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("valid literal regex"));

/// Analyze text with the fallback backend directly
#[allow(dead_code)]
pub fn analyze(text: &str) -> TextStats {
    TextStats::from_raw(count(text))
}

pub(crate) fn count(text: &str) -> RawCounts {
    let mut raw = RawCounts::default();

    for c in text.chars() {
        raw.characters += 1;
        if !is_counted_space(c) {
            raw.characters_no_spaces += 1;
        }
    }

    for token in text.split_whitespace() {
        if !is_word(token) {
            continue;
        }
        let word = normalize_word(token);
        raw.words += 1;
        raw.word_chars += word.chars().count();
        raw.syllables += count_syllables(&word);
        *raw.frequency.entry(word).or_insert(0) += 1;
    }

    raw.sentences = SENTENCE_RE
        .split(text)
        .filter(|segment| segment_has_word(segment))
        .count();

    let mut has_word = false;
    for line in text.split('\n') {
        if is_blank_line(line) {
            if has_word {
                raw.paragraphs += 1;
            }
            has_word = false;
        } else if !has_word && segment_has_word(line) {
            has_word = true;
        }
    }
    if has_word {
        raw.paragraphs += 1;
    }

    raw
}
