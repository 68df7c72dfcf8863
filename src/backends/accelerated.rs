//! Accelerated backend
//!
//! Rayon-parallel implementation of the counting contract. Character,
//! sentence and word tallies run as parallel passes over the full text; word
//! tallying splits on whitespace boundaries, which tokens never span, so the
//! merge of per-chunk tallies is exactly equivalent to the serial fallback.
//!
//! The thread pool is built once on first use. When pool construction fails
//! the probe reports the backend unavailable and counting degrades to the
//! fallback without surfacing an error.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use rayon::prelude::*;

use crate::backends::{
    is_blank_line, is_counted_space, is_sentence_terminator, is_word, normalize_word,
    segment_has_word,
};
use crate::core::model::{RawCounts, TextStats};
use crate::core::readability::count_syllables;

static POOL: Lazy<Option<rayon::ThreadPool>> =
    Lazy::new(|| rayon::ThreadPoolBuilder::new().build().ok());

/// Whether the accelerated backend can run in this process
pub fn available() -> bool {
    POOL.is_some()
}

/// Worker thread count of the pool, for diagnostics
pub fn threads() -> Option<usize> {
    POOL.as_ref().map(|pool| pool.current_num_threads())
}

/// Analyze text with the accelerated backend directly
#[allow(dead_code)]
pub fn analyze(text: &str) -> TextStats {
    TextStats::from_raw(count(text))
}

pub(crate) fn count(text: &str) -> RawCounts {
    match POOL.as_ref() {
        Some(pool) => pool.install(|| count_parallel(text)),
        None => crate::backends::fallback::count(text),
    }
}

fn count_parallel(text: &str) -> RawCounts {
    let ((characters, characters_no_spaces), ((sentences, paragraphs), tally)) = rayon::join(
        || char_counts(text),
        || {
            rayon::join(
                || (sentence_count(text), paragraph_count(text)),
                || word_tally(text),
            )
        },
    );

    RawCounts {
        words: tally.words,
        characters,
        characters_no_spaces,
        sentences,
        paragraphs,
        frequency: tally.frequency,
        word_chars: tally.word_chars,
        syllables: tally.syllables,
    }
}

fn char_counts(text: &str) -> (usize, usize) {
    text.par_chars()
        .map(|c| (1usize, usize::from(!is_counted_space(c))))
        .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
}

fn sentence_count(text: &str) -> usize {
    // empty segments produced by terminator runs contain no word and drop out
    text.par_split(is_sentence_terminator)
        .filter(|segment| segment_has_word(segment))
        .count()
}

fn paragraph_count(text: &str) -> usize {
    let lines: Vec<&str> = text.split('\n').collect();

    let mut groups: Vec<(usize, usize)> = Vec::new();
    let mut start = None;
    for (i, line) in lines.iter().enumerate() {
        if is_blank_line(line) {
            if let Some(s) = start.take() {
                groups.push((s, i));
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        groups.push((s, lines.len()));
    }

    groups
        .into_par_iter()
        .filter(|&(s, e)| lines[s..e].iter().any(|line| segment_has_word(line)))
        .count()
}

#[derive(Default)]
struct WordTally {
    frequency: HashMap<String, usize>,
    words: usize,
    word_chars: usize,
    syllables: usize,
}

impl WordTally {
    fn push(mut self, word: String) -> Self {
        self.words += 1;
        self.word_chars += word.chars().count();
        self.syllables += count_syllables(&word);
        *self.frequency.entry(word).or_insert(0) += 1;
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.words += other.words;
        self.word_chars += other.word_chars;
        self.syllables += other.syllables;
        for (word, count) in other.frequency {
            *self.frequency.entry(word).or_insert(0) += count;
        }
        self
    }
}

fn word_tally(text: &str) -> WordTally {
    text.par_split_whitespace()
        .filter(|token| is_word(token))
        .map(normalize_word)
        .fold(WordTally::default, WordTally::push)
        .reduce(WordTally::default, WordTally::merge)
}
