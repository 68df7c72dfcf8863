//! Statistics result model
//!
//! Every analysis, regardless of which counting backend produced it, maps to
//! the same `TextStats` value before rendering or export.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Words-per-minute rate used for the reading time estimate
pub const READING_WPM: f64 = 225.0;

/// How many entries to keep in `top_words` / `longest_words`
pub const TOP_N: usize = 5;

/// Errors surfaced to callers of the counting/export core
#[derive(Debug, Error)]
pub enum WdError {
    /// Input bytes were not valid UTF-8 text
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// An unknown export format was requested
    #[error("unsupported export format: {0} (expected one of: json, csv, html, md, txt)")]
    UnsupportedFormat(String),
}

/// The statistics produced for one piece of text
///
/// Constructed fresh on every analysis and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStats {
    /// Word count (whitespace tokens containing at least one alphanumeric char)
    pub words: usize,

    /// Total characters, whitespace included (chars, not bytes)
    pub characters: usize,

    /// Total characters excluding space, tab, newline and carriage return
    pub characters_no_spaces: usize,

    /// Sentence count (terminator-delimited segments containing a word)
    pub sentences: usize,

    /// Paragraph count (blank-line-delimited segments containing a word)
    pub paragraphs: usize,

    /// Number of distinct normalized words
    pub unique_words: usize,

    /// Mean character length of normalized words (0.0 when there are none)
    pub avg_word_length: f64,

    /// Estimated reading time at 225 words per minute
    pub reading_time_seconds: usize,

    /// Flesch Reading Ease score; absent when there are no words or sentences
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flesch_reading_ease: Option<f64>,

    /// Occurrences per normalized (lowercased, punctuation-stripped) word
    pub word_frequency: HashMap<String, usize>,

    /// Most frequent words, ties broken alphabetically
    pub top_words: Vec<(String, usize)>,

    /// Longest distinct words by character length, ties broken alphabetically
    pub longest_words: Vec<String>,
}

/// Raw tallies a counting backend must produce
///
/// Both backends fill this independently; the derived presentation fields of
/// `TextStats` come from the shared [`TextStats::from_raw`] finalizer.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawCounts {
    pub words: usize,
    pub characters: usize,
    pub characters_no_spaces: usize,
    pub sentences: usize,
    pub paragraphs: usize,
    /// normalized word -> occurrences
    pub frequency: HashMap<String, usize>,
    /// total chars across all counted (normalized) words
    pub word_chars: usize,
    /// total syllables across all counted words
    pub syllables: usize,
}

impl TextStats {
    /// Finalize raw backend tallies into the full statistics value
    pub(crate) fn from_raw(raw: RawCounts) -> Self {
        let unique_words = raw.frequency.len();

        let avg_word_length = if raw.words > 0 {
            raw.word_chars as f64 / raw.words as f64
        } else {
            0.0
        };

        let reading_time_seconds = (raw.words as f64 / READING_WPM * 60.0) as usize;

        let flesch_reading_ease =
            crate::core::readability::flesch_reading_ease(raw.words, raw.sentences, raw.syllables);

        let mut by_count: Vec<(String, usize)> = raw
            .frequency
            .iter()
            .map(|(w, c)| (w.clone(), *c))
            .collect();
        by_count.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        let top_words = by_count.into_iter().take(TOP_N).collect();

        let mut by_length: Vec<String> = raw.frequency.keys().cloned().collect();
        by_length.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        by_length.truncate(TOP_N);

        Self {
            words: raw.words,
            characters: raw.characters,
            characters_no_spaces: raw.characters_no_spaces,
            sentences: raw.sentences,
            paragraphs: raw.paragraphs,
            unique_words,
            avg_word_length,
            reading_time_seconds,
            flesch_reading_ease,
            word_frequency: raw.frequency,
            top_words,
            longest_words: by_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_with(frequency: &[(&str, usize)]) -> RawCounts {
        let mut raw = RawCounts::default();
        for (w, c) in frequency {
            raw.frequency.insert((*w).to_string(), *c);
            raw.words += c;
            raw.word_chars += w.chars().count() * c;
            raw.syllables += crate::core::readability::count_syllables(w) * c;
        }
        raw
    }

    #[test]
    fn test_empty_raw_finalizes_to_zero_stats() {
        let stats = TextStats::from_raw(RawCounts::default());
        assert_eq!(stats.words, 0);
        assert_eq!(stats.unique_words, 0);
        assert_eq!(stats.avg_word_length, 0.0);
        assert_eq!(stats.reading_time_seconds, 0);
        assert!(stats.flesch_reading_ease.is_none());
        assert!(stats.word_frequency.is_empty());
        assert!(stats.top_words.is_empty());
        assert!(stats.longest_words.is_empty());
    }

    #[test]
    fn test_top_words_ties_break_alphabetically() {
        let raw = raw_with(&[("beta", 2), ("alpha", 2), ("gamma", 3)]);
        let stats = TextStats::from_raw(raw);
        let names: Vec<&str> = stats.top_words.iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(names, vec!["gamma", "alpha", "beta"]);
    }

    #[test]
    fn test_longest_words_sorted_by_char_length() {
        let raw = raw_with(&[("a", 1), ("ccc", 1), ("bb", 1)]);
        let stats = TextStats::from_raw(raw);
        assert_eq!(stats.longest_words, vec!["ccc", "bb", "a"]);
    }

    #[test]
    fn test_reading_time_uses_225_wpm() {
        let mut raw = RawCounts::default();
        raw.words = 225;
        raw.sentences = 1;
        raw.frequency.insert("word".to_string(), 225);
        let stats = TextStats::from_raw(raw);
        assert_eq!(stats.reading_time_seconds, 60);
    }

    #[test]
    fn test_readability_absent_without_sentences() {
        let raw = raw_with(&[("hello", 2)]);
        let stats = TextStats::from_raw(raw);
        assert!(stats.flesch_reading_ease.is_none());
    }
}
