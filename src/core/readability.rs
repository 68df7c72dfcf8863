//! Readability scoring
//!
//! Implements the Flesch Reading Ease formula with a vowel-group syllable
//! heuristic. Both counting backends feed their word tallies through this
//! module so the score is computed from identical inputs.

/// Count syllables in a single normalized (lowercased) word.
///
/// Heuristic: one syllable per run of consecutive vowels (`aeiouy`), minus
/// one for a trailing silent `e`, with a minimum of one syllable per word.
/// Words without Latin vowels (digits, non-Latin scripts) count as one.
pub fn count_syllables(word: &str) -> usize {
    let mut groups = 0usize;
    let mut prev_vowel = false;

    for c in word.chars() {
        let is_vowel = matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y');
        if is_vowel && !prev_vowel {
            groups += 1;
        }
        prev_vowel = is_vowel;
    }

    if groups > 1 && word.ends_with('e') {
        groups -= 1;
    }

    groups.max(1)
}

/// Flesch Reading Ease: `206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words)`
///
/// Undefined (None) when the text has no words or no sentences.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> Option<f64> {
    if words == 0 || sentences == 0 {
        return None;
    }

    let words = words as f64;
    let sentences = sentences as f64;
    let syllables = syllables as f64;

    Some(206.835 - 1.015 * (words / sentences) - 84.6 * (syllables / words))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syllables_simple_words() {
        assert_eq!(count_syllables("cat"), 1);
        assert_eq!(count_syllables("hello"), 2);
        assert_eq!(count_syllables("beautiful"), 3);
        assert_eq!(count_syllables("reading"), 2);
    }

    #[test]
    fn test_syllables_silent_e() {
        assert_eq!(count_syllables("make"), 1);
        assert_eq!(count_syllables("time"), 1);
        // "e" alone keeps its single group
        assert_eq!(count_syllables("e"), 1);
    }

    #[test]
    fn test_syllables_minimum_one() {
        assert_eq!(count_syllables("rhythm"), 1);
        assert_eq!(count_syllables("123"), 1);
        assert_eq!(count_syllables("中文"), 1);
    }

    #[test]
    fn test_flesch_undefined_on_zero() {
        assert!(flesch_reading_ease(0, 1, 0).is_none());
        assert!(flesch_reading_ease(5, 0, 7).is_none());
    }

    #[test]
    fn test_flesch_known_value() {
        // 10 words, 1 sentence, 13 syllables
        let score = flesch_reading_ease(10, 1, 13).unwrap();
        let expected = 206.835 - 1.015 * 10.0 - 84.6 * 1.3;
        assert!((score - expected).abs() < 1e-9);
    }

    #[test]
    fn test_flesch_easy_text_scores_higher() {
        // one-syllable words score higher than polysyllabic ones
        let easy = flesch_reading_ease(10, 2, 10).unwrap();
        let hard = flesch_reading_ease(10, 2, 30).unwrap();
        assert!(easy > hard);
    }
}
