//! Counting backends
//!
//! Two interchangeable implementations of the same counting contract: an
//! accelerated rayon-based path and a serial fallback. Which one runs is a
//! one-time, process-wide decision made by probing availability at first
//! use; a failed probe silently selects the fallback and never surfaces as
//! an error. Both backends must produce identical results for every input.

use once_cell::sync::Lazy;

use crate::core::model::{TextStats, WdError};

#[cfg(feature = "parallel")]
pub mod accelerated;
pub mod doctor;
pub mod fallback;

/// Environment override for backend selection (diagnostics and testing)
pub const BACKEND_ENV: &str = "WDC_BACKEND";

/// The counting backend bound for this process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Accelerated,
    Fallback,
}

impl Backend {
    pub fn name(self) -> &'static str {
        match self {
            Backend::Accelerated => "accelerated",
            Backend::Fallback => "fallback",
        }
    }

    fn probe() -> Self {
        if let Ok(choice) = std::env::var(BACKEND_ENV) {
            match choice.to_lowercase().as_str() {
                "fallback" | "serial" => return Backend::Fallback,
                // an explicit request still degrades when unavailable
                "accelerated" | "parallel" => {
                    return if accelerated_available() {
                        Backend::Accelerated
                    } else {
                        Backend::Fallback
                    };
                }
                _ => {}
            }
        }

        if accelerated_available() {
            Backend::Accelerated
        } else {
            Backend::Fallback
        }
    }
}

static ACTIVE: Lazy<Backend> = Lazy::new(Backend::probe);

/// The backend selected for this process (probed once, then immutable)
pub fn active() -> Backend {
    *ACTIVE
}

/// Whether the accelerated path is the active backend (display/diagnostics)
pub fn is_accelerated() -> bool {
    active() == Backend::Accelerated
}

/// Whether the accelerated backend could run in this process
pub fn accelerated_available() -> bool {
    #[cfg(feature = "parallel")]
    {
        accelerated::available()
    }
    #[cfg(not(feature = "parallel"))]
    {
        false
    }
}

/// Worker thread count of the accelerated pool, when it exists
pub fn accelerated_threads() -> Option<usize> {
    #[cfg(feature = "parallel")]
    {
        accelerated::threads()
    }
    #[cfg(not(feature = "parallel"))]
    {
        None
    }
}

/// Analyze text with the process-wide backend
///
/// Pure and reentrant; never fails. Empty input yields the zero-valued
/// result.
pub fn analyze(text: &str) -> TextStats {
    let raw = match active() {
        #[cfg(feature = "parallel")]
        Backend::Accelerated => accelerated::count(text),
        #[cfg(not(feature = "parallel"))]
        Backend::Accelerated => fallback::count(text),
        Backend::Fallback => fallback::count(text),
    };
    TextStats::from_raw(raw)
}

/// Analyze raw bytes supplied upstream
///
/// Fails with `WdError::InvalidInput` when the bytes are not valid UTF-8.
pub fn analyze_bytes(bytes: &[u8]) -> Result<TextStats, WdError> {
    let text = std::str::from_utf8(bytes).map_err(|e| WdError::InvalidInput(e.to_string()))?;
    Ok(analyze(text))
}

// Token rules shared by both backends. The backends implement traversal and
// aggregation independently; these predicates pin down the single definition
// of "word", "space", "terminator" and "blank line" they must agree on.

/// A whitespace-delimited token counts as a word if it contains at least one
/// alphanumeric character
pub(crate) fn is_word(token: &str) -> bool {
    token.chars().any(|c| c.is_alphanumeric())
}

/// Lowercase and strip leading/trailing non-alphanumeric characters
///
/// Never empty for a token that passed [`is_word`]: trimming non-alphanumeric
/// ends cannot remove an interior alphanumeric character.
pub(crate) fn normalize_word(token: &str) -> String {
    token
        .trim_matches(|c: char| !c.is_alphanumeric())
        .to_lowercase()
}

/// Characters excluded from the no-spaces character count
pub(crate) fn is_counted_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// Sentence terminators; a run of them delimits a single sentence
pub(crate) fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// A line containing only spaces, tabs or a carriage return is blank
pub(crate) fn is_blank_line(line: &str) -> bool {
    line.chars().all(|c| matches!(c, ' ' | '\t' | '\r'))
}

/// Whether a segment (sentence or paragraph candidate) contains a word
pub(crate) fn segment_has_word(segment: &str) -> bool {
    segment.split_whitespace().any(is_word)
}
