//! Metrics extractor: raw linguistic measurements from sample text
//!
//! Tokenization, readability indices, and fixed-lexicon marker rates.
//! The lexicons and the syllable approximation are versioned constants:
//! scores must stay reproducible across releases, so neither may be
//! "improved" without a version bump.

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::LinguisticMetrics;

lazy_static! {
    // =========================================================================
    // Tokenization
    // =========================================================================
    /// Words: maximal runs of word characters
    static ref RE_WORD: Regex = Regex::new(r"\w+").unwrap();

    /// Sentence terminators: one or more of . ! ?
    static ref RE_SENTENCE_SPLIT: Regex = Regex::new(r"[.!?]+").unwrap();

    /// Paragraph boundary: blank line (newline, optional spaces, newline)
    static ref RE_PARAGRAPH_SPLIT: Regex = Regex::new(r"\n[ \t\r]*\n").unwrap();

    /// Vowel-group run for the syllable approximation
    static ref RE_VOWEL_GROUP: Regex = Regex::new(r"[aeiouy]{1,2}").unwrap();

    // =========================================================================
    // Clause estimate: subordinating/coordinating conjunctions
    // =========================================================================
    static ref RE_CONJUNCTIONS: Regex = Regex::new(
        r"(?i)\b(?:and|or|but|because|although|while|since|when|where|if|unless)\b"
    ).unwrap();

    // =========================================================================
    // Marker lexicon: first-person pronouns
    // =========================================================================
    static ref RE_PERSONAL_PRONOUNS: Regex = Regex::new(
        r"(?i)\b(?:i|me|my|mine|myself|we|us|our|ours|ourselves)\b"
    ).unwrap();

    // =========================================================================
    // Marker pattern: passive voice (auxiliary + -ed/-en participle)
    // =========================================================================
    static ref RE_PASSIVE_VOICE: Regex = Regex::new(
        r"(?i)\b(?:am|is|are|was|were|be|been|being)\s+\w+(?:ed|en)\b"
    ).unwrap();

    // =========================================================================
    // Marker lexicon: hedging (uncertainty signals)
    // =========================================================================
    static ref RE_HEDGING: Regex = Regex::new(
        r"(?i)\b(?:maybe|perhaps|possibly|probably|might|could|would|should|seems?|appears?|suggests?|indicates?|think|believe|assume|guess|likely)\b"
    ).unwrap();

    // =========================================================================
    // Marker lexicon: confidence markers (assertiveness signals)
    // =========================================================================
    static ref RE_CONFIDENCE: Regex = Regex::new(
        r"(?i)\b(?:certainly|clearly|definitely|obviously|undoubtedly|absolutely|surely|indeed|truly|always|never|must|know|confident|sure)\b"
    ).unwrap();

    // =========================================================================
    // Marker lexicon: transition words
    // =========================================================================
    static ref RE_TRANSITIONS: Regex = Regex::new(
        r"(?i)\b(?:however|therefore|furthermore|moreover|consequently|additionally|meanwhile|nevertheless|nonetheless|thus|hence|accordingly|similarly|conversely|finally|then)\b"
    ).unwrap();
}

/// Extractor for raw linguistic metrics
#[derive(Debug, Default)]
pub struct MetricsExtractor;

impl MetricsExtractor {
    /// Create new extractor
    pub fn new() -> Self {
        Self
    }

    /// Extract metrics from raw text.
    ///
    /// Never fails: empty input, whitespace, or symbol-only strings yield
    /// the all-zero metrics object. Divide-by-zero conditions substitute
    /// defined defaults instead of propagating NaN.
    pub fn extract(&self, text: &str) -> LinguisticMetrics {
        let words: Vec<String> = RE_WORD
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
            .collect();

        if words.is_empty() {
            return LinguisticMetrics::zero();
        }

        let total_word_count = words.len();
        let total = total_word_count as f64;

        let unique_word_count = words.iter().map(String::as_str).collect::<HashSet<_>>().len();
        let type_token_ratio = unique_word_count as f64 / total;

        let char_count: usize = words.iter().map(|w| w.chars().count()).sum();
        let average_word_length = char_count as f64 / total;

        let sentence_count = RE_SENTENCE_SPLIT
            .split(text)
            .filter(|s| !s.trim().is_empty())
            .count();
        let paragraph_count = RE_PARAGRAPH_SPLIT
            .split(text)
            .filter(|p| !p.trim().is_empty())
            .count();

        let average_sentence_length = if sentence_count > 0 {
            total / sentence_count as f64
        } else {
            0.0
        };

        // Clause estimate: conjunctions per sentence, baseline 1 clause
        let sentence_complexity = if sentence_count > 0 {
            count_matches(&RE_CONJUNCTIONS, text) / sentence_count as f64 + 1.0
        } else {
            1.0
        };

        let paragraph_length = if paragraph_count > 0 {
            sentence_count as f64 / paragraph_count as f64
        } else {
            0.0
        };

        let syllable_counts: Vec<usize> = words.iter().map(|w| count_syllables(w)).collect();
        let syllable_total: usize = syllable_counts.iter().sum();
        let complex_word_count = syllable_counts.iter().filter(|&&s| s >= 3).count();

        let (flesch_reading_ease, flesch_kincaid_grade, gunning_fog_index) = if sentence_count > 0 {
            let words_per_sentence = total / sentence_count as f64;
            let syllables_per_word = syllable_total as f64 / total;
            let complex_ratio = complex_word_count as f64 / total;

            (
                206.835 - 1.015 * words_per_sentence - 84.6 * syllables_per_word,
                0.39 * words_per_sentence + 11.8 * syllables_per_word - 15.59,
                0.4 * (words_per_sentence + 100.0 * complex_ratio),
            )
        } else {
            (0.0, 0.0, 0.0)
        };

        LinguisticMetrics {
            type_token_ratio,
            average_word_length,
            unique_word_count,
            total_word_count,
            average_sentence_length,
            sentence_complexity,
            paragraph_length,
            flesch_kincaid_grade,
            flesch_reading_ease,
            gunning_fog_index,
            personal_pronouns: percentage(&RE_PERSONAL_PRONOUNS, text, total),
            passive_voice: percentage(&RE_PASSIVE_VOICE, text, total),
            hedging_language: percentage(&RE_HEDGING, text, total),
            confidence_markers: percentage(&RE_CONFIDENCE, text, total),
            transition_words: percentage(&RE_TRANSITIONS, text, total),
        }
    }
}

/// Count regex matches in text
fn count_matches(regex: &Regex, text: &str) -> f64 {
    regex.find_iter(text).count() as f64
}

/// Matches per 100 words
fn percentage(regex: &Regex, text: &str, total_words: f64) -> f64 {
    count_matches(regex, text) / total_words * 100.0
}

/// Approximate syllable count for a single word.
///
/// Fixed heuristic: lowercase ASCII letters only, strip an `es`/`ed`
/// suffix, otherwise strip a trailing `e` after a consonant (y counts as
/// a consonant here), strip one leading `y`, then count maximal
/// `[aeiouy]{1,2}` runs. A word with no detected vowel group counts as
/// one syllable.
fn count_syllables(word: &str) -> usize {
    let mut w: String = word
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    if w.ends_with("es") || w.ends_with("ed") {
        w.truncate(w.len() - 2);
    } else if w.len() >= 2 && w.ends_with('e') {
        let before = w.as_bytes()[w.len() - 2] as char;
        if !matches!(before, 'a' | 'e' | 'i' | 'o' | 'u') {
            w.pop();
        }
    }

    let stripped = w.strip_prefix('y').unwrap_or(&w);

    RE_VOWEL_GROUP.find_iter(stripped).count().max(1)
}

// =============================================================================
// TESTS
// =============================================================================
