//! Raw linguistic measurements extracted from a text sample

use serde::{Deserialize, Serialize};

/// Raw metrics computed once per text (spelling of the JSON contract:
/// camelCase keys, IEEE-754 doubles)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinguisticMetrics {
    /// Unique words / total words, 0.0-1.0 (0 for empty input)
    pub type_token_ratio: f64,
    /// Mean characters per word
    pub average_word_length: f64,
    /// Distinct case-folded words
    pub unique_word_count: usize,
    /// Total word tokens
    pub total_word_count: usize,
    /// Words per sentence
    pub average_sentence_length: f64,
    /// Estimated clauses per sentence (baseline 1.0)
    pub sentence_complexity: f64,
    /// Sentences per paragraph
    pub paragraph_length: f64,
    /// Flesch-Kincaid grade level (unclamped, may be negative)
    pub flesch_kincaid_grade: f64,
    /// Flesch reading ease (unclamped)
    pub flesch_reading_ease: f64,
    /// Gunning fog index (unclamped)
    pub gunning_fog_index: f64,
    /// First-person pronouns per 100 words
    pub personal_pronouns: f64,
    /// Passive constructions per 100 words
    pub passive_voice: f64,
    /// Hedging words per 100 words
    pub hedging_language: f64,
    /// Assertive words per 100 words
    pub confidence_markers: f64,
    /// Transition words per 100 words
    pub transition_words: f64,
}

impl LinguisticMetrics {
    /// Metrics for degenerate input (no words detected).
    /// `sentence_complexity` stays at its 1-clause baseline.
    pub fn zero() -> Self {
        Self {
            type_token_ratio: 0.0,
            average_word_length: 0.0,
            unique_word_count: 0,
            total_word_count: 0,
            average_sentence_length: 0.0,
            sentence_complexity: 1.0,
            paragraph_length: 0.0,
            flesch_kincaid_grade: 0.0,
            flesch_reading_ease: 0.0,
            gunning_fog_index: 0.0,
            personal_pronouns: 0.0,
            passive_voice: 0.0,
            hedging_language: 0.0,
            confidence_markers: 0.0,
            transition_words: 0.0,
        }
    }
}

impl Default for LinguisticMetrics {
    fn default() -> Self {
        Self::zero()
    }
}
