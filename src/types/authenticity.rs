//! Authenticity scorer input and output records

use serde::{Deserialize, Serialize};

/// Bundled inputs for authenticity scoring.
///
/// Values come from the two earlier pipeline stages but the scorer accepts
/// any numeric input: every formula carries its own clamps, so out-of-range
/// values are absorbed rather than rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityInput {
    /// Type-token ratio, nominally 0.0-1.0
    pub vocabulary_diversity: f64,
    /// Estimated clauses per sentence
    pub sentence_complexity: f64,
    /// Reading grade level (Flesch-Kincaid)
    pub readability_score: f64,
    /// Formality scale, nominally 0-100
    pub formality_level: f64,
    /// Emotional tone, nominally -100..100
    pub emotional_tone: f64,
    /// Engagement scale, nominally 0-100
    pub engagement_level: f64,
    /// First-person pronouns per 100 words
    pub personal_pronouns: f64,
    /// Hedging words per 100 words
    pub hedging_language: f64,
    /// Assertive words per 100 words
    pub confidence_markers: f64,
}

/// Final authenticity assessment.
///
/// Sub-scores and `confidence_level` are clamped to 0-100;
/// `overall_authenticity` is the weighted sum of the (already clamped)
/// sub-scores and is not re-clamped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthenticityMetrics {
    /// Directness of voice vs hedging, 0-100
    pub sincerity: f64,
    /// Evenness of vocabulary, structure, and tone, 0-100
    pub consistency: f64,
    /// Readability/formality fit plus assertiveness, 0-100
    pub credibility: f64,
    /// Distinctiveness of expression, 0-100
    pub originality: f64,
    /// Freedom from over-formal stiffness, 0-100
    pub naturalness: f64,
    /// Weighted composite of the five sub-scores, 0-100
    pub overall_authenticity: f64,
    /// How much to trust this assessment, 0-100
    pub confidence_level: f64,
    /// One advisory per sub-score below threshold, in dimension order.
    /// Empty (never null) when every sub-score clears the bar.
    pub improvement_areas: Vec<String>,
}

impl AuthenticityMetrics {
    /// Sub-score for a dimension, in the fixed dimension order
    pub fn dimension_score(&self, dimension: crate::types::AuthenticityDimension) -> f64 {
        use crate::types::AuthenticityDimension as D;
        match dimension {
            D::Sincerity => self.sincerity,
            D::Consistency => self.consistency,
            D::Credibility => self.credibility,
            D::Originality => self.originality,
            D::Naturalness => self.naturalness,
        }
    }
}
