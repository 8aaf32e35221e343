//! Derived stylistic characteristics on normalized semantic scales

use serde::{Deserialize, Serialize};

/// Ten characteristic scales derived from [`LinguisticMetrics`].
///
/// Every field is clamped to 0-100 except `emotional_tone`, which runs
/// -100 (detached) to +100 (charged). Clamping happens per sub-term in the
/// characterizer, so these bounds hold for any metrics input.
///
/// [`LinguisticMetrics`]: crate::types::LinguisticMetrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleCharacteristics {
    /// Register formality, 0 (casual) - 100 (formal)
    pub formality_level: f64,
    /// Academic register strength, 0-100
    pub academic_tone: f64,
    /// Negative = detached, positive = emotionally charged, -100..100
    pub emotional_tone: f64,
    /// Reader-facing energy, 0-100
    pub engagement_level: f64,
    /// Clause and sentence structure load, 0-100
    pub syntactic_complexity: f64,
    /// Vocabulary sophistication, 0-100
    pub lexical_sophistication: f64,
    /// Information density, 0-100
    pub conceptual_density: f64,
    /// First-person directness, 0-100
    pub personal_voice: f64,
    /// Distinctiveness of expression, 0-100
    pub originality_score: f64,
    /// Evenness against sentence/paragraph baselines, 0-100
    pub consistency_score: f64,
}
