//! Authenticity scorer: five sub-scores, weighted overall, confidence
//!
//! The scorer is total over any numeric input: every formula carries its
//! own clamps, and non-finite inputs are mapped to zero before scoring.

use crate::types::{AuthenticityDimension, AuthenticityInput, AuthenticityMetrics};
use crate::{
    COMPLEXITY_BASELINE, CONFIDENCE_BASE, FORMALITY_TARGET, IMPROVEMENT_THRESHOLD,
    READABILITY_TARGET_GRADE, W_CONSISTENCY, W_CREDIBILITY, W_NATURALNESS, W_ORIGINALITY,
    W_SINCERITY,
};

/// Scorer combining characterization outputs into an authenticity profile
#[derive(Debug, Default)]
pub struct AuthenticityScorer;

impl AuthenticityScorer {
    /// Create new scorer
    pub fn new() -> Self {
        Self
    }

    /// Score authenticity from bundled inputs
    pub fn score(&self, input: &AuthenticityInput) -> AuthenticityMetrics {
        let input = sanitize(input);

        let sincerity = self.sincerity(&input);
        let consistency = self.consistency(&input);
        let credibility = self.credibility(&input);
        let originality = self.originality(&input);
        let naturalness = self.naturalness(&input);

        let overall_authenticity = sincerity * W_SINCERITY
            + consistency * W_CONSISTENCY
            + credibility * W_CREDIBILITY
            + originality * W_ORIGINALITY
            + naturalness * W_NATURALNESS;

        let sub_scores = [sincerity, consistency, credibility, originality, naturalness];
        let improvement_areas = AuthenticityDimension::ALL
            .iter()
            .zip(sub_scores)
            .filter(|(_, score)| *score < IMPROVEMENT_THRESHOLD)
            .map(|(dimension, _)| dimension.advisory().to_string())
            .collect();

        AuthenticityMetrics {
            sincerity,
            consistency,
            credibility,
            originality,
            naturalness,
            overall_authenticity,
            confidence_level: self.confidence(&input),
            improvement_areas,
        }
    }

    /// Personal directness rewarded, hedging doubly penalized
    fn sincerity(&self, i: &AuthenticityInput) -> f64 {
        (i.personal_pronouns * 0.4 + (100.0 - i.hedging_language) * 0.4
            - i.hedging_language * 0.2)
            .clamp(0.0, 100.0)
    }

    /// Vocabulary spread + complexity near the 2.5-clause baseline + even tone
    fn consistency(&self, i: &AuthenticityInput) -> f64 {
        avg3(
            unit(i.vocabulary_diversity * 100.0),
            unit(100.0 - (i.sentence_complexity - COMPLEXITY_BASELINE).abs() * 20.0),
            unit(100.0 - i.emotional_tone.abs() * 0.5),
        )
    }

    /// Grade-12 readability target + moderate formality + assertiveness
    fn credibility(&self, i: &AuthenticityInput) -> f64 {
        avg3(
            unit(100.0 - (i.readability_score - READABILITY_TARGET_GRADE).abs() * 5.0),
            unit(100.0 - (i.formality_level - FORMALITY_TARGET).abs() * 0.8),
            unit(i.confidence_markers),
        )
    }

    /// Diversity + structural variety + personal stamp
    fn originality(&self, i: &AuthenticityInput) -> f64 {
        avg3(
            unit(i.vocabulary_diversity * 100.0),
            unit(i.sentence_complexity * 25.0),
            unit(i.personal_pronouns),
        )
    }

    /// Engagement and voice, penalized when formality runs past 80
    fn naturalness(&self, i: &AuthenticityInput) -> f64 {
        let formality_over_penalty = (i.formality_level - 80.0).max(0.0) * 0.5;
        ((i.engagement_level + i.personal_pronouns - formality_over_penalty) / 3.0)
            .clamp(0.0, 100.0)
    }

    /// Base 70 adjusted for diversity and engagement, docked for extremes
    fn confidence(&self, i: &AuthenticityInput) -> f64 {
        let mut confidence =
            CONFIDENCE_BASE + i.vocabulary_diversity * 20.0 + i.engagement_level * 0.1;
        if !(5.0..=95.0).contains(&i.formality_level) {
            confidence -= 10.0;
        }
        if i.emotional_tone.abs() > 80.0 {
            confidence -= 10.0;
        }
        confidence.clamp(0.0, 100.0)
    }
}

/// Map non-finite inputs to zero so every formula stays defined
fn sanitize(input: &AuthenticityInput) -> AuthenticityInput {
    let f = |x: f64| if x.is_finite() { x } else { 0.0 };
    AuthenticityInput {
        vocabulary_diversity: f(input.vocabulary_diversity),
        sentence_complexity: f(input.sentence_complexity),
        readability_score: f(input.readability_score),
        formality_level: f(input.formality_level),
        emotional_tone: f(input.emotional_tone),
        engagement_level: f(input.engagement_level),
        personal_pronouns: f(input.personal_pronouns),
        hedging_language: f(input.hedging_language),
        confidence_markers: f(input.confidence_markers),
    }
}

/// Clamp a sub-term to the 0-100 scale
fn unit(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Unweighted mean of three already-clamped sub-terms
fn avg3(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 3.0
}

// =============================================================================
// TESTS
// =============================================================================
