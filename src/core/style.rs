//! Style characterizer: normalized semantic scales from raw metrics
//!
//! Each characteristic is the unweighted mean of two or three bounded
//! sub-terms. Sub-terms are clamped BEFORE averaging, so every parent
//! field stays inside its declared range for any metrics input.

use crate::types::{LinguisticMetrics, StyleCharacteristics};
use crate::{PARAGRAPH_LENGTH_BASELINE, SENTENCE_LENGTH_BASELINE};

/// Characterizer mapping raw metrics onto 0-100 scales
#[derive(Debug, Default)]
pub struct StyleCharacterizer;

impl StyleCharacterizer {
    /// Create new characterizer
    pub fn new() -> Self {
        Self
    }

    /// Derive characteristics from extracted metrics. Pure and total:
    /// defined for any valid `LinguisticMetrics`.
    pub fn characterize(&self, m: &LinguisticMetrics) -> StyleCharacteristics {
        StyleCharacteristics {
            formality_level: self.formality(m),
            academic_tone: self.academic_tone(m),
            emotional_tone: self.emotional_tone(m),
            engagement_level: self.engagement(m),
            syntactic_complexity: self.syntactic_complexity(m),
            lexical_sophistication: self.lexical_sophistication(m),
            conceptual_density: self.conceptual_density(m),
            personal_voice: self.personal_voice(m),
            originality_score: self.originality(m),
            consistency_score: self.consistency(m),
        }
    }

    /// Vocabulary diversity + passive/complex construction + grade level
    fn formality(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.type_token_ratio * 100.0),
            unit((m.passive_voice + m.sentence_complexity * 20.0) / 2.0),
            unit(m.flesch_kincaid_grade * 5.0),
        )
    }

    /// Hedging density + impersonality + clause load
    fn academic_tone(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.hedging_language * 2.0),
            unit(100.0 - m.personal_pronouns),
            unit(m.sentence_complexity * 30.0),
        )
    }

    /// Personal presence vs assertiveness, centered on neutral 50s
    fn emotional_tone(&self, m: &LinguisticMetrics) -> f64 {
        signed((m.personal_pronouns - 50.0) * 2.0 + (m.confidence_markers - 50.0) * 0.5)
    }

    /// Active constructions + direct address + connective flow
    fn engagement(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(100.0 - m.passive_voice),
            unit(m.personal_pronouns),
            unit(m.transition_words * 2.0),
        )
    }

    /// Sentence length + clause estimate + fog index
    fn syntactic_complexity(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.average_sentence_length * 4.0),
            unit(m.sentence_complexity * 25.0),
            unit(m.gunning_fog_index * 5.0),
        )
    }

    /// Vocabulary diversity + word length above the 3-char floor + grade level
    fn lexical_sophistication(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.type_token_ratio * 100.0),
            unit((m.average_word_length - 3.0) * 25.0),
            unit(m.flesch_kincaid_grade * 6.0),
        )
    }

    /// Reading difficulty + fog + word length
    fn conceptual_density(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(100.0 - m.flesch_reading_ease),
            unit(m.gunning_fog_index * 5.0),
            unit(m.average_word_length * 12.0),
        )
    }

    /// First-person density + active voice + unhedged directness
    fn personal_voice(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.personal_pronouns * 2.0),
            unit(100.0 - m.passive_voice),
            unit(100.0 - m.hedging_language),
        )
    }

    /// Diversity-weighted distinctiveness of vocabulary and structure
    fn originality(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(m.type_token_ratio * 120.0),
            unit(m.sentence_complexity * 25.0),
            unit((m.average_word_length - 3.0) * 20.0),
        )
    }

    /// Deviation from sentence/paragraph baselines + vocabulary evenness
    fn consistency(&self, m: &LinguisticMetrics) -> f64 {
        avg3(
            unit(100.0 - (m.average_sentence_length - SENTENCE_LENGTH_BASELINE).abs() * 4.0),
            unit(100.0 - (m.paragraph_length - PARAGRAPH_LENGTH_BASELINE).abs() * 15.0),
            unit(m.type_token_ratio * 100.0),
        )
    }
}

/// Clamp a sub-term to the 0-100 scale
fn unit(x: f64) -> f64 {
    x.clamp(0.0, 100.0)
}

/// Clamp to the signed -100..100 scale
fn signed(x: f64) -> f64 {
    x.clamp(-100.0, 100.0)
}

/// Unweighted mean of three already-clamped sub-terms
fn avg3(a: f64, b: f64, c: f64) -> f64 {
    (a + b + c) / 3.0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LinguisticMetrics;

    fn in_unit_range(x: f64) -> bool {
        (0.0..=100.0).contains(&x)
    }

    #[test]
    fn test_zero_metrics_stay_in_range() {
        let c = StyleCharacterizer::new().characterize(&LinguisticMetrics::zero());
        assert!(in_unit_range(c.formality_level));
        assert!(in_unit_range(c.academic_tone));
        assert!(in_unit_range(c.engagement_level));
        assert!(in_unit_range(c.syntactic_complexity));
        assert!(in_unit_range(c.lexical_sophistication));
        assert!(in_unit_range(c.conceptual_density));
        assert!(in_unit_range(c.personal_voice));
        assert!(in_unit_range(c.originality_score));
        assert!(in_unit_range(c.consistency_score));
        assert!((-100.0..=100.0).contains(&c.emotional_tone));
    }

    #[test]
    fn test_formality_formula() {
        let m = LinguisticMetrics {
            type_token_ratio: 0.5,
            passive_voice: 10.0,
            sentence_complexity: 2.0,
            flesch_kincaid_grade: 8.0,
            ..LinguisticMetrics::zero()
        };
        let c = StyleCharacterizer::new().characterize(&m);
        // (50 + (10 + 40)/2 + 40) / 3
        assert!((c.formality_level - (50.0 + 25.0 + 40.0) / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_emotional_tone_clamps_extremes() {
        let hot = LinguisticMetrics {
            personal_pronouns: 400.0,
            confidence_markers: 400.0,
            ..LinguisticMetrics::zero()
        };
        let cold = LinguisticMetrics::zero();
        let characterizer = StyleCharacterizer::new();
        assert_eq!(characterizer.characterize(&hot).emotional_tone, 100.0);
        // (0-50)*2 + (0-50)*0.5 = -125, clamped
        assert_eq!(characterizer.characterize(&cold).emotional_tone, -100.0);
    }

    #[test]
    fn test_negative_grade_does_not_drag_formality_negative() {
        let m = LinguisticMetrics {
            flesch_kincaid_grade: -12.0,
            ..LinguisticMetrics::zero()
        };
        let c = StyleCharacterizer::new().characterize(&m);
        assert!(c.formality_level >= 0.0);
        assert!(c.lexical_sophistication >= 0.0);
    }

    #[test]
    fn test_consistency_rewards_baselines() {
        let on_baseline = LinguisticMetrics {
            average_sentence_length: 15.0,
            paragraph_length: 3.0,
            type_token_ratio: 0.8,
            ..LinguisticMetrics::zero()
        };
        let off_baseline = LinguisticMetrics {
            average_sentence_length: 40.0,
            paragraph_length: 12.0,
            type_token_ratio: 0.8,
            ..LinguisticMetrics::zero()
        };
        let characterizer = StyleCharacterizer::new();
        let on = characterizer.characterize(&on_baseline).consistency_score;
        let off = characterizer.characterize(&off_baseline).consistency_score;
        assert!(on > off, "baseline-matching text should score higher: {} vs {}", on, off);
    }

    #[test]
    fn test_determinism() {
        let m = LinguisticMetrics {
            type_token_ratio: 0.7,
            average_word_length: 4.5,
            average_sentence_length: 18.0,
            sentence_complexity: 2.2,
            flesch_kincaid_grade: 10.0,
            flesch_reading_ease: 55.0,
            gunning_fog_index: 11.0,
            personal_pronouns: 6.0,
            passive_voice: 4.0,
            hedging_language: 3.0,
            confidence_markers: 2.0,
            transition_words: 5.0,
            ..LinguisticMetrics::zero()
        };
        let characterizer = StyleCharacterizer::new();
        assert_eq!(characterizer.characterize(&m), characterizer.characterize(&m));
    }
}
