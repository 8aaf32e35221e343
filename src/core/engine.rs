//! Analysis engine: full pipeline from raw text to authenticity profile
//!
//! extract → characterize → score. Stateless and synchronous; identical
//! input text always yields bit-identical output.

use crate::core::{AuthenticityScorer, MetricsExtractor, StyleCharacterizer};
use crate::types::{AuthenticityInput, LinguisticMetrics, StyleAnalysis, StyleCharacteristics};

/// Engine chaining the three analysis stages
#[derive(Debug, Default)]
pub struct AnalysisEngine {
    extractor: MetricsExtractor,
    characterizer: StyleCharacterizer,
    scorer: AuthenticityScorer,
}

impl AnalysisEngine {
    /// Create new engine
    pub fn new() -> Self {
        Self {
            extractor: MetricsExtractor::new(),
            characterizer: StyleCharacterizer::new(),
            scorer: AuthenticityScorer::new(),
        }
    }

    /// Run the full pipeline over one text sample (or several samples
    /// joined with blank-line separators).
    pub fn analyze(&self, text: &str) -> StyleAnalysis {
        let metrics = self.extractor.extract(text);
        tracing::debug!(
            words = metrics.total_word_count,
            unique = metrics.unique_word_count,
            "extracted linguistic metrics"
        );

        let characteristics = self.characterizer.characterize(&metrics);
        tracing::debug!(
            formality = characteristics.formality_level,
            engagement = characteristics.engagement_level,
            "derived style characteristics"
        );

        let authenticity = self
            .scorer
            .score(&build_input(&metrics, &characteristics));
        tracing::debug!(
            overall = authenticity.overall_authenticity,
            confidence = authenticity.confidence_level,
            areas = authenticity.improvement_areas.len(),
            "scored authenticity"
        );

        StyleAnalysis {
            metrics,
            characteristics,
            authenticity,
        }
    }
}

/// Wire scorer inputs from the two earlier stages
fn build_input(
    metrics: &LinguisticMetrics,
    characteristics: &StyleCharacteristics,
) -> AuthenticityInput {
    AuthenticityInput {
        vocabulary_diversity: metrics.type_token_ratio,
        sentence_complexity: metrics.sentence_complexity,
        readability_score: metrics.flesch_kincaid_grade,
        formality_level: characteristics.formality_level,
        emotional_tone: characteristics.emotional_tone,
        engagement_level: characteristics.engagement_level,
        personal_pronouns: metrics.personal_pronouns,
        hedging_language: metrics.hedging_language,
        confidence_markers: metrics.confidence_markers,
    }
}

// =============================================================================
// TESTS
// =============================================================================
