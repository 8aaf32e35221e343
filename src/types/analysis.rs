//! Combined analysis output

use serde::{Deserialize, Serialize};
use crate::types::{AuthenticityBand, AuthenticityMetrics, LinguisticMetrics, StyleCharacteristics};

/// The three nested records produced by one analysis run.
///
/// This is the full function-call contract of the engine: serializable to
/// JSON with camelCase keys, reproducible field-by-field for identical
/// input text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleAnalysis {
    /// Stage 1: raw linguistic measurements
    pub metrics: LinguisticMetrics,
    /// Stage 2: normalized characteristic scales
    pub characteristics: StyleCharacteristics,
    /// Stage 3: authenticity assessment
    pub authenticity: AuthenticityMetrics,
}

impl StyleAnalysis {
    /// Band for the overall score (display mapping, not part of the engine
    /// contract)
    pub fn band(&self) -> AuthenticityBand {
        AuthenticityBand::from_score(self.authenticity.overall_authenticity)
    }

    /// Format for terminal display (with colors)
    pub fn to_terminal_string(&self) -> String {
        let band = self.band();
        let color = band.color_code();
        let reset = AuthenticityBand::color_reset();

        format!(
            "{}{} authenticity={:.1} [{}] | confidence={:.0}% | words={}{}",
            color,
            band.glyph(),
            self.authenticity.overall_authenticity,
            band,
            self.authenticity.confidence_level,
            self.metrics.total_word_count,
            reset
        )
    }

    /// Format for parseable output (no colors)
    pub fn to_parseable_string(&self) -> String {
        format!(
            "authenticity={:.1} | band={} | confidence={:.0} | words={} | areas={}",
            self.authenticity.overall_authenticity,
            self.band(),
            self.authenticity.confidence_level,
            self.metrics.total_word_count,
            self.authenticity.improvement_areas.len()
        )
    }
}
