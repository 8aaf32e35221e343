//! Display bands for the overall authenticity score

use serde::{Deserialize, Serialize};

/// Terminal-facing label for an overall authenticity score.
///
/// The engine itself only emits numbers; mapping to a label/color is the
/// caller's concern, and the CLI is that caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuthenticityBand {
    /// Strong, recognizable voice (score >= 80)
    Distinct,
    /// Healthy middle ground (60-79)
    Balanced,
    /// Some dimensions lagging (40-59)
    Mixed,
    /// Voice barely registers (< 40)
    Flat,
}

impl AuthenticityBand {
    /// Map an overall score onto its band
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            AuthenticityBand::Distinct
        } else if score >= 60.0 {
            AuthenticityBand::Balanced
        } else if score >= 40.0 {
            AuthenticityBand::Mixed
        } else {
            AuthenticityBand::Flat
        }
    }

    /// Get ANSI color code for terminal display
    pub fn color_code(&self) -> &'static str {
        match self {
            AuthenticityBand::Distinct => "\x1b[32m", // Green
            AuthenticityBand::Balanced => "\x1b[36m", // Cyan
            AuthenticityBand::Mixed => "\x1b[33m",    // Yellow
            AuthenticityBand::Flat => "\x1b[31m",     // Red
        }
    }

    /// Reset ANSI color
    pub fn color_reset() -> &'static str {
        "\x1b[0m"
    }

    /// Get glyph for band
    pub fn glyph(&self) -> &'static str {
        match self {
            AuthenticityBand::Distinct => "✒",
            AuthenticityBand::Balanced => "✓",
            AuthenticityBand::Mixed => "◐",
            AuthenticityBand::Flat => "○",
        }
    }
}

impl std::fmt::Display for AuthenticityBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthenticityBand::Distinct => "DISTINCT",
            AuthenticityBand::Balanced => "BALANCED",
            AuthenticityBand::Mixed => "MIXED",
            AuthenticityBand::Flat => "FLAT",
        };
        write!(f, "{}", name)
    }
}
