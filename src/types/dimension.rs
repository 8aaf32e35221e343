//! Authenticity dimensions and their improvement advisories

use serde::{Deserialize, Serialize};

/// The five scored authenticity dimensions, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticityDimension {
    Sincerity,
    Consistency,
    Credibility,
    Originality,
    Naturalness,
}

impl AuthenticityDimension {
    /// Fixed evaluation order. Improvement areas are emitted in this order.
    pub const ALL: [AuthenticityDimension; 5] = [
        AuthenticityDimension::Sincerity,
        AuthenticityDimension::Consistency,
        AuthenticityDimension::Credibility,
        AuthenticityDimension::Originality,
        AuthenticityDimension::Naturalness,
    ];

    /// Weight of this dimension in the overall score
    pub fn weight(&self) -> f64 {
        match self {
            Self::Sincerity => crate::W_SINCERITY,
            Self::Consistency => crate::W_CONSISTENCY,
            Self::Credibility => crate::W_CREDIBILITY,
            Self::Originality => crate::W_ORIGINALITY,
            Self::Naturalness => crate::W_NATURALNESS,
        }
    }

    /// Short label for display
    pub fn label(&self) -> &'static str {
        match self {
            Self::Sincerity => "sincerity",
            Self::Consistency => "consistency",
            Self::Credibility => "credibility",
            Self::Originality => "originality",
            Self::Naturalness => "naturalness",
        }
    }

    /// Fixed advisory emitted when this dimension scores below the
    /// improvement threshold
    pub fn advisory(&self) -> &'static str {
        match self {
            Self::Sincerity => {
                "Use more first-person voice and cut back on hedging language"
            }
            Self::Consistency => {
                "Even out sentence complexity and emotional swings across samples"
            }
            Self::Credibility => {
                "Aim for a grade-12 readability level and a moderately formal register"
            }
            Self::Originality => {
                "Vary vocabulary and sentence structure to make the voice more distinctive"
            }
            Self::Naturalness => {
                "Loosen overly formal phrasing and write more directly to the reader"
            }
        }
    }
}

impl std::fmt::Display for AuthenticityDimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
