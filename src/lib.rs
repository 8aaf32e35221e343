//! voicemark: Writing-style analysis and authenticity scoring engine
//!
//! Pipeline: text → MetricsExtractor → StyleCharacterizer → AuthenticityScorer

pub mod core;
pub mod types;

// =============================================================================
// AUTHENTICITY WEIGHTS - calibrated composite, sum = 1.0
// =============================================================================

/// Weight of sincerity in the overall score
pub const W_SINCERITY: f64 = 0.25;

/// Weight of consistency in the overall score
pub const W_CONSISTENCY: f64 = 0.20;

/// Weight of credibility in the overall score
pub const W_CREDIBILITY: f64 = 0.25;

/// Weight of originality in the overall score
pub const W_ORIGINALITY: f64 = 0.15;

/// Weight of naturalness in the overall score
pub const W_NATURALNESS: f64 = 0.15;

/// Sum of all weights, pinned by tests
pub const AUTH_WEIGHT_SUM: f64 = 1.0;

// =============================================================================
// THRESHOLDS AND BASELINES
// =============================================================================

/// Sub-scores below this trigger an improvement advisory
pub const IMPROVEMENT_THRESHOLD: f64 = 70.0;

/// Starting point for the confidence estimate
pub const CONFIDENCE_BASE: f64 = 70.0;

/// Reference sentence length (words) for consistency scoring
pub const SENTENCE_LENGTH_BASELINE: f64 = 15.0;

/// Reference paragraph length (sentences) for consistency scoring
pub const PARAGRAPH_LENGTH_BASELINE: f64 = 3.0;

/// Reference clause count per sentence for the consistency sub-score
pub const COMPLEXITY_BASELINE: f64 = 2.5;

/// Target reading grade level for the credibility sub-score
pub const READABILITY_TARGET_GRADE: f64 = 12.0;

/// Target formality for the credibility sub-score
pub const FORMALITY_TARGET: f64 = 60.0;

// =============================================================================
// VERSION
// =============================================================================

pub const VERSION: &str = "1.0.0";
