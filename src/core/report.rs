//! Analysis report envelope with a reproducibility fingerprint
//!
//! The engine output itself is timestamp-free so identical text yields
//! identical records. The report wraps one analysis with the engine
//! version, a SHA-256 fingerprint of the input, and a generation time for
//! the surrounding application's bookkeeping.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::types::StyleAnalysis;
use crate::VERSION;

/// One analysis run, wrapped for handoff to the surrounding application
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Engine version the analysis was produced with
    pub version: String,
    /// SHA-256 hex fingerprint of the exact input text
    pub fingerprint: String,
    /// When the report was generated
    pub generated_at: DateTime<Utc>,
    /// The three nested analysis records
    pub analysis: StyleAnalysis,
}

impl AnalysisReport {
    /// Wrap an analysis of `text` into a report
    pub fn new(text: &str, analysis: StyleAnalysis) -> Self {
        Self {
            version: VERSION.to_string(),
            fingerprint: fingerprint(text),
            generated_at: Utc::now(),
            analysis,
        }
    }
}

/// SHA-256 hex fingerprint of the input text
pub fn fingerprint(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let digest = hasher.finalize();
    digest.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Check that a report was produced from exactly this text
pub fn verify_report(report: &AnalysisReport, text: &str) -> bool {
    report.fingerprint == fingerprint(text)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnalysisEngine;

    #[test]
    fn test_fingerprint_is_stable_hex() {
        let a = fingerprint("sample text");
        let b = fingerprint("sample text");
        assert_eq!(a, b);
        assert_eq!(a.len(), 64);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_verify_round_trip() {
        let engine = AnalysisEngine::new();
        let text = "I keep my sentences short. Clearly that helps.";
        let report = AnalysisReport::new(text, engine.analyze(text));

        assert_eq!(report.version, VERSION);
        assert!(verify_report(&report, text));
        assert!(!verify_report(&report, "different text"));
    }
}
