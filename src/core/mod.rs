//! Core modules for voicemark

pub mod authenticity;
pub mod engine;
pub mod metrics;
pub mod report;
pub mod style;

pub use authenticity::AuthenticityScorer;
pub use engine::AnalysisEngine;
pub use metrics::MetricsExtractor;
pub use report::{fingerprint, verify_report, AnalysisReport};
pub use style::StyleCharacterizer;
