//! Core types for voicemark

mod analysis;
mod authenticity;
mod band;
mod dimension;
mod metrics;
mod style;

pub use analysis::StyleAnalysis;
pub use authenticity::{AuthenticityInput, AuthenticityMetrics};
pub use band::AuthenticityBand;
pub use dimension::AuthenticityDimension;
pub use metrics::LinguisticMetrics;
pub use style::StyleCharacteristics;
