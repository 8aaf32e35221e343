//! Integration tests for the full pipeline
//!
//! Tests the path: text → metrics → characteristics → authenticity, the
//! JSON contract, and the report envelope.

use pretty_assertions::assert_eq;
use voicemark::core::{verify_report, AnalysisEngine, AnalysisReport, AuthenticityScorer};
use voicemark::types::{AuthenticityBand, AuthenticityDimension, AuthenticityInput};
use voicemark::IMPROVEMENT_THRESHOLD;

const SAMPLE: &str = "I write the way I talk, and I trust that voice. When a draft \
feels stiff, I read it aloud and cut whatever I would never say.\n\nClearly the \
habit works. My editors always know which pages are mine.";

/// Full pipeline produces range-valid output for a realistic sample
#[test]
fn test_full_pipeline_ranges() {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze(SAMPLE);

    assert!(analysis.metrics.total_word_count > 0);
    assert!((0.0..=1.0).contains(&analysis.metrics.type_token_ratio));

    let c = &analysis.characteristics;
    for value in [
        c.formality_level,
        c.academic_tone,
        c.engagement_level,
        c.syntactic_complexity,
        c.lexical_sophistication,
        c.conceptual_density,
        c.personal_voice,
        c.originality_score,
        c.consistency_score,
    ] {
        assert!((0.0..=100.0).contains(&value), "characteristic out of range: {}", value);
    }
    assert!((-100.0..=100.0).contains(&c.emotional_tone));

    let a = &analysis.authenticity;
    for value in [
        a.sincerity,
        a.consistency,
        a.credibility,
        a.originality,
        a.naturalness,
        a.overall_authenticity,
        a.confidence_level,
    ] {
        assert!((0.0..=100.0).contains(&value), "score out of range: {}", value);
    }
}

/// Calling the pipeline twice on the same string yields identical objects
#[test]
fn test_idempotence_field_by_field() {
    let engine = AnalysisEngine::new();
    let first = engine.analyze(SAMPLE);
    let second = engine.analyze(SAMPLE);

    assert_eq!(first, second);
    // and identical serialized form
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes"),
    );
}

/// JSON contract: camelCase keys, improvementAreas always an array
#[test]
fn test_json_contract() {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze(SAMPLE);
    let json = serde_json::to_string(&analysis).expect("serializes");

    for key in [
        "typeTokenRatio",
        "averageWordLength",
        "totalWordCount",
        "fleschKincaidGrade",
        "gunningFogIndex",
        "formalityLevel",
        "emotionalTone",
        "overallAuthenticity",
        "confidenceLevel",
        "improvementAreas",
    ] {
        assert!(json.contains(key), "missing key {} in {}", key, json);
    }

    let value: serde_json::Value = serde_json::from_str(&json).expect("parses");
    assert!(value["authenticity"]["improvementAreas"].is_array());

    // round-trips back into the record type
    let back: voicemark::types::StyleAnalysis = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(back, analysis);
}

/// Empty input flows through the whole pipeline with defined defaults
#[test]
fn test_empty_input_full_pipeline() {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze("");

    assert_eq!(analysis.metrics.total_word_count, 0);
    assert!(analysis.authenticity.overall_authenticity.is_finite());
    assert_eq!(analysis.authenticity.improvement_areas.len(), 5);
}

/// Improvement-area scenario: sincerity and credibility low, fixed order
#[test]
fn test_improvement_area_ordering() {
    let scorer = AuthenticityScorer::new();
    let input = AuthenticityInput {
        vocabulary_diversity: 0.9,
        sentence_complexity: 4.0,
        readability_score: 0.0,
        formality_level: 60.0,
        emotional_tone: 0.0,
        engagement_level: 100.0,
        personal_pronouns: 150.0,
        hedging_language: 60.0,
        confidence_markers: 20.0,
    };
    let a = scorer.score(&input);

    assert!(a.sincerity < IMPROVEMENT_THRESHOLD);
    assert!(a.credibility < IMPROVEMENT_THRESHOLD);
    assert!(a.consistency >= IMPROVEMENT_THRESHOLD);
    assert!(a.originality >= IMPROVEMENT_THRESHOLD);
    assert!(a.naturalness >= IMPROVEMENT_THRESHOLD);

    assert_eq!(
        a.improvement_areas,
        vec![
            AuthenticityDimension::Sincerity.advisory().to_string(),
            AuthenticityDimension::Credibility.advisory().to_string(),
        ]
    );
}

/// Report envelope: version, fingerprint verification, camelCase keys
#[test]
fn test_report_envelope() {
    let engine = AnalysisEngine::new();
    let report = AnalysisReport::new(SAMPLE, engine.analyze(SAMPLE));

    assert_eq!(report.version, voicemark::VERSION);
    assert!(verify_report(&report, SAMPLE));
    assert!(!verify_report(&report, "tampered"));

    let json = serde_json::to_string(&report).expect("serializes");
    assert!(json.contains("fingerprint"));
    assert!(json.contains("generatedAt"));
}

/// Band mapping and the parseable summary line
#[test]
fn test_summary_formats() {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze(SAMPLE);

    let parseable = analysis.to_parseable_string();
    assert!(parseable.contains("authenticity="));
    assert!(parseable.contains("band="));
    assert!(parseable.contains("confidence="));
    assert!(parseable.contains("words="));

    let band = analysis.band();
    assert_eq!(band, AuthenticityBand::from_score(analysis.authenticity.overall_authenticity));
}

/// A hedged, voiceless sample scores lower on sincerity than a direct one
#[test]
fn test_hedged_text_scores_lower_sincerity() {
    let engine = AnalysisEngine::new();
    let direct = engine.analyze("I know this plan works. I built it and I stand behind it.");
    let hedged = engine.analyze(
        "It might possibly work, perhaps. One could assume the plan seems viable, probably.",
    );
    assert!(
        hedged.authenticity.sincerity < direct.authenticity.sincerity,
        "hedged={} direct={}",
        hedged.authenticity.sincerity,
        direct.authenticity.sincerity
    );
}
