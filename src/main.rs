//! voicemark CLI
//!
//! Usage:
//!   voicemark --text "your sample here"       # Single analysis
//!   voicemark --file sample.txt               # Analyze a file
//!   cat sample.txt | voicemark                # Analyze stdin
//!   voicemark --interactive                   # Accumulate samples line by line
//!   voicemark --text "..." --json             # JSON output
//!   voicemark --text "..." --report           # JSON report with fingerprint

use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use voicemark::core::{AnalysisEngine, AnalysisReport};
use voicemark::types::{AuthenticityBand, AuthenticityDimension, StyleAnalysis};
use voicemark::VERSION;

#[derive(Parser, Debug)]
#[command(
    name = "voicemark",
    version = VERSION,
    about = "Analyze writing style and score how authentic a voice reads",
    long_about = "voicemark runs a deterministic three-stage pipeline over sample text:\n\n  \
                  1. metrics      - vocabulary, sentence, and readability measurements\n  \
                  2. style        - normalized characteristic scales (formality, tone, ...)\n  \
                  3. authenticity - five sub-scores, weighted overall, confidence,\n                    \
                  and improvement advisories\n\n\
                  The same input always produces the same numbers, so scores are\n\
                  comparable across runs. Join multiple samples with blank lines."
)]
struct Args {
    /// Text to analyze (single mode)
    #[arg(short, long)]
    text: Option<String>,

    /// Read the sample from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Interactive mode - accumulate samples line by line
    #[arg(short, long)]
    interactive: bool,

    /// Output the three analysis records as JSON
    #[arg(long)]
    json: bool,

    /// Output a JSON report with engine version and input fingerprint
    #[arg(long)]
    report: bool,

    /// Show full metric and sub-score breakdown
    #[arg(long)]
    verbose: bool,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.no_color {
        colored::control::set_override(false);
    }

    if args.interactive {
        run_interactive(&args)
    } else if let Some(ref text) = args.text {
        run_single(text, &args);
        Ok(())
    } else if let Some(ref path) = args.file {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        run_single(&text, &args);
        Ok(())
    } else {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read stdin")?;
        run_single(&text, &args);
        Ok(())
    }
}

/// Run single analysis over one sample
fn run_single(text: &str, args: &Args) {
    let engine = AnalysisEngine::new();
    let analysis = engine.analyze(text);

    if args.report {
        let report = AnalysisReport::new(text, analysis);
        println!("{}", serde_json::to_string_pretty(&report).expect("report serializes"));
    } else if args.json {
        println!("{}", serde_json::to_string_pretty(&analysis).expect("analysis serializes"));
    } else if args.verbose {
        print_verbose(&analysis, args.no_color);
    } else {
        print_summary(&analysis, args.no_color);
    }
}

/// Run interactive mode - each line is one sample, the full buffer is
/// re-analyzed after every entry
fn run_interactive(args: &Args) -> Result<()> {
    let engine = AnalysisEngine::new();
    let mut samples: Vec<String> = Vec::new();

    print_header();
    println!("Type a sample and press Enter to rescore the whole buffer.");
    println!("Commands: 'clear' resets the buffer, 'quit' exits.");
    println!();

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let prompt = format_prompt(&engine, &samples);
        print!("{}", prompt);
        stdout.flush().context("failed to flush stdout")?;

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        let line = line.trim();
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            println!("\nSession ended. Samples: {}", samples.len());
            break;
        }
        if line.eq_ignore_ascii_case("clear") {
            samples.clear();
            println!("Buffer cleared.");
            continue;
        }
        if line.is_empty() {
            continue;
        }

        samples.push(line.to_string());
        let analysis = engine.analyze(&samples.join("\n\n"));

        if args.json {
            println!("{}", serde_json::to_string(&analysis).expect("analysis serializes"));
        } else if args.verbose {
            print_verbose(&analysis, args.no_color);
        } else {
            print_summary(&analysis, args.no_color);
        }
    }

    Ok(())
}

/// Print header
fn print_header() {
    println!("{}", "========================================".bold());
    println!("{}", format!("  voicemark v{} - Interactive", VERSION).bold());
    println!("{}", "========================================".bold());
    println!();
}

/// Format interactive prompt with current band
fn format_prompt(engine: &AnalysisEngine, samples: &[String]) -> String {
    if samples.is_empty() {
        return "[empty] > ".to_string();
    }
    let analysis = engine.analyze(&samples.join("\n\n"));
    let band = analysis.band();
    format!(
        "{}{} [{}]{} > ",
        band.color_code(),
        band.glyph(),
        band,
        AuthenticityBand::color_reset()
    )
}

/// Print one-line summary plus any improvement advisories
fn print_summary(analysis: &StyleAnalysis, no_color: bool) {
    if no_color {
        println!("{}", analysis.to_parseable_string());
    } else {
        println!("{}", analysis.to_terminal_string());
    }
    for area in &analysis.authenticity.improvement_areas {
        if no_color {
            println!("  - {}", area);
        } else {
            println!("  {} {}", "-".yellow(), area);
        }
    }
}

/// Print full breakdown
fn print_verbose(analysis: &StyleAnalysis, no_color: bool) {
    let band = analysis.band();
    let color = if no_color { "" } else { band.color_code() };
    let reset = if no_color { "" } else { AuthenticityBand::color_reset() };

    let m = &analysis.metrics;
    let c = &analysis.characteristics;
    let a = &analysis.authenticity;

    println!("{}┌───────────────────────────────────────────┐{}", color, reset);
    println!(
        "{}│ authenticity = {:.1} [{}] confidence {:.0}%{}",
        color, a.overall_authenticity, band, a.confidence_level, reset
    );
    println!("{}├───────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Metrics:{}", color, reset);
    println!(
        "{}│   words: {} ({} unique, ttr {:.3}){}",
        color, m.total_word_count, m.unique_word_count, m.type_token_ratio, reset
    );
    println!(
        "{}│   sentence: {:.1} words, {:.2} clauses{}",
        color, m.average_sentence_length, m.sentence_complexity, reset
    );
    println!(
        "{}│   readability: FK {:.1} | ease {:.1} | fog {:.1}{}",
        color, m.flesch_kincaid_grade, m.flesch_reading_ease, m.gunning_fog_index, reset
    );
    println!(
        "{}│   markers: pron {:.1}% | hedge {:.1}% | conf {:.1}%{}",
        color, m.personal_pronouns, m.hedging_language, m.confidence_markers, reset
    );
    println!("{}├───────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Characteristics:{}", color, reset);
    println!(
        "{}│   formality: {:.1} | academic: {:.1}{}",
        color, c.formality_level, c.academic_tone, reset
    );
    println!(
        "{}│   emotional: {:+.1} | engagement: {:.1}{}",
        color, c.emotional_tone, c.engagement_level, reset
    );
    println!(
        "{}│   voice: {:.1} | originality: {:.1} | consistency: {:.1}{}",
        color, c.personal_voice, c.originality_score, c.consistency_score, reset
    );
    println!("{}├───────────────────────────────────────────┤{}", color, reset);
    println!("{}│ Sub-scores:{}", color, reset);
    for dimension in AuthenticityDimension::ALL {
        println!(
            "{}│   {:<12} {:>5.1} (w={:.2}){}",
            color,
            format!("{}:", dimension),
            a.dimension_score(dimension),
            dimension.weight(),
            reset
        );
    }
    println!("{}└───────────────────────────────────────────┘{}", color, reset);
    for area in &a.improvement_areas {
        println!("  - {}", area);
    }
}
