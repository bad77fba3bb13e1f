//! Plain-text rendering for the CLI
//!
//! - Unified diff between the original and optimized prompt
//! - Human-readable analysis and explanation trace

use similar::TextDiff;

use crate::{FeatureVector, OptimizeReport};

/// Generate a unified diff between two strings
pub fn generate_diff(original: &str, modified: &str, label: &str) -> String {
    let diff = TextDiff::from_lines(original, modified);

    diff.unified_diff()
        .context_radius(3)
        .header(&format!("a/{}", label), &format!("b/{}", label))
        .to_string()
}

/// Diff with a +/- line count header
pub fn preview_changes(original: &str, modified: &str, label: &str) -> String {
    let diff = generate_diff(original, modified, label);

    let additions = diff
        .lines()
        .filter(|l| l.starts_with('+') && !l.starts_with("+++"))
        .count();
    let deletions = diff
        .lines()
        .filter(|l| l.starts_with('-') && !l.starts_with("---"))
        .count();

    format!(
        "Changes for {}:\n  +{} lines, -{} lines\n\n{}",
        label, additions, deletions, diff
    )
}

/// One line per signal, flags listed only when set
pub fn render_analysis(features: &FeatureVector) -> String {
    let flags: Vec<&str> = [
        ("has_context", features.has_context),
        ("has_examples", features.has_examples),
        ("has_testing", features.has_testing),
        ("has_documentation", features.has_documentation),
        ("has_dependencies", features.has_dependencies),
        ("has_aws_context", features.has_aws_context),
        ("has_security", features.has_security),
        ("has_io_format", features.has_io_format),
        ("has_requirements", features.has_requirements),
        ("asks_for_explanation", features.asks_for_explanation),
        ("asks_for_reasoning", features.asks_for_reasoning),
    ]
    .into_iter()
    .filter(|(_, set)| *set)
    .map(|(name, _)| name)
    .collect();

    format!(
        "Intent:     {}\nComplexity: {}\nSignals:    {}\n",
        features.intent,
        features.complexity,
        if flags.is_empty() { "-".to_string() } else { flags.join(", ") }
    )
}

pub fn render_report(report: &OptimizeReport) -> String {
    let mut out = String::new();

    out.push_str(&format!("Tool: {}\n\n", report.explanation.tool_name));
    out.push_str(&render_analysis(&report.analysis));

    out.push_str("\nSteps:\n");
    for (i, step) in report.explanation.steps.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n     {}\n", i + 1, step.step, step.reason));
    }
    for note in &report.explanation.summary {
        out.push_str(&format!("\n{}\n", note));
    }

    out.push_str("\n─── optimized prompt ───\n");
    out.push_str(&report.optimized_text);
    out.push('\n');
    out
}
