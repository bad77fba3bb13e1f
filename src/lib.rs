//! promptcraft - rule-based prompt optimizer for AI coding assistants
//!
//! Classifies a task description into a feature vector, then rewrites it
//! with the rule chain of one target tool (Copilot, Cursor, Replit,
//! CodeWhisperer, Claude, GPT-4), returning the new text together with a
//! trace of every rule that fired.
//!
//! ```
//! let report = promptcraft::optimize("claude", "Solve this algorithm problem").unwrap();
//! assert!(report.optimized_text.contains("step-by-step"));
//! ```

pub mod analyzer;
pub mod config;
pub mod error;
pub mod logging;
pub mod optimizers;
pub mod registry;
pub mod render;
pub mod rules;
pub mod server;

use serde::Serialize;

pub use analyzer::{analyze, Complexity, FeatureVector, Intent};
pub use error::OptimizeError;
pub use optimizers::{Capabilities, ExplanationTrace, Optimizer};
pub use registry::ToolId;
pub use rules::OptimizationStep;

/// Result of one optimize call, as handed to the HTTP and CLI layers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeReport {
    pub optimized_text: String,
    pub analysis: FeatureVector,
    pub explanation: ExplanationTrace,
    pub tool: ToolId,
}

/// Analyze `text` and rewrite it for `tool_id`
pub fn optimize(tool_id: &str, text: &str) -> Result<OptimizeReport, OptimizeError> {
    if text.trim().is_empty() {
        return Err(OptimizeError::EmptyPrompt);
    }
    let optimizer = registry::get(tool_id)?;

    let analysis = analyze(text);
    let optimized = optimizer.optimize(text, &analysis);

    tracing::info!(
        tool = %optimizer.id(),
        intent = %analysis.intent,
        complexity = %analysis.complexity,
        steps = optimized.explanation.steps.len(),
        "optimized prompt"
    );

    Ok(OptimizeReport {
        optimized_text: optimized.text,
        analysis,
        explanation: optimized.explanation,
        tool: optimizer.id(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_rejected() {
        assert_eq!(optimize("copilot", ""), Err(OptimizeError::EmptyPrompt));
        assert_eq!(optimize("copilot", "   \n\t"), Err(OptimizeError::EmptyPrompt));
    }

    #[test]
    fn test_unknown_tool_rejected() {
        let err = optimize("not-a-real-tool", "anything").unwrap_err();
        assert!(matches!(err, OptimizeError::UnknownTool { .. }));
    }

    #[test]
    fn test_report_shape() {
        let report = optimize("gpt", "Sort a list").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        let mut keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["analysis", "explanation", "optimizedText", "tool"]);
        assert_eq!(json["tool"], "gpt");
    }
}
