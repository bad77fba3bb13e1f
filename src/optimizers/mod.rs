//! Tool-specific optimizers
//!
//! Each optimizer is a `'static` table: an ordered rule chain plus a
//! capability descriptor. Running one threads a fresh step list through the
//! chain and hands the trace back with the rewritten text, so a single
//! optimizer can serve any number of concurrent callers.

use serde::Serialize;

use crate::analyzer::FeatureVector;
use crate::registry::ToolId;
use crate::rules::{OptimizationStep, Rule, RuleInput};

mod claude;
mod codewhisperer;
mod copilot;
mod cursor;
mod gpt;
mod replit;

pub use claude::CLAUDE;
pub use codewhisperer::CODEWHISPERER;
pub use copilot::COPILOT;
pub use cursor::CURSOR;
pub use gpt::GPT;
pub use replit::REPLIT;

// ═══════════════════════════════════════════════════════════════
// CAPABILITIES
// ═══════════════════════════════════════════════════════════════

/// Static description of what a tool is good and bad at
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Capabilities {
    pub strengths: &'static [&'static str],
    pub best_for: &'static [&'static str],
    pub limitations: &'static [&'static str],
    pub optimization_focus: &'static [&'static str],
    /// (label, url) pairs for the tool's own docs
    #[serde(skip_serializing_if = "no_links")]
    pub documentation: &'static [(&'static str, &'static str)],
}

fn no_links(links: &&[(&str, &str)]) -> bool {
    links.is_empty()
}

// ═══════════════════════════════════════════════════════════════
// EXPLANATION
// ═══════════════════════════════════════════════════════════════

/// What changed and why, for one optimize call
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplanationTrace {
    pub steps: Vec<OptimizationStep>,
    pub summary: Vec<String>,
    pub tool_name: &'static str,
    pub capabilities: &'static Capabilities,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optimized {
    pub text: String,
    pub explanation: ExplanationTrace,
}

// ═══════════════════════════════════════════════════════════════
// OPTIMIZER
// ═══════════════════════════════════════════════════════════════

#[derive(Debug)]
pub struct Optimizer {
    id: ToolId,
    name: &'static str,
    summary_suffix: &'static str,
    rules: &'static [Rule],
    capabilities: Capabilities,
}

impl Optimizer {
    pub const fn new(
        id: ToolId,
        name: &'static str,
        rules: &'static [Rule],
        capabilities: Capabilities,
    ) -> Self {
        Self {
            id,
            name,
            summary_suffix: "",
            rules,
            capabilities,
        }
    }

    /// Extra wording appended to the summary note
    pub const fn with_summary_suffix(self, suffix: &'static str) -> Self {
        Self {
            summary_suffix: suffix,
            ..self
        }
    }

    pub fn id(&self) -> ToolId {
        self.id
    }

    /// Display name, e.g. "GitHub Copilot"
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capabilities(&self) -> &Capabilities {
        &self.capabilities
    }

    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// Run the chain over `text`. Deterministic in `(text, features)`.
    pub fn optimize(&'static self, text: &str, features: &FeatureVector) -> Optimized {
        let lowered = text.to_lowercase();
        let input = RuleInput::new(features, &lowered);
        let mut steps = Vec::new();

        let optimized = self
            .rules
            .iter()
            .fold(text.to_string(), |acc, rule| rule.apply(acc, &input, &mut steps));

        let summary = format!(
            "Optimized prompt for {} with {} improvements{}",
            self.name,
            steps.len(),
            self.summary_suffix
        );
        tracing::debug!(tool = %self.id, steps = steps.len(), "chain complete");

        Optimized {
            text: optimized,
            explanation: ExplanationTrace {
                steps,
                summary: vec![summary],
                tool_name: self.name,
                capabilities: &self.capabilities,
            },
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// SHARED GUARDS
// ═══════════════════════════════════════════════════════════════

/// Medium or high complexity
pub(crate) fn elevated(i: &RuleInput<'_>) -> bool {
    i.features.complexity.is_elevated()
}
