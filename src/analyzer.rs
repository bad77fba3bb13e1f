//! Prompt analysis
//!
//! Turns a free-text task description into a fixed feature vector:
//! - Intent (first matching keyword group wins)
//! - Complexity tier (length + keyword thresholds)
//! - Independent boolean signals (context, examples, testing, ...)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prompts longer than this (in chars) are always high complexity
const HIGH_COMPLEXITY_LEN: usize = 300;

/// Prompts longer than this (in chars) are at least medium complexity
const MEDIUM_COMPLEXITY_LEN: usize = 120;

const HIGH_COMPLEXITY_WORDS: &[&str] = &["complex", "algorithm", "architecture", "system"];
const MEDIUM_COMPLEXITY_WORDS: &[&str] = &["test", "documentation", "multiple", "several"];

// ═══════════════════════════════════════════════════════════════
// INTENT
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    FunctionGeneration,
    ProjectCreation,
    CodeReview,
    WebDevelopment,
    CloudDevelopment,
    Infrastructure,
    General,
}

/// Intent rules in priority order. Order matters: "function" beats "web".
const INTENT_RULES: &[(&[&str], Intent)] = &[
    (&["function", "method", "def "], Intent::FunctionGeneration),
    (&["project", "app", "create", "build"], Intent::ProjectCreation),
    (&["review", "refactor"], Intent::CodeReview),
    (&["web", "website"], Intent::WebDevelopment),
    (&["cloud", "aws"], Intent::CloudDevelopment),
    (&["infrastructure"], Intent::Infrastructure),
];

impl Intent {
    pub const ALL: [Intent; 7] = [
        Intent::FunctionGeneration,
        Intent::ProjectCreation,
        Intent::CodeReview,
        Intent::WebDevelopment,
        Intent::CloudDevelopment,
        Intent::Infrastructure,
        Intent::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::FunctionGeneration => "function_generation",
            Intent::ProjectCreation => "project_creation",
            Intent::CodeReview => "code_review",
            Intent::WebDevelopment => "web_development",
            Intent::CloudDevelopment => "cloud_development",
            Intent::Infrastructure => "infrastructure",
            Intent::General => "general",
        }
    }

    fn classify(lowered: &str) -> Self {
        INTENT_RULES
            .iter()
            .find(|(words, _)| contains_any(lowered, words))
            .map(|(_, intent)| *intent)
            .unwrap_or(Intent::General)
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════
// COMPLEXITY
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        }
    }

    /// Medium or high
    pub fn is_elevated(&self) -> bool {
        *self != Complexity::Low
    }

    fn classify(text: &str, lowered: &str) -> Self {
        let len = text.chars().count();
        if len > HIGH_COMPLEXITY_LEN || contains_any(lowered, HIGH_COMPLEXITY_WORDS) {
            Complexity::High
        } else if len > MEDIUM_COMPLEXITY_LEN || contains_any(lowered, MEDIUM_COMPLEXITY_WORDS) {
            Complexity::Medium
        } else {
            Complexity::Low
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

// ═══════════════════════════════════════════════════════════════
// FEATURE VECTOR
// ═══════════════════════════════════════════════════════════════

/// Everything the optimizers know about a prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureVector {
    pub intent: Intent,
    pub complexity: Complexity,
    pub has_context: bool,
    pub has_examples: bool,
    pub has_testing: bool,
    pub has_documentation: bool,
    pub has_dependencies: bool,
    pub has_aws_context: bool,
    pub has_security: bool,
    pub has_io_format: bool,
    pub has_requirements: bool,
    pub asks_for_explanation: bool,
    pub asks_for_reasoning: bool,
}

/// Analyze a prompt. Never fails: every signal has a default.
pub fn analyze(text: &str) -> FeatureVector {
    let lowered = text.to_lowercase();
    let l = lowered.as_str();

    FeatureVector {
        intent: Intent::classify(l),
        complexity: Complexity::classify(text, l),
        has_context: contains_any(l, &["context", "background", "requirement"]),
        has_examples: l.contains("example"),
        has_testing: l.contains("test"),
        has_documentation: contains_any(l, &["documentation", "readme"]),
        has_dependencies: contains_any(l, &["requirement", "dependency", "package"]),
        has_aws_context: contains_any(l, &["aws", "cloudformation", "lambda"]),
        has_security: contains_any(l, &["security", "iam"]),
        has_io_format: l.contains("input:") && l.contains("output:"),
        has_requirements: contains_any(l, &["requirement", "constraint"]),
        asks_for_explanation: contains_any(l, &["explain", "why"]),
        asks_for_reasoning: contains_any(l, &["reason", "explain"]),
    }
}

pub(crate) fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

// ═══════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════
