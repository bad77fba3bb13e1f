//! Guarded rewrite rules
//!
//! A rule is a guard over the analysis, an edit to the prompt text, and the
//! step recorded in the explanation when it fires. Optimizers are ordered
//! slices of these, and each edit sees the text left by the rules before it.

use serde::{Deserialize, Serialize};

use crate::analyzer::{contains_any, FeatureVector};

// ═══════════════════════════════════════════════════════════════
// RULE INPUT
// ═══════════════════════════════════════════════════════════════

/// What guards look at
#[derive(Debug, Clone, Copy)]
pub struct RuleInput<'a> {
    pub features: &'a FeatureVector,
    /// The caller's prompt, lower-cased
    pub lowered: &'a str,
}

impl<'a> RuleInput<'a> {
    pub fn new(features: &'a FeatureVector, lowered: &'a str) -> Self {
        Self { features, lowered }
    }

    /// Does the caller's prompt mention any of these words?
    pub fn mentions(&self, words: &[&str]) -> bool {
        contains_any(self.lowered, words)
    }
}

// ═══════════════════════════════════════════════════════════════
// BLOCKS
// ═══════════════════════════════════════════════════════════════

/// A fixed block of guidance lines. The first line is the marker used to
/// detect an earlier insertion.
///
/// Keyword checks run against the current text, lower-cased, so a block
/// inserted earlier in the chain can suppress a later one. `unless_input`
/// is the exception: it only looks at what the caller wrote.
#[derive(Debug, Clone, Copy)]
pub struct Block {
    pub lines: &'static [&'static str],
    /// Skip the block when the current text mentions any of these
    pub unless: &'static [&'static str],
    /// Skip the block when the caller's prompt mentions any of these
    pub unless_input: &'static [&'static str],
    /// When non-empty, only insert if the current text mentions one of these
    pub only_if: &'static [&'static str],
}

impl Block {
    pub const fn new(lines: &'static [&'static str]) -> Self {
        Self {
            lines,
            unless: &[],
            unless_input: &[],
            only_if: &[],
        }
    }

    pub const fn unless(self, words: &'static [&'static str]) -> Self {
        Self {
            unless: words,
            ..self
        }
    }

    pub const fn unless_input(self, words: &'static [&'static str]) -> Self {
        Self {
            unless_input: words,
            ..self
        }
    }

    pub const fn only_if(self, words: &'static [&'static str]) -> Self {
        Self {
            only_if: words,
            ..self
        }
    }

    pub fn marker(&self) -> &'static str {
        self.lines.first().copied().unwrap_or_default()
    }

    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    /// Has this block (or something starting with its marker) already been inserted?
    pub fn present_in(&self, text: &str) -> bool {
        let marker = self.marker();
        !marker.is_empty() && text.lines().any(|line| line.starts_with(marker))
    }

    fn wanted(&self, text: &str, input: &RuleInput<'_>) -> bool {
        if input.mentions(self.unless_input) {
            return false;
        }
        let lowered = text.to_lowercase();
        if contains_any(&lowered, self.unless) {
            return false;
        }
        self.only_if.is_empty() || contains_any(&lowered, self.only_if)
    }
}

// ═══════════════════════════════════════════════════════════════
// EDITS
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy)]
pub enum Edit {
    /// Put the block above the prompt
    Prepend(Block),
    /// Put the block below the prompt
    Append(Block),
    /// Sequential, case-sensitive substring replacements
    Replace(&'static [(&'static str, &'static str)]),
}

impl Edit {
    pub fn apply(&self, text: String, input: &RuleInput<'_>) -> String {
        match self {
            Edit::Prepend(block) => {
                if block.present_in(&text) || !block.wanted(&text, input) {
                    return text;
                }
                format!("{}\n\n{}", block.render(), text)
            }
            Edit::Append(block) => {
                if block.present_in(&text) || !block.wanted(&text, input) {
                    return text;
                }
                format!("{}\n\n{}", text, block.render())
            }
            Edit::Replace(pairs) => pairs
                .iter()
                .fold(text, |acc, (from, to)| acc.replace(from, to)),
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// RULES
// ═══════════════════════════════════════════════════════════════

/// One entry in the explanation trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizationStep {
    pub step: String,
    pub reason: String,
}

pub type Guard = fn(&RuleInput<'_>) -> bool;

#[derive(Clone, Copy)]
pub struct Rule {
    pub step: &'static str,
    pub reason: &'static str,
    pub guard: Guard,
    pub edit: Edit,
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule")
            .field("step", &self.step)
            .field("edit", &self.edit)
            .finish_non_exhaustive()
    }
}

impl Rule {
    /// Run the rule. A step is recorded whenever the guard holds, even if
    /// the block was already there.
    pub fn apply(
        &self,
        text: String,
        input: &RuleInput<'_>,
        steps: &mut Vec<OptimizationStep>,
    ) -> String {
        if !(self.guard)(input) {
            return text;
        }

        tracing::debug!(step = self.step, "rule fired");
        steps.push(OptimizationStep {
            step: self.step.to_string(),
            reason: self.reason.to_string(),
        });
        self.edit.apply(text, input)
    }
}

/// Guard for unconditional rules
pub fn always(_: &RuleInput<'_>) -> bool {
    true
}

// ═══════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    const HEADER: Block = Block::new(&["# Header:", "# - one", "# - two"]);
    const FOOTER: Block = Block::new(&["# Footer:", "# - three"]).unless(&["security"]);

    fn run(edit: Edit, text: &str) -> String {
        let features = analyze(text);
        let lowered = text.to_lowercase();
        edit.apply(text.to_string(), &RuleInput::new(&features, &lowered))
    }

    #[test]
    fn test_prepend_once() {
        let once = run(Edit::Prepend(HEADER), "do things");
        assert!(once.starts_with("# Header:\n# - one\n# - two\n\ndo things"));

        let twice = run(Edit::Prepend(HEADER), &once);
        assert_eq!(once, twice);
        assert_eq!(twice.matches("# Header:").count(), 1);
    }

    #[test]
    fn test_append_skips_on_keyword() {
        let out = run(Edit::Append(FOOTER), "mind the Security");
        assert_eq!(out, "mind the Security");

        let out = run(Edit::Append(FOOTER), "plain");
        assert_eq!(out, "plain\n\n# Footer:\n# - three");
    }

    #[test]
    fn test_append_is_marker_idempotent() {
        let once = run(Edit::Append(FOOTER), "plain");
        let twice = run(Edit::Append(FOOTER), &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_keywords_see_earlier_insertions() {
        const EXPLAIN: Block = Block::new(&["# Explain your reasoning."]);
        const ASK_WHY: Block = Block::new(&["# Then explain why."]).unless(&["explain"]);

        let features = analyze("plain");
        let input = RuleInput::new(&features, "plain");
        let text = Edit::Append(EXPLAIN).apply("plain".into(), &input);
        let text = Edit::Append(ASK_WHY).apply(text, &input);
        assert_eq!(text, "plain\n\n# Explain your reasoning.");
    }

    #[test]
    fn test_unless_input_ignores_inserted_text() {
        const HEADER: Block = Block::new(&["# Context:", "# - mind security"]);
        const SECURITY: Block = Block::new(&["# Security:"]).unless_input(&["security"]);

        let features = analyze("plain");
        let input = RuleInput::new(&features, "plain");
        let text = Edit::Prepend(HEADER).apply("plain".into(), &input);
        let text = Edit::Append(SECURITY).apply(text, &input);
        assert!(text.ends_with("plain\n\n# Security:"));

        let input = RuleInput::new(&features, "mind the security");
        assert_eq!(Edit::Append(SECURITY).apply("x".into(), &input), "x");
    }

    #[test]
    fn test_only_if() {
        let block = Block::new(&["# Steps:"]).only_if(&["algorithm", "logic"]);
        assert_eq!(run(Edit::Append(block), "sort"), "sort");
        assert_eq!(run(Edit::Append(block), "sort logic"), "sort logic\n\n# Steps:");
    }

    #[test]
    fn test_replace_is_sequential_and_case_sensitive() {
        const PAIRS: &[(&str, &str)] = &[("fix", "repair"), ("repair", "mend")];
        assert_eq!(run(Edit::Replace(PAIRS), "fix it, Fix it"), "mend it, Fix it");
    }

    #[test]
    fn test_rule_records_step_only_when_guard_holds() {
        fn never(_: &RuleInput<'_>) -> bool {
            false
        }
        let features = analyze("plain");
        let input = RuleInput::new(&features, "plain");
        let mut steps = Vec::new();

        let skipped = Rule {
            step: "Skipped",
            reason: "never",
            guard: never,
            edit: Edit::Append(FOOTER),
        };
        let text = skipped.apply("plain".into(), &input, &mut steps);
        assert_eq!(text, "plain");
        assert!(steps.is_empty());

        let fired = Rule {
            step: "Fired",
            reason: "always",
            guard: always,
            edit: Edit::Append(FOOTER),
        };
        fired.apply(text, &input, &mut steps);
        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].step, "Fired");
    }
}
