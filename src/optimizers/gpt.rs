//! GPT-4 (OpenAI): explicit I/O format, examples and a reasoning request.

use super::{Capabilities, Optimizer};
use crate::registry::ToolId;
use crate::rules::{Block, Edit, Rule};

const IO_FORMAT: Block = Block::new(&["# Specify the input and output format explicitly."])
    .unless(&["input:", "output:"]);

const EXAMPLES: Block =
    Block::new(&["# Provide at least one example input and output."]).unless(&["example"]);

const REASONING: Block =
    Block::new(&["# After solving, explain your reasoning."]).unless(&["reason", "explain"]);

static RULES: [Rule; 3] = [
    Rule {
        step: "Added input/output format",
        reason: "GPT-4 performs best with explicit input/output format instructions",
        guard: |i| !i.features.has_io_format,
        edit: Edit::Append(IO_FORMAT),
    },
    Rule {
        step: "Added examples",
        reason: "Examples help GPT-4 understand the expected behavior and edge cases",
        guard: |i| !i.features.has_examples,
        edit: Edit::Append(EXAMPLES),
    },
    Rule {
        step: "Added request for reasoning",
        reason: "GPT-4 can provide reasoning and explanations for its answers",
        guard: |i| !i.features.asks_for_reasoning,
        edit: Edit::Append(REASONING),
    },
];

pub static GPT: Optimizer = Optimizer::new(
    ToolId::Gpt,
    "GPT-4 (OpenAI)",
    &RULES,
    Capabilities {
        strengths: &[
            "General-purpose reasoning",
            "Flexible input/output",
            "Example-driven learning",
            "Natural language understanding",
            "Code generation and review",
        ],
        best_for: &[
            "General code generation",
            "Complex reasoning",
            "Explanatory answers",
            "Example-driven tasks",
        ],
        limitations: &[
            "May require explicit format for best results",
            "Can be verbose or over-explain",
        ],
        optimization_focus: &[
            "Explicit input/output format",
            "Examples",
            "Reasoning and explanations",
        ],
        documentation: &[],
    },
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::analyze;

    #[test]
    fn test_bare_prompt_gets_all_three() {
        let text = "Sort a list of users by signup date";
        let out = GPT.optimize(text, &analyze(text));
        assert!(out.text.ends_with(
            "# Specify the input and output format explicitly.\n\n\
             # Provide at least one example input and output.\n\n\
             # After solving, explain your reasoning."
        ));
        assert_eq!(out.explanation.steps.len(), 3);
    }

    #[test]
    fn test_half_io_format_records_step_but_adds_nothing() {
        // "input:" alone is not a full I/O format, but it is enough to skip the block
        let text = "input: a list of users, with an example. Explain the result.";
        let out = GPT.optimize(text, &analyze(text));
        assert_eq!(out.text, text);
        assert_eq!(out.explanation.steps.len(), 1);
        assert_eq!(out.explanation.steps[0].step, "Added input/output format");
    }
}
