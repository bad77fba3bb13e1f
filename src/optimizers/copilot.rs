//! GitHub Copilot
//!
//! Copilot completes code from surrounding comments, so most rules add
//! comment blocks: context, a signature/docstring template, step comments,
//! error handling, examples and test requests.
//! Reference: https://docs.github.com/en/copilot

use super::{elevated, Capabilities, Optimizer};
use crate::analyzer::{Complexity, Intent};
use crate::registry::ToolId;
use crate::rules::{always, Block, Edit, Rule, RuleInput};

const CONTEXT_HINTS: Block = Block::new(&[
    "# Context: This code should follow best practices and be well-documented",
    "# Consider error handling, edge cases, and input validation",
    "# Use clear variable names, meaningful comments, and proper formatting",
    "# Follow language-specific conventions (PEP 8 for Python, etc.)",
]);

const SIGNATURE_TEMPLATE: Block = Block::new(&[
    "# Expected function signature with type hints:",
    "# def function_name(param1: type, param2: type) -> return_type:",
    "#     \"\"\"",
    "#     Brief description of what the function does.",
    "#     ",
    "#     Args:",
    "#         param1 (type): Description of param1",
    "#         param2 (type): Description of param2",
    "#     ",
    "#     Returns:",
    "#         return_type: Description of return value",
    "#     ",
    "#     Raises:",
    "#         ExceptionType: Description of when this exception is raised",
    "#     \"\"\"",
])
.only_if(&["function"])
.unless(&["def "]);

const STEP_COMMENTS: Block = Block::new(&[
    "# Add inline comments for each major step:",
    "# Step 1: [description of what this step accomplishes]",
    "# Step 2: [description of what this step accomplishes]",
    "# etc.",
])
.only_if(&["algorithm", "complex", "logic"]);

const ERROR_HANDLING: Block = Block::new(&[
    "# Include proper error handling and input validation",
    "# Handle edge cases and potential exceptions appropriately",
]);

const EXAMPLES: Block = Block::new(&[
    "# Example usage:",
    "# result = function_name(input_data)",
    "# print(result)",
    "# ",
    "# Example edge cases to consider:",
    "# - Empty input",
    "# - Invalid input types",
    "# - Boundary conditions",
]);

const UNIT_TESTS: Block = Block::new(&[
    "# Generate unit tests for this function:",
    "# - Test normal cases",
    "# - Test edge cases",
    "# - Test error conditions",
    "# - Test with different input types",
]);

const VOCABULARY: &[(&str, &str)] = &[
    (
        "make it better",
        "improve the code with better error handling, documentation, and following best practices",
    ),
    ("optimize", "optimize for performance, readability, and maintainability"),
    (
        "clean code",
        "write clean, well-documented code following language-specific conventions (PEP 8 for Python)",
    ),
    (
        "good code",
        "write production-ready code with proper error handling, documentation, and best practices",
    ),
    (
        "fix",
        "identify and fix issues with proper error handling and edge case consideration",
    ),
    ("improve", "improve the code quality, performance, and maintainability"),
];

fn generating_function(i: &RuleInput<'_>) -> bool {
    i.features.intent == Intent::FunctionGeneration
}

static RULES: [Rule; 7] = [
    Rule {
        step: "Added context hints",
        reason: "Copilot performs better when given clear context about requirements and constraints",
        guard: |i| !i.features.has_context,
        edit: Edit::Prepend(CONTEXT_HINTS),
    },
    Rule {
        step: "Optimized for function generation",
        reason: "Added function signature patterns, type hints, and docstring templates based on Copilot best practices",
        guard: generating_function,
        edit: Edit::Append(SIGNATURE_TEMPLATE),
    },
    Rule {
        step: "Added inline comment suggestions",
        reason: "Complex logic benefits from step-by-step comments for better Copilot understanding",
        guard: |i| i.features.complexity == Complexity::High,
        edit: Edit::Append(STEP_COMMENTS),
    },
    Rule {
        step: "Added error handling specifications",
        reason: "Copilot can generate robust error handling when explicitly requested",
        guard: |i| !i.mentions(&["error", "exception"]),
        edit: Edit::Append(ERROR_HANDLING),
    },
    Rule {
        step: "Optimized language",
        reason: "Used Copilot-friendly language patterns and clear, specific instructions",
        guard: always,
        edit: Edit::Replace(VOCABULARY),
    },
    Rule {
        step: "Added example suggestions",
        reason: "Examples help Copilot understand expected input/output patterns and edge cases",
        guard: |i| !i.features.has_examples && elevated(i),
        edit: Edit::Append(EXAMPLES),
    },
    Rule {
        step: "Added testing suggestions",
        reason: "Copilot can generate unit tests when explicitly requested for complex functions",
        guard: |i| generating_function(i) && elevated(i),
        edit: Edit::Append(UNIT_TESTS),
    },
];

pub static COPILOT: Optimizer = Optimizer::new(
    ToolId::Copilot,
    "GitHub Copilot",
    &RULES,
    Capabilities {
        strengths: &[
            "Real-time code completion and suggestions",
            "Function and method generation with context",
            "Multi-language support (Python, JavaScript, TypeScript, Java, C++, etc.)",
            "IDE integration (VS Code, IntelliJ, Neovim)",
            "Context-aware suggestions based on comments and code",
            "Documentation generation from code",
            "Test generation and refactoring suggestions",
        ],
        best_for: &[
            "Function and class generation with docstrings",
            "Code completion and line-by-line assistance",
            "Documentation generation from existing code",
            "Refactoring and code improvement suggestions",
            "Test case generation",
            "Boilerplate code generation",
        ],
        limitations: &[
            "Limited to code generation (no project architecture)",
            "Requires good context and clear comments",
            "May not understand complex business logic without context",
            "Context window limitations for large files",
            "No direct API access for custom integrations",
        ],
        optimization_focus: &[
            "Clear, specific comments and docstrings",
            "Function signature patterns and type hints",
            "Context provision through comments",
            "Inline comments for complex logic",
            "Error handling and edge case specifications",
            "Code style and formatting preferences",
        ],
        documentation: &[
            ("official", "https://docs.github.com/en/copilot"),
            (
                "best_practices",
                "https://docs.github.com/en/copilot/getting-started-with-github-copilot/using-github-copilot-in-your-editor",
            ),
            ("api_reference", "https://docs.github.com/en/copilot/github-copilot-api"),
            ("examples", "https://github.com/github/copilot-examples"),
        ],
    },
)
.with_summary_suffix(" based on official documentation");
