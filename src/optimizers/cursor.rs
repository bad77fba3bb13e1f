//! Cursor: project structure, tests, docs and architecture guidance.

use super::{elevated, Capabilities, Optimizer};
use crate::analyzer::{Complexity, Intent};
use crate::registry::ToolId;
use crate::rules::{always, Block, Edit, Rule};

const PROJECT_STRUCTURE: Block = Block::new(&[
    "# Project Structure:",
    "# - Organize code into logical modules/packages",
    "# - Separate concerns (models, views, controllers, etc.)",
    "# - Include configuration files and environment setup",
    "# - Add proper __init__.py files for Python packages",
]);

const TESTING_REQUIREMENTS: Block = Block::new(&[
    "# Testing Requirements:",
    "# - Unit tests for all functions and classes",
    "# - Integration tests for API endpoints",
    "# - Test coverage should be >80%",
    "# - Include test data and fixtures",
    "# - Add CI/CD pipeline configuration",
])
.unless(&["test"]);

const DOCUMENTATION_REQUIREMENTS: Block = Block::new(&[
    "# Documentation Requirements:",
    "# - Comprehensive README.md with setup instructions",
    "# - API documentation with examples",
    "# - Inline code comments for complex logic",
    "# - Architecture and design decisions documentation",
])
.unless(&["documentation", "readme"]);

const REVIEW_FOCUS: Block = Block::new(&[
    "# Code Review Focus Areas:",
    "# - Code quality and best practices",
    "# - Performance optimizations",
    "# - Security vulnerabilities",
    "# - Maintainability and readability",
    "# - Error handling and edge cases",
    "# - Testing coverage and quality",
]);

const ARCHITECTURE: Block = Block::new(&[
    "# Architecture Considerations:",
    "# - Design patterns and principles",
    "# - Scalability and performance",
    "# - Security best practices",
    "# - Error handling and logging",
    "# - Configuration management",
]);

const VOCABULARY: &[(&str, &str)] = &[
    ("build", "create a complete, production-ready application with proper structure"),
    ("make", "develop a comprehensive solution with all necessary components"),
    ("implement", "implement with proper error handling, testing, and documentation"),
    ("create", "create a well-structured, maintainable solution"),
];

static RULES: [Rule; 6] = [
    Rule {
        step: "Added file structure guidance",
        reason: "Cursor excels at creating complete project structures with proper organization",
        guard: |i| i.features.intent == Intent::ProjectCreation || i.mentions(&["create"]),
        edit: Edit::Prepend(PROJECT_STRUCTURE),
    },
    Rule {
        step: "Added testing requirements",
        reason: "Cursor can generate comprehensive test suites and testing strategies",
        guard: |i| !i.features.has_testing && elevated(i),
        edit: Edit::Append(TESTING_REQUIREMENTS),
    },
    Rule {
        step: "Added documentation requirements",
        reason: "Cursor can generate comprehensive documentation including README, API docs, and inline comments",
        guard: |i| !i.features.has_documentation,
        edit: Edit::Append(DOCUMENTATION_REQUIREMENTS),
    },
    Rule {
        step: "Optimized for code review",
        reason: "Cursor provides detailed code analysis and improvement suggestions",
        guard: |i| i.features.intent == Intent::CodeReview,
        edit: Edit::Prepend(REVIEW_FOCUS),
    },
    Rule {
        step: "Added architecture guidance",
        reason: "Cursor can suggest optimal architecture patterns and design decisions",
        guard: |i| i.features.complexity == Complexity::High,
        edit: Edit::Append(ARCHITECTURE),
    },
    Rule {
        step: "Optimized language",
        reason: "Used Cursor-specific language patterns for better understanding",
        guard: always,
        edit: Edit::Replace(VOCABULARY),
    },
];

pub static CURSOR: Optimizer = Optimizer::new(
    ToolId::Cursor,
    "Cursor",
    &RULES,
    Capabilities {
        strengths: &[
            "Complete project generation",
            "Multi-file code generation",
            "Architecture and design guidance",
            "Testing and documentation generation",
            "Code review and refactoring",
            "Context-aware development",
        ],
        best_for: &[
            "Full project creation",
            "Complex system architecture",
            "Code review and improvement",
            "Testing strategy development",
            "Documentation generation",
        ],
        limitations: &[
            "May generate more code than needed",
            "Requires clear project scope",
            "Context window limitations for large projects",
        ],
        optimization_focus: &[
            "Detailed, step-by-step instructions",
            "File structure and organization",
            "Testing and documentation requirements",
            "Architecture and design patterns",
        ],
        documentation: &[],
    },
);
