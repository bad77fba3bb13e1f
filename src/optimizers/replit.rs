//! Replit
//!
//! Leans towards hosted web apps: web context, dependency manifests,
//! deployment, interactive features, and always the platform's own
//! environment setup (.replit / replit.nix).

use super::{elevated, Capabilities, Optimizer};
use crate::analyzer::Intent;
use crate::registry::ToolId;
use crate::rules::{always, Block, Edit, Rule};

const WEB_CONTEXT: Block = Block::new(&[
    "# Web Development Context:",
    "# - Use modern web frameworks (Flask, Django, React, etc.)",
    "# - Include responsive design considerations",
    "# - Add proper routing and API endpoints",
    "# - Consider client-side and server-side functionality",
    "# - Include static file handling and templates",
]);

const PACKAGE_MANAGEMENT: Block = Block::new(&[
    "# Package Management:",
    "# - Include requirements.txt or package.json",
    "# - Specify exact versions for reproducibility",
    "# - Add development dependencies if needed",
    "# - Consider virtual environment setup",
])
.unless(&["requirements", "package.json"]);

const DEPLOYMENT: Block = Block::new(&[
    "# Deployment Considerations:",
    "# - Configure for Replit's hosting environment",
    "# - Set up proper environment variables",
    "# - Include deployment scripts if needed",
    "# - Consider database setup and configuration",
    "# - Add proper error handling for production",
]);

const INTERACTIVE: Block = Block::new(&[
    "# Interactive Features:",
    "# - Add user input handling and validation",
    "# - Include real-time updates if applicable",
    "# - Consider collaborative editing features",
    "# - Add debugging and logging capabilities",
]);

const ENVIRONMENT: Block = Block::new(&[
    "# Environment Setup:",
    "# - Configure for Replit's development environment",
    "# - Set up proper file structure for the platform",
    "# - Include configuration files (.replit, replit.nix)",
    "# - Add proper entry point configuration",
]);

const VOCABULARY: &[(&str, &str)] = &[
    ("web app", "web application with proper routing, templates, and API endpoints"),
    ("website", "responsive website with modern design and interactive features"),
    ("deploy", "deploy to Replit with proper environment configuration"),
    ("host", "host on Replit with automatic deployment and scaling"),
];

static RULES: [Rule; 6] = [
    Rule {
        step: "Added web development context",
        reason: "Replit excels at web application development with built-in hosting",
        guard: |i| i.features.intent == Intent::WebDevelopment || i.mentions(&["web"]),
        edit: Edit::Prepend(WEB_CONTEXT),
    },
    Rule {
        step: "Added package management",
        reason: "Replit can automatically handle dependencies and package installation",
        guard: |i| !i.features.has_dependencies,
        edit: Edit::Append(PACKAGE_MANAGEMENT),
    },
    Rule {
        step: "Added deployment guidance",
        reason: "Replit provides seamless deployment and hosting capabilities",
        guard: |i| i.features.intent == Intent::ProjectCreation,
        edit: Edit::Append(DEPLOYMENT),
    },
    Rule {
        step: "Added interactive features",
        reason: "Replit supports interactive elements and real-time collaboration",
        guard: elevated,
        edit: Edit::Append(INTERACTIVE),
    },
    Rule {
        step: "Added environment setup",
        reason: "Replit can configure development environments automatically",
        guard: always,
        edit: Edit::Append(ENVIRONMENT),
    },
    Rule {
        step: "Optimized language",
        reason: "Used Replit-specific language patterns for better understanding",
        guard: always,
        edit: Edit::Replace(VOCABULARY),
    },
];

pub static REPLIT: Optimizer = Optimizer::new(
    ToolId::Replit,
    "Replit",
    &RULES,
    Capabilities {
        strengths: &[
            "Web application development",
            "Built-in hosting and deployment",
            "Package and dependency management",
            "Interactive coding environment",
            "Collaborative development",
            "Multi-language support",
        ],
        best_for: &[
            "Web applications and websites",
            "Educational projects",
            "Prototyping and MVPs",
            "Collaborative coding",
            "Quick deployment",
        ],
        limitations: &[
            "Limited to web-based development",
            "Resource constraints on free tier",
            "May not support all advanced features",
        ],
        optimization_focus: &[
            "Web development frameworks",
            "Package management",
            "Deployment configuration",
            "Interactive features",
            "Environment setup",
        ],
        documentation: &[],
    },
);
