//! Claude (Anthropic): explicit reasoning, requirements and justification.

use super::{elevated, Capabilities, Optimizer};
use crate::registry::ToolId;
use crate::rules::{Block, Edit, Rule};

const STEP_BY_STEP: Block = Block::new(&[
    "# Please solve this problem step-by-step and explain your reasoning at each stage.",
])
.unless(&["step-by-step"]);

const REQUIREMENTS: Block =
    Block::new(&["# List all requirements and constraints explicitly before starting."])
        .unless(&["requirements", "constraints"]);

const EXPLANATION: Block =
    Block::new(&["# After solving, explain why this solution is correct and optimal."])
        .unless(&["explain"]);

static RULES: [Rule; 3] = [
    Rule {
        step: "Added step-by-step reasoning guidance",
        reason: "Claude excels at multi-step, explicit reasoning and explanations",
        guard: elevated,
        edit: Edit::Append(STEP_BY_STEP),
    },
    Rule {
        step: "Added explicit requirements",
        reason: "Claude benefits from clear, explicit requirements and constraints",
        guard: |i| !i.features.has_requirements,
        edit: Edit::Append(REQUIREMENTS),
    },
    Rule {
        step: "Added request for explanations",
        reason: "Claude can provide detailed explanations and justifications for its answers",
        guard: |i| !i.features.asks_for_explanation,
        edit: Edit::Append(EXPLANATION),
    },
];

pub static CLAUDE: Optimizer = Optimizer::new(
    ToolId::Claude,
    "Claude (Anthropic)",
    &RULES,
    Capabilities {
        strengths: &[
            "Step-by-step reasoning",
            "Detailed explanations",
            "Multi-step problem solving",
            "Explicit constraint handling",
            "Natural language understanding",
        ],
        best_for: &[
            "Complex problem solving",
            "Explanatory answers",
            "Multi-step tasks",
            "Constraint satisfaction problems",
        ],
        limitations: &[
            "May be verbose",
            "Requires explicit instructions for best results",
        ],
        optimization_focus: &[
            "Step-by-step reasoning",
            "Explicit requirements",
            "Explanations and justifications",
        ],
        documentation: &[],
    },
);
