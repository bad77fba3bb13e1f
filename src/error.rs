//! Errors surfaced by the optimize entry point

/// Failures callers must be able to tell apart
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OptimizeError {
    #[error("Unsupported tool selected: '{tool}'{}", did_you_mean(.suggestion))]
    UnknownTool {
        tool: String,
        suggestion: Option<String>,
    },

    #[error("Prompt is empty")]
    EmptyPrompt,
}

fn did_you_mean(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{}'?)", s),
        None => String::new(),
    }
}
