//! Tool registry
//!
//! The six supported tools are a closed set. Lookup goes through `ToolId`;
//! unknown ids fail with `OptimizeError::UnknownTool`, carrying a fuzzy
//! suggestion when one of the real ids is close.

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OptimizeError;
use crate::optimizers::{Optimizer, CLAUDE, CODEWHISPERER, COPILOT, CURSOR, GPT, REPLIT};

// ═══════════════════════════════════════════════════════════════
// TOOL IDS
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolId {
    Copilot,
    Cursor,
    Replit,
    CodeWhisperer,
    Claude,
    Gpt,
}

impl ToolId {
    pub const ALL: [ToolId; 6] = [
        ToolId::Copilot,
        ToolId::Cursor,
        ToolId::Replit,
        ToolId::CodeWhisperer,
        ToolId::Claude,
        ToolId::Gpt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolId::Copilot => "copilot",
            ToolId::Cursor => "cursor",
            ToolId::Replit => "replit",
            ToolId::CodeWhisperer => "codewhisperer",
            ToolId::Claude => "claude",
            ToolId::Gpt => "gpt",
        }
    }

    pub fn optimizer(&self) -> &'static Optimizer {
        match self {
            ToolId::Copilot => &COPILOT,
            ToolId::Cursor => &CURSOR,
            ToolId::Replit => &REPLIT,
            ToolId::CodeWhisperer => &CODEWHISPERER,
            ToolId::Claude => &CLAUDE,
            ToolId::Gpt => &GPT,
        }
    }
}

impl fmt::Display for ToolId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ToolId {
    type Err = OptimizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        ToolId::ALL
            .into_iter()
            .find(|id| id.as_str() == wanted)
            .ok_or_else(|| OptimizeError::UnknownTool {
                tool: s.to_string(),
                suggestion: suggest(&wanted).map(String::from),
            })
    }
}

/// Closest real tool id, matching in both directions so that both
/// "whisper" and "github-copilot" find something.
fn suggest(wanted: &str) -> Option<&'static str> {
    if wanted.is_empty() {
        return None;
    }

    let matcher = SkimMatcherV2::default();
    ToolId::ALL
        .iter()
        .filter_map(|id| {
            let forward = matcher.fuzzy_match(id.as_str(), wanted);
            let backward = matcher.fuzzy_match(wanted, id.as_str());
            forward.max(backward).map(|score| (id.as_str(), score))
        })
        .max_by_key(|(_, score)| *score)
        .map(|(id, _)| id)
}

// ═══════════════════════════════════════════════════════════════
// LOOKUP
// ═══════════════════════════════════════════════════════════════

/// Resolve a tool id to its optimizer
pub fn get(tool_id: &str) -> Result<&'static Optimizer, OptimizeError> {
    tool_id.parse::<ToolId>().map(|id| id.optimizer())
}

// ═══════════════════════════════════════════════════════════════
// UI LISTING
// ═══════════════════════════════════════════════════════════════

/// Display metadata for tool pickers
#[derive(Debug, Clone, Serialize)]
pub struct ToolInfo {
    pub id: ToolId,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub fn tools() -> Vec<ToolInfo> {
    ToolId::ALL
        .into_iter()
        .map(|id| ToolInfo {
            id,
            name: id.optimizer().name(),
            description: description(id),
            icon: icon(id),
        })
        .collect()
}

fn description(id: ToolId) -> &'static str {
    match id {
        ToolId::Copilot => "AI pair programmer for code completion and generation",
        ToolId::Cursor => "AI-first code editor with advanced code generation",
        ToolId::Replit => "Online IDE with AI-powered code assistance",
        ToolId::CodeWhisperer => "AI-powered code generator for AWS development",
        ToolId::Claude => "Advanced AI assistant for coding and analysis",
        ToolId::Gpt => "Large language model for code generation and review",
    }
}

fn icon(id: ToolId) -> &'static str {
    match id {
        ToolId::Copilot => "🤖",
        ToolId::Cursor => "📝",
        ToolId::Replit => "🌐",
        ToolId::CodeWhisperer => "☁️",
        ToolId::Claude => "🧠",
        ToolId::Gpt => "⚡",
    }
}

// ═══════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_id_resolves_to_its_optimizer() {
        for id in ToolId::ALL {
            let opt = get(id.as_str()).unwrap();
            assert_eq!(opt.id(), id);
        }
    }

    #[test]
    fn test_lookup_normalizes_case_and_whitespace() {
        assert_eq!(get("  Claude ").unwrap().id(), ToolId::Claude);
        assert_eq!(get("CODEWHISPERER").unwrap().id(), ToolId::CodeWhisperer);
    }

    #[test]
    fn test_unknown_tool() {
        let err = get("not-a-real-tool").unwrap_err();
        assert!(matches!(err, OptimizeError::UnknownTool { ref tool, .. } if tool == "not-a-real-tool"));
        assert!(matches!(get("").unwrap_err(), OptimizeError::UnknownTool { suggestion: None, .. }));
    }

    #[test]
    fn test_suggestions() {
        assert_eq!(suggest("gpt-4"), Some("gpt"));
        assert_eq!(suggest("github-copilot"), Some("copilot"));
        assert_eq!(suggest("whisperer"), Some("codewhisperer"));
        assert_eq!(suggest(""), None);
    }

    #[test]
    fn test_tool_listing() {
        let list = tools();
        assert_eq!(list.len(), 6);
        assert_eq!(list[0].name, "GitHub Copilot");
        assert_eq!(list[3].name, "Amazon CodeWhisperer");

        let json = serde_json::to_value(&list).unwrap();
        let ids: Vec<&str> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["copilot", "cursor", "replit", "codewhisperer", "claude", "gpt"]);
    }
}
