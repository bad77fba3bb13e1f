//! Configuration management with XDG paths
//!
//! ~/.config/promptcraft/config.json - server address, defaults
//!
//! Environment overrides: PROMPTCRAFT_HOST, PORT, PROMPTCRAFT_TOOL_ANALYSIS

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "promptcraft";

/// Get config directory (~/.config/promptcraft/)
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
        .context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get config file path
pub fn config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

/// Main configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Address the API server binds to
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Extended tool analysis served verbatim at /tool_details
    #[serde(default = "default_tool_analysis_path")]
    pub tool_analysis_path: PathBuf,

    /// Tool the CLI uses when --tool is not given
    #[serde(default = "default_tool")]
    pub default_tool: String,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 5000 }
fn default_tool_analysis_path() -> PathBuf { PathBuf::from("tool_analysis.json") }
fn default_tool() -> String { "copilot".to_string() }

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            tool_analysis_path: default_tool_analysis_path(),
            default_tool: default_tool(),
        }
    }
}

impl Config {
    /// Load config from the XDG path, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&config_path()?)?;
        cfg.apply_env(|key| std::env::var(key).ok());
        Ok(cfg)
    }

    /// Load config from a file, or return defaults if it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Environment variables take precedence over the file
    pub fn apply_env<F>(&mut self, var: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = var("PROMPTCRAFT_HOST").filter(|h| !h.is_empty()) {
            self.host = host;
        }
        if let Some(port) = var("PORT").and_then(|p| p.parse().ok()) {
            self.port = port;
        }
        if let Some(path) = var("PROMPTCRAFT_TOOL_ANALYSIS").filter(|p| !p.is_empty()) {
            self.tool_analysis_path = PathBuf::from(path);
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Load the extended tool analysis document. Never interpreted, only served.
/// A missing file yields an empty object; a malformed one is an error.
pub fn load_tool_analysis(path: &Path) -> Result<serde_json::Value> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "tool analysis file not found, serving empty object");
        return Ok(serde_json::json!({}));
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
