//! promptcraft - rewrite a task description for an AI coding assistant
//!
//! USAGE:
//!   promptcraft --tool <id> [PROMPT...]   # optimize (prompt from stdin if omitted)
//!   promptcraft analyze [PROMPT...]       # show the feature vector only
//!   promptcraft tools                     # list supported tools

use anyhow::{Context, Result};
use std::io::Read;

use promptcraft::config::Config;
use promptcraft::{logging, registry, render};

// ═══════════════════════════════════════════════════════════════
// CLI
// ═══════════════════════════════════════════════════════════════

#[derive(Debug, PartialEq)]
enum Command {
    Optimize {
        tool: Option<String>,
        json: bool,
        diff: bool,
        prompt: Option<String>,
    },
    Analyze {
        json: bool,
        prompt: Option<String>,
    },
    Tools {
        json: bool,
    },
    Help,
}

fn parse_args(args: &[String]) -> Command {
    if args.iter().any(|a| a == "--help" || a == "-h") {
        return Command::Help;
    }

    let json = args.iter().any(|a| a == "--json");

    match args.first().map(|s| s.as_str()) {
        Some("tools") => return Command::Tools { json },
        Some("analyze") => {
            return Command::Analyze {
                json,
                prompt: join_words(&args[1..]),
            }
        }
        _ => {}
    }

    let mut tool = None;
    let mut diff = false;
    let mut words = Vec::new();
    let mut i = 0;

    while i < args.len() {
        match args[i].as_str() {
            "--tool" | "-t" => {
                i += 1;
                tool = args.get(i).cloned();
            }
            "--diff" | "-d" => diff = true,
            "--json" => {}
            s => words.push(s.to_string()),
        }
        i += 1;
    }

    Command::Optimize {
        tool,
        json,
        diff,
        prompt: join_words(&words),
    }
}

fn join_words(words: &[String]) -> Option<String> {
    let words: Vec<&str> = words
        .iter()
        .map(|w| w.as_str())
        .filter(|w| *w != "--json")
        .collect();
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

fn print_help() {
    println!(r#"promptcraft - rule-based prompt optimizer for AI coding assistants

USAGE:
    promptcraft --tool <id> [PROMPT...]   # optimize a prompt for one tool
    promptcraft analyze [PROMPT...]       # show intent, complexity, signals
    promptcraft tools                     # list supported tools

FLAGS:
    -t, --tool <id>     copilot, cursor, replit, codewhisperer, claude, gpt
    -d, --diff          Show a unified diff instead of the full report
        --json          Print machine-readable JSON
    -h, --help          Show this help

The prompt is read from stdin when no PROMPT words are given.

CONFIG:
    ~/.config/promptcraft/config.json    default_tool, server host/port

ENVIRONMENT:
    RUST_LOG                             Log filter (default: info)
"#);
}

/// Prompt from the command line, or all of stdin
fn read_prompt(prompt: Option<String>) -> Result<String> {
    match prompt {
        Some(p) => Ok(p),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read prompt from stdin")?;
            Ok(buf)
        }
    }
}

// ═══════════════════════════════════════════════════════════════
// COMMANDS
// ═══════════════════════════════════════════════════════════════

fn run_optimize(tool: Option<String>, json: bool, diff: bool, prompt: Option<String>) -> Result<()> {
    let tool = match tool {
        Some(t) => t,
        None => Config::load()?.default_tool,
    };
    let prompt = read_prompt(prompt)?;

    let report = promptcraft::optimize(&tool, &prompt)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if diff {
        print!(
            "{}",
            render::preview_changes(&prompt, &report.optimized_text, report.tool.as_str())
        );
    } else {
        print!("{}", render::render_report(&report));
    }
    Ok(())
}

fn run_analyze(json: bool, prompt: Option<String>) -> Result<()> {
    let prompt = read_prompt(prompt)?;
    let features = promptcraft::analyze(&prompt);

    if json {
        println!("{}", serde_json::to_string_pretty(&features)?);
    } else {
        print!("{}", render::render_analysis(&features));
    }
    Ok(())
}

fn run_tools(json: bool) -> Result<()> {
    let tools = registry::tools();

    if json {
        println!("{}", serde_json::to_string_pretty(&tools)?);
        return Ok(());
    }

    for t in tools {
        println!("{} {:<14} {:<22} {}", t.icon, t.id, t.name, t.description);
    }
    Ok(())
}

fn main() {
    logging::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match parse_args(&args) {
        Command::Help => {
            print_help();
            Ok(())
        }
        Command::Tools { json } => run_tools(json),
        Command::Analyze { json, prompt } => run_analyze(json, prompt),
        Command::Optimize {
            tool,
            json,
            diff,
            prompt,
        } => run_optimize(tool, json, diff, prompt),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
