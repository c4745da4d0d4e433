//! Output formatting utilities for the CLI.
//!
//! Command results go to stdout, diagnostics and errors to stderr, so
//! `vcap credential ...` can be used directly in shell substitutions.

use serde::Serialize;

/// Result of a command, printable for people or for scripts
pub trait CommandOutput: Serialize {
    /// Plain text for a terminal; may be a bare value with no decoration
    fn to_human(&self) -> String;

    /// Stable JSON shape used by `--json`
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected mode
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    let rendered = if json_mode {
        serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
    } else {
        result.to_human()
    };
    println!("{rendered}");
}
