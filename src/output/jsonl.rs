#![forbid(unsafe_code)]

//! JSONL formatter for planned commands
//!
//! One JSON object per planned command, keys in a fixed order.

use crate::dispatch::CommandLine;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// JSONL output formatter
pub struct JsonlFormatter;

impl JsonlFormatter {
    pub fn new() -> Self {
        JsonlFormatter
    }

    /// Format one command as a single JSON line (newline included)
    pub fn format(&self, command: &CommandLine, ignored: &[String]) -> String {
        let record = PlanRecord {
            record_type: "plan",
            mode: command.mode.as_str(),
            program: &command.program,
            args: &command.args,
            command: command.to_string(),
            working_dir: command.working_dir.as_ref(),
            env: &command.env,
            ignored,
        };

        match serde_json::to_string(&record) {
            Ok(mut json) => {
                json.push('\n');
                json
            }
            Err(_) => String::new(),
        }
    }
}

impl Default for JsonlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Plan record for JSONL output
#[derive(Debug, Serialize)]
struct PlanRecord<'a> {
    #[serde(rename = "type")]
    record_type: &'static str,
    mode: &'static str,
    program: &'a str,
    args: &'a [String],
    command: String,
    working_dir: Option<&'a PathBuf>,
    env: &'a BTreeMap<String, String>,
    ignored: &'a [String],
}
