//! Baked command lines
//!
//! An [`Invocation`] is the fully resolved form of an external tool call:
//! binary path, ordered arguments and environment.

use std::fmt;
use std::path::PathBuf;
use std::process::Command;

use serde_json::Value;

use crate::types::{Env, Options};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub env: Env,
}

impl Invocation {
    pub fn new(program: PathBuf, args: Vec<String>, env: Env) -> Self {
        Self { program, args, env }
    }

    /// Build a [`Command`] that inherits the parent environment plus `env`
    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(&self.args).envs(&self.env);
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Render every option as command-line flags, in key order
pub fn render_flags(options: &Options) -> Vec<String> {
    let mut entries: Vec<_> = options.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    entries
        .into_iter()
        .flat_map(|(key, value)| render_flag(key, value))
        .collect()
}

/// Render a single option.
///
/// Underscores in keys become dashes. Single-character keys are short flags
/// taking a separate value (`-e value`); longer keys use `--key=value`.
/// `true` yields the bare flag, `false` and `null` yield nothing, arrays repeat
/// the flag per element and maps are passed as compact JSON.
pub fn render_flag(key: &str, value: &Value) -> Vec<String> {
    let name = key.replace('_', "-");
    let short = name.chars().count() == 1;

    match value {
        Value::Null | Value::Bool(false) => Vec::new(),
        Value::Bool(true) => vec![flag_name(&name, short)],
        Value::Array(items) => items
            .iter()
            .flat_map(|item| render_flag(key, item))
            .collect(),
        other => {
            let rendered = scalar(other);
            if short {
                vec![flag_name(&name, true), rendered]
            } else {
                vec![format!("--{}={}", name, rendered)]
            }
        }
    }
}

fn flag_name(name: &str, short: bool) -> String {
    if short {
        format!("-{}", name)
    } else {
        format!("--{}", name)
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
