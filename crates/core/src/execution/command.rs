//! Command execution port
//!
//! [`CommandRunner`] is the seam between dependency adapters and the operating
//! system. [`SystemCommandRunner`] runs invocations synchronously with
//! [`std::process::Command`]; tests substitute a recording fake.

use std::process::ExitStatus;

use colored::*;

use crate::execution::invocation::Invocation;
use crate::types::{MoleculeError, MoleculeResult};

/// Runs a baked invocation to completion
pub trait CommandRunner {
    /// Run `invocation`, blocking until it exits.
    ///
    /// A non-zero exit must surface as [`MoleculeError::CommandFailed`]
    /// carrying the child's exit code.
    fn run(&self, invocation: &Invocation, debug: bool) -> MoleculeResult<()>;
}

/// Runs commands as real child processes, inheriting stdio
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }

    fn print_debug(&self, invocation: &Invocation) {
        println!("{}", "DEBUG: ENVIRONMENT".bright_black().bold());
        for (key, value) in &invocation.env {
            println!("  {}={}", key.bright_black(), value);
        }
        println!();
        println!("{}", "DEBUG: COMMAND".bright_black().bold());
        println!("  {}", invocation);
        println!();
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, invocation: &Invocation, debug: bool) -> MoleculeResult<()> {
        if debug {
            self.print_debug(invocation);
        }

        tracing::debug!(command = %invocation, "spawning");

        let status = invocation
            .to_command()
            .status()
            .map_err(|source| MoleculeError::Spawn {
                command: invocation.to_string(),
                source,
            })?;

        if !status.success() {
            let exit_code = exit_code(status);
            tracing::debug!(command = %invocation, exit_code, "command failed");
            return Err(MoleculeError::CommandFailed {
                command: invocation.to_string(),
                exit_code,
            });
        }

        Ok(())
    }
}

/// Exit code of a finished child; signals map to `128 + signal` on Unix
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
