//! External command execution
//!
//! This module describes a baked external tool invocation and the port used to
//! run it, so dependency adapters never spawn processes directly.

pub mod command;
pub mod invocation;

pub use command::{CommandRunner, SystemCommandRunner};
pub use invocation::{render_flag, render_flags, Invocation};
