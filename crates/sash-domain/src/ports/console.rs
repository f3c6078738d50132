//! Console command port
//!
//! A console command is a named unit of administration work (`list`,
//! `status`, `version`, ...). Implementations live in the command crates;
//! the shell only ever sees them behind `Arc<dyn ConsoleCommand>` after the
//! container has resolved them.

use async_trait::async_trait;

use crate::error::Result;

/// Invocation context handed to a command when it runs
///
/// Carries the raw arguments that followed the command name on the command
/// line. Commands parse what they need and ignore the rest.
#[derive(Debug, Clone, Default)]
pub struct CommandContext {
    args: Vec<String>,
}

impl CommandContext {
    /// Create a context from the arguments following the command name
    pub fn new(args: Vec<String>) -> Self {
        Self { args }
    }

    /// All raw arguments, in order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether a bare `--name` flag was passed
    pub fn flag(&self, name: &str) -> bool {
        let flag = format!("--{name}");
        self.args.iter().any(|arg| arg == &flag)
    }

    /// The value of a `--name=value` option, if present
    pub fn option(&self, name: &str) -> Option<&str> {
        let prefix = format!("--{name}=");
        self.args
            .iter()
            .find_map(|arg| arg.strip_prefix(prefix.as_str()))
    }
}

/// A command exposed through the administration shell
#[async_trait]
pub trait ConsoleCommand: Send + Sync {
    /// The name the command is invoked by (e.g. `list`)
    fn name(&self) -> &str;

    /// One-line description shown in command listings
    fn description(&self) -> &str;

    /// Run the command and produce its textual output
    async fn execute(&self, context: &CommandContext) -> Result<String>;
}
