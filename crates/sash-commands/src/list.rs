//! Command listing
//!
//! Renders every registered command in registration order - the order the
//! discovery pass recorded them in, which keeps the listing stable across
//! runs of the same binary.

use std::sync::Arc;

use async_trait::async_trait;

use sash_container::CommandRegistry;
use sash_domain::error::Result;
use sash_domain::ports::console::{CommandContext, ConsoleCommand};

/// Lists the commands held by the registry
pub struct ListCommand {
    registry: Arc<CommandRegistry>,
}

impl ListCommand {
    /// Create a listing command over the given registry
    pub fn new(registry: Arc<CommandRegistry>) -> Self {
        Self { registry }
    }
}

#[async_trait]
impl ConsoleCommand for ListCommand {
    fn name(&self) -> &str {
        "list"
    }

    fn description(&self) -> &str {
        "List the available administration commands"
    }

    async fn execute(&self, context: &CommandContext) -> Result<String> {
        let commands = self.registry.commands()?;

        if context.option("format") == Some("json") {
            let entries: Vec<serde_json::Value> = commands
                .iter()
                .map(|command| {
                    serde_json::json!({
                        "name": command.name(),
                        "description": command.description(),
                    })
                })
                .collect();
            return Ok(serde_json::Value::Array(entries).to_string());
        }

        let width = commands
            .iter()
            .map(|command| command.name().len())
            .max()
            .unwrap_or(0);
        let lines: Vec<String> = commands
            .iter()
            .map(|command| {
                format!(
                    "  {name:width$}  {description}",
                    name = command.name(),
                    description = command.description()
                )
            })
            .collect();
        Ok(format!("Available commands:\n{}", lines.join("\n")))
    }
}
