//! Platform status

use std::sync::Arc;

use async_trait::async_trait;

use sash_container::{list_command_modules, CommandRegistry};
use sash_domain::constants::PLATFORM_NAME;
use sash_domain::error::Result;
use sash_domain::ports::console::{CommandContext, ConsoleCommand};
use sash_domain::value_objects::ServiceId;

/// Reports what the booted container looks like
pub struct StatusCommand {
    registry: Arc<CommandRegistry>,
    service_ids: Vec<ServiceId>,
}

impl StatusCommand {
    /// Create a status command over the registry and the booted service ids
    pub fn new(registry: Arc<CommandRegistry>, service_ids: Vec<ServiceId>) -> Self {
        Self {
            registry,
            service_ids,
        }
    }
}

#[async_trait]
impl ConsoleCommand for StatusCommand {
    fn name(&self) -> &str {
        "status"
    }

    fn description(&self) -> &str {
        "Show the administration shell and platform status"
    }

    async fn execute(&self, context: &CommandContext) -> Result<String> {
        let mut lines = vec![
            format!("{PLATFORM_NAME} administration shell"),
            format!("registered services: {}", self.service_ids.len()),
            format!("console commands: {}", self.registry.len()),
            format!("command modules: {}", list_command_modules().len()),
        ];

        if context.flag("services") {
            lines.push("services:".to_string());
            for id in &self.service_ids {
                lines.push(format!("  {id}"));
            }
        }

        Ok(lines.join("\n"))
    }
}
