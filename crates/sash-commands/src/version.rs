//! Version reporting

use async_trait::async_trait;

use sash_domain::constants::PLATFORM_NAME;
use sash_domain::error::Result;
use sash_domain::ports::console::{CommandContext, ConsoleCommand};

/// Prints the shell version and the platform it administers
pub struct VersionCommand;

#[async_trait]
impl ConsoleCommand for VersionCommand {
    fn name(&self) -> &str {
        "version"
    }

    fn description(&self) -> &str {
        "Show the shell version"
    }

    async fn execute(&self, _context: &CommandContext) -> Result<String> {
        Ok(format!(
            "sash {} ({PLATFORM_NAME} platform shell)",
            env!("CARGO_PKG_VERSION")
        ))
    }
}
