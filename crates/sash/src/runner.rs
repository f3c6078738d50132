//! Shell runner
//!
//! Ties the layers together for one invocation: load configuration,
//! initialize logging, boot the container, and dispatch the requested
//! command from the registry.

use std::path::Path;

use tracing::debug;

use sash_container::CommandRegistry;
use sash_domain::error::{Error, Result};
use sash_domain::ports::console::CommandContext;
use sash_infrastructure::{boot, init_logging, ConfigLoader};

/// Command invoked when none is named on the command line
const DEFAULT_COMMAND: &str = "list";

/// Run one shell invocation and return the command's output
///
/// `invocation` is the command name followed by its arguments; an empty
/// invocation runs `list`.
pub async fn run(config_path: Option<&Path>, invocation: &[String]) -> Result<String> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = config_path {
        loader = loader.with_config_path(path);
    }
    let config = loader.load()?;
    init_logging(&config.logging)?;

    let container = boot(&config)?;
    let registry = container.get_as::<CommandRegistry>(config.shell.registry_id.as_str())?;

    let (name, args) = match invocation.split_first() {
        Some((name, rest)) => (name.as_str(), rest.to_vec()),
        None => (DEFAULT_COMMAND, Vec::new()),
    };
    debug!(command = name, "dispatching command");

    let command = registry
        .find(name)?
        .ok_or_else(|| Error::command_not_found(name))?;
    command.execute(&CommandContext::new(args)).await
}
