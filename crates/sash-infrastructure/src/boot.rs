//! Container boot - the shell's composition root
//!
//! Assembles the compiling-phase builder in the order the discovery bridge
//! depends on: the command registry's definition goes in first, every linked
//! command module registers its tagged definitions, then the discovery pass
//! is queued. `build()` runs the pass over the finished graph and freezes
//! it; no service exists until something resolves it from the returned
//! container.

use std::sync::Arc;

use tracing::info;

use sash_container::{
    register_command_modules, CommandRegistry, Container, ContainerBuilder, FindCommandsPass,
    ModuleContext, ServiceDefinition,
};
use sash_domain::error::Result;
use sash_domain::value_objects::ServiceId;

use crate::config::AppConfig;

/// Boot the service container from configuration
pub fn boot(config: &AppConfig) -> Result<Container> {
    let registry_id = ServiceId::from(config.shell.registry_id.as_str());
    info!(
        registry = %registry_id,
        tag = %config.shell.command_tag,
        "booting service container"
    );

    let mut builder = ContainerBuilder::new();

    // The registry must be registered before the discovery pass runs, or the
    // pass degrades to a logged no-op.
    builder.register(ServiceDefinition::new(registry_id.clone(), |_| {
        Ok(Arc::new(CommandRegistry::new()))
    }));

    let context = ModuleContext::new(registry_id.clone(), config.shell.command_tag.clone());
    register_command_modules(&mut builder, &context)?;

    builder.add_compiler_pass(FindCommandsPass::new(
        registry_id,
        config.shell.command_tag.clone(),
    ));

    let container = builder.build()?;
    info!(services = container.len(), "service container ready");
    Ok(container)
}
