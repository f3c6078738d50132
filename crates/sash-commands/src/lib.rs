//! Built-in administration commands.
//!
//! Each command is a plain [`ConsoleCommand`] implementation registered as a
//! tagged service definition; the discovery pass wires them into the command
//! registry during container compilation. The module announces itself
//! through the `COMMAND_MODULES` distributed slice, so any binary that links
//! this crate gets the built-ins without naming them.

pub mod list;
pub mod status;
pub mod version;

use std::sync::Arc;

use sash_container::{
    CommandModuleEntry, CommandRegistry, CommandService, ContainerBuilder, ModuleContext,
    ServiceDefinition, COMMAND_MODULES,
};
use sash_domain::constants::{LIST_COMMAND_ID, STATUS_COMMAND_ID, VERSION_COMMAND_ID};
use sash_domain::error::Result;

pub use list::ListCommand;
pub use status::StatusCommand;
pub use version::VersionCommand;

/// Register the built-in command definitions
///
/// Factories resolve the command registry through the id the shell was
/// configured with; nothing is constructed here.
pub fn register_builtin_commands(
    builder: &mut ContainerBuilder,
    context: &ModuleContext,
) -> Result<()> {
    let registry_id = context.registry_id().clone();
    builder.register(
        ServiceDefinition::new(LIST_COMMAND_ID, move |container| {
            let registry = container.get_as::<CommandRegistry>(registry_id.as_str())?;
            Ok(Arc::new(CommandService::from_command(ListCommand::new(
                registry,
            ))))
        })
        .with_tag(context.command_tag()),
    );

    let registry_id = context.registry_id().clone();
    builder.register(
        ServiceDefinition::new(STATUS_COMMAND_ID, move |container| {
            let registry = container.get_as::<CommandRegistry>(registry_id.as_str())?;
            Ok(Arc::new(CommandService::from_command(StatusCommand::new(
                registry,
                container.service_ids(),
            ))))
        })
        .with_tag(context.command_tag()),
    );

    builder.register(
        ServiceDefinition::new(VERSION_COMMAND_ID, |_| {
            Ok(Arc::new(CommandService::from_command(VersionCommand)))
        })
        .with_tag(context.command_tag()),
    );

    Ok(())
}

#[linkme::distributed_slice(COMMAND_MODULES)]
static BUILTIN_COMMANDS: CommandModuleEntry = CommandModuleEntry {
    name: "builtin",
    description: "Built-in administration commands (list, status, version)",
    register: register_builtin_commands,
};
