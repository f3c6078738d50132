//! Command-module registration
//!
//! Command crates contribute their service definitions through a `linkme`
//! distributed slice, so the boot code discovers every linked module
//! without naming it.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                  Command Module Registration Flow               │
//! ├────────────────────────────────────────────────────────────────┤
//! │                                                                │
//! │  1. Module defines:  #[linkme::distributed_slice(              │
//! │                          COMMAND_MODULES)]                     │
//! │                      static ENTRY: CommandModuleEntry = ...    │
//! │                            ↓                                   │
//! │  2. Boot iterates:   register_command_modules(&mut builder,    │
//! │                          &context)                             │
//! │                            ↓                                   │
//! │  3. Each module registers tagged ServiceDefinitions            │
//! │                            ↓                                   │
//! │  4. FindCommandsPass discovers them during build()             │
//! │                                                                │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Registering a module (in a command crate)
//!
//! ```ignore
//! use sash_container::{CommandModuleEntry, COMMAND_MODULES};
//!
//! #[linkme::distributed_slice(COMMAND_MODULES)]
//! static BUILTIN_COMMANDS: CommandModuleEntry = CommandModuleEntry {
//!     name: "builtin",
//!     description: "Built-in administration commands",
//!     register: register_builtin_commands,
//! };
//! ```

use tracing::debug;

use sash_domain::error::Result;
use sash_domain::value_objects::ServiceId;

use crate::builder::ContainerBuilder;

/// Wiring parameters shared with every command module at registration time
///
/// Modules read the tag to mark their command definitions with and the
/// registry id their factories may resolve; both come from shell
/// configuration, not from constants baked into the modules.
#[derive(Debug, Clone)]
pub struct ModuleContext {
    registry_id: ServiceId,
    command_tag: String,
}

impl ModuleContext {
    /// Create a context for the configured registry id and command tag
    pub fn new(registry_id: impl Into<ServiceId>, command_tag: impl Into<String>) -> Self {
        Self {
            registry_id: registry_id.into(),
            command_tag: command_tag.into(),
        }
    }

    /// Service id of the command registry
    pub fn registry_id(&self) -> &ServiceId {
        &self.registry_id
    }

    /// Tag that marks a definition as a console command
    pub fn command_tag(&self) -> &str {
        &self.command_tag
    }
}

/// Registry entry for a command module
pub struct CommandModuleEntry {
    /// Unique module name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Hook registering the module's service definitions
    pub register: fn(&mut ContainerBuilder, &ModuleContext) -> Result<()>,
}

// Auto-collection via linkme distributed slices - command crates submit
// entries at compile time.
#[linkme::distributed_slice]
pub static COMMAND_MODULES: [CommandModuleEntry] = [..];

/// Run every linked command module's registration hook
pub fn register_command_modules(
    builder: &mut ContainerBuilder,
    context: &ModuleContext,
) -> Result<()> {
    for entry in COMMAND_MODULES {
        debug!(module = entry.name, "registering command module");
        (entry.register)(builder, context)?;
    }
    Ok(())
}

/// List all linked command modules
///
/// Returns (name, description) tuples, useful for diagnostics output.
pub fn list_command_modules() -> Vec<(&'static str, &'static str)> {
    COMMAND_MODULES
        .iter()
        .map(|entry| (entry.name, entry.description))
        .collect()
}
