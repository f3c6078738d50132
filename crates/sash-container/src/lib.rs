//! Service container core for the sash administration shell.
//!
//! Implements the two-phase service container the shell boots the platform
//! with, and the command-discovery bridge that runs between the phases.
//!
//! ## Architecture
//!
//! ```text
//! Compiling (ContainerBuilder)            Running (Container)
//! ────────────────────────────            ───────────────────
//! register(ServiceDefinition)
//!   tags: "console.command"
//!          │
//!          ▼
//! compiler passes (FindCommandsPass)
//!   find_tagged_service_ids(tag)
//!   definition.add_method_call(          build()
//!     "add_command_reference",     ────────────▶  get("command.registry")
//!     ServiceRef(id))                               factory runs
//!                                                   deferred calls replayed:
//!                                                   registry.add_command_reference(
//!                                                     LazyService(id))
//! ```
//!
//! The builder is the only owner of definitions while compiling; `build()`
//! consumes it, so definitions are frozen by construction once the container
//! exists. Deferred calls recorded on a definition are replayed exactly once,
//! when the service is first resolved - the lazy references they carry are
//! never resolved eagerly.

pub mod builder;
pub mod container;
pub mod definition;
pub mod modules;
pub mod pass;
pub mod registry;
pub mod service;

pub use builder::ContainerBuilder;
pub use container::{Container, LazyService};
pub use definition::{DeferredCall, ServiceDefinition, ServiceRef, TagAttributes};
pub use modules::{
    list_command_modules, register_command_modules, CommandModuleEntry, ModuleContext,
    COMMAND_MODULES,
};
pub use pass::{CompilerPass, FindCommandsPass};
pub use registry::{CommandRegistry, CommandService};
pub use service::Service;
