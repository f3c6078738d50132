//! Compiler passes
//!
//! A compiler pass is a hook that runs while the container is still being
//! compiled: definitions are registered but no instance exists yet, so a
//! pass may inspect and mutate blueprints but must never ask for a service.
//!
//! `FindCommandsPass` is the command-discovery bridge. The shell registers
//! the command registry's definition and this pass before compiling; during
//! `build()` the pass scans the graph for definitions tagged as console
//! commands and records one deferred `add_command_reference` call per hit on
//! the registry's definition. The container replays those calls when the
//! registry is first resolved, handing it lazy references it can resolve on
//! demand - at which point the commands discovered here become listable and
//! runnable without any of them having been constructed during compilation.
//!
//! The pass does not guard against being queued twice on one builder: each
//! run appends its discoveries again. A builder runs each queued pass once
//! per `build()`, and `build()` consumes the builder, which is the intended
//! protection.

use tracing::debug;

use sash_domain::constants::ADD_COMMAND_REFERENCE;
use sash_domain::error::Result;
use sash_domain::value_objects::ServiceId;

use crate::builder::ContainerBuilder;
use crate::definition::ServiceRef;

/// A build-time hook over the mutable definition graph
pub trait CompilerPass: Send + Sync {
    /// Short name used in compilation logs
    fn name(&self) -> &'static str;

    /// Inspect and mutate the definition graph
    fn process(&self, builder: &mut ContainerBuilder) -> Result<()>;
}

/// Discovers tagged command services and binds them to the command registry
///
/// Both the registry's service id and the tag are construction parameters,
/// so the same pass wires any storage/tag pair.
#[derive(Debug, Clone)]
pub struct FindCommandsPass {
    storage_id: ServiceId,
    tag: String,
}

impl FindCommandsPass {
    /// Create a pass binding services tagged `tag` to the definition
    /// registered under `storage_id`
    pub fn new(storage_id: impl Into<ServiceId>, tag: impl Into<String>) -> Self {
        Self {
            storage_id: storage_id.into(),
            tag: tag.into(),
        }
    }
}

impl CompilerPass for FindCommandsPass {
    fn name(&self) -> &'static str {
        "find-commands"
    }

    fn process(&self, builder: &mut ContainerBuilder) -> Result<()> {
        debug!(storage = %self.storage_id, tag = %self.tag, "discovering tagged command services");

        // The caller is expected to have registered the storage service
        // before queueing this pass; a missing registration is recoverable
        // and leaves the graph untouched.
        if !builder.has_definition(self.storage_id.as_str()) {
            debug!(storage = %self.storage_id, "command storage service is not registered, skipping discovery");
            return Ok(());
        }

        let tagged = builder.find_tagged_service_ids(&self.tag);
        let definition = builder.find_definition_mut(self.storage_id.as_str())?;
        for (id, _attributes) in &tagged {
            debug!(service = %id, "found tagged command service");
            definition.add_method_call(ADD_COMMAND_REFERENCE, ServiceRef::new(id.clone()));
        }
        Ok(())
    }
}
