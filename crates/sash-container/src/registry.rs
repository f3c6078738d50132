//! Command registry and command service adapter
//!
//! The registry is the storage service the discovery pass targets. It never
//! sees a command constructor: compilation records deferred
//! `add_command_reference` calls on its definition, and the container
//! replays them when the registry is first resolved, handing it one
//! [`LazyService`] per discovered command. Commands are built only when the
//! registry is asked to produce them.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use sash_domain::constants::ADD_COMMAND_REFERENCE;
use sash_domain::error::{Error, Result};
use sash_domain::ports::console::ConsoleCommand;

use crate::container::LazyService;
use crate::service::Service;

/// Accumulates lazy references to every discovered command service
#[derive(Default)]
pub struct CommandRegistry {
    references: Mutex<Vec<LazyService>>,
}

impl CommandRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a reference to a command service
    ///
    /// References keep their registration order; listings and lookups walk
    /// them in that order.
    pub fn add_command_reference(&self, reference: LazyService) {
        debug!(command = %reference.id(), "registered command reference");
        self.references.lock().push(reference);
    }

    /// Number of registered command references
    pub fn len(&self) -> usize {
        self.references.lock().len()
    }

    /// Whether no command has been registered
    pub fn is_empty(&self) -> bool {
        self.references.lock().is_empty()
    }

    /// The registered references, in registration order
    pub fn references(&self) -> Vec<LazyService> {
        self.references.lock().clone()
    }

    /// Resolve every registered command, in registration order
    pub fn commands(&self) -> Result<Vec<Arc<dyn ConsoleCommand>>> {
        self.references()
            .iter()
            .map(|reference| {
                reference
                    .resolve_as::<CommandService>()
                    .map(|service| service.command())
            })
            .collect()
    }

    /// Find a command by its invocation name
    pub fn find(&self, name: &str) -> Result<Option<Arc<dyn ConsoleCommand>>> {
        for command in self.commands()? {
            if command.name() == name {
                return Ok(Some(command));
            }
        }
        Ok(None)
    }
}

impl Service for CommandRegistry {
    fn apply_deferred_call(&self, method: &str, argument: LazyService) -> Result<()> {
        match method {
            ADD_COMMAND_REFERENCE => {
                self.add_command_reference(argument);
                Ok(())
            }
            other => Err(Error::unsupported_method(other)),
        }
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("references", &self.len())
            .finish()
    }
}

/// Container service wrapping a console command implementation
///
/// Commands are plain domain objects; this adapter is what their factories
/// register so the registry can downcast references to a single known type.
pub struct CommandService {
    command: Arc<dyn ConsoleCommand>,
}

impl CommandService {
    /// Wrap an already-shared command
    pub fn new(command: Arc<dyn ConsoleCommand>) -> Self {
        Self { command }
    }

    /// Wrap an owned command implementation
    pub fn from_command<C: ConsoleCommand + 'static>(command: C) -> Self {
        Self {
            command: Arc::new(command),
        }
    }

    /// The wrapped command
    pub fn command(&self) -> Arc<dyn ConsoleCommand> {
        self.command.clone()
    }
}

impl Service for CommandService {}

impl fmt::Debug for CommandService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandService")
            .field("name", &self.command.name())
            .finish()
    }
}
