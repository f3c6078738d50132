//! Compiling-phase container builder
//!
//! The builder owns the definition graph while it is still mutable. It is
//! the only surface compiler passes see: pure queries over the graph
//! (`has_definition`, `find_tagged_service_ids`) plus definition-level
//! mutation through `find_definition_mut`. `build()` consumes the builder -
//! running every registered pass first - so once a `Container` exists there
//! is no way left to touch a definition.

use indexmap::IndexMap;
use tracing::debug;

use sash_domain::error::{Error, Result};
use sash_domain::value_objects::ServiceId;

use crate::container::Container;
use crate::definition::{ServiceDefinition, TagAttributes};
use crate::pass::CompilerPass;

/// Mutable definition graph plus the passes to run over it
#[derive(Default)]
pub struct ContainerBuilder {
    definitions: IndexMap<ServiceId, ServiceDefinition>,
    passes: Vec<Box<dyn CompilerPass>>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a service definition
    ///
    /// Registering an id twice replaces the earlier definition but keeps its
    /// position in the enumeration order.
    pub fn register(&mut self, definition: ServiceDefinition) -> &mut Self {
        debug!(service = %definition.id(), "registered service definition");
        self.definitions.insert(definition.id().clone(), definition);
        self
    }

    /// Whether a definition is registered under the given id
    pub fn has_definition(&self, id: &str) -> bool {
        self.definitions.contains_key(id)
    }

    /// Look up a definition by id
    pub fn find_definition(&self, id: &str) -> Result<&ServiceDefinition> {
        self.definitions
            .get(id)
            .ok_or_else(|| Error::service_not_found(id))
    }

    /// Look up a definition by id for mutation
    pub fn find_definition_mut(&mut self, id: &str) -> Result<&mut ServiceDefinition> {
        self.definitions
            .get_mut(id)
            .ok_or_else(|| Error::service_not_found(id))
    }

    /// Every service id carrying the given tag, with the tag's attributes
    ///
    /// Enumeration order is the definition registration order. An empty map
    /// means no definition carries the tag; that is not an error.
    pub fn find_tagged_service_ids(&self, tag: &str) -> IndexMap<ServiceId, TagAttributes> {
        self.definitions
            .values()
            .filter_map(|definition| {
                definition
                    .tag_attributes(tag)
                    .map(|attributes| (definition.id().clone(), attributes.clone()))
            })
            .collect()
    }

    /// All registered service ids, in registration order
    pub fn service_ids(&self) -> impl Iterator<Item = &ServiceId> {
        self.definitions.keys()
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// Whether the graph is empty
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Queue a compiler pass to run during `build()`
    ///
    /// Passes run in registration order, each exactly once per build.
    pub fn add_compiler_pass(&mut self, pass: impl CompilerPass + 'static) -> &mut Self {
        self.passes.push(Box::new(pass));
        self
    }

    /// Run all queued compiler passes, freeze the graph, and enter the
    /// running phase
    pub fn build(mut self) -> Result<Container> {
        let passes = std::mem::take(&mut self.passes);
        for pass in &passes {
            debug!(pass = pass.name(), "running compiler pass");
            pass.process(&mut self)?;
        }
        debug!(services = self.definitions.len(), "container compiled");
        Ok(Container::from_definitions(self.definitions))
    }
}
