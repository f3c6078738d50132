//! Running-phase container
//!
//! Holds the frozen definition graph and builds instances on demand. Each
//! service is constructed at most once: the factory runs, the definition's
//! deferred calls are replayed in recording order, and the instance is
//! memoized. A `LazyService` is the runtime form of a definition-level
//! `ServiceRef` - it keeps only a weak handle on the container and resolves
//! when asked, never eagerly.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};

use indexmap::IndexMap;
use parking_lot::Mutex;
use tracing::debug;

use sash_domain::error::{Error, Result};
use sash_domain::value_objects::ServiceId;

use crate::definition::ServiceDefinition;
use crate::service::Service;

struct ContainerInner {
    definitions: IndexMap<ServiceId, ServiceDefinition>,
    instances: Mutex<HashMap<ServiceId, Arc<dyn Service>>>,
    resolving: Mutex<Vec<ServiceId>>,
}

/// Cheap-to-clone handle on the running container
#[derive(Clone)]
pub struct Container {
    inner: Arc<ContainerInner>,
}

impl Container {
    pub(crate) fn from_definitions(definitions: IndexMap<ServiceId, ServiceDefinition>) -> Self {
        Self {
            inner: Arc::new(ContainerInner {
                definitions,
                instances: Mutex::new(HashMap::new()),
                resolving: Mutex::new(Vec::new()),
            }),
        }
    }

    fn from_inner(inner: Arc<ContainerInner>) -> Self {
        Self { inner }
    }

    /// Whether a service is registered under the given id
    pub fn has(&self, id: &str) -> bool {
        self.inner.definitions.contains_key(id)
    }

    /// All registered service ids, in registration order
    pub fn service_ids(&self) -> Vec<ServiceId> {
        self.inner.definitions.keys().cloned().collect()
    }

    /// Number of registered services
    pub fn len(&self) -> usize {
        self.inner.definitions.len()
    }

    /// Whether the container holds no definitions
    pub fn is_empty(&self) -> bool {
        self.inner.definitions.is_empty()
    }

    /// Resolve a service, constructing it on first access
    pub fn get(&self, id: &str) -> Result<Arc<dyn Service>> {
        if let Some(existing) = self.inner.instances.lock().get(id) {
            return Ok(existing.clone());
        }

        let definition = self
            .inner
            .definitions
            .get(id)
            .ok_or_else(|| Error::service_not_found(id))?;

        self.enter_resolution(definition.id())?;
        let built = self.instantiate(definition);
        self.leave_resolution(definition.id());
        let instance = built?;

        let mut instances = self.inner.instances.lock();
        let entry = instances
            .entry(definition.id().clone())
            .or_insert(instance)
            .clone();
        Ok(entry)
    }

    /// Resolve a service and downcast it to its concrete type
    pub fn get_as<T: Service>(&self, id: &str) -> Result<Arc<T>> {
        self.get(id)?
            .downcast_arc::<T>()
            .map_err(|_| Error::type_mismatch(id))
    }

    /// A lazy reference to a service of this container
    ///
    /// The reference holds the container weakly; resolving it after the
    /// container is gone is an error, holding it inside a container-owned
    /// service is not a cycle.
    pub fn lazy_reference(&self, id: ServiceId) -> LazyService {
        LazyService {
            container: Arc::downgrade(&self.inner),
            id,
        }
    }

    fn instantiate(&self, definition: &ServiceDefinition) -> Result<Arc<dyn Service>> {
        debug!(service = %definition.id(), "instantiating service");
        let instance = (definition.factory())(self)?;
        for call in definition.method_calls() {
            debug!(
                service = %definition.id(),
                method = call.method(),
                argument = %call.argument(),
                "replaying deferred call"
            );
            let lazy = self.lazy_reference(call.argument().id().clone());
            instance.apply_deferred_call(call.method(), lazy)?;
        }
        Ok(instance)
    }

    fn enter_resolution(&self, id: &ServiceId) -> Result<()> {
        let mut resolving = self.inner.resolving.lock();
        if resolving.contains(id) {
            let chain = resolving
                .iter()
                .map(ServiceId::as_str)
                .chain(std::iter::once(id.as_str()))
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(Error::circular_dependency(chain));
        }
        resolving.push(id.clone());
        Ok(())
    }

    fn leave_resolution(&self, id: &ServiceId) {
        let mut resolving = self.inner.resolving.lock();
        if let Some(position) = resolving.iter().rposition(|entry| entry == id) {
            resolving.remove(position);
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("services", &self.inner.definitions.len())
            .field("instantiated", &self.inner.instances.lock().len())
            .finish()
    }
}

/// Runtime lazy reference to a container service
///
/// Created when a deferred call is replayed (or via
/// [`Container::lazy_reference`]); resolves to the live instance only when
/// asked, constructing it on first resolution.
#[derive(Clone)]
pub struct LazyService {
    container: Weak<ContainerInner>,
    id: ServiceId,
}

impl LazyService {
    /// The referenced service id
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Resolve the referenced service
    pub fn resolve(&self) -> Result<Arc<dyn Service>> {
        let inner = self.container.upgrade().ok_or_else(|| {
            Error::internal(format!(
                "container was released before lazy reference '{}' was resolved",
                self.id
            ))
        })?;
        Container::from_inner(inner).get(self.id.as_str())
    }

    /// Resolve the referenced service and downcast it
    pub fn resolve_as<T: Service>(&self) -> Result<Arc<T>> {
        self.resolve()?
            .downcast_arc::<T>()
            .map_err(|_| Error::type_mismatch(self.id.as_str()))
    }
}

impl fmt::Debug for LazyService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyService").field("id", &self.id).finish()
    }
}
