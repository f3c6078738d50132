//! Build-time service descriptors
//!
//! A `ServiceDefinition` is the blueprint the container compiles from: an
//! id, a factory, the tags other components discover it by, and the ordered
//! list of deferred method calls to replay once the service exists. None of
//! these types hold instances; a `ServiceRef` in particular is only an id
//! that becomes resolvable when the container replays the call it belongs
//! to.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use sash_domain::error::Result;
use sash_domain::value_objects::ServiceId;

use crate::container::Container;
use crate::service::Service;

/// String key/value metadata attached to a tag on a definition
pub type TagAttributes = BTreeMap<String, String>;

/// Factory closure that builds a service instance from the running container
pub type ServiceFactory = Arc<dyn Fn(&Container) -> Result<Arc<dyn Service>> + Send + Sync>;

/// Definition-level lazy reference to another service
///
/// Carries nothing but the target id. It is turned into a resolvable
/// [`LazyService`](crate::container::LazyService) only when the deferred
/// call holding it is replayed against a live container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceRef {
    id: ServiceId,
}

impl ServiceRef {
    /// Create a reference to the given service id
    pub fn new(id: impl Into<ServiceId>) -> Self {
        Self { id: id.into() }
    }

    /// The referenced service id
    pub fn id(&self) -> &ServiceId {
        &self.id
    }
}

impl fmt::Display for ServiceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.id)
    }
}

/// A recorded `(method, argument)` instruction, replayed at instantiation
///
/// Immutable once appended to a definition; the container replays the
/// definition's calls in append order, exactly once per service instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeferredCall {
    method: String,
    argument: ServiceRef,
}

impl DeferredCall {
    /// Record a call to `method` with a lazy reference argument
    pub fn new(method: impl Into<String>, argument: ServiceRef) -> Self {
        Self {
            method: method.into(),
            argument,
        }
    }

    /// The method name to invoke on the instantiated service
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The lazy reference passed as the call's argument
    pub fn argument(&self) -> &ServiceRef {
        &self.argument
    }
}

/// Blueprint for one service in the container
pub struct ServiceDefinition {
    id: ServiceId,
    factory: ServiceFactory,
    tags: IndexMap<String, TagAttributes>,
    method_calls: Vec<DeferredCall>,
}

impl ServiceDefinition {
    /// Create a definition with the given id and factory
    pub fn new<F>(id: impl Into<ServiceId>, factory: F) -> Self
    where
        F: Fn(&Container) -> Result<Arc<dyn Service>> + Send + Sync + 'static,
    {
        Self {
            id: id.into(),
            factory: Arc::new(factory),
            tags: IndexMap::new(),
            method_calls: Vec::new(),
        }
    }

    /// Attach a tag with no attributes
    pub fn with_tag(self, tag: impl Into<String>) -> Self {
        self.with_tag_attributes(tag, TagAttributes::new())
    }

    /// Attach a tag with attributes
    pub fn with_tag_attributes(mut self, tag: impl Into<String>, attributes: TagAttributes) -> Self {
        self.tags.insert(tag.into(), attributes);
        self
    }

    /// The service id
    pub fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Whether the definition carries the given tag
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains_key(tag)
    }

    /// The attributes of a tag, if the definition carries it
    pub fn tag_attributes(&self, tag: &str) -> Option<&TagAttributes> {
        self.tags.get(tag)
    }

    /// All tags on the definition, in attachment order
    pub fn tags(&self) -> impl Iterator<Item = (&str, &TagAttributes)> {
        self.tags.iter().map(|(tag, attrs)| (tag.as_str(), attrs))
    }

    /// Append a deferred method call to replay at instantiation time
    ///
    /// Calls are replayed in append order; appending never deduplicates, so
    /// recording the same call twice replays it twice.
    pub fn add_method_call(&mut self, method: impl Into<String>, argument: ServiceRef) -> &mut Self {
        self.method_calls.push(DeferredCall::new(method, argument));
        self
    }

    /// The recorded deferred calls, in append order
    pub fn method_calls(&self) -> &[DeferredCall] {
        &self.method_calls
    }

    pub(crate) fn factory(&self) -> &ServiceFactory {
        &self.factory
    }
}

impl fmt::Debug for ServiceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceDefinition")
            .field("id", &self.id)
            .field("tags", &self.tags.keys().collect::<Vec<_>>())
            .field("method_calls", &self.method_calls)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::Service;

    struct Noop;

    impl Service for Noop {}

    fn definition(id: &str) -> ServiceDefinition {
        ServiceDefinition::new(id, |_| Ok(Arc::new(Noop)))
    }

    #[test]
    fn test_tags_preserve_attachment_order() {
        let def = definition("svc")
            .with_tag("console.command")
            .with_tag("platform.internal");

        let tags: Vec<&str> = def.tags().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["console.command", "platform.internal"]);
        assert!(def.has_tag("console.command"));
        assert!(!def.has_tag("missing"));
    }

    #[test]
    fn test_tag_attributes_are_retrievable() {
        let mut attributes = TagAttributes::new();
        attributes.insert("priority".to_string(), "10".to_string());
        let def = definition("svc").with_tag_attributes("console.command", attributes);

        let attrs = def.tag_attributes("console.command").expect("tag present");
        assert_eq!(attrs.get("priority").map(String::as_str), Some("10"));
    }

    #[test]
    fn test_method_calls_append_in_order_without_dedup() {
        let mut def = definition("command.registry");
        def.add_method_call("add_command_reference", ServiceRef::new("cmd.a"));
        def.add_method_call("add_command_reference", ServiceRef::new("cmd.b"));
        def.add_method_call("add_command_reference", ServiceRef::new("cmd.a"));

        let recorded: Vec<&str> = def
            .method_calls()
            .iter()
            .map(|call| call.argument().id().as_str())
            .collect();
        assert_eq!(recorded, vec!["cmd.a", "cmd.b", "cmd.a"]);
        assert!(def
            .method_calls()
            .iter()
            .all(|call| call.method() == "add_command_reference"));
    }

    #[test]
    fn test_service_ref_displays_with_at_prefix() {
        assert_eq!(ServiceRef::new("cmd.a").to_string(), "@cmd.a");
    }
}
