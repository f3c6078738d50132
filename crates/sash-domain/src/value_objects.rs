//! Shared value objects

use std::borrow::Borrow;
use std::fmt;
use std::sync::Arc;

/// Identifier of a service in the container's definition graph.
///
/// Ids are plain strings on the wire (`"command.registry"`,
/// `"command.list"`) and are compared byte-for-byte. Cloning is cheap;
/// the backing string is shared.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ServiceId(Arc<str>);

impl ServiceId {
    /// Create a service id from any string-like value
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ServiceId({:?})", &*self.0)
    }
}

impl From<&str> for ServiceId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ServiceId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Allows map lookups keyed by ServiceId to accept plain &str.
impl Borrow<str> for ServiceId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_service_id_round_trips_through_display() {
        let id = ServiceId::from("command.registry");
        assert_eq!(id.to_string(), "command.registry");
        assert_eq!(id.as_str(), "command.registry");
    }

    #[test]
    fn test_service_id_borrows_as_str_for_map_lookup() {
        let mut map = HashMap::new();
        map.insert(ServiceId::from("cmd.a"), 1);
        assert_eq!(map.get("cmd.a"), Some(&1));
    }

    #[test]
    fn test_service_ids_compare_by_content() {
        assert_eq!(ServiceId::from("cmd.a"), ServiceId::new(String::from("cmd.a")));
        assert_ne!(ServiceId::from("cmd.a"), ServiceId::from("cmd.b"));
    }
}
