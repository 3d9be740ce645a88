use std::any::type_name;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Names of types known to exist, for `Kind::ExistingType` assertions.
///
/// Rust keeps no runtime registry of type names, so tests register the
/// types they want to be able to name.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeRegistry {
    names: BTreeSet<String>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `T` under its full path, e.g. `alloc::string::String`.
    pub fn register<T: ?Sized>(&mut self) -> &mut Self {
        self.names.insert(type_name::<T>().to_string());
        self
    }

    /// Register an arbitrary name.
    pub fn register_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.names.insert(name.into());
        self
    }

    /// Builder form of [`Self::register`].
    pub fn with<T: ?Sized>(mut self) -> Self {
        self.register::<T>();
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Registered names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Widget;

    #[test]
    fn registers_full_type_paths() {
        let registry = TypeRegistry::new().with::<Widget>().with::<String>();
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(type_name::<Widget>()));
        assert!(registry.contains("alloc::string::String"));
        assert!(!registry.contains("Widget"));
    }

    #[test]
    fn registers_plain_names() {
        let mut registry = TypeRegistry::new();
        registry.register_name("Widget").register_name("Gadget");
        let names: Vec<&str> = registry.names().collect();
        assert_eq!(names, vec!["Gadget", "Widget"]);
    }

    #[test]
    fn serializes_as_a_sorted_name_list() {
        let mut registry = TypeRegistry::new();
        registry.register_name("b::Beta").register_name("a::Alpha");
        let json = serde_json::to_value(&registry).unwrap();
        assert_eq!(json, serde_json::json!(["a::Alpha", "b::Beta"]));

        let back: TypeRegistry = serde_json::from_value(json).unwrap();
        assert_eq!(back, registry);
    }
}
