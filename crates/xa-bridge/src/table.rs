use std::any::type_name;
use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use crate::error::{BridgeError, BridgeResult};

type FieldFn<T> = Box<dyn Fn(&T) -> BridgeResult<Value>>;
type MethodFn<T> = Box<dyn Fn(&mut T, &[Value]) -> BridgeResult<Value>>;
type StaticFn = Box<dyn Fn(&[Value]) -> BridgeResult<Value>>;

/// Types that expose members to the bridge.
///
/// Implement this next to the type so the accessors can reach private items.
pub trait Reflect: Sized + 'static {
    fn reflect(table: &mut MemberTable<Self>);
}

/// Accessors a type registers for the bridge, keyed by member name.
pub struct MemberTable<T> {
    type_name: &'static str,
    pub(crate) fields: BTreeMap<String, FieldFn<T>>,
    pub(crate) methods: BTreeMap<String, MethodFn<T>>,
    pub(crate) statics: BTreeMap<String, StaticFn>,
    pub(crate) constants: BTreeMap<String, Value>,
}

impl<T: 'static> MemberTable<T> {
    pub fn new() -> Self {
        Self {
            type_name: type_name::<T>(),
            fields: BTreeMap::new(),
            methods: BTreeMap::new(),
            statics: BTreeMap::new(),
            constants: BTreeMap::new(),
        }
    }

    /// Full path of the reflected type.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Register a readable field. The getter's result is serialized on read.
    pub fn field<V, F>(&mut self, name: &str, get: F) -> &mut Self
    where
        V: Serialize,
        F: Fn(&T) -> V + 'static,
    {
        let member = name.to_string();
        self.fields.insert(
            name.to_string(),
            Box::new(move |target| to_json(&member, get(target))),
        );
        self
    }

    /// Register an instance method.
    pub fn method<F>(&mut self, name: &str, call: F) -> &mut Self
    where
        F: Fn(&mut T, &[Value]) -> BridgeResult<Value> + 'static,
    {
        self.methods.insert(name.to_string(), Box::new(call));
        self
    }

    /// Register an associated function, callable without an instance.
    pub fn static_method<F>(&mut self, name: &str, call: F) -> &mut Self
    where
        F: Fn(&[Value]) -> BridgeResult<Value> + 'static,
    {
        self.statics.insert(name.to_string(), Box::new(call));
        self
    }

    /// Register an associated constant.
    pub fn constant(&mut self, name: &str, value: impl Into<Value>) -> &mut Self {
        self.constants.insert(name.to_string(), value.into());
        self
    }
}

impl<T: Reflect> MemberTable<T> {
    /// The table `T` registers.
    pub fn build() -> Self {
        let mut table = Self::new();
        T::reflect(&mut table);
        table
    }
}

impl<T: 'static> Default for MemberTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

pub(crate) fn to_json<V: Serialize>(member: &str, value: V) -> BridgeResult<Value> {
    serde_json::to_value(value).map_err(|e| BridgeError::Serialization {
        member: member.to_string(),
        reason: e.to_string(),
    })
}
