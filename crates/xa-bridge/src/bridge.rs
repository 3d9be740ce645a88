use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::error::{BridgeError, BridgeResult, MemberKind};
use crate::table::{MemberTable, Reflect};

/// What a method call is made on: an instance, or the type alone.
pub enum Target<'a, T> {
    Instance(&'a mut T),
    Type,
}

/// Names of a type's registered members, sorted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemberListing {
    pub type_name: String,
    pub fields: Vec<String>,
    pub methods: Vec<String>,
    pub static_methods: Vec<String>,
    pub constants: Vec<String>,
}

/// Entry points for reaching registered members.
pub struct Bridge;

impl Bridge {
    /// Read a registered field of `target`.
    pub fn get_property<T: Reflect>(target: &T, name: &str) -> BridgeResult<Value> {
        let table = MemberTable::<T>::build();
        debug!(type_name = table.type_name(), member = name, "bridge field read");
        let getter = table
            .fields
            .get(name)
            .ok_or_else(|| unknown(&table, name, MemberKind::Field))?;
        getter(target)
    }

    /// Call a registered method.
    ///
    /// On an instance, instance methods are looked up first, then associated
    /// functions. On the type alone only associated functions resolve.
    pub fn call_method<T: Reflect>(
        target: Target<'_, T>,
        name: &str,
        args: &[Value],
    ) -> BridgeResult<Value> {
        let table = MemberTable::<T>::build();
        debug!(
            type_name = table.type_name(),
            member = name,
            args = args.len(),
            "bridge method call"
        );

        match target {
            Target::Instance(instance) => {
                if let Some(method) = table.methods.get(name) {
                    return method(instance, args);
                }
            }
            Target::Type => {
                if table.methods.contains_key(name) {
                    return Err(BridgeError::InstanceRequired {
                        type_name: table.type_name(),
                        member: name.to_string(),
                    });
                }
            }
        }

        let call = table
            .statics
            .get(name)
            .ok_or_else(|| unknown(&table, name, MemberKind::Method))?;
        call(args)
    }

    /// Call a registered associated function.
    pub fn call_static<T: Reflect>(name: &str, args: &[Value]) -> BridgeResult<Value> {
        Self::call_method::<T>(Target::Type, name, args)
    }

    /// Read a registered constant.
    pub fn get_constant<T: Reflect>(name: &str) -> BridgeResult<Value> {
        let table = MemberTable::<T>::build();
        table
            .constants
            .get(name)
            .cloned()
            .ok_or_else(|| unknown(&table, name, MemberKind::Constant))
    }

    /// Everything `T` registers.
    pub fn members<T: Reflect>() -> MemberListing {
        let table = MemberTable::<T>::build();
        MemberListing {
            type_name: table.type_name().to_string(),
            fields: table.fields.keys().cloned().collect(),
            methods: table.methods.keys().cloned().collect(),
            static_methods: table.statics.keys().cloned().collect(),
            constants: table.constants.keys().cloned().collect(),
        }
    }
}

/// Decode positional argument `index` of a call to `member`.
pub fn arg<A: DeserializeOwned>(args: &[Value], index: usize, member: &str) -> BridgeResult<A> {
    let raw = args.get(index).ok_or_else(|| BridgeError::Argument {
        member: member.to_string(),
        index,
        reason: "missing".into(),
    })?;
    serde_json::from_value(raw.clone()).map_err(|e| BridgeError::Argument {
        member: member.to_string(),
        index,
        reason: e.to_string(),
    })
}

fn unknown<T: 'static>(table: &MemberTable<T>, name: &str, kind: MemberKind) -> BridgeError {
    BridgeError::UnknownMember {
        type_name: table.type_name(),
        member: name.to_string(),
        kind,
    }
}
