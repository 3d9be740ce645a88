use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::container::Mapping;

/// The runtime kind of a value.
///
/// `ExistingType` is artificial: no value has it as its own kind. A type
/// assertion allowing it is satisfied by a string naming a registered type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Kind {
    Array,
    Bool,
    Float,
    Integer,
    Null,
    Object,
    String,
    ExistingType,
}

impl Kind {
    /// Lowercase name used in messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Array => "array",
            Kind::Bool => "bool",
            Kind::Float => "float",
            Kind::Integer => "integer",
            Kind::Null => "null",
            Kind::Object => "object",
            Kind::String => "string",
            Kind::ExistingType => "existing_type",
        }
    }

    /// Kind of a JSON value.
    pub fn of_value(value: &Value) -> Kind {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(n) if n.is_f64() => Kind::Float,
            Value::Number(_) => Kind::Integer,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values whose runtime kind can be inspected.
pub trait Typed {
    /// The kind of this value.
    fn kind(&self) -> Kind;

    /// The type name this value refers to, if it is a string.
    fn as_type_name(&self) -> Option<&str> {
        None
    }
}

impl Typed for Value {
    fn kind(&self) -> Kind {
        Kind::of_value(self)
    }

    fn as_type_name(&self) -> Option<&str> {
        self.as_str()
    }
}

impl Typed for Mapping {
    fn kind(&self) -> Kind {
        Kind::Object
    }
}

impl Typed for bool {
    fn kind(&self) -> Kind {
        Kind::Bool
    }
}

impl Typed for str {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn as_type_name(&self) -> Option<&str> {
        Some(self)
    }
}

impl Typed for String {
    fn kind(&self) -> Kind {
        Kind::String
    }

    fn as_type_name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }

    fn as_type_name(&self) -> Option<&str> {
        (**self).as_type_name()
    }
}

impl<T: Typed> Typed for Option<T> {
    fn kind(&self) -> Kind {
        match self {
            Some(inner) => inner.kind(),
            None => Kind::Null,
        }
    }

    fn as_type_name(&self) -> Option<&str> {
        self.as_ref().and_then(Typed::as_type_name)
    }
}

impl<T> Typed for [T] {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

impl<T> Typed for Vec<T> {
    fn kind(&self) -> Kind {
        Kind::Array
    }
}

macro_rules! typed_as {
    ($kind:expr => $($ty:ty),+ $(,)?) => {
        $(
            impl Typed for $ty {
                fn kind(&self) -> Kind {
                    $kind
                }
            }
        )+
    };
}

typed_as!(Kind::Integer => i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
typed_as!(Kind::Float => f32, f64);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_kinds() {
        assert_eq!(json!(null).kind(), Kind::Null);
        assert_eq!(json!(true).kind(), Kind::Bool);
        assert_eq!(json!(42).kind(), Kind::Integer);
        assert_eq!(json!(-42).kind(), Kind::Integer);
        assert_eq!(json!(4.2).kind(), Kind::Float);
        assert_eq!(json!("x").kind(), Kind::String);
        assert_eq!(json!([1]).kind(), Kind::Array);
        assert_eq!(json!({"a": 1}).kind(), Kind::Object);
    }

    #[test]
    fn native_kinds() {
        assert_eq!(42i32.kind(), Kind::Integer);
        assert_eq!(7u8.kind(), Kind::Integer);
        assert_eq!(1.5f64.kind(), Kind::Float);
        assert_eq!(false.kind(), Kind::Bool);
        assert_eq!("abc".kind(), Kind::String);
        assert_eq!(String::from("abc").kind(), Kind::String);
        assert_eq!(vec![1, 2].kind(), Kind::Array);
        assert_eq!(None::<i32>.kind(), Kind::Null);
        assert_eq!(Some(3i64).kind(), Kind::Integer);
    }

    #[test]
    fn type_names_come_from_strings_only() {
        assert_eq!("alloc::string::String".as_type_name(), Some("alloc::string::String"));
        assert_eq!(json!("Foo").as_type_name(), Some("Foo"));
        assert_eq!(json!(1).as_type_name(), None);
        assert_eq!(42u32.as_type_name(), None);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Kind::Integer.to_string(), "integer");
        assert_eq!(Kind::ExistingType.to_string(), "existing_type");
    }
}
