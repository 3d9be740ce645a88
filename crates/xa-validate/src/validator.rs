use tracing::debug;
use xa_types::{Kind, Typed};

use crate::error::{ValidateError, ValidateResult};
use crate::registry::TypeRegistry;

/// Checks that values have one of a set of allowed kinds.
#[derive(Clone, Debug, Default)]
pub struct TypeValidator {
    registry: TypeRegistry,
}

impl TypeValidator {
    /// A validator with an empty type registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A validator that resolves `Kind::ExistingType` against `registry`.
    pub fn with_registry(registry: TypeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut TypeRegistry {
        &mut self.registry
    }

    /// Fail unless the kind of `value` is one of `allowed`.
    ///
    /// `Kind::ExistingType` in `allowed` accepts a string naming a registered
    /// type; any other value is then checked against the remaining kinds.
    /// `var_name` labels the value in the error message.
    pub fn assert_is_type<T: Typed + ?Sized>(
        &self,
        value: &T,
        allowed: &[Kind],
        var_name: Option<&str>,
    ) -> ValidateResult<()> {
        if allowed.is_empty() {
            return Err(ValidateError::EmptyAllowedKinds);
        }

        let allows_existing = allowed.contains(&Kind::ExistingType);
        if allows_existing
            && value
                .as_type_name()
                .is_some_and(|name| self.registry.contains(name))
        {
            return Ok(());
        }

        let found = value.kind();
        let remaining: Vec<Kind> = allowed
            .iter()
            .copied()
            .filter(|k| *k != Kind::ExistingType)
            .collect();
        if remaining.contains(&found) {
            return Ok(());
        }

        // With only `ExistingType` allowed, report against it rather than an
        // empty list.
        let expected = if remaining.is_empty() {
            vec![Kind::ExistingType]
        } else {
            remaining
        };
        debug!(var = ?var_name, %found, ?expected, "type assertion failed");
        Err(ValidateError::TypeMismatch {
            var_name: var_name.map(str::to_string),
            expected,
            found,
        })
    }

    /// Fail unless `value` is an object or a string naming a registered type.
    pub fn assert_is_object_or_existing_type<T: Typed + ?Sized>(
        &self,
        value: &T,
        var_name: Option<&str>,
    ) -> ValidateResult<()> {
        self.assert_is_type(value, &[Kind::ExistingType, Kind::Object], var_name)
    }
}

macro_rules! single_kind_assertion {
    ($(#[$doc:meta] $name:ident => $kind:expr;)+) => {
        $(
            #[$doc]
            pub fn $name<T: Typed + ?Sized>(value: &T, var_name: Option<&str>) -> ValidateResult<()> {
                TypeValidator::new().assert_is_type(value, &[$kind], var_name)
            }
        )+
    };
}

single_kind_assertion! {
    /// Fail unless `value` is an array.
    assert_is_array => Kind::Array;
    /// Fail unless `value` is a bool.
    assert_is_bool => Kind::Bool;
    /// Fail unless `value` is a float.
    assert_is_float => Kind::Float;
    /// Fail unless `value` is an integer.
    assert_is_integer => Kind::Integer;
    /// Fail unless `value` is an object.
    assert_is_object => Kind::Object;
    /// Fail unless `value` is a string.
    assert_is_string => Kind::String;
}
