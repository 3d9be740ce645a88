//! Validators for extra-asserts.
//!
//! Two independent checks live here: runtime type assertions over anything
//! implementing [`Typed`](xa_types::Typed), and RFC3339 time stamp validation.
//!
//! # Quick Start
//!
//! ```rust
//! use xa_validate::{TypeValidator, is_rfc3339};
//! use xa_types::Kind;
//!
//! let validator = TypeValidator::new();
//! assert!(validator.assert_is_type(&42, &[Kind::Integer], None).is_ok());
//! assert!(validator.assert_is_type(&42, &[Kind::String], Some("count")).is_err());
//!
//! assert!(is_rfc3339("2022-01-01T10:00:00Z"));
//! assert!(!is_rfc3339("2022-01-01"));
//! ```

pub mod error;
pub mod registry;
pub mod rfc3339;
pub mod validator;

pub use error::{ValidateError, ValidateResult};
pub use registry::TypeRegistry;
pub use rfc3339::{is_rfc3339, parse_rfc3339, validate_rfc3339};
pub use validator::{
    assert_is_array, assert_is_bool, assert_is_float, assert_is_integer, assert_is_object,
    assert_is_string, TypeValidator,
};
