//! Extra assertions for Rust tests.
//!
//! Provides the assertions the standard `assert!` family lacks for nested
//! key-value data: order-independent mapping equality, exact difference
//! counts, key presence, recursive key-by-key comparison, and RFC3339 time
//! stamp checks. Every assertion comes in two forms:
//!
//! - `check_*` returns `Result<(), AssertionFailure>` so callers can inspect
//!   the failure,
//! - `assert_*` panics with the failure message, reported at the caller.
//!
//! The structural diff engine, validators, fixture generators and member
//! access bridge are re-exported as modules and through [`prelude`].
//!
//! # Quick Start
//!
//! ```rust
//! use serde_json::json;
//! use xa_asserts::prelude::*;
//!
//! let expected = json!({"id": 7, "tags": {"a": true, "b": false}});
//! let actual = json!({"tags": {"b": false, "a": true}, "id": 7});
//! let (expected, actual) = (expected.as_object().unwrap(), actual.as_object().unwrap());
//!
//! assert_array_equals(expected, actual, None);
//! assert_rfc3339("2022-01-01T10:00:00Z", None);
//! ```

pub mod arrays;
pub mod error;
pub mod prelude;
pub mod timestamps;

pub use arrays::{
    assert_array_equals, assert_array_has_key_value, assert_array_has_keys,
    assert_arrays_have_differences, assert_arrays_have_differences_with, assert_mass_equals,
    check_array_equals, check_array_has_key_value, check_array_has_keys,
    check_arrays_have_differences, check_arrays_have_differences_with, check_mass_equals,
    print_array,
};
pub use error::{fail, AssertError, AssertResult, AssertionFailure};
pub use timestamps::{assert_rfc3339, assert_rfc3339_or_none, check_rfc3339, check_rfc3339_or_none};

pub use xa_bridge as bridge;
pub use xa_diff as diff;
pub use xa_gen as fixtures;
pub use xa_types as types;
pub use xa_validate as validate;
