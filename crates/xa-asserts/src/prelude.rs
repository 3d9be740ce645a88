//! One-line import for test modules: `use xa_asserts::prelude::*;`

pub use crate::arrays::{
    assert_array_equals, assert_array_has_key_value, assert_array_has_keys,
    assert_arrays_have_differences, assert_arrays_have_differences_with, assert_mass_equals,
    check_array_equals, check_array_has_key_value, check_array_has_keys,
    check_arrays_have_differences, check_arrays_have_differences_with, check_mass_equals,
    print_array,
};
pub use crate::error::{AssertError, AssertResult, AssertionFailure};
pub use crate::timestamps::{
    assert_rfc3339, assert_rfc3339_or_none, check_rfc3339, check_rfc3339_or_none,
};

// Re-export key types
pub use xa_bridge::{arg, Bridge, MemberTable, Reflect, Target};
pub use xa_diff::{
    count_differences, count_differences_with, diff_report, diff_report_with, diff_tree,
    diff_tree_with, equals, equals_with, find_with_key_value, render_tree, DiffEntry, DiffOptions,
    DiffReport, KeyCoverage,
};
pub use xa_gen::{Generator, GeneratorConfig};
pub use xa_types::{KeyPath, Kind, Mapping, Typed};
pub use xa_validate::{
    assert_is_array, assert_is_bool, assert_is_float, assert_is_integer, assert_is_object,
    assert_is_string, is_rfc3339, parse_rfc3339, validate_rfc3339, TypeRegistry, TypeValidator,
};
