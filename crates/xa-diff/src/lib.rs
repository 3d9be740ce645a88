//! Structural diff engine for extra-asserts.
//!
//! Compares two nested mappings and reports where they disagree, as a count,
//! as a flat report of entries, or as a tree shaped like the inputs. Leaf
//! values are compared strictly: kind first, then value.
//!
//! # Key Types
//!
//! - [`DiffReport`] / [`DiffEntry`] -- Flat list of differences with key paths
//! - [`DiffOptions`] / [`KeyCoverage`] -- How keys present on one side only are handled
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use xa_diff::{count_differences, diff_tree};
//!
//! let left = json!({"a": 1, "b": {"c": 2, "d": 3}});
//! let right = json!({"a": 1, "b": {"c": 2, "d": 4}});
//! let (left, right) = (left.as_object().unwrap(), right.as_object().unwrap());
//!
//! assert_eq!(count_differences(left, right), 1);
//! assert_eq!(serde_json::Value::Object(diff_tree(left, right)), json!({"b": {"d": 3}}));
//! ```

pub mod engine;
pub mod error;
pub mod options;
pub mod render;
pub mod report;

pub use engine::{
    count_differences, count_differences_with, diff_report, diff_report_with, diff_tree,
    diff_tree_with, diff_values, equals, equals_with,
};
pub use error::{DiffError, DiffResult, Side};
pub use options::{DiffOptions, KeyCoverage};
pub use render::{find_with_key_value, render_tree, DEFAULT_INDENT_BLOCK};
pub use report::{DiffEntry, DiffReport};
