use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// How keys present on only one side of a comparison are accounted for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCoverage {
    /// Keys on either side are enumerated individually at every depth.
    #[default]
    Bidirectional,
    /// Traversal follows the left mapping's keys. Keys that exist only on
    /// the right are counted in aggregate, per level, as the surplus of the
    /// right key count over the left one, and are never named.
    ///
    /// The count stays symmetric: each level contributes the larger of the
    /// two one-sided key counts plus the shared differences. Only the keys
    /// named in the report and in `diff_tree` depend on operand order.
    LeftDriven,
}

/// Options for a structural comparison.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffOptions {
    /// Handling of one-sided keys.
    pub coverage: KeyCoverage,
    /// Keys skipped on both sides at every depth, as if they never existed.
    pub ignored_keys: BTreeSet<String>,
}

impl DiffOptions {
    /// Left-driven coverage with size correction, as older releases counted.
    pub fn legacy() -> Self {
        Self {
            coverage: KeyCoverage::LeftDriven,
            ..Default::default()
        }
    }

    /// Add keys to the ignore list.
    pub fn ignoring<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignored_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Returns `true` if `key` is on the ignore list.
    pub fn is_ignored(&self, key: &str) -> bool {
        self.ignored_keys.contains(key)
    }
}
