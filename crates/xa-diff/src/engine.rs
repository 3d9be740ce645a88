//! Recursive structural comparison of nested mappings.
//!
//! Traversal follows the left mapping's keys. A key missing from the right
//! counts once. When both values are containers the comparison recurses;
//! otherwise the values are compared strictly and a mismatch counts once.
//! Right-only keys are handled according to [`KeyCoverage`].

use serde_json::Value;
use tracing::debug;
use xa_types::{strictly_equal, Container, Kind, KeyPath, Mapping};

use crate::error::{DiffError, DiffResult, Side};
use crate::options::{DiffOptions, KeyCoverage};
use crate::report::{DiffEntry, DiffReport};

/// Compare two mappings and list every difference.
pub fn diff_report(left: &Mapping, right: &Mapping) -> DiffReport {
    diff_report_with(left, right, &DiffOptions::default())
}

/// Compare two mappings with explicit options.
pub fn diff_report_with(left: &Mapping, right: &Mapping, options: &DiffOptions) -> DiffReport {
    let mut entries = Vec::new();
    walk(
        Container::Map(left),
        Container::Map(right),
        &KeyPath::root(),
        options,
        &mut entries,
    );
    let report = DiffReport { entries };
    debug!(
        count = report.count(),
        entries = report.len(),
        coverage = ?options.coverage,
        "structural diff computed"
    );
    report
}

/// Number of positions at which two mappings disagree.
///
/// `0` means both mappings hold the same keys at every level with strictly
/// identical leaves, in any insertion order.
pub fn count_differences(left: &Mapping, right: &Mapping) -> usize {
    count_differences_with(left, right, &DiffOptions::default())
}

/// [`count_differences`] with explicit options.
pub fn count_differences_with(left: &Mapping, right: &Mapping, options: &DiffOptions) -> usize {
    diff_report_with(left, right, options).count()
}

/// Returns `true` if the mappings have no differences.
pub fn equals(left: &Mapping, right: &Mapping) -> bool {
    count_differences(left, right) == 0
}

/// [`equals`] with explicit options.
pub fn equals_with(left: &Mapping, right: &Mapping, options: &DiffOptions) -> bool {
    count_differences_with(left, right, options) == 0
}

/// The differing part of `left`: only keys whose values differ, with the
/// left value. Nested mappings without differences are pruned, and keys
/// found only in `right` never appear.
pub fn diff_tree(left: &Mapping, right: &Mapping) -> Mapping {
    diff_tree_with(left, right, &DiffOptions::default())
}

/// [`diff_tree`] with explicit options.
pub fn diff_tree_with(left: &Mapping, right: &Mapping, options: &DiffOptions) -> Mapping {
    diff_report_with(left, right, options).to_tree()
}

/// Compare two untyped values. Both must be objects or arrays.
pub fn diff_values(left: &Value, right: &Value, options: &DiffOptions) -> DiffResult<DiffReport> {
    let l = Container::of(left).ok_or(DiffError::NotAContainer {
        side: Side::Left,
        found: Kind::of_value(left),
    })?;
    let r = Container::of(right).ok_or(DiffError::NotAContainer {
        side: Side::Right,
        found: Kind::of_value(right),
    })?;

    let mut entries = Vec::new();
    walk(l, r, &KeyPath::root(), options, &mut entries);
    Ok(DiffReport { entries })
}

fn walk(
    left: Container<'_>,
    right: Container<'_>,
    path: &KeyPath,
    options: &DiffOptions,
    entries: &mut Vec<DiffEntry>,
) {
    if options.coverage == KeyCoverage::LeftDriven {
        let left_len = visible_len(left, options);
        let right_len = visible_len(right, options);
        if right_len > left_len {
            entries.push(DiffEntry::Surplus {
                path: path.clone(),
                count: right_len - left_len,
            });
        }
    }

    for (key, left_value) in left.entries() {
        if options.is_ignored(&key) {
            continue;
        }
        let child = path.child(key.as_ref());

        let Some(right_value) = right.get(&key) else {
            entries.push(DiffEntry::Missing {
                path: child,
                left: left_value.clone(),
            });
            continue;
        };

        match (Container::of(left_value), Container::of(right_value)) {
            (Some(l), Some(r)) => walk(l, r, &child, options, entries),
            _ => {
                if !strictly_equal(left_value, right_value) {
                    entries.push(DiffEntry::Changed {
                        path: child,
                        left: left_value.clone(),
                        right: right_value.clone(),
                    });
                }
            }
        }
    }

    if options.coverage == KeyCoverage::Bidirectional {
        for (key, right_value) in right.entries() {
            if options.is_ignored(&key) || left.contains_key(&key) {
                continue;
            }
            entries.push(DiffEntry::Extra {
                path: path.child(key.as_ref()),
                right: right_value.clone(),
            });
        }
    }
}

fn visible_len(container: Container<'_>, options: &DiffOptions) -> usize {
    if options.ignored_keys.is_empty() {
        return container.len();
    }
    container
        .entries()
        .filter(|(k, _)| !options.is_ignored(k))
        .count()
}
