//! Flat difference report between two nested mappings.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use xa_types::{KeyPath, Mapping};

/// The result of comparing two nested mappings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DiffReport {
    /// The differences, in traversal order.
    pub entries: Vec<DiffEntry>,
}

/// A single difference between two nested mappings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiffEntry {
    /// The key exists on the left only.
    Missing { path: KeyPath, left: Value },
    /// The key exists on the right only.
    Extra { path: KeyPath, right: Value },
    /// Both sides hold the key with strictly different values.
    Changed {
        path: KeyPath,
        left: Value,
        right: Value,
    },
    /// The right mapping at `path` holds `count` more keys than the left one.
    /// Only produced under left-driven coverage.
    Surplus { path: KeyPath, count: usize },
}

impl DiffEntry {
    /// Where the difference is.
    pub fn path(&self) -> &KeyPath {
        match self {
            DiffEntry::Missing { path, .. }
            | DiffEntry::Extra { path, .. }
            | DiffEntry::Changed { path, .. }
            | DiffEntry::Surplus { path, .. } => path,
        }
    }

    /// How many differences this entry stands for.
    pub fn weight(&self) -> usize {
        match self {
            DiffEntry::Surplus { count, .. } => *count,
            _ => 1,
        }
    }

    /// The left operand's value, for entries that have one.
    pub fn left(&self) -> Option<&Value> {
        match self {
            DiffEntry::Missing { left, .. } | DiffEntry::Changed { left, .. } => Some(left),
            _ => None,
        }
    }
}

impl DiffReport {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the mappings are equal.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Total number of differences, with surplus entries weighted by their count.
    pub fn count(&self) -> usize {
        self.entries.iter().map(DiffEntry::weight).sum()
    }

    /// Number of keys found on the left only.
    pub fn missing(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Missing { .. }))
            .count()
    }

    /// Number of keys found on the right only.
    pub fn extras(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Extra { .. }))
            .count()
    }

    /// Number of keys whose values differ.
    pub fn changed(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, DiffEntry::Changed { .. }))
            .count()
    }

    /// Build a mapping shaped like the inputs holding only the differing
    /// keys, each with its left value. Right-only keys have no left value and
    /// are left out.
    pub fn to_tree(&self) -> Mapping {
        let mut tree = Mapping::new();
        for entry in &self.entries {
            if let Some(value) = entry.left() {
                insert_at(&mut tree, entry.path().segments(), value.clone());
            }
        }
        tree
    }
}

fn insert_at(tree: &mut Mapping, segments: &[String], value: Value) {
    let Some((last, parents)) = segments.split_last() else {
        return;
    };
    let mut cursor = tree;
    for segment in parents {
        let slot = cursor
            .entry(segment.clone())
            .or_insert_with(|| Value::Object(Mapping::new()));
        if !slot.is_object() {
            *slot = Value::Object(Mapping::new());
        }
        let Value::Object(next) = slot else {
            return;
        };
        cursor = next;
    }
    cursor.insert(last.clone(), value);
}

impl fmt::Display for DiffEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffEntry::Missing { path, left } => write!(f, "- {path}: {left}"),
            DiffEntry::Extra { path, right } => write!(f, "+ {path}: {right}"),
            DiffEntry::Changed { path, left, right } => write!(f, "~ {path}: {left} -> {right}"),
            DiffEntry::Surplus { path, count } => {
                write!(f, "+ {path}: {count} key(s) only on the right")
            }
        }
    }
}

impl fmt::Display for DiffReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{entry}")?;
        }
        Ok(())
    }
}
