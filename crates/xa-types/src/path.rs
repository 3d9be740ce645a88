use std::fmt;

use serde::{Deserialize, Serialize};

/// Location of an entry inside a nested mapping: the keys from the root.
///
/// Displayed dotted (`b.d`); the empty path displays as `<root>`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The empty path (the root mapping itself).
    pub fn root() -> Self {
        Self::default()
    }

    /// A new path with `key` appended.
    pub fn child(&self, key: impl Into<String>) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.into());
        Self(segments)
    }

    /// The keys from the root, in order.
    pub fn segments(&self) -> &[String] {
        &self.0
    }

    /// The last key, or `None` for the root.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Number of keys in the path.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }
        f.write_str(&self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_extends_without_mutating() {
        let root = KeyPath::root();
        let b = root.child("b");
        let bd = b.child("d");
        assert!(root.is_root());
        assert_eq!(b.depth(), 1);
        assert_eq!(bd.segments(), &["b".to_string(), "d".to_string()]);
        assert_eq!(bd.leaf(), Some("d"));
    }

    #[test]
    fn display() {
        assert_eq!(KeyPath::root().to_string(), "<root>");
        let path: KeyPath = ["config", "port"].into_iter().collect();
        assert_eq!(path.to_string(), "config.port");
    }
}
