use serde::{Deserialize, Serialize};

/// Defaults used by a [`Generator`](crate::Generator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Length of generated strings when none is given.
    pub default_length: usize,
    /// Placed between a prefix and the random part.
    pub separator: String,
    /// Minimum number of characters a prefixed string must have beyond the prefix.
    pub prefix_margin: usize,
    /// Probability used when none is given.
    pub default_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_length: 24,
            separator: "_".into(),
            prefix_margin: 3,
            default_probability: 0.5,
        }
    }
}

impl GeneratorConfig {
    /// Default config with a different separator.
    pub fn with_separator(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
            ..Default::default()
        }
    }
}
