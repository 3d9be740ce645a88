//! Compact text rendering and lookup helpers for nested mappings.

use serde_json::Value;
use xa_types::{strictly_equal, Container, Mapping};

/// Indentation added per nesting level by default.
pub const DEFAULT_INDENT_BLOCK: &str = "  ";

/// Render a mapping one entry per line.
///
/// Containers print as `key:` with their children one block deeper; scalars
/// print as `key: value`, strings without quotes. Entries at `indent` 0 are
/// already indented by one block.
///
/// ```
/// use serde_json::json;
/// use xa_diff::render_tree;
///
/// let tree = json!({"b": {"d": 3}, "s": "x"});
/// let text = render_tree(tree.as_object().unwrap(), 0, "  ");
/// assert_eq!(text, "  b:\n    d: 3\n  s: x\n");
/// ```
pub fn render_tree(mapping: &Mapping, indent: usize, indent_block: &str) -> String {
    let mut out = String::new();
    render_into(&mut out, Container::Map(mapping), indent, indent_block);
    out
}

fn render_into(out: &mut String, container: Container<'_>, indent: usize, block: &str) {
    let pad = block.repeat(indent + 1);
    for (key, value) in container.entries() {
        match Container::of(value) {
            Some(nested) => {
                out.push_str(&format!("{pad}{key}:\n"));
                render_into(out, nested, indent + 1, block);
            }
            None => out.push_str(&format!("{pad}{key}: {}\n", scalar_text(value))),
        }
    }
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// First container in `items` whose `key` entry strictly equals `value`.
pub fn find_with_key_value<'a>(items: &'a [Value], key: &str, value: &Value) -> Option<&'a Value> {
    items.iter().find(|item| {
        Container::of(item)
            .and_then(|c| c.get(key))
            .is_some_and(|found| strictly_equal(found, value))
    })
}
