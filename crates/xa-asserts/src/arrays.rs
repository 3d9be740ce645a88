//! Assertions over nested mappings.

use serde_json::Value;
use xa_diff::{diff_report_with, render_tree, DiffOptions, DEFAULT_INDENT_BLOCK};
use xa_types::{strictly_equal, Container, Kind, KeyPath, Mapping};

use crate::error::{enforce, AssertionFailure};

type Check = Result<(), AssertionFailure>;

/// `actual` holds `key`, and its value strictly equals `expected`.
pub fn check_array_has_key_value(
    key: &str,
    expected: &Value,
    actual: &Mapping,
    message: Option<&str>,
) -> Check {
    let Some(found) = actual.get(key) else {
        return Err(AssertionFailure::new(
            message.map_or_else(|| format!("Key not found: {key}"), str::to_string),
        ));
    };
    if !strictly_equal(expected, found) {
        return Err(AssertionFailure::new(message.map_or_else(
            || format!("Value for key '{key}' is not as expected."),
            str::to_string,
        )));
    }
    Ok(())
}

#[track_caller]
pub fn assert_array_has_key_value(key: &str, expected: &Value, actual: &Mapping, message: Option<&str>) {
    enforce(check_array_has_key_value(key, expected, actual, message));
}

/// `actual` holds every key in `keys`.
pub fn check_array_has_keys<S: AsRef<str>>(keys: &[S], actual: &Mapping, message: Option<&str>) -> Check {
    match keys.iter().map(AsRef::as_ref).find(|k| !actual.contains_key(*k)) {
        Some(missing) => Err(AssertionFailure::new(
            message.map_or_else(|| format!("Key not found: {missing}"), str::to_string),
        )),
        None => Ok(()),
    }
}

#[track_caller]
pub fn assert_array_has_keys<S: AsRef<str>>(keys: &[S], actual: &Mapping, message: Option<&str>) {
    enforce(check_array_has_keys(keys, actual, message));
}

/// Both mappings hold the same keys and strictly equal leaves at every
/// level. Key order is not taken into account.
pub fn check_array_equals(expected: &Mapping, actual: &Mapping, message: Option<&str>) -> Check {
    check_arrays_have_differences(0, expected, actual, message)
}

#[track_caller]
pub fn assert_array_equals(expected: &Mapping, actual: &Mapping, message: Option<&str>) {
    enforce(check_array_equals(expected, actual, message));
}

/// The mappings differ in exactly `count` positions.
pub fn check_arrays_have_differences(
    count: usize,
    expected: &Mapping,
    actual: &Mapping,
    message: Option<&str>,
) -> Check {
    check_arrays_have_differences_with(count, expected, actual, &DiffOptions::default(), message)
}

/// [`check_arrays_have_differences`] with explicit diff options.
pub fn check_arrays_have_differences_with(
    count: usize,
    expected: &Mapping,
    actual: &Mapping,
    options: &DiffOptions,
    message: Option<&str>,
) -> Check {
    let report = diff_report_with(expected, actual, options);
    let found = report.count();
    if found == count {
        return Ok(());
    }

    let mut text = message.map_or_else(
        || format!("Expected {count} differences, found {found}"),
        str::to_string,
    );
    if !report.is_empty() {
        text.push_str("\nDifferences:\n");
        text.push_str(&report.to_string());
    }
    Err(AssertionFailure::with_report(text, report))
}

#[track_caller]
pub fn assert_arrays_have_differences(
    count: usize,
    expected: &Mapping,
    actual: &Mapping,
    message: Option<&str>,
) {
    enforce(check_arrays_have_differences(count, expected, actual, message));
}

#[track_caller]
pub fn assert_arrays_have_differences_with(
    count: usize,
    expected: &Mapping,
    actual: &Mapping,
    options: &DiffOptions,
    message: Option<&str>,
) {
    enforce(check_arrays_have_differences_with(count, expected, actual, options, message));
}

/// Every key of `expected` (recursively) is present in `actual` with a
/// strictly equal value. Keys named in `ignored_keys` are skipped at every
/// depth; keys only in `actual` are not checked.
///
/// Fails on the first mismatch, telling a kind mismatch apart from a value
/// mismatch.
pub fn check_mass_equals(expected: &Mapping, actual: &Mapping, ignored_keys: &[&str]) -> Check {
    mass_walk(
        Container::Map(expected),
        Container::Map(actual),
        &KeyPath::root(),
        ignored_keys,
    )
}

#[track_caller]
pub fn assert_mass_equals(expected: &Mapping, actual: &Mapping, ignored_keys: &[&str]) {
    enforce(check_mass_equals(expected, actual, ignored_keys));
}

fn mass_walk(expected: Container<'_>, actual: Container<'_>, path: &KeyPath, ignored: &[&str]) -> Check {
    for (key, want) in expected.entries() {
        if ignored.contains(&&*key) {
            continue;
        }
        let child = path.child(&*key);
        let Some(got) = actual.get(&key) else {
            return Err(AssertionFailure::new(format!("Key not found: {child}")));
        };

        if let (Some(want_nested), Some(got_nested)) = (Container::of(want), Container::of(got)) {
            mass_walk(want_nested, got_nested, &child, ignored)?;
            continue;
        }
        if strictly_equal(want, got) {
            continue;
        }

        let (want_kind, got_kind) = (Kind::of_value(want), Kind::of_value(got));
        let message = if want_kind != got_kind {
            format!("Type mismatch for key '{child}'. Expected '{want_kind}', found '{got_kind}'")
        } else {
            format!(
                "Value mismatch for key '{child}'. Expected '{}', found '{}'",
                scalar_text(want),
                scalar_text(got)
            )
        };
        return Err(AssertionFailure::new(message));
    }
    Ok(())
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Print `mapping` to stdout in the compact one-entry-per-line form.
pub fn print_array(mapping: &Mapping, indent: usize) {
    print!("{}", render_tree(mapping, indent, DEFAULT_INDENT_BLOCK));
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn map(value: Value) -> Mapping {
        match value {
            Value::Object(m) => m,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn key_value_present_and_equal() {
        let m = map(json!({"a": 1, "b": "x"}));
        assert!(check_array_has_key_value("b", &json!("x"), &m, None).is_ok());
    }

    #[test]
    fn key_value_missing_key() {
        let m = map(json!({"a": 1}));
        let err = check_array_has_key_value("zz", &json!(1), &m, None).unwrap_err();
        assert_eq!(err.message, "Key not found: zz");
    }

    #[test]
    fn key_value_mismatch_is_strict() {
        let m = map(json!({"a": 1}));
        let err = check_array_has_key_value("a", &json!("1"), &m, None).unwrap_err();
        assert_eq!(err.message, "Value for key 'a' is not as expected.");

        let err = check_array_has_key_value("a", &json!(2), &m, Some("custom")).unwrap_err();
        assert_eq!(err.message, "custom");
    }

    #[test]
    fn has_keys_reports_first_missing() {
        let m = map(json!({"a": 1, "b": 2}));
        assert!(check_array_has_keys(&["a", "b"], &m, None).is_ok());
        assert!(check_array_has_keys::<&str>(&[], &m, None).is_ok());

        let err = check_array_has_keys(&["a", "c", "d"], &m, None).unwrap_err();
        assert_eq!(err.message, "Key not found: c");
    }

    #[test]
    fn differences_message_lists_entries() {
        let a = map(json!({"a": 1, "b": {"c": 2}}));
        let b = map(json!({"a": 1, "b": {"c": 3}}));
        let err = check_arrays_have_differences(0, &a, &b, None).unwrap_err();
        assert_eq!(err.message, "Expected 0 differences, found 1\nDifferences:\n~ b.c: 2 -> 3");
        assert_eq!(err.report.map(|r| r.count()), Some(1));

        assert!(check_arrays_have_differences(1, &a, &b, None).is_ok());
    }

    #[test]
    fn differences_with_legacy_coverage() {
        let a = map(json!({"k": {"x": 1, "y": 2}}));
        let b = map(json!({"k": {"x": 1, "z": 2}}));
        assert!(check_arrays_have_differences_with(1, &a, &b, &DiffOptions::legacy(), None).is_ok());
        assert!(check_arrays_have_differences(2, &a, &b, None).is_ok());
    }

    #[test]
    fn mass_equals_skips_ignored_and_extra_keys() {
        let expected = map(json!({"id": 1, "name": "x", "nested": {"id": 5, "v": true}}));
        let actual = map(json!({"id": 2, "name": "x", "nested": {"id": 6, "v": true}, "more": 1}));
        assert!(check_mass_equals(&expected, &actual, &["id"]).is_ok());
        assert!(check_mass_equals(&expected, &actual, &[]).is_err());
    }

    #[test]
    fn mass_equals_tells_type_from_value_mismatch() {
        let expected = map(json!({"n": {"count": 1}}));

        let err = check_mass_equals(&expected, &map(json!({"n": {"count": "1"}})), &[]).unwrap_err();
        assert_eq!(
            err.message,
            "Type mismatch for key 'n.count'. Expected 'integer', found 'string'"
        );

        let err = check_mass_equals(&expected, &map(json!({"n": {"count": 2}})), &[]).unwrap_err();
        assert_eq!(err.message, "Value mismatch for key 'n.count'. Expected '1', found '2'");

        let err = check_mass_equals(&expected, &map(json!({"n": 3})), &[]).unwrap_err();
        assert_eq!(err.message, "Type mismatch for key 'n'. Expected 'object', found 'integer'");

        let err = check_mass_equals(&expected, &map(json!({"n": {}})), &[]).unwrap_err();
        assert_eq!(err.message, "Key not found: n.count");
    }

    #[test]
    #[should_panic(expected = "Expected 0 differences, found 1")]
    fn assert_array_equals_panics_on_difference() {
        let a = map(json!({"a": 1}));
        let b = map(json!({"a": 1, "b": 2}));
        assert_array_equals(&a, &b, None);
    }
}
