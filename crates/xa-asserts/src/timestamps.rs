//! RFC3339 time stamp assertions.

use xa_validate::is_rfc3339;

use crate::error::{enforce, AssertionFailure};

/// `stamp` is a valid RFC3339 time stamp string.
pub fn check_rfc3339(stamp: &str, message: Option<&str>) -> Result<(), AssertionFailure> {
    if is_rfc3339(stamp) {
        return Ok(());
    }
    Err(AssertionFailure::new(message.map_or_else(
        || format!("'{stamp}' is not a valid RFC3339 time stamp string"),
        str::to_string,
    )))
}

#[track_caller]
pub fn assert_rfc3339(stamp: &str, message: Option<&str>) {
    enforce(check_rfc3339(stamp, message));
}

/// `stamp` is `None` or a valid RFC3339 time stamp string.
pub fn check_rfc3339_or_none(stamp: Option<&str>, message: Option<&str>) -> Result<(), AssertionFailure> {
    match stamp {
        Some(text) if !is_rfc3339(text) => Err(AssertionFailure::new(message.map_or_else(
            || format!("'{text}' is neither a valid RFC3339 time stamp string nor NULL"),
            str::to_string,
        ))),
        _ => Ok(()),
    }
}

#[track_caller]
pub fn assert_rfc3339_or_none(stamp: Option<&str>, message: Option<&str>) {
    enforce(check_rfc3339_or_none(stamp, message));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_stamps_pass() {
        assert!(check_rfc3339("2022-01-01T10:00:00Z", None).is_ok());
        assert!(check_rfc3339("2022-01-01T10:00:00+02:00", None).is_ok());
        assert!(check_rfc3339_or_none(None, None).is_ok());
        assert!(check_rfc3339_or_none(Some("2022-01-01T10:00:00.1Z"), None).is_ok());
    }

    #[test]
    fn invalid_stamps_fail_with_message() {
        let err = check_rfc3339("2022-01-01", None).unwrap_err();
        assert_eq!(err.message, "'2022-01-01' is not a valid RFC3339 time stamp string");

        let err = check_rfc3339_or_none(Some("not-a-date"), None).unwrap_err();
        assert_eq!(
            err.message,
            "'not-a-date' is neither a valid RFC3339 time stamp string nor NULL"
        );

        let err = check_rfc3339("x", Some("created_at must be RFC3339")).unwrap_err();
        assert_eq!(err.message, "created_at must be RFC3339");
    }

    #[test]
    #[should_panic(expected = "is not a valid RFC3339")]
    fn assert_panics() {
        assert_rfc3339("yesterday", None);
    }
}
