//! Client-side request validation.

use crate::error::RequestError;

/// Fail with `MissingParameter` when a required member is unset.
pub fn required<T>(
    operation: &'static str,
    field: &'static str,
    value: &Option<T>,
) -> Result<(), RequestError> {
    value
        .as_ref()
        .map(|_| ())
        .ok_or(RequestError::MissingParameter { operation, field })
}

/// Fail with `MissingParameter` when a required string is unset, and with
/// `InvalidParameterValue` when it is empty.
pub fn non_empty(
    operation: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<(), RequestError> {
    match value {
        None => Err(RequestError::MissingParameter { operation, field }),
        Some(v) if v.is_empty() => Err(RequestError::InvalidParameterValue {
            operation,
            field,
            reason: "value must not be empty".to_string(),
        }),
        Some(_) => Ok(()),
    }
}

/// True for `-` (the caller's account) or exactly twelve ASCII digits.
pub fn is_valid_account_id(value: &str) -> bool {
    value == "-" || (value.len() == 12 && value.bytes().all(|b| b.is_ascii_digit()))
}

/// Validate a required Glacier-style account ID.
pub fn account_id(
    operation: &'static str,
    field: &'static str,
    value: &Option<String>,
) -> Result<(), RequestError> {
    let value = value
        .as_deref()
        .ok_or(RequestError::MissingParameter { operation, field })?;
    if is_valid_account_id(value) {
        Ok(())
    } else {
        Err(RequestError::InvalidParameterValue {
            operation,
            field,
            reason: format!(
                "'{}' is not '-' or a 12-digit AWS account ID",
                value
            ),
        })
    }
}

/// Validate an optional numeric member against an inclusive range.
pub fn range<T>(
    operation: &'static str,
    field: &'static str,
    value: &Option<T>,
    min: T,
    max: T,
) -> Result<(), RequestError>
where
    T: PartialOrd + Copy + std::fmt::Display,
{
    match value {
        Some(v) if *v < min || *v > max => Err(RequestError::InvalidParameterValue {
            operation,
            field,
            reason: format!("{} is outside {}..={}", v, min, max),
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_required() {
        assert!(required("Op", "Name", &Some(1)).is_ok());
        assert!(matches!(
            required::<i32>("Op", "Name", &None),
            Err(RequestError::MissingParameter { field: "Name", .. })
        ));
    }

    #[test]
    fn test_non_empty() {
        assert!(non_empty("Op", "Id", &Some("x".into())).is_ok());
        assert!(matches!(
            non_empty("Op", "Id", &Some(String::new())),
            Err(RequestError::InvalidParameterValue { .. })
        ));
    }

    #[test]
    fn test_account_id() {
        assert!(account_id("Op", "accountId", &Some("-".into())).is_ok());
        assert!(account_id("Op", "accountId", &Some("123456789012".into())).is_ok());
        assert!(matches!(
            account_id("Op", "accountId", &None),
            Err(RequestError::MissingParameter { .. })
        ));
        for bad in ["", "--", "12345678901", "1234567890123", "12345678901a"] {
            assert!(matches!(
                account_id("Op", "accountId", &Some(bad.into())),
                Err(RequestError::InvalidParameterValue { .. })
            ));
        }
    }

    #[test]
    fn test_range() {
        assert!(range("Op", "MaxResults", &Some(5), 1, 100).is_ok());
        assert!(range::<i32>("Op", "MaxResults", &None, 1, 100).is_ok());
        assert!(range("Op", "MaxResults", &Some(0), 1, 100).is_err());
    }

    proptest! {
        #[test]
        fn prop_twelve_digits_accepted(id in "[0-9]{12}") {
            prop_assert!(is_valid_account_id(&id));
        }

        #[test]
        fn prop_other_lengths_rejected(id in "[0-9]{1,11}|[0-9]{13,20}") {
            prop_assert!(!is_valid_account_id(&id));
        }

        #[test]
        fn prop_non_digits_rejected(id in "[0-9]{0,11}[a-zA-Z_ ][0-9]{0,11}") {
            prop_assert!(!is_valid_account_id(&id));
        }
    }
}
