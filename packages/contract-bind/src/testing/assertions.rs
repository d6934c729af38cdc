//! Common Test Assertions
//!
//! Assertion helpers for checking binding outcomes in tests.

use alloy::dyn_abi::DynSolValue;
use eyre::{eyre, Result};

use crate::error::BindError;
use crate::event::EventRecord;

/// Assert that an operation reverted with the given reason string
pub fn assert_reverted_with<T>(result: crate::error::Result<T>, message: &str) -> Result<()> {
    match result {
        Ok(_) => Err(eyre!("Expected revert \"{}\", call succeeded", message)),
        Err(err) => {
            let revert = err
                .revert()
                .ok_or_else(|| eyre!("Expected revert \"{}\", got {}", message, err))?;
            match revert.reason_message() {
                Some(reason) if reason == message => Ok(()),
                other => Err(eyre!(
                    "Revert reason mismatch: expected \"{}\", got {:?}",
                    message,
                    other
                )),
            }
        }
    }
}

/// Assert that an operation reverted with the named custom error
pub fn assert_custom_error<T>(result: crate::error::Result<T>, name: &str) -> Result<()> {
    let err = match result {
        Ok(_) => return Err(eyre!("Expected custom error {}, call succeeded", name)),
        Err(err) => err,
    };
    match err.revert().and_then(|revert| revert.custom_error()) {
        Some(actual) if actual == name => Ok(()),
        other => Err(eyre!(
            "Custom error mismatch: expected {}, got {:?} ({})",
            name,
            other,
            err
        )),
    }
}

/// Assert that a decoded event carries `expected` in field `name`
pub fn assert_event_field(record: &EventRecord, name: &str, expected: &DynSolValue) -> Result<()> {
    let actual = record
        .field(name)
        .ok_or_else(|| eyre!("Event {} has no field {}", record.name, name))?;
    if actual != expected {
        return Err(eyre!(
            "Event field mismatch on {}.{}: expected {:?}, got {:?}",
            record.name,
            name,
            expected,
            actual
        ));
    }
    Ok(())
}

/// Assert that an error is of the expected kind
pub fn assert_bind_error<T>(
    result: crate::error::Result<T>,
    predicate: impl FnOnce(&BindError) -> bool,
) -> Result<()> {
    match result {
        Ok(_) => Err(eyre!("Expected an error, operation succeeded")),
        Err(err) if predicate(&err) => Ok(()),
        Err(err) => Err(eyre!("Unexpected error: {}", err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Revert;

    #[test]
    fn test_assert_reverted_with() {
        let result: crate::error::Result<()> =
            Err(BindError::ExecutionReverted(Revert::message("not owner")));
        assert!(assert_reverted_with(result.clone(), "not owner").is_ok());
        assert!(assert_reverted_with(result, "paused").is_err());
        assert!(assert_reverted_with(Ok(()), "not owner").is_err());
    }

    #[test]
    fn test_assert_bind_error() {
        let result: crate::error::Result<()> = Err(BindError::Cancelled);
        assert!(assert_bind_error(result.clone(), |e| matches!(e, BindError::Cancelled)).is_ok());
        assert!(assert_bind_error(result, |e| matches!(e, BindError::MissingAbi)).is_err());
    }
}
