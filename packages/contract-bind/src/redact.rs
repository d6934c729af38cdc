//! Redaction of signing material in `Debug` output.
//!
//! Transaction options carry a wallet. [`Redacted`] keeps it out of logs and
//! panic messages while the rest of the options stay inspectable.

use std::fmt::{self, Debug, Display};

/// Wrapper that hides its inner value when formatted.
///
/// # Example
///
/// ```
/// use contract_bind::redact::Redacted;
///
/// let key = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// assert_eq!(format!("{:?}", Redacted(key)), "<redacted>");
/// ```
#[derive(Clone, Copy)]
pub struct Redacted<T>(pub T);

impl<T> Debug for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

impl<T> Display for Redacted<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Formats `Some(<redacted>)` or `None` without touching the inner value.
pub fn redact_option<T>(value: &Option<T>) -> Option<Redacted<()>> {
    value.as_ref().map(|_| Redacted(()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redacted_hides_value() {
        let secret = String::from("hunter2");
        assert_eq!(format!("{:?}", Redacted(&secret)), "<redacted>");
        assert_eq!(format!("{}", Redacted(&secret)), "<redacted>");
    }

    #[test]
    fn test_redact_option() {
        assert_eq!(format!("{:?}", redact_option(&Some(1))), "Some(<redacted>)");
        assert_eq!(format!("{:?}", redact_option::<u8>(&None)), "None");
    }
}
