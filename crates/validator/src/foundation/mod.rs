//! Core rule types and traits
//!
//! - **Traits**: [`Validate`] (typed input) and [`Rule`] (named predicate over any `Value`)
//! - **Errors**: [`ValidationError`], [`TypeMismatch`]
//! - **Type discrimination**: [`AsValidatable`]
//!
//! # Architecture
//!
//! A rule is a small immutable struct built once from its parameters. It
//! holds no interior state, so it is `Send + Sync` and can be applied from
//! any number of callers at once.
//!
//! Applying a rule yields a [`Validity`]: `Ok(())` when the candidate passes,
//! otherwise an error whose shape is the same for every rule and every
//! failing branch:
//!
//! ```
//! use vale_validator::prelude::*;
//!
//! let rule = starts_with("ab");
//!
//! let err = rule.check(&Value::from("xabc")).unwrap_err();
//! assert_eq!(err.code, "startsWith");
//! assert_eq!(err.context_value("value"), Some(&Value::from("xabc")));
//! assert_eq!(err.context_value("str"), Some(&Value::from("ab")));
//!
//! // Wrong runtime type: same shape, with a cause attached.
//! let err = rule.check(&Value::from(7)).unwrap_err();
//! assert_eq!(err.code, "startsWith");
//! assert!(err.is_type_mismatch());
//! ```

pub mod error;
pub mod traits;
pub mod validatable;

pub use error::{Context, TypeMismatch, ValidationError};
pub use traits::{Rule, Validate};
pub use validatable::AsValidatable;

// ============================================================================
// UTILITIES
// ============================================================================

/// Validates a value and returns the result.
///
/// Convenience for one-off checks on already-typed input.
///
/// ```
/// use vale_validator::foundation::validate_value;
/// use vale_validator::rules::max_number;
/// use vale_validator::Number;
///
/// assert!(validate_value(&Number::from(4.5), &max_number(5.0)).is_ok());
/// ```
#[must_use = "validation result must be checked"]
pub fn validate_value<V>(value: &V::Input, validator: &V) -> Result<(), ValidationError>
where
    V: Validate,
{
    validator.validate(value)
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Outcome of applying a rule: `Ok(())` is *Valid*.
pub type Validity = Result<(), ValidationError>;

#[cfg(test)]
mod tests {
    use super::*;
    use vale_value::Value;

    #[test]
    fn validity_alias_is_plain_result() {
        let ok: Validity = Ok(());
        assert!(ok.is_ok());
        let err: Validity =
            Err(ValidationError::new("startsWith", "nope").with_context("value", Value::Null));
        assert_eq!(err.unwrap_err().context_value("value"), Some(&Value::Null));
    }
}
