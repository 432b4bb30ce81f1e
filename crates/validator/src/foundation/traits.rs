//! Core traits for the rule system
//!
//! [`Validate`] is the statically typed contract: a rule checks a value of
//! its own input type. [`Rule`] layers the dynamic contract on top: a named,
//! parameterized predicate that accepts any [`Value`], discriminates its
//! runtime type and reports a uniformly shaped [`ValidationError`].

use std::borrow::{Borrow, Cow};

use vale_value::Value;

use crate::foundation::{AsValidatable, Context, ValidationError};

// ============================================================================
// CORE VALIDATOR TRAIT
// ============================================================================

/// The typed half of a rule.
///
/// # Examples
///
/// ```
/// use vale_validator::foundation::Validate;
/// use vale_validator::rules::starts_with;
///
/// let rule = starts_with("ab");
/// assert!(rule.validate("abc").is_ok());
/// assert!(rule.validate("xabc").is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    ///
    /// Use `?Sized` to allow validation of unsized types like `str`.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` if validation fails
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// A named, parameterized predicate over dynamically typed values.
///
/// Implementors supply the pure comparison ([`holds`](Rule::holds)), the
/// message and their parameters; [`check`](Rule::check) does the type
/// discrimination and builds the failure descriptor. A candidate of the
/// wrong type is reported the same way as one that fails the comparison,
/// with [`ValidationError::cause`] set.
///
/// # Examples
///
/// ```
/// use vale_validator::foundation::Rule;
/// use vale_validator::rules::max_number;
/// use vale_validator::Value;
///
/// let rule = max_number(5.0);
/// assert!(rule.check(&Value::from(5)).is_ok());
///
/// let err = rule.check(&Value::from("5")).unwrap_err();
/// assert_eq!(err.code, "maxNumber");
/// assert!(err.is_type_mismatch());
/// ```
pub trait Rule: Validate {
    /// Identifier used as the error code.
    const NAME: &'static str;

    /// The comparison, applied once the candidate has the right type.
    fn holds(&self, input: &Self::Input) -> bool;

    /// Human-readable failure message.
    fn message(&self) -> Cow<'static, str>;

    /// The rule's own parameters, as reported in the error context.
    fn params(&self) -> Context;

    /// Builds the failure descriptor for `value`.
    ///
    /// The context starts with `"value"` followed by [`params`](Rule::params).
    fn failure(&self, value: Value) -> ValidationError {
        ValidationError::new(Self::NAME, self.message())
            .with_context("value", value)
            .with_context_entries(self.params())
    }

    /// Applies the rule to a candidate of any runtime type.
    fn check(&self, value: &Value) -> Result<(), ValidationError>
    where
        Self: Sized,
        Value: AsValidatable<Self::Input>,
    {
        let error = match <Value as AsValidatable<Self::Input>>::as_validatable(value) {
            Ok(input) if self.holds(input.borrow()) => return Ok(()),
            Ok(_) => self.failure(value.clone()),
            Err(mismatch) => self.failure(value.clone()).with_cause(mismatch),
        };

        tracing::trace!(
            rule = Self::NAME,
            kind = %value.kind(),
            type_mismatch = error.is_type_mismatch(),
            "candidate rejected"
        );
        Err(error)
    }
}

// ============================================================================
// TESTS
// ============================================================================
