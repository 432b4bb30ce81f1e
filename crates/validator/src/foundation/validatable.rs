//! AsValidatable trait with GAT for type discrimination
//!
//! A [`Value`] can hold any runtime type. Before a rule compares anything it
//! has to know whether the candidate is one it can evaluate at all; this
//! trait is that branch. A matching variant converts to the rule's input
//! (borrowed or owned), anything else is reported as a [`TypeMismatch`].

use std::borrow::Borrow;

use chrono::NaiveDateTime;
use vale_value::{Number, Value};

use crate::foundation::TypeMismatch;

// ============================================================================
// CORE TRAIT: AsValidatable with GAT
// ============================================================================

/// Trait for types that can be converted for validation.
///
/// Uses GAT to allow returning either borrowed reference or owned value,
/// unified through the `Borrow` trait.
pub trait AsValidatable<T: ?Sized> {
    /// The output type, which must be borrowable as `&T`.
    type Output<'a>: Borrow<T>
    where
        Self: 'a;

    /// Converts self to a validatable form.
    fn as_validatable(&self) -> Result<Self::Output<'_>, TypeMismatch>;
}

// ============================================================================
// VALUE CONVERSIONS
// ============================================================================

impl AsValidatable<str> for Value {
    type Output<'a>
        = &'a str
    where
        Self: 'a;

    #[inline]
    fn as_validatable(&self) -> Result<&str, TypeMismatch> {
        self.as_str().ok_or_else(|| TypeMismatch::new("string", self))
    }
}

/// Integers stay exact.
impl AsValidatable<Number> for Value {
    type Output<'a> = Number;

    #[inline]
    fn as_validatable(&self) -> Result<Number, TypeMismatch> {
        self.as_number().ok_or_else(|| TypeMismatch::new("number", self))
    }
}

/// Bare dates are read at midnight.
impl AsValidatable<NaiveDateTime> for Value {
    type Output<'a> = NaiveDateTime;

    #[inline]
    fn as_validatable(&self) -> Result<NaiveDateTime, TypeMismatch> {
        self.as_datetime().ok_or_else(|| TypeMismatch::new("date", self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use vale_value::ValueKind;

    #[test]
    fn text_as_str() {
        let value = Value::text("hello");
        let result = AsValidatable::<str>::as_validatable(&value).unwrap();
        assert_eq!(result, "hello");
    }

    #[test]
    fn number_as_str_fails() {
        let err = AsValidatable::<str>::as_validatable(&Value::Integer(42)).unwrap_err();
        assert_eq!(err.expected, "string");
        assert_eq!(err.actual, ValueKind::Integer);
    }

    #[test]
    fn null_as_str_fails() {
        let err = AsValidatable::<str>::as_validatable(&Value::Null).unwrap_err();
        assert_eq!(err.actual, ValueKind::Null);
    }

    #[test]
    fn integer_stays_exact() {
        let result = AsValidatable::<Number>::as_validatable(&Value::Integer(i64::MAX)).unwrap();
        assert_eq!(result, Number::Int(i64::MAX));
    }

    #[test]
    fn numeric_text_is_not_a_number() {
        let err = AsValidatable::<Number>::as_validatable(&Value::text("5")).unwrap_err();
        assert_eq!(err.expected, "number");
        assert_eq!(err.actual, ValueKind::String);
    }

    #[test]
    fn date_reads_as_midnight() {
        let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
        let result = AsValidatable::<NaiveDateTime>::as_validatable(&Value::Date(day)).unwrap();
        assert_eq!(result, day.and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn date_text_is_not_a_date() {
        let err =
            AsValidatable::<NaiveDateTime>::as_validatable(&Value::text("2024-01-02")).unwrap_err();
        assert_eq!(err.expected, "date");
    }
}
