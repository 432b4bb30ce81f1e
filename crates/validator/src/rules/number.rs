//! Numeric bound rules
//!
//! Integer and float candidates are both numeric. Integers are compared
//! exactly against the bound, never rounded through `f64`. NaN never
//! satisfies a bound.

use std::cmp::Ordering;

use smallvec::smallvec;
use vale_value::{Number, Value};

// ============================================================================
// MAX NUMBER
// ============================================================================

crate::rule! {
    /// Validates that a numeric candidate does not exceed a maximum.
    ///
    /// Equality passes.
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
    /// assert!(rule.check(&Value::from(6)).is_err());
    /// assert!(rule.check(&Value::from("5")).is_err()); // wrong type
    /// ```
    #[derive(Copy, PartialEq)]
    pub MaxNumber {
        /// Inclusive upper bound.
        pub max_value: f64,
    } for Number;
    name "maxNumber";
    holds(self, input) {
        matches!(input.partial_cmp_f64(self.max_value), Some(Ordering::Less | Ordering::Equal))
    }
    message(self) { format!("Value must be at most {}", self.max_value) }
    params(self) { smallvec![("maxValue".into(), Value::from(self.max_value))] }
    new(max_value: f64) { Self { max_value } }
    fn max_number(max_value: f64);
}

// ============================================================================
// MIN NUMBER
// ============================================================================

crate::rule! {
    /// Validates that a numeric candidate is at least a minimum.
    ///
    /// Equality passes.
    #[derive(Copy, PartialEq)]
    pub MinNumber {
        /// Inclusive lower bound.
        pub min_value: f64,
    } for Number;
    name "minNumber";
    holds(self, input) {
        matches!(
            input.partial_cmp_f64(self.min_value),
            Some(Ordering::Greater | Ordering::Equal)
        )
    }
    message(self) { format!("Value must be at least {}", self.min_value) }
    params(self) { smallvec![("minValue".into(), Value::from(self.min_value))] }
    new(min_value: f64) { Self { min_value } }
    fn min_number(min_value: f64);
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, Validate, ValidationError};
    use pretty_assertions::assert_eq;

    const TWO_53: i64 = 1 << 53;

    #[test]
    fn test_max_number() {
        let rule = max_number(5.0);
        assert!(rule.check(&Value::from(5)).is_ok());
        assert!(rule.check(&Value::from(4.999)).is_ok());
        assert!(rule.check(&Value::from(-100)).is_ok());
        assert!(rule.check(&Value::from(6)).is_err());
        assert!(rule.check(&Value::from(5.000_001)).is_err());
    }

    #[test]
    fn test_max_number_rejects_numeric_text() {
        let err = max_number(5.0).check(&Value::from("5")).unwrap_err();
        assert_eq!(err.code, "maxNumber");
        assert_eq!(err.context_value("value"), Some(&Value::from("5")));
        assert_eq!(err.context_value("maxValue"), Some(&Value::Float(5.0)));
        assert_eq!(err.cause.map(|c| c.expected), Some("number"));
    }

    #[test]
    fn test_max_number_nan_fails() {
        let err = max_number(5.0).check(&Value::Float(f64::NAN)).unwrap_err();
        assert!(err.cause.is_none());
        assert!(max_number(f64::NAN).check(&Value::from(0)).is_err());
    }

    #[test]
    fn test_max_number_infinities() {
        let rule = max_number(5.0);
        assert!(rule.check(&Value::Float(f64::NEG_INFINITY)).is_ok());
        assert!(rule.check(&Value::Float(f64::INFINITY)).is_err());
        assert!(max_number(f64::INFINITY).check(&Value::from(i64::MAX)).is_ok());
    }

    #[test]
    fn test_max_number_large_integers_are_exact() {
        let rule = max_number(TWO_53 as f64);
        assert!(rule.check(&Value::from(TWO_53)).is_ok());
        assert!(rule.check(&Value::from(TWO_53 + 1)).is_err());

        // i64::MAX rounds up to 2^63 as f64 but is still below it.
        assert!(max_number(i64::MAX as f64).check(&Value::from(i64::MAX)).is_ok());
        assert!(max_number(-(i64::MAX as f64)).check(&Value::from(i64::MIN)).is_ok());
    }

    #[test]
    fn test_max_number_fractional_bound() {
        let rule = max_number(2.5);
        assert!(rule.check(&Value::from(2)).is_ok());
        assert!(rule.check(&Value::from(3)).is_err());
        assert!(max_number(-2.5).check(&Value::from(-2)).is_err());
    }

    #[test]
    fn test_max_number_keeps_original_candidate() {
        // The candidate is reported as given, not as a float.
        let err = max_number(5.0).check(&Value::from(6)).unwrap_err();
        assert_eq!(
            err,
            ValidationError::new("maxNumber", "Value must be at most 5")
                .with_context("value", 6)
                .with_context("maxValue", 5.0)
        );
    }

    #[test]
    fn test_max_number_typed_path() {
        assert!(max_number(1.5).validate(&Number::from(1.5)).is_ok());
        let err = max_number(1.5).validate(&Number::from(2)).unwrap_err();
        assert_eq!(err.context_value("value"), Some(&Value::Integer(2)));
    }

    #[test]
    fn test_min_number() {
        let rule = min_number(0.0);
        assert!(rule.check(&Value::from(0)).is_ok());
        assert!(rule.check(&Value::from(0.1)).is_ok());
        assert!(rule.check(&Value::from(-1)).is_err());

        let err = rule.check(&Value::Null).unwrap_err();
        assert_eq!(err.code, "minNumber");
        assert_eq!(err.context_value("minValue"), Some(&Value::Float(0.0)));
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_min_number_large_integers_are_exact() {
        let rule = min_number(TWO_53 as f64);
        assert!(rule.check(&Value::from(TWO_53)).is_ok());
        assert!(rule.check(&Value::from(TWO_53 - 1)).is_err());
        assert!(min_number(-(TWO_53 as f64)).check(&Value::from(-TWO_53 - 1)).is_err());
        assert!(min_number(f64::NEG_INFINITY).check(&Value::from(i64::MIN)).is_ok());
    }
}
