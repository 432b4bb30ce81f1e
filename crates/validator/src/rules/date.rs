//! Calendar date rules
//!
//! Both the candidate and the reference are truncated to the start of their
//! day before comparing, so only the calendar date matters. The reference is
//! truncated once, when the rule is built; the error context reports it as
//! it was configured.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use smallvec::smallvec;
use vale_value::Value;

/// Clears hour, minute, second and fraction, keeping the calendar date.
#[inline]
pub fn start_of_day(dt: NaiveDateTime) -> NaiveDateTime {
    dt.date().and_time(NaiveTime::MIN)
}

fn display_date(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d").to_string()
}

// ============================================================================
// DATE BEFORE OR EQUAL
// ============================================================================

crate::rule! {
    /// Validates that a date candidate falls on or before a reference date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use vale_validator::foundation::Rule;
    /// use vale_validator::rules::date_before_or_equal;
    /// use vale_validator::Value;
    ///
    /// let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    /// let rule = date_before_or_equal(day.and_hms_opt(0, 0, 0).unwrap());
    ///
    /// // Time of day is ignored.
    /// assert!(rule.check(&Value::from(day.and_hms_opt(23, 59, 0).unwrap())).is_ok());
    /// assert!(rule.check(&Value::from(day.succ_opt().unwrap())).is_err());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DateBeforeOrEqual {
        /// Reference date as configured.
        pub date: NaiveDateTime,
        reference: NaiveDateTime,
    } for NaiveDateTime;
    name "dateBeforeOrEqual";
    holds(self, input) { start_of_day(*input) <= self.reference }
    message(self) { format!("Date must be on or before {}", display_date(self.date)) }
    params(self) { smallvec![("date".into(), Value::from(self.date))] }
    new(date: NaiveDateTime) { Self { date, reference: start_of_day(date) } }
    fn date_before_or_equal(date: NaiveDateTime);
}

impl DateBeforeOrEqual {
    /// Creates the rule from a calendar date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }
}

// ============================================================================
// DATE AFTER OR EQUAL
// ============================================================================

crate::rule! {
    /// Validates that a date candidate falls on or after a reference date.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub DateAfterOrEqual {
        /// Reference date as configured.
        pub date: NaiveDateTime,
        reference: NaiveDateTime,
    } for NaiveDateTime;
    name "dateAfterOrEqual";
    holds(self, input) { start_of_day(*input) >= self.reference }
    message(self) { format!("Date must be on or after {}", display_date(self.date)) }
    params(self) { smallvec![("date".into(), Value::from(self.date))] }
    new(date: NaiveDateTime) { Self { date, reference: start_of_day(date) } }
    fn date_after_or_equal(date: NaiveDateTime);
}

impl DateAfterOrEqual {
    /// Creates the rule from a calendar date.
    pub fn on(date: NaiveDate) -> Self {
        Self::new(date.and_time(NaiveTime::MIN))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, ValidationError};
    use pretty_assertions::assert_eq;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_start_of_day() {
        let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .unwrap();
        assert_eq!(start_of_day(dt), at(2024, 1, 2, 0, 0));
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let rule = date_before_or_equal(at(2024, 1, 2, 0, 0));
        assert!(rule.check(&Value::from(at(2024, 1, 2, 23, 59))).is_ok());
    }

    #[test]
    fn test_reference_time_is_ignored() {
        // Reference late in the day, candidate early the same day and vice versa.
        let rule = date_before_or_equal(at(2024, 1, 2, 8, 0));
        assert!(rule.check(&Value::from(at(2024, 1, 2, 20, 0))).is_ok());
        assert!(rule.check(&Value::from(at(2024, 1, 3, 0, 0))).is_err());
    }

    #[test]
    fn test_date_before_or_equal() {
        let rule = date_before_or_equal(at(2024, 1, 2, 12, 0));
        assert!(rule.check(&Value::from(at(2023, 12, 31, 23, 59))).is_ok());
        assert!(rule.check(&Value::from(at(2024, 1, 2, 0, 0))).is_ok());
        assert!(rule.check(&Value::from(at(2024, 1, 3, 0, 0))).is_err());
    }

    #[test]
    fn test_bare_date_candidate() {
        let rule = DateBeforeOrEqual::on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert!(rule.check(&Value::from(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())).is_ok());
        assert!(rule.check(&Value::from(NaiveDate::from_ymd_opt(2024, 1, 3).unwrap())).is_err());
    }

    #[test]
    fn test_failure_reports_configured_date() {
        let reference = at(2024, 1, 2, 15, 30);
        let candidate = at(2024, 2, 1, 9, 0);
        let err = date_before_or_equal(reference)
            .check(&Value::from(candidate))
            .unwrap_err();
        assert_eq!(
            err,
            ValidationError::new("dateBeforeOrEqual", "Date must be on or before 2024-01-02")
                .with_context("value", candidate)
                .with_context("date", reference)
        );
    }

    #[test]
    fn test_date_text_is_not_a_date() {
        let rule = date_before_or_equal(at(2024, 1, 2, 0, 0));
        let err = rule.check(&Value::from("2024-01-01")).unwrap_err();
        assert_eq!(err.code, "dateBeforeOrEqual");
        assert_eq!(err.cause.map(|c| c.expected), Some("date"));
    }

    #[test]
    fn test_date_after_or_equal() {
        let rule = date_after_or_equal(at(2024, 1, 2, 18, 0));
        assert!(rule.check(&Value::from(at(2024, 1, 2, 1, 0))).is_ok());
        assert!(rule.check(&Value::from(at(2025, 1, 1, 0, 0))).is_ok());
        assert!(rule.check(&Value::from(at(2024, 1, 1, 23, 59))).is_err());

        let err = rule.check(&Value::from(2)).unwrap_err();
        assert_eq!(err.code, "dateAfterOrEqual");
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_date_after_or_equal_on_calendar_date() {
        let rule = DateAfterOrEqual::on(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(rule, date_after_or_equal(at(2024, 1, 2, 0, 0)));
        assert!(rule.check(&Value::from(at(2024, 1, 2, 0, 0))).is_ok());
        assert!(rule.check(&Value::from(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())).is_err());
    }
}
