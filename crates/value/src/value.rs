//! The unified `Value` enum.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::{Number, ValueKind};

/// Key-value map carried by [`Value::Object`].
pub type Object = BTreeMap<String, Value>;

/// A dynamically typed candidate value.
///
/// Rules accept any `Value` and decide for themselves whether its variant is
/// one they can evaluate.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Absent / null value
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number
    Integer(i64),

    /// Floating point number
    Float(f64),

    /// UTF-8 text
    Text(String),

    /// Calendar date without a time of day
    Date(NaiveDate),

    /// Date and wall-clock time, no zone
    DateTime(NaiveDateTime),

    /// Ordered list of values
    Array(Vec<Value>),

    /// String-keyed map of values
    Object(Object),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a text value from `String` or `&str`
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        ValueKind::of(self)
    }

    // ==================== Conversions (as_*) ====================

    /// Borrow the text, if this is text.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view; integers stay exact.
    #[inline]
    #[must_use]
    pub const fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(i) => Some(Number::Int(*i)),
            Self::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Date-time view; a bare date is taken at midnight.
    #[inline]
    #[must_use]
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::Date(d) => Some(d.and_time(NaiveTime::MIN)),
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%dT%H:%M:%S%.f")),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Object(map) => {
                f.write_str("{")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{k}: {v}")?;
                }
                f.write_str("}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_is_null() {
        assert_eq!(Value::default(), Value::Null);
    }

    #[test]
    fn as_str_only_for_text() {
        assert_eq!(Value::text("abc").as_str(), Some("abc"));
        assert_eq!(Value::Integer(1).as_str(), None);
    }

    #[test]
    fn numeric_view() {
        assert_eq!(Value::Integer(-3).as_number(), Some(Number::Int(-3)));
        assert_eq!(Value::Float(2.5).as_number(), Some(Number::Float(2.5)));
        assert_eq!(Value::text("5").as_number(), None);
    }

    #[test]
    fn date_reads_as_midnight() {
        let dt = Value::Date(date(2024, 1, 2)).as_datetime().unwrap();
        assert_eq!(dt, date(2024, 1, 2).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn display_formats() {
        assert_eq!(Value::text("hi").to_string(), "hi");
        assert_eq!(Value::Date(date(2024, 1, 2)).to_string(), "2024-01-02");
        let dt = date(2024, 1, 2).and_hms_opt(23, 59, 0).unwrap();
        assert_eq!(Value::DateTime(dt).to_string(), "2024-01-02T23:59:00");
        let arr = Value::Array(vec![Value::Integer(1), Value::Boolean(false)]);
        assert_eq!(arr.to_string(), "[1, false]");
    }
}
