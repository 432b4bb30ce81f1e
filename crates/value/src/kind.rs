//! Value kinds.
//!
//! `ValueKind` is a lightweight classification of [`Value`] used when a rule
//! reports that a candidate had the wrong runtime type.

use core::fmt::{Display, Formatter};

use crate::Value;

/// Represents the kind/type of a [`Value`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum ValueKind {
    /// `Value::Null`
    Null,
    /// `Value::Boolean`
    Boolean,
    /// `Value::Integer`
    Integer,
    /// `Value::Float`
    Float,
    /// `Value::Text`
    String,
    /// `Value::Date`
    Date,
    /// `Value::DateTime`
    DateTime,
    /// `Value::Array`
    Array,
    /// `Value::Object`
    Object,
}

impl ValueKind {
    /// Classifies a value.
    #[must_use]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Boolean(_) => Self::Boolean,
            Value::Integer(_) => Self::Integer,
            Value::Float(_) => Self::Float,
            Value::Text(_) => Self::String,
            Value::Date(_) => Self::Date,
            Value::DateTime(_) => Self::DateTime,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
        }
    }

    /// Stable lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::String => "string",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl Display for ValueKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_every_variant() {
        assert_eq!(ValueKind::of(&Value::Null), ValueKind::Null);
        assert_eq!(ValueKind::of(&Value::from(true)), ValueKind::Boolean);
        assert_eq!(ValueKind::of(&Value::from(1)), ValueKind::Integer);
        assert_eq!(ValueKind::of(&Value::from(1.5)), ValueKind::Float);
        assert_eq!(ValueKind::of(&Value::from("x")), ValueKind::String);
        assert_eq!(ValueKind::of(&Value::Array(Vec::new())), ValueKind::Array);
    }

    #[test]
    fn display_uses_name() {
        assert_eq!(ValueKind::String.to_string(), "string");
        assert_eq!(ValueKind::DateTime.to_string(), "datetime");
    }
}
