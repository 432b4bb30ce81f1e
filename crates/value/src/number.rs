//! Numeric view over integer and float values.

use std::cmp::Ordering;

use crate::Value;

/// 2^63, the first `f64` above `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// A number as it was given: integers are never rounded through `f64`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
}

impl Number {
    /// Compares against an `f64` without losing integer precision.
    ///
    /// `None` when either side is NaN.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use vale_value::Number;
    ///
    /// // 2^53 + 1 is not representable as f64 but still compares above 2^53.
    /// let n = Number::Int(9_007_199_254_740_993);
    /// assert_eq!(n.partial_cmp_f64(9_007_199_254_740_992.0), Some(Ordering::Greater));
    /// ```
    #[must_use]
    pub fn partial_cmp_f64(self, other: f64) -> Option<Ordering> {
        match self {
            Self::Int(i) => int_cmp_f64(i, other),
            Self::Float(f) => f.partial_cmp(&other),
        }
    }
}

// Outside [-2^63, 2^63) the float is beyond every i64; inside it, its integer
// part converts exactly and only the fraction can break a tie.
#[allow(clippy::cast_possible_truncation)]
fn int_cmp_f64(i: i64, f: f64) -> Option<Ordering> {
    if f.is_nan() {
        return None;
    }
    if f >= I64_BOUND {
        return Some(Ordering::Less);
    }
    if f < -I64_BOUND {
        return Some(Ordering::Greater);
    }

    let whole = f.trunc();
    let ord = i
        .cmp(&(whole as i64))
        .then_with(|| whole.partial_cmp(&f).unwrap_or(Ordering::Equal));
    Some(ord)
}

impl From<i64> for Number {
    #[inline]
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    #[inline]
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<Number> for Value {
    #[inline]
    fn from(v: Number) -> Self {
        match v {
            Number::Int(i) => Self::Integer(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}
