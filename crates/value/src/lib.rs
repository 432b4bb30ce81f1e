//! # vale-value
//!
//! The dynamically typed value that vale rules are evaluated against.
//!
//! A [`Value`] is a tagged union over the runtime types a rule may be handed:
//! scalars, text, calendar dates, date-times and the two collections. Rules
//! discriminate on its [`ValueKind`] before comparing anything, so a candidate
//! of the wrong type is a reported failure rather than a panic.
//!
//! ```
//! use vale_value::{Number, Value, ValueKind};
//!
//! let v = Value::from("abc");
//! assert_eq!(v.kind(), ValueKind::String);
//! assert_eq!(v.as_str(), Some("abc"));
//!
//! // Integers keep full precision in the numeric view.
//! let n = Value::from(i64::MAX);
//! assert_eq!(n.as_number(), Some(Number::Int(i64::MAX)));
//! ```

mod convert;
mod kind;
mod number;
mod value;

pub use kind::ValueKind;
pub use number::Number;
pub use value::{Object, Value};
