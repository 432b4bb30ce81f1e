//! Built-in rules
//!
//! | Rule | Factory | Accepts |
//! |---|---|---|
//! | [`StartsWith`] (`startsWith`) | [`starts_with`] | text |
//! | [`EndsWith`] (`endsWith`) | [`ends_with`] | text |
//! | [`MaxNumber`] (`maxNumber`) | [`max_number`] | integer, float |
//! | [`MinNumber`] (`minNumber`) | [`min_number`] | integer, float |
//! | [`DateBeforeOrEqual`] (`dateBeforeOrEqual`) | [`date_before_or_equal`] | date, datetime |
//! | [`DateAfterOrEqual`] (`dateAfterOrEqual`) | [`date_after_or_equal`] | date, datetime |

pub mod any;
pub mod date;
pub mod number;
pub mod string;

pub use any::AnyRule;
pub use date::{
    DateAfterOrEqual, DateBeforeOrEqual, date_after_or_equal, date_before_or_equal, start_of_day,
};
pub use number::{MaxNumber, MinNumber, max_number, min_number};
pub use string::{EndsWith, StartsWith, ends_with, starts_with};
