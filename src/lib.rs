//! Compile a closed timestamp interval into a regular expression.
//!
//! Given two timestamps in the layout `YYYY-MM-DD HH:MM:SS`, the crate
//! produces one pattern made of literal digits, bracket digit classes and the
//! layout separators, suitable for handing to a grep-like tool to select log
//! lines stamped between the two instants.
//!
//! ```
//! use tt_regex::TimestampRange;
//!
//! let range = TimestampRange::parse("2021-07-04 12:30:00", "2021-07-04 12:30:05")?;
//! assert_eq!(range.pattern()?, "2021-07-04 12:30:0[0-5]");
//! # Ok::<(), tt_regex::RangeError>(())
//! ```
//!
//! Once a field differs between the endpoints, every less significant field
//! is widened to cover its rollover, with one bounding class per digit
//! position. The pattern always matches both endpoints and may match some
//! timestamps outside the interval.

mod consts;
mod digits;
mod field;
mod pattern;
mod prelude;
mod range;
mod types;

pub use consts::*;
pub use digits::{DigitRange, DigitRangeVector};
pub use field::{CompileError, FieldFragment, compile_field};
pub use pattern::{
    Simplify, assemble, compile_interval_to_pattern, compile_interval_to_pattern_with, simplify,
};
pub use range::{RangeError, TimestampRange};
pub use types::{Field, Timestamp};

use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Invalid timestamp \"{input}\": {reason}")]
    InvalidFormat { input: String, reason: String },
    #[display(
        fmt = "Invalid {}: {} (must be {}-{})",
        field,
        value,
        "field.lowest()",
        "field.highest()"
    )]
    OutOfRange { field: Field, value: u16 },
    #[display(fmt = "Empty timestamp string")]
    EmptyInput,
}

impl std::error::Error for ParseError {}
