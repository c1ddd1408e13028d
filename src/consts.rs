/// Maximum year representable in the four-digit layout (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Month domain bounds (January..December)
pub const MIN_MONTH: u8 = 1;
pub const MAX_MONTH: u8 = 12;

/// Day domain bounds. No per-month day counts are applied here.
pub const MIN_DAY: u8 = 1;
pub const MAX_DAY: u8 = 31;

/// Hour domain bounds
pub const MIN_HOUR: u8 = 0;
pub const MAX_HOUR: u8 = 23;

/// Minute domain bounds
pub const MIN_MINUTE: u8 = 0;
pub const MAX_MINUTE: u8 = 59;

/// Second domain bounds (no leap seconds)
pub const MIN_SECOND: u8 = 0;
pub const MAX_SECOND: u8 = 59;

/// Rendered digit width of the year field
pub const YEAR_WIDTH: usize = 4;
/// Rendered digit width of every other field
pub const FIELD_WIDTH: usize = 2;

/// `chrono` format string for the timestamp layout `YYYY-MM-DD HH:MM:SS`
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Separator between year, month and day
pub const DATE_SEPARATOR: char = '-';
/// Separator between the date and the time of day
pub const DATE_TIME_SEPARATOR: char = ' ';
/// Separator between hour, minute and second
pub const TIME_SEPARATOR: char = ':';
/// Separator between the start and end of a textual range
pub const RANGE_SEPARATOR: char = '/';

/// Bracket class matching any decimal digit
pub const FULL_DIGIT_CLASS: &str = "[0-9]";
/// Shorthand equivalent of [`FULL_DIGIT_CLASS`]
pub const DIGIT_SHORTHAND: &str = r"\d";

/// chrono reports a leap second as a nanosecond count at or above this value
pub(crate) const LEAP_SECOND_NANOS: u32 = 1_000_000_000;
