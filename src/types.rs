use crate::consts::{
    FIELD_WIDTH, MAX_DAY, MAX_HOUR, MAX_MINUTE, MAX_MONTH, MAX_SECOND, MAX_YEAR, MIN_DAY,
    MIN_HOUR, MIN_MINUTE, MIN_MONTH, MIN_SECOND, TIMESTAMP_FORMAT, YEAR_WIDTH,
    LEAP_SECOND_NANOS,
};
use crate::{ParseError, prelude::*};
use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One of the six fixed-width numeric components of the timestamp layout,
/// ordered from most to least significant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Field {
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "day")]
    Day,
    #[display(fmt = "hour")]
    Hour,
    #[display(fmt = "minute")]
    Minute,
    #[display(fmt = "second")]
    Second,
}

impl Field {
    /// All fields in layout order.
    pub const ALL: [Self; 6] = [
        Self::Year,
        Self::Month,
        Self::Day,
        Self::Hour,
        Self::Minute,
        Self::Second,
    ];

    /// Number of digits the field occupies in the layout
    pub const fn width(self) -> usize {
        match self {
            Self::Year => YEAR_WIDTH,
            Self::Month | Self::Day | Self::Hour | Self::Minute | Self::Second => FIELD_WIDTH,
        }
    }

    /// Smallest value the field can take
    pub const fn lowest(self) -> u16 {
        match self {
            Self::Year => 0,
            Self::Month => MIN_MONTH as u16,
            Self::Day => MIN_DAY as u16,
            Self::Hour => MIN_HOUR as u16,
            Self::Minute => MIN_MINUTE as u16,
            Self::Second => MIN_SECOND as u16,
        }
    }

    /// Largest value the field can take
    pub const fn highest(self) -> u16 {
        match self {
            Self::Year => MAX_YEAR,
            Self::Month => MAX_MONTH as u16,
            Self::Day => MAX_DAY as u16,
            Self::Hour => MAX_HOUR as u16,
            Self::Minute => MAX_MINUTE as u16,
            Self::Second => MAX_SECOND as u16,
        }
    }

    /// Whether `value` lies within `lowest()..=highest()`
    pub const fn contains(self, value: u16) -> bool {
        self.lowest() <= value && value <= self.highest()
    }

    /// Whether a difference in a more significant field forces this field to
    /// cover a rollover. The year has nothing above it.
    pub const fn wraps(self) -> bool {
        !matches!(self, Self::Year)
    }

    /// Literal that follows this field in the layout, if any
    pub const fn separator(self) -> Option<char> {
        use crate::consts::{DATE_SEPARATOR, DATE_TIME_SEPARATOR, TIME_SEPARATOR};

        match self {
            Self::Year | Self::Month => Some(DATE_SEPARATOR),
            Self::Day => Some(DATE_TIME_SEPARATOR),
            Self::Hour | Self::Minute => Some(TIME_SEPARATOR),
            Self::Second => None,
        }
    }
}

/// A point in time in the layout `YYYY-MM-DD HH:MM:SS`, exposed as six integers.
///
/// Every component is checked against its [`Field`] domain on construction.
/// Day counts per month are only enforced when parsing from text.
/// Ordering compares the six components in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(
    fmt = "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
    year,
    month,
    day,
    hour,
    minute,
    second
)]
pub struct Timestamp {
    year:   u16,
    month:  u8,
    day:    u8,
    hour:   u8,
    minute: u8,
    second: u8,
}

impl Timestamp {
    /// Creates a new Timestamp, validating each component against its field domain
    ///
    /// # Errors
    /// Returns `ParseError::OutOfRange` naming the first component outside its domain.
    pub fn new(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> Result<Self, ParseError> {
        let components = [
            year,
            u16::from(month),
            u16::from(day),
            u16::from(hour),
            u16::from(minute),
            u16::from(second),
        ];
        for (field, value) in Field::ALL.into_iter().zip(components) {
            if !field.contains(value) {
                return Err(ParseError::OutOfRange { field, value });
            }
        }

        Ok(Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    #[inline]
    pub const fn year(&self) -> u16 {
        self.year
    }

    #[inline]
    pub const fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    pub const fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    pub const fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    pub const fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    pub const fn second(&self) -> u8 {
        self.second
    }

    /// Returns the value of `field`, widened to u16
    pub const fn get(&self, field: Field) -> u16 {
        match field {
            Field::Year => self.year,
            Field::Month => self.month as u16,
            Field::Day => self.day as u16,
            Field::Hour => self.hour as u16,
            Field::Minute => self.minute as u16,
            Field::Second => self.second as u16,
        }
    }
}

impl TryFrom<NaiveDateTime> for Timestamp {
    type Error = ParseError;

    // chrono keeps the components below the year well inside u8
    #[allow(clippy::cast_possible_truncation)]
    fn try_from(value: NaiveDateTime) -> Result<Self, Self::Error> {
        let year = u16::try_from(value.year()).map_err(|_| ParseError::InvalidFormat {
            input:  value.to_string(),
            reason: format!("year must be 0-{MAX_YEAR}"),
        })?;
        // chrono folds a leap second into second 59
        if value.nanosecond() >= LEAP_SECOND_NANOS {
            return Err(ParseError::OutOfRange {
                field: Field::Second,
                value: MAX_SECOND as u16 + 1,
            });
        }

        Self::new(
            year,
            value.month() as u8,
            value.day() as u8,
            value.hour() as u8,
            value.minute() as u8,
            value.second() as u8,
        )
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseError::EmptyInput);
        }
        check_layout(trimmed)?;

        let parsed = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|err| {
            ParseError::InvalidFormat {
                input:  trimmed.to_owned(),
                reason: err.to_string(),
            }
        })?;

        Self::try_from(parsed)
    }
}

/// Checks `s` against `YYYY-MM-DD HH:MM:SS` byte by byte. chrono on its own
/// accepts unpadded fields.
fn check_layout(s: &str) -> Result<(), ParseError> {
    let malformed = |what: String| ParseError::InvalidFormat {
        input:  s.to_owned(),
        reason: format!("{what} does not fit the layout YYYY-MM-DD HH:MM:SS"),
    };

    let mut bytes = s.bytes();
    for field in Field::ALL {
        let width = field.width();
        if bytes.by_ref().take(width).filter(u8::is_ascii_digit).count() != width {
            return Err(malformed(field.to_string()));
        }
        if !field
            .separator()
            .is_none_or(|separator| bytes.next() == u8::try_from(separator).ok())
        {
            return Err(malformed(format!("separator after {field}")));
        }
    }
    if bytes.next().is_some() {
        return Err(malformed("trailing input".to_owned()));
    }

    Ok(())
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ts;

    #[test]
    fn test_field_order() {
        assert!(Field::Year < Field::Month);
        assert!(Field::Minute < Field::Second);
        assert_eq!(Field::ALL.first(), Some(&Field::Year));
        assert_eq!(Field::ALL.last(), Some(&Field::Second));
    }

    #[test]
    fn test_field_domains() {
        struct TestCase {
            field: Field,
            min:   u16,
            max:   u16,
            width: usize,
        }

        let cases = [
            TestCase { field: Field::Year, min: 0, max: 9999, width: 4 },
            TestCase { field: Field::Month, min: 1, max: 12, width: 2 },
            TestCase { field: Field::Day, min: 1, max: 31, width: 2 },
            TestCase { field: Field::Hour, min: 0, max: 23, width: 2 },
            TestCase { field: Field::Minute, min: 0, max: 59, width: 2 },
            TestCase { field: Field::Second, min: 0, max: 59, width: 2 },
        ];

        for case in &cases {
            assert_eq!(case.field.lowest(), case.min, "{} min", case.field);
            assert_eq!(case.field.highest(), case.max, "{} max", case.field);
            assert_eq!(case.field.width(), case.width, "{} width", case.field);
        }
    }

    #[test]
    fn test_field_contains() {
        assert!(Field::Month.contains(1));
        assert!(Field::Month.contains(12));
        assert!(!Field::Month.contains(0));
        assert!(!Field::Month.contains(13));
        assert!(Field::Hour.contains(0));
        assert!(!Field::Hour.contains(24));
        assert!(!Field::Second.contains(60));
    }

    #[test]
    fn test_field_wraps_and_separator() {
        assert!(!Field::Year.wraps());
        assert!(Field::Second.wraps());
        assert_eq!(Field::Year.separator(), Some('-'));
        assert_eq!(Field::Day.separator(), Some(' '));
        assert_eq!(Field::Minute.separator(), Some(':'));
        assert_eq!(Field::Second.separator(), None);
    }

    #[test]
    fn test_field_display() {
        assert_eq!(Field::Year.to_string(), "year");
        assert_eq!(Field::Minute.to_string(), "minute");
    }

    #[test]
    fn test_timestamp_new_invalid() {
        let result = Timestamp::new(2020, 13, 1, 0, 0, 0);
        assert!(matches!(
            result,
            Err(ParseError::OutOfRange { field: Field::Month, value: 13 })
        ));

        let result = Timestamp::new(2020, 1, 0, 0, 0, 0);
        assert!(matches!(
            result,
            Err(ParseError::OutOfRange { field: Field::Day, value: 0 })
        ));

        let result = Timestamp::new(2020, 1, 1, 24, 0, 0);
        assert!(matches!(
            result,
            Err(ParseError::OutOfRange { field: Field::Hour, value: 24 })
        ));

        let result = Timestamp::new(10000, 1, 1, 0, 0, 0);
        assert!(matches!(
            result,
            Err(ParseError::OutOfRange { field: Field::Year, value: 10000 })
        ));
    }

    #[test]
    fn test_timestamp_new_skips_calendar_checks() {
        // February 31st is within the day domain; only parsing rejects it
        assert!(Timestamp::new(2021, 2, 31, 0, 0, 0).is_ok());
        assert!("2021-02-31 00:00:00".parse::<Timestamp>().is_err());
    }

    #[test]
    fn test_timestamp_get() {
        let t = ts(2021, 7, 4, 12, 30, 5);
        assert_eq!(t.get(Field::Year), 2021);
        assert_eq!(t.get(Field::Month), 7);
        assert_eq!(t.get(Field::Day), 4);
        assert_eq!(t.get(Field::Hour), 12);
        assert_eq!(t.get(Field::Minute), 30);
        assert_eq!(t.get(Field::Second), 5);
    }

    #[test]
    fn test_timestamp_parse() {
        let t: Timestamp = "2020-05-01 00:00:09".parse().unwrap();
        assert_eq!(t, ts(2020, 5, 1, 0, 0, 9));

        let t: Timestamp = "  2021-12-31 23:59:59 ".parse().unwrap();
        assert_eq!(t, ts(2021, 12, 31, 23, 59, 59));
    }

    #[test]
    fn test_timestamp_parse_errors() {
        assert!(matches!(
            "".parse::<Timestamp>(),
            Err(ParseError::EmptyInput)
        ));
        assert!(matches!(
            "2020-05-01".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "2020-05-01T00:00:00".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!("2020-13-01 00:00:00".parse::<Timestamp>().is_err());
        assert!("2020-01-01 25:00:00".parse::<Timestamp>().is_err());
        assert!("2023-02-29 00:00:00".parse::<Timestamp>().is_err());
        assert!("2024-02-29 00:00:00".parse::<Timestamp>().is_ok());

        // leap second must not collapse into second 59
        assert!(matches!(
            "2021-07-04 12:30:60".parse::<Timestamp>(),
            Err(ParseError::OutOfRange { field: Field::Second, value: 60 })
        ));

        // every field must be zero padded to its full width
        assert!(matches!(
            "2021-7-4 1:2:3".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "2021-07-04 12:30:5".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "2021-07-04 12:30:055".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
        assert!(matches!(
            "21-07-04 12:30:05".parse::<Timestamp>(),
            Err(ParseError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_check_layout() {
        assert!(check_layout("2021-07-04 12:30:05").is_ok());
        assert!(check_layout("0001-01-01 00:00:00").is_ok());
        assert!(check_layout("2021/07/04 12:30:05").is_err());
        assert!(check_layout("2021-07-04 12.30.05").is_err());
        assert!(check_layout("2021-07-04 12:30").is_err());
    }

    #[test]
    fn test_timestamp_display() {
        assert_eq!(ts(2020, 5, 1, 0, 0, 9).to_string(), "2020-05-01 00:00:09");
        assert_eq!(ts(987, 12, 31, 23, 59, 59).to_string(), "0987-12-31 23:59:59");
    }

    #[test]
    fn test_timestamp_ordering() {
        let earlier = ts(2021, 7, 4, 12, 30, 0);
        let later = ts(2021, 7, 4, 12, 30, 5);
        assert!(earlier < later);
        assert!(ts(2020, 12, 31, 23, 59, 59) < ts(2021, 1, 1, 0, 0, 0));
        assert!(ts(2021, 1, 31, 0, 0, 0) < ts(2021, 2, 1, 0, 0, 0));
    }

    #[test]
    fn test_timestamp_serde() {
        let t = ts(2021, 7, 4, 12, 30, 5);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, r#""2021-07-04 12:30:05""#);

        let parsed: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(t, parsed);

        let result: Result<Timestamp, _> = serde_json::from_str(r#""2021-07-04""#);
        assert!(result.is_err());
    }
}
