//! Per-position digit bounds over an integer range.
//!
//! For every value in an inclusive range the decimal digits at each position
//! are scanned and the smallest and largest digit seen is kept. The result
//! renders as a run of literal digits and bracket classes, most significant
//! position first.

use std::fmt;
use std::ops::RangeInclusive;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::prelude::*;

/// Inclusive set of digit values observed at one digit position.
/// Invariant: `min <= max <= 9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DigitRange {
    min: u8,
    max: u8,
}

impl DigitRange {
    /// A range holding exactly one digit
    pub const fn single(digit: u8) -> Self {
        debug_assert!(digit <= 9);
        Self {
            min: digit,
            max: digit,
        }
    }

    #[inline]
    pub const fn min(self) -> u8 {
        self.min
    }

    #[inline]
    pub const fn max(self) -> u8 {
        self.max
    }

    /// True when only one digit value was observed
    #[inline]
    pub const fn is_single(self) -> bool {
        self.min == self.max
    }

    /// Widens the range so it also covers `digit`
    #[must_use]
    pub fn include(self, digit: u8) -> Self {
        Self {
            min: self.min.min(digit),
            max: self.max.max(digit),
        }
    }

    /// Smallest range covering both `self` and `other`
    #[must_use]
    pub fn merge(self, other: Self) -> Self {
        Self {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }
}

impl fmt::Display for DigitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "[{}-{}]", self.min, self.max)
        }
    }
}

/// One [`DigitRange`] per digit position of a fixed-width field.
///
/// Stored least significant position first; `Display` writes the most
/// significant position first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref)]
pub struct DigitRangeVector(Vec<DigitRange>);

impl DigitRangeVector {
    /// Scans every value in `values` and records, for each of the `width`
    /// least significant decimal positions, the smallest and largest digit.
    /// Digits above `width` are dropped.
    ///
    /// Returns `None` for an empty range.
    pub fn extract(values: RangeInclusive<u16>, width: usize) -> Option<Self> {
        defn!("({:?}, {})", values, width);

        let ranges = values.fold(None, |acc: Option<Vec<DigitRange>>, value| {
            let digits = low_digits(value, width);
            Some(match acc {
                None => digits.map(DigitRange::single).collect(),
                Some(ranges) => ranges
                    .into_iter()
                    .zip(digits)
                    .map(|(range, digit)| range.include(digit))
                    .collect(),
            })
        });

        defx!("return {:?}", ranges);
        ranges.map(Self)
    }

    /// Position-wise union of two vectors of equal width.
    ///
    /// The result is a bounding box, so it may admit digit combinations
    /// that neither input range contains.
    #[must_use]
    pub fn merge(self, other: &Self) -> Self {
        debug_assert_eq!(self.0.len(), other.0.len());
        Self(
            self.0
                .into_iter()
                .zip(other.0.iter())
                .map(|(a, b)| a.merge(*b))
                .collect(),
        )
    }

    /// Number of digit positions
    #[inline]
    pub fn width(&self) -> usize {
        self.0.len()
    }

    /// True when every position holds a single digit
    pub fn is_literal(&self) -> bool {
        self.0.iter().all(|range| range.is_single())
    }
}

impl fmt::Display for DigitRangeVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().rev().try_for_each(|range| write!(f, "{range}"))
    }
}

/// The `width` least significant decimal digits of `value`, ones first.
fn low_digits(value: u16, width: usize) -> impl Iterator<Item = u8> {
    let mut rest = value;
    (0..width).map(move |_| {
        // always < 10
        #[allow(clippy::cast_possible_truncation)]
        let digit = (rest % 10) as u8;
        rest /= 10;
        digit
    })
}
