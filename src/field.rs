use std::fmt;

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::digits::DigitRangeVector;
use crate::types::Field;

/// Error raised while compiling a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CompileError {
    /// All more significant fields are equal yet this field runs backwards.
    #[error("start {field} ({start}) is greater than end {field} ({end})")]
    FieldOrder { field: Field, start: u16, end: u16 },

    /// A field value outside the field's domain.
    #[error("{field} value {value} is outside {min}-{max}", min = .field.lowest(), max = .field.highest())]
    OutOfDomain { field: Field, value: u16 },
}

/// The rendered pattern of one field plus the cascade flag it hands to the
/// next, less significant field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldFragment {
    field:    Field,
    fragment: String,
    tight:    bool,
}

impl FieldFragment {
    #[inline]
    pub const fn field(&self) -> Field {
        self.field
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.fragment
    }

    /// Whether this field and every field above it are equal in both
    /// timestamps, so the next field may be compiled as a tight range.
    #[inline]
    pub const fn is_tight(&self) -> bool {
        self.tight
    }
}

impl fmt::Display for FieldFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.fragment)
    }
}

/// Compiles one field of the interval into a regex fragment.
///
/// With `tight` set, every more significant field is equal in both
/// timestamps and the field covers exactly `start..=end`. Otherwise it covers
/// `start..=field.highest()` and `field.lowest()..=end`, merged digit position by
/// digit position into a single bounding class per position rather than an
/// alternation. The year has no field above it and is always tight.
///
/// # Errors
/// Returns `CompileError::OutOfDomain` if either value lies outside the
/// field's domain, and `CompileError::FieldOrder` if the range is tight and
/// `start > end`.
pub fn compile_field(
    field: Field,
    start: u16,
    end: u16,
    tight: bool,
) -> Result<FieldFragment, CompileError> {
    defn!("({}, {}, {}, tight={})", field, start, end, tight);

    for value in [start, end] {
        if !field.contains(value) {
            defx!("{} value {} out of domain", field, value);
            return Err(CompileError::OutOfDomain { field, value });
        }
    }

    let tight = tight || !field.wraps();
    let width = field.width();
    let digits = if tight {
        DigitRangeVector::extract(start..=end, width)
            .ok_or(CompileError::FieldOrder { field, start, end })?
    } else {
        // both halves are non-empty once the domain check passed
        let head = DigitRangeVector::extract(start..=field.highest(), width)
            .ok_or(CompileError::OutOfDomain { field, value: start })?;
        let tail = DigitRangeVector::extract(field.lowest()..=end, width)
            .ok_or(CompileError::OutOfDomain { field, value: end })?;
        head.merge(&tail)
    };

    let fragment = FieldFragment {
        field,
        fragment: digits.to_string(),
        tight: tight && start == end,
    };
    defx!("return {:?}", fragment);

    Ok(fragment)
}
