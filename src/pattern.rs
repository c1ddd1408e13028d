//! Assembly of the per-field fragments into one timestamp pattern.

#[allow(unused_imports)]
use ::si_trace_print::{defn, defo, defx};

use crate::consts::{DIGIT_SHORTHAND, FULL_DIGIT_CLASS};
use crate::field::{CompileError, FieldFragment, compile_field};
use crate::types::{Field, Timestamp};

/// Whether full-digit classes are shortened after assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Simplify {
    /// Replace every `[0-9]` with `\d`
    #[default]
    Shorthand,
    /// Leave bracket classes as rendered
    Keep,
}

/// Compiles the closed interval `[start, end]` into a pattern matching
/// timestamps in the layout `YYYY-MM-DD HH:MM:SS`.
///
/// The caller is expected to have checked that `start` precedes `end`.
/// Fields below the first differing field are broadened, so the pattern may
/// also match timestamps outside the interval. It always matches both
/// endpoints.
///
/// # Errors
/// Returns the first [`CompileError`] raised by a field; no partial pattern
/// is produced.
pub fn compile_interval_to_pattern(
    start: &Timestamp,
    end: &Timestamp,
) -> Result<String, CompileError> {
    compile_interval_to_pattern_with(start, end, Simplify::default())
}

/// Like [`compile_interval_to_pattern`] with explicit control over the
/// `[0-9]` shorthand pass.
///
/// # Errors
/// See [`compile_interval_to_pattern`].
pub fn compile_interval_to_pattern_with(
    start: &Timestamp,
    end: &Timestamp,
    simplify: Simplify,
) -> Result<String, CompileError> {
    defn!("({}, {}, {:?})", start, end, simplify);

    let mut tight = true;
    let mut fragments = Vec::with_capacity(Field::ALL.len());
    for field in Field::ALL {
        let fragment = compile_field(field, start.get(field), end.get(field), tight)?;
        tight = fragment.is_tight();
        fragments.push(fragment);
    }

    let pattern = assemble(&fragments);
    let pattern = match simplify {
        Simplify::Shorthand => self::simplify(&pattern),
        Simplify::Keep => pattern,
    };
    defx!("return {:?}", pattern);

    Ok(pattern)
}

/// Joins field fragments with the separators of the layout.
pub fn assemble(fragments: &[FieldFragment]) -> String {
    let mut pattern = String::new();
    for fragment in fragments {
        pattern.push_str(fragment.as_str());
        if let Some(separator) = fragment.field().separator() {
            pattern.push(separator);
        }
    }
    pattern
}

/// Replaces every full-digit class with the digit shorthand.
pub fn simplify(pattern: &str) -> String {
    pattern.replace(FULL_DIGIT_CLASS, DIGIT_SHORTHAND)
}
