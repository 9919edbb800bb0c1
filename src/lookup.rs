//! Positional lookup with the directional scan policy all variants share.
//!
//! The result is always an explicit `Option<usize>` threaded back to the
//! caller. The source system this crate is compatible with communicated the
//! found index through a variable shared across has/get/set/delete; that
//! protocol breaks as soon as a lookup happens inside another lookup's
//! window, so it is deliberately not reproduced.

use crate::value::Value;
use std::error::Error;
use std::fmt;

/// Errors raised by the collection engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionError {
    /// A non-reference value was used as a key of a weak-typed collection.
    InvalidKey,
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionError::InvalidKey => {
                f.write_str("invalid value used as weak collection key")
            }
        }
    }
}

impl Error for CollectionError {}

/// Find the position of `key` in `list`.
///
/// Scan policy, kept bug-for-bug compatible with the source system:
/// - NaN and zero keys scan right-to-left under `same_value_zero`, so the
///   rightmost of transiently duplicated entries wins.
/// - Every other key scans left-to-right under strict equality, so the
///   leftmost wins.
///
/// For weak-typed instances the reference-type gate runs before the scan
/// and fires even when `list` is empty.
pub(crate) fn find_index(
    list: &[Value],
    key: &Value,
    weak_typed: bool,
) -> Result<Option<usize>, CollectionError> {
    if weak_typed && !key.is_reference() {
        return Err(CollectionError::InvalidKey);
    }
    if key.is_nan_or_zero() {
        Ok(list.iter().rposition(|v| v.same_value_zero(key)))
    } else {
        Ok(list.iter().position(|v| v.strict_eq(key)))
    }
}
