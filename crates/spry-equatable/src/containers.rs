//! Structural strategies for sequences and mappings.
//!
//! Both operands have already been walked for unsupported parts, so these
//! strategies may stop at the first difference.

use crate::diagnostic::Diagnostic;
use crate::equatable::SpryEquatable;
use crate::resolver::dispatch;

/// Index-wise comparison of two ordered containers of the same type.
pub(crate) fn compare_sequences(
    expected: &dyn SpryEquatable,
    actual: &dyn SpryEquatable,
) -> Result<bool, Diagnostic> {
    let expected = expected.elements();
    let actual = actual.elements();

    if expected.len() != actual.len() {
        return Ok(false);
    }
    for (a, b) in expected.into_iter().zip(actual) {
        if !dispatch(a, Some(b))? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Key-paired comparison of two keyed containers of the same type.
pub(crate) fn compare_mappings(
    expected: &dyn SpryEquatable,
    actual: &dyn SpryEquatable,
) -> Result<bool, Diagnostic> {
    let expected_entries = expected.entries();
    if expected_entries.len() != actual.entries().len() {
        return Ok(false);
    }
    for (key, value) in expected_entries {
        let Some((actual_key, actual_value)) = actual.entry(key.as_any()) else {
            return Ok(false);
        };
        if !dispatch(key, Some(actual_key))? || !dispatch(value, Some(actual_value))? {
            return Ok(false);
        }
    }
    Ok(true)
}
