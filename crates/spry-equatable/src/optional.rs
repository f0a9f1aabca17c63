//! Optional unwrapping.
//!
//! Each step removes one wrapper layer from both sides and hands the payloads
//! back to the resolver, so `Option<Option<T>>` and deeper nest without a
//! depth limit.

use crate::diagnostic::Diagnostic;
use crate::equatable::SpryEquatable;
use crate::resolver::{dispatch, same_type};

pub(crate) fn compare_optionals(
    expected: &dyn SpryEquatable,
    actual: Option<&dyn SpryEquatable>,
) -> Result<bool, Diagnostic> {
    let expected_payload = optional_view(expected)?;
    let actual_payload = match actual {
        None => None,
        Some(_) => optional_view(same_type(expected, actual)?)?,
    };

    match (expected_payload, actual_payload) {
        (None, None) => Ok(true),
        (None, Some(_)) | (Some(_), None) => Ok(false),
        (Some(expected), Some(actual)) => dispatch(expected, Some(actual)),
    }
}

fn optional_view(value: &dyn SpryEquatable) -> Result<Option<&dyn SpryEquatable>, Diagnostic> {
    value.optional().ok_or(Diagnostic::MisclassifiedOptional {
        type_name: value.operand_type_name(),
    })
}
