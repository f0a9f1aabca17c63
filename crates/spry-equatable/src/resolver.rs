//! Strategy dispatch.
//!
//! The declared [`Capability`] of the expected operand selects the strategy.
//! Arms are listed most specific first: absence is settled before any value
//! comparison, identity beats value equality for reference types, and
//! containers recurse back into [`dispatch`] for their parts.
//!
//! Both operands are walked for unsupported parts once, before dispatch, so
//! no comparison outcome can hide a missing capability at any depth.

use crate::capability::Capability;
use crate::containers;
use crate::diagnostic::{Diagnostic, Role, ABSENT};
use crate::equatable::SpryEquatable;
use crate::optional;

/// Strips transparent wrappers until the value that carries the capability.
pub(crate) fn peel(mut value: &dyn SpryEquatable) -> &dyn SpryEquatable {
    while let Some(inner) = value.forwarded() {
        value = inner;
    }
    value
}

/// Compares two operands, returning the diagnostic instead of reporting it.
pub(crate) fn compare(
    expected: &dyn SpryEquatable,
    actual: Option<&dyn SpryEquatable>,
) -> Result<bool, Diagnostic> {
    ensure_supported(expected, Role::Operand)?;
    if let Some(actual) = actual {
        ensure_supported(actual, Role::Operand)?;
    }
    dispatch(expected, actual)
}

/// Applies the strategy of `expected` to operands already checked for
/// support.
pub(crate) fn dispatch(
    expected: &dyn SpryEquatable,
    actual: Option<&dyn SpryEquatable>,
) -> Result<bool, Diagnostic> {
    let expected = peel(expected);
    let actual = actual.map(peel);
    let capability = expected.capability();
    tracing::trace!(
        capability = capability.as_str(),
        expected = expected.operand_type_name(),
        actual = actual.map_or(ABSENT, |a| a.operand_type_name()),
        "dispatching comparison"
    );

    match capability {
        Capability::OptionalWrapper => optional::compare_optionals(expected, actual),
        Capability::ValueAndIdentityEquatable | Capability::IdentityEquatable => {
            let actual = same_type(expected, actual)?;
            Ok(std::ptr::eq(expected.identity(), actual.identity()))
        }
        Capability::ValueEquatable => {
            let actual = same_type(expected, actual)?;
            expected
                .value_eq(actual.as_any())
                .ok_or_else(|| unsupported(expected, Role::Operand))
        }
        Capability::OrderedContainer => {
            let actual = same_type(expected, actual)?;
            containers::compare_sequences(expected, actual)
        }
        Capability::KeyedContainer => {
            let actual = same_type(expected, actual)?;
            containers::compare_mappings(expected, actual)
        }
        Capability::Unsupported => Err(unsupported(expected, Role::Operand)),
    }
}

/// Views `actual` as the same concrete type as `expected`.
pub(crate) fn same_type<'a>(
    expected: &dyn SpryEquatable,
    actual: Option<&'a dyn SpryEquatable>,
) -> Result<&'a dyn SpryEquatable, Diagnostic> {
    match actual {
        Some(actual) if actual.operand_type() == expected.operand_type() => Ok(actual),
        _ => Err(Diagnostic::TypeMismatch {
            expected: expected.operand_type_name(),
            actual: actual.map_or(ABSENT, |a| a.operand_type_name()),
        }),
    }
}

/// Fails unless `value` and every element, key, value and optional payload
/// inside it declare a supported capability. `role` names the innermost
/// position of the offending value.
pub(crate) fn ensure_supported(value: &dyn SpryEquatable, role: Role) -> Result<(), Diagnostic> {
    let value = peel(value);
    match value.capability() {
        Capability::Unsupported => Err(unsupported(value, role)),
        Capability::OrderedContainer => {
            for (index, element) in value.elements().into_iter().enumerate() {
                ensure_supported(element, Role::Element { index })?;
            }
            Ok(())
        }
        Capability::KeyedContainer => {
            for (key, item) in value.entries() {
                ensure_supported(key, Role::MapKey)?;
                ensure_supported(item, Role::MapValue)?;
            }
            Ok(())
        }
        // A missing wrapper view is reported as misclassified by dispatch.
        Capability::OptionalWrapper => match value.optional() {
            Some(Some(payload)) => ensure_supported(payload, Role::Wrapped),
            _ => Ok(()),
        },
        _ => Ok(()),
    }
}

fn unsupported(value: &dyn SpryEquatable, role: Role) -> Diagnostic {
    Diagnostic::UnsupportedComparison {
        type_name: value.operand_type_name(),
        role,
    }
}
