//! Contract violations and the reporter that turns them into hard failures.

use std::fmt;

use thiserror::Error;

use crate::config::FailureMode;

/// Type name used in diagnostics for a missing `actual` operand.
pub const ABSENT: &str = "<absent>";

/// Where the offending value sits in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// One of the two top-level operands.
    Operand,
    /// Element `index` of an ordered container.
    Element { index: usize },
    /// A key of a keyed container.
    MapKey,
    /// A value of a keyed container.
    MapValue,
    /// The value held by a present optional.
    Wrapped,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Operand => f.write_str("operand"),
            Role::Element { index } => write!(f, "sequence element {index}"),
            Role::MapKey => f.write_str("mapping key"),
            Role::MapValue => f.write_str("mapping value"),
            Role::Wrapped => f.write_str("optional payload"),
        }
    }
}

/// A violation of the equality contract.
///
/// Diagnostics are programmer errors, not negative results: a type forgot
/// to declare its capability, or a test compares incompatible types.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    #[error("unsupported comparison: {role} of type `{type_name}` has no equality capability")]
    UnsupportedComparison {
        type_name: &'static str,
        role: Role,
    },
    #[error("type mismatch: cannot compare `{expected}` with `{actual}`")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[error("misclassified optional: `{type_name}` is tagged as an optional wrapper but exposes no optional view")]
    MisclassifiedOptional { type_name: &'static str },
}

impl Diagnostic {
    /// Stable identifier of the violation kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Diagnostic::UnsupportedComparison { .. } => "unsupported_comparison",
            Diagnostic::TypeMismatch { .. } => "type_mismatch",
            Diagnostic::MisclassifiedOptional { .. } => "misclassified_optional",
        }
    }
}

/// Reports `diagnostic` and never returns.
///
/// Every strategy funnels its failures here, so all violations are logged
/// and surfaced the same way.
pub fn report(diagnostic: Diagnostic, mode: FailureMode) -> ! {
    tracing::error!(
        kind = diagnostic.kind(),
        mode = mode.as_str(),
        "{diagnostic}"
    );
    match mode {
        FailureMode::Panic => panic!("{diagnostic}"),
        FailureMode::Abort => std::process::abort(),
    }
}
