//! spry-equatable - Type-erased deep equality for test doubles.
//!
//! A spy or stub records the arguments it was called with as trait objects
//! and later needs to answer "was this call made with an argument equal to
//! the expected one?". [`is_equal`] answers that question for any pair of
//! [`SpryEquatable`] operands:
//!
//! - value types compare with their `PartialEq` definition,
//! - reference types ([`Rc`](std::rc::Rc), [`Arc`](std::sync::Arc), and
//!   types registered as identity-equatable) compare by identity,
//! - sequences and mappings compare structurally, recursing into their
//!   elements,
//! - [`Option`] is unwrapped layer by layer.
//!
//! Misuse is never reported as "not equal". Comparing operands of different
//! runtime types, or an operand whose type never declared a [`Capability`],
//! raises a [`Diagnostic`] through the reporter, which panics (or aborts,
//! see [`FailureMode`]).
//!
//! ```
//! use spry_equatable::{is_equal, operands};
//!
//! let expected = operands![1_i64, String::from("a"), Some(true)];
//! let actual = operands![1_i64, String::from("a"), Some(true)];
//!
//! assert!(is_equal(&expected, Some(&actual)));
//! assert!(!is_equal(&Some(5), Some(&None::<i32>)));
//! ```

mod capability;
mod config;
mod conformers;
mod containers;
mod diagnostic;
mod equatable;
mod optional;
mod resolver;

pub use capability::Capability;
pub use config::{Comparator, ComparatorConfig, FailureMode};
pub use diagnostic::{report, Diagnostic, Role, ABSENT};
pub use equatable::{Operand, SpryEquatable};

/// Compares `expected` with `actual` using the default [`Comparator`].
///
/// `actual` may be absent; that is only equal to an absent optional.
///
/// # Panics
///
/// Panics with the [`Diagnostic`] text when the comparison violates the
/// equality contract (unsupported operand, mismatched types, or a
/// misclassified optional).
pub fn is_equal(expected: &dyn SpryEquatable, actual: Option<&dyn SpryEquatable>) -> bool {
    Comparator::default().is_equal(expected, actual)
}
