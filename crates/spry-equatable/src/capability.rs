//! Capability tags.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which equality strategy a concrete type satisfies.
///
/// Every type that can appear as an operand carries exactly one tag, fixed
/// by its [`SpryEquatable`](crate::SpryEquatable) implementation. Types that
/// implement the trait without picking a tag are [`Capability::Unsupported`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Compared with the type's own value equality definition.
    ValueEquatable,
    /// Reference type compared by identity only.
    IdentityEquatable,
    /// Reference type that also defines value equality. Still compared by
    /// identity: two handles are equal only when they denote one instance.
    ValueAndIdentityEquatable,
    /// Sequence compared index by index.
    OrderedContainer,
    /// Mapping compared entry by entry, paired by key.
    KeyedContainer,
    /// Possibly-absent wrapper, unwrapped one layer per step.
    OptionalWrapper,
    /// No strategy; using the value as an operand is a contract violation.
    Unsupported,
}

impl Capability {
    pub fn as_str(self) -> &'static str {
        match self {
            Capability::ValueEquatable => "value_equatable",
            Capability::IdentityEquatable => "identity_equatable",
            Capability::ValueAndIdentityEquatable => "value_and_identity_equatable",
            Capability::OrderedContainer => "ordered_container",
            Capability::KeyedContainer => "keyed_container",
            Capability::OptionalWrapper => "optional_wrapper",
            Capability::Unsupported => "unsupported",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
