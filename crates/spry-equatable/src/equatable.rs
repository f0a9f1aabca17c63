//! The capability contract.

use std::any::{type_name, Any, TypeId};

use crate::capability::Capability;

/// Object-safe view of an operand, implemented for every sized
/// [`SpryEquatable`] type.
pub trait Operand: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_spry(&self) -> &dyn SpryEquatable;
    fn operand_type(&self) -> TypeId;
    fn operand_type_name(&self) -> &'static str;
}

impl<T: SpryEquatable> Operand for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_spry(&self) -> &dyn SpryEquatable {
        self
    }

    fn operand_type(&self) -> TypeId {
        TypeId::of::<T>()
    }

    fn operand_type_name(&self) -> &'static str {
        type_name::<T>()
    }
}

/// A value that may be used as an operand of [`is_equal`](crate::is_equal).
///
/// Implementing the trait only makes a type *eligible*; its
/// [`capability`](SpryEquatable::capability) picks the strategy. Without one
/// the type stays [`Capability::Unsupported`] and every comparison involving
/// it raises a diagnostic.
///
/// Plain types should be registered with [`spry_equatable!`](crate::spry_equatable)
/// instead of implementing the hooks by hand. The hooks below are consulted
/// only by the strategy matching the declared capability.
pub trait SpryEquatable: Operand {
    fn capability(&self) -> Capability {
        Capability::Unsupported
    }

    /// Value equality against an operand already known to be of type `Self`.
    /// `None` means the type defines no value equality.
    fn value_eq(&self, _other: &dyn Any) -> Option<bool> {
        None
    }

    /// Address identifying the instance for identity comparison.
    fn identity(&self) -> *const () {
        (self as *const Self).cast()
    }

    /// Elements of an ordered container, in order.
    fn elements(&self) -> Vec<&dyn SpryEquatable> {
        Vec::new()
    }

    /// Entries of a keyed container, in iteration order.
    fn entries(&self) -> Vec<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        Vec::new()
    }

    /// Looks up the entry whose key equals `key`, which is a key of a mapping
    /// of the same type.
    fn entry(&self, _key: &dyn Any) -> Option<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        None
    }

    /// Optional view: `Some(None)` when absent, `Some(Some(v))` when present,
    /// `None` when the type is not an optional wrapper at all.
    #[allow(clippy::option_option)]
    fn optional(&self) -> Option<Option<&dyn SpryEquatable>> {
        None
    }

    /// The value this one transparently stands for, if any (boxes).
    #[doc(hidden)]
    fn forwarded(&self) -> Option<&dyn SpryEquatable> {
        None
    }

    /// Compares `self` (the expected value) with a possibly absent `actual`
    /// using the default [`Comparator`](crate::Comparator).
    fn is_equal(&self, actual: Option<&dyn SpryEquatable>) -> bool {
        crate::Comparator::default().is_equal(self.as_spry(), actual)
    }
}

/// Registers concrete, non-generic types with a capability.
///
/// ```
/// use spry_equatable::{is_equal, spry_equatable};
///
/// #[derive(PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// struct Session { id: u32 }
///
/// spry_equatable!(value => Point);
/// spry_equatable!(identity => Session);
///
/// assert!(is_equal(&Point { x: 1, y: 2 }, Some(&Point { x: 1, y: 2 })));
///
/// let a = Session { id: 1 };
/// let b = Session { id: 1 };
/// assert!(is_equal(&a, Some(&a)));
/// assert!(!is_equal(&a, Some(&b)));
/// ```
///
/// `value_and_identity` requires `PartialEq` but still compares by
/// identity. `unsupported` marks a type as an operand without a strategy.
///
/// Identity is the instance address, which distinct instances of a
/// zero-sized type share, so both identity forms reject zero-sized types at
/// compile time:
///
/// ```compile_fail
/// use spry_equatable::spry_equatable;
///
/// struct Token;
///
/// spry_equatable!(identity => Token);
/// ```
///
/// ```compile_fail
/// use spry_equatable::spry_equatable;
///
/// #[derive(PartialEq)]
/// struct Marker;
///
/// spry_equatable!(value_and_identity => Marker);
/// ```
#[macro_export]
macro_rules! spry_equatable {
    (value => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SpryEquatable for $ty {
                fn capability(&self) -> $crate::Capability {
                    $crate::Capability::ValueEquatable
                }

                fn value_eq(&self, other: &dyn ::core::any::Any) -> ::core::option::Option<bool> {
                    other.downcast_ref::<Self>().map(|other| self == other)
                }
            }
        )+
    };
    (identity => $($ty:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                ::core::mem::size_of::<$ty>() != 0,
                "identity-compared types must not be zero-sized"
            );

            impl $crate::SpryEquatable for $ty {
                fn capability(&self) -> $crate::Capability {
                    $crate::Capability::IdentityEquatable
                }
            }
        )+
    };
    (value_and_identity => $($ty:ty),+ $(,)?) => {
        $(
            const _: () = ::core::assert!(
                ::core::mem::size_of::<$ty>() != 0,
                "identity-compared types must not be zero-sized"
            );

            impl $crate::SpryEquatable for $ty {
                fn capability(&self) -> $crate::Capability {
                    $crate::Capability::ValueAndIdentityEquatable
                }

                fn value_eq(&self, other: &dyn ::core::any::Any) -> ::core::option::Option<bool> {
                    other.downcast_ref::<Self>().map(|other| self == other)
                }
            }
        )+
    };
    (unsupported => $($ty:ty),+ $(,)?) => {
        $(
            impl $crate::SpryEquatable for $ty {}
        )+
    };
}

/// Builds a `Vec<Box<dyn SpryEquatable>>` from heterogeneous values, the
/// shape a spy uses for recorded argument lists.
#[macro_export]
macro_rules! operands {
    () => {
        ::std::vec::Vec::<::std::boxed::Box<dyn $crate::SpryEquatable>>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$(::std::boxed::Box::new($value) as ::std::boxed::Box<dyn $crate::SpryEquatable>),+]
    };
}
