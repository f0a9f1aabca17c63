//! Built-in conformers.
//!
//! Standard library types, `indexmap::IndexMap` and `serde_json::Value` get
//! a capability out of the box so recorded arguments of these types compare
//! without any registration by the caller.

use std::any::Any;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::capability::Capability;
use crate::equatable::SpryEquatable;

crate::spry_equatable!(value => String, &'static str, char, bool, ());
crate::spry_equatable!(value => i8, i16, i32, i64, i128, isize);
crate::spry_equatable!(value => u8, u16, u32, u64, u128, usize);
crate::spry_equatable!(value => f32, f64);
crate::spry_equatable!(value => serde_json::Value);

// ── optional ─────────────────────────────────────────────────────────────

impl<T: SpryEquatable> SpryEquatable for Option<T> {
    fn capability(&self) -> Capability {
        Capability::OptionalWrapper
    }

    fn optional(&self) -> Option<Option<&dyn SpryEquatable>> {
        Some(self.as_ref().map(|value| value as &dyn SpryEquatable))
    }
}

// ── transparent boxes ────────────────────────────────────────────────────

impl<T: SpryEquatable + ?Sized> SpryEquatable for Box<T> {
    fn capability(&self) -> Capability {
        (**self).capability()
    }

    fn forwarded(&self) -> Option<&dyn SpryEquatable> {
        Some((**self).as_spry())
    }
}

// ── reference-counted objects ────────────────────────────────────────────

impl<T: ?Sized + 'static> SpryEquatable for Rc<T> {
    fn capability(&self) -> Capability {
        Capability::IdentityEquatable
    }

    fn identity(&self) -> *const () {
        Rc::as_ptr(self).cast()
    }
}

impl<T: ?Sized + 'static> SpryEquatable for Arc<T> {
    fn capability(&self) -> Capability {
        Capability::IdentityEquatable
    }

    fn identity(&self) -> *const () {
        Arc::as_ptr(self).cast()
    }
}

// ── ordered sequences ────────────────────────────────────────────────────

impl<T: SpryEquatable> SpryEquatable for Vec<T> {
    fn capability(&self) -> Capability {
        Capability::OrderedContainer
    }

    fn elements(&self) -> Vec<&dyn SpryEquatable> {
        self.iter().map(|e| e as &dyn SpryEquatable).collect()
    }
}

impl<T: SpryEquatable> SpryEquatable for VecDeque<T> {
    fn capability(&self) -> Capability {
        Capability::OrderedContainer
    }

    fn elements(&self) -> Vec<&dyn SpryEquatable> {
        self.iter().map(|e| e as &dyn SpryEquatable).collect()
    }
}

impl<T: SpryEquatable, const N: usize> SpryEquatable for [T; N] {
    fn capability(&self) -> Capability {
        Capability::OrderedContainer
    }

    fn elements(&self) -> Vec<&dyn SpryEquatable> {
        self.iter().map(|e| e as &dyn SpryEquatable).collect()
    }
}

// ── keyed mappings ───────────────────────────────────────────────────────

fn pair<'a, K: SpryEquatable, V: SpryEquatable>(
    (key, value): (&'a K, &'a V),
) -> (&'a dyn SpryEquatable, &'a dyn SpryEquatable) {
    (key as &dyn SpryEquatable, value as &dyn SpryEquatable)
}

impl<K, V, S> SpryEquatable for HashMap<K, V, S>
where
    K: SpryEquatable + Eq + Hash,
    V: SpryEquatable,
    S: BuildHasher + 'static,
{
    fn capability(&self) -> Capability {
        Capability::KeyedContainer
    }

    fn entries(&self) -> Vec<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        self.iter().map(pair).collect()
    }

    fn entry(&self, key: &dyn Any) -> Option<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        let key = key.downcast_ref::<K>()?;
        self.get_key_value(key).map(pair)
    }
}

impl<K, V> SpryEquatable for BTreeMap<K, V>
where
    K: SpryEquatable + Ord,
    V: SpryEquatable,
{
    fn capability(&self) -> Capability {
        Capability::KeyedContainer
    }

    fn entries(&self) -> Vec<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        self.iter().map(pair).collect()
    }

    fn entry(&self, key: &dyn Any) -> Option<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        let key = key.downcast_ref::<K>()?;
        self.get_key_value(key).map(pair)
    }
}

impl<K, V, S> SpryEquatable for IndexMap<K, V, S>
where
    K: SpryEquatable + Eq + Hash,
    V: SpryEquatable,
    S: BuildHasher + 'static,
{
    fn capability(&self) -> Capability {
        Capability::KeyedContainer
    }

    fn entries(&self) -> Vec<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        self.iter().map(pair).collect()
    }

    fn entry(&self, key: &dyn Any) -> Option<(&dyn SpryEquatable, &dyn SpryEquatable)> {
        let key = key.downcast_ref::<K>()?;
        self.get_key_value(key).map(pair)
    }
}
