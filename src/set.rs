//! Set and WeakSet variant adapters.

use crate::cursor::{Cursor, Entries, Keys, Values};
use crate::engine::{Core, VariantConfig};
use crate::lookup::CollectionError;
use crate::value::Value;

/// Ordered value set with SameValueZero membership.
///
/// Members are unique under `same_value_zero` and iterate in insertion
/// order. Adding an already-present member is a no-op: the first stored
/// representative wins, so a set holding `+0` still holds `+0` after
/// `add(-0)`.
pub struct Set {
    core: Core,
}

impl Set {
    pub fn new() -> Self {
        Self {
            core: Core::new(VariantConfig::STRONG),
        }
    }

    /// Build a set by folding `add` over `values` in order; duplicates
    /// after the first occurrence are ignored.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        let set = Self::new();
        for value in values {
            set.add(value);
        }
        set
    }

    pub fn size(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    pub fn has(&self, value: &Value) -> bool {
        self.core
            .has(value)
            .expect("type gate is disabled for strong variants")
    }

    /// Insert if absent. Chainable.
    pub fn add(&self, value: Value) -> &Self {
        self.core
            .add(value)
            .expect("type gate is disabled for strong variants");
        self
    }

    pub fn delete(&self, value: &Value) -> bool {
        self.core
            .delete(value)
            .expect("type gate is disabled for strong variants")
    }

    pub fn clear(&self) {
        self.core.clear();
    }

    /// Members in insertion order. Same sequence as [`Set::values`]: a set
    /// member is its own key.
    pub fn keys(&self) -> Keys {
        Keys(Cursor::open(self.core.clone()))
    }

    pub fn values(&self) -> Values {
        Values(Cursor::open(self.core.clone()))
    }

    /// Each member paired with itself, in insertion order.
    pub fn entries(&self) -> Entries {
        Entries(Cursor::open(self.core.clone()))
    }

    /// Drive an entries cursor to completion, invoking `f(value, value,
    /// set)` in cursor order.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Value, &Value, &Set),
    {
        for (key, value) in self.entries() {
            f(&value, &key, self);
        }
    }
}

impl Default for Set {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<Value> for Set {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

/// Set restricted to reference-type members, with enumeration withheld by
/// contract. As with [`WeakMap`](crate::WeakMap), membership is not
/// reclaimed on unreachability; the weak contract is the type gate and the
/// withheld enumeration.
pub struct WeakSet {
    core: Core,
}

impl WeakSet {
    pub fn new() -> Self {
        Self {
            core: Core::new(VariantConfig::WEAK),
        }
    }

    /// Build from values in order. A non-reference value anywhere in the
    /// seed aborts construction, yielding no instance.
    pub fn from_values<I>(values: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = Value>,
    {
        let set = Self::new();
        for value in values {
            set.add(value)?;
        }
        Ok(set)
    }

    pub fn has(&self, value: &Value) -> Result<bool, CollectionError> {
        self.core.has(value)
    }

    /// Insert if absent. Chainable on success.
    pub fn add(&self, value: Value) -> Result<&Self, CollectionError> {
        self.core.add(value)?;
        Ok(self)
    }

    pub fn delete(&self, value: &Value) -> Result<bool, CollectionError> {
        self.core.delete(value)
    }

    pub fn clear(&self) {
        self.core.clear();
    }
}

impl Default for WeakSet {
    fn default() -> Self {
        Self::new()
    }
}
