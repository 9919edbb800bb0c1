//! Map and WeakMap variant adapters.

use crate::cursor::{Cursor, Entries, Keys, Values};
use crate::engine::{Core, VariantConfig};
use crate::lookup::CollectionError;
use crate::value::Value;

/// Ordered key/value map with SameValueZero key equality.
///
/// Keys are unique under `same_value_zero` and iteration follows insertion
/// order. Any value may be used as a key; missing-key lookups return the
/// empty sentinel instead of failing.
pub struct Map {
    core: Core,
}

impl Map {
    pub fn new() -> Self {
        Self {
            core: Core::new(VariantConfig::STRONG),
        }
    }

    /// Build a map by folding `set` over `pairs` in order. Later pairs with
    /// an equal key overwrite earlier ones.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let map = Self::new();
        for (key, value) in pairs {
            map.set(key, value);
        }
        map
    }

    pub fn size(&self) -> usize {
        self.core.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.len() == 0
    }

    pub fn has(&self, key: &Value) -> bool {
        self.core
            .has(key)
            .expect("type gate is disabled for strong variants")
    }

    pub fn get(&self, key: &Value) -> Option<Value> {
        self.core
            .get(key)
            .expect("type gate is disabled for strong variants")
    }

    /// Insert or overwrite. Chainable.
    pub fn set(&self, key: Value, value: Value) -> &Self {
        self.core
            .set(key, value)
            .expect("type gate is disabled for strong variants");
        self
    }

    /// Remove the entry for `key`, reporting whether one existed. Live
    /// cursors past the removed position slide back one step.
    pub fn delete(&self, key: &Value) -> bool {
        self.core
            .delete(key)
            .expect("type gate is disabled for strong variants")
    }

    pub fn clear(&self) {
        self.core.clear();
    }

    pub fn keys(&self) -> Keys {
        Keys(Cursor::open(self.core.clone()))
    }

    pub fn values(&self) -> Values {
        Values(Cursor::open(self.core.clone()))
    }

    pub fn entries(&self) -> Entries {
        Entries(Cursor::open(self.core.clone()))
    }

    /// Drive an entries cursor to completion, invoking `f(value, key, map)`
    /// in cursor order. `f` may mutate the map; the live-iteration rules
    /// apply.
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&Value, &Value, &Map),
    {
        for (key, value) in self.entries() {
            f(&value, &key, self);
        }
    }
}

impl Default for Map {
    fn default() -> Self {
        Self::new()
    }
}

impl FromIterator<(Value, Value)> for Map {
    fn from_iter<I: IntoIterator<Item = (Value, Value)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}

/// Map restricted to reference-type keys.
///
/// Every key-accepting operation returns `Err(CollectionError::InvalidKey)`
/// for a non-reference key; the instance stays valid. Enumeration is
/// withheld by contract: no `size`, no cursors, no `for_each`. Entries are
/// not reclaimed when a key becomes unreachable elsewhere; the weak
/// contract here is the key-type gate and the withheld enumeration only.
pub struct WeakMap {
    core: Core,
}

impl WeakMap {
    pub fn new() -> Self {
        Self {
            core: Core::new(VariantConfig::WEAK),
        }
    }

    /// Build from pairs in order. A non-reference key anywhere in the seed
    /// aborts construction, yielding no instance.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, CollectionError>
    where
        I: IntoIterator<Item = (Value, Value)>,
    {
        let map = Self::new();
        for (key, value) in pairs {
            map.set(key, value)?;
        }
        Ok(map)
    }

    pub fn has(&self, key: &Value) -> Result<bool, CollectionError> {
        self.core.has(key)
    }

    pub fn get(&self, key: &Value) -> Result<Option<Value>, CollectionError> {
        self.core.get(key)
    }

    /// Insert or overwrite. Chainable on success.
    pub fn set(&self, key: Value, value: Value) -> Result<&Self, CollectionError> {
        self.core.set(key, value)?;
        Ok(self)
    }

    pub fn delete(&self, key: &Value) -> Result<bool, CollectionError> {
        self.core.delete(key)
    }

    pub fn clear(&self) {
        self.core.clear();
    }
}

impl Default for WeakMap {
    fn default() -> Self {
        Self::new()
    }
}
