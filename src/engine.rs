//! Shared collection engine: parallel key/value storage plus the live
//! cursor registry, behind single-threaded interior mutability.
//!
//! All four public variants are thin wrappers over `Core`. Set-like
//! variants store each member in both sequences (a member is its own key),
//! which keeps lookup, cursor reads and deletion uniform: every operation
//! scans `keys` and every cursor reads `(keys[p], values[p])`.
//!
//! No `RefCell` borrow is ever held across a call into caller code, so
//! `for_each` callbacks and iterator consumers may re-enter the same
//! instance freely.

use crate::lookup::{find_index, CollectionError};
use crate::value::Value;
use slotmap::{new_key_type, SlotMap};
use std::cell::RefCell;
use std::rc::Rc;

new_key_type! {
    pub(crate) struct CursorId;
}

/// Per-variant policy consulted by the engine at runtime. The operation
/// allow-list of each public contract is realized by the wrapper types'
/// method sets; the engine itself only needs the weak-typing flag.
#[derive(Copy, Clone, Debug)]
pub(crate) struct VariantConfig {
    pub weak_typed: bool,
}

impl VariantConfig {
    pub(crate) const STRONG: VariantConfig = VariantConfig { weak_typed: false };
    pub(crate) const WEAK: VariantConfig = VariantConfig { weak_typed: true };
}

struct State {
    config: VariantConfig,
    keys: Vec<Value>,
    values: Vec<Value>,
    // Live cursor positions; `delete` rewrites them in place.
    cursors: SlotMap<CursorId, usize>,
}

struct Inner {
    state: RefCell<State>, // single-threaded interior mutability
}

/// Handle to one collection instance. Clones share the instance; cursors
/// hold one so the registry outlives any adapter that spawned them.
pub(crate) struct Core {
    inner: Rc<Inner>,
}

impl Clone for Core {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl Core {
    pub(crate) fn new(config: VariantConfig) -> Self {
        Self {
            inner: Rc::new(Inner {
                state: RefCell::new(State {
                    config,
                    keys: Vec::new(),
                    values: Vec::new(),
                    cursors: SlotMap::with_key(),
                }),
            }),
        }
    }

    /// Recomputed on every access, never cached.
    pub(crate) fn len(&self) -> usize {
        self.inner.state.borrow().values.len()
    }

    pub(crate) fn has(&self, key: &Value) -> Result<bool, CollectionError> {
        let st = self.inner.state.borrow();
        Ok(find_index(&st.keys, key, st.config.weak_typed)?.is_some())
    }

    pub(crate) fn get(&self, key: &Value) -> Result<Option<Value>, CollectionError> {
        let st = self.inner.state.borrow();
        Ok(find_index(&st.keys, key, st.config.weak_typed)?.map(|i| st.values[i].clone()))
    }

    /// Overwrite the value at the key's position, or append a new entry.
    pub(crate) fn set(&self, key: Value, value: Value) -> Result<(), CollectionError> {
        let mut st = self.inner.state.borrow_mut();
        let weak = st.config.weak_typed;
        match find_index(&st.keys, &key, weak)? {
            Some(i) => st.values[i] = value,
            None => {
                st.keys.push(key);
                st.values.push(value);
            }
        }
        debug_assert_eq!(st.keys.len(), st.values.len());
        Ok(())
    }

    /// Append only when absent. Never overwrites: a set holding `+0` keeps
    /// `+0` after `add(-0)`, matching the first-representative rule.
    pub(crate) fn add(&self, value: Value) -> Result<(), CollectionError> {
        let mut st = self.inner.state.borrow_mut();
        let weak = st.config.weak_typed;
        if find_index(&st.keys, &value, weak)?.is_none() {
            st.keys.push(value.clone());
            st.values.push(value);
        }
        Ok(())
    }

    pub(crate) fn delete(&self, key: &Value) -> Result<bool, CollectionError> {
        let mut st = self.inner.state.borrow_mut();
        let weak = st.config.weak_typed;
        let idx = match find_index(&st.keys, key, weak)? {
            Some(i) => i,
            None => return Ok(false),
        };
        st.keys.remove(idx);
        st.values.remove(idx);
        // Positions past the removed slot slide left one step; positions at
        // or before it point at already-visited elements and stay put.
        for pos in st.cursors.values_mut() {
            if *pos > idx {
                *pos -= 1;
            }
        }
        Ok(true)
    }

    /// Truncate storage. Cursors stay registered: their next step observes
    /// the zero length and terminates through the ordinary exhaustion path.
    pub(crate) fn clear(&self) {
        let mut st = self.inner.state.borrow_mut();
        st.keys.clear();
        st.values.clear();
    }

    pub(crate) fn open_cursor(&self) -> CursorId {
        self.inner.state.borrow_mut().cursors.insert(0)
    }

    /// One step of the live-iteration protocol: yield the `(key, value)`
    /// pair at the cursor position, or deregister the cursor and report
    /// exhaustion. Reads live storage, not a snapshot.
    pub(crate) fn cursor_next(&self, id: CursorId) -> Option<(Value, Value)> {
        let mut st = self.inner.state.borrow_mut();
        let pos = match st.cursors.get(id) {
            Some(p) => *p,
            None => return None,
        };
        if pos >= st.values.len() {
            st.cursors.remove(id);
            return None;
        }
        let pair = (st.keys[pos].clone(), st.values[pos].clone());
        st.cursors[id] = pos + 1;
        Some(pair)
    }

    pub(crate) fn close_cursor(&self, id: CursorId) {
        self.inner.state.borrow_mut().cursors.remove(id);
    }

    #[cfg(test)]
    pub(crate) fn live_cursors(&self) -> usize {
        self.inner.state.borrow().cursors.len()
    }
}
