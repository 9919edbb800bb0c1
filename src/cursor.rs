//! Live iteration cursors.
//!
//! A cursor is a registered position into its instance's current backing
//! storage, not a snapshot: entries appended mid-iteration are visited,
//! and `delete` slides later cursor positions back so nothing is skipped
//! or repeated. A cursor that reports exhaustion deregisters itself and
//! stays terminated; dropping an unfinished cursor deregisters it as well.

use crate::engine::{Core, CursorId};
use crate::value::Value;

pub(crate) struct Cursor {
    core: Core,
    id: CursorId,
    done: bool,
}

impl Cursor {
    pub(crate) fn open(core: Core) -> Self {
        let id = core.open_cursor();
        Self {
            core,
            id,
            done: false,
        }
    }

    fn next_pair(&mut self) -> Option<(Value, Value)> {
        if self.done {
            return None;
        }
        match self.core.cursor_next(self.id) {
            Some(pair) => Some(pair),
            None => {
                self.done = true;
                None
            }
        }
    }
}

impl Drop for Cursor {
    fn drop(&mut self) {
        if !self.done {
            self.core.close_cursor(self.id);
        }
    }
}

/// Iterator over keys in insertion order. For set variants the members are
/// their own keys, so this coincides with [`Values`].
pub struct Keys(pub(crate) Cursor);

impl Iterator for Keys {
    type Item = Value;
    fn next(&mut self) -> Option<Value> {
        self.0.next_pair().map(|(k, _)| k)
    }
}

/// Iterator over values in insertion order.
pub struct Values(pub(crate) Cursor);

impl Iterator for Values {
    type Item = Value;
    fn next(&mut self) -> Option<Value> {
        self.0.next_pair().map(|(_, v)| v)
    }
}

/// Iterator over `(key, value)` pairs in insertion order. Set variants
/// yield each member paired with itself.
pub struct Entries(pub(crate) Cursor);

impl Iterator for Entries {
    type Item = (Value, Value);
    fn next(&mut self) -> Option<(Value, Value)> {
        self.0.next_pair()
    }
}
