//! es-collections: ordered Map, Set, WeakMap and WeakSet with
//! SameValueZero equality and mutation-safe live iteration.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: one collection engine whose invariants are stated and owned in
//!   exactly one place, with four public variants as thin adapters.
//! - Layers:
//!   - value: the dynamic value model and both equality relations
//!     (`strict_eq` and `same_value_zero`). SameValueZero governs key
//!     uniqueness for every variant.
//!   - lookup: `find_index` returning an explicit `Option<usize>`, with
//!     the directional scan policy (NaN/zero keys scan right-to-left
//!     under SameValueZero, everything else left-to-right under strict
//!     equality) and the weak type gate ahead of the scan.
//!   - engine::Core: parallel `Vec<Value>` key/value storage plus the
//!     live-cursor registry (a `slotmap` of positions), behind
//!     `Rc<RefCell<..>>` interior mutability. All mutation and the cursor
//!     protocol live here.
//!   - Adapters: `Map`/`Set` expose the full surface including `size` and
//!     cursors; `WeakMap`/`WeakSet` set the weak flag, return `Result`
//!     from key-accepting operations, and withhold enumeration entirely.
//!
//! Constraints
//! - Single-threaded: `!Send`/`!Sync` by design (`Rc`, no atomics).
//! - Lookup is a linear scan by contract; there is no hashing layer and
//!   `size` is recomputed from storage on every access.
//! - Uniqueness: no two stored keys are equal under SameValueZero.
//! - Live iteration: cursors read current storage, never a snapshot.
//!   `delete` slides every cursor position past the removed index back by
//!   one, so iteration neither skips nor repeats surviving entries.
//!   `clear` touches no cursor; exhaustion falls out of the zero length.
//! - Weak variants gate keys to reference types and withhold enumeration.
//!   They do not reclaim entries when keys become unreachable; that
//!   absence is the documented contract, not a defect.
//!
//! Why this split?
//! - The scan policy's direction asymmetry and the cursor-correction rule
//!   are the two easiest behaviors to break in a reimplementation; each is
//!   isolated in one small module with its own tests.
//! - `find_index` returns its result instead of parking it in shared
//!   state, so a lookup triggered from inside a `for_each` callback cannot
//!   clobber the position an outer operation is about to use.
//! - No `RefCell` borrow is held across calls into caller code, so
//!   callbacks may re-enter the same instance freely.
//!
//! The `parse` module is an independent token-stream parsing base (bounded
//! lookahead/lookbehind, fatal `expect` vs. recorded `raise`) that shares
//! no state with the collection engine.

mod cursor;
mod engine;
mod engine_proptest;
mod lookup;
mod map;
pub mod parse;
mod set;
mod value;

// Public surface
pub use cursor::{Entries, Keys, Values};
pub use lookup::CollectionError;
pub use map::{Map, WeakMap};
pub use set::{Set, WeakSet};
pub use value::{Obj, Value};
