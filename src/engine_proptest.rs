#![cfg(test)]

// Property tests for the lookup scan policy kept inside the crate so they
// can reach the crate-private `find_index` directly.

use crate::lookup::find_index;
use crate::value::{Obj, Value};
use proptest::prelude::*;
use std::rc::Rc;

// Generator surrogate for `Value`: proptest needs `'static` inputs, so
// object picks are indices into a per-case pool of shared allocations.
#[derive(Clone, Debug)]
enum Pick {
    Nan,
    PosZero,
    NegZero,
    Num(i8),
    Str(u8),
    Obj(u8),
}

fn pick_strategy() -> impl Strategy<Value = Pick> {
    prop_oneof![
        Just(Pick::Nan),
        Just(Pick::PosZero),
        Just(Pick::NegZero),
        any::<i8>().prop_map(Pick::Num),
        (0u8..4).prop_map(Pick::Str),
        (0u8..4).prop_map(Pick::Obj),
    ]
}

fn realize(pick: &Pick, pool: &[Rc<Obj>]) -> Value {
    match pick {
        Pick::Nan => Value::Number(f64::NAN),
        Pick::PosZero => Value::Number(0.0),
        Pick::NegZero => Value::Number(-0.0),
        Pick::Num(n) => Value::Number(*n as f64),
        Pick::Str(s) => Value::from(format!("s{}", s).as_str()),
        Pick::Obj(i) => Value::Object(pool[*i as usize].clone()),
    }
}

proptest! {
    // The found index must hold a matching element, and no element on the
    // winning side of it may match: rightmost wins for NaN/zero keys,
    // leftmost for everything else.
    #[test]
    fn prop_scan_policy_tie_break(
        list in proptest::collection::vec(pick_strategy(), 0..12),
        key in pick_strategy(),
    ) {
        let pool: Vec<Rc<Obj>> = (0..4).map(|_| Obj::new()).collect();
        let list: Vec<Value> = list.iter().map(|p| realize(p, &pool)).collect();
        let key = realize(&key, &pool);

        let found = find_index(&list, &key, false).unwrap();
        let reverse = key.is_nan_or_zero();
        match found {
            Some(i) => {
                prop_assert!(list[i].same_value_zero(&key));
                if reverse {
                    for v in &list[i + 1..] {
                        prop_assert!(!v.same_value_zero(&key));
                    }
                } else {
                    for v in &list[..i] {
                        prop_assert!(!v.strict_eq(&key));
                    }
                }
            }
            None => {
                if reverse {
                    prop_assert!(!list.iter().any(|v| v.same_value_zero(&key)));
                } else {
                    prop_assert!(!list.iter().any(|v| v.strict_eq(&key)));
                }
            }
        }
    }

    // Under the uniqueness invariant (at most one stored key matches any
    // probe), the directional policy is observationally equivalent to a
    // naive forward SameValueZero scan.
    #[test]
    fn prop_unique_storage_matches_naive_scan(
        picks in proptest::collection::vec(pick_strategy(), 0..12),
        key in pick_strategy(),
    ) {
        let pool: Vec<Rc<Obj>> = (0..4).map(|_| Obj::new()).collect();
        let key = realize(&key, &pool);

        // Deduplicate under same_value_zero to mirror stored keys.
        let mut list: Vec<Value> = Vec::new();
        for p in &picks {
            let v = realize(p, &pool);
            if !list.iter().any(|u| u.same_value_zero(&v)) {
                list.push(v);
            }
        }

        let found = find_index(&list, &key, false).unwrap();
        let naive = list.iter().position(|v| v.same_value_zero(&key));
        prop_assert_eq!(found, naive);
    }
}
