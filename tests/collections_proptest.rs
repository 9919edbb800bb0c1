// Model-based property tests: randomized operation sequences against a
// naive ordered-association oracle. `Value` equality is SameValueZero, so
// the oracle can match keys with plain `==`.

use es_collections::{Map, Obj, Set, Value};
use proptest::prelude::*;
use std::rc::Rc;

#[derive(Clone, Debug)]
enum KeyPick {
    Nan,
    PosZero,
    NegZero,
    Num(i8),
    Str(u8),
    Obj(u8),
}

fn key_strategy() -> impl Strategy<Value = KeyPick> {
    prop_oneof![
        Just(KeyPick::Nan),
        Just(KeyPick::PosZero),
        Just(KeyPick::NegZero),
        (-4i8..4).prop_map(KeyPick::Num),
        (0u8..3).prop_map(KeyPick::Str),
        (0u8..3).prop_map(KeyPick::Obj),
    ]
}

fn realize(pick: &KeyPick, pool: &[Rc<Obj>]) -> Value {
    match pick {
        KeyPick::Nan => Value::Number(f64::NAN),
        KeyPick::PosZero => Value::Number(0.0),
        KeyPick::NegZero => Value::Number(-0.0),
        KeyPick::Num(n) => Value::Number(*n as f64),
        KeyPick::Str(s) => Value::from(format!("s{}", s).as_str()),
        KeyPick::Obj(i) => Value::Object(pool[*i as usize].clone()),
    }
}

#[derive(Clone, Debug)]
enum MapOp {
    Set(KeyPick, i8),
    Delete(KeyPick),
    Clear,
}

fn map_op_strategy() -> impl Strategy<Value = MapOp> {
    prop_oneof![
        8 => (key_strategy(), any::<i8>()).prop_map(|(k, v)| MapOp::Set(k, v)),
        3 => key_strategy().prop_map(MapOp::Delete),
        1 => Just(MapOp::Clear),
    ]
}

proptest! {
    #[test]
    fn prop_map_matches_ordered_oracle(
        ops in proptest::collection::vec(map_op_strategy(), 1..60),
    ) {
        let pool: Vec<Rc<Obj>> = (0..3).map(|_| Obj::new()).collect();
        let map = Map::new();
        let mut oracle: Vec<(Value, Value)> = Vec::new();

        for op in &ops {
            match op {
                MapOp::Set(pick, v) => {
                    let key = realize(pick, &pool);
                    let value = Value::from(*v as i32);
                    map.set(key.clone(), value.clone());
                    match oracle.iter().position(|(k, _)| *k == key) {
                        Some(i) => oracle[i].1 = value,
                        None => oracle.push((key, value)),
                    }
                }
                MapOp::Delete(pick) => {
                    let key = realize(pick, &pool);
                    let removed = map.delete(&key);
                    match oracle.iter().position(|(k, _)| *k == key) {
                        Some(i) => {
                            oracle.remove(i);
                            prop_assert!(removed);
                        }
                        None => prop_assert!(!removed),
                    }
                }
                MapOp::Clear => {
                    map.clear();
                    oracle.clear();
                }
            }
            prop_assert_eq!(map.size(), oracle.len());
        }

        // Uniqueness: no two oracle keys may have collapsed differently.
        for (i, (k, _)) in oracle.iter().enumerate() {
            for (other, _) in &oracle[i + 1..] {
                prop_assert!(!k.same_value_zero(other));
            }
        }

        // Full drain agrees with the oracle, order included.
        let drained: Vec<(Value, Value)> = map.entries().collect();
        prop_assert_eq!(drained, oracle.clone());

        // Point lookups agree for every reachable key shape.
        for pick in [
            KeyPick::Nan, KeyPick::PosZero, KeyPick::Num(0), KeyPick::Num(1),
            KeyPick::Str(0), KeyPick::Obj(0),
        ] {
            let key = realize(&pick, &pool);
            let expected = oracle.iter().find(|(k, _)| *k == key).map(|(_, v)| v.clone());
            prop_assert_eq!(map.get(&key), expected);
            prop_assert_eq!(map.has(&key), oracle.iter().any(|(k, _)| *k == key));
        }
    }

    #[test]
    fn prop_set_deduplicates_like_oracle(
        picks in proptest::collection::vec(key_strategy(), 0..40),
    ) {
        let pool: Vec<Rc<Obj>> = (0..3).map(|_| Obj::new()).collect();
        let values: Vec<Value> = picks.iter().map(|p| realize(p, &pool)).collect();

        let set = Set::from_values(values.clone());

        let mut oracle: Vec<Value> = Vec::new();
        for v in &values {
            if !oracle.iter().any(|u| u == v) {
                oracle.push(v.clone());
            }
        }

        prop_assert_eq!(set.size(), oracle.len());
        let drained: Vec<Value> = set.values().collect();
        prop_assert_eq!(drained, oracle);
    }

    // Interleave cursor steps with deletions and check the walk against a
    // model applying the position-correction rule directly.
    #[test]
    fn prop_live_cursor_neither_skips_nor_repeats(
        seed in proptest::collection::vec((key_strategy(), any::<i8>()), 1..12),
        steps in proptest::collection::vec(
            prop_oneof![Just(None::<KeyPick>), key_strategy().prop_map(Some)],
            1..30,
        ),
    ) {
        let pool: Vec<Rc<Obj>> = (0..3).map(|_| Obj::new()).collect();
        let map = Map::from_pairs(
            seed.iter()
                .map(|(k, v)| (realize(k, &pool), Value::from(*v as i32))),
        );
        let mut oracle: Vec<(Value, Value)> = map.entries().collect();

        let mut entries = map.entries();
        let mut pos = 0usize;
        let mut done = false;

        for step in &steps {
            match step {
                // Advance the cursor one step.
                None => {
                    let real = entries.next();
                    let expected = if !done && pos < oracle.len() {
                        let e = oracle[pos].clone();
                        pos += 1;
                        Some(e)
                    } else {
                        done = true;
                        None
                    };
                    prop_assert_eq!(real, expected);
                }
                // Delete a key mid-walk.
                Some(pick) => {
                    let key = realize(pick, &pool);
                    let removed = map.delete(&key);
                    match oracle.iter().position(|(k, _)| *k == key) {
                        Some(i) => {
                            prop_assert!(removed);
                            oracle.remove(i);
                            if pos > i {
                                pos -= 1;
                            }
                        }
                        None => prop_assert!(!removed),
                    }
                }
            }
        }
    }
}
