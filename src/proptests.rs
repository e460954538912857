use super::*;

use proptest::prelude::*;
use std::collections::BTreeMap;
use std::result::Result;

fn validate_index(idx: &SortedIndex) {
    assert!(idx.is_sorted(), "entries must be ascending by fingerprint");
    for e in idx.iter() {
        assert_eq!(
            e.fingerprint(),
            fnv1a_32(e.key().as_bytes()),
            "stored fingerprint must match its key"
        );
    }
}

#[derive(Clone, Debug)]
enum Op {
    Insert(String, u32),
    Find(String),
}

fn key_strategy() -> impl Strategy<Value = String> + Clone {
    // Same shape as generated directory names: up to 63 bytes from 'A'..'y'.
    prop::collection::vec(b'A'..b'A' + 57, 0..=MAX_KEY_LEN)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect())
}

fn small_key_strategy() -> impl Strategy<Value = String> + Clone {
    // Tiny alphabet so finds and repeated inserts actually hit.
    "[a-d]{0,3}"
}

fn ops_strategy(key: impl Strategy<Value = String> + Clone) -> impl Strategy<Value = Vec<Op>> {
    let op = prop_oneof![
        60 => (key.clone(), any::<u32>()).prop_map(|(k, v)| Op::Insert(k, v)),
        40 => key.prop_map(Op::Find),
    ];
    prop::collection::vec(op, 0..=1000)
}

fn run_ops(ops: Vec<Op>) -> Result<(), TestCaseError> {
    let mut idx = SortedIndex::new();
    let mut m: BTreeMap<String, u32> = BTreeMap::new();
    let mut inserted = 0usize;

    for op in ops {
        match op {
            Op::Insert(key, value) => {
                idx.insert(key.as_str(), value);
                m.entry(key).or_insert(value);
                inserted += 1;
            }
            Op::Find(key) => {
                prop_assert_eq!(idx.find(&key), m.get(&key).copied());
            }
        }
        prop_assert_eq!(idx.len(), inserted);
    }

    validate_index(&idx);
    for (key, value) in &m {
        prop_assert_eq!(idx.find(key), Some(*value));
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 50_000,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_equivalence_directory_keys(ops in ops_strategy(key_strategy())) {
        run_ops(ops)?;
    }

    #[test]
    fn prop_equivalence_small_keys(ops in ops_strategy(small_key_strategy())) {
        run_ops(ops)?;
    }

    #[test]
    fn prop_sorted_after_every_insert(keys in prop::collection::vec(key_strategy(), 0..=300)) {
        let mut idx = SortedIndex::new();
        for (i, key) in keys.iter().enumerate() {
            idx.insert(key.as_str(), i as u32);
            prop_assert!(idx.is_sorted());
            prop_assert_eq!(idx.len(), i + 1);
        }
    }

    #[test]
    fn prop_hash_streaming_matches_oneshot(a in ".*", b in ".*") {
        use std::hash::Hasher;
        let mut h = FnvHasher::default();
        h.write(a.as_bytes());
        h.write(b.as_bytes());
        prop_assert_eq!(h.finish(), fnv1a_32(format!("{a}{b}").as_bytes()) as u64);
    }
}

fn for_each_permutation<T: Clone>(items: &[T], mut f: impl FnMut(Vec<T>)) {
    fn rec<T: Clone>(items: &[T], used: &mut [bool], out: &mut Vec<T>, f: &mut impl FnMut(Vec<T>)) {
        if out.len() == items.len() {
            f(out.clone());
            return;
        }
        for i in 0..items.len() {
            if used[i] {
                continue;
            }
            used[i] = true;
            out.push(items[i].clone());
            rec(items, used, out, f);
            out.pop();
            used[i] = false;
        }
    }

    let mut used = vec![false; items.len()];
    let mut out = Vec::with_capacity(items.len());
    rec(items, &mut used, &mut out, &mut f);
}

#[test]
fn exhaustive_insert_order_small_set() {
    let keys = ["a", "b", "c", "aa", "ab", "costarring", "liquid"];

    let mut expected: Vec<&str> = keys.to_vec();
    expected.sort_by_key(|k| fnv1a_32(k.as_bytes()));

    for_each_permutation(&keys, |perm| {
        let mut idx = SortedIndex::new();
        let mut m: BTreeMap<String, u32> = BTreeMap::new();

        for (i, k) in perm.iter().enumerate() {
            idx.insert(*k, i as u32);
            m.insert(k.to_string(), i as u32);
        }

        validate_index(&idx);
        assert_eq!(idx.collisions(), 1);
        for (k, v) in &m {
            assert_eq!(idx.find(k), Some(*v), "key {k} in order {perm:?}");
        }

        let fingerprints: Vec<u32> = idx.iter().map(Entry::fingerprint).collect();
        let want: Vec<u32> = expected.iter().map(|k| fnv1a_32(k.as_bytes())).collect();
        assert_eq!(fingerprints, want);
    });
}
