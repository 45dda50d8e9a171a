#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use proptest::prelude::ProptestConfig;
    use proptest::proptest;

    use crate::tree::OrderedMap;
    use crate::tree::tests::{arb_sorted_keys, sequential_map};

    #[test]
    fn remove_leaf() {
        let mut map = sequential_map(7);
        assert_eq!(map.remove(&0), Some(0));
        assert_eq!(map.len(), 6);
        assert!(!map.contains_key(&0));
        assert!(map.check_invariants());
    }

    #[test]
    fn remove_node_with_one_child() {
        let mut map = sequential_map(7);
        map.remove(&0);
        //1は右の子2だけを持つ
        assert_eq!(map.remove(&1), Some(2));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec![2, 3, 4, 5, 6]);
        assert!(map.check_invariants());
    }

    ///根を削除すると中間順での後続が根になる
    #[test]
    fn remove_root_promotes_successor() {
        let mut map = sequential_map(7);
        assert_eq!(map.remove(&3), Some(6));
        assert_eq!(map.root().map(|n| *n.key()), Some(4));
        assert_eq!(map.len(), 6);
        assert!(map.check_invariants());
    }

    #[test]
    fn remove_missing_key_is_noop() {
        let mut map = sequential_map(5);
        assert_eq!(map.remove(&42), None);
        assert_eq!(map.len(), 5);
        assert!(map.check_invariants());
    }

    #[test]
    fn remove_from_empty() {
        let mut map: OrderedMap<u8, u8> = OrderedMap::new();
        assert_eq!(map.remove(&1), None);
        assert_eq!(map.len(), 0);
    }

    #[test]
    fn insert_replaces_existing_value() {
        let mut map = sequential_map(3);
        assert_eq!(map.insert(1, 100), Some(2));
        assert_eq!(map.get(&1), Some(&100));
        assert_eq!(map.len(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]
        ///BTreeMapと同じ結果になる
        #[test]
        fn remove_matches_btree_map(
            keys in arb_sorted_keys(200),
            victims in proptest::collection::vec(-10_000i64..10_000, 0..100),
        ) {
            let mut map = OrderedMap::from_sorted(keys.iter().map(|&k| (k, k)).collect());
            let mut model: BTreeMap<i64, i64> = keys.iter().map(|&k| (k, k)).collect();

            for victim in victims.iter().chain(keys.iter().step_by(3)) {
                assert_eq!(map.remove(victim), model.remove(victim));
                assert_eq!(map.len(), model.len());
            }

            assert!(map.check_invariants());
            let left: Vec<i64> = map.keys().copied().collect();
            let right: Vec<i64> = model.keys().copied().collect();
            assert_eq!(left, right);
        }
    }
}
