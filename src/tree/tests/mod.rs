use proptest::prelude::*;

use crate::tree::OrderedMap;

pub mod remove;

/// 一括構築した木の高さの上限。ceil(log2(n+1))
pub fn balanced_height(n: usize) -> usize {
    (usize::BITS - n.leading_zeros()) as usize
}

///キーが重複しない昇順の列を生成する
pub fn arb_sorted_keys(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::btree_set(-10_000i64..10_000, 0..=max_len)
        .prop_map(|set| set.into_iter().collect())
}

///0..nのキーで一括構築した木
pub fn sequential_map(n: usize) -> OrderedMap<usize, usize> {
    OrderedMap::from_sorted((0..n).map(|k| (k, k * 2)).collect())
}
