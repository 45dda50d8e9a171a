use proptest::prelude::*;

use crate::config::{HeapRestore, TreeScan};
use crate::pool::{HeapPool, Hollow, TreePool};
use crate::treasure::Treasure;


pub const TREE_SCANS: [TreeScan; 2] = [TreeScan::InOrder, TreeScan::Descent];
pub const HEAP_RESTORES: [HeapRestore; 2] = [HeapRestore::Reinsert, HeapRestore::Rebuild];

/// (価値, 重さ) の列から宝物を作る
pub fn treasures(pairs: &[(u64, u64)]) -> Vec<Treasure> {
    pairs
        .iter()
        .map(|&(value, weight)| Treasure::new(value, weight).unwrap())
        .collect()
}

///全ての種類・戦略の組み合わせでHollowを作る
pub fn every_hollow(pairs: &[(u64, u64)]) -> Vec<Hollow> {
    let tree = TREE_SCANS
        .iter()
        .map(|&scan| Hollow::from(TreePool::new(treasures(pairs), scan)));
    let heap = HEAP_RESTORES
        .iter()
        .map(|&restore| Hollow::from(HeapPool::new(treasures(pairs), restore)));
    tree.chain(heap).collect()
}

/// 読み込み順の`seq`を保ったままの宝物の列。取り出すたびに要素を消して使う
pub fn model_of(treasures: &[Treasure]) -> Vec<(u64, Treasure)> {
    treasures
        .iter()
        .enumerate()
        .map(|(seq, t)| (seq as u64, *t))
        .collect()
}

///素朴に全件を調べて、取り出されるべき宝物のモデル上の位置を求める
pub fn expected_best(model: &[(u64, Treasure)], capacity: u64) -> Option<usize> {
    model
        .iter()
        .enumerate()
        .filter(|(_, (_, t))| t.fits(capacity))
        .max_by_key(|(_, (seq, t))| t.rank(*seq))
        .map(|(at, _)| at)
}

/// 比率が重複しやすいように値の範囲を狭めた宝物の列
pub fn arb_treasures(max_len: usize) -> impl Strategy<Value = Vec<Treasure>> {
    proptest::collection::vec(Treasure::arb_within(0..=20, 1..=10), 0..=max_len)
}

/// 多重集合として比較するために並べ替える
pub fn sorted(mut treasures: Vec<Treasure>) -> Vec<Treasure> {
    treasures.sort_by_key(|t| (t.value(), t.weight()));
    treasures
}
