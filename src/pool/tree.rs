use std::cmp::Reverse;

use tracing::trace;

use crate::config::TreeScan;
use crate::pool::TreasurePool;
use crate::treasure::{Rank, Treasure, ranked};
use crate::tree::{Node, OrderedMap};

/// 比率の降順が昇順になるキー
type Key = Reverse<Rank>;

/// 1つのHollowだけが所有する宝物を、一括構築した二分探索木で管理する容器
#[derive(Debug)]
pub struct TreePool {
    treasures: OrderedMap<Key, Treasure>,
    scan: TreeScan,
}

impl TreePool {
    /// 宝物の列を順位キーでソートし、高さ最小の木に一括で読み込む。O(n log n)
    pub fn new(treasures: Vec<Treasure>, scan: TreeScan) -> Self {
        let pairs: Vec<(Key, Treasure)> = ranked(treasures)
            .map(|(rank, treasure)| (Reverse(rank), treasure))
            .collect();
        let treasures = OrderedMap::from_unsorted(pairs);
        trace!(
            len = treasures.len(),
            height = treasures.height(),
            "built treasure tree"
        );
        TreePool { treasures, scan }
    }

    pub fn scan(&self) -> TreeScan {
        self.scan
    }

    /// 比率の高い順に宝物を辿る
    pub fn iter(&self) -> impl Iterator<Item = &Treasure> + '_ {
        self.treasures.values()
    }

    pub fn height(&self) -> usize {
        self.treasures.height()
    }

    fn find_in_order(&self, capacity: u64) -> Option<Key> {
        self.treasures
            .iter()
            .find(|(_, treasure)| treasure.fits(capacity))
            .map(|(key, _)| *key)
    }

    fn find_by_descent(&self, capacity: u64) -> Option<Key> {
        descend(self.treasures.root(), capacity)
    }
}

/// 部分木の中で容量に収まる最良の宝物のキーを探す。
///
/// 左の部分木ほど比率が高い。ノードが収まるなら右の部分木は全てそれより劣るので捨て、
/// 左の部分木により良いものがないかだけを調べる。収まらないなら両側を調べる。
fn descend(node: Option<&Node<Key, Treasure>>, capacity: u64) -> Option<Key> {
    let node = node?;
    if node.value().fits(capacity) {
        descend(node.left(), capacity).or(Some(*node.key()))
    } else {
        descend(node.left(), capacity).or_else(|| descend(node.right(), capacity))
    }
}

impl TreasurePool for TreePool {
    fn len(&self) -> usize {
        self.treasures.len()
    }

    fn extract_best_within(&mut self, capacity: u64) -> Option<Treasure> {
        let key = match self.scan {
            TreeScan::InOrder => self.find_in_order(capacity),
            TreeScan::Descent => self.find_by_descent(capacity),
        };
        let Some(key) = key else {
            trace!(capacity, len = self.len(), "no treasure fits");
            return None;
        };
        let treasure = self.treasures.remove(&key);
        debug_assert!(treasure.is_some());
        trace!(capacity, ?treasure, remaining = self.len(), "took treasure from tree");
        treasure
    }
}
