#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 木で管理するHollowが最良の宝物を探す方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TreeScan {
    /// 中間順に比率の高い方から辿り、最初に容量に収まったものを選ぶ。
    ///
    /// 最良 O(log n)、最悪 O(n)。
    InOrder,

    /// 根から降りながら、収まるノードを見つけたらそれより比率の低い側の部分木を捨てる。
    ///
    /// 最良 O(log n)、最悪 O(n)。
    #[default]
    Descent,
}

/// ヒープで管理するHollowが、退避した宝物をヒープに戻す方法。
///
/// どちらの方法でも中身の集合とヒープ条件は保たれるが、配列内の並びが元に戻るとは限らない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HeapRestore {
    /// 退避した順に1つずつ挿入し直す。k個退避したら O(k log n)。
    #[default]
    Reinsert,

    /// 退避した宝物をまとめて加え、ヒープを一度だけ作り直す。O(n)。
    Rebuild,
}

/// 宝物選択エンジンの設定
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SelectionConfig {
    pub tree_scan: TreeScan,
    pub heap_restore: HeapRestore,
}

impl SelectionConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tree_scan(mut self, tree_scan: TreeScan) -> Self {
        self.tree_scan = tree_scan;
        self
    }

    pub fn with_heap_restore(mut self, heap_restore: HeapRestore) -> Self {
        self.heap_restore = heap_restore;
        self
    }
}
