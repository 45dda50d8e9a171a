use crate::treasure::Treasure;

pub mod heap;
pub mod registry;
pub mod tree;

#[cfg(test)]
mod tests;

pub use heap::{HeapPool, SharedHeap};
pub use registry::SharedHeapRegistry;
pub use tree::TreePool;

/// Hollowが宝物を保持する容器として備えるべき性質を定義するトレイト。
///
/// 宝物を取り除く操作は [`TreasurePool::extract_best_within`] だけである。
pub trait TreasurePool {
    /// 現在格納している宝物の個数。内部の構造から求め、別の数え上げは持たない。
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 重さが`capacity`以下の宝物のうち、比率が最大のものを1つだけ取り除いて返す。
    ///
    /// 空の場合や全ての宝物が重すぎる場合は`None`を返し、中身は一切変更しない。
    fn extract_best_within(&mut self, capacity: u64) -> Option<Treasure>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HollowKind {
    /// そのHollowだけが所有する宝物を木で管理する
    Exclusive,
    /// 複数のHollowで1つのヒープを共有する
    Shared,
}

/// 迷路に置かれるHollow。生成時にどちらの容器を使うかが決まり、以後変わらない。
#[derive(Debug)]
pub enum Hollow {
    Exclusive(TreePool),
    Shared(HeapPool),
}

impl Hollow {
    pub fn kind(&self) -> HollowKind {
        match self {
            Hollow::Exclusive(_) => HollowKind::Exclusive,
            Hollow::Shared(_) => HollowKind::Shared,
        }
    }
}

impl TreasurePool for Hollow {
    fn len(&self) -> usize {
        match self {
            Hollow::Exclusive(pool) => pool.len(),
            Hollow::Shared(pool) => pool.len(),
        }
    }

    fn extract_best_within(&mut self, capacity: u64) -> Option<Treasure> {
        match self {
            Hollow::Exclusive(pool) => pool.extract_best_within(capacity),
            Hollow::Shared(pool) => pool.extract_best_within(capacity),
        }
    }
}

impl From<TreePool> for Hollow {
    fn from(pool: TreePool) -> Self {
        Hollow::Exclusive(pool)
    }
}

impl From<HeapPool> for Hollow {
    fn from(pool: HeapPool) -> Self {
        Hollow::Shared(pool)
    }
}
