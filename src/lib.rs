/// 発生し得るすべてのエラーを`enum` 型として定義・集約。
mod error;

/// 宝物の選択方法などの設定。
mod config;

/// 宝物とその順位キー。
mod treasure;

/// 一括構築で平衡させる二分探索木。
mod tree;

/// 配列で表現した最大ヒープ。
mod heap;

/// Hollowが宝物を保持する容器と、共有ヒープの管理。
mod pool;

/// 迷路側とのインターフェースと、経路に沿って宝物を集める処理。
mod maze;

pub use error::Error;

pub use config::{HeapRestore, SelectionConfig, TreeScan};
pub use heap::RatioMaxHeap;
pub use maze::{Cell, HollowId, Maze, Traveler};
pub use pool::{
    HeapPool, Hollow, HollowKind, SharedHeap, SharedHeapRegistry, TreasurePool, TreePool,
};
pub use treasure::{Rank, Treasure};
pub use tree::{Iter, Node, OrderedMap};

#[cfg(feature = "random")]
pub use treasure::random::{generate_treasures, generate_treasures_using};
