use std::rc::Rc;

use tracing::debug;

use crate::config::HeapRestore;
use crate::pool::heap::{HeapPool, SharedHeap, new_shared_heap};
use crate::treasure::Treasure;

/// 共有ヒープの生成と寿命を管理する。
///
/// ヒープは最初に [`SharedHeapRegistry::link_with`] が呼ばれたときに一度だけ生成され、
/// 以降は同じヒープへの参照を配る。ヒープは最後の参照が破棄されたときに解放される。
#[derive(Debug, Default)]
pub struct SharedHeapRegistry {
    heap: Option<SharedHeap>,
    restore: HeapRestore,
}

impl SharedHeapRegistry {
    pub fn new(restore: HeapRestore) -> Self {
        SharedHeapRegistry {
            heap: None,
            restore,
        }
    }

    /// 共有ヒープへの参照を持つ容器を返す。
    ///
    /// ヒープがまだ無ければ`generate`で宝物を用意して生成する。既にあれば`generate`は呼ばない。
    pub fn link_with<F>(&mut self, generate: F) -> HeapPool
    where
        F: FnOnce() -> Vec<Treasure>,
    {
        let restore = self.restore;
        let heap = self.heap.get_or_insert_with(|| {
            let treasures = generate();
            debug!(len = treasures.len(), "established shared heap");
            new_shared_heap(treasures)
        });
        HeapPool::from_shared(Rc::clone(heap), restore)
    }

    pub fn is_established(&self) -> bool {
        self.heap.is_some()
    }

    /// レジストリ以外が持っている参照の数
    pub fn handle_count(&self) -> usize {
        self.heap
            .as_ref()
            .map_or(0, |heap| Rc::strong_count(heap) - 1)
    }

    /// レジストリが持つ参照を手放す。配った容器が残っている間はヒープも残る。
    pub fn teardown(&mut self) {
        if let Some(heap) = self.heap.take() {
            debug!(
                handles = Rc::strong_count(&heap) - 1,
                "released shared heap"
            );
        }
    }
}
