use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use tracing::trace;

use crate::config::HeapRestore;
use crate::heap::RatioMaxHeap;
use crate::pool::TreasurePool;
use crate::treasure::{Rank, Treasure, ranked};

/// 複数のHollowから参照される1つのヒープ
pub type SharedHeap = Rc<RefCell<RatioMaxHeap<Rank, Treasure>>>;

/// ヒープで宝物を管理する容器。
///
/// 中身は [`SharedHeap`] への参照であり、`clone`してもヒープは複製されない。
/// 同じヒープを参照する全ての容器は、どれか1つから取り出した結果を即座に共有する。
#[derive(Debug, Clone)]
pub struct HeapPool {
    heap: SharedHeap,
    restore: HeapRestore,
}

impl HeapPool {
    /// 宝物の列から新しいヒープを O(n) で構築し、その唯一の参照を持つ容器を作る
    pub fn new(treasures: Vec<Treasure>, restore: HeapRestore) -> Self {
        Self::from_shared(new_shared_heap(treasures), restore)
    }

    /// 既存のヒープへの参照から容器を作る
    pub fn from_shared(heap: SharedHeap, restore: HeapRestore) -> Self {
        HeapPool { heap, restore }
    }

    pub fn restore(&self) -> HeapRestore {
        self.restore
    }

    pub fn shared(&self) -> &SharedHeap {
        &self.heap
    }

    /// 同じヒープを参照しているか
    pub fn is_linked_with(&self, other: &HeapPool) -> bool {
        Rc::ptr_eq(&self.heap, &other.heap)
    }

    /// 現在の中身を複製して返す。順序はヒープ配列の順
    pub fn snapshot(&self) -> Vec<Treasure> {
        self.heap.borrow().iter().map(|(_, t)| *t).collect()
    }
}

/// 宝物の列を読み込み順の`seq`付きでヒープ化し、共有可能な形で返す
pub fn new_shared_heap(treasures: Vec<Treasure>) -> SharedHeap {
    let heap = RatioMaxHeap::heapify(ranked(treasures).collect());
    Rc::new(RefCell::new(heap))
}

impl TreasurePool for HeapPool {
    fn len(&self) -> usize {
        self.heap.borrow().len()
    }

    /// 最大要素を順に取り出し、容量に収まった最初のものを返す。
    ///
    /// 収まらなかった宝物は先入れ先出しで退避し、最後に全てヒープへ戻す。
    /// 最良 O(log n)、最悪 O(n log n)。
    fn extract_best_within(&mut self, capacity: u64) -> Option<Treasure> {
        let mut heap = self.heap.borrow_mut();
        let mut stash = VecDeque::new();
        let mut found = None;

        while let Some((rank, treasure)) = heap.extract_max() {
            if treasure.fits(capacity) {
                found = Some(treasure);
                break;
            }
            stash.push_back((rank, treasure));
        }

        let skipped = stash.len();
        match self.restore {
            HeapRestore::Reinsert => {
                while let Some((rank, treasure)) = stash.pop_front() {
                    heap.insert(rank, treasure);
                }
            }
            HeapRestore::Rebuild if skipped > 0 => heap.rebuild_with(stash),
            HeapRestore::Rebuild => {}
        }
        debug_assert!(heap.is_valid_heap());

        trace!(
            capacity,
            skipped,
            treasure = ?found,
            remaining = heap.len(),
            "searched shared heap"
        );
        found
    }
}
