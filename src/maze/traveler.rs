use tracing::{debug, trace};

use crate::pool::TreasurePool;
use crate::treasure::Treasure;

/// 経路を順に歩きながら宝物を集める旅人。
///
/// 各Hollowでは残りの容量に収まる最良の宝物を1つだけ取り、その重さだけ容量を減らす。
/// 一度通り過ぎたHollowに戻ることはない。
#[derive(Debug, Clone)]
pub struct Traveler {
    capacity: u64,
    remaining: u64,
    taken: Vec<Treasure>,
}

impl Traveler {
    pub fn new(capacity: u64) -> Self {
        Traveler {
            capacity,
            remaining: capacity,
            taken: Vec::new(),
        }
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// 残りの容量
    pub fn remaining(&self) -> u64 {
        self.remaining
    }

    pub fn carried_weight(&self) -> u64 {
        self.capacity - self.remaining
    }

    pub fn taken(&self) -> &[Treasure] {
        &self.taken
    }

    /// Hollowに立ち寄り、取れる宝物があれば1つ取る。取った宝物を返す。
    ///
    /// 容器が残りの容量を超える宝物を返した場合は受け取らずに`None`を返す。
    /// その宝物は既に容器から取り除かれているため、どこにも残らない。
    pub fn visit<P>(&mut self, pool: &mut P) -> Option<&Treasure>
    where
        P: TreasurePool + ?Sized,
    {
        let Some(treasure) = pool.extract_best_within(self.remaining) else {
            trace!(remaining = self.remaining, "nothing to take here");
            return None;
        };
        //容量を超える宝物を返す容器があっても受け取らない
        if !treasure.fits(self.remaining) {
            debug!(%treasure, remaining = self.remaining, "pool returned an oversized treasure");
            return None;
        }
        self.remaining -= treasure.weight();
        self.taken.push(treasure);
        trace!(%treasure, remaining = self.remaining, "took treasure");
        self.taken.last()
    }

    /// 経路上のHollowを順に訪れる
    pub fn walk<'a, P, I>(&mut self, hollows: I)
    where
        P: TreasurePool + 'a,
        I: IntoIterator<Item = &'a mut P>,
    {
        for pool in hollows {
            self.visit(pool);
        }
    }

    /// 集めた宝物を返す。1つも取れなかった場合は`None`。
    pub fn finish(self) -> Option<Vec<Treasure>> {
        debug!(
            count = self.taken.len(),
            carried = self.carried_weight(),
            capacity = self.capacity,
            "finished walking"
        );
        if self.taken.is_empty() {
            None
        } else {
            Some(self.taken)
        }
    }
}
