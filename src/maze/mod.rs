use std::fmt;

use tracing::debug;

use crate::config::SelectionConfig;
use crate::error::Error;
use crate::pool::{Hollow, SharedHeapRegistry, TreasurePool, TreePool};
use crate::treasure::Treasure;

pub mod traveler;


pub use traveler::Traveler;

/// 迷路の中のHollowを指す番号
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HollowId(usize);

impl HollowId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for HollowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// 経路上の1マス。経路の探索は迷路側で行われ、ここでは結果の列だけを受け取る。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Terrain,
    Hollow(HollowId),
}

/// Hollowの集合と共有ヒープの寿命を持つ迷路。
///
/// 共有Hollowは全て1つのヒープを参照する。迷路を破棄するとレジストリが参照を手放し、
/// 最後の共有Hollowと共にヒープも解放される。
#[derive(Debug)]
pub struct Maze {
    hollows: Vec<Hollow>,
    registry: SharedHeapRegistry,
    config: SelectionConfig,
}

impl Default for Maze {
    fn default() -> Self {
        Maze::new(SelectionConfig::default())
    }
}

impl Maze {
    pub fn new(config: SelectionConfig) -> Self {
        Maze {
            hollows: Vec::new(),
            registry: SharedHeapRegistry::new(config.heap_restore),
            config,
        }
    }

    pub fn config(&self) -> SelectionConfig {
        self.config
    }

    pub fn registry(&self) -> &SharedHeapRegistry {
        &self.registry
    }

    pub fn hollow_count(&self) -> usize {
        self.hollows.len()
    }

    pub fn hollow(&self, id: HollowId) -> Option<&Hollow> {
        self.hollows.get(id.0)
    }

    pub fn hollow_mut(&mut self, id: HollowId) -> Option<&mut Hollow> {
        self.hollows.get_mut(id.0)
    }

    pub fn hollows(&self) -> impl Iterator<Item = (HollowId, &Hollow)> + '_ {
        self.hollows
            .iter()
            .enumerate()
            .map(|(index, hollow)| (HollowId(index), hollow))
    }

    /// このHollowだけが所有する宝物を持つHollowを追加する
    pub fn add_exclusive(&mut self, treasures: Vec<Treasure>) -> Result<HollowId, Error> {
        if treasures.is_empty() {
            return Err(Error::EmptyTreasureSet);
        }
        let pool = TreePool::new(treasures, self.config.tree_scan);
        Ok(self.push(Hollow::Exclusive(pool)))
    }

    /// 共有ヒープを参照するHollowを追加する。
    ///
    /// 最初の共有Hollowを追加するときだけ`generate`が呼ばれ、その宝物で共有ヒープが作られる。
    pub fn add_shared<F>(&mut self, generate: F) -> Result<HollowId, Error>
    where
        F: FnOnce() -> Vec<Treasure>,
    {
        let pool = if self.registry.is_established() {
            self.registry.link_with(Vec::new)
        } else {
            let treasures = generate();
            if treasures.is_empty() {
                return Err(Error::EmptyTreasureSet);
            }
            self.registry.link_with(move || treasures)
        };
        Ok(self.push(Hollow::Shared(pool)))
    }

    /// ランダムな宝物を持つHollowを追加する
    #[cfg(any(test, feature = "random"))]
    pub fn add_random_exclusive(&mut self) -> HollowId {
        let pool = TreePool::new(generate_non_empty(), self.config.tree_scan);
        self.push(Hollow::Exclusive(pool))
    }

    /// 共有Hollowを追加する。共有ヒープが無ければランダムな宝物で作る
    #[cfg(any(test, feature = "random"))]
    pub fn add_random_shared(&mut self) -> HollowId {
        let pool = self.registry.link_with(generate_non_empty);
        self.push(Hollow::Shared(pool))
    }

    fn push(&mut self, hollow: Hollow) -> HollowId {
        let id = HollowId(self.hollows.len());
        debug!(%id, kind = ?hollow.kind(), len = hollow.len(), "added hollow");
        self.hollows.push(hollow);
        id
    }

    /// 経路を順に歩き、各Hollowで容量に収まる最良の宝物を1つずつ取る。
    ///
    /// 1つも取れなければ`Ok(None)`。経路に存在しないHollowが含まれていれば、
    /// どのHollowにも触れずに [`Error::HollowNotFound`] を返す。
    pub fn take_treasures(
        &mut self,
        path: &[Cell],
        capacity: u64,
    ) -> Result<Option<Vec<Treasure>>, Error> {
        if let Some(id) = path.iter().find_map(|cell| match cell {
            Cell::Hollow(id) if id.0 >= self.hollows.len() => Some(id.0),
            _ => None,
        }) {
            return Err(Error::HollowNotFound { id });
        }

        let mut traveler = Traveler::new(capacity);
        for cell in path {
            if let Cell::Hollow(id) = cell {
                traveler.visit(&mut self.hollows[id.0]);
            }
        }
        Ok(traveler.finish())
    }
}

impl Drop for Maze {
    fn drop(&mut self) {
        self.registry.teardown();
    }
}

#[cfg(any(test, feature = "random"))]
fn generate_non_empty() -> Vec<Treasure> {
    let treasures = crate::treasure::random::generate_treasures();
    debug_assert!(!treasures.is_empty());
    treasures
}
