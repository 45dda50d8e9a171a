use std::cmp::Ordering;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[cfg(any(test))]
use proptest::prelude::*;

use crate::error::Error;

#[cfg(any(test, feature = "random"))]
pub mod random;

/// Treasureは迷路のHollowに置かれる宝物を表す型。
///
/// 生成後に値が変わることはない。`weight`は必ず正の値であり、
/// [`Treasure::new`]がこれを検証する。
///
/// ```
/// pub struct Treasure {
///     value: u64,
///     weight: u64,
/// }
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Treasure {
    value: u64,
    weight: u64,
}

impl fmt::Display for Treasure {
    /// 形式は `"{value}/{weight}"`。
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.value, self.weight)
    }
}

impl Treasure {
    /// 価値と重さから [`Treasure`] を構築します。
    ///
    /// 重さが0の場合は比率が定義できないため [`Error::ZeroWeight`] を返します。
    ///
    /// ```
    /// # use hollow_logic::Treasure;
    /// let treasure = Treasure::new(10, 2).unwrap();
    /// assert_eq!(treasure.ratio(), 5.0);
    /// ```
    ///
    /// ```
    /// # use hollow_logic::{Error, Treasure};
    /// assert_eq!(Treasure::new(10, 0), Err(Error::ZeroWeight { value: 10 }));
    /// ```
    pub fn new(value: u64, weight: u64) -> Result<Treasure, Error> {
        if weight == 0 {
            return Err(Error::ZeroWeight { value });
        }
        Ok(Treasure { value, weight })
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// 重さあたりの価値を返す
    pub fn ratio(&self) -> f64 {
        self.value as f64 / self.weight as f64
    }

    /// 容量`capacity`のバックパックに入るかどうか
    pub fn fits(&self, capacity: u64) -> bool {
        self.weight <= capacity
    }

    /// Hollow内での読み込み順`seq`を添えて順位キーを作る
    pub fn rank(&self, seq: u64) -> Rank {
        Rank {
            ratio: self.ratio(),
            seq,
        }
    }

    #[cfg(any(test))]
    pub fn arb() -> impl Strategy<Value = Self> {
        Self::arb_within(0..=100, 1..=50)
    }

    #[cfg(any(test))]
    pub fn arb_within(
        value: std::ops::RangeInclusive<u64>,
        weight: std::ops::RangeInclusive<u64>,
    ) -> impl Strategy<Value = Self> {
        (value, weight).prop_map(|(value, weight)| Treasure::new(value, weight.max(1)).unwrap())
    }
}

/// 宝物の順位を表すキー。
///
/// 比率が大きいほど大きい。比率が等しい場合は`seq`が小さい（先に読み込まれた）方が大きい。
/// これにより同じHollow内で比率が重複しても、キーは必ず一意になる。
///
/// 木には [`std::cmp::Reverse`] で包んで格納するため、昇順に辿ると比率の降順になる。
/// ヒープにはそのまま格納するため、最大要素が最も比率の高い宝物になる。
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rank {
    ratio: f64,
    seq: u64,
}

impl Rank {
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

impl PartialEq for Rank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Rank {}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.ratio
            .total_cmp(&other.ratio)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// 宝物の列に読み込み順の`seq`を振り、順位キーと組にする
pub(crate) fn ranked(treasures: Vec<Treasure>) -> impl Iterator<Item = (Rank, Treasure)> {
    treasures
        .into_iter()
        .enumerate()
        .map(|(seq, treasure)| (treasure.rank(seq as u64), treasure))
}
