use std::ops::RangeInclusive;

use rand::Rng;

use crate::treasure::Treasure;

/// ランダム生成時の価値の範囲
pub const VALUE_RANGE: RangeInclusive<u64> = 1..=100;

/// ランダム生成時の重さの範囲
pub const WEIGHT_RANGE: RangeInclusive<u64> = 1..=50;

/// 1つのHollowに置かれる宝物の個数の範囲
pub const COUNT_RANGE: RangeInclusive<usize> = 5..=15;

impl Treasure {
    /// ランダムな [`Treasure`] を生成します。
    pub fn random() -> Self {
        let mut rng = rand::rng();
        Self::random_using(&mut rng)
    }

    /// 外部の乱数生成器を使用してランダムな [`Treasure`] を生成します。
    pub fn random_using<R: Rng>(rng: &mut R) -> Self {
        let value = rng.random_range(VALUE_RANGE);
        let weight = rng.random_range(WEIGHT_RANGE);
        Treasure { value, weight }
    }
}

/// 1つのHollow分の宝物をランダムに生成する
pub fn generate_treasures() -> Vec<Treasure> {
    let mut rng = rand::rng();
    let count = rng.random_range(COUNT_RANGE);
    generate_treasures_using(&mut rng, count)
}

/// 外部の乱数生成器を使用して`count`個の宝物を生成する
pub fn generate_treasures_using<R: Rng>(rng: &mut R, count: usize) -> Vec<Treasure> {
    (0..count).map(|_| Treasure::random_using(rng)).collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn generated_treasures_stay_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(12345);
        let treasures = generate_treasures_using(&mut rng, 200);

        assert_eq!(treasures.len(), 200);
        for treasure in treasures {
            assert!(VALUE_RANGE.contains(&treasure.value()));
            assert!(WEIGHT_RANGE.contains(&treasure.weight()));
        }
    }

    #[test]
    fn same_seed_same_treasures() {
        let a = generate_treasures_using(&mut ChaCha8Rng::seed_from_u64(7), 10);
        let b = generate_treasures_using(&mut ChaCha8Rng::seed_from_u64(7), 10);
        assert_eq!(a, b);
    }

    #[test]
    fn default_generator_count() {
        let treasures = generate_treasures();
        assert!(COUNT_RANGE.contains(&treasures.len()));
    }
}
