use crate::tree::OrderedMap;

impl<K: Ord, V> OrderedMap<K, V> {
    /// キーで昇順に並んだ組の列から、高さが最小の木を一括で構築する。
    ///
    /// 区間の中央の要素を先に挿入し、左右の半区間へ再帰する。
    /// 各挿入はその時点で平衡している木に対して行われるため、全体で O(n log n)。
    ///
    /// 呼び出し側は`sorted`がキーの昇順で、かつキーが重複しないことを保証しなければならない。
    /// この前提は検証しない。破った場合は平衡でない木、あるいは重複キーが上書きされた木になる。
    ///
    /// ```
    /// # use hollow_logic::OrderedMap;
    /// let map = OrderedMap::from_sorted((0..7).map(|k| (k, k * 10)).collect());
    /// assert_eq!(map.len(), 7);
    /// assert_eq!(map.height(), 3);
    /// assert_eq!(map.root().map(|n| *n.key()), Some(3));
    /// ```
    pub fn from_sorted(sorted: Vec<(K, V)>) -> Self {
        let mut map = OrderedMap::new();
        let mut slots: Vec<Option<(K, V)>> = sorted.into_iter().map(Some).collect();
        if !slots.is_empty() {
            let end = slots.len() - 1;
            map.insert_middle_out(&mut slots, 0, end);
        }
        debug_assert!(map.check_invariants());
        map
    }

    /// 並んでいない組の列を安定ソートしてから [`OrderedMap::from_sorted`] で構築する
    pub fn from_unsorted(mut pairs: Vec<(K, V)>) -> Self {
        pairs.sort_by(|(a, _), (b, _)| a.cmp(b));
        Self::from_sorted(pairs)
    }

    fn insert_middle_out(&mut self, slots: &mut [Option<(K, V)>], start: usize, end: usize) {
        if start > end {
            return;
        }
        let mid = start + (end - start) / 2;
        if let Some((key, value)) = slots[mid].take() {
            self.insert(key, value);
        }
        if mid > start {
            self.insert_middle_out(slots, start, mid - 1);
        }
        self.insert_middle_out(slots, mid + 1, end);
    }
}
