
/// 配列で表現した最大ヒープ。
///
/// 添字`i`の子は`2i+1`と`2i+2`。全ての要素のキーは子のキー以上である。
/// ヒープは格納している全ての (キー, 要素) の組を所有する。
#[derive(Debug, Clone)]
pub struct RatioMaxHeap<K, T> {
    items: Vec<(K, T)>,
}

impl<K, T> Default for RatioMaxHeap<K, T> {
    fn default() -> Self {
        RatioMaxHeap { items: Vec::new() }
    }
}

impl<K, T> RatioMaxHeap<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        RatioMaxHeap {
            items: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// 最大要素を取り出さずに参照する
    pub fn peek(&self) -> Option<(&K, &T)> {
        self.items.first().map(|(k, t)| (k, t))
    }

    /// 格納順（ヒープ配列の順）に辿る
    pub fn iter(&self) -> impl Iterator<Item = (&K, &T)> + '_ {
        self.items.iter().map(|(k, t)| (k, t))
    }

    pub fn into_vec(self) -> Vec<(K, T)> {
        self.items
    }
}

impl<K: Ord, T> RatioMaxHeap<K, T> {
    /// 任意の順序の列から O(n) でヒープを構築する。
    ///
    /// 最後の内部ノードから根に向かって順に沈める。
    ///
    /// ```
    /// # use hollow_logic::RatioMaxHeap;
    /// let mut heap = RatioMaxHeap::heapify(vec![(3, 'c'), (9, 'i'), (1, 'a')]);
    /// assert_eq!(heap.extract_max(), Some((9, 'i')));
    /// assert_eq!(heap.len(), 2);
    /// ```
    pub fn heapify(items: Vec<(K, T)>) -> Self {
        let mut heap = RatioMaxHeap { items };
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }
        debug_assert!(heap.is_valid_heap());
        heap
    }

    /// 末尾に追加して浮かせる。O(log n)
    pub fn insert(&mut self, key: K, item: T) {
        self.items.push((key, item));
        self.sift_up(self.items.len() - 1);
    }

    /// 最大要素を取り除いて返す。空なら`None`。O(log n)
    pub fn extract_max(&mut self) -> Option<(K, T)> {
        if self.items.is_empty() {
            return None;
        }
        let max = self.items.swap_remove(0);
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        Some(max)
    }

    /// 別の列をまとめて加え、一度だけ作り直す。O(n + m)
    pub fn rebuild_with(&mut self, extra: impl IntoIterator<Item = (K, T)>) {
        let mut items = std::mem::take(&mut self.items);
        items.extend(extra);
        *self = Self::heapify(items);
    }

    /// 全ての要素がその子以上のキーを持つか
    pub fn is_valid_heap(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[parent(i)].0 >= self.items[i].0)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.items[index].0 <= self.items[up].0 {
                break;
            }
            self.items.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let mut largest = index;
            let (l, r) = children(index);
            if l < len && self.items[l].0 > self.items[largest].0 {
                largest = l;
            }
            if r < len && self.items[r].0 > self.items[largest].0 {
                largest = r;
            }
            if largest == index {
                break;
            }
            self.items.swap(index, largest);
            index = largest;
        }
    }
}

fn parent(index: usize) -> usize {
    (index - 1) / 2
}

fn children(index: usize) -> (usize, usize) {
    (2 * index + 1, 2 * index + 2)
}
