use std::cmp::Ordering;
use std::collections::VecDeque;
use std::fmt::{self, Debug};

mod build;
mod iter;

pub use iter::Iter;

#[cfg(test)]
pub(crate) mod tests;

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// 二分探索木のノード。左の部分木には小さいキー、右の部分木には大きいキーだけが入る。
pub struct Node<K, V> {
    key: K,
    value: V,
    left: Link<K, V>,
    right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    fn new(key: K, value: V) -> Self {
        Node {
            key,
            value,
            left: None,
            right: None,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn left(&self) -> Option<&Node<K, V>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Node<K, V>> {
        self.right.as_deref()
    }
}

/// 回転を行わない素朴な二分探索木によるキー→値の順序付きマップ。
///
/// 平衡は [`OrderedMap::from_sorted`] による一括構築の時点でのみ保証される。
/// 以降の挿入・削除で木の高さが崩れても再平衡は行わない。
///
/// 要素数は木自身が保持しており、構造の中身と常に一致する。
pub struct OrderedMap<K, V> {
    root: Link<K, V>,
    len: usize,
}

impl<K, V> Default for OrderedMap<K, V> {
    fn default() -> Self {
        OrderedMap { root: None, len: 0 }
    }
}

impl<K, V> Drop for OrderedMap<K, V> {
    /// 偏った木でも再帰せずに解放する
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<K, V>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl<K: Debug, V: Debug> Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K, V> OrderedMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 構造を読むための根ノード
    pub fn root(&self) -> Option<&Node<K, V>> {
        self.root.as_deref()
    }

    /// 木の高さを返す。空の木は0、根だけの木は1。
    ///
    /// 段ごとに幅優先で数えるので、列のように伸びた木でもスタックを消費しない。
    pub fn height(&self) -> usize {
        let mut level: VecDeque<&Node<K, V>> = self.root().into_iter().collect();
        let mut height = 0;
        while !level.is_empty() {
            height += 1;
            for _ in 0..level.len() {
                if let Some(node) = level.pop_front() {
                    level.extend(node.left());
                    level.extend(node.right());
                }
            }
        }
        height
    }

    /// キーの昇順に辿るイテレータ
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self.root())
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// 最小のキーを持つ要素
    pub fn first(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(left) = node.left() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// 最大のキーを持つ要素
    pub fn last(&self) -> Option<(&K, &V)> {
        let mut node = self.root()?;
        while let Some(right) = node.right() {
            node = right;
        }
        Some((&node.key, &node.value))
    }
}

impl<K: Ord, V> OrderedMap<K, V> {
    /// キーと値を挿入する。同じキーが既にあれば値を置き換え、古い値を返す。
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match key.cmp(&node.key) {
                Ordering::Less => link = &mut node.left,
                Ordering::Greater => link = &mut node.right,
                Ordering::Equal => return Some(std::mem::replace(&mut node.value, value)),
            }
        }
        *link = Some(Box::new(Node::new(key, value)));
        self.len += 1;
        None
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        let mut current = self.root();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// キーに一致するノードを取り除き、その値を返す。
    ///
    /// 子を2つ持つノードは右部分木の最小ノード（中間順での後続）で置き換える。
    /// 探索経路以外のノードには触れない。
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_ref() {
                None => return None,
                Some(node) => key.cmp(&node.key),
            };
            if ordering == Ordering::Equal {
                break;
            }
            if let Some(node) = link {
                link = match ordering {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                };
            }
        }

        let mut node = link.take()?;
        *link = match (node.left.take(), node.right.take()) {
            (None, None) => None,
            (Some(child), None) | (None, Some(child)) => Some(child),
            (Some(left), Some(right)) => {
                let mut rest = Some(right);
                let mut successor = detach_min(&mut rest);
                debug_assert!(successor.is_some());
                if let Some(successor) = successor.as_mut() {
                    successor.left = Some(left);
                    successor.right = rest;
                }
                successor
            }
        };
        self.len -= 1;
        Some(node.value)
    }

    /// 中間順が狭義単調増加であり、要素数が保持している`len`と一致するか
    pub fn check_invariants(&self) -> bool {
        let mut count = 0;
        let mut previous: Option<&K> = None;
        for (key, _) in self.iter() {
            if previous.is_some_and(|p| p >= key) {
                return false;
            }
            previous = Some(key);
            count += 1;
        }
        count == self.len
    }
}

/// 部分木から最小ノードを切り離して返す。最小ノードの右の子はその位置に繰り上がる。
fn detach_min<K, V>(mut link: &mut Link<K, V>) -> Link<K, V> {
    loop {
        if !link.as_ref().is_some_and(|node| node.left.is_some()) {
            break;
        }
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let mut min = link.take()?;
    *link = min.right.take();
    Some(min)
}
