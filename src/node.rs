use std::fmt::Debug;

/// A single B-tree node.
///
/// An internal node owns exactly one more child than it has keys; a leaf owns
/// no children. Child `i` holds keys smaller than `keys[i]` and child `i + 1`
/// holds keys greater than it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<K: Ord + Debug + Clone> {
    pub(crate) keys: Vec<K>,
    pub(crate) children: Vec<Box<Node<K>>>,
    pub(crate) leaf: bool,
}

impl<K: Ord + Debug + Clone> Node<K> {
    /// Builds a leaf holding `keys`.
    pub fn new_leaf(keys: Vec<K>) -> Self {
        Node { keys, children: vec![], leaf: true }
    }

    /// Builds an internal node from its separators and child subtrees.
    ///
    /// The shape is not checked here; hand the finished root to
    /// [`BTree::from_root`](crate::BTree::from_root) to validate it.
    pub fn new_internal(keys: Vec<K>, children: Vec<Node<K>>) -> Self {
        Node { keys, children: children.into_iter().map(Box::new).collect(), leaf: false }
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    pub fn children(&self) -> &[Box<Node<K>>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.leaf
    }

    /// Returns the smallest index `i` with `key <= keys[i]`.
    ///
    /// `keys.len()` means every key in the node is smaller. The index is the
    /// key's position when present, and otherwise the child whose subtree would
    /// contain it.
    pub fn locate(&self, key: &K) -> usize {
        let mut left = 0;
        let mut right = self.keys.len();

        // [left, right)
        while left < right {
            let mid = left + (right - left) / 2;
            if self.keys[mid] < *key {
                left = mid + 1;
            } else {
                right = mid;
            }
        }

        left
    }

    /// Returns true if `key` sits at index `idx` of this node.
    pub(crate) fn holds_at(&self, idx: usize, key: &K) -> bool {
        idx < self.keys.len() && self.keys[idx] == *key
    }

    /// Largest key in the subtree rooted here (the in-order predecessor source).
    pub fn max_key(&self) -> &K {
        let mut node = self;
        loop {
            if node.leaf {
                return node.keys.last().expect("Leaf node missing keys");
            }
            node = node.children.last().expect("Node missing children");
        }
    }

    /// Smallest key in the subtree rooted here (the in-order successor source).
    pub fn min_key(&self) -> &K {
        let mut node = self;
        loop {
            if node.leaf {
                return node.keys.first().expect("Leaf node missing keys");
            }
            node = node.children.first().expect("Node missing children");
        }
    }

    /// Removes the key at `idx` from a leaf by shifting later keys down.
    pub(crate) fn remove_leaf_key(&mut self, idx: usize) -> K {
        assert!(self.leaf, "remove_leaf_key called on an internal node");
        assert!(idx < self.keys.len(), "leaf key index {} out of bounds for {} keys", idx, self.keys.len());
        self.keys.remove(idx)
    }

    /// Appends this subtree's keys in ascending order.
    pub(crate) fn traverse_into(&self, out: &mut Vec<K>) {
        for i in 0..self.keys.len() {
            if !self.leaf {
                self.children[i].traverse_into(out);
            }
            out.push(self.keys[i].clone());
        }
        if !self.leaf {
            self.children[self.keys.len()].traverse_into(out);
        }
    }

    pub(crate) fn height(&self) -> usize {
        let mut node = self;
        let mut levels = 1;
        while !node.leaf {
            node = &node.children[0];
            levels += 1;
        }
        levels
    }

    pub(crate) fn count_keys(&self) -> usize {
        self.keys.len() + self.children.iter().map(|child| child.count_keys()).sum::<usize>()
    }
}
