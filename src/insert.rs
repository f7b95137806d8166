use std::fmt::Debug;

use tracing::trace;

use crate::b_tree::BTree;
use crate::node::Node;

impl<K: Ord + Debug + Clone> BTree<K> {
    /// Inserts a key into the b-tree
    ///
    /// Full nodes (2t - 1 keys) are split on the way down, so the descent
    /// never has to back up. Returns false if the key was already present.
    pub fn insert(&mut self, key: K) -> bool {
        if self.search(&key) {
            return false;
        }

        let t = self.min_degree;
        match self.root.take() {
            None => {
                self.root = Some(Box::new(Node::new_leaf(vec![key])));
            }
            Some(old_root) if old_root.keys.len() == 2 * t - 1 => {
                // Root is full: grow a new root above it, split, then insert
                let mut new_root = Box::new(Node { keys: vec![], children: vec![old_root], leaf: false });
                new_root.split_child(0, t);
                new_root.insert_non_full(key, t);
                self.root = Some(new_root);
            }
            Some(mut root) => {
                root.insert_non_full(key, t);
                self.root = Some(root);
            }
        }

        self.len += 1;
        true
    }
}

impl<K: Ord + Debug + Clone> Node<K> {
    /// Inserts a key into the subtree rooted at this non-full node.
    fn insert_non_full(&mut self, key: K, t: usize) {
        let mut idx = self.locate(&key);

        if self.leaf {
            self.keys.insert(idx, key);
            return;
        }

        if self.children[idx].keys.len() == 2 * t - 1 {
            self.split_child(idx, t);
            // Choose left or right half depending on the key lifted into idx
            if key > self.keys[idx] {
                idx += 1;
            }
        }
        self.children[idx].insert_non_full(key, t);
    }

    /// Splits the full child at `child_idx` into two t - 1 key halves and lifts
    /// its median into this node.
    fn split_child(&mut self, child_idx: usize, t: usize) {
        let child = &mut self.children[child_idx];
        debug_assert_eq!(child.keys.len(), 2 * t - 1);

        let right_keys: Vec<K> = child.keys.split_off(t);
        let middle_key = child.keys.pop().expect("Middle key missing in split_child");
        let right_children = if child.leaf { vec![] } else { child.children.split_off(t) };

        trace!(?middle_key, index = child_idx, "splitting full child");

        let new_node = Node { keys: right_keys, children: right_children, leaf: child.leaf };
        self.keys.insert(child_idx, middle_key);
        self.children.insert(child_idx + 1, Box::new(new_node));
    }
}
