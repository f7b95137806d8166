use std::fmt::Debug;

use tracing::{debug, trace};

use crate::b_tree::BTree;
use crate::node::Node;

impl<K: Ord + Debug + Clone> BTree<K> {
    /// Deletes a key from the b-tree
    ///
    /// Deleting a key that is not in the tree leaves the tree untouched.
    /// Panics if the tree breaks a structural invariant along the way.
    pub fn delete(&mut self, key: &K) {
        if !self.search(key) {
            trace!(?key, "delete: key absent, nothing to do");
            return;
        }

        let t = self.min_degree;
        let Some(root) = self.root.as_mut() else {
            return;
        };

        let removed = if root.leaf {
            // The root is exempt from the t - 1 floor, so it is handled here
            // rather than by the recursive case 1.
            let idx = root.locate(key);
            if root.holds_at(idx, key) {
                trace!(?key, index = idx, "case 1: removing key from root leaf");
                root.remove_leaf_key(idx);
                true
            } else {
                false
            }
        } else {
            root.delete(key, t)
        };

        if removed {
            self.len -= 1;
        }
        self.collapse_root();
    }

    /// Replaces a key-less root by its only child, or clears an empty leaf root.
    fn collapse_root(&mut self) {
        let Some(root) = self.root.as_mut() else {
            return;
        };
        if !root.keys.is_empty() {
            return;
        }

        if root.leaf {
            debug!("root leaf emptied, tree is now empty");
            self.root = None;
        } else {
            debug!("root emptied after merge, collapsing onto its only child");
            let new_root = root.children.pop().expect("Empty internal root must keep one child");
            self.root = Some(new_root);
        }
    }
}

impl<K: Ord + Debug + Clone> Node<K> {
    /// Deletes `key` from the subtree rooted at this non-root node.
    ///
    /// Every node the descent enters holds at least `t` keys (the root being
    /// the exception), so removing one key never underflows it. Returns true
    /// if a key was removed.
    pub(crate) fn delete(&mut self, key: &K, t: usize) -> bool {
        let idx = self.locate(key);
        let present = self.holds_at(idx, key);

        match (present, self.leaf) {
            (true, true) => {
                // Case 1
                assert!(
                    self.keys.len() >= t,
                    "non-root leaf holds {} keys, needs at least t = {} before removal",
                    self.keys.len(),
                    t
                );
                trace!(?key, index = idx, "case 1: removing key from leaf");
                self.remove_leaf_key(idx);
                true
            }
            (true, false) => self.delete_internal(idx, key, t),
            (false, false) => self.delete_descend(idx, key, t),
            (false, true) => false,
        }
    }

    /// Case 2: `key` is the separator at `idx` of this internal node.
    fn delete_internal(&mut self, idx: usize, key: &K, t: usize) -> bool {
        if self.children[idx].keys.len() >= t {
            let pred = self.children[idx].max_key().clone();
            trace!(?key, ?pred, index = idx, "case 2a: replacing with predecessor");
            self.keys[idx] = pred.clone();
            self.children[idx].delete(&pred, t)
        } else if self.children[idx + 1].keys.len() >= t {
            let succ = self.children[idx + 1].min_key().clone();
            trace!(?key, ?succ, index = idx, "case 2b: replacing with successor");
            self.keys[idx] = succ.clone();
            self.children[idx + 1].delete(&succ, t)
        } else {
            trace!(?key, index = idx, "case 2c: merging children around key");
            self.merge_with_right(idx, t);
            self.children[idx].delete(key, t)
        }
    }

    /// Case 3: `key` is not in this internal node, so it can only live under
    /// `children[idx]`. Makes sure that child holds at least `t` keys first.
    fn delete_descend(&mut self, idx: usize, key: &K, t: usize) -> bool {
        let target = if self.children[idx].keys.len() >= t {
            idx
        } else {
            self.fill_child(idx, key, t)
        };
        self.children[target].delete(key, t)
    }

    /// Brings `children[idx]` up from `t - 1` keys, preferring the right
    /// sibling over the left for both borrowing and merging. Returns the index
    /// of the child that now covers `key`.
    fn fill_child(&mut self, idx: usize, key: &K, t: usize) -> usize {
        let has_right = idx + 1 < self.children.len();
        let has_left = idx > 0;
        assert!(has_left || has_right, "internal node must have at least two children");

        if has_right && self.children[idx + 1].keys.len() >= t {
            trace!(?key, index = idx, "case 3a: borrowing from right sibling");
            self.borrow_from_right(idx, t);
            idx
        } else if has_left && self.children[idx - 1].keys.len() >= t {
            trace!(?key, index = idx, "case 3a: borrowing from left sibling");
            self.borrow_from_left(idx, t);
            idx
        } else if has_right {
            trace!(?key, index = idx, "case 3b: merging with right sibling");
            self.merge_with_right(idx, t);
            idx
        } else {
            trace!(?key, index = idx, "case 3b: merging with left sibling");
            self.merge_with_left(idx, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::b_tree::BTree;
    use crate::node::Node;

    fn leaf(keys: &[i32]) -> Node<i32> {
        Node::new_leaf(keys.to_vec())
    }

    fn tree(t: usize, root: Node<i32>) -> BTree<i32> {
        BTree::from_root(t, root).expect("test tree must be valid")
    }

    #[test]
    fn test_delete_root_collapse_case_2c() {
        let mut btree = tree(2, Node::new_internal(vec![10], vec![leaf(&[5]), leaf(&[15])]));
        btree.delete(&10);

        let root = btree.root().expect("tree must not be empty");
        assert!(root.is_leaf());
        assert_eq!(root.keys(), &[5, 15]);
        assert_eq!(btree.height(), 1);
        assert_eq!(btree.len(), 2);
        assert!(btree.validate().is_ok());
    }

    #[test]
    fn test_delete_predecessor_case_2a() {
        let mut btree = tree(2, Node::new_internal(vec![10], vec![leaf(&[5, 8]), leaf(&[15])]));
        btree.delete(&10);

        let expected = tree(2, Node::new_internal(vec![8], vec![leaf(&[5]), leaf(&[15])]));
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_successor_case_2b() {
        let mut btree = tree(2, Node::new_internal(vec![10], vec![leaf(&[5]), leaf(&[15, 18])]));
        btree.delete(&10);

        let expected = tree(2, Node::new_internal(vec![15], vec![leaf(&[5]), leaf(&[18])]));
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_borrow_prefers_right_sibling() {
        let mut btree = tree(
            2,
            Node::new_internal(vec![10, 20], vec![leaf(&[5, 7]), leaf(&[15]), leaf(&[25, 27])]),
        );
        btree.delete(&15);

        let expected = tree(
            2,
            Node::new_internal(vec![10, 25], vec![leaf(&[5, 7]), leaf(&[20]), leaf(&[27])]),
        );
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_borrow_from_left_sibling() {
        let mut btree = tree(2, Node::new_internal(vec![10, 20], vec![leaf(&[5]), leaf(&[15, 17]), leaf(&[25])]));
        btree.delete(&25);

        let expected = tree(2, Node::new_internal(vec![10, 17], vec![leaf(&[5]), leaf(&[15]), leaf(&[20])]));
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_merge_prefers_right_sibling() {
        let mut btree = tree(2, Node::new_internal(vec![10, 20], vec![leaf(&[5]), leaf(&[15]), leaf(&[25])]));
        btree.delete(&15);

        let expected = tree(2, Node::new_internal(vec![10], vec![leaf(&[5]), leaf(&[20, 25])]));
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_merge_with_left_sibling_at_last_child() {
        let mut btree = tree(2, Node::new_internal(vec![10, 20], vec![leaf(&[5, 7]), leaf(&[15]), leaf(&[25])]));
        btree.delete(&7);
        btree.delete(&25);

        let expected = tree(2, Node::new_internal(vec![10], vec![leaf(&[5]), leaf(&[15, 20])]));
        assert_eq!(btree, expected);
    }

    #[test]
    fn test_delete_absent_key_is_noop() {
        let mut btree = tree(2, Node::new_internal(vec![10], vec![leaf(&[5]), leaf(&[15])]));
        let before = btree.clone();

        btree.delete(&20);
        btree.delete(&7);

        assert_eq!(btree, before);
    }

    #[test]
    fn test_delete_last_key_empties_tree() {
        let mut btree = tree(3, leaf(&[42]));
        btree.delete(&42);

        assert!(btree.is_empty());
        assert!(btree.root().is_none());

        // Deleting from an empty tree is a no-op too
        btree.delete(&42);
        assert!(btree.is_empty());
    }

    #[test]
    fn test_absent_key_recursion_removes_nothing() {
        let mut node = Node::new_internal(vec![10], vec![leaf(&[5, 7]), leaf(&[15, 17])]);
        assert!(!node.delete(&12, 2));
        assert!(node.delete(&15, 2));
    }

    #[test]
    #[should_panic(expected = "non-root leaf holds 1 keys")]
    fn test_delete_from_underfull_leaf_panics() {
        let mut node = leaf(&[5]);
        node.delete(&5, 2);
    }
}
