use std::fmt::Debug;
use std::mem;

use crate::node::Node;

// Each operator asserts its occupancy preconditions; a violation means the
// tree was malformed on entry.

impl<K: Ord + Debug + Clone> Node<K> {
    /// Merges separator `separator` and every key and child of `right` onto the
    /// end of `self`, where `right` is the sibling directly to the right.
    ///
    /// Both nodes must hold exactly `t - 1` keys; `self` ends with `2t - 1`.
    /// `right` is dropped here.
    pub(crate) fn merge_left(&mut self, right: Box<Node<K>>, separator: K, t: usize) {
        assert_eq!(self.keys.len(), t - 1, "merge target must hold exactly t - 1 keys");
        assert_eq!(right.keys.len(), t - 1, "merged sibling must hold exactly t - 1 keys");
        assert_eq!(self.leaf, right.leaf, "merged siblings must both be leaves or both internal");

        let Node { keys: mut right_keys, children: mut right_children, .. } = *right;
        self.keys.push(separator);
        self.keys.append(&mut right_keys);
        self.children.append(&mut right_children);
    }

    /// Merges `left`, the sibling directly to the left, and `separator` onto the
    /// front of `self`. The result is `left.keys ++ [separator] ++ self.keys`.
    ///
    /// Both nodes must hold exactly `t - 1` keys; `left` is dropped here.
    pub(crate) fn merge_right(&mut self, left: Box<Node<K>>, separator: K, t: usize) {
        assert_eq!(self.keys.len(), t - 1, "merge target must hold exactly t - 1 keys");
        assert_eq!(left.keys.len(), t - 1, "merged sibling must hold exactly t - 1 keys");
        assert_eq!(self.leaf, left.leaf, "merged siblings must both be leaves or both internal");

        let Node { mut keys, mut children, .. } = *left;
        keys.push(separator);
        keys.append(&mut self.keys);
        children.append(&mut self.children);
        self.keys = keys;
        self.children = children;
    }

    /// Rotates one key from `children[idx - 1]` through `keys[idx - 1]` into
    /// `children[idx]`, along with the lender's last child.
    ///
    /// This node's key count does not change.
    pub(crate) fn borrow_from_left(&mut self, idx: usize, t: usize) {
        assert!(idx > 0 && idx < self.children.len(), "child {} has no left sibling", idx);
        let separator_idx = idx - 1;

        let (before, after) = self.children.split_at_mut(idx);
        let lender = &mut before[separator_idx];
        let child = &mut after[0];
        assert!(lender.keys.len() >= t, "left sibling must hold at least t keys to lend one");
        assert!(child.keys.len() < 2 * t - 1, "borrowing node must have room for another key");

        let borrowed = lender.keys.pop().expect("Left sibling has no keys");
        let separator = mem::replace(&mut self.keys[separator_idx], borrowed);
        child.keys.insert(0, separator);

        if !lender.leaf {
            let last_child = lender.children.pop().expect("Left sibling has no children");
            child.children.insert(0, last_child);
        }
    }

    /// Rotates one key from `children[idx + 1]` through `keys[idx]` into
    /// `children[idx]`, along with the lender's first child.
    pub(crate) fn borrow_from_right(&mut self, idx: usize, t: usize) {
        assert!(idx + 1 < self.children.len(), "child {} has no right sibling", idx);

        let (before, after) = self.children.split_at_mut(idx + 1);
        let child = &mut before[idx];
        let lender = &mut after[0];
        assert!(lender.keys.len() >= t, "right sibling must hold at least t keys to lend one");
        assert!(child.keys.len() < 2 * t - 1, "borrowing node must have room for another key");

        let borrowed = lender.keys.remove(0);
        let separator = mem::replace(&mut self.keys[idx], borrowed);
        child.keys.push(separator);

        if !lender.leaf {
            let first_child = lender.children.remove(0);
            child.children.push(first_child);
        }
    }

    /// Absorbs `children[idx + 1]` and separator `keys[idx]` into
    /// `children[idx]`, which survives at `idx`.
    pub(crate) fn merge_with_right(&mut self, idx: usize, t: usize) {
        assert!(idx + 1 < self.children.len(), "child {} has no right sibling", idx);

        let separator = self.keys.remove(idx);
        let right = self.children.remove(idx + 1);
        self.children[idx].merge_left(right, separator, t);
    }

    /// Absorbs `children[idx - 1]` and separator `keys[idx - 1]` into
    /// `children[idx]`. The survivor shifts down one slot; its new index is
    /// returned.
    pub(crate) fn merge_with_left(&mut self, idx: usize, t: usize) -> usize {
        assert!(idx > 0 && idx < self.children.len(), "child {} has no left sibling", idx);

        let separator = self.keys.remove(idx - 1);
        let left = self.children.remove(idx - 1);
        self.children[idx - 1].merge_right(left, separator, t);
        idx - 1
    }
}
