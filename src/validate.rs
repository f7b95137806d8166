use std::fmt::Debug;

use crate::b_tree::BTree;
use crate::error::InvariantViolation;
use crate::node::Node;

impl<K: Ord + Debug + Clone> BTree<K> {
    /// Checks every structural invariant, returning the first one broken.
    ///
    /// Walks the whole tree, so it is meant for tests and for vetting trees
    /// built elsewhere, not for hot paths.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        let Some(root) = &self.root else {
            return Ok(());
        };
        if root.keys.is_empty() {
            return Err(InvariantViolation::EmptyRoot);
        }

        let mut checker = Checker { t: self.min_degree, leaf_depth: None };
        checker.check(root, 0, None, None)
    }
}

struct Checker {
    t: usize,
    leaf_depth: Option<usize>,
}

impl Checker {
    fn check<K: Ord + Debug + Clone>(
        &mut self,
        node: &Node<K>,
        depth: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> Result<(), InvariantViolation> {
        let count = node.keys.len();
        let (min, max) = if depth == 0 { (1, 2 * self.t - 1) } else { (self.t - 1, 2 * self.t - 1) };
        if count < min || count > max {
            return Err(InvariantViolation::KeyCount { depth, count, min, max });
        }

        if node.keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(InvariantViolation::UnsortedKeys { depth });
        }

        let below_lower = lower.is_some_and(|lo| node.keys[0] <= *lo);
        let above_upper = upper.is_some_and(|hi| node.keys[count - 1] >= *hi);
        if below_lower || above_upper {
            return Err(InvariantViolation::KeyOutOfRange { depth });
        }

        if node.leaf != node.children.is_empty() {
            return Err(InvariantViolation::LeafMismatch { depth });
        }

        if node.leaf {
            return match self.leaf_depth {
                None => {
                    self.leaf_depth = Some(depth);
                    Ok(())
                }
                Some(expected) if expected != depth => {
                    Err(InvariantViolation::UnevenLeafDepth { expected, found: depth })
                }
                Some(_) => Ok(()),
            };
        }

        if node.children.len() != count + 1 {
            return Err(InvariantViolation::ChildCount { depth, keys: count, children: node.children.len() });
        }

        for (i, child) in node.children.iter().enumerate() {
            let lo = if i == 0 { lower } else { Some(&node.keys[i - 1]) };
            let hi = if i == count { upper } else { Some(&node.keys[i]) };
            self.check(child, depth + 1, lo, hi)?;
        }
        Ok(())
    }
}
