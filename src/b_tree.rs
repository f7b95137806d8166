use std::fmt::{self, Debug};

use crate::error::Result;
use crate::node::Node;
use crate::options::BTreeOptions;

// CLRS definition: with minimum degree t,
// the root holds 1..=2t-1 keys (the empty tree has no root at all),
// any other node holds t-1..=2t-1 keys,
// an internal node with n keys has n+1 children,
// and every leaf sits at the same depth.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTree<K: Ord + Debug + Clone> {
    pub(crate) root: Option<Box<Node<K>>>,
    pub(crate) min_degree: usize,
    pub(crate) len: usize,
}

impl<K: Ord + Debug + Clone> BTree<K> {
    /// Constructor method for BTree
    ///
    /// Takes in the minimum degree t of the tree. Panics if t < 2; use
    /// [`BTree::with_options`] for a fallible version.
    pub fn new(t: usize) -> Self {
        assert!(t >= 2, "BTree minimum degree must be at least 2");
        BTree { root: None, min_degree: t, len: 0 }
    }

    pub fn with_options(options: BTreeOptions) -> Result<Self> {
        options.validate()?;
        Ok(BTree { root: None, min_degree: options.min_degree, len: 0 })
    }

    /// Adopts an already built node shape as a tree of minimum degree `t`.
    ///
    /// Every structural invariant is checked first, so the returned tree is
    /// safe to delete from. A key-less leaf root yields the empty tree.
    pub fn from_root(t: usize, root: Node<K>) -> Result<Self> {
        BTreeOptions::default().with_min_degree(t).validate()?;

        let root = if root.leaf && root.keys.is_empty() && root.children.is_empty() {
            None
        } else {
            Some(Box::new(root))
        };
        let len = root.as_ref().map_or(0, |r| r.count_keys());

        let btree = BTree { root, min_degree: t, len };
        btree.validate()?;
        Ok(btree)
    }

    /// Search method for BTree
    ///
    /// Returns true if key is present, false otherwise
    pub fn search(&self, key: &K) -> bool {
        let mut node = match &self.root {
            Some(r) => r.as_ref(),
            None => return false,
        };

        loop {
            let idx = node.locate(key);
            if node.holds_at(idx, key) {
                return true;
            }
            if node.leaf {
                return false;
            }
            node = &node.children[idx];
        }
    }

    /// Returns every key in ascending order
    pub fn traverse(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.len);
        if let Some(r) = &self.root {
            r.traverse_into(&mut keys);
        }
        keys
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn min_degree(&self) -> usize {
        self.min_degree
    }

    /// Number of levels, 0 for the empty tree.
    pub fn height(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.height())
    }

    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    pub fn min(&self) -> Option<&K> {
        self.root.as_ref().map(|r| r.min_key())
    }

    pub fn max(&self) -> Option<&K> {
        self.root.as_ref().map(|r| r.max_key())
    }
}

/// Prints one node per line, indented by depth.
impl<K: Ord + Debug + Clone> fmt::Display for BTree<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.root {
            Some(r) => {
                writeln!(f, "=== BTree Structure (Min Degree {}) ===", self.min_degree)?;
                r.fmt_structure(f, 0)
            }
            None => writeln!(f, "=== EMPTY BTREE ==="),
        }
    }
}

impl<K: Ord + Debug + Clone> Node<K> {
    fn fmt_structure(&self, f: &mut fmt::Formatter<'_>, level: usize) -> fmt::Result {
        let indent = "  ".repeat(level);
        writeln!(f, "{}Node (leaf={}): {:?}", indent, self.leaf, self.keys)?;

        for child in &self.children {
            child.fmt_structure(f, level + 1)?;
        }
        Ok(())
    }
}
