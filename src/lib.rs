//! An in-memory B-tree over totally ordered keys, parameterized by its
//! minimum degree `t` (CLRS definition).
//!
//! The interesting part is deletion: [`BTree::delete`] walks down from the
//! root once, borrowing from or merging with siblings ahead of time so every
//! node it enters can afford to lose a key, and collapses the root when it
//! runs out of keys.
//!
//! ```
//! use degree_btree::BTree;
//!
//! let mut btree = BTree::new(2);
//! for key in 1..=10 {
//!     btree.insert(key);
//! }
//!
//! btree.delete(&4);
//! assert!(!btree.search(&4));
//! assert!(btree.validate().is_ok());
//! ```

mod b_tree;
mod delete;
mod error;
mod insert;
mod node;
mod options;
mod rebalance;
mod validate;

pub use b_tree::BTree;
pub use error::{BTreeError, InvariantViolation, Result};
pub use node::Node;
pub use options::{BTreeOptions, MIN_DEGREE_FLOOR};
