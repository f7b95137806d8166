use thiserror::Error;

/// Errors returned by fallible tree construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BTreeError {
    /// The minimum degree must be at least 2.
    #[error("BTree minimum degree must be at least 2, got {0}")]
    InvalidMinDegree(usize),
    /// A supplied node shape breaks a structural invariant.
    #[error(transparent)]
    Invariant(#[from] InvariantViolation),
}

/// A structural invariant that does not hold for some node of a tree.
///
/// `depth` is counted from the root, which sits at depth 0.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// Keys inside one node are not strictly ascending.
    #[error("keys at depth {depth} are not strictly ascending")]
    UnsortedKeys { depth: usize },
    /// A key falls outside the range bracketed by its parent's separators.
    #[error("key at depth {depth} lies outside the range of its parent separators")]
    KeyOutOfRange { depth: usize },
    /// A node holds too few or too many keys.
    #[error("node at depth {depth} holds {count} keys, expected {min}..={max}")]
    KeyCount {
        depth: usize,
        count: usize,
        min: usize,
        max: usize,
    },
    /// The root holds no keys but the tree is not empty.
    #[error("root node holds no keys")]
    EmptyRoot,
    /// An internal node does not have exactly one more child than keys.
    #[error("internal node at depth {depth} has {children} children for {keys} keys")]
    ChildCount {
        depth: usize,
        keys: usize,
        children: usize,
    },
    /// The leaf flag disagrees with whether the node has children.
    #[error("leaf flag at depth {depth} disagrees with its children")]
    LeafMismatch { depth: usize },
    /// Leaves sit at different depths.
    #[error("leaf found at depth {found}, expected every leaf at depth {expected}")]
    UnevenLeafDepth { expected: usize, found: usize },
}

/// Result alias for tree construction.
pub type Result<T> = std::result::Result<T, BTreeError>;
