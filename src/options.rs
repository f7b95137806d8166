use crate::error::{BTreeError, Result};

/// Smallest minimum degree a B-tree can have (a 2-3-4 tree).
pub const MIN_DEGREE_FLOOR: usize = 2;

/// Construction options for a [`BTree`](crate::BTree).
///
/// With minimum degree `t`, every node other than the root holds between
/// `t - 1` and `2t - 1` keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BTreeOptions {
    pub min_degree: usize,
}

impl Default for BTreeOptions {
    fn default() -> Self {
        BTreeOptions { min_degree: MIN_DEGREE_FLOOR }
    }
}

impl BTreeOptions {
    pub fn with_min_degree(mut self, min_degree: usize) -> Self {
        self.min_degree = min_degree;
        self
    }

    /// Rejects a minimum degree below 2.
    pub fn validate(&self) -> Result<()> {
        if self.min_degree < MIN_DEGREE_FLOOR {
            return Err(BTreeError::InvalidMinDegree(self.min_degree));
        }
        Ok(())
    }
}
