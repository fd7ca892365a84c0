mod cell;
mod cluster;

use std::collections::BTreeSet;

pub use cell::Cell;
pub use cluster::{CellBounds, Cluster};

/// Ordered set of cells. Iteration is ascending by `(x, z)`, which keeps
/// every downstream computation deterministic.
pub type CellSet = BTreeSet<Cell>;

/// A named owner of zero or more claimed cells, possibly disconnected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Territory {
    pub name: String,
    pub cells: CellSet,
}

impl Territory {
    /// Creates a territory from any iterator of cells.
    #[must_use]
    pub fn new(name: impl Into<String>, cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            name: name.into(),
            cells: cells.into_iter().collect(),
        }
    }

    /// Adds a cell; returns `false` if it was already claimed.
    pub fn claim(&mut self, cell: Cell) -> bool {
        self.cells.insert(cell)
    }

    /// Removes a cell; returns `false` if it was not claimed.
    pub fn release(&mut self, cell: Cell) -> bool {
        self.cells.remove(&cell)
    }
}
