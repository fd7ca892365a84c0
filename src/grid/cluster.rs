use std::collections::btree_set;

use super::{Cell, CellSet};

/// A non-empty set of cells, normally one maximal 4-connected region
/// produced by [`partition`](crate::operations::partition).
///
/// Non-emptiness is enforced at construction; connectivity is the
/// partitioner's responsibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    cells: CellSet,
}

impl Cluster {
    /// Wraps a cell set, returning `None` if it is empty.
    #[must_use]
    pub fn new(cells: CellSet) -> Option<Self> {
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    #[must_use]
    pub fn cells(&self) -> &CellSet {
        &self.cells
    }

    #[must_use]
    pub fn contains(&self, cell: &Cell) -> bool {
        self.cells.contains(cell)
    }

    /// Iterates cells in ascending `(x, z)` order.
    pub fn iter(&self) -> btree_set::Iter<'_, Cell> {
        self.cells.iter()
    }

    /// The lexicographically smallest cell.
    #[must_use]
    pub fn first(&self) -> Cell {
        // Non-empty by construction; the default is unreachable.
        self.cells.first().copied().unwrap_or_default()
    }

    /// Inclusive cell-coordinate bounds.
    #[must_use]
    pub fn bounds(&self) -> CellBounds {
        let first = self.first();
        let mut b = CellBounds {
            min_x: first.x,
            max_x: first.x,
            min_z: first.z,
            max_z: first.z,
        };
        for c in &self.cells {
            b.min_x = b.min_x.min(c.x);
            b.max_x = b.max_x.max(c.x);
            b.min_z = b.min_z.min(c.z);
            b.max_z = b.max_z.max(c.z);
        }
        b
    }

    /// Whether `cell` is missing at least one orthogonal neighbour.
    ///
    /// Cells on the `i32` range limit always count as edge cells.
    #[must_use]
    pub fn is_edge_cell(&self, cell: Cell) -> bool {
        cell.neighbours4().filter(|n| self.cells.contains(n)).count() < 4
    }
}

impl<'a> IntoIterator for &'a Cluster {
    type Item = &'a Cell;
    type IntoIter = btree_set::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Inclusive min/max cell coordinates of a cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_z: i32,
    pub max_z: i32,
}

impl CellBounds {
    /// World-space minimum corner `(x, z)`.
    #[must_use]
    pub fn world_min(&self, cell_size: f64) -> (f64, f64) {
        (
            f64::from(self.min_x) * cell_size,
            f64::from(self.min_z) * cell_size,
        )
    }

    /// World-space maximum corner `(x, z)`: the far edge of the last cell.
    #[must_use]
    pub fn world_max(&self, cell_size: f64) -> (f64, f64) {
        (
            (f64::from(self.max_x) + 1.0) * cell_size,
            (f64::from(self.max_z) + 1.0) * cell_size,
        )
    }
}
