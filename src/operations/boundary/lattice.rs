use std::collections::HashSet;

use crate::grid::Cell;

/// Supersampled occupancy of a cluster.
///
/// Every cell contributes the closed `(N + 1) x (N + 1)` block of sample
/// points `(x * N + i, z * N + j)` for `i, j` in `0..=N`. Neighbouring cells
/// share their edge samples, so the outermost samples sit exactly on the
/// cells' outer edges.
#[derive(Debug, Clone)]
pub(crate) struct SubGrid {
    samples: HashSet<(i64, i64)>,
}

impl SubGrid {
    pub(crate) fn from_cells<'a>(cells: impl IntoIterator<Item = &'a Cell>, subdivisions: u32) -> Self {
        let n = i64::from(subdivisions.max(1));
        let mut samples = HashSet::new();
        for cell in cells {
            let base_x = i64::from(cell.x) * n;
            let base_z = i64::from(cell.z) * n;
            for i in 0..=n {
                for j in 0..=n {
                    samples.insert((base_x + i, base_z + j));
                }
            }
        }
        Self { samples }
    }

    pub(crate) fn contains(&self, sample: (i64, i64)) -> bool {
        self.samples.contains(&sample)
    }

    /// Sample with minimum x, ties broken by minimum z.
    pub(crate) fn start(&self) -> Option<(i64, i64)> {
        self.samples.iter().copied().min()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.samples.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_has_closed_block() {
        let grid = SubGrid::from_cells(&[Cell::new(0, 0)], 4);
        assert_eq!(grid.len(), 25);
        assert!(grid.contains((0, 0)));
        assert!(grid.contains((4, 4)));
        assert!(!grid.contains((5, 4)));
        assert_eq!(grid.start(), Some((0, 0)));
    }

    #[test]
    fn adjacent_cells_share_edge_samples() {
        let grid = SubGrid::from_cells(&[Cell::new(0, 0), Cell::new(1, 0)], 4);
        assert_eq!(grid.len(), 45);
    }

    #[test]
    fn start_prefers_min_x_then_min_z() {
        let grid = SubGrid::from_cells(&[Cell::new(0, 3), Cell::new(0, -2), Cell::new(1, -5)], 4);
        assert_eq!(grid.start(), Some((0, -8)));
    }

    #[test]
    fn empty_grid_has_no_start() {
        let grid = SubGrid::from_cells(std::iter::empty::<&Cell>(), 4);
        assert_eq!(grid.start(), None);
    }
}
