use std::collections::{BTreeSet, VecDeque};

use crate::grid::{Cell, CellSet, Cluster};

/// Splits a cell set into maximal 4-connected clusters.
///
/// Clusters are sorted by descending cell count; equal sizes are ordered by
/// their smallest cell. An empty input yields no clusters.
#[must_use]
pub fn partition(cells: &CellSet) -> Vec<Cluster> {
    let mut visited: BTreeSet<Cell> = BTreeSet::new();
    let mut clusters = Vec::new();

    for &seed in cells {
        if visited.contains(&seed) {
            continue;
        }
        let region = flood_fill(seed, cells, &mut visited);
        if let Some(cluster) = Cluster::new(region) {
            clusters.push(cluster);
        }
    }

    clusters.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.first().cmp(&b.first())));
    clusters
}

/// Breadth-first fill over orthogonal neighbours, bounded by `cells`.
fn flood_fill(seed: Cell, cells: &CellSet, visited: &mut BTreeSet<Cell>) -> CellSet {
    let mut region = CellSet::new();
    let mut queue = VecDeque::from([seed]);
    visited.insert(seed);

    while let Some(cell) = queue.pop_front() {
        region.insert(cell);
        for n in cell.neighbours4() {
            if cells.contains(&n) && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }

    region
}
