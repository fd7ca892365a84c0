use std::collections::{HashMap, VecDeque};

use crate::grid::{Cell, Cluster};
use crate::math::Vertex;
use crate::params::GeometryParams;

/// How a cluster's label anchor is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnchorStrategy {
    /// Center of the cell farthest (in steps) from any missing neighbour.
    #[default]
    FarthestInterior,
    /// Midpoint of the cluster's world bounding box. Can land in a hole.
    HullCentroid,
    /// Center of the lexicographically smallest cell.
    FirstCellCenter,
}

/// Picks a single label position inside a cluster.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorSelector {
    cell_size: f64,
}

impl AnchorSelector {
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self { cell_size }
    }

    #[must_use]
    pub fn from_params(params: &GeometryParams) -> Self {
        Self::new(params.cell_size)
    }

    /// Returns the anchor for `cluster` under `strategy`.
    #[must_use]
    pub fn select(&self, cluster: &Cluster, strategy: AnchorStrategy, elevation: f64) -> Vertex {
        match strategy {
            AnchorStrategy::FarthestInterior => self.farthest_interior(cluster, elevation),
            AnchorStrategy::HullCentroid => self.hull_centroid(cluster, elevation),
            AnchorStrategy::FirstCellCenter => cluster.first().center(self.cell_size, elevation),
        }
    }

    fn hull_centroid(&self, cluster: &Cluster, elevation: f64) -> Vertex {
        let bounds = cluster.bounds();
        let (min_x, min_z) = bounds.world_min(self.cell_size);
        let (max_x, max_z) = bounds.world_max(self.cell_size);
        Vertex::new((min_x + max_x) * 0.5, elevation, (min_z + max_z) * 0.5)
    }

    fn farthest_interior(&self, cluster: &Cluster, elevation: f64) -> Vertex {
        let best = interior_distances(cluster)
            .into_iter()
            .fold(None::<(Cell, u32)>, |best, (cell, d)| match best {
                Some((_, bd)) if d <= bd => best,
                _ => Some((cell, d)),
            })
            .map_or_else(|| cluster.first(), |(cell, _)| cell);
        best.center(self.cell_size, elevation)
    }
}

impl Default for AnchorSelector {
    fn default() -> Self {
        Self::from_params(&GeometryParams::default())
    }
}

/// Step distance from the cluster's edge for every reachable cell, in BFS
/// discovery order.
///
/// Edge cells (missing an orthogonal neighbour) are seeded at distance 0 in
/// ascending `(x, z)` order. Empty only if no edge cell exists.
#[must_use]
pub fn interior_distances(cluster: &Cluster) -> Vec<(Cell, u32)> {
    let mut dist: HashMap<Cell, u32> = HashMap::with_capacity(cluster.len());
    let mut order = Vec::with_capacity(cluster.len());
    let mut queue = VecDeque::new();

    for &cell in cluster {
        if cluster.is_edge_cell(cell) {
            dist.insert(cell, 0);
            order.push((cell, 0));
            queue.push_back(cell);
        }
    }

    while let Some(cell) = queue.pop_front() {
        let d = dist.get(&cell).copied().unwrap_or_default();
        for n in cell.neighbours4() {
            if cluster.contains(&n) && !dist.contains_key(&n) {
                dist.insert(n, d + 1);
                order.push((n, d + 1));
                queue.push_back(n);
            }
        }
    }

    order
}
