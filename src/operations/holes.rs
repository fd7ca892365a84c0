use std::collections::{HashSet, VecDeque};

use crate::geometry::PolygonWithHoles;
use crate::grid::{Cell, CellSet, Cluster};
use crate::params::GeometryParams;

use super::boundary::BoundaryTracer;
use super::partition::partition;

/// Optional capability that produces an outline together with hole rings.
///
/// Returning `None` declines the cluster; callers then use
/// [`BoundaryTracer`] on its own.
pub trait HoleAwarePolygonBuilder: Send + Sync {
    fn build(&self, cluster: &Cluster, elevation: f64, params: &GeometryParams) -> Option<PolygonWithHoles>;
}

/// Built-in hole-aware builder.
///
/// The outer ring comes from [`BoundaryTracer`]. Unclaimed cells inside the
/// cluster's bounding box that cannot reach the box's one-cell margin
/// through 4-connected unclaimed cells are holes; each 4-connected group of
/// them is traced with the same tracer and returned as a hole ring,
/// largest first.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnclosedHoleBuilder;

impl HoleAwarePolygonBuilder for EnclosedHoleBuilder {
    fn build(&self, cluster: &Cluster, elevation: f64, params: &GeometryParams) -> Option<PolygonWithHoles> {
        let tracer = BoundaryTracer::new(*params);
        let outer = tracer.trace(cluster, elevation);
        let holes = enclosed_holes(cluster)
            .iter()
            .map(|hole| tracer.trace(hole, elevation))
            .collect();
        Some(PolygonWithHoles { outer, holes })
    }
}

/// Groups of unclaimed cells fully enclosed by `cluster`.
#[must_use]
pub fn enclosed_holes(cluster: &Cluster) -> Vec<Cluster> {
    let bounds = cluster.bounds();
    let (min_x, max_x) = (i64::from(bounds.min_x) - 1, i64::from(bounds.max_x) + 1);
    let (min_z, max_z) = (i64::from(bounds.min_z) - 1, i64::from(bounds.max_z) + 1);

    let claimed = |x: i64, z: i64| {
        match (i32::try_from(x), i32::try_from(z)) {
            (Ok(x), Ok(z)) => cluster.contains(&Cell::new(x, z)),
            _ => false,
        }
    };

    // The margin ring is unclaimed and connected, so one seed reaches it all.
    let seed = (min_x, min_z);
    let mut outside: HashSet<(i64, i64)> = HashSet::from([seed]);
    let mut queue = VecDeque::from([seed]);
    // Diagonally touching cells share a corner sample in the traced outline,
    // so a diagonal gap does not connect to the outside.
    while let Some((x, z)) = queue.pop_front() {
        for (nx, nz) in [(x + 1, z), (x - 1, z), (x, z + 1), (x, z - 1)] {
            if nx < min_x || nx > max_x || nz < min_z || nz > max_z {
                continue;
            }
            if !claimed(nx, nz) && outside.insert((nx, nz)) {
                queue.push_back((nx, nz));
            }
        }
    }

    let mut holes = CellSet::new();
    for x in bounds.min_x..=bounds.max_x {
        for z in bounds.min_z..=bounds.max_z {
            let cell = Cell::new(x, z);
            if !cluster.contains(&cell) && !outside.contains(&(i64::from(x), i64::from(z))) {
                holes.insert(cell);
            }
        }
    }
    partition(&holes)
}
