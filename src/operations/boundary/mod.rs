mod lattice;
mod moore;

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::TraceError;
use crate::geometry::Polygon;
use crate::grid::Cluster;
use crate::math::Vertex;
use crate::params::GeometryParams;

use super::simplify::PolygonSimplifier;

/// Converts a cluster into a closed outline polygon.
///
/// The precise path supersamples the cluster, walks its outer contour and
/// simplifies the result. Any failure on that path is absorbed by falling
/// back to the cluster's bounding rectangle, so [`trace`](Self::trace)
/// always yields a valid ring. Holes are not emitted as separate rings.
#[derive(Debug, Clone, Copy)]
pub struct BoundaryTracer {
    params: GeometryParams,
    simplifier: PolygonSimplifier,
}

impl BoundaryTracer {
    /// Creates a tracer using the cell size, supersampling factor, trace cap
    /// and simplification tolerances from `params`.
    #[must_use]
    pub fn new(params: GeometryParams) -> Self {
        Self {
            params,
            simplifier: PolygonSimplifier::from_params(&params),
        }
    }

    #[must_use]
    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    /// Traces the cluster outline at the given elevation.
    #[must_use]
    pub fn trace(&self, cluster: &Cluster, elevation: f64) -> Polygon {
        match self.trace_precise(cluster, elevation) {
            Ok(polygon) => polygon,
            Err(err) => {
                warn!(
                    cells = cluster.len(),
                    error = %err,
                    "precise tracing failed, using bounding rectangle"
                );
                self.bounding_rectangle(cluster, elevation)
            }
        }
    }

    /// Supersampled contour trace without the fallback.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError`] if the walk dead-ends or the ring degenerates
    /// below a valid polygon.
    pub fn trace_precise(&self, cluster: &Cluster, elevation: f64) -> Result<Polygon, TraceError> {
        let grid = lattice::SubGrid::from_cells(cluster, self.params.subdivisions);
        let start = grid.start().ok_or(TraceError::EmptySubGrid)?;
        let walk = moore::walk(&grid, start, self.params.max_trace_points)?;

        if walk.truncated {
            warn!(
                cells = cluster.len(),
                cap = self.params.max_trace_points,
                "boundary walk hit the point cap, keeping partial outline"
            );
        }

        let distinct = walk.points.iter().collect::<HashSet<_>>().len();
        if distinct < 3 {
            return Err(TraceError::Degenerate { distinct });
        }

        let mut world: Vec<Vertex> = walk
            .points
            .iter()
            .map(|&p| self.sample_to_world(p, elevation))
            .collect();
        world.push(self.sample_to_world(start, elevation));

        let simplified = self.simplifier.simplify(&world);
        let kept = simplified.len();
        let polygon = Polygon::close(simplified).ok_or(TraceError::TooFewVertices(kept))?;

        debug!(
            cells = cluster.len(),
            raw = walk.points.len(),
            simplified = polygon.len(),
            "traced cluster outline"
        );
        Ok(polygon)
    }

    /// Axis-aligned rectangle around every cell of the cluster.
    #[must_use]
    pub fn bounding_rectangle(&self, cluster: &Cluster, elevation: f64) -> Polygon {
        let bounds = cluster.bounds();
        Polygon::rectangle(
            bounds.world_min(self.params.cell_size),
            bounds.world_max(self.params.cell_size),
            elevation,
        )
    }

    #[allow(clippy::cast_precision_loss)]
    fn sample_to_world(&self, (sx, sz): (i64, i64), elevation: f64) -> Vertex {
        let step = self.params.sub_cell_size();
        Vertex::new(sx as f64 * step, elevation, sz as f64 * step)
    }
}

impl Default for BoundaryTracer {
    fn default() -> Self {
        Self::new(GeometryParams::default())
    }
}
