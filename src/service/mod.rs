mod labels;

use std::fmt;

use tracing::debug;

use crate::error::Result;
use crate::geometry::Polygon;
use crate::grid::{CellSet, Cluster, Territory};
use crate::math::Vertex;
use crate::operations::{partition, AnchorSelector, AnchorStrategy, BoundaryTracer, HoleAwarePolygonBuilder};
use crate::params::GeometryParams;

pub use labels::{label_marker, region_label};

/// Outline, holes and label anchor for one connected cluster.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryResult {
    /// Closed outer ring.
    pub polygon: Polygon,
    /// Hole rings; empty unless a hole-aware builder produced them.
    pub holes: Vec<Polygon>,
    pub anchor: Vertex,
    /// Number of cells in the source cluster.
    pub cell_count: usize,
}

/// A [`GeometryResult`] paired with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelledRegion {
    pub label: String,
    pub geometry: GeometryResult,
}

/// All regions of one territory, largest first.
#[derive(Debug, Clone, PartialEq)]
pub struct TerritoryShape {
    pub name: String,
    pub regions: Vec<LabelledRegion>,
}

impl TerritoryShape {
    /// The largest region, if the territory has any cells.
    #[must_use]
    pub fn primary(&self) -> Option<&LabelledRegion> {
        self.regions.first()
    }
}

/// Computes territory outlines and label anchors.
///
/// Stateless between calls: the same inputs always give the same output,
/// and a shared instance may be used from several threads at once.
pub struct TerritoryGeometry {
    params: GeometryParams,
    tracer: BoundaryTracer,
    anchors: AnchorSelector,
    hole_builder: Option<Box<dyn HoleAwarePolygonBuilder>>,
}

impl TerritoryGeometry {
    /// Creates the service after validating `params`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any parameter is out of range.
    pub fn new(params: GeometryParams) -> Result<Self> {
        params.validate()?;
        Ok(Self::with_valid_params(params))
    }

    fn with_valid_params(params: GeometryParams) -> Self {
        Self {
            params,
            tracer: BoundaryTracer::new(params),
            anchors: AnchorSelector::from_params(&params),
            hole_builder: None,
        }
    }

    /// Installs a hole-aware builder, consulted before the plain tracer.
    #[must_use]
    pub fn with_hole_builder(mut self, builder: impl HoleAwarePolygonBuilder + 'static) -> Self {
        self.hole_builder = Some(Box::new(builder));
        self
    }

    #[must_use]
    pub fn params(&self) -> &GeometryParams {
        &self.params
    }

    /// Partitions `cells` and returns one result per cluster, largest first.
    #[must_use]
    pub fn compute_geometry(
        &self,
        cells: &CellSet,
        elevation: f64,
        strategy: AnchorStrategy,
    ) -> Vec<GeometryResult> {
        let clusters = partition(cells);
        debug!(
            cells = cells.len(),
            clusters = clusters.len(),
            ?strategy,
            "computing territory geometry"
        );
        clusters
            .iter()
            .map(|cluster| self.cluster_geometry(cluster, elevation, strategy))
            .collect()
    }

    /// Like [`compute_geometry`](Self::compute_geometry) for a named
    /// territory, attaching a display label to each region.
    #[must_use]
    pub fn compute_territory(
        &self,
        territory: &Territory,
        elevation: f64,
        strategy: AnchorStrategy,
    ) -> TerritoryShape {
        let results = self.compute_geometry(&territory.cells, elevation, strategy);
        let total = results.len();
        let regions = results
            .into_iter()
            .enumerate()
            .map(|(i, geometry)| LabelledRegion {
                label: region_label(&territory.name, i, total),
                geometry,
            })
            .collect();
        TerritoryShape {
            name: territory.name.clone(),
            regions,
        }
    }

    fn cluster_geometry(&self, cluster: &Cluster, elevation: f64, strategy: AnchorStrategy) -> GeometryResult {
        let built = self
            .hole_builder
            .as_ref()
            .and_then(|b| b.build(cluster, elevation, &self.params));
        let (polygon, holes) = match built {
            Some(shape) => (shape.outer, shape.holes),
            None => (self.tracer.trace(cluster, elevation), Vec::new()),
        };
        GeometryResult {
            polygon,
            holes,
            anchor: self.anchors.select(cluster, strategy, elevation),
            cell_count: cluster.len(),
        }
    }
}

impl Default for TerritoryGeometry {
    fn default() -> Self {
        Self::with_valid_params(GeometryParams::default())
    }
}

impl fmt::Debug for TerritoryGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerritoryGeometry")
            .field("params", &self.params)
            .field("hole_builder", &self.hole_builder.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TerritoryError;
    use crate::grid::Cell;
    use crate::operations::EnclosedHoleBuilder;

    const Y: f64 = 64.0;

    fn set(cells: impl IntoIterator<Item = (i32, i32)>) -> CellSet {
        cells.into_iter().map(Cell::from).collect()
    }

    #[test]
    fn empty_input_gives_no_results() {
        let out = TerritoryGeometry::default().compute_geometry(&CellSet::new(), Y, AnchorStrategy::default());
        assert!(out.is_empty());
    }

    #[test]
    fn results_are_largest_first() {
        let cells = set([(0, 0), (20, 20), (21, 20), (22, 20), (40, 0), (40, 1)]);
        let out = TerritoryGeometry::default().compute_geometry(&cells, Y, AnchorStrategy::FarthestInterior);
        let sizes: Vec<_> = out.iter().map(|r| r.cell_count).collect();
        assert_eq!(sizes, vec![3, 2, 1]);
        for r in &out {
            assert!(r.polygon.is_closed());
            assert!(r.polygon.contains_point(r.anchor.x, r.anchor.z));
            assert!(r.holes.is_empty());
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let cells = set((0..6).flat_map(|x| (0..4).map(move |z| (x, z))).filter(|&c| c != (2, 2)));
        let svc = TerritoryGeometry::default();
        let a = svc.compute_geometry(&cells, Y, AnchorStrategy::FarthestInterior);
        let b = svc.compute_geometry(&cells, Y, AnchorStrategy::FarthestInterior);
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let params = GeometryParams {
            subdivisions: 0,
            ..GeometryParams::default()
        };
        assert!(matches!(
            TerritoryGeometry::new(params),
            Err(TerritoryError::Config(_))
        ));
    }

    #[test]
    fn hole_builder_adds_hole_rings() {
        let cells = set((0..3).flat_map(|x| (0..3).map(move |z| (x, z))).filter(|&c| c != (1, 1)));
        let svc = TerritoryGeometry::default().with_hole_builder(EnclosedHoleBuilder);
        let out = svc.compute_geometry(&cells, Y, AnchorStrategy::FarthestInterior);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].holes.len(), 1);
        assert_eq!(out[0].polygon.bounds(), ((0.0, 0.0), (48.0, 48.0)));
    }

    #[derive(Debug)]
    struct Declines;

    impl HoleAwarePolygonBuilder for Declines {
        fn build(&self, _: &Cluster, _: f64, _: &GeometryParams) -> Option<crate::geometry::PolygonWithHoles> {
            None
        }
    }

    #[test]
    fn declining_builder_falls_back_to_tracer() {
        let cells = set([(0, 0), (1, 0)]);
        let plain = TerritoryGeometry::default().compute_geometry(&cells, Y, AnchorStrategy::HullCentroid);
        let declined = TerritoryGeometry::default()
            .with_hole_builder(Declines)
            .compute_geometry(&cells, Y, AnchorStrategy::HullCentroid);
        assert_eq!(plain, declined);
    }

    #[test]
    fn territory_regions_are_labelled() {
        let t = Territory::new("Oakvale", [Cell::new(0, 0), Cell::new(1, 0), Cell::new(9, 9)]);
        let shape = TerritoryGeometry::default().compute_territory(&t, Y, AnchorStrategy::FirstCellCenter);
        let labels: Vec<_> = shape.regions.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Oakvale #1", "Oakvale #2"]);
        assert_eq!(shape.primary().unwrap().geometry.cell_count, 2);
    }

    #[test]
    fn single_region_territory_uses_bare_name() {
        let t = Territory::new("Oakvale", [Cell::new(0, 0)]);
        let shape = TerritoryGeometry::default().compute_territory(&t, Y, AnchorStrategy::FirstCellCenter);
        assert_eq!(shape.regions.len(), 1);
        assert_eq!(shape.regions[0].label, "Oakvale");
    }
}
