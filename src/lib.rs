//! Outline polygons and label anchors for territories claimed on a sparse
//! grid of integer cells.
//!
//! ```
//! use territory_geometry::{AnchorStrategy, Cell, CellSet, TerritoryGeometry};
//!
//! let cells: CellSet = [Cell::new(0, 0), Cell::new(1, 0), Cell::new(5, 5)].into();
//! let regions = TerritoryGeometry::default().compute_geometry(&cells, 64.0, AnchorStrategy::default());
//!
//! assert_eq!(regions.len(), 2);
//! assert_eq!(regions[0].cell_count, 2);
//! assert!(regions[0].polygon.is_closed());
//! ```

pub mod error;
pub mod geometry;
pub mod grid;
pub mod math;
pub mod operations;
mod params;
pub mod service;

pub use error::{ConfigError, Result, TerritoryError, TraceError};
pub use geometry::{Polygon, PolygonWithHoles};
pub use grid::{Cell, CellBounds, CellSet, Cluster, Territory};
pub use math::Vertex;
pub use operations::{
    partition, AnchorSelector, AnchorStrategy, BoundaryTracer, EnclosedHoleBuilder, HoleAwarePolygonBuilder,
    PolygonSimplifier,
};
pub use params::GeometryParams;
pub use service::{GeometryResult, LabelledRegion, TerritoryGeometry, TerritoryShape};
