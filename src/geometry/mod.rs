mod polygon;

pub use polygon::{Polygon, PolygonWithHoles, MIN_RING_VERTICES};
