pub mod planar;

/// World-space vertex: `x` and `z` span the map plane, `y` carries elevation.
pub type Vertex = nalgebra::Point3<f64>;
